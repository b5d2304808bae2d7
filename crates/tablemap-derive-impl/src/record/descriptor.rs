// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `record_type()` generation.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! fn record_type() -> &'static ::tablemap::__private::RecordType {
//!     static TYPE: ::tablemap::__private::RecordType = ::tablemap::__private::RecordType::new(
//!         "Order",
//!         ::tablemap::__private::TableBinding::Direct("orders"),
//!         &[
//!             ::tablemap::__private::Attribute::new("id"),
//!             ::tablemap::__private::Attribute::new("customer_name").with_column("cust_name"),
//!         ]
//!     )
//!     .extends(<Audit as ::tablemap::__private::Record>::record_type);
//!     &TYPE
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{Binding, FieldDef, RecordDef};

/// Generate the `record_type` method.
pub fn generate(record: &RecordDef) -> TokenStream {
    let name = record.ident.to_string();
    let binding = binding(&record.binding);
    let attributes = record.fields.iter().map(|f| attribute(record, f));
    let extends = record.parent.as_ref().map(|parent| {
        let ty = &parent.ty;
        quote! { .extends(<#ty as ::tablemap::__private::Record>::record_type) }
    });

    quote! {
        fn record_type() -> &'static ::tablemap::__private::RecordType {
            static TYPE: ::tablemap::__private::RecordType = ::tablemap::__private::RecordType::new(
                #name,
                #binding,
                &[#(#attributes),*]
            )
            #extends;
            &TYPE
        }
    }
}

fn binding(binding: &Binding) -> TokenStream {
    match binding {
        Binding::Direct(table) => quote! { ::tablemap::__private::TableBinding::Direct(#table) },
        Binding::Mapped(key) => quote! { ::tablemap::__private::TableBinding::Mapped(#key) },
        Binding::Unbound => quote! { ::tablemap::__private::TableBinding::Unbound }
    }
}

fn attribute(record: &RecordDef, field: &FieldDef) -> TokenStream {
    let name = field.name_str();
    let column = record
        .column_override(field)
        .map(|column| quote! { .with_column(#column) });
    let primary = field.is_id.then(|| quote! { .primary() });
    quote! { ::tablemap::__private::Attribute::new(#name) #column #primary }
}
