// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! record.rs (orchestrator)
//! │
//! ├── parse/         → Attribute parsing (RecordDef, FieldDef)
//! │
//! ├── descriptor.rs  → record_type(): static RecordType descriptor
//! └── access.rs      → get/set match arms, parent fallback
//! ```
//!
//! # Generated Code
//!
//! For a record like:
//!
//! ```rust,ignore
//! #[derive(Debug, Default, Record)]
//! #[record(table = "orders")]
//! pub struct Order {
//!     pub id: Option<i64>,
//!     #[column(name = "cust_name")]
//!     pub customer_name: Option<String>,
//!     #[parent]
//!     pub audit: Audit,
//! }
//! ```
//!
//! The macro generates a single `impl ::tablemap::__private::Record for Order`
//! containing `record_type`, `get` and `set`.

mod access;
mod descriptor;
pub mod parse;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::RecordDef;

/// Main entry point for the Record derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match RecordDef::from_derive_input(&input) {
        Ok(record) => generate(&record).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(record: &RecordDef) -> proc_macro2::TokenStream {
    let ident = &record.ident;
    let descriptor = descriptor::generate(record);
    let access = access::generate(record);

    quote! {
        #[automatically_derived]
        impl ::tablemap::__private::Record for #ident {
            #descriptor
            #access
        }
    }
}
