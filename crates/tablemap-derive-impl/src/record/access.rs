// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `get` and `set` generation.
//!
//! One match arm per own attribute. Unknown identifiers fall through to the
//! `#[parent]` field when there is one.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::RecordDef;

/// Generate the `get` and `set` methods.
pub fn generate(record: &RecordDef) -> TokenStream {
    let get = generate_get(record);
    let set = generate_set(record);

    quote! {
        #get
        #set
    }
}

fn generate_get(record: &RecordDef) -> TokenStream {
    let arms = record.fields.iter().map(|field| {
        let ident = &field.ident;
        let name = field.name_str();
        quote! {
            #name => ::core::option::Option::Some(
                ::tablemap::__private::FieldValue::to_value(&self.#ident)
            ),
        }
    });

    let fallback = match &record.parent {
        Some(parent) => {
            let ident = &parent.ident;
            quote! { _ => ::tablemap::__private::Record::get(&self.#ident, attribute) }
        }
        None => quote! { _ => ::core::option::Option::None }
    };

    quote! {
        fn get(&self, attribute: &str) -> ::core::option::Option<::tablemap::__private::Value> {
            match attribute {
                #(#arms)*
                #fallback
            }
        }
    }
}

fn generate_set(record: &RecordDef) -> TokenStream {
    let arms = record.fields.iter().map(|field| {
        let ident = &field.ident;
        let ty = &field.ty;
        let name = field.name_str();
        quote! {
            #name => {
                self.#ident = <#ty as ::tablemap::__private::FieldValue>::from_text(text)
                    .map_err(|reason| ::tablemap::__private::DecodeError::new(attribute, text, reason))?;
                ::core::result::Result::Ok(true)
            }
        }
    });

    let fallback = match &record.parent {
        Some(parent) => {
            let ident = &parent.ident;
            quote! { _ => ::tablemap::__private::Record::set(&mut self.#ident, attribute, text) }
        }
        None => quote! { _ => ::core::result::Result::Ok(false) }
    };

    quote! {
        fn set(
            &mut self,
            attribute: &str,
            text: ::core::option::Option<&str>
        ) -> ::core::result::Result<bool, ::tablemap::__private::DecodeError> {
            match attribute {
                #(#arms)*
                #fallback
            }
        }
    }
}
