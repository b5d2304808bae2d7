// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Complete record definition.

use darling::FromDeriveInput;
use syn::{DeriveInput, Ident};

use super::{FieldDef, RecordAttrs, RenameRule};

/// How the record finds its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// `#[record(table = "...")]`
    Direct(String),

    /// `#[record(mapping = "...")]`
    Mapped(String),

    /// Neither declared.
    Unbound
}

/// Parsed `#[derive(Record)]` input.
#[derive(Debug)]
pub struct RecordDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Table binding.
    pub binding: Binding,

    /// Column naming rule.
    pub rename_all: Option<RenameRule>,

    /// Persisted fields, in declaration order, without the parent field.
    pub fields: Vec<FieldDef>,

    /// Field holding the inherited record.
    pub parent: Option<FieldDef>
}

impl RecordDef {
    /// Parse and validate a record definition.
    ///
    /// # Errors
    ///
    /// - applied to an enum, union, tuple or unit struct
    /// - generic structs
    /// - both `table` and `mapping` declared, or either one empty
    /// - more than one `#[id]` or `#[parent]` field
    /// - malformed field attributes
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = RecordAttrs::from_derive_input(input)?;

        if let Some(param) = attrs.generics.params.first() {
            return Err(
                darling::Error::custom("Record cannot be derived for generic structs")
                    .with_span(param)
            );
        }

        let binding = match (attrs.table, attrs.mapping) {
            (Some(_), Some(_)) => {
                return Err(darling::Error::custom(
                    "declare either `table` or `mapping`, not both"
                )
                .with_span(&attrs.ident));
            }
            (Some(table), None) => Binding::Direct(non_empty(table, "table", &attrs.ident)?),
            (None, Some(key)) => Binding::Mapped(non_empty(key, "mapping", &attrs.ident)?),
            (None, None) => Binding::Unbound
        };

        let parsed: Vec<FieldDef> = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(FieldDef::from_field)
                    .collect::<darling::Result<Vec<_>>>()?,
                _ => {
                    return Err(darling::Error::custom("Record requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Record can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let mut fields = Vec::with_capacity(parsed.len());
        let mut parent: Option<FieldDef> = None;
        for field in parsed {
            if !field.is_parent {
                fields.push(field);
            } else if parent.is_some() {
                return Err(darling::Error::custom(
                    "only one #[parent] field is allowed per record"
                )
                .with_span(&field.ident));
            } else {
                parent = Some(field);
            }
        }

        if let Some(second) = fields.iter().filter(|f| f.is_id).nth(1) {
            return Err(
                darling::Error::custom("only one #[id] field is allowed per record")
                    .with_span(&second.ident)
            );
        }

        Ok(Self {
            ident: attrs.ident,
            binding,
            rename_all: attrs.rename_all,
            fields,
            parent
        })
    }

    /// Resolved column override of `field`, if any.
    ///
    /// An explicit `#[column(name)]` wins; otherwise `rename_all` applies.
    #[must_use]
    pub fn column_override(&self, field: &FieldDef) -> Option<String> {
        field.column.name.clone().or_else(|| {
            self.rename_all
                .map(|rule| rule.apply(&field.name_str()))
        })
    }
}

fn non_empty(value: String, option: &str, ident: &Ident) -> darling::Result<String> {
    if value.trim().is_empty() {
        return Err(
            darling::Error::custom(format!("`{option}` must not be empty")).with_span(ident)
        );
    }
    Ok(value)
}
