// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level `#[record(...)]` attributes.
//!
//! | Option | Example | Effect |
//! |--------|---------|--------|
//! | `table` | `table = "orders"` | Direct table binding |
//! | `mapping` | `mapping = "order_flow"` | Table resolved through the mapping table |
//! | `rename_all` | `rename_all = "camelCase"` | Derive column names from field names |

use convert_case::{Case, Casing};
use darling::{FromDeriveInput, FromMeta};
use syn::{Generics, Ident};

/// Column naming rule applied to fields without an explicit column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// `customer_name`
    Snake,

    /// `customerName`
    Camel,

    /// `CustomerName`
    Pascal,

    /// `CUSTOMER_NAME`
    ScreamingSnake,

    /// `customername`
    Lower,

    /// `CUSTOMERNAME`
    Upper
}

impl RenameRule {
    /// Apply the rule to a field name.
    #[must_use]
    pub fn apply(&self, field: &str) -> String {
        let case = match self {
            Self::Snake => Case::Snake,
            Self::Camel => Case::Camel,
            Self::Pascal => Case::Pascal,
            Self::ScreamingSnake => Case::UpperSnake,
            Self::Lower => Case::Flat,
            Self::Upper => Case::UpperFlat
        };
        field.to_case(case)
    }
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "snake_case" => Ok(Self::Snake),
            "camelCase" => Ok(Self::Camel),
            "PascalCase" => Ok(Self::Pascal),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            "lowercase" => Ok(Self::Lower),
            "UPPERCASE" => Ok(Self::Upper),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}

/// Struct-level attributes parsed from `#[record(...)]`.
///
/// Internal to darling parsing; [`RecordDef`](super::RecordDef) combines
/// these with the parsed fields.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(record), supports(struct_named))]
pub struct RecordAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics, rejected during validation.
    pub generics: Generics,

    /// Direct table name.
    #[darling(default)]
    pub table: Option<String>,

    /// Mapping-table key.
    #[darling(default)]
    pub mapping: Option<String>,

    /// Column naming rule.
    #[darling(default)]
    pub rename_all: Option<RenameRule>
}
