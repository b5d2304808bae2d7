// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attributes.
//!
//! | Attribute | Effect |
//! |-----------|--------|
//! | `#[column(name = "cust_name")]` | Explicit column name |
//! | `#[id]` | Marks the id attribute |
//! | `#[parent]` | Field is a record whose attributes are inherited |

use syn::{Attribute, Field, Ident, Meta, Type, ext::IdentExt};

/// Column configuration parsed from `#[column(...)]`.
#[derive(Debug, Clone, Default)]
pub struct ColumnConfig {
    /// Custom column name. Defaults to the field name.
    pub name: Option<String>
}

impl ColumnConfig {
    /// Parse column config from a `#[column(...)]` attribute.
    ///
    /// # Errors
    ///
    /// Unknown options, a missing value, or an empty name.
    pub fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        let mut config = Self::default();

        let Meta::List(meta_list) = &attr.meta else {
            return Err(darling::Error::custom("expected `#[column(name = \"...\")]`")
                .with_span(attr));
        };
        meta_list.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: syn::LitStr = meta.value()?.parse()?;
                if value.value().trim().is_empty() {
                    return Err(meta.error("column name must not be empty"));
                }
                config.name = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unknown column option, expected `name`"))
            }
        })?;

        Ok(config)
    }
}

/// One named field of a record struct.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Field type.
    pub ty: Type,

    /// Column configuration.
    pub column: ColumnConfig,

    /// Marked `#[id]`.
    pub is_id: bool,

    /// Marked `#[parent]`.
    pub is_parent: bool
}

impl FieldDef {
    /// Parse a field definition.
    ///
    /// # Errors
    ///
    /// - the field has no identifier (tuple struct field)
    /// - a malformed `#[column]`
    /// - `#[parent]` combined with `#[id]` or `#[column]`
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Record fields must be named").with_span(field)
        })?;

        let mut column = ColumnConfig::default();
        let mut has_column = false;
        let mut is_id = false;
        let mut is_parent = false;

        for attr in &field.attrs {
            if attr.path().is_ident("id") {
                is_id = true;
            } else if attr.path().is_ident("parent") {
                is_parent = true;
            } else if attr.path().is_ident("column") {
                column = ColumnConfig::from_attr(attr)?;
                has_column = true;
            }
        }

        if is_parent && (is_id || has_column) {
            return Err(darling::Error::custom(
                "#[parent] field cannot also carry #[id] or #[column]"
            )
            .with_span(&ident));
        }

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            column,
            is_id,
            is_parent
        })
    }

    /// Attribute identifier: the field name without any `r#` prefix.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.unraw().to_string()
    }
}
