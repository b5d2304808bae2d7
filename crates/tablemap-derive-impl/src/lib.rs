// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ## Struct-Level `#[record(...)]`
//!
//! ```rust,ignore
//! #[derive(Default, Record)]
//! #[record(
//!     table = "orders",         // Direct table name
//!     // mapping = "order_flow", // or: key resolved through the mapping table
//!     rename_all = "camelCase"  // Optional: derive column names from fields
//! )]
//! pub struct Order { /* ... */ }
//! ```
//!
//! ## Field-Level Attributes
//!
//! ```rust,ignore
//! pub struct Order {
//!     #[id]                              // Id attribute (default: field named `id`)
//!     pub id: Option<i64>,
//!
//!     #[column(name = "cust_name")]      // Explicit column name
//!     pub customer_name: Option<String>,
//!
//!     #[parent]                          // Inherit Audit's attributes
//!     pub audit: Audit,
//! }
//! ```

mod record;

use proc_macro::TokenStream;

/// Derive macro implementing `tablemap::Record` for a named struct.
///
/// # Overview
///
/// The generated impl carries a static attribute descriptor and
/// identifier-keyed `get`/`set` accessors, which is everything the
/// `DataSource` engine needs to build SQL from the struct and to
/// materialize rows into it.
///
/// The struct must also implement `Default`, and every persisted field
/// must implement `tablemap::FieldValue`.
///
/// # Struct Attributes
///
/// | Attribute | Required | Description |
/// |-----------|----------|-------------|
/// | `table` | No | Fixed table name |
/// | `mapping` | No | Mapping-table key; the table is looked up per call |
/// | `rename_all` | No | `snake_case`, `camelCase`, `PascalCase`, `SCREAMING_SNAKE_CASE`, `lowercase`, `UPPERCASE` |
///
/// `table` and `mapping` are mutually exclusive. A record with neither is
/// unbound: it can be materialized and inherited from, but every table
/// operation on it fails.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[id]` | Marks the id attribute. Without it, the attribute named `id` is used. |
/// | `#[column(name = "...")]` | Column name for this field. Wins over `rename_all`. |
/// | `#[parent]` | The field holds a record whose attributes are inherited. At most one. |
///
/// # Example
///
/// ```rust,ignore
/// use tablemap::Record;
///
/// #[derive(Debug, Default, Record)]
/// pub struct Audit {
///     pub created_by: Option<String>,
/// }
///
/// #[derive(Debug, Default, Record)]
/// #[record(table = "orders")]
/// pub struct Order {
///     pub id: Option<i64>,
///     #[column(name = "cust_name")]
///     pub customer_name: Option<String>,
///     #[parent]
///     pub audit: Audit,
/// }
///
/// // Order attributes, in order: id, customer_name, created_by
/// ```
#[proc_macro_derive(Record, attributes(record, column, id, parent))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
