// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Record derive macro.
//!
//! Struct-level attributes use [`darling`]; field-level attributes are
//! marker-style (`#[id]`, `#[parent]`) or a small list (`#[column(name)]`)
//! and are parsed by hand.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── attrs.rs - #[record(table, mapping, rename_all)] via darling
//! ├── field.rs - #[column(name)], #[id], #[parent]
//! └── def.rs   - RecordDef: validation and column resolution
//! ```
//!
//! # Data Structures
//!
//! ```text
//! RecordDef
//! ├── ident: Ident              (struct name, e.g., "Order")
//! ├── binding: Binding          (Direct / Mapped / Unbound)
//! ├── rename_all: Option<RenameRule>
//! ├── fields: Vec<FieldDef>     (persisted fields, declaration order)
//! │   └── FieldDef
//! │       ├── ident, ty
//! │       ├── column: ColumnConfig { name }
//! │       ├── is_id: bool
//! │       └── is_parent: bool
//! └── parent: Option<FieldDef>  (the #[parent] field)
//! ```

mod attrs;
mod def;
mod field;

pub use attrs::{RecordAttrs, RenameRule};
pub use def::{Binding, RecordDef};
pub use field::FieldDef;
