// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tablemap_core::prelude::*;
//! ```

pub use crate::{
    Config, Cursor, DataSource, Dialect, Error, ErrorKind, FieldValue, InsertMode, MappingTable,
    Pagination, PrivilegedWriteService, QueryExecutor, RawRow, Record, Value
};
