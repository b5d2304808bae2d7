// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core runtime for tablemap.
//!
//! This crate holds everything `#[derive(Record)]` generated code relies on,
//! plus the engine that uses it. It can also be used standalone with
//! hand-written [`Record`] implementations.
//!
//! # Overview
//!
//! - [`Record`] and [`RecordType`]: static per-type metadata and field access
//! - [`Value`] and [`FieldValue`]: attribute values and their text codec
//! - [`TableResolver`]: direct or mapping-table table resolution
//! - [`SqlBuilder`]: pure statement building in a [`Dialect`]
//! - [`map_rows`]: result rows back into records
//! - [`DataSource`]: the CRUD facade over a [`QueryExecutor`]
//! - [`prelude`]: convenient re-exports
//!
//! # Usage
//!
//! Most users should use `tablemap` directly, which re-exports this crate
//! together with the derive macro.
//!
//! ```rust,ignore
//! use tablemap_core::prelude::*;
//!
//! let source = DataSource::with_config(connection, Config::default());
//! let orders: Vec<Order> = source.select_page(&Order::default(), Pagination::page(0, 25))?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod dialect;
mod error;
mod executor;
mod mapper;
mod meta;
pub mod prelude;
mod record;
mod source;
mod sql;
mod table;
mod value;

#[cfg(test)]
mod testing;

pub use config::{Config, InsertMode, MappingTable};
pub use dialect::{Dialect, UnknownDialect};
pub use error::{DecodeError, Error, ErrorKind};
pub use executor::{Cursor, PrivilegedWriteService, QueryExecutor};
pub use mapper::{RawRow, map_raw_rows, map_rows};
pub use meta::{Attribute, RecordType, TableBinding};
pub use record::{FieldMap, Record};
pub use source::{DataSource, Result};
pub use sql::{SqlBuilder, Statement};
pub use table::TableResolver;
pub use value::{DATE_FORMAT, DATE_TIME_FORMAT, FieldValue, Value};

/// Pagination parameters for paged selects.
///
/// # Example
///
/// ```rust
/// use tablemap_core::Pagination;
///
/// let page = Pagination::new(10, 0); // First 10 rows
/// let next = Pagination::new(10, 10); // Next 10 rows
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pagination {
    /// Maximum number of rows to return.
    pub limit: i64,

    /// Number of rows to skip.
    pub offset: i64
}

impl Pagination {
    /// Create new pagination parameters.
    ///
    /// # Arguments
    ///
    /// * `limit` - Maximum rows to return
    /// * `offset` - Number of rows to skip
    pub const fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit,
            offset
        }
    }

    /// Create pagination for a specific page.
    ///
    /// # Arguments
    ///
    /// * `page` - Page number (0-indexed)
    /// * `per_page` - Rows per page
    ///
    /// # Example
    ///
    /// ```rust
    /// use tablemap_core::Pagination;
    ///
    /// let page_0 = Pagination::page(0, 25); // offset=0, limit=25
    /// let page_2 = Pagination::page(2, 25); // offset=50, limit=25
    /// ```
    ///
    /// The offset saturates at `i64::MAX` instead of overflowing.
    pub const fn page(page: i64, per_page: i64) -> Self {
        Self {
            limit:  per_page,
            offset: page.saturating_mul(per_page)
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit:  100,
            offset: 0
        }
    }
}
