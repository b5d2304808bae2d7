// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # tablemap
//!
//! One crate, all features. Re-exports:
//! - [`Record`](macro@Record) derive macro from `tablemap-derive-impl`
//! - All types from `tablemap-core` ([`DataSource`], [`Config`],
//!   [`Pagination`], [`QueryExecutor`], ...)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tablemap::prelude::*;
//! use tablemap::Record;
//!
//! #[derive(Debug, Default, Record)]
//! #[record(table = "orders")]
//! pub struct Order {
//!     pub id: Option<i64>,
//!     #[column(name = "cust_name")]
//!     pub customer_name: Option<String>,
//! }
//!
//! let source = DataSource::new(connection);
//! let order: Option<Order> = source.select_by_id(42)?;
//! let page = source.select_page(&Order::default(), Pagination::page(0, 25))?;
//! ```

pub use tablemap_core::*;
pub use tablemap_derive_impl::Record;

/// Path root for code generated by `#[derive(Record)]`. Not public API.
#[doc(hidden)]
pub use tablemap_core as __private;
