// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Collaborator interfaces.
//!
//! The engine never talks to a database itself. It builds statements and
//! hands them to a [`QueryExecutor`]; the privilege-aware insert path hands
//! a field map to a [`PrivilegedWriteService`]. Both are implemented by the
//! host on top of whatever client it uses.
//!
//! Collaborator errors are carried through
//! [`Error::Executor`](crate::Error::Executor) unchanged.

use std::collections::BTreeMap;

use crate::Value;

/// Forward-only view over a result set.
///
/// ```text
/// cursor.next() == true  → row 1 is current
/// cursor.next() == true  → row 2 is current
/// cursor.next() == false → exhausted
/// ```
pub trait Cursor {
    /// Advance to the next row. Returns `false` when exhausted.
    fn next(&mut self) -> bool;

    /// Text of `column` in the current row; `None` for SQL `NULL` or an
    /// unknown column.
    fn get_string(&self, column: &str) -> Option<String>;

    /// Actual column names of the result set, in result order.
    fn column_names(&self) -> Vec<String>;
}

/// Runs SQL on behalf of the engine.
///
/// # Example
///
/// ```rust,ignore
/// impl QueryExecutor for MyConnection {
///     type Error = MyDbError;
///     type Cursor = MyRows;
///
///     fn execute_query(&self, sql: &str, params: &[Value]) -> Result<MyRows, MyDbError> {
///         self.prepare(sql)?.query(params)
///     }
///     // ...
/// }
/// ```
pub trait QueryExecutor {
    /// Error reported by the underlying client.
    type Error: std::error::Error;

    /// Cursor returned by queries.
    type Cursor: Cursor;

    /// Run a query with positional parameters.
    ///
    /// # Errors
    ///
    /// Whatever the client reports.
    fn execute_query(&self, sql: &str, params: &[Value]) -> Result<Self::Cursor, Self::Error>;

    /// Run a statement without parameters. Returns the client's success
    /// flag.
    ///
    /// # Errors
    ///
    /// Whatever the client reports.
    fn execute(&self, sql: &str) -> Result<bool, Self::Error>;

    /// Run a data-modifying statement with positional parameters. Returns
    /// the client's success flag.
    ///
    /// # Errors
    ///
    /// Whatever the client reports.
    fn execute_update(&self, sql: &str, params: &[Value]) -> Result<bool, Self::Error>;
}

impl<X: QueryExecutor + ?Sized> QueryExecutor for &X {
    type Error = X::Error;
    type Cursor = X::Cursor;

    fn execute_query(&self, sql: &str, params: &[Value]) -> Result<Self::Cursor, Self::Error> {
        (**self).execute_query(sql, params)
    }

    fn execute(&self, sql: &str) -> Result<bool, Self::Error> {
        (**self).execute(sql)
    }

    fn execute_update(&self, sql: &str, params: &[Value]) -> Result<bool, Self::Error> {
        (**self).execute_update(sql, params)
    }
}

/// Permission-aware insert performed outside direct SQL.
pub trait PrivilegedWriteService {
    /// Error reported by the service.
    type Error: std::error::Error;

    /// Submit a record on behalf of `user` into the workflow mode
    /// `mode_id`.
    ///
    /// `fields` maps resolved column names to value text. Returns the
    /// service's result token.
    ///
    /// # Errors
    ///
    /// Whatever the service reports.
    fn submit(
        &self,
        user: &str,
        mode_id: &str,
        fields: &BTreeMap<String, String>
    ) -> Result<String, Self::Error>;
}
