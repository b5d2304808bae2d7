// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Table name resolution.
//!
//! A record type finds its table in one of two ways:
//!
//! ```text
//! TableBinding::Direct("orders")   → "orders"
//! TableBinding::Mapped("order_flow")
//!     → SELECT * FROM workflow_mapping WHERE action = 1 AND name = ?   ["order_flow"]
//!     → row.table_name, or UnresolvedMapping
//! TableBinding::Unbound            → UnboundTable
//! ```
//!
//! Mapped bindings are resolved on every call; nothing is cached.

use tracing::debug;

use crate::{Cursor, Dialect, Error, MappingTable, QueryExecutor, RecordType, TableBinding, Value};

/// Resolves record types to physical table names.
#[derive(Debug)]
pub struct TableResolver<'a, X> {
    executor: &'a X,
    mapping:  &'a MappingTable,
    dialect:  Dialect
}

impl<'a, X: QueryExecutor> TableResolver<'a, X> {
    /// Create a resolver over `executor` reading the `mapping` table.
    pub const fn new(executor: &'a X, mapping: &'a MappingTable, dialect: Dialect) -> Self {
        Self {
            executor,
            mapping,
            dialect
        }
    }

    /// Physical table of `record`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnboundTable`] if the type declares no binding
    /// - [`Error::UnresolvedMapping`] if the mapping key has no active row
    /// - [`Error::Executor`] if the lookup query fails
    pub fn table_name(&self, record: &RecordType) -> Result<String, Error<X::Error>> {
        match record.binding() {
            TableBinding::Direct(table) => Ok(table.to_string()),
            TableBinding::Mapped(key) => {
                self.mapping_table_name(key)?
                    .ok_or_else(|| Error::UnresolvedMapping {
                        key: key.to_string()
                    })
            }
            TableBinding::Unbound => Err(Error::UnboundTable {
                record: record.name()
            })
        }
    }

    /// Table name registered for `key`, or `None` without an active row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Executor`] if the lookup query fails.
    pub fn mapping_table_name(&self, key: &str) -> Result<Option<String>, Error<X::Error>> {
        self.lookup(key, &self.mapping.table_name_column)
    }

    /// Workflow id registered for `key`, or `None` without an active row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Executor`] if the lookup query fails.
    pub fn mapping_workflow_id(&self, key: &str) -> Result<Option<String>, Error<X::Error>> {
        self.lookup(key, &self.mapping.workflow_id_column)
    }

    /// Lookup statement for the configured mapping table.
    pub fn lookup_sql(&self) -> String {
        format!(
            "SELECT * FROM {} WHERE {} = {} AND {} = {}",
            self.mapping.table,
            self.mapping.action_column,
            self.mapping.active_flag,
            self.mapping.name_column,
            self.dialect.placeholder(1)
        )
    }

    fn lookup(&self, key: &str, column: &str) -> Result<Option<String>, Error<X::Error>> {
        let sql = self.lookup_sql();
        debug!(sql = %sql, key, column, "resolving table mapping");
        let mut cursor = self
            .executor
            .execute_query(&sql, &[Value::from(key)])
            .map_err(Error::Executor)?;
        if !cursor.next() {
            debug!(key, "no active mapping row");
            return Ok(None);
        }
        Ok(cursor
            .get_string(column)
            .filter(|text| !text.trim().is_empty()))
    }
}
