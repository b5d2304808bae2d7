// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Data-source configuration.
//!
//! [`Config`] is a plain value with sensible defaults and `with_*` builders.
//! With the `serde` feature it can be deserialized from whatever file format
//! the host uses; loading it is the host's business.
//!
//! # Example
//!
//! ```rust
//! use tablemap_core::{Config, Dialect, InsertMode, MappingTable};
//!
//! let config = Config::default()
//!     .with_dialect(Dialect::Postgres)
//!     .with_insert_mode(InsertMode::Literal)
//!     .with_mapping(MappingTable::default().with_table("wf_mapping"));
//!
//! assert_eq!(config.mapping.table, "wf_mapping");
//! ```

use crate::Dialect;

/// How `INSERT` statements carry their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InsertMode {
    /// Non-null values are bound parameters; nulls are the literal `NULL`.
    /// Executed with `execute_update`.
    #[default]
    Bound,

    /// Values are inlined as quoted literals with `'` doubled.
    /// Executed with `execute`.
    Literal
}

/// Layout of the table that resolves mapping keys into table names.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MappingTable {
    /// Mapping table name.
    pub table: String,

    /// Column holding the active flag.
    pub action_column: String,

    /// Column holding the symbolic key.
    pub name_column: String,

    /// Column holding the physical table name.
    pub table_name_column: String,

    /// Column holding the workflow id.
    pub workflow_id_column: String,

    /// Value of the active flag that selects a row.
    pub active_flag: i64
}

impl Default for MappingTable {
    fn default() -> Self {
        Self {
            table:              "workflow_mapping".to_string(),
            action_column:      "action".to_string(),
            name_column:        "name".to_string(),
            table_name_column:  "table_name".to_string(),
            workflow_id_column: "workflow_id".to_string(),
            active_flag:        1
        }
    }
}

impl MappingTable {
    /// Set the mapping table name.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Set the active-flag column and the value that selects a row.
    #[must_use]
    pub fn with_action(mut self, column: impl Into<String>, active_flag: i64) -> Self {
        self.action_column = column.into();
        self.active_flag = active_flag;
        self
    }

    /// Set the key column.
    #[must_use]
    pub fn with_name_column(mut self, column: impl Into<String>) -> Self {
        self.name_column = column.into();
        self
    }

    /// Set the table-name column.
    #[must_use]
    pub fn with_table_name_column(mut self, column: impl Into<String>) -> Self {
        self.table_name_column = column.into();
        self
    }

    /// Set the workflow-id column.
    #[must_use]
    pub fn with_workflow_id_column(mut self, column: impl Into<String>) -> Self {
        self.workflow_id_column = column.into();
        self
    }
}

/// Configuration of a [`DataSource`](crate::DataSource).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Statement syntax.
    pub dialect: Dialect,

    /// How inserts carry their values.
    pub insert_mode: InsertMode,

    /// Mapping table layout.
    pub mapping: MappingTable
}

impl Config {
    /// Set the dialect.
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Set the insert mode.
    #[must_use]
    pub fn with_insert_mode(mut self, insert_mode: InsertMode) -> Self {
        self.insert_mode = insert_mode;
        self
    }

    /// Set the mapping table layout.
    #[must_use]
    pub fn with_mapping(mut self, mapping: MappingTable) -> Self {
        self.mapping = mapping;
        self
    }
}
