// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement building.
//!
//! [`SqlBuilder`] is pure: it turns a table name and column/value pairs into
//! a [`Statement`] and never touches the executor. Column names passed in
//! are already resolved (see [`Attribute::column_name`](crate::Attribute::column_name)).
//!
//! # Shapes
//!
//! | Operation | SQL (MySQL dialect) |
//! |-----------|---------------------|
//! | select by id | `SELECT * FROM t WHERE id = ?` |
//! | select by condition | `SELECT * FROM t WHERE 1=1 AND a = ? AND b = ?` |
//! | select page | `... LIMIT ?, ?` |
//! | insert | `INSERT INTO t(a,b) VALUES (?, NULL), (?, ?)` |
//! | update by id | `UPDATE t SET id = ?, a = ? WHERE id = ?` |
//! | delete | `DELETE FROM t WHERE 1=1 AND a = ?` |

use std::fmt;

use crate::{Dialect, InsertMode, Pagination, Value};

/// SQL text with its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// SQL text.
    pub sql: String,

    /// Bound values, in placeholder order.
    pub params: Vec<Value>
}

impl Statement {
    /// Create a statement.
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// Collects parameters and hands out matching placeholders.
struct Binder {
    dialect: Dialect,
    params:  Vec<Value>
}

impl Binder {
    fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            params: Vec::new()
        }
    }

    fn bind(&mut self, value: Value) -> String {
        self.params.push(value);
        self.dialect.placeholder(self.params.len())
    }

    fn where_clause(&mut self, sql: &mut String, conditions: &[(&str, Value)]) {
        sql.push_str(" WHERE 1=1");
        for (column, value) in conditions {
            let placeholder = self.bind(value.clone());
            sql.push_str(&format!(" AND {column} = {placeholder}"));
        }
    }

    fn finish(self, sql: String) -> Statement {
        Statement::new(sql, self.params)
    }
}

/// Builds statements in one [`Dialect`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlBuilder {
    dialect: Dialect
}

impl SqlBuilder {
    /// Create a builder for `dialect`.
    pub const fn new(dialect: Dialect) -> Self {
        Self {
            dialect
        }
    }

    /// Dialect this builder emits.
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// `SELECT * FROM <table> WHERE <id_column> = ?`.
    pub fn select_by_id(&self, table: &str, id_column: &str, id: Value) -> Statement {
        let mut binder = Binder::new(self.dialect);
        let placeholder = binder.bind(id);
        binder.finish(format!("SELECT * FROM {table} WHERE {id_column} = {placeholder}"))
    }

    /// `SELECT * FROM <table> WHERE 1=1 [AND <col> = ? ...]`.
    ///
    /// No conditions means no filter.
    pub fn select_by_condition(&self, table: &str, conditions: &[(&str, Value)]) -> Statement {
        let mut binder = Binder::new(self.dialect);
        let mut sql = format!("SELECT * FROM {table}");
        binder.where_clause(&mut sql, conditions);
        binder.finish(sql)
    }

    /// Select-by-condition with a bound page window appended.
    pub fn select_page(
        &self,
        table: &str,
        conditions: &[(&str, Value)],
        page: Pagination
    ) -> Statement {
        let mut binder = Binder::new(self.dialect);
        let mut sql = format!("SELECT * FROM {table}");
        binder.where_clause(&mut sql, conditions);
        let (clause, offset_first) = self.dialect.limit_clause(binder.params.len() + 1);
        if offset_first {
            binder.params.push(Value::Int(page.offset));
            binder.params.push(Value::Int(page.limit));
        } else {
            binder.params.push(Value::Int(page.limit));
            binder.params.push(Value::Int(page.offset));
        }
        sql.push(' ');
        sql.push_str(&clause);
        binder.finish(sql)
    }

    /// `INSERT INTO <table>(<cols>) VALUES (...), (...)`.
    ///
    /// One tuple per row, in input order. Null values are always the
    /// unquoted literal `NULL`. Other values are placeholders under
    /// [`InsertMode::Bound`] and escaped quoted literals under
    /// [`InsertMode::Literal`].
    ///
    /// Returns `None` when `rows` is empty.
    pub fn insert(
        &self,
        table: &str,
        columns: &[&str],
        rows: &[Vec<Value>],
        mode: InsertMode
    ) -> Option<Statement> {
        if rows.is_empty() {
            return None;
        }
        let mut binder = Binder::new(self.dialect);
        let tuples: Vec<String> = rows
            .iter()
            .map(|row| {
                let values: Vec<String> = row
                    .iter()
                    .map(|value| match (value, mode) {
                        (Value::Null, _) => "NULL".to_string(),
                        (_, InsertMode::Literal) => value.to_sql_literal(),
                        (_, InsertMode::Bound) => binder.bind(value.clone())
                    })
                    .collect();
                format!("({})", values.join(", "))
            })
            .collect();
        Some(binder.finish(format!(
            "INSERT INTO {table}({}) VALUES {}",
            columns.join(","),
            tuples.join(", ")
        )))
    }

    /// `UPDATE <table> SET <id_column> = ?, <col> = ?, ... WHERE <id_column> = ?`.
    ///
    /// Parameters are `[id, values..., id]`.
    pub fn update_by_id(
        &self,
        table: &str,
        id_column: &str,
        id: Value,
        assignments: &[(&str, Value)]
    ) -> Statement {
        let mut binder = Binder::new(self.dialect);
        let mut sql = format!("UPDATE {table} SET {id_column} = {}", binder.bind(id.clone()));
        for (column, value) in assignments {
            let placeholder = binder.bind(value.clone());
            sql.push_str(&format!(", {column} = {placeholder}"));
        }
        let placeholder = binder.bind(id);
        sql.push_str(&format!(" WHERE {id_column} = {placeholder}"));
        binder.finish(sql)
    }

    /// `DELETE FROM <table> WHERE 1=1 AND <col> = ? ...`.
    ///
    /// Returns `None` when there are no conditions: an unconditional delete
    /// is never built.
    pub fn delete(&self, table: &str, conditions: &[(&str, Value)]) -> Option<Statement> {
        if conditions.is_empty() {
            return None;
        }
        let mut binder = Binder::new(self.dialect);
        let mut sql = format!("DELETE FROM {table}");
        binder.where_clause(&mut sql, conditions);
        Some(binder.finish(sql))
    }
}
