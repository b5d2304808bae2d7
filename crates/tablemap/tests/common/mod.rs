// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory collaborators for end-to-end tests.

#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::{BTreeMap, VecDeque}
};

use chrono::NaiveDateTime;
use tablemap::{Cursor, PrivilegedWriteService, QueryExecutor, Record, Statement, Value};

pub type Row = Vec<(String, Option<String>)>;

pub fn row(columns: &[(&str, Option<&str>)]) -> Row {
    columns
        .iter()
        .map(|(name, text)| (name.to_string(), text.map(str::to_string)))
        .collect()
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct Audit {
    pub created_by: Option<String>,
    pub created_at: Option<NaiveDateTime>
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
#[record(table = "orders")]
pub struct Order {
    pub id:            Option<i64>,
    #[column(name = "cust_name")]
    pub customer_name: Option<String>,
    pub amount:        Option<f64>,
    #[parent]
    pub audit:         Audit
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
#[record(mapping = "order_flow")]
pub struct FlowOrder {
    pub id:     Option<i64>,
    pub status: Option<String>
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct Draft {
    pub id: Option<i64>
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct MockError(pub String);

#[derive(Debug)]
pub struct MockCursor {
    rows:    VecDeque<Row>,
    current: Option<Row>
}

impl Cursor for MockCursor {
    fn next(&mut self) -> bool {
        self.current = self.rows.pop_front();
        self.current.is_some()
    }

    fn get_string(&self, column: &str) -> Option<String> {
        self.current
            .as_ref()?
            .iter()
            .find(|(name, _)| name == column)
            .and_then(|(_, text)| text.clone())
    }

    fn column_names(&self) -> Vec<String> {
        self.current
            .as_ref()
            .map(|row| row.iter().map(|(name, _)| name.clone()).collect())
            .unwrap_or_default()
    }
}

/// Answers queries from a queue of result sets; records every statement.
#[derive(Debug, Default)]
pub struct MockExecutor {
    results:    RefCell<VecDeque<Vec<Row>>>,
    statements: RefCell<Vec<Statement>>,
    failure:    Option<String>
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_rows(self, rows: Vec<Row>) -> Self {
        self.results.borrow_mut().push_back(rows);
        self
    }

    pub fn statements(&self) -> Vec<Statement> {
        self.statements.borrow().clone()
    }

    pub fn last(&self) -> Statement {
        self.statements
            .borrow()
            .last()
            .cloned()
            .expect("no statement was executed")
    }

    fn record(&self, sql: &str, params: &[Value]) -> Result<(), MockError> {
        self.statements
            .borrow_mut()
            .push(Statement::new(sql, params.to_vec()));
        match &self.failure {
            Some(message) => Err(MockError(message.clone())),
            None => Ok(())
        }
    }
}

impl QueryExecutor for MockExecutor {
    type Error = MockError;
    type Cursor = MockCursor;

    fn execute_query(&self, sql: &str, params: &[Value]) -> Result<MockCursor, MockError> {
        self.record(sql, params)?;
        Ok(MockCursor {
            rows:    self
                .results
                .borrow_mut()
                .pop_front()
                .unwrap_or_default()
                .into(),
            current: None
        })
    }

    fn execute(&self, sql: &str) -> Result<bool, MockError> {
        self.record(sql, &[])?;
        Ok(true)
    }

    fn execute_update(&self, sql: &str, params: &[Value]) -> Result<bool, MockError> {
        self.record(sql, params)?;
        Ok(true)
    }
}

/// Records submissions and answers with a fixed token.
#[derive(Debug, Default)]
pub struct MockService {
    pub submissions: RefCell<Vec<(String, String, BTreeMap<String, String>)>>,
    pub rejection:   Option<String>
}

impl PrivilegedWriteService for MockService {
    type Error = MockError;

    fn submit(
        &self,
        user: &str,
        mode_id: &str,
        fields: &BTreeMap<String, String>
    ) -> Result<String, MockError> {
        if let Some(reason) = &self.rejection {
            return Err(MockError(reason.clone()));
        }
        self.submissions
            .borrow_mut()
            .push((user.to_string(), mode_id.to_string(), fields.clone()));
        Ok("request-1".to_string())
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tablemap_core=debug".into())
        )
        .with_test_writer()
        .try_init();
}
