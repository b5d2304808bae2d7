// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared fixtures for unit tests: hand-written records and a scripted,
//! recording executor.

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeMap, VecDeque}
};

use chrono::NaiveDateTime;

use crate::{
    Attribute, Cursor, DecodeError, FieldValue, PrivilegedWriteService, QueryExecutor, Record,
    RecordType, Statement, TableBinding, Value
};

pub type Row = Vec<(String, Option<String>)>;

pub fn row(columns: &[(&str, Option<&str>)]) -> Row {
    columns
        .iter()
        .map(|(name, text)| (name.to_string(), text.map(str::to_string)))
        .collect()
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Audit {
    pub created_by: Option<String>,
    pub created_at: Option<NaiveDateTime>
}

impl Record for Audit {
    fn record_type() -> &'static RecordType {
        static TYPE: RecordType = RecordType::new(
            "Audit",
            TableBinding::Unbound,
            &[Attribute::new("created_by"), Attribute::new("created_at")]
        );
        &TYPE
    }

    fn get(&self, attribute: &str) -> Option<Value> {
        match attribute {
            "created_by" => Some(self.created_by.to_value()),
            "created_at" => Some(self.created_at.to_value()),
            _ => None
        }
    }

    fn set(&mut self, attribute: &str, text: Option<&str>) -> Result<bool, DecodeError> {
        let decode = |reason: String| DecodeError::new(attribute, text, reason);
        match attribute {
            "created_by" => self.created_by = FieldValue::from_text(text).map_err(decode)?,
            "created_at" => self.created_at = FieldValue::from_text(text).map_err(decode)?,
            _ => return Ok(false)
        }
        Ok(true)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Order {
    pub id:            Option<i64>,
    pub customer_name: Option<String>,
    pub amount:        Option<f64>,
    pub audit:         Audit
}

impl Record for Order {
    fn record_type() -> &'static RecordType {
        static TYPE: RecordType = RecordType::new(
            "Order",
            TableBinding::Direct("orders"),
            &[
                Attribute::new("id"),
                Attribute::new("customer_name").with_column("cust_name"),
                Attribute::new("amount")
            ]
        )
        .extends(<Audit as Record>::record_type);
        &TYPE
    }

    fn get(&self, attribute: &str) -> Option<Value> {
        match attribute {
            "id" => Some(self.id.to_value()),
            "customer_name" => Some(self.customer_name.to_value()),
            "amount" => Some(self.amount.to_value()),
            _ => self.audit.get(attribute)
        }
    }

    fn set(&mut self, attribute: &str, text: Option<&str>) -> Result<bool, DecodeError> {
        let decode = |reason: String| DecodeError::new(attribute, text, reason);
        match attribute {
            "id" => self.id = FieldValue::from_text(text).map_err(decode)?,
            "customer_name" => self.customer_name = FieldValue::from_text(text).map_err(decode)?,
            "amount" => self.amount = FieldValue::from_text(text).map_err(decode)?,
            _ => return self.audit.set(attribute, text)
        }
        Ok(true)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Shipment {
    pub code:    String,
    pub carrier: Option<String>
}

impl Record for Shipment {
    fn record_type() -> &'static RecordType {
        static TYPE: RecordType = RecordType::new(
            "Shipment",
            TableBinding::Direct("shipments"),
            &[
                Attribute::new("code").with_column("ship_code").primary(),
                Attribute::new("carrier")
            ]
        );
        &TYPE
    }

    fn get(&self, attribute: &str) -> Option<Value> {
        match attribute {
            "code" => Some(self.code.to_value()),
            "carrier" => Some(self.carrier.to_value()),
            _ => None
        }
    }

    fn set(&mut self, attribute: &str, text: Option<&str>) -> Result<bool, DecodeError> {
        let decode = |reason: String| DecodeError::new(attribute, text, reason);
        match attribute {
            "code" => self.code = FieldValue::from_text(text).map_err(decode)?,
            "carrier" => self.carrier = FieldValue::from_text(text).map_err(decode)?,
            _ => return Ok(false)
        }
        Ok(true)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct MockError(pub String);

#[derive(Debug)]
pub struct MockCursor {
    rows:    VecDeque<Row>,
    current: Option<Row>
}

impl MockCursor {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows:    rows.into(),
            current: None
        }
    }
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

/// Executor answering queries from a queue of result sets and recording
/// every statement it receives.
#[derive(Debug, Default)]
pub struct MockExecutor {
    results:    RefCell<VecDeque<Vec<Row>>>,
    statements: RefCell<Vec<Statement>>,
    updates:    Cell<usize>,
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

    pub fn updates(&self) -> usize {
        self.updates.get()
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
        let rows = self.results.borrow_mut().pop_front().unwrap_or_default();
        Ok(MockCursor::new(rows))
    }

    fn execute(&self, sql: &str) -> Result<bool, MockError> {
        self.record(sql, &[])?;
        Ok(true)
    }

    fn execute_update(&self, sql: &str, params: &[Value]) -> Result<bool, MockError> {
        self.record(sql, params)?;
        self.updates.set(self.updates.get() + 1);
        Ok(true)
    }
}

type Submission = (String, String, BTreeMap<String, String>);

#[derive(Debug)]
pub struct MockService {
    token:       String,
    submissions: RefCell<Vec<Submission>>
}

impl MockService {
    pub fn new(token: &str) -> Self {
        Self {
            token:       token.to_string(),
            submissions: RefCell::new(Vec::new())
        }
    }

    pub fn last(&self) -> Option<Submission> {
        self.submissions.borrow().last().cloned()
    }
}

impl PrivilegedWriteService for MockService {
    type Error = MockError;

    fn submit(
        &self,
        user: &str,
        mode_id: &str,
        fields: &BTreeMap<String, String>
    ) -> Result<String, MockError> {
        self.submissions
            .borrow_mut()
            .push((user.to_string(), mode_id.to_string(), fields.clone()));
        Ok(self.token.clone())
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
