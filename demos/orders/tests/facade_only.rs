// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Records derived in a crate whose only mapping dependency is `tablemap`.

use std::{cell::RefCell, collections::VecDeque, io};

use tablemap::{Cursor, DataSource, QueryExecutor, Record, TableBinding, Value};
use tablemap_demo_orders::{Audit, Order, orders_of};

#[derive(Debug, Default, Record)]
#[record(mapping = "invoice_flow")]
struct Invoice {
    id:    Option<i64>,
    total: Option<f64>
}

#[derive(Debug, Default, Record)]
#[record(table = "returns")]
struct Return {
    id:         Option<i64>,
    #[column(name = "returned_by")]
    created_by: Option<String>,
    #[parent]
    audit:      Audit
}

type Row = Vec<(&'static str, &'static str)>;

struct Rows {
    rows:    VecDeque<Row>,
    current: Option<Row>
}

impl Cursor for Rows {
    fn next(&mut self) -> bool {
        self.current = self.rows.pop_front();
        self.current.is_some()
    }

    fn get_string(&self, column: &str) -> Option<String> {
        self.current
            .as_ref()?
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, text)| text.to_string())
    }

    fn column_names(&self) -> Vec<String> {
        self.current
            .as_ref()
            .map(|row| row.iter().map(|(name, _)| name.to_string()).collect())
            .unwrap_or_default()
    }
}

#[derive(Default)]
struct Canned {
    rows: RefCell<Vec<Row>>,
    seen: RefCell<Vec<(String, Vec<Value>)>>
}

impl QueryExecutor for Canned {
    type Error = io::Error;
    type Cursor = Rows;

    fn execute_query(&self, sql: &str, params: &[Value]) -> Result<Rows, io::Error> {
        self.seen.borrow_mut().push((sql.to_string(), params.to_vec()));
        Ok(Rows {
            rows:    self.rows.take().into(),
            current: None
        })
    }

    fn execute(&self, _sql: &str) -> Result<bool, io::Error> {
        Ok(true)
    }

    fn execute_update(&self, _sql: &str, _params: &[Value]) -> Result<bool, io::Error> {
        Ok(true)
    }
}

#[test]
fn derived_metadata_resolves_through_facade() {
    let order = Order::record_type();
    assert_eq!(order.binding(), TableBinding::Direct("orders"));
    assert_eq!(order.id_column(), "order_no");
    let names: Vec<&str> = order.attributes().into_iter().map(|a| a.name()).collect();
    assert_eq!(names, ["number", "customer_name", "created_by"]);

    let invoice = Invoice::record_type();
    assert_eq!(invoice.binding(), TableBinding::Mapped("invoice_flow"));
    assert_eq!(invoice.id_column(), "id");
}

#[test]
fn derived_accessors_decode_and_delegate() {
    let mut order = Order::default();
    assert!(order.set("number", Some("7")).unwrap());
    assert!(order.set("created_by", Some("ops")).unwrap());
    assert!(!order.set("missing", Some("x")).unwrap());
    assert_eq!(order.number, Some(7));
    assert_eq!(order.audit.created_by.as_deref(), Some("ops"));
    assert_eq!(order.get("number"), Some(Value::Int(7)));

    let mut invoice = Invoice::default();
    assert!(invoice.set("total", Some("12.5")).unwrap());
    assert_eq!(invoice.total, Some(12.5));
    assert!(invoice.set("id", Some("abc")).is_err());
}

#[test]
fn select_list_materializes_facade_records() {
    let executor = Canned::default();
    executor
        .rows
        .borrow_mut()
        .push(vec![("order_no", "3"), ("cust_name", "acme"), ("created_by", "ops")]);
    let source = DataSource::new(&executor);

    let orders = orders_of(&source, "acme").unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].number, Some(3));
    assert_eq!(orders[0].customer_name.as_deref(), Some("acme"));
    assert_eq!(orders[0].audit.created_by.as_deref(), Some("ops"));
    let seen = executor.seen.borrow();
    assert_eq!(seen[0].0, "SELECT * FROM orders WHERE 1=1 AND cust_name = ?");
    assert_eq!(seen[0].1, [Value::Text("acme".into())]);
}

#[test]
fn redeclared_parent_attribute_is_listed_once() {
    let record = Return {
        created_by: Some("clerk".into()),
        audit: Audit {
            created_by: Some("ops".into())
        },
        ..Return::default()
    };
    let values: Vec<(&str, Value)> = record
        .values()
        .into_iter()
        .map(|(attribute, value)| (attribute.column_name(), value))
        .collect();
    assert_eq!(
        values,
        [("id", Value::Null), ("returned_by", Value::Text("clerk".into()))]
    );
}
