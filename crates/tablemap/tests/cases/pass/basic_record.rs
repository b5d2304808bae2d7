// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tablemap::{Record, TableBinding};

#[derive(Debug, Default, Record)]
#[record(table = "orders")]
pub struct Order {
    pub id: Option<i64>,
    #[column(name = "cust_name")]
    pub customer_name: Option<String>,
    pub amount: Option<f64>,
}

fn main() {
    let record_type = Order::record_type();
    assert_eq!(record_type.name(), "Order");
    assert_eq!(record_type.binding(), TableBinding::Direct("orders"));
    assert_eq!(record_type.attributes().len(), 3);

    let mut order = Order::default();
    assert!(order.set("customer_name", Some("Alice")).unwrap());
    assert!(!order.set("cust_name", Some("Alice")).unwrap());
    assert_eq!(order.customer_name.as_deref(), Some("Alice"));
    assert!(order.get("amount").unwrap().is_null());
    assert!(order.get("missing").is_none());
}
