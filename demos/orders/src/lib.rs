// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Order records for a crate that depends on `tablemap` alone.
//!
//! Derived code must resolve through the facade, so this crate carries no
//! direct dependency on `tablemap-core`.

use tablemap::{DataSource, QueryExecutor, Record, Result};

/// Audit columns shared by persisted records.
#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct Audit {
    pub created_by: Option<String>
}

/// A customer order.
#[derive(Debug, Default, Clone, PartialEq, Record)]
#[record(table = "orders")]
pub struct Order {
    #[id]
    #[column(name = "order_no")]
    pub number:        Option<i64>,
    #[column(name = "cust_name")]
    pub customer_name: Option<String>,
    #[parent]
    pub audit:         Audit
}

/// Orders placed by one customer.
pub fn orders_of<X: QueryExecutor>(
    source: &DataSource<X>,
    customer: &str
) -> Result<Vec<Order>, X::Error> {
    let filter = Order {
        customer_name: Some(customer.to_string()),
        ..Order::default()
    };
    source.select_list(&filter)
}
