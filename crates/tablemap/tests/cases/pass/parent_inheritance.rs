// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use chrono::NaiveDateTime;
use tablemap::Record;

#[derive(Default, Record)]
pub struct Audit {
    pub created_by: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Default, Record)]
#[record(table = "orders")]
pub struct Order {
    pub id: Option<i64>,
    #[parent]
    pub audit: Audit,
}

fn main() {
    let names: Vec<&str> = Order::record_type()
        .attributes()
        .into_iter()
        .map(|a| a.name())
        .collect();
    assert_eq!(names, ["id", "created_by", "created_at"]);

    let mut order = Order::default();
    assert!(order.set("created_by", Some("ops")).unwrap());
    assert_eq!(order.audit.created_by.as_deref(), Some("ops"));
    assert!(order.get("created_at").unwrap().is_null());
}
