// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tablemap::Record;

#[derive(Default, Record)]
#[record(table = "customers", rename_all = "camelCase")]
pub struct Customer {
    pub id: Option<i64>,
    pub display_name: Option<String>,
    #[column(name = "MAIL")]
    pub email_address: Option<String>,
}

fn main() {
    let columns: Vec<&str> = Customer::record_type()
        .attributes()
        .into_iter()
        .map(|a| a.column_name())
        .collect();
    assert_eq!(columns, ["id", "displayName", "MAIL"]);
}
