// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tablemap::Record;

#[derive(Default, Record)]
#[record(table = "orders", mapping = "order_flow")]
pub struct Order {
    pub id: Option<i64>,
}

fn main() {}
