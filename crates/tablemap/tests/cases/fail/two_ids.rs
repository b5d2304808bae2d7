// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tablemap::Record;

#[derive(Default, Record)]
#[record(table = "orders")]
pub struct Order {
    #[id]
    pub id: Option<i64>,
    #[id]
    pub code: Option<String>,
}

fn main() {}
