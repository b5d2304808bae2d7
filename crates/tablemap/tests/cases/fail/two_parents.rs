// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tablemap::Record;

#[derive(Default, Record)]
pub struct Audit {
    pub created_by: Option<String>,
}

#[derive(Default, Record)]
#[record(table = "orders")]
pub struct Order {
    #[parent]
    pub audit: Audit,
    #[parent]
    pub trace: Audit,
}

fn main() {}
