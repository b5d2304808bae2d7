// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tablemap::{Record, TableBinding};

#[derive(Default, Record)]
#[record(mapping = "order_flow")]
pub struct FlowOrder {
    pub id: Option<i64>,
    pub status: String,
}

#[derive(Default, Record)]
pub struct Audit {
    pub created_by: Option<String>,
}

fn main() {
    assert_eq!(
        FlowOrder::record_type().binding(),
        TableBinding::Mapped("order_flow")
    );
    assert_eq!(Audit::record_type().binding(), TableBinding::Unbound);
}
