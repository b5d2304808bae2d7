// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tablemap::Record;

#[derive(Default, Record)]
#[record(table = "shipments")]
pub struct Shipment {
    #[id]
    #[column(name = "ship_code")]
    pub code: String,
    pub weight: u32,
    pub delivered: bool,
}

fn main() {
    let record_type = Shipment::record_type();
    assert_eq!(record_type.id_column(), "ship_code");
    assert_eq!(record_type.id_attribute().map(|a| a.name()), Some("code"));

    let mut shipment = Shipment::default();
    assert!(shipment.set("weight", Some("12")).unwrap());
    assert!(shipment.set("delivered", Some("yes")).unwrap());
    assert!(shipment.set("weight", Some("heavy")).is_err());
    assert_eq!(shipment.weight, 12);
    assert!(shipment.delivered);
}
