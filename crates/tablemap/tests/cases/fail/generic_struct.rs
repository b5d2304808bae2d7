// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tablemap::Record;

#[derive(Default, Record)]
#[record(table = "wrappers")]
pub struct Wrapper<T> {
    pub value: T,
}

fn main() {}
