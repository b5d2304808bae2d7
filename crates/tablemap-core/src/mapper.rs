// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Result mapping.
//!
//! Rows come out of a [`Cursor`] as column text. [`map_rows`] matches every
//! attribute of the target record against the row's live column names,
//! ignoring ASCII case, and materializes one record per row:
//!
//! ```text
//! columns: ID | CUST_NAME | amount | extra
//!          ↓     ↓           ↓        (ignored)
//! fields:  id, customer_name, amount
//!          → Order::from_fields(..)
//! ```
//!
//! Attributes without a matching column keep their default value.

use crate::{Cursor, DecodeError, FieldMap, Record};

/// Materialize every remaining row of `cursor` into `R`.
///
/// # Errors
///
/// Returns [`DecodeError`] for the first column text that does not decode
/// into its attribute.
pub fn map_rows<R: Record, C: Cursor>(cursor: &mut C) -> Result<Vec<R>, DecodeError> {
    let attributes = R::record_type().attributes();
    let mut records = Vec::new();
    while cursor.next() {
        let columns = cursor.column_names();
        let mut fields = FieldMap::new();
        for attribute in &attributes {
            if let Some(column) = columns.iter().find(|c| attribute.matches_column(c)) {
                fields.insert(attribute.name(), cursor.get_string(column));
            }
        }
        records.push(R::from_fields(&fields)?);
    }
    Ok(records)
}

/// One untyped result row: column name → text, in result order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    columns: Vec<(String, Option<String>)>
}

impl RawRow {
    /// Text of `column`, matched exactly first and then ignoring ASCII case.
    ///
    /// `None` when the column is absent or `NULL`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .or_else(|| {
                self.columns
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(column))
            })
            .and_then(|(_, text)| text.as_deref())
    }

    /// Check if the row has `column`.
    pub fn contains(&self, column: &str) -> bool {
        self.columns
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case(column))
    }

    /// Column names in result order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate columns with their text.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.columns
            .iter()
            .map(|(name, text)| (name.as_str(), text.as_deref()))
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<(String, Option<String>)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect()
        }
    }
}

/// Collect every remaining row of `cursor` with all of its columns.
pub fn map_raw_rows<C: Cursor>(cursor: &mut C) -> Vec<RawRow> {
    let mut rows = Vec::new();
    while cursor.next() {
        let row: RawRow = cursor
            .column_names()
            .into_iter()
            .map(|column| {
                let text = cursor.get_string(&column);
                (column, text)
            })
            .collect();
        rows.push(row);
    }
    rows
}
