// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The [`Record`] capability.
//!
//! A record is a plain struct that knows its [`RecordType`] descriptor and
//! can get and set its attributes by identifier.
//!
//! # Manual Implementation
//!
//! `#[derive(Record)]` writes this impl; hand-written ones look the same:
//!
//! ```rust
//! use tablemap_core::{Attribute, DecodeError, FieldValue, Record, RecordType, TableBinding, Value};
//!
//! #[derive(Debug, Default)]
//! struct Tag {
//!     id:    Option<i64>,
//!     label: Option<String>
//! }
//!
//! impl Record for Tag {
//!     fn record_type() -> &'static RecordType {
//!         static TYPE: RecordType = RecordType::new(
//!             "Tag",
//!             TableBinding::Direct("tags"),
//!             &[Attribute::new("id"), Attribute::new("label")]
//!         );
//!         &TYPE
//!     }
//!
//!     fn get(&self, attribute: &str) -> Option<Value> {
//!         match attribute {
//!             "id" => Some(self.id.to_value()),
//!             "label" => Some(self.label.to_value()),
//!             _ => None
//!         }
//!     }
//!
//!     fn set(&mut self, attribute: &str, text: Option<&str>) -> Result<bool, DecodeError> {
//!         let decode = |reason: String| DecodeError::new(attribute, text, reason);
//!         match attribute {
//!             "id" => self.id = FieldValue::from_text(text).map_err(decode)?,
//!             "label" => self.label = FieldValue::from_text(text).map_err(decode)?,
//!             _ => return Ok(false)
//!         }
//!         Ok(true)
//!     }
//! }
//!
//! let tag = Tag { id: Some(1), label: None };
//! assert_eq!(tag.conditions().len(), 1);
//! ```

use crate::{Attribute, DecodeError, RecordType, Value};

/// Ordered attribute-identifier → column-text map.
///
/// The intermediate form between a result row and a materialized record.
/// Keys are attribute identifiers, never column names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(&'static str, Option<String>)>
}

impl FieldMap {
    /// Create an empty map.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new()
        }
    }

    /// Insert or replace the text for `attribute`.
    pub fn insert(&mut self, attribute: &'static str, text: Option<String>) {
        match self.entries.iter_mut().find(|(name, _)| *name == attribute) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((attribute, text))
        }
    }

    /// Get the text for `attribute`.
    ///
    /// `None` when the attribute is absent; `Some(None)` when it is present
    /// but `NULL`.
    pub fn get(&self, attribute: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(name, _)| *name == attribute)
            .map(|(_, text)| text.as_deref())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(name, text)| (*name, text.as_deref()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A struct persisted as one table row.
///
/// Implemented by `#[derive(Record)]`. The `Default` bound is the starting
/// point of materialization: attributes with no matching column keep their
/// default value.
pub trait Record: Default {
    /// Static descriptor of this type.
    fn record_type() -> &'static RecordType;

    /// Read an attribute by identifier.
    ///
    /// Returns `None` if the type has no such attribute.
    fn get(&self, attribute: &str) -> Option<Value>;

    /// Decode column text into an attribute.
    ///
    /// Returns `Ok(false)` if the type has no such attribute.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the text does not parse into the
    /// attribute's type.
    fn set(&mut self, attribute: &str, text: Option<&str>) -> Result<bool, DecodeError>;

    /// Every attribute with its current value, in attribute order.
    fn values(&self) -> Vec<(&'static Attribute, Value)> {
        Self::record_type()
            .attributes()
            .into_iter()
            .map(|attribute| (attribute, self.get(attribute.name()).unwrap_or(Value::Null)))
            .collect()
    }

    /// The non-null attributes: the equality filter this record denotes
    /// when used as a condition.
    fn conditions(&self) -> Vec<(&'static Attribute, Value)> {
        self.values()
            .into_iter()
            .filter(|(_, value)| !value.is_null())
            .collect()
    }

    /// Materialize a record from a field map, starting at `Default`.
    ///
    /// Entries naming unknown attributes are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] for the first entry that fails to decode.
    fn from_fields(fields: &FieldMap) -> Result<Self, DecodeError> {
        let mut record = Self::default();
        for (attribute, text) in fields.iter() {
            record.set(attribute, text)?;
        }
        Ok(record)
    }
}
