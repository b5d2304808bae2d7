// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute values and the field codec.
//!
//! [`Value`] is the dynamically typed form of an attribute: what gets bound
//! to a statement parameter or rendered as an SQL literal. [`FieldValue`]
//! converts between a struct field and a [`Value`] on the way out, and parses
//! the text a result cursor returns on the way back in.
//!
//! # Supported Field Types
//!
//! | Rust type | Value | Null |
//! |-----------|-------|------|
//! | `String` | `Text` | never |
//! | `i8`..`i64`, `u8`..`u32` | `Int` | never |
//! | `f32`, `f64` | `Float` | never |
//! | `bool` | `Bool` | never |
//! | `NaiveDateTime`, `DateTime<Utc>` | `DateTime` | never |
//! | `NaiveDate` | `Date` | never |
//! | `Option<T>` | as `T` | `None` |

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Text format for date-time values: `yyyy-MM-dd HH:mm:ss`.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Text format for date values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Dynamically typed attribute value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// SQL `NULL`; the attribute is absent.
    Null,

    /// Character data.
    Text(String),

    /// Integer.
    Int(i64),

    /// Floating point number.
    Float(f64),

    /// Boolean.
    Bool(bool),

    /// Timestamp without time zone.
    DateTime(NaiveDateTime),

    /// Calendar date.
    Date(NaiveDate)
}

impl Value {
    /// Check if this is [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if the value is null or text with nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.trim().is_empty(),
            _ => false
        }
    }

    /// Text form of the value, with dates formatted as
    /// [`DATE_TIME_FORMAT`] / [`DATE_FORMAT`].
    ///
    /// Returns `None` for [`Value::Null`].
    pub fn to_literal(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Text(s) => Some(s.clone()),
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
            Self::DateTime(dt) => Some(dt.format(DATE_TIME_FORMAT).to_string()),
            Self::Date(d) => Some(d.format(DATE_FORMAT).to_string())
        }
    }

    /// Inline SQL form: `NULL`, or a single-quoted literal with embedded
    /// quotes doubled.
    pub fn to_sql_literal(&self) -> String {
        match self.to_literal() {
            None => "NULL".to_string(),
            Some(text) => format!("'{}'", text.replace('\'', "''"))
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_literal() {
            Some(text) => f.write_str(&text),
            None => f.write_str("NULL")
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Conversion between a record field and [`Value`] / column text.
///
/// Generated `Record` implementations call this for every attribute, so any
/// field type used in a record must implement it.
pub trait FieldValue: Sized {
    /// Whether blank text is a value of this type rather than `NULL`.
    const TEXTUAL: bool = false;

    /// Convert the field into a value.
    fn to_value(&self) -> Value;

    /// Parse column text; `None` is a SQL `NULL`.
    ///
    /// # Errors
    ///
    /// Returns the parser message when the text is not valid for the type.
    fn from_text(text: Option<&str>) -> Result<Self, String>;
}

impl FieldValue for String {
    const TEXTUAL: bool = true;

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_text(text: Option<&str>) -> Result<Self, String> {
        Ok(text.unwrap_or_default().to_string())
    }
}

macro_rules! int_field_value {
    ($($ty:ty),*) => {
        $(
            impl FieldValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }

                fn from_text(text: Option<&str>) -> Result<Self, String> {
                    match text.map(str::trim) {
                        None | Some("") => Ok(Self::default()),
                        Some(s) => s.parse().map_err(|e| format!("{e}"))
                    }
                }
            }
        )*
    };
}

int_field_value!(i8, i16, i32, i64, u8, u16, u32);

/// Widen through the shortest decimal text so `0.1_f32` stays `0.1`.
fn widen_f32(value: f32) -> f64 {
    value.to_string().parse().unwrap_or(f64::from(value))
}

macro_rules! float_field_value {
    ($($ty:ty => $widen:path),*) => {
        $(
            impl FieldValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Float($widen(*self))
                }

                fn from_text(text: Option<&str>) -> Result<Self, String> {
                    match text.map(str::trim) {
                        None | Some("") => Ok(Self::default()),
                        Some(s) => s.parse().map_err(|e| format!("{e}"))
                    }
                }
            }
        )*
    };
}

float_field_value!(f32 => widen_f32, f64 => f64::from);

impl FieldValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_text(text: Option<&str>) -> Result<Self, String> {
        let Some(s) = text.map(str::trim) else {
            return Ok(false);
        };
        match s.to_ascii_lowercase().as_str() {
            "" | "0" | "false" | "f" | "n" | "no" => Ok(false),
            "1" | "true" | "t" | "y" | "yes" => Ok(true),
            other => Err(format!("`{other}` is not a boolean"))
        }
    }
}

/// Parse a timestamp as the database prints it: space or `T` separator,
/// optional fractional seconds.
fn parse_date_time(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| {
            NaiveDate::parse_from_str(s, DATE_FORMAT).map(|d| d.and_time(NaiveTime::default()))
        })
        .map_err(|e| e.to_string())
}

impl FieldValue for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }

    fn from_text(text: Option<&str>) -> Result<Self, String> {
        match text.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(s) => parse_date_time(s)
        }
    }
}

impl FieldValue for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::DateTime(self.naive_utc())
    }

    fn from_text(text: Option<&str>) -> Result<Self, String> {
        NaiveDateTime::from_text(text).map(|dt| dt.and_utc())
    }
}

impl FieldValue for NaiveDate {
    fn to_value(&self) -> Value {
        Value::Date(*self)
    }

    fn from_text(text: Option<&str>) -> Result<Self, String> {
        match text.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
                .or_else(|_| parse_date_time(s).map(|dt| dt.date()))
                .map_err(|e| e.to_string())
        }
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldValue::to_value)
    }

    fn from_text(text: Option<&str>) -> Result<Self, String> {
        match text {
            None => Ok(None),
            Some(s) if !T::TEXTUAL && s.trim().is_empty() => Ok(None),
            Some(s) => T::from_text(Some(s)).map(Some)
        }
    }
}
