// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types raised by the data-access layer.
//!
//! [`Error`] is generic over the collaborator error `E` (the
//! [`QueryExecutor`](crate::QueryExecutor) or
//! [`PrivilegedWriteService`](crate::PrivilegedWriteService) error). Engine
//! failures get their own variants; collaborator failures are carried in
//! [`Error::Executor`] exactly as the collaborator produced them.
//!
//! # Taxonomy
//!
//! | Kind | Variants | Raised when |
//! |------|----------|-------------|
//! | [`ErrorKind::Validation`] | `Validation` | Missing id, blank input |
//! | [`ErrorKind::Configuration`] | `UnboundTable`, `UnresolvedMapping` | No table can be resolved |
//! | [`ErrorKind::Cardinality`] | `Cardinality` | `select_one` matched 2+ rows |
//! | [`ErrorKind::Guard`] | `Guard` | Delete without any condition |
//! | [`ErrorKind::Decode`] | `Decode` | Column text does not parse into the attribute type |
//! | [`ErrorKind::Executor`] | `Executor` | Anything the collaborator reports |

use thiserror::Error;

/// Classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller input failed a precondition.
    Validation,

    /// Record metadata does not resolve to a table.
    Configuration,

    /// A single-record query matched more than one row.
    Cardinality,

    /// A destructive operation was refused.
    Guard,

    /// A result column could not be decoded into its attribute.
    Decode,

    /// The collaborator failed.
    Executor
}

/// Failure to decode column text into an attribute value.
///
/// Produced by [`Record::set`](crate::Record::set) and converted into
/// [`Error::Decode`] by the facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot decode {value:?} into attribute `{attribute}`: {reason}")]
pub struct DecodeError {
    /// Attribute identifier.
    pub attribute: String,

    /// Offending column text.
    pub value: String,

    /// Parser message.
    pub reason: String
}

impl DecodeError {
    /// Create a decode error for `attribute`.
    pub fn new(
        attribute: impl Into<String>,
        value: Option<&str>,
        reason: impl Into<String>
    ) -> Self {
        Self {
            attribute: attribute.into(),
            value:     value.unwrap_or_default().to_string(),
            reason:    reason.into()
        }
    }
}

/// Error type for all data-source operations.
#[derive(Debug, Error)]
pub enum Error<E> {
    /// Caller-supplied input failed a precondition.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The record type declares neither a table nor a table mapping.
    #[error("record `{record}` declares neither a table nor a table mapping")]
    UnboundTable {
        /// Record type name.
        record: &'static str
    },

    /// The mapping key has no active row in the mapping table.
    #[error("table mapping `{key}` has no active row in the mapping table")]
    UnresolvedMapping {
        /// Symbolic mapping key.
        key: String
    },

    /// A single-record query matched more than one row.
    #[error("expected at most one row, but the query returned {count}")]
    Cardinality {
        /// Number of rows actually returned.
        count: usize
    },

    /// An unconditional delete was refused.
    #[error("refusing to delete all `{record}` rows: the condition has no values")]
    Guard {
        /// Record type the delete targeted.
        record: &'static str
    },

    /// A column value could not be decoded into its attribute.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The collaborator failed; carried unchanged.
    #[error(transparent)]
    Executor(E)
}

impl<E> Error<E> {
    /// Shorthand for [`Error::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Get the taxonomy kind of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::UnboundTable {
                ..
            }
            | Self::UnresolvedMapping {
                ..
            } => ErrorKind::Configuration,
            Self::Cardinality {
                ..
            } => ErrorKind::Cardinality,
            Self::Guard {
                ..
            } => ErrorKind::Guard,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Executor(_) => ErrorKind::Executor
        }
    }

    /// Check if this error was raised by the engine rather than the
    /// collaborator.
    pub const fn is_engine(&self) -> bool {
        !matches!(self, Self::Executor(_))
    }

    /// Get the collaborator error, if this is one.
    pub const fn executor_error(&self) -> Option<&E> {
        match self {
            Self::Executor(e) => Some(e),
            _ => None
        }
    }
}
