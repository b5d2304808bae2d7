// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL dialect configuration.
//!
//! [`Dialect`] controls the database-specific syntax emitted by the
//! [`SqlBuilder`](crate::SqlBuilder): bound-parameter placeholders and the
//! page-window clause.
//!
//! | Dialect | Placeholders | Page window |
//! |---------|--------------|-------------|
//! | MySQL | `?, ?, ?` | `LIMIT ?, ?` (offset, size) |
//! | PostgreSQL | `$1, $2, $3` | `LIMIT $n OFFSET $m` (size, offset) |

use std::{fmt, str::FromStr};

/// Database dialect for statement building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// MySQL and compatibles.
    ///
    /// - Placeholders: `?`
    /// - Page window: `LIMIT ?, ?`
    #[default]
    MySql,

    /// PostgreSQL.
    ///
    /// - Placeholders: `$1, $2, $3, ...`
    /// - Page window: `LIMIT $n OFFSET $m`
    Postgres
}

impl Dialect {
    /// Generate placeholder for parameter at given index (1-based).
    #[must_use]
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            Self::MySql => "?".to_string(),
            Self::Postgres => format!("${index}")
        }
    }

    /// Generate the page-window clause whose parameters start at `start`.
    ///
    /// Returns the clause and whether the offset is bound before the size.
    #[must_use]
    pub fn limit_clause(&self, start: usize) -> (String, bool) {
        match self {
            Self::MySql => ("LIMIT ?, ?".to_string(), true),
            Self::Postgres => (format!("LIMIT ${} OFFSET ${}", start, start + 1), false)
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MySql => "mysql",
            Self::Postgres => "postgres"
        })
    }
}

/// Error returned when a dialect name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown SQL dialect `{0}`")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Self::MySql),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            _ => Err(UnknownDialect(value.to_string()))
        }
    }
}
