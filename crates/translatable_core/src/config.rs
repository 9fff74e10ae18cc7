//! Storage naming configuration for translation records.
//!
//! # Responsibility
//! - Name the side table that holds translation records.
//! - Name the polymorphic owner columns (`<prefix>_type`, `<prefix>_id`).
//!
//! # Invariants
//! - Both names are plain SQL identifiers; they are interpolated into SQL
//!   text, so `validate()` must pass before any statement is rendered.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default side table name.
pub const DEFAULT_TABLE_NAME: &str = "attribute_translations";
/// Default prefix of the owner reference columns.
pub const DEFAULT_OWNER_PREFIX: &str = "translatable";

static SQL_IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,62}$").expect("valid identifier regex"));

/// Table and column naming used by the SQLite persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Side table holding one row per translation record.
    pub table_name: String,
    /// Owner column prefix, e.g. `translatable` -> `translatable_type`.
    pub owner_prefix: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            owner_prefix: DEFAULT_OWNER_PREFIX.to_string(),
        }
    }
}

impl StorageSettings {
    /// Checks that both names are safe to interpolate into SQL.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !SQL_IDENTIFIER_RE.is_match(&self.table_name) {
            return Err(SettingsError::InvalidTableName(self.table_name.clone()));
        }
        if !SQL_IDENTIFIER_RE.is_match(&self.owner_prefix) {
            return Err(SettingsError::InvalidOwnerPrefix(self.owner_prefix.clone()));
        }
        Ok(())
    }

    /// Column storing the owner type tag.
    pub fn owner_type_column(&self) -> String {
        format!("{}_type", self.owner_prefix)
    }

    /// Column storing the owner identifier.
    pub fn owner_id_column(&self) -> String {
        format!("{}_id", self.owner_prefix)
    }
}

/// Storage settings validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    InvalidTableName(String),
    InvalidOwnerPrefix(String),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTableName(value) => {
                write!(f, "table name is not a valid SQL identifier: `{value}`")
            }
            Self::InvalidOwnerPrefix(value) => {
                write!(f, "owner prefix is not a valid SQL identifier: `{value}`")
            }
        }
    }
}

impl Error for SettingsError {}
