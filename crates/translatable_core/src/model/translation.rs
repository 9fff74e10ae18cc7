//! Translation record model.
//!
//! # Responsibility
//! - Define the (owner, attribute, locale, text) unit of storage.
//! - Track whether a record is new or carries unsaved changes.
//!
//! # Invariants
//! - `id == None` means the record has never been persisted.
//! - `attribute` and `locale` are compared as raw strings, no normalization.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Identifier of a persisted translation record.
pub type TranslationId = i64;

/// Typed polymorphic reference to the entity that owns a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerRef {
    /// Owner type tag, e.g. `product`.
    pub owner_type: String,
    /// Stable owner identifier.
    pub owner_id: Uuid,
}

impl OwnerRef {
    pub fn new(owner_type: impl Into<String>, owner_id: Uuid) -> Self {
        Self {
            owner_type: owner_type.into(),
            owner_id,
        }
    }
}

impl Display for OwnerRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.owner_type, self.owner_id)
    }
}

/// One localized value of one attribute for one owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeTranslation {
    /// Storage identity; `None` until the owner is saved.
    pub id: Option<TranslationId>,
    pub owner: OwnerRef,
    /// Base attribute name, e.g. `name`.
    pub attribute: String,
    pub locale: String,
    text: Option<String>,
    #[serde(skip)]
    changed: bool,
}

impl AttributeTranslation {
    /// Builds an unsaved record with absent text.
    pub fn new(owner: OwnerRef, attribute: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            id: None,
            owner,
            attribute: attribute.into(),
            locale: locale.into(),
            text: None,
            changed: false,
        }
    }

    /// Rebuilds a record loaded from storage. The result carries no changes.
    pub fn persisted(
        id: TranslationId,
        owner: OwnerRef,
        attribute: impl Into<String>,
        locale: impl Into<String>,
        text: Option<String>,
    ) -> Self {
        Self {
            id: Some(id),
            owner,
            attribute: attribute.into(),
            locale: locale.into(),
            text,
            changed: false,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replaces the text. Only a differing value marks the record changed.
    pub fn set_text(&mut self, text: Option<String>) {
        if self.text != text {
            self.text = text;
            self.changed = true;
        }
    }

    pub fn is_new_record(&self) -> bool {
        self.id.is_none()
    }

    /// Whether a save would write this record.
    pub fn has_pending_changes(&self) -> bool {
        self.is_new_record() || self.changed
    }

    pub fn matches(&self, attribute: &str, locale: &str) -> bool {
        self.attribute == attribute && self.locale == locale
    }

    /// Takes over the identity of the stored record for the same pair.
    ///
    /// The in-memory text is kept; the record stays pending only if that
    /// text differs from what storage holds.
    pub(crate) fn adopt_stored(&mut self, stored: &AttributeTranslation) {
        self.id = stored.id;
        self.changed = self.text != stored.text;
    }

    /// Records the outcome of a committed save.
    pub(crate) fn mark_persisted(&mut self, id: TranslationId) {
        self.id = Some(id);
        self.changed = false;
    }
}
