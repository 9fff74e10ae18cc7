//! Per-owner translation collection.
//!
//! # Responsibility
//! - Hold every translation record of one owning entity in memory.
//! - Provide find-or-build for writes and a non-mutating probe for reads.
//!
//! # Invariants
//! - At most one record per (attribute, locale) pair; only `find_or_build`
//!   and the storage merge append, and both check the pair first.
//! - Reads through `text_for` never grow the collection.
//! - Not synchronized: concurrent mutation must be serialized by the caller.

use crate::model::translation::{AttributeTranslation, OwnerRef};
use log::debug;

/// Ordered set of translation records belonging to one owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationCollection {
    owner: OwnerRef,
    records: Vec<AttributeTranslation>,
}

impl TranslationCollection {
    /// Creates an empty collection for an owner with no stored records.
    pub fn new(owner: OwnerRef) -> Self {
        Self {
            owner,
            records: Vec::new(),
        }
    }

    /// Creates a collection from records loaded for `owner`.
    ///
    /// Duplicated (attribute, locale) pairs keep only the most recent write
    /// (highest id), so the uniqueness invariant holds even over inconsistent
    /// storage.
    pub fn from_records(owner: OwnerRef, records: Vec<AttributeTranslation>) -> Self {
        let mut collection = Self::new(owner);
        for record in records {
            match collection.position(&record.attribute, &record.locale) {
                Some(index) => {
                    debug!(
                        "event=collection_load module=model status=skip_duplicate attribute={} locale={}",
                        record.attribute, record.locale
                    );
                    if record.id > collection.records[index].id {
                        collection.records[index] = record;
                    }
                }
                None => collection.records.push(record),
            }
        }
        collection
    }

    /// Folds records loaded from storage into this collection.
    ///
    /// A record written before the load takes over the stored identity of its
    /// pair, so saving it updates the stored row instead of adding another.
    /// Pairs only present in storage are appended.
    pub(crate) fn merge_stored(&mut self, stored: TranslationCollection) {
        for record in stored.records {
            match self.position(&record.attribute, &record.locale) {
                Some(index) if self.records[index].is_new_record() => {
                    self.records[index].adopt_stored(&record);
                }
                Some(_) => {}
                None => self.records.push(record),
            }
        }
    }

    pub fn owner(&self) -> &OwnerRef {
        &self.owner
    }

    /// Returns the record for the pair, building and appending it if absent.
    pub fn find_or_build(&mut self, attribute: &str, locale: &str) -> &mut AttributeTranslation {
        let index = match self.position(attribute, locale) {
            Some(index) => index,
            None => {
                self.records.push(AttributeTranslation::new(
                    self.owner.clone(),
                    attribute,
                    locale,
                ));
                self.records.len() - 1
            }
        };
        &mut self.records[index]
    }

    /// Returns the stored text for the pair without building anything.
    pub fn text_for(&self, attribute: &str, locale: &str) -> Option<&str> {
        self.find(attribute, locale).and_then(AttributeTranslation::text)
    }

    pub fn find(&self, attribute: &str, locale: &str) -> Option<&AttributeTranslation> {
        self.records
            .iter()
            .find(|record| record.matches(attribute, locale))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeTranslation> {
        self.records.iter()
    }

    pub(crate) fn records_mut(&mut self) -> &mut [AttributeTranslation] {
        &mut self.records
    }

    fn position(&self, attribute: &str, locale: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.matches(attribute, locale))
    }
}
