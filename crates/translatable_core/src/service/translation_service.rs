//! Translation use-case service.
//!
//! # Responsibility
//! - Populate a translatable entity's collection from storage.
//! - Run the autosave cascade when an owner is saved.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - An owner's stored records are loaded into an instance once, and always
//!   before that instance is saved, so a save never adds a second record for
//!   a stored (attribute, locale) pair.
//! - Persistence failures propagate unchanged; nothing is retried here.

use crate::model::collection::TranslationCollection;
use crate::model::translation::OwnerRef;
use crate::repo::translation_repo::{RepoResult, SaveSummary, TranslationRepository};
use crate::translatable::entity::Translatable;

/// Use-case service wrapper for translation persistence.
pub struct TranslationService<R: TranslationRepository> {
    repo: R,
}

impl<R: TranslationRepository> TranslationService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads the collection stored for `owner`.
    pub fn load_translations(&self, owner: &OwnerRef) -> RepoResult<TranslationCollection> {
        let records = self.repo.load_for_owner(owner)?;
        Ok(TranslationCollection::from_records(owner.clone(), records))
    }

    /// Populates `entity` with its stored translations.
    ///
    /// Writes made before the load are kept and take over the stored identity
    /// of their pair. Returns `false` without touching storage when the
    /// entity was already loaded.
    pub fn attach<T: Translatable>(&self, entity: &mut T) -> RepoResult<bool> {
        if entity.translations().is_loaded() {
            return Ok(false);
        }

        let owner = entity.translations().owner().clone();
        let stored = self.load_translations(&owner)?;
        Ok(entity.translations_mut().merge_loaded(stored))
    }

    /// Persists every new or changed translation held by `entity`, loading
    /// its stored translations first if that has not happened yet.
    pub fn save<T: Translatable>(&mut self, entity: &mut T) -> RepoResult<SaveSummary> {
        self.attach(entity)?;
        self.repo
            .save_collection(entity.translations_mut().collection_mut())
    }

    /// Counts stored translation records for `owner`.
    pub fn count_for_owner(&self, owner: &OwnerRef) -> RepoResult<u64> {
        self.repo.count_for_owner(owner)
    }

    /// Returns the wrapped repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }
}
