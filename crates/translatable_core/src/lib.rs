//! Localized text storage for arbitrary entity attributes.
//!
//! An entity type registers which of its attributes are translatable; callers
//! then read or write any of them in any locale, either explicitly or through
//! dynamically named accessors such as `name_en=`. Values live in a side table
//! of (owner, attribute, locale, text) records.

pub mod config;
pub mod db;
pub mod locale;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod translatable;

pub use config::{SettingsError, StorageSettings};
pub use locale::{FixedLocale, LocaleDefaults, LocaleProvider};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::collection::TranslationCollection;
pub use model::translation::{AttributeTranslation, OwnerRef, TranslationId};
pub use repo::translation_repo::{
    RepoError, RepoResult, SaveSummary, SqliteTranslationRepository, TranslationRepository,
};
pub use service::translation_service::TranslationService;
pub use translatable::accessor::{parse_accessor, Accessor};
pub use translatable::entity::{MemberError, Translatable, Translations};
pub use translatable::registry::AttributeRegistry;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
