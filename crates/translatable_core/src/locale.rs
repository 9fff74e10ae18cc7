//! Default locale resolution.
//!
//! # Responsibility
//! - Answer "what is the current default locale" for entities that carry no
//!   per-instance override.
//! - Keep the process default in an explicitly constructed object so callers
//!   (and tests) can substitute or reset it without ambient global state.
//!
//! # Invariants
//! - Locales are opaque strings; nothing here validates or normalizes them.
//! - `LocaleDefaults::current_locale()` returns the override when set,
//!   otherwise the fallback provider's answer.

use std::fmt::{Debug, Formatter};
use std::sync::{Arc, PoisonError, RwLock};

/// Source of the current default locale.
pub trait LocaleProvider: Send + Sync {
    fn current_locale(&self) -> String;
}

/// Provider that always answers the same locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale(String);

impl FixedLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(locale.into())
    }
}

impl LocaleProvider for FixedLocale {
    fn current_locale(&self) -> String {
        self.0.clone()
    }
}

/// Crate-level locale configuration.
///
/// Wraps an external provider (typically an i18n library default) with an
/// optional explicit override. Share it between entities through `Arc`.
pub struct LocaleDefaults {
    locale: RwLock<Option<String>>,
    fallback: Arc<dyn LocaleProvider>,
}

impl LocaleDefaults {
    /// Creates defaults that delegate to `fallback` until overridden.
    pub fn new(fallback: Arc<dyn LocaleProvider>) -> Self {
        Self {
            locale: RwLock::new(None),
            fallback,
        }
    }

    /// Creates defaults backed by a fixed fallback locale.
    pub fn fixed(locale: impl Into<String>) -> Self {
        Self::new(Arc::new(FixedLocale::new(locale)))
    }

    /// Sets or clears the explicit override.
    pub fn set_locale(&self, locale: Option<String>) {
        let mut guard = self.locale.write().unwrap_or_else(PoisonError::into_inner);
        *guard = locale;
    }

    /// Returns the explicit override, if any.
    pub fn explicit_locale(&self) -> Option<String> {
        self.locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drops the override so the fallback provider answers again.
    pub fn reset(&self) {
        self.set_locale(None);
    }
}

impl LocaleProvider for LocaleDefaults {
    fn current_locale(&self) -> String {
        self.explicit_locale()
            .unwrap_or_else(|| self.fallback.current_locale())
    }
}

impl Debug for LocaleDefaults {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleDefaults")
            .field("locale", &self.explicit_locale())
            .field("fallback", &self.fallback.current_locale())
            .finish()
    }
}
