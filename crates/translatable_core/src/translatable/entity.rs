//! Translatable entity capability.
//!
//! # Responsibility
//! - Hold per-instance translation state (collection + locale override).
//! - Route accessor names through the dispatcher into reads/writes, and
//!   forward everything else to the host's plain member handling.
//!
//! # Invariants
//! - `responds_to(name)` is true exactly when `get_member`/`set_member` would
//!   not fail with `MemberError::UnknownMember` for that name.
//! - Reads never build records; writes go through `find_or_build`.
//! - No fallback across locales: a read answers only the exact pair.

use crate::locale::LocaleProvider;
use crate::model::collection::TranslationCollection;
use crate::model::translation::OwnerRef;
use crate::translatable::accessor::Accessor;
use crate::translatable::registry::AttributeRegistry;
use log::trace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

/// Per-instance translation state embedded in a host entity.
///
/// `loaded` records whether the owner's stored records have been folded into
/// the collection; it flips once and never resets.
pub struct Translations {
    collection: TranslationCollection,
    loaded: bool,
    locale: Option<String>,
    defaults: Arc<dyn LocaleProvider>,
}

impl Translations {
    /// State for an owner whose stored translations are not loaded yet.
    pub fn new(owner: OwnerRef, defaults: Arc<dyn LocaleProvider>) -> Self {
        Self {
            collection: TranslationCollection::new(owner),
            loaded: false,
            locale: None,
            defaults,
        }
    }

    /// State around a collection already populated from storage.
    pub fn with_collection(
        collection: TranslationCollection,
        defaults: Arc<dyn LocaleProvider>,
    ) -> Self {
        Self {
            collection,
            loaded: true,
            locale: None,
            defaults,
        }
    }

    /// Instance override if set, otherwise the provider's current default.
    pub fn locale(&self) -> String {
        self.locale
            .clone()
            .unwrap_or_else(|| self.defaults.current_locale())
    }

    pub fn set_locale(&mut self, locale: Option<String>) {
        self.locale = locale;
    }

    pub fn collection(&self) -> &TranslationCollection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut TranslationCollection {
        &mut self.collection
    }

    /// Whether stored records have been loaded into this instance.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Folds the owner's stored records in, keeping writes made before the
    /// load. Later calls are ignored.
    pub fn merge_loaded(&mut self, stored: TranslationCollection) -> bool {
        if self.loaded {
            return false;
        }
        self.collection.merge_stored(stored);
        self.loaded = true;
        true
    }

    pub fn owner(&self) -> &OwnerRef {
        self.collection.owner()
    }

    pub fn read(&self, attribute: &str, locale: Option<&str>) -> Option<&str> {
        match locale {
            Some(locale) => self.collection.text_for(attribute, locale),
            None => self.collection.text_for(attribute, &self.locale()),
        }
    }

    pub fn write(&mut self, attribute: &str, text: Option<String>, locale: Option<&str>) {
        let locale = locale.map_or_else(|| self.locale(), str::to_string);
        trace!(
            "event=translation_write module=translatable owner={} attribute={} locale={}",
            self.collection.owner(),
            attribute,
            locale
        );
        self.collection
            .find_or_build(attribute, &locale)
            .set_text(text);
    }
}

impl Debug for Translations {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translations")
            .field("collection", &self.collection)
            .field("loaded", &self.loaded)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

/// Failure of generic member access on a translatable entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberError {
    /// Neither a translatable accessor nor a plain member of the host.
    UnknownMember {
        owner_type: &'static str,
        member: String,
    },
    /// The host recognized the member but rejected the value.
    InvalidValue { member: String, message: String },
}

impl MemberError {
    pub fn unknown(owner_type: &'static str, member: impl Into<String>) -> Self {
        Self::UnknownMember {
            owner_type,
            member: member.into(),
        }
    }
}

impl Display for MemberError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMember { owner_type, member } => {
                write!(f, "undefined member `{member}` for {owner_type}")
            }
            Self::InvalidValue { member, message } => {
                write!(f, "invalid value for `{member}`: {message}")
            }
        }
    }
}

impl Error for MemberError {}

/// Capability of an entity type whose attributes can be stored per locale.
///
/// Implementors provide the type-level registration and access to the
/// embedded `Translations`; everything else is provided. Plain (column)
/// members are reached through the `*_plain_member` hooks, which unrecognized
/// names are forwarded to unchanged.
pub trait Translatable {
    /// Type tag stored as the owner type of every translation record.
    const OWNER_TYPE: &'static str;

    fn translatable_attributes() -> &'static AttributeRegistry;

    fn translations(&self) -> &Translations;

    fn translations_mut(&mut self) -> &mut Translations;

    fn get_plain_member(&self, name: &str) -> Result<Option<String>, MemberError> {
        Err(MemberError::unknown(Self::OWNER_TYPE, name))
    }

    fn set_plain_member(&mut self, name: &str, _value: Option<String>) -> Result<(), MemberError> {
        Err(MemberError::unknown(Self::OWNER_TYPE, name))
    }

    fn has_plain_member(&self, _name: &str) -> bool {
        false
    }

    fn locale(&self) -> String {
        self.translations().locale()
    }

    fn set_locale(&mut self, locale: Option<String>) {
        self.translations_mut().set_locale(locale);
    }

    /// Reads the text stored for `attribute` in `locale` (default: current).
    fn read_translatable_attribute(&self, attribute: &str, locale: Option<&str>) -> Option<&str> {
        self.translations().read(attribute, locale)
    }

    /// Writes `text` for `attribute` in `locale` (default: current).
    fn write_translatable_attribute(
        &mut self,
        attribute: &str,
        text: Option<String>,
        locale: Option<&str>,
    ) {
        self.translations_mut().write(attribute, text, locale);
    }

    /// Recognizes `name` as a translatable accessor of this type.
    fn translatable_accessor(&self, name: &str) -> Option<Accessor> {
        Self::translatable_attributes().parse(name)
    }

    /// Whether dispatch can handle `name`: setter spellings (`name=`) through
    /// `set_member`, everything else through `get_member`.
    fn responds_to(&self, name: &str) -> bool {
        self.translatable_accessor(name).is_some() || self.has_plain_member(name)
    }

    /// Dispatches a getter by name.
    ///
    /// A setter-form name is not readable and falls through to the host.
    fn get_member(&self, name: &str) -> Result<Option<String>, MemberError> {
        match self.translatable_accessor(name) {
            Some(accessor) if !accessor.is_setter => Ok(self
                .read_translatable_attribute(&accessor.attribute, accessor.locale.as_deref())
                .map(str::to_string)),
            _ => self.get_plain_member(name),
        }
    }

    /// Dispatches a write by member name.
    ///
    /// Accepts both the bare (`name_en`) and setter (`name_en=`) spellings.
    fn set_member(&mut self, name: &str, value: Option<String>) -> Result<(), MemberError> {
        let setter_name;
        let setter = if name.ends_with('=') {
            name
        } else {
            setter_name = format!("{name}=");
            setter_name.as_str()
        };

        match self.translatable_accessor(setter) {
            Some(accessor) => {
                self.write_translatable_attribute(
                    &accessor.attribute,
                    value,
                    accessor.locale.as_deref(),
                );
                Ok(())
            }
            None => self.set_plain_member(name, value),
        }
    }

    /// Assigns several members in order, stopping at the first failure.
    fn assign_members<I, K>(&mut self, members: I) -> Result<(), MemberError>
    where
        I: IntoIterator<Item = (K, Option<String>)>,
        K: AsRef<str>,
    {
        for (name, value) in members {
            self.set_member(name.as_ref(), value)?;
        }
        Ok(())
    }
}
