#![allow(dead_code)]

use once_cell::sync::Lazy;
use std::sync::Arc;
use translatable_core::{
    AttributeRegistry, LocaleProvider, MemberError, OwnerRef, Translatable, TranslationCollection,
    Translations,
};
use uuid::Uuid;

static PRODUCT_ATTRIBUTES: Lazy<AttributeRegistry> =
    Lazy::new(|| AttributeRegistry::with_attributes(["name", "description"]));

/// Host entity with one plain column (`price`) and two translatable ones.
#[derive(Debug)]
pub struct Product {
    pub id: Uuid,
    pub price: i64,
    translations: Translations,
}

impl Product {
    pub fn new(defaults: Arc<dyn LocaleProvider>) -> Self {
        Self::with_id(Uuid::new_v4(), defaults)
    }

    pub fn with_id(id: Uuid, defaults: Arc<dyn LocaleProvider>) -> Self {
        Self {
            id,
            price: 0,
            translations: Translations::new(Self::owner_ref(id), defaults),
        }
    }

    pub fn with_collection(
        collection: TranslationCollection,
        defaults: Arc<dyn LocaleProvider>,
    ) -> Self {
        Self {
            id: collection.owner().owner_id,
            price: 0,
            translations: Translations::with_collection(collection, defaults),
        }
    }

    pub fn owner_ref(id: Uuid) -> OwnerRef {
        OwnerRef::new(Self::OWNER_TYPE, id)
    }
}

impl Translatable for Product {
    const OWNER_TYPE: &'static str = "product";

    fn translatable_attributes() -> &'static AttributeRegistry {
        &PRODUCT_ATTRIBUTES
    }

    fn translations(&self) -> &Translations {
        &self.translations
    }

    fn translations_mut(&mut self) -> &mut Translations {
        &mut self.translations
    }

    fn get_plain_member(&self, name: &str) -> Result<Option<String>, MemberError> {
        match name {
            "price" => Ok(Some(self.price.to_string())),
            other => Err(MemberError::unknown(Self::OWNER_TYPE, other)),
        }
    }

    fn set_plain_member(&mut self, name: &str, value: Option<String>) -> Result<(), MemberError> {
        match name {
            "price" | "price=" => {
                let raw = value.unwrap_or_default();
                self.price = raw.parse().map_err(|_| MemberError::InvalidValue {
                    member: "price".to_string(),
                    message: format!("`{raw}` is not an integer"),
                })?;
                Ok(())
            }
            other => Err(MemberError::unknown(Self::OWNER_TYPE, other)),
        }
    }

    fn has_plain_member(&self, name: &str) -> bool {
        matches!(name, "price" | "price=")
    }
}
