use translatable_core::{AttributeTranslation, OwnerRef};
use uuid::Uuid;

#[test]
fn translation_serialization_uses_expected_wire_fields() {
    let owner_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let owner = OwnerRef::new("product", owner_id);
    let record =
        AttributeTranslation::persisted(42, owner, "name", "no", Some("bruksanvisning".into()));

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], 42);
    assert_eq!(json["owner"]["owner_type"], "product");
    assert_eq!(json["owner"]["owner_id"], owner_id.to_string());
    assert_eq!(json["attribute"], "name");
    assert_eq!(json["locale"], "no");
    assert_eq!(json["text"], "bruksanvisning");
    assert!(json.get("changed").is_none());

    let decoded: AttributeTranslation = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
    assert!(!decoded.has_pending_changes());
}

#[test]
fn unsaved_translation_serializes_null_id_and_text() {
    let owner = OwnerRef::new("product", Uuid::new_v4());
    let record = AttributeTranslation::new(owner.clone(), "description", "de");

    let json = serde_json::to_value(&record).unwrap();
    assert!(json["id"].is_null());
    assert!(json["text"].is_null());
    assert_eq!(owner.to_string(), format!("product#{}", owner.owner_id));
}
