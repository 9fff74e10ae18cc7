mod common;

use common::Product;
use std::sync::Arc;
use translatable_core::{LocaleDefaults, LocaleProvider, MemberError, Translatable};

fn defaults(locale: &str) -> Arc<LocaleDefaults> {
    Arc::new(LocaleDefaults::fixed(locale))
}

fn product(locale: &str) -> Product {
    Product::new(defaults(locale))
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[test]
fn knows_which_members_it_responds_to() {
    let product = product("humbaba");

    for name in [
        "name",
        "name=",
        "name_en",
        "name_en=",
        "description",
        "description=",
        "description_de",
        "description_de=",
        "price",
    ] {
        assert!(product.responds_to(name), "{name}");
    }

    for name in [
        "name_foo_bar",
        "name_foo_bar=",
        "name_en_de",
        "humbaba",
        "humbaba=",
        "totallyUnknown",
    ] {
        assert!(!product.responds_to(name), "{name}");
    }
}

#[test]
fn responds_to_agrees_with_dispatch() {
    let mut product = product("en");

    for name in [
        "name",
        "name_en",
        "description_de",
        "price",
        "name_foo_bar",
        "humbaba",
        "totallyUnknown",
    ] {
        let dispatched = !matches!(
            product.get_member(name),
            Err(MemberError::UnknownMember { .. })
        );
        assert_eq!(product.responds_to(name), dispatched, "get {name}");

        let setter = format!("{name}=");
        let dispatched = !matches!(
            product.set_member(&setter, text("1")),
            Err(MemberError::UnknownMember { .. })
        );
        assert_eq!(product.responds_to(&setter), dispatched, "set {setter}");
    }
}

#[test]
fn does_not_intercept_other_members() {
    let mut product = product("en");

    let err = product.get_member("humbaba").unwrap_err();
    assert_eq!(
        err,
        MemberError::UnknownMember {
            owner_type: "product",
            member: "humbaba".to_string(),
        }
    );
    assert!(matches!(
        product.get_member("name_foo_bar"),
        Err(MemberError::UnknownMember { .. })
    ));
    assert!(matches!(
        product.set_member("name_foo_bar=", text("humbaba")),
        Err(MemberError::UnknownMember { .. })
    ));
    assert!(product.translations().collection().is_empty());
}

#[test]
fn plain_members_still_reach_the_host() {
    let mut product = product("en");

    product.set_member("price", text("5")).unwrap();
    assert_eq!(product.get_member("price").unwrap(), text("5"));
    assert!(matches!(
        product.set_member("price", text("five")),
        Err(MemberError::InvalidValue { .. })
    ));
}

#[test]
fn setter_spelling_is_not_readable() {
    let product = product("en");
    assert!(matches!(
        product.get_member("name="),
        Err(MemberError::UnknownMember { .. })
    ));
}

#[test]
fn writes_through_accessors_land_on_matching_records() {
    let mut product = product("en");

    product.set_member("name_en=", text("humbaba")).unwrap();
    assert_eq!(
        product.translations().collection().text_for("name", "en"),
        Some("humbaba")
    );

    product.set_member("name_de", text("enkidu")).unwrap();
    assert_eq!(
        product.translations().collection().text_for("name", "de"),
        Some("enkidu")
    );
    assert_eq!(product.get_member("name_de").unwrap(), text("enkidu"));
    assert_eq!(
        product.read_translatable_attribute("name", Some("de")),
        Some("enkidu")
    );
}

#[test]
fn write_then_read_is_exact_per_locale() {
    let mut product = product("en");

    product.write_translatable_attribute("description", text("leather vest"), Some("en"));
    assert_eq!(
        product.read_translatable_attribute("description", Some("en")),
        Some("leather vest")
    );
    assert_eq!(product.read_translatable_attribute("description", Some("no")), None);
    assert_eq!(product.read_translatable_attribute("name", Some("en")), None);
}

#[test]
fn reads_never_build_records() {
    let product = product("en");

    assert_eq!(product.get_member("name").unwrap(), None);
    assert_eq!(product.get_member("name_nl").unwrap(), None);
    assert!(product.translations().collection().is_empty());
}

#[test]
fn uses_instance_locale_when_none_is_given() {
    let mut product = product("en");
    product.set_locale(text("nl"));
    product.set_member("name", text("gebruiksaanwijzing")).unwrap();
    product.set_member("name_no", text("bruksanvisning")).unwrap();
    product.set_member("name_hr", text("uputa za upotrebu")).unwrap();

    assert_eq!(product.get_member("name").unwrap(), text("gebruiksaanwijzing"));
    assert_eq!(product.get_member("name_nl").unwrap(), text("gebruiksaanwijzing"));
    assert_eq!(
        product.read_translatable_attribute("name", Some("nl")),
        Some("gebruiksaanwijzing")
    );
    assert_eq!(product.get_member("name_no").unwrap(), text("bruksanvisning"));
    assert_eq!(product.get_member("name_hr").unwrap(), text("uputa za upotrebu"));
    assert_eq!(product.get_member("name_en").unwrap(), None);

    product.set_locale(text("en"));
    product
        .set_member("description", text("You're a man, you don't need this"))
        .unwrap();
    assert_eq!(product.get_member("name").unwrap(), None);
    assert_eq!(
        product.get_member("description").unwrap(),
        text("You're a man, you don't need this")
    );

    product.set_locale(text("no"));
    assert_eq!(product.get_member("name").unwrap(), text("bruksanvisning"));
    assert_eq!(product.get_member("description").unwrap(), None);
    assert_eq!(
        product.get_member("description_en").unwrap(),
        text("You're a man, you don't need this")
    );
}

#[test]
fn explicit_reads_and_writes_follow_current_locale() {
    let mut product = product("en");
    product.set_locale(text("nl"));

    product.write_translatable_attribute("name", text("gebruiksaanwijzing"), None);
    product.write_translatable_attribute("name", text("bruksanvisning"), Some("no"));

    assert_eq!(
        product.read_translatable_attribute("name", None),
        Some("gebruiksaanwijzing")
    );
    assert_eq!(
        product.read_translatable_attribute("name", Some("no")),
        Some("bruksanvisning")
    );
    assert_eq!(product.read_translatable_attribute("name", Some("en")), None);
}

#[test]
fn falls_back_to_process_default_locale() {
    let defaults = defaults("humbaba");
    let mut product = Product::new(defaults.clone());
    assert_eq!(product.locale(), defaults.current_locale());
    assert_eq!(product.locale(), "humbaba");

    defaults.set_locale(text("no"));
    product.set_member("name", text("skinnvest")).unwrap();
    product.set_member("description", text("bli itj fæst utn")).unwrap();
    product.set_member("name_en", text("leather vest")).unwrap();

    assert_eq!(product.get_member("name").unwrap(), text("skinnvest"));
    assert_eq!(product.get_member("name_no").unwrap(), text("skinnvest"));
    assert_eq!(product.get_member("name_en").unwrap(), text("leather vest"));
}

#[test]
fn instance_override_ignores_later_default_changes() {
    let defaults = defaults("en");
    let mut product = Product::new(defaults.clone());

    product.set_locale(text("nl"));
    assert_eq!(product.locale(), "nl");

    defaults.set_locale(text("fr"));
    assert_eq!(product.locale(), "nl");

    product.set_locale(None);
    assert_eq!(product.locale(), "fr");

    defaults.reset();
    assert_eq!(product.locale(), "en");
}

#[test]
fn repeated_writes_reuse_one_record() {
    let mut product = product("en");

    product.set_member("name_en", text("Donkey")).unwrap();
    product.set_member("name_en=", text("Horse")).unwrap();

    let collection = product.translations().collection();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.text_for("name", "en"), Some("Horse"));
}

#[test]
fn assign_members_writes_translations_and_plain_members() {
    let mut product = product("en");

    product
        .assign_members([
            ("name_en", text("Table")),
            ("name_sv", text("Skörvsta")),
            ("price", text("12")),
        ])
        .unwrap();

    assert_eq!(product.get_member("name_en").unwrap(), text("Table"));
    assert_eq!(product.get_member("name_sv").unwrap(), text("Skörvsta"));
    assert_eq!(product.price, 12);

    let err = product
        .assign_members([("name_en", text("Chair")), ("humbaba", text("x"))])
        .unwrap_err();
    assert!(matches!(err, MemberError::UnknownMember { .. }));
    assert_eq!(product.get_member("name_en").unwrap(), text("Chair"));
}

#[test]
fn empty_text_is_distinct_from_absent_only_when_probed() {
    let mut product = product("en");
    product.set_member("name_en", text("")).unwrap();

    assert_eq!(product.get_member("name_en").unwrap(), text(""));
    let record = product
        .translations()
        .collection()
        .find("name", "en")
        .expect("record should exist");
    assert_eq!(record.text(), Some(""));
}
