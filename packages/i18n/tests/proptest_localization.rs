//! Property tests over generated catalogs and documents.

use i18n::{
    Element, I18nConfig, Locale, LocalizationController, MemoryDocument, MemorySlot, NodeId,
    TranslationStore, CONTENT_ATTR,
};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;

fn locale() -> impl Strategy<Value = Locale> {
    prop_oneof![Just(Locale::De), Just(Locale::En)]
}

/// Up to eight keys; each key has an optional value per locale.
fn catalog() -> impl Strategy<Value = BTreeMap<String, (Option<String>, Option<String>)>> {
    prop::collection::btree_map(
        "[a-z]{1,6}\\.[a-z]{1,6}",
        (
            prop::option::of("[ -~]{0,24}"),
            prop::option::of("[ -~]{0,24}"),
        ),
        1..8,
    )
}

fn build(
    entries: &BTreeMap<String, (Option<String>, Option<String>)>,
) -> (LocalizationController<MemoryDocument, MemorySlot>, Vec<(String, NodeId)>) {
    let mut de = serde_json::Map::new();
    let mut en = serde_json::Map::new();
    for (key, (de_value, en_value)) in entries {
        if let Some(value) = de_value {
            de.insert(key.clone(), serde_json::Value::String(value.clone()));
        }
        if let Some(value) = en_value {
            en.insert(key.clone(), serde_json::Value::String(value.clone()));
        }
    }
    let de = serde_json::Value::Object(de).to_string();
    let en = serde_json::Value::Object(en).to_string();
    let store = TranslationStore::from_catalogs(&[(Locale::De, de.as_str()), (Locale::En, en.as_str())])
        .expect("generated catalog is valid");

    let mut doc = MemoryDocument::new();
    let nodes = entries
        .keys()
        .map(|key| {
            let node = doc.append(Element::new("p").attr(CONTENT_ATTR, key).text("initial"));
            (key.clone(), node)
        })
        .collect();
    let controller = LocalizationController::new(
        Arc::new(store),
        doc,
        MemorySlot::new(),
        I18nConfig::default(),
    );
    (controller, nodes)
}

proptest! {
    #[test]
    fn present_keys_show_exact_value(entries in catalog(), target in locale()) {
        let (mut controller, nodes) = build(&entries);
        controller.set_locale(target);
        for (key, node) in nodes {
            let (de, en) = &entries[&key];
            let expected = match target {
                Locale::De => de,
                Locale::En => en,
            };
            let shown = controller.document().text_content(node);
            match expected {
                Some(value) => prop_assert_eq!(&shown, value),
                None => prop_assert_eq!(shown.as_str(), "initial"),
            }
        }
    }

    #[test]
    fn applying_twice_equals_applying_once(entries in catalog(), target in locale()) {
        let (mut once, _) = build(&entries);
        once.set_locale(target);
        let (mut twice, _) = build(&entries);
        twice.set_locale(target);
        twice.set_locale(target);
        prop_assert_eq!(once.document().to_html(), twice.document().to_html());
    }

    #[test]
    fn missing_keys_keep_previous_content(entries in catalog(), first in locale(), second in locale()) {
        let (mut controller, nodes) = build(&entries);
        controller.set_locale(first);
        let before: Vec<String> = nodes
            .iter()
            .map(|(_, node)| controller.document().text_content(*node))
            .collect();
        controller.set_locale(second);
        for ((key, node), previous) in nodes.iter().zip(before) {
            if !controller.store().contains(second, key) {
                prop_assert_eq!(controller.document().text_content(*node), previous);
            }
        }
    }
}
