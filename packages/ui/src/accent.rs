use dioxus::prelude::*;
use i18n::{Locale, Segment, TranslationStore, TranslationValue};

/// Initial markup for a rich heading. The controller owns the element's
/// children afterwards, so this never re-renders on a locale change.
#[component]
pub fn AccentText(i18n_key: &'static str) -> Element {
    let store = TranslationStore::builtin();
    let segments = match store.lookup(Locale::FALLBACK, i18n_key) {
        Some(TranslationValue::Rich(rich)) => rich.segments().to_vec(),
        Some(TranslationValue::Plain(text)) => vec![Segment::Text(text.clone())],
        None => vec![Segment::Text(i18n_key.to_string())],
    };

    rsx! {
        for segment in segments {
            match segment {
                Segment::Text(text) => rsx! { "{text}" },
                Segment::Accent(text) => rsx! {
                    span { class: i18n::ACCENT_CLASS, "{text}" }
                },
            }
        }
    }
}
