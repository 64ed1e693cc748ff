use crate::error::I18nError;
use crate::value::{RichText, TranslationValue};
use crate::Locale;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, OnceLock};

/// Keys whose values may carry an accent span. Everything else is plain text.
pub const RICH_KEYS: &[&str] = &[
    "about.title",
    "team.title",
    "events.title",
    "socials.title",
    "cta.title",
    "apply.title",
];

const BUNDLED: &[(Locale, &str)] = &[
    (Locale::De, include_str!("../locales/de.json")),
    (Locale::En, include_str!("../locales/en.json")),
];

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogEntry {
    Plain(String),
    Rich { rich: String },
}

/// Immutable per-locale dictionaries.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    dictionaries: HashMap<Locale, HashMap<String, TranslationValue>>,
}

impl TranslationStore {
    /// Builds a store from one JSON catalog per locale.
    ///
    /// A catalog is an object mapping keys to either a string (plain text) or
    /// `{ "rich": "<markup>" }`. Rich entries are only accepted for
    /// [`RICH_KEYS`] and must parse as accent-span markup.
    pub fn from_catalogs(catalogs: &[(Locale, &str)]) -> Result<Self, I18nError> {
        let mut dictionaries = HashMap::new();
        for (locale, source) in catalogs {
            let entries: HashMap<String, CatalogEntry> = serde_json::from_str(source)
                .map_err(|source| I18nError::Catalog {
                    locale: *locale,
                    source,
                })?;

            let mut dictionary = HashMap::with_capacity(entries.len());
            for (key, entry) in entries {
                let value = match entry {
                    CatalogEntry::Plain(text) => TranslationValue::Plain(text),
                    CatalogEntry::Rich { rich } => {
                        if !RICH_KEYS.contains(&key.as_str()) {
                            return Err(I18nError::RichNotAllowed { key });
                        }
                        let parsed = RichText::parse(&rich)
                            .map_err(|reason| I18nError::InvalidMarkup {
                                key: key.clone(),
                                reason,
                            })?;
                        TranslationValue::Rich(parsed)
                    }
                };
                dictionary.insert(key, value);
            }
            dictionaries.insert(*locale, dictionary);
        }
        Ok(Self { dictionaries })
    }

    /// The site's bundled German and English catalogs.
    pub fn builtin() -> Arc<TranslationStore> {
        static BUILTIN: OnceLock<Arc<TranslationStore>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| match TranslationStore::from_catalogs(BUNDLED) {
                Ok(store) => Arc::new(store),
                Err(err) => {
                    tracing::error!("i18n.builtin: bundled catalog rejected: {err}");
                    Arc::new(TranslationStore::default())
                }
            })
            .clone()
    }

    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&TranslationValue> {
        self.dictionaries.get(&locale)?.get(key)
    }

    pub fn contains(&self, locale: Locale, key: &str) -> bool {
        self.lookup(locale, key).is_some()
    }

    /// Plain text for a key: requested locale, then the fallback locale, then
    /// the key itself.
    pub fn text(&self, locale: Locale, key: &str) -> String {
        self.lookup(locale, key)
            .or_else(|| self.lookup(Locale::FALLBACK, key))
            .map(TranslationValue::plain_text)
            .unwrap_or_else(|| key.to_string())
    }

    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        Locale::ALL
            .into_iter()
            .filter(|locale| self.dictionaries.contains_key(locale))
    }

    pub fn keys(&self, locale: Locale) -> impl Iterator<Item = &str> {
        self.dictionaries
            .get(&locale)
            .into_iter()
            .flat_map(|dictionary| dictionary.keys().map(String::as_str))
    }

    /// Keys present in some locale but missing from others.
    pub fn coverage(&self) -> CoverageReport {
        let all: BTreeSet<&str> = self
            .dictionaries
            .values()
            .flat_map(|dictionary| dictionary.keys().map(String::as_str))
            .collect();

        let mut missing = BTreeMap::new();
        for locale in Locale::ALL {
            let gaps: Vec<String> = all
                .iter()
                .filter(|key| !self.contains(locale, key))
                .map(|key| key.to_string())
                .collect();
            if !gaps.is_empty() {
                missing.insert(locale, gaps);
            }
        }
        CoverageReport {
            total_keys: all.len(),
            missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    pub total_keys: usize,
    pub missing: BTreeMap<Locale, Vec<String>>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TranslationStore {
        TranslationStore::from_catalogs(&[
            (Locale::De, r#"{"a.b": "Hallo", "only.de": "Nur deutsch"}"#),
            (Locale::En, r#"{"a.b": "Hello"}"#),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_returns_per_locale_values() {
        let store = store();
        assert_eq!(
            store.lookup(Locale::De, "a.b"),
            Some(&TranslationValue::Plain("Hallo".to_string()))
        );
        assert_eq!(
            store.lookup(Locale::En, "a.b"),
            Some(&TranslationValue::Plain("Hello".to_string()))
        );
    }

    #[test]
    fn missing_key_is_not_an_error() {
        assert_eq!(store().lookup(Locale::En, "only.de"), None);
        assert_eq!(store().lookup(Locale::En, "nope"), None);
    }

    #[test]
    fn text_falls_back_to_german_then_key() {
        let store = store();
        assert_eq!(store.text(Locale::En, "only.de"), "Nur deutsch");
        assert_eq!(store.text(Locale::En, "missing.key"), "missing.key");
    }

    #[test]
    fn rich_values_only_for_approved_keys() {
        let ok = TranslationStore::from_catalogs(&[(
            Locale::De,
            r#"{"about.title": {"rich": "Über <span class=\"accent\">uns</span>"}}"#,
        )])
        .unwrap();
        assert!(ok.lookup(Locale::De, "about.title").unwrap().is_rich());

        let err = TranslationStore::from_catalogs(&[(
            Locale::De,
            r#"{"apply.label.name": {"rich": "<span class=\"accent\">x</span>"}}"#,
        )])
        .unwrap_err();
        assert!(matches!(err, I18nError::RichNotAllowed { key } if key == "apply.label.name"));
    }

    #[test]
    fn markup_in_plain_values_stays_plain() {
        let store =
            TranslationStore::from_catalogs(&[(Locale::De, r#"{"x": "<b>not bold</b>"}"#)])
                .unwrap();
        assert_eq!(
            store.lookup(Locale::De, "x"),
            Some(&TranslationValue::Plain("<b>not bold</b>".to_string()))
        );
    }

    #[test]
    fn malformed_catalog_is_rejected() {
        let err = TranslationStore::from_catalogs(&[(Locale::En, "{not json")]).unwrap_err();
        assert!(matches!(err, I18nError::Catalog { locale: Locale::En, .. }));
    }

    #[test]
    fn coverage_reports_gaps() {
        let report = store().coverage();
        assert_eq!(report.total_keys, 2);
        assert_eq!(
            report.missing.get(&Locale::En),
            Some(&vec!["only.de".to_string()])
        );
        assert!(!report.is_complete());
    }

    #[test]
    fn bundled_catalog_is_complete() {
        let store = TranslationStore::from_catalogs(BUNDLED).unwrap();
        let report = store.coverage();
        assert!(report.is_complete(), "missing keys: {:?}", report.missing);
        assert_eq!(store.text(Locale::En, "apply.btn.submit"), "Submit application");
        assert_eq!(store.text(Locale::De, "events.title"), "Unsere Events");
    }
}
