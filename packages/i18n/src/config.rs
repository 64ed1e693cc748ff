use crate::error::I18nError;
use crate::Locale;

const LANG_PLACEHOLDER: &str = "{lang}";

/// An outbound link whose path embeds the current locale code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleLink {
    element_id: String,
    template: String,
}

impl LocaleLink {
    pub fn new(element_id: &str, template: &str) -> Result<Self, I18nError> {
        if !template.contains(LANG_PLACEHOLDER) {
            return Err(I18nError::InvalidLinkTemplate(template.to_string()));
        }
        Ok(Self {
            element_id: element_id.to_string(),
            template: template.to_string(),
        })
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn href(&self, locale: Locale) -> String {
        self.template.replace(LANG_PLACEHOLDER, locale.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nConfig {
    /// Key of the durable slot; also the localStorage key in the browser.
    pub storage_key: String,
    /// Button whose label names the language a click switches to.
    pub toggle_id: Option<String>,
    pub links: Vec<LocaleLink>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            storage_key: "lang".to_string(),
            toggle_id: Some("lang-toggle".to_string()),
            links: Vec::new(),
        }
    }
}

impl I18nConfig {
    /// Configuration used by the site: default slot and toggle, plus the
    /// rules and imprint links that point at per-language documents.
    pub fn site() -> Self {
        let links = [
            ("nav-rules", "/docs/{lang}/rules.html"),
            ("footer-imprint", "/legal/{lang}/imprint.html"),
        ]
        .into_iter()
        .filter_map(|(id, template)| LocaleLink::new(id, template).ok())
        .collect();
        Self {
            links,
            ..Self::default()
        }
    }

    pub fn with_link(mut self, link: LocaleLink) -> Self {
        self.links.push(link);
        self
    }
}
