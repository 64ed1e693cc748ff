use crate::config::I18nConfig;
use crate::document::{BindingKind, Document};
use crate::error::RenderError;
use crate::storage::LocaleSlot;
use crate::store::TranslationStore;
use crate::value::TranslationValue;
use crate::Locale;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use tracing::{debug, warn};

/// A component whose output depends on the locale beyond key substitution.
///
/// Subscribers run after bindings, persistence and links have been updated,
/// so they always observe a fully applied locale.
pub trait RenderSubscriber<D: Document> {
    fn on_locale_changed(&self, locale: Locale, document: &mut D) -> Result<(), RenderError>;
}

impl<D, F> RenderSubscriber<D> for F
where
    D: Document,
    F: Fn(Locale, &mut D) -> Result<(), RenderError>,
{
    fn on_locale_changed(&self, locale: Locale, document: &mut D) -> Result<(), RenderError> {
        self(locale, document)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Uninitialized,
    Active(Locale),
}

/// What a single locale application did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub locale: Locale,
    pub content_applied: usize,
    pub placeholders_applied: usize,
    /// Bound keys absent from the locale's dictionary, left untouched.
    pub missing: Vec<String>,
    pub persisted: bool,
    pub links_updated: usize,
    pub notified: usize,
    pub failed_subscribers: usize,
}

impl ApplyReport {
    fn new(locale: Locale) -> Self {
        Self {
            locale,
            content_applied: 0,
            placeholders_applied: 0,
            missing: Vec::new(),
            persisted: false,
            links_updated: 0,
            notified: 0,
            failed_subscribers: 0,
        }
    }
}

/// Owner of the current locale.
///
/// The only way to change the locale is [`set_locale`](Self::set_locale)
/// (or the helpers built on it). Every change rewrites all bindings, stores
/// the choice, refreshes locale links and then notifies subscribers in
/// registration order.
pub struct LocalizationController<D: Document, S: LocaleSlot> {
    store: Arc<TranslationStore>,
    document: D,
    slot: S,
    config: I18nConfig,
    startup: Locale,
    state: ControllerState,
    subscribers: Vec<Weak<dyn RenderSubscriber<D>>>,
}

impl<D: Document, S: LocaleSlot> LocalizationController<D, S> {
    pub fn new(store: Arc<TranslationStore>, document: D, slot: S, config: I18nConfig) -> Self {
        let startup = Self::read_startup(&slot);
        Self {
            store,
            document,
            slot,
            config,
            startup,
            state: ControllerState::Uninitialized,
            subscribers: Vec::new(),
        }
    }

    /// Resolves the startup locale and applies it. Does nothing once active.
    pub fn init(&mut self) -> Locale {
        if let ControllerState::Active(locale) = self.state {
            return locale;
        }
        let locale = self.resolve_startup();
        self.set_locale(locale);
        locale
    }

    /// The persisted locale if it is supported, otherwise the fallback.
    /// Read from the slot once, when the controller is built.
    pub fn resolve_startup(&self) -> Locale {
        self.startup
    }

    fn read_startup(slot: &S) -> Locale {
        let fallback = Locale::FALLBACK;
        match slot.load() {
            None => fallback,
            Some(raw) => Locale::from_code(&raw).unwrap_or_else(|| {
                warn!("i18n.startup: ignoring persisted locale {raw:?}, using {fallback}");
                fallback
            }),
        }
    }

    pub fn locale(&self) -> Locale {
        match self.state {
            ControllerState::Active(locale) => locale,
            ControllerState::Uninitialized => self.resolve_startup(),
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// String entry point. Unsupported codes are ignored and return `None`.
    pub fn set_locale_code(&mut self, code: &str) -> Option<ApplyReport> {
        match Locale::from_code(code) {
            Some(locale) => Some(self.set_locale(locale)),
            None => {
                debug!("i18n.set_locale: unsupported locale {code:?}, ignored");
                None
            }
        }
    }

    pub fn set_locale(&mut self, locale: Locale) -> ApplyReport {
        let mut report = ApplyReport::new(locale);

        self.apply_bindings(locale, &mut report);

        match self.slot.store(locale.code()) {
            Ok(()) => report.persisted = true,
            Err(err) => warn!("i18n.persist: {err}"),
        }

        self.apply_auxiliary(locale, &mut report);
        self.state = ControllerState::Active(locale);
        self.notify(locale, &mut report);

        debug!(
            "i18n.set_locale: locale={} content={} placeholders={} missing={} notified={} failed={}",
            locale,
            report.content_applied,
            report.placeholders_applied,
            report.missing.len(),
            report.notified,
            report.failed_subscribers
        );
        report
    }

    /// Switches to the other supported locale.
    pub fn toggle(&mut self) -> ApplyReport {
        let next = self.locale().other();
        self.set_locale(next)
    }

    /// Registers a subscriber. Only a weak reference is kept; the
    /// registration ends when the last strong reference is dropped.
    pub fn subscribe<T>(&mut self, subscriber: &Rc<T>)
    where
        T: RenderSubscriber<D> + 'static,
    {
        let subscriber: Rc<dyn RenderSubscriber<D>> = subscriber.clone();
        self.subscribers.push(Rc::downgrade(&subscriber));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    pub fn store(&self) -> &Arc<TranslationStore> {
        &self.store
    }

    pub fn config(&self) -> &I18nConfig {
        &self.config
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    fn apply_bindings(&mut self, locale: Locale, report: &mut ApplyReport) {
        for binding in self.document.bindings() {
            let Some(value) = self.store.lookup(locale, &binding.key) else {
                debug!("i18n.apply: missing key {} for {}", binding.key, locale);
                report.missing.push(binding.key);
                continue;
            };
            match (binding.kind, value) {
                (BindingKind::Content, TranslationValue::Plain(text)) => {
                    self.document.set_text(&binding.target, text);
                    report.content_applied += 1;
                }
                (BindingKind::Content, TranslationValue::Rich(rich)) => {
                    self.document.set_rich(&binding.target, rich);
                    report.content_applied += 1;
                }
                (BindingKind::Placeholder, value) => {
                    self.document
                        .set_placeholder(&binding.target, &value.plain_text());
                    report.placeholders_applied += 1;
                }
            }
        }
    }

    fn apply_auxiliary(&mut self, locale: Locale, report: &mut ApplyReport) {
        self.document.set_root_lang(locale);

        if let Some(toggle_id) = &self.config.toggle_id {
            self.document
                .set_text_by_id(toggle_id, locale.other().label());
        }

        for link in &self.config.links {
            if self
                .document
                .set_attribute_by_id(link.element_id(), "href", &link.href(locale))
            {
                report.links_updated += 1;
            }
        }
    }

    fn notify(&mut self, locale: Locale, report: &mut ApplyReport) {
        self.subscribers.retain(|weak| weak.strong_count() > 0);
        let live: Vec<Rc<dyn RenderSubscriber<D>>> =
            self.subscribers.iter().filter_map(Weak::upgrade).collect();

        for (index, subscriber) in live.iter().enumerate() {
            match subscriber.on_locale_changed(locale, &mut self.document) {
                Ok(()) => report.notified += 1,
                Err(err) => {
                    report.failed_subscribers += 1;
                    warn!("i18n.notify: subscriber #{index} failed for {locale}: {err}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{CONTENT_ATTR, PLACEHOLDER_ATTR};
    use crate::memory::{Element, MemoryDocument};
    use crate::storage::MemorySlot;
    use std::cell::RefCell;

    type Controller = LocalizationController<MemoryDocument, MemorySlot>;

    fn store() -> Arc<TranslationStore> {
        Arc::new(
            TranslationStore::from_catalogs(&[
                (
                    Locale::De,
                    r#"{"a.b": "Hallo", "ph": "Dein Name", "about.title": {"rich": "Über <span class=\"accent\">uns</span>"}}"#,
                ),
                (
                    Locale::En,
                    r#"{"a.b": "Hello", "ph": "Your name", "about.title": {"rich": "About <span class=\"accent\">us</span>"}}"#,
                ),
            ])
            .unwrap(),
        )
    }

    fn controller(slot: MemorySlot) -> Controller {
        let mut doc = MemoryDocument::new();
        doc.append(Element::new("p").id("greeting").attr(CONTENT_ATTR, "a.b"));
        doc.append(Element::new("input").id("name").attr(PLACEHOLDER_ATTR, "ph"));
        doc.append(Element::new("h2").id("about").attr(CONTENT_ATTR, "about.title"));
        doc.append(Element::new("button").id("lang-toggle").text("EN"));
        LocalizationController::new(store(), doc, slot, I18nConfig::site())
    }

    fn text(controller: &Controller, id: &str) -> String {
        let doc = controller.document();
        doc.text_content(doc.find_by_id(id).unwrap())
    }

    #[test]
    fn concrete_scenario() {
        let mut c = controller(MemorySlot::new());
        c.init();
        c.set_locale(Locale::En);
        assert_eq!(text(&c, "greeting"), "Hello");
        c.set_locale(Locale::De);
        assert_eq!(text(&c, "greeting"), "Hallo");
        assert!(c.set_locale_code("fr").is_none());
        assert_eq!(text(&c, "greeting"), "Hallo");
        assert_eq!(c.locale(), Locale::De);
    }

    #[test]
    fn starts_uninitialized_and_reports_startup_locale() {
        let c = controller(MemorySlot::with_value("en"));
        assert_eq!(c.state(), ControllerState::Uninitialized);
        assert_eq!(c.locale(), Locale::En);
        assert_eq!(text(&c, "greeting"), "");
    }

    #[test]
    fn startup_locale_is_read_once() {
        let slot = MemorySlot::with_value("xx");
        let c = controller(slot.clone());
        assert_eq!(c.resolve_startup(), Locale::FALLBACK);

        // Later writes by someone else do not change the resolved value.
        slot.store("en").unwrap();
        assert_eq!(c.locale(), Locale::FALLBACK);
        assert_eq!(c.resolve_startup(), Locale::FALLBACK);
    }

    #[test]
    fn init_applies_once() {
        let slot = MemorySlot::new();
        let mut c = controller(slot.clone());
        assert_eq!(c.init(), Locale::De);
        assert_eq!(c.state(), ControllerState::Active(Locale::De));
        assert_eq!(slot.get(), Some("de".to_string()));

        c.set_locale(Locale::En);
        assert_eq!(c.init(), Locale::En);
        assert_eq!(c.locale(), Locale::En);
    }

    #[test]
    fn placeholders_and_rich_content() {
        let mut c = controller(MemorySlot::new());
        let report = c.set_locale(Locale::En);
        assert_eq!(report.content_applied, 2);
        assert_eq!(report.placeholders_applied, 1);

        let doc = c.document();
        let input = doc.find_by_id("name").unwrap();
        assert_eq!(doc.attribute(input, "placeholder"), Some("Your name"));
        let about = doc.find_by_id("about").unwrap();
        assert_eq!(doc.inner_html(about), r#"About <span class="accent">us</span>"#);
    }

    #[test]
    fn auxiliary_attributes_follow_locale() {
        let mut c = controller(MemorySlot::new());
        c.document_mut()
            .append(Element::new("a").id("nav-rules").attr("href", "/docs/de/rules.html"));
        let report = c.set_locale(Locale::En);
        assert_eq!(report.links_updated, 1);

        let doc = c.document();
        assert_eq!(doc.root_lang(), Some("en"));
        let link = doc.find_by_id("nav-rules").unwrap();
        assert_eq!(doc.attribute(link, "href"), Some("/docs/en/rules.html"));
        assert_eq!(text(&c, "lang-toggle"), "DE");
    }

    #[test]
    fn toggle_flips_between_locales() {
        let mut c = controller(MemorySlot::new());
        c.init();
        assert_eq!(c.toggle().locale, Locale::En);
        assert_eq!(c.toggle().locale, Locale::De);
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let mut c = controller(MemorySlot::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first_seen = seen.clone();
        let first = Rc::new(
            move |locale: Locale, _doc: &mut MemoryDocument| -> Result<(), RenderError> {
                first_seen.borrow_mut().push(("first", locale));
                Ok(())
            },
        );
        let second_seen = seen.clone();
        let second = Rc::new(
            move |locale: Locale, doc: &mut MemoryDocument| -> Result<(), RenderError> {
                // Bindings are already applied when subscribers run.
                let node = doc.find_by_id("greeting").unwrap();
                assert_eq!(doc.text_content(node), "Hello");
                second_seen.borrow_mut().push(("second", locale));
                Ok(())
            },
        );
        c.subscribe(&first);
        c.subscribe(&second);

        let report = c.set_locale(Locale::En);
        assert_eq!(report.notified, 2);
        assert_eq!(
            *seen.borrow(),
            vec![("first", Locale::En), ("second", Locale::En)]
        );
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut c = controller(MemorySlot::new());
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let subscriber = Rc::new(
            move |_: Locale, _: &mut MemoryDocument| -> Result<(), RenderError> {
                *counter.borrow_mut() += 1;
                Ok(())
            },
        );
        c.subscribe(&subscriber);
        assert_eq!(c.subscriber_count(), 1);
        drop(subscriber);

        let report = c.set_locale(Locale::En);
        assert_eq!(report.notified, 0);
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(c.subscriber_count(), 0);
    }
}
