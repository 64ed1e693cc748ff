use dioxus::prelude::*;
use i18n::{
    ApplyReport, EventFeed, EventsRenderer, I18nConfig, Locale, LocalizationController,
    RenderError, RenderSubscriber, TranslationStore,
};
use std::cell::RefCell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
pub type PageDocument = crate::dom::WebDocument;
#[cfg(not(target_arch = "wasm32"))]
pub type PageDocument = i18n::MemoryDocument;

#[cfg(target_arch = "wasm32")]
pub type PageSlot = crate::dom::LocalStorageSlot;
#[cfg(not(target_arch = "wasm32"))]
pub type PageSlot = i18n::MemorySlot;

pub type PageController = LocalizationController<PageDocument, PageSlot>;

#[cfg(target_arch = "wasm32")]
fn page_parts(config: &I18nConfig) -> (PageDocument, PageSlot) {
    (
        crate::dom::WebDocument::current(),
        crate::dom::LocalStorageSlot::new(&config.storage_key),
    )
}

// Server rendering has no live DOM; bindings are applied once hydrated.
#[cfg(not(target_arch = "wasm32"))]
fn page_parts(_config: &I18nConfig) -> (PageDocument, PageSlot) {
    (i18n::MemoryDocument::new(), i18n::MemorySlot::new())
}

/// Mirrors every locale change into a signal, so components that render
/// localized text themselves re-render too.
struct LangSignal(Signal<Locale>);

impl RenderSubscriber<PageDocument> for LangSignal {
    fn on_locale_changed(&self, locale: Locale, _: &mut PageDocument) -> Result<(), RenderError> {
        let mut lang = self.0;
        lang.set(locale);
        Ok(())
    }
}

/// Shared handle to the page's localization controller.
#[derive(Clone)]
pub struct Localization {
    controller: Rc<RefCell<PageController>>,
    lang: Signal<Locale>,
    _bridge: Rc<LangSignal>,
}

impl Localization {
    pub fn locale(&self) -> Locale {
        self.controller.borrow().locale()
    }

    pub fn lang(&self) -> Signal<Locale> {
        self.lang
    }

    pub fn init(&self) -> Locale {
        self.controller.borrow_mut().init()
    }

    pub fn set_locale(&self, locale: Locale) -> ApplyReport {
        self.controller.borrow_mut().set_locale(locale)
    }

    pub fn toggle(&self) -> ApplyReport {
        self.controller.borrow_mut().toggle()
    }

    /// Re-applies the current locale, for content mounted after the last
    /// change (a new route, for example).
    pub fn refresh(&self) -> ApplyReport {
        let mut controller = self.controller.borrow_mut();
        let locale = controller.locale();
        controller.set_locale(locale)
    }

    pub fn subscribe<T>(&self, subscriber: &Rc<T>)
    where
        T: RenderSubscriber<PageDocument> + 'static,
    {
        self.controller.borrow_mut().subscribe(subscriber);
    }

    pub fn load_events(&self, renderer: &EventsRenderer, feed: EventFeed) {
        let mut controller = self.controller.borrow_mut();
        let locale = controller.locale();
        if let Err(err) = renderer.load(controller.document_mut(), locale, feed) {
            tracing::warn!("events.load: {err}");
        }
    }

    pub fn toggle_past_events(&self, renderer: &EventsRenderer) {
        let mut controller = self.controller.borrow_mut();
        let locale = controller.locale();
        if let Err(err) = renderer.toggle_past(controller.document_mut(), locale) {
            tracing::warn!("events.toggle: {err}");
        }
    }
}

/// Owns the page's localization controller and applies the persisted (or
/// fallback) locale once the page is mounted.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let lang = use_signal(|| Locale::FALLBACK);
    let localization = use_hook(|| {
        let config = I18nConfig::site();
        let (document, slot) = page_parts(&config);
        let mut controller =
            LocalizationController::new(TranslationStore::builtin(), document, slot, config);

        let bridge = Rc::new(LangSignal(lang));
        controller.subscribe(&bridge);
        Localization {
            controller: Rc::new(RefCell::new(controller)),
            lang,
            _bridge: bridge,
        }
    });
    use_context_provider(|| localization.clone());

    use_effect(move || {
        let locale = localization.init();
        tracing::debug!("i18n.init: locale={locale}");
    });

    rsx! { {children} }
}

pub fn use_localization() -> Localization {
    use_context::<Localization>()
}

pub fn use_lang() -> Signal<Locale> {
    use_localization().lang()
}

/// Re-applies bindings after the calling component mounts.
pub fn use_localized_page() {
    let localization = use_localization();
    use_effect(move || {
        localization.refresh();
    });
}

/// Plain text for a key in the given locale, falling back to German and
/// then to the key itself.
pub fn t(locale: Locale, key: &str) -> String {
    TranslationStore::builtin().text(locale, key)
}

/// Text a bound element is first rendered with. Bound elements never read
/// the locale signal; the controller rewrites them in place.
pub fn initial_text(key: &str) -> String {
    t(Locale::FALLBACK, key)
}
