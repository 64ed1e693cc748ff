//! Browser implementations of the localization seams.

use i18n::{
    Binding, BindingKind, Document, Fragment, Locale, LocaleSlot, RichText, Segment,
    StorageError, ACCENT_CLASS, CONTENT_ATTR, PLACEHOLDER_ATTR,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

/// The live DOM of the current page.
pub struct WebDocument {
    document: Option<web_sys::Document>,
}

impl WebDocument {
    pub fn current() -> Self {
        Self {
            document: web_sys::window().and_then(|window| window.document()),
        }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.as_ref()?.get_element_by_id(id)
    }

    fn build(&self, fragment: &Fragment) -> Option<Element> {
        let element = self.document.as_ref()?.create_element(fragment.tag).ok()?;
        if !fragment.classes.is_empty() {
            element.set_class_name(&fragment.class_attr());
        }
        if let Some(text) = &fragment.text {
            element.set_text_content(Some(text));
        }
        for child in &fragment.children {
            if let Some(child) = self.build(child) {
                let _ = element.append_child(&child);
            }
        }
        Some(element)
    }
}

impl Document for WebDocument {
    type Handle = Element;

    fn bindings(&self) -> Vec<Binding<Element>> {
        let Some(document) = &self.document else {
            return Vec::new();
        };
        let selector = format!("[{CONTENT_ATTR}], [{PLACEHOLDER_ATTR}]");
        let Ok(list) = document.query_selector_all(&selector) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        for index in 0..list.length() {
            let Some(element) = list.item(index).and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            for kind in [BindingKind::Content, BindingKind::Placeholder] {
                if let Some(key) = element.get_attribute(kind.attribute()) {
                    out.push(Binding {
                        target: element.clone(),
                        key,
                        kind,
                    });
                }
            }
        }
        out
    }

    fn set_text(&mut self, target: &Element, text: &str) {
        target.set_text_content(Some(text));
    }

    fn set_rich(&mut self, target: &Element, rich: &RichText) {
        let Some(document) = &self.document else {
            return;
        };
        target.set_text_content(None);
        for segment in rich.segments() {
            match segment {
                Segment::Text(text) => {
                    let node = document.create_text_node(text);
                    let _ = target.append_child(&node);
                }
                Segment::Accent(text) => {
                    if let Ok(span) = document.create_element("span") {
                        span.set_class_name(ACCENT_CLASS);
                        span.set_text_content(Some(text));
                        let _ = target.append_child(&span);
                    }
                }
            }
        }
    }

    fn set_placeholder(&mut self, target: &Element, text: &str) {
        if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
            input.set_placeholder(text);
        } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
            area.set_placeholder(text);
        } else {
            let _ = target.set_attribute("placeholder", text);
        }
    }

    fn contains_id(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn set_root_lang(&mut self, locale: Locale) {
        if let Some(root) = self
            .document
            .as_ref()
            .and_then(|document| document.document_element())
        {
            let _ = root.set_attribute("lang", locale.code());
        }
    }

    fn set_attribute_by_id(&mut self, id: &str, name: &str, value: &str) -> bool {
        match self.element(id) {
            Some(element) => element.set_attribute(name, value).is_ok(),
            None => false,
        }
    }

    fn set_text_by_id(&mut self, id: &str, text: &str) -> bool {
        match self.element(id) {
            Some(element) => {
                element.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }

    fn replace_children(&mut self, id: &str, children: &[Fragment]) -> bool {
        let Some(container) = self.element(id) else {
            return false;
        };
        container.set_text_content(None);
        for fragment in children {
            if let Some(child) = self.build(fragment) {
                let _ = container.append_child(&child);
            }
        }
        true
    }

    fn set_hidden_by_id(&mut self, id: &str, hidden: bool) -> bool {
        match self
            .element(id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        {
            Some(element) => {
                element.set_hidden(hidden);
                true
            }
            None => false,
        }
    }

    fn has_class_by_id(&self, id: &str, class: &str) -> bool {
        self.element(id)
            .map(|element| element.class_list().contains(class))
            .unwrap_or(false)
    }

    fn toggle_class_by_id(&mut self, id: &str, class: &str) -> Option<bool> {
        self.element(id)?.class_list().toggle(class).ok()
    }
}

/// `window.localStorage` entry holding the locale code.
pub struct LocalStorageSlot {
    key: String,
}

impl LocalStorageSlot {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl LocaleSlot for LocalStorageSlot {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn store(&self, code: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(&self.key, code)
            .map_err(|err| StorageError::Write(format!("{err:?}")))
    }
}
