//! The document seam.
//!
//! The controller never talks to a browser directly. It scans bindings and
//! writes through this trait, which the web front end implements over the
//! live DOM and tests implement with [`crate::MemoryDocument`].

use crate::value::RichText;
use crate::Locale;

/// Attribute declaring a content binding.
pub const CONTENT_ATTR: &str = "data-i18n";
/// Attribute declaring a placeholder binding.
pub const PLACEHOLDER_ATTR: &str = "data-i18n-placeholder";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Content,
    Placeholder,
}

impl BindingKind {
    pub fn attribute(self) -> &'static str {
        match self {
            BindingKind::Content => CONTENT_ATTR,
            BindingKind::Placeholder => PLACEHOLDER_ATTR,
        }
    }
}

/// An element wired to a translation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding<H> {
    pub target: H,
    pub key: String,
    pub kind: BindingKind,
}

pub trait Document {
    type Handle: Clone;

    /// Every element carrying a binding attribute, in document order.
    /// Scanning never mutates the document.
    fn bindings(&self) -> Vec<Binding<Self::Handle>>;

    fn set_text(&mut self, target: &Self::Handle, text: &str);

    fn set_rich(&mut self, target: &Self::Handle, rich: &RichText);

    fn set_placeholder(&mut self, target: &Self::Handle, text: &str);

    fn contains_id(&self, id: &str) -> bool;

    /// Sets the `lang` attribute of the document root.
    fn set_root_lang(&mut self, locale: Locale);

    /// Returns `false` when no element has the id.
    fn set_attribute_by_id(&mut self, id: &str, name: &str, value: &str) -> bool;

    fn set_text_by_id(&mut self, id: &str, text: &str) -> bool;

    /// Replaces all children of the element with the given fragments.
    fn replace_children(&mut self, id: &str, children: &[Fragment]) -> bool;

    fn set_hidden_by_id(&mut self, id: &str, hidden: bool) -> bool;

    fn has_class_by_id(&self, id: &str, class: &str) -> bool;

    /// Flips a class and returns whether it is now present, or `None` when
    /// the element does not exist.
    fn toggle_class_by_id(&mut self, id: &str, class: &str) -> Option<bool>;
}

/// A detached element tree built by renderers and inserted with
/// [`Document::replace_children`]. Text is always inserted as text, never
/// parsed as markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub text: Option<String>,
    pub children: Vec<Fragment>,
}

impl Fragment {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Adds space-separated classes; empty names are skipped.
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Fragment) -> Self {
        self.children.push(child);
        self
    }

    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Concatenated text of this fragment and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Fragment> {
        if self.classes.iter().any(|c| c == class) {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_by_class(class))
    }
}
