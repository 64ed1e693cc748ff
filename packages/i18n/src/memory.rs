//! In-memory document used by tests and by targets without a live DOM.

use crate::document::{Binding, BindingKind, Document, Fragment};
use crate::value::{escape_html, RichText, Segment, ACCENT_CLASS};
use crate::Locale;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        children: Vec<NodeId>,
    },
    Text(String),
}

/// Element description used to populate a [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }
}

/// Arena-backed document tree. Nodes detached by a rewrite go on a free
/// list and their slots are reused, so repeated locale changes keep the
/// arena at a steady size.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    free: Vec<usize>,
    roots: Vec<NodeId>,
    lang: Option<String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element at the top level of the document.
    pub fn append(&mut self, element: Element) -> NodeId {
        let id = self.insert(element);
        self.roots.push(id);
        id
    }

    pub fn append_child(&mut self, parent: NodeId, element: Element) -> Option<NodeId> {
        let child = self.insert(element);
        match self.nodes.get_mut(parent.0) {
            Some(Node::Element { children, .. }) => {
                children.push(child);
                Some(child)
            }
            _ => None,
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.attached()
            .into_iter()
            .find(|node| self.attribute(*node, "id") == Some(id))
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match self.nodes.get(node.0)? {
            Node::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            Node::Text(_) => None,
        }
    }

    /// Element children of a node, text nodes skipped.
    pub fn element_children(&self, node: NodeId) -> Vec<NodeId> {
        self.children(node)
            .iter()
            .copied()
            .filter(|child| matches!(self.nodes.get(child.0), Some(Node::Element { .. })))
            .collect()
    }

    pub fn text_content(&self, node: NodeId) -> String {
        match self.nodes.get(node.0) {
            Some(Node::Text(text)) => text.clone(),
            Some(Node::Element { children, .. }) => children
                .iter()
                .map(|child| self.text_content(*child))
                .collect(),
            None => String::new(),
        }
    }

    pub fn inner_html(&self, node: NodeId) -> String {
        self.children(node)
            .iter()
            .map(|child| self.outer_html(*child))
            .collect()
    }

    pub fn outer_html(&self, node: NodeId) -> String {
        match self.nodes.get(node.0) {
            Some(Node::Text(text)) => escape_html(text),
            Some(Node::Element {
                tag,
                attributes,
                children,
            }) => {
                let mut out = format!("<{tag}");
                for (name, value) in attributes {
                    out.push_str(&format!(" {name}=\"{}\"", escape_html(value)));
                }
                out.push('>');
                for child in children {
                    out.push_str(&self.outer_html(*child));
                }
                out.push_str(&format!("</{tag}>"));
                out
            }
            None => String::new(),
        }
    }

    /// Allocated arena slots, live and free.
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    pub fn root_lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// Serialized view of everything a reader could observe.
    pub fn to_html(&self) -> String {
        let body: String = self.roots.iter().map(|root| self.outer_html(*root)).collect();
        match &self.lang {
            Some(lang) => format!("<html lang=\"{lang}\">{body}</html>"),
            None => format!("<html>{body}</html>"),
        }
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        match self.nodes.get(node.0) {
            Some(Node::Element { children, .. }) => children,
            _ => &[],
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = node;
                NodeId(index)
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Frees a detached node and its whole subtree.
    fn release(&mut self, node: NodeId) {
        let Some(slot) = self.nodes.get_mut(node.0) else {
            return;
        };
        if let Node::Element { children, .. } = std::mem::replace(slot, Node::Text(String::new())) {
            for child in children {
                self.release(child);
            }
        }
        self.free.push(node.0);
    }

    fn insert(&mut self, element: Element) -> NodeId {
        let mut children = Vec::new();
        if let Some(text) = element.text {
            children.push(self.push(Node::Text(text)));
        }
        for child in element.children {
            children.push(self.insert(child));
        }
        self.push(Node::Element {
            tag: element.tag,
            attributes: element.attributes.into_iter().collect(),
            children,
        })
    }

    fn insert_fragment(&mut self, fragment: &Fragment) -> NodeId {
        let mut element = Element::new(fragment.tag);
        if !fragment.classes.is_empty() {
            element = element.attr("class", &fragment.class_attr());
        }
        if let Some(text) = &fragment.text {
            element = element.text(text);
        }
        let id = self.insert(element);
        for child in &fragment.children {
            let child_id = self.insert_fragment(child);
            if let Some(Node::Element { children, .. }) = self.nodes.get_mut(id.0) {
                children.push(child_id);
            }
        }
        id
    }

    /// Attached nodes in document order.
    fn attached(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    fn set_children(&mut self, node: NodeId, new_children: Vec<NodeId>) {
        let detached = match self.nodes.get_mut(node.0) {
            Some(Node::Element { children, .. }) => std::mem::replace(children, new_children),
            _ => new_children,
        };
        for child in detached {
            self.release(child);
        }
    }

    fn attributes_mut(&mut self, node: NodeId) -> Option<&mut BTreeMap<String, String>> {
        match self.nodes.get_mut(node.0)? {
            Node::Element { attributes, .. } => Some(attributes),
            Node::Text(_) => None,
        }
    }

    fn classes(&self, node: NodeId) -> Vec<String> {
        self.attribute(node, "class")
            .map(|value| value.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

impl Document for MemoryDocument {
    type Handle = NodeId;

    fn bindings(&self) -> Vec<Binding<NodeId>> {
        let mut out = Vec::new();
        for node in self.attached() {
            for kind in [BindingKind::Content, BindingKind::Placeholder] {
                if let Some(key) = self.attribute(node, kind.attribute()) {
                    out.push(Binding {
                        target: node,
                        key: key.to_string(),
                        kind,
                    });
                }
            }
        }
        out
    }

    fn set_text(&mut self, target: &NodeId, text: &str) {
        let children = if text.is_empty() {
            Vec::new()
        } else {
            vec![self.push(Node::Text(text.to_string()))]
        };
        self.set_children(*target, children);
    }

    fn set_rich(&mut self, target: &NodeId, rich: &RichText) {
        let mut children = Vec::new();
        for segment in rich.segments() {
            let child = match segment {
                Segment::Text(text) => self.push(Node::Text(text.clone())),
                Segment::Accent(text) => {
                    self.insert(Element::new("span").attr("class", ACCENT_CLASS).text(text))
                }
            };
            children.push(child);
        }
        self.set_children(*target, children);
    }

    fn set_placeholder(&mut self, target: &NodeId, text: &str) {
        if let Some(attributes) = self.attributes_mut(*target) {
            attributes.insert("placeholder".to_string(), text.to_string());
        }
    }

    fn contains_id(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    fn set_root_lang(&mut self, locale: Locale) {
        self.lang = Some(locale.code().to_string());
    }

    fn set_attribute_by_id(&mut self, id: &str, name: &str, value: &str) -> bool {
        let Some(node) = self.find_by_id(id) else {
            return false;
        };
        if let Some(attributes) = self.attributes_mut(node) {
            attributes.insert(name.to_string(), value.to_string());
        }
        true
    }

    fn set_text_by_id(&mut self, id: &str, text: &str) -> bool {
        match self.find_by_id(id) {
            Some(node) => {
                self.set_text(&node, text);
                true
            }
            None => false,
        }
    }

    fn replace_children(&mut self, id: &str, children: &[Fragment]) -> bool {
        let Some(node) = self.find_by_id(id) else {
            return false;
        };
        let new_children = children
            .iter()
            .map(|fragment| self.insert_fragment(fragment))
            .collect();
        self.set_children(node, new_children);
        true
    }

    fn set_hidden_by_id(&mut self, id: &str, hidden: bool) -> bool {
        let Some(node) = self.find_by_id(id) else {
            return false;
        };
        if let Some(attributes) = self.attributes_mut(node) {
            if hidden {
                attributes.insert("hidden".to_string(), String::new());
            } else {
                attributes.remove("hidden");
            }
        }
        true
    }

    fn has_class_by_id(&self, id: &str, class: &str) -> bool {
        self.find_by_id(id)
            .map(|node| self.classes(node).iter().any(|c| c == class))
            .unwrap_or(false)
    }

    fn toggle_class_by_id(&mut self, id: &str, class: &str) -> Option<bool> {
        let node = self.find_by_id(id)?;
        let mut classes = self.classes(node);
        let present = if let Some(pos) = classes.iter().position(|c| c == class) {
            classes.remove(pos);
            false
        } else {
            classes.push(class.to_string());
            true
        };
        let attributes = self.attributes_mut(node)?;
        if classes.is_empty() {
            attributes.remove("class");
        } else {
            attributes.insert("class".to_string(), classes.join(" "));
        }
        Some(present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{CONTENT_ATTR, PLACEHOLDER_ATTR};

    #[test]
    fn scan_finds_both_binding_kinds_in_order() {
        let mut doc = MemoryDocument::new();
        doc.append(
            Element::new("form")
                .child(Element::new("label").attr(CONTENT_ATTR, "apply.label.name"))
                .child(Element::new("input").attr(PLACEHOLDER_ATTR, "apply.placeholder.name")),
        );
        let keys: Vec<(String, BindingKind)> = doc
            .bindings()
            .into_iter()
            .map(|binding| (binding.key, binding.kind))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("apply.label.name".to_string(), BindingKind::Content),
                ("apply.placeholder.name".to_string(), BindingKind::Placeholder),
            ]
        );
    }

    #[test]
    fn scan_is_read_only() {
        let mut doc = MemoryDocument::new();
        doc.append(Element::new("p").attr(CONTENT_ATTR, "a.b").text("Hallo"));
        let before = doc.to_html();
        let _ = doc.bindings();
        assert_eq!(doc.to_html(), before);
    }

    #[test]
    fn rich_content_is_structured() {
        let mut doc = MemoryDocument::new();
        let h2 = doc.append(Element::new("h2"));
        let rich = RichText::parse(r#"Über <span class="accent">uns</span>"#).unwrap();
        doc.set_rich(&h2, &rich);
        assert_eq!(doc.inner_html(h2), r#"Über <span class="accent">uns</span>"#);
        assert_eq!(doc.text_content(h2), "Über uns");
    }

    #[test]
    fn plain_text_is_never_parsed() {
        let mut doc = MemoryDocument::new();
        let p = doc.append(Element::new("p"));
        doc.set_text(&p, "<b>x</b>");
        assert_eq!(doc.text_content(p), "<b>x</b>");
        assert_eq!(doc.inner_html(p), "&lt;b&gt;x&lt;/b&gt;");
        assert!(doc.element_children(p).is_empty());
    }

    #[test]
    fn replaced_children_are_detached() {
        let mut doc = MemoryDocument::new();
        doc.append(Element::new("div").id("list").child(Element::new("p").id("old")));
        assert!(doc.replace_children("list", &[Fragment::new("p").text("new")]));
        assert_eq!(doc.find_by_id("old"), None);
        let list = doc.find_by_id("list").unwrap();
        assert_eq!(doc.inner_html(list), "<p>new</p>");
    }

    #[test]
    fn rewrites_reuse_detached_slots() {
        let mut doc = MemoryDocument::new();
        let h2 = doc.append(Element::new("h2").text("Über uns"));
        doc.append(Element::new("div").id("list"));
        let rich = RichText::parse(r#"About <span class="accent">us</span>"#).unwrap();
        let cards = [Fragment::new("div").child(Fragment::new("p").text("card"))];

        let rewrite = |doc: &mut MemoryDocument| {
            doc.set_rich(&h2, &rich);
            doc.set_text(&h2, "Über uns");
            doc.replace_children("list", &cards);
        };
        rewrite(&mut doc);
        rewrite(&mut doc);
        let steady = doc.arena_len();
        for _ in 0..20 {
            rewrite(&mut doc);
        }
        assert_eq!(doc.arena_len(), steady);
        assert_eq!(doc.text_content(h2), "Über uns");
        let list = doc.find_by_id("list").unwrap();
        assert_eq!(doc.inner_html(list), "<div><p>card</p></div>");
    }

    #[test]
    fn class_toggle_and_hidden() {
        let mut doc = MemoryDocument::new();
        doc.append(Element::new("div").id("past").attr("class", "events-past"));
        assert_eq!(doc.toggle_class_by_id("past", "active"), Some(true));
        assert!(doc.has_class_by_id("past", "active"));
        assert_eq!(doc.toggle_class_by_id("past", "active"), Some(false));
        assert_eq!(doc.toggle_class_by_id("missing", "active"), None);

        assert!(doc.set_hidden_by_id("past", true));
        let node = doc.find_by_id("past").unwrap();
        assert_eq!(doc.attribute(node, "hidden"), Some(""));
        doc.set_hidden_by_id("past", false);
        assert_eq!(doc.attribute(node, "hidden"), None);
    }
}
