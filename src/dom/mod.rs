pub mod parser;
pub mod css;

use std::collections::HashMap;

use crate::dom::css::StyleProps;

/// Lifecycle status of a page element.
///
/// Removal is a one-way transition: once a reader dismisses a headline it is
/// excluded from every class query that feeds the rotation, permanently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementStatus {
    /// Participates in class queries and rotation.
    Active,
    /// Dismissed by the user; invisible and excluded from class queries.
    Removed,
}

/// A single page element in the flat document store.
///
/// Unlike a full browser DOM this keeps no child tree: the page is a flat,
/// markup-ordered sequence, which is all the rotation and clock need. The
/// `style` attribute is kept both parsed (for queries) and serialized back
/// into `attributes` (so style writes stay observable as attributes).
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub attributes: HashMap<String, String>,
    pub text: String,
    pub style: StyleProps,
    pub status: ElementStatus,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: HashMap::new(),
            text: String::new(),
            style: StyleProps::default(),
            status: ElementStatus::Active,
        }
    }

    /// Set an attribute. A `style` attribute is also parsed into `self.style`.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if name == "style" {
            self.style = css::parse_inline_style(&value);
        }
        self.attributes.insert(name, value);
        self
    }

    /// Append a class to the `class` attribute.
    pub fn with_class(mut self, class: &str) -> Self {
        let classes = match self.attributes.get("class") {
            Some(existing) if !existing.is_empty() => format!("{} {}", existing, class),
            _ => class.to_string(),
        };
        self.attributes.insert("class".into(), classes);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Whether the `class` attribute contains `class` as a whole token.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|t| t == class))
            .unwrap_or(false)
    }

    /// Whether this element should currently be drawn.
    pub fn is_visible(&self) -> bool {
        self.status == ElementStatus::Active && self.style.display != Some(css::Display::None)
    }

    pub fn show(&mut self) {
        self.style.display = Some(css::Display::Inline);
        self.sync_style_attr();
    }

    pub fn hide(&mut self) {
        self.style.display = Some(css::Display::None);
        self.sync_style_attr();
    }

    /// Permanently remove this element: hidden now, excluded from class
    /// queries forever after.
    pub fn remove(&mut self) {
        self.status = ElementStatus::Removed;
        self.hide();
    }

    /// Set the animation duration, written as both the vendor-prefixed and
    /// the standard property in the serialized style attribute.
    pub fn set_animation_duration(&mut self, seconds: f32) {
        self.style.animation_duration = Some(seconds);
        self.sync_style_attr();
    }

    fn sync_style_attr(&mut self) {
        self.attributes
            .insert("style".into(), css::render_inline_style(&self.style));
    }
}

/// The flat, markup-ordered element store for one page.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub title: String,
    elements: Vec<Element>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// First element with the given id, regardless of status.
    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == Some(id))
    }

    pub fn by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == Some(id))
    }

    /// Number of Active elements carrying the class. Removed elements are
    /// invisible to this count.
    pub fn class_count(&self, class: &str) -> usize {
        self.elements
            .iter()
            .filter(|e| e.status == ElementStatus::Active && e.has_class(class))
            .count()
    }

    /// The `n`-th Active element with the class, in markup order.
    pub fn nth_of_class(&self, class: &str, n: usize) -> Option<&Element> {
        self.elements
            .iter()
            .filter(|e| e.status == ElementStatus::Active && e.has_class(class))
            .nth(n)
    }

    pub fn nth_of_class_mut(&mut self, class: &str, n: usize) -> Option<&mut Element> {
        self.elements
            .iter_mut()
            .filter(|e| e.status == ElementStatus::Active && e.has_class(class))
            .nth(n)
    }

    /// Texts of all Active elements with the class, in markup order.
    pub fn texts_of_class(&self, class: &str) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|e| e.status == ElementStatus::Active && e.has_class(class))
            .map(|e| e.text.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_queries_follow_markup_order() {
        let mut doc = Document::new("test");
        doc.push(Element::new("h2").with_class("headline").with_text("first"));
        doc.push(Element::new("div").with_text("not a headline"));
        doc.push(Element::new("h2").with_class("headline").with_text("second"));

        assert_eq!(doc.class_count("headline"), 2);
        assert_eq!(doc.nth_of_class("headline", 0).unwrap().text, "first");
        assert_eq!(doc.nth_of_class("headline", 1).unwrap().text, "second");
        assert!(doc.nth_of_class("headline", 2).is_none());
    }

    #[test]
    fn removed_elements_leave_class_queries() {
        let mut doc = Document::new("test");
        doc.push(Element::new("h2").with_class("headline").with_text("a"));
        doc.push(Element::new("h2").with_class("headline").with_text("b"));

        doc.nth_of_class_mut("headline", 0).unwrap().remove();

        assert_eq!(doc.class_count("headline"), 1);
        assert_eq!(doc.nth_of_class("headline", 0).unwrap().text, "b");
    }

    #[test]
    fn class_token_matching_is_exact() {
        let el = Element::new("div").with_attr("class", "ticker ticker__item");
        assert!(el.has_class("ticker"));
        assert!(el.has_class("ticker__item"));
        assert!(!el.has_class("tick"));
    }

    #[test]
    fn show_hide_round_trip() {
        let mut el = Element::new("h2").with_attr("style", "display:none;");
        assert!(!el.is_visible());
        el.show();
        assert!(el.is_visible());
        assert_eq!(el.attr("style"), Some("display:inline;"));
        el.hide();
        assert!(!el.is_visible());
    }

    #[test]
    fn removal_is_permanent() {
        let mut el = Element::new("h2").with_class("headline");
        el.remove();
        el.show();
        assert_eq!(el.status, ElementStatus::Removed);
        assert!(!el.is_visible());
    }
}
