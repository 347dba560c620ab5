use scraper::{ElementRef, Html, Node};
use std::collections::HashMap;

use crate::dom::{css, Document, Element, ElementStatus};

/// Tags whose subtrees are invisible content and never become elements
const SKIP_CHILDREN: &[&str] = &["script", "style", "noscript", "svg"];

/// Parse raw page markup into a flat, markup-ordered `Document`.
pub fn parse_page(markup: &str) -> Document {
    let html = Html::parse_document(markup);

    // Extract <title>
    let title = scraper::Selector::parse("title")
        .ok()
        .and_then(|sel| html.select(&sel).next())
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();

    let mut doc = Document::new(title.trim());
    flatten_element(html.root_element(), &mut doc);
    doc
}

fn flatten_element(el: ElementRef<'_>, doc: &mut Document) {
    let tag = el.value().name.local.as_ref().to_string();
    if SKIP_CHILDREN.contains(&tag.as_str()) {
        return;
    }

    let attributes: HashMap<String, String> = el
        .value()
        .attrs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    // Own text: direct text children only, so a container's text does not
    // swallow its element children's text.
    let mut text = String::new();
    for child_ref in el.children() {
        if let Node::Text(t) = child_ref.value() {
            let s = t.text.trim();
            if !s.is_empty() {
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(s);
            }
        }
    }

    let style = attributes
        .get("style")
        .map(|s| css::parse_inline_style(s))
        .unwrap_or_default();

    doc.push(Element {
        tag,
        attributes,
        text,
        style,
        status: ElementStatus::Active,
    });

    for child_ref in el.children() {
        if let Some(child_el) = ElementRef::wrap(child_ref) {
            flatten_element(child_el, doc);
        }
    }
}
