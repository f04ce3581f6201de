// src/core/html.rs
//
// Query helpers over a parsed `scraper::Html` tree.
// Everything here is read-only and page-agnostic; page knowledge lives in `specs`.

use regex::Regex;
use scraper::{CaseSensitivity, ElementRef, Html, Node, Selector};

use super::sanitize::normalize_ws;

pub fn parse_document(body: &str) -> Html {
    Html::parse_document(body)
}

pub fn parse_fragment(body: &str) -> Html {
    Html::parse_fragment(body)
}

/// Compile a selector known at compile time.
pub fn sel(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// All elements of the document, in document order.
pub fn elements(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    doc.tree.root().descendants().filter_map(ElementRef::wrap)
}

/// First element whose `id` attribute is exactly `id`.
pub fn element_by_id<'a>(doc: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    elements(doc).find(|el| el.value().id() == Some(id))
}

/// Elements carrying `class` among their classes.
pub fn elements_with_class<'a>(doc: &'a Html, class: &'a str) -> impl Iterator<Item = ElementRef<'a>> {
    elements(doc).filter(move |el| el.value().has_class(class, CaseSensitivity::CaseSensitive))
}

/// Text of every comment node, in document order.
pub fn comments(doc: &Html) -> impl Iterator<Item = &str> {
    doc.tree.root().descendants().filter_map(|node| match node.value() {
        Node::Comment(c) => Some(&*c.comment),
        _ => None,
    })
}

/// Visible text of an element. Text nodes are joined with a space so that
/// `<b>A</b><br>B` reads "A B", then whitespace is collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    let joined = el.text().collect::<Vec<_>>().join(" ");
    normalize_ws(&joined)
}

/// Text of an element as rendered inline (`<a>Kent State</a>*` → "Kent State*").
pub fn inline_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// `href` of the first anchor inside `el` (or `el` itself).
pub fn first_href<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    el.descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "a")
        .filter_map(|a| a.value().attr("href"))
        .find(|h| !h.trim().is_empty())
}

/// First `<a>` whose text matches `pattern`.
pub fn anchor_matching<'a>(doc: &'a Html, pattern: &Regex) -> Option<ElementRef<'a>> {
    elements(doc)
        .filter(|el| el.value().name() == "a")
        .find(|a| pattern.is_match(&text_of(*a)))
}

/// Whether any `<tag>` element's text matches `pattern`.
pub fn any_tag_text_matches(doc: &Html, tag: &str, pattern: &Regex) -> bool {
    elements(doc)
        .filter(|el| el.value().name() == tag)
        .any(|el| pattern.is_match(&text_of(el)))
}

/// `el` itself if it is a `<table>`, else its first descendant table.
pub fn table_within(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "table")
}
