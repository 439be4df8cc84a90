//! Tree navigation helpers over `scraper`'s element references.

use scraper::{ElementRef, Selector};

/// Text content with every whitespace run collapsed to one space, trimmed.
pub(crate) fn collapsed_text(el: ElementRef<'_>) -> String {
    raw_text(el).split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text content exactly as the document holds it.
pub(crate) fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Descendants of `scope` (excluding `scope` itself) matching `selector`, in
/// document order.
pub(crate) fn descendants_matching<'a>(
    scope: ElementRef<'a>,
    selector: &Selector,
) -> Vec<ElementRef<'a>> {
    scope
        .select(selector)
        .filter(|el| el.id() != scope.id())
        .collect()
}

/// First descendant of `scope` matching `selector`.
pub(crate) fn first_descendant<'a>(
    scope: ElementRef<'a>,
    selector: &Selector,
) -> Option<ElementRef<'a>> {
    scope
        .select(selector)
        .find(|el| el.id() != scope.id())
}

/// Element ancestors of `el`, nearest first.
pub(crate) fn element_ancestors(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.ancestors().filter_map(ElementRef::wrap)
}

/// `el` itself when it is a `tag` element, otherwise its nearest `tag` ancestor.
pub(crate) fn closest<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    std::iter::once(el)
        .chain(element_ancestors(el))
        .find(|candidate| candidate.value().name() == tag)
}

/// The next sibling that is an element, skipping text and comments.
pub(crate) fn next_element_sibling(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// Whether the element's `class` attribute contains `marker` as a substring.
pub(crate) fn class_contains(el: ElementRef<'_>, marker: &str) -> bool {
    el.value()
        .attr("class")
        .is_some_and(|class| class.contains(marker))
}

/// The element's non-empty `href`.
pub(crate) fn href(el: ElementRef<'_>) -> Option<&str> {
    el.value().attr("href").filter(|h| !h.is_empty())
}
