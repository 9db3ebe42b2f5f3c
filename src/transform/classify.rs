//! Per-node translation classification.
//!
//! Decides which elements are skipped, which are void, and which attributes
//! carry translatable text. Fragments are never skipped; a void element is
//! never itself translated but may appear inside a parent's mixed-content
//! scope as an inert placeholder tag.

use swc_ecma_ast::{JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElement, JSXElementName};

/// Marker attribute that opts a subtree out of translation entirely.
pub(crate) const SKIP_ATTRIBUTE: &str = "data-lokal-skip";

/// Elements whose content should not be translated by default.
/// These are typically code-related or technical elements where translation
/// would break functionality or meaning.
const NON_TRANSLATABLE_ELEMENTS: &[&str] = &["code", "pre", "script", "style", "kbd", "samp", "var"];

const TRANSLATABLE_ATTRIBUTES: &[&str] = &[
    "title",
    "aria-label",
    "aria-description",
    "alt",
    "label",
    "description",
    "placeholder",
    "content",
    "subtitle",
];

/// Check if a JSX element is self-closing or empty.
pub(crate) fn is_void_element(element: &JSXElement) -> bool {
    element.opening.self_closing || element.children.is_empty()
}

pub(crate) fn element_name(element: &JSXElement) -> Option<&str> {
    match &element.opening.name {
        JSXElementName::Ident(ident) => Some(ident.sym.as_str()),
        _ => None,
    }
}

/// Check if a JSX element should skip translation based on:
/// 1. Element type (code, pre, script, style, ...)
/// 2. translate="no" attribute (HTML standard)
/// 3. the skip marker attribute (presence is enough)
pub(crate) fn should_skip_element(element: &JSXElement) -> bool {
    if let Some(name) = element_name(element)
        && NON_TRANSLATABLE_ELEMENTS.contains(&name)
    {
        return true;
    }

    for attr in &element.opening.attrs {
        if let JSXAttrOrSpread::JSXAttr(attr) = attr
            && let JSXAttrName::Ident(name) = &attr.name
        {
            if name.sym.as_str() == "translate"
                && let Some(JSXAttrValue::Str(value)) = &attr.value
                && value.value.as_str() == Some("no")
            {
                return true;
            }

            if name.sym.as_str() == SKIP_ATTRIBUTE {
                return true;
            }
        }
    }

    false
}

pub(crate) fn is_translatable_attribute(name: &str) -> bool {
    TRANSLATABLE_ATTRIBUTES.contains(&name)
}
