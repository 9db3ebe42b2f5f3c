//! Translation scope resolution.
//!
//! Decides whether a markup node's children get a simple-text rewrite, a
//! mixed-content rewrite, or none at all. Absence of a scope is a normal
//! outcome: the children are then visited individually.

use swc_ecma_ast::JSXElementChild;

use crate::utils::normalize_whitespace;

use super::classify::is_void_element;
use super::serialize::{SerializedContent, serialize_children};
use super::visitor::TransformVisitor;

pub(crate) enum TranslationScope {
    /// Exactly one meaningful text run, optionally interleaved with void
    /// elements. `position` is the text child's index.
    Text { text: String, position: usize },
    /// Text plus variables, expressions and/or nested non-void markup,
    /// flattened into one placeholder string.
    Mixed { content: SerializedContent },
}

/// Scanner state for [`has_mixed_content`].
enum ScanState {
    None,
    Text,
    Structural,
    TextInterrupted,
}

/// Check if children form mixed content that needs rich-text translation.
///
/// A run of adjacent meaningful text counts as one unit; an expression or
/// non-void child element is a structural unit; a void child interrupts a
/// text run but is otherwise inert. Seeing units of different kinds with a
/// gap between them flips to mixed.
pub(crate) fn has_mixed_content(children: &[JSXElementChild]) -> bool {
    if children.is_empty() {
        return false;
    }

    let mut state = ScanState::None;
    for child in children {
        match child {
            JSXElementChild::JSXText(text) => {
                if !text.value.trim().is_empty() {
                    match state {
                        ScanState::None => state = ScanState::Text,
                        ScanState::Text => {}
                        ScanState::Structural | ScanState::TextInterrupted => return true,
                    }
                }
            }
            // Expressions substitute into the surrounding text, so they are
            // translated in one context with it.
            JSXElementChild::JSXExprContainer(_) => match state {
                ScanState::None => state = ScanState::Structural,
                ScanState::Text | ScanState::TextInterrupted => return true,
                ScanState::Structural => {}
            },
            JSXElementChild::JSXElement(element) => {
                if !is_void_element(element) {
                    match state {
                        ScanState::None => state = ScanState::Structural,
                        ScanState::Text | ScanState::TextInterrupted => return true,
                        ScanState::Structural => {}
                    }
                } else if matches!(state, ScanState::Text) {
                    state = ScanState::TextInterrupted;
                }
            }
            _ => {}
        }
    }

    false
}

/// Resolve the translation scope for a node's children.
///
/// The mixed path consumes the children (they are flattened into the
/// serialized content); the caller must replace them with the rewritten
/// call. The simple-text path leaves the children in place.
pub(crate) fn resolve_scope(
    children: &mut Vec<JSXElementChild>,
    cx: &mut TransformVisitor,
) -> Option<TranslationScope> {
    if has_mixed_content(children) {
        // Mixed content always includes a meaningful text run, so the
        // serialized text is never empty.
        let owned = std::mem::take(children);
        let mut content = serialize_children(owned, cx);
        content.text = content.text.trim().to_string();
        return Some(TranslationScope::Mixed { content });
    }

    // Non-mixed: exactly one meaningful text child whose siblings are all
    // void elements or whitespace.
    let mut position = None;
    let mut meaningful = 0usize;
    for (index, child) in children.iter().enumerate() {
        match child {
            JSXElementChild::JSXText(text) => {
                if !text.value.trim().is_empty() {
                    meaningful += 1;
                    if position.is_none() {
                        position = Some(index);
                    }
                }
            }
            JSXElementChild::JSXElement(element) if is_void_element(element) => {}
            _ => return None,
        }
    }

    let position = position?;
    if meaningful != 1 {
        return None;
    }
    let JSXElementChild::JSXText(node) = &children[position] else {
        return None;
    };
    let text = normalize_whitespace(&node.value);
    if text.is_empty() {
        return None;
    }

    Some(TranslationScope::Text { text, position })
}
