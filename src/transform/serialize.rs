//! Mixed-content serialization.
//!
//! Walks a subtree left to right and flattens it into one placeholder
//! string plus the argument maps the rewritten translate-call needs:
//! variables (first-appearance order, deduped), opaque expressions
//! (numbered by discovery order across the whole translation scope), and
//! tag renderers for nested markup. Nested tag names are merged into the
//! parent with the parent tag's name as prefix, so names at different
//! depths can never collide.

use std::collections::HashMap;
use std::mem;

use swc_ecma_ast::{Expr, JSXElement, JSXElementChild, JSXElementName, JSXExpr, Lit};

use crate::richtext;
use crate::utils::normalize_whitespace;

use super::classify::{is_void_element, should_skip_element};
use super::visitor::TransformVisitor;

pub(crate) struct SerializedContent {
    /// The placeholder string, e.g.
    /// `"Hello {name}, you have <strong0>{count}</strong0> messages"`.
    pub text: String,
    /// Variable identifiers in order of first appearance, deduped.
    pub variables: Vec<String>,
    /// Opaque expressions keyed by their `expressionN` placeholder name.
    pub expressions: Vec<(String, Box<Expr>)>,
    /// Nested elements keyed by their synthetic tag name.
    pub tags: Vec<TagRenderer>,
}

pub(crate) struct TagRenderer {
    pub name: String,
    pub element: Box<JSXElement>,
    /// Void and skip-listed children are kept out of the translatable text
    /// and reproduced unchanged by a zero-argument renderer.
    pub inert: bool,
}

/// Serialize JSX children to a translation string with placeholders.
///
/// Consumes the children: text and expressions move into the placeholder
/// string and the argument maps, elements move into tag renderers. The
/// caller replaces the original children with the rewritten call.
pub(crate) fn serialize_children(
    children: Vec<JSXElementChild>,
    cx: &mut TransformVisitor,
) -> SerializedContent {
    let mut shared = SharedMaps {
        variables: Vec::new(),
        expressions: Vec::new(),
    };
    let (text, tags) = serialize_level(children, cx, &mut shared);
    SerializedContent {
        text,
        variables: shared.variables,
        expressions: shared.expressions,
        tags,
    }
}

/// Variable and expression maps are shared through the recursion: the same
/// identifier is the same variable at any depth, and expression numbering
/// must stay unique across the whole scope so merged maps cannot collide.
struct SharedMaps {
    variables: Vec<String>,
    expressions: Vec<(String, Box<Expr>)>,
}

fn serialize_level(
    children: Vec<JSXElementChild>,
    cx: &mut TransformVisitor,
    shared: &mut SharedMaps,
) -> (String, Vec<TagRenderer>) {
    let mut text = String::new();
    let mut tags: Vec<TagRenderer> = Vec::new();
    let mut element_counts: HashMap<String, usize> = HashMap::new();

    for child in children {
        match child {
            JSXElementChild::JSXText(node) => {
                let raw: &str = &node.value;
                let mut normalized = normalize_whitespace(raw);

                // Preserve a single separating space at node boundaries when
                // the raw text carried one and text has already accumulated.
                if !text.is_empty()
                    && raw.starts_with(|c: char| c.is_whitespace())
                    && !normalized.is_empty()
                    && !text.ends_with(' ')
                {
                    normalized.insert(0, ' ');
                }
                if !normalized.is_empty()
                    && raw.ends_with(|c: char| c.is_whitespace())
                    && !text.ends_with(' ')
                {
                    normalized.push(' ');
                }

                text.push_str(&richtext::escape(&normalized));
            }
            JSXElementChild::JSXExprContainer(container) => match container.expr {
                // Comment containers contribute nothing.
                JSXExpr::JSXEmptyExpr(_) => {}
                JSXExpr::Expr(expr) => match *expr {
                    Expr::Ident(ident) => {
                        let name = ident.sym.to_string();
                        text.push('{');
                        text.push_str(&name);
                        text.push('}');
                        if !shared.variables.contains(&name) {
                            shared.variables.push(name);
                        }
                    }
                    // String literals (like {" "}) are inlined as literal text.
                    Expr::Lit(Lit::Str(s)) => {
                        if let Some(value) = s.value.as_str() {
                            text.push_str(&richtext::escape(value));
                        }
                    }
                    // Anything else becomes an opaque numbered placeholder.
                    other => {
                        let name = format!("expression{}", shared.expressions.len());
                        text.push('{');
                        text.push_str(&name);
                        text.push('}');
                        shared.expressions.push((name, Box::new(other)));
                    }
                },
            },
            JSXElementChild::JSXElement(mut element) => {
                let inert = is_void_element(&element) || should_skip_element(&element);

                let element_name = match &element.opening.name {
                    JSXElementName::Ident(ident) => ident.sym.to_string(),
                    _ => "element".to_string(),
                };
                let count = element_counts.entry(element_name.clone()).or_insert(0);
                let tag = format!("{element_name}{count}");
                *count += 1;

                // Attribute translation runs regardless of scope decisions.
                cx.translate_attributes(&mut element.opening);

                if inert {
                    // The placeholder grammar favors empty paired tags over
                    // self-closing ones; the renderer set carries the
                    // original node unchanged.
                    text.push_str(&format!("<{tag}></{tag}>"));
                    tags.push(TagRenderer {
                        name: tag,
                        element,
                        inert: true,
                    });
                } else {
                    let inner = mem::take(&mut element.children);
                    let (inner_text, nested_tags) = serialize_level(inner, cx, shared);
                    text.push_str(&format!("<{tag}>{inner_text}</{tag}>"));

                    for nested in nested_tags {
                        tags.push(TagRenderer {
                            name: format!("{tag}_{}", nested.name),
                            ..nested
                        });
                    }
                    tags.push(TagRenderer {
                        name: tag,
                        element,
                        inert: false,
                    });
                }
            }
            // Fragments and spread children do not participate in the
            // placeholder text.
            JSXElementChild::JSXFragment(_) | JSXElementChild::JSXSpreadChild(_) => {}
        }
    }

    (text, tags)
}
