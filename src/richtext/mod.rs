//! Placeholder-string grammar: escaping and the runtime decoder.
//!
//! The serializer emits translation source text in a small placeholder
//! format: `{name}` for variables, `<tag0>...</tag0>` for nested markup and
//! `<tag0/>` for inert markup, with reserved characters quoted so literal
//! text can never be confused with a placeholder. This module owns both
//! directions of that grammar: [`escape`] (used while serializing) and
//! [`render_rich_text`], the decode counterpart a runtime uses to rebuild
//! output from a translated string plus parameter bindings.
//!
//! The decoder is a recursive-descent scanner, not a regex. Tag pairs are
//! matched balanced (nested same-name pairs are counted), and anything that
//! fails to match is left in the output as literal text.

use std::collections::HashMap;

/// Characters that carry meaning in the placeholder grammar.
const RESERVED: [char; 4] = ['{', '}', '<', '#'];

/// Escape literal text for inclusion in a placeholder string.
///
/// Follows the ICU quoting convention: `'` doubles to `''`, and each
/// reserved character is wrapped in single quotes.
///
/// # Examples
///
/// ```
/// use lokal::richtext::escape;
///
/// assert_eq!(escape("It's a test"), "It''s a test");
/// assert_eq!(escape("Use {braces}"), "Use '{'braces'}'");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\'' => out.push_str("''"),
            '{' => out.push_str("'{'"),
            '}' => out.push_str("'}'"),
            '<' => out.push_str("'<'"),
            '#' => out.push_str("'#'"),
            _ => out.push(c),
        }
    }
    out
}

/// A fragment of decoded output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedNode {
    Text(String),
    /// Output of a tag renderer that re-wraps its decoded children.
    Element {
        tag: String,
        children: Vec<RenderedNode>,
    },
}

/// One parameter binding for the decoder: either a plain substitution value
/// or a tag renderer invoked with the tag's decoded children.
pub enum RichTextParam {
    Value(String),
    Renderer(Box<dyn Fn(Vec<RenderedNode>) -> RenderedNode>),
}

pub type RichTextParams = HashMap<String, RichTextParam>;

/// Decoded output: a plain string when no structural renderer fired,
/// otherwise the ordered fragment sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichTextOutput {
    Text(String),
    Nodes(Vec<RenderedNode>),
}

/// Decode a placeholder string against a parameter map.
///
/// Matches, left to right: `{name}` (variable substitution),
/// `<tag>...</tag>` (balanced pair handed to the tag's renderer after the
/// inner content is decoded recursively), `<tag/>` (renderer invoked with no
/// content), and quoted spans per [`escape`]. Unmatched placeholders stay
/// literal.
pub fn render_rich_text(text: &str, params: &RichTextParams) -> RichTextOutput {
    let mut used_renderer = false;
    let nodes = decode(text, params, &mut used_renderer);

    if used_renderer {
        RichTextOutput::Nodes(nodes)
    } else {
        let mut plain = String::new();
        for node in nodes {
            if let RenderedNode::Text(t) = node {
                plain.push_str(&t);
            }
        }
        RichTextOutput::Text(plain)
    }
}

fn decode(text: &str, params: &RichTextParams, used_renderer: &mut bool) -> Vec<RenderedNode> {
    let mut out = Vec::new();
    let mut buf = String::new();
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];
        let Some(c) = rest.chars().next() else { break };

        match c {
            '\'' => i += decode_quoted(rest, &mut buf),
            '{' => {
                if let Some((name, len)) = parse_placeholder(rest) {
                    match params.get(name) {
                        Some(RichTextParam::Value(value)) => buf.push_str(value),
                        // A renderer bound to a variable placeholder, or no
                        // binding at all: keep the placeholder literal.
                        _ => buf.push_str(&rest[..len]),
                    }
                    i += len;
                } else {
                    buf.push('{');
                    i += 1;
                }
            }
            '<' => match parse_tag(rest) {
                Some(tag) if tag.self_closing => {
                    if let Some(RichTextParam::Renderer(render)) = params.get(tag.name) {
                        flush(&mut out, &mut buf);
                        out.push(render(Vec::new()));
                        *used_renderer = true;
                    } else {
                        buf.push_str(&rest[..tag.len]);
                    }
                    i += tag.len;
                }
                Some(tag) => {
                    let after_open = &rest[tag.len..];
                    match find_balanced_close(after_open, tag.name) {
                        Some((inner_end, close_end)) => {
                            let total = tag.len + close_end;
                            if let Some(RichTextParam::Renderer(render)) = params.get(tag.name) {
                                flush(&mut out, &mut buf);
                                let children =
                                    decode(&after_open[..inner_end], params, used_renderer);
                                out.push(render(children));
                                *used_renderer = true;
                            } else {
                                buf.push_str(&rest[..total]);
                            }
                            i += total;
                        }
                        None => {
                            buf.push('<');
                            i += 1;
                        }
                    }
                }
                None => {
                    buf.push('<');
                    i += 1;
                }
            },
            _ => {
                buf.push(c);
                i += c.len_utf8();
            }
        }
    }

    flush(&mut out, &mut buf);
    out
}

fn flush(out: &mut Vec<RenderedNode>, buf: &mut String) {
    if !buf.is_empty() {
        out.push(RenderedNode::Text(std::mem::take(buf)));
    }
}

/// Consume a quote at the start of `rest`. Returns the number of bytes
/// consumed after appending the decoded text to `buf`.
fn decode_quoted(rest: &str, buf: &mut String) -> usize {
    let after = &rest[1..];

    // Doubled quote is a literal quote.
    if after.starts_with('\'') {
        buf.push('\'');
        return 2;
    }

    // A quote opens a quoted span only before a reserved character;
    // otherwise it is literal (matches the ICU quoting convention).
    if !after.starts_with(RESERVED) {
        buf.push('\'');
        return 1;
    }

    // The serializer always quotes exactly one reserved character ('{'),
    // so that form must win over a longer span: `'{'''<'` is `{` + `'` + `<`,
    // not one span. Adjacent escapes stay unambiguous this way.
    if after[1..].starts_with('\'') {
        let Some(c) = after.chars().next() else {
            buf.push('\'');
            return 1;
        };
        buf.push(c);
        return 3;
    }

    // General quoted span (hand-written translations): copy verbatim until
    // the closing quote, with '' as an embedded literal quote.
    let mut j = 0;
    while j < after.len() {
        let span = &after[j..];
        if span.starts_with("''") {
            buf.push('\'');
            j += 2;
        } else if span.starts_with('\'') {
            j += 1;
            return 1 + j;
        } else {
            let Some(c) = span.chars().next() else { break };
            buf.push(c);
            j += c.len_utf8();
        }
    }
    // Unterminated span: the rest of the string was quoted.
    1 + j
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Parse `{name}` at the start of `rest`.
fn parse_placeholder(rest: &str) -> Option<(&str, usize)> {
    let inner = &rest[1..];
    let name_len = inner.chars().take_while(|c| is_word_char(*c)).count();
    if name_len == 0 {
        return None;
    }
    let name = &inner[..name_len];
    if inner[name_len..].starts_with('}') {
        Some((name, 1 + name_len + 1))
    } else {
        None
    }
}

struct TagToken<'a> {
    name: &'a str,
    self_closing: bool,
    len: usize,
}

/// Parse `<name>` or `<name/>` at the start of `rest`.
fn parse_tag(rest: &str) -> Option<TagToken<'_>> {
    let inner = &rest[1..];
    let name_len = inner.chars().take_while(|c| is_word_char(*c)).count();
    if name_len == 0 {
        return None;
    }
    let name = &inner[..name_len];
    let after = &inner[name_len..];
    if after.starts_with("/>") {
        Some(TagToken {
            name,
            self_closing: true,
            len: 1 + name_len + 2,
        })
    } else if after.starts_with('>') {
        Some(TagToken {
            name,
            self_closing: false,
            len: 1 + name_len + 1,
        })
    } else {
        None
    }
}

/// Find the close tag pairing the already-consumed `<name>`, counting nested
/// same-name opens. Returns (inner content end, end of the close tag), both
/// relative to `s`.
fn find_balanced_close(s: &str, name: &str) -> Option<(usize, usize)> {
    let open = format!("<{name}>");
    let close = format!("</{name}>");
    let mut depth = 1usize;
    let mut i = 0;

    while i < s.len() {
        let rest = &s[i..];
        if rest.starts_with(&close) {
            depth -= 1;
            if depth == 0 {
                return Some((i, i + close.len()));
            }
            i += close.len();
        } else if rest.starts_with(&open) {
            depth += 1;
            i += open.len();
        } else {
            let Some(c) = rest.chars().next() else { break };
            i += c.len_utf8();
        }
    }
    None
}
