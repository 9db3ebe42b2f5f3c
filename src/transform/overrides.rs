//! Parsing of the per-locale override attribute.
//!
//! `data-lokal-override={{ de: "...", fr: "..." }}` lets authors pin exact
//! translations for an element. Valid overrides attach to the element's
//! content entry and the attribute is removed from the output; anything
//! malformed is ignored and left in place.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use swc_ecma_ast::{
    Expr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElement, JSXExpr, Lit, Prop, PropName,
    PropOrSpread,
};

pub(crate) const OVERRIDE_ATTRIBUTE: &str = "data-lokal-override";

static LOCALE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}(-[A-Z]{2})?$").expect("locale code regex"));

/// Find, validate and remove the override attribute, returning its map.
pub(crate) fn take_overrides(element: &mut JSXElement) -> Option<BTreeMap<String, String>> {
    let index = element.opening.attrs.iter().position(|attr| {
        matches!(attr, JSXAttrOrSpread::JSXAttr(attr)
            if matches!(&attr.name, JSXAttrName::Ident(name) if name.sym.as_str() == OVERRIDE_ATTRIBUTE))
    })?;

    let JSXAttrOrSpread::JSXAttr(attr) = &element.opening.attrs[index] else {
        return None;
    };
    let overrides = parse_override_value(attr.value.as_ref()?)?;
    if !validate_overrides(&overrides) {
        return None;
    }

    element.opening.attrs.remove(index);
    Some(overrides)
}

/// Parse an object expression value: `{{ de: "text", fr: `text` }}`.
fn parse_override_value(value: &JSXAttrValue) -> Option<BTreeMap<String, String>> {
    let JSXAttrValue::JSXExprContainer(container) = value else {
        return None;
    };
    let JSXExpr::Expr(expr) = &container.expr else {
        return None;
    };
    let Expr::Object(object) = &**expr else {
        return None;
    };

    let mut overrides = BTreeMap::new();
    for prop in &object.props {
        let PropOrSpread::Prop(prop) = prop else {
            continue;
        };
        let Prop::KeyValue(kv) = &**prop else {
            continue;
        };

        let locale = match &kv.key {
            PropName::Ident(ident) => ident.sym.to_string(),
            PropName::Str(s) => match s.value.as_str() {
                Some(value) => value.to_string(),
                None => continue,
            },
            _ => continue,
        };

        let text = match &*kv.value {
            Expr::Lit(Lit::Str(s)) => match s.value.as_str() {
                Some(value) => value.to_string(),
                None => continue,
            },
            Expr::Tpl(tpl) if tpl.exprs.is_empty() && tpl.quasis.len() == 1 => {
                match tpl.quasis[0].cooked.as_ref().and_then(|c| c.as_str()) {
                    Some(value) => value.to_string(),
                    None => continue,
                }
            }
            _ => continue,
        };

        overrides.insert(locale, text);
    }

    if overrides.is_empty() {
        None
    } else {
        Some(overrides)
    }
}

/// All keys must be locale codes shaped `xx` or `xx-XX`; all values must be
/// non-empty.
fn validate_overrides(overrides: &BTreeMap<String, String>) -> bool {
    overrides
        .iter()
        .all(|(locale, text)| LOCALE_CODE.is_match(locale) && !text.trim().is_empty())
}
