//! Construction of translate-call nodes.
//!
//! All rewritten nodes are built fresh with dummy spans; the original
//! subtree is consumed, never aliased.

use swc_common::{DUMMY_SP, SyntaxContext};
use swc_ecma_ast::{
    ArrowExpr, BindingIdent, BlockStmtOrExpr, CallExpr, Callee, Expr, ExprOrSpread, Ident,
    IdentName, JSXClosingElement, JSXElement, JSXElementChild, JSXExpr, JSXExprContainer,
    JSXOpeningElement, KeyValueProp, Lit, ObjectLit, Pat, Prop, PropName, PropOrSpread, Str,
};

use super::serialize::{SerializedContent, TagRenderer};

/// Name of the translate-function bound by the injected hook call.
pub(crate) const TRANSLATE_FN: &str = "t";

pub(crate) fn ident(sym: &str) -> Ident {
    Ident::new(sym.into(), DUMMY_SP, SyntaxContext::empty())
}

pub(crate) fn str_lit(value: &str) -> Expr {
    Expr::Lit(Lit::Str(Str {
        span: DUMMY_SP,
        value: value.into(),
        raw: None,
    }))
}

pub(crate) fn call_arg(expr: Expr) -> ExprOrSpread {
    ExprOrSpread {
        spread: None,
        expr: Box::new(expr),
    }
}

pub(crate) fn expr_container(expr: Expr) -> JSXExprContainer {
    JSXExprContainer {
        span: DUMMY_SP,
        expr: JSXExpr::Expr(Box::new(expr)),
    }
}

/// `t("hash", "fallback")`
pub(crate) fn translation_call(hash: &str, fallback: &str) -> CallExpr {
    CallExpr {
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
        callee: Callee::Expr(Box::new(Expr::Ident(ident(TRANSLATE_FN)))),
        args: vec![call_arg(str_lit(hash)), call_arg(str_lit(fallback))],
        type_args: None,
    }
}

/// `{t("hash", "fallback")}` for use as a JSX child or attribute value.
pub(crate) fn translation_call_container(hash: &str, fallback: &str) -> JSXExprContainer {
    expr_container(Expr::Call(translation_call(hash, fallback)))
}

/// `t("hash", "fallback", { name, expression0: ..., strong0: (chunks) => ... })`
///
/// Variables become shorthand properties, expressions keep their raw form,
/// and each tag renderer re-wraps rendered chunks in the original element
/// (or reproduces it unchanged for inert tags).
pub(crate) fn rich_translation_call(hash: &str, content: SerializedContent) -> CallExpr {
    let SerializedContent {
        text,
        variables,
        expressions,
        tags,
    } = content;

    let mut props: Vec<PropOrSpread> = Vec::new();

    for name in &variables {
        props.push(PropOrSpread::Prop(Box::new(Prop::Shorthand(ident(name)))));
    }
    for (name, expr) in expressions {
        props.push(key_value(&name, *expr));
    }
    for tag in tags {
        let TagRenderer {
            name,
            element,
            inert,
        } = tag;
        let renderer = if inert {
            inert_renderer(element)
        } else {
            chunk_renderer(element)
        };
        props.push(key_value(&name, Expr::Arrow(renderer)));
    }

    let mut call = translation_call(hash, &text);
    if !props.is_empty() {
        call.args.push(call_arg(Expr::Object(ObjectLit {
            span: DUMMY_SP,
            props,
        })));
    }
    call
}

fn key_value(name: &str, value: Expr) -> PropOrSpread {
    PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
        key: PropName::Ident(IdentName::new(name.into(), DUMMY_SP)),
        value: Box::new(value),
    })))
}

fn arrow(params: Vec<Pat>, body: Expr) -> ArrowExpr {
    ArrowExpr {
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
        params,
        body: Box::new(BlockStmtOrExpr::Expr(Box::new(body))),
        is_async: false,
        is_generator: false,
        type_params: None,
        return_type: None,
    }
}

/// `() => <Original .../>` — reproduces the node unchanged.
fn inert_renderer(element: Box<JSXElement>) -> ArrowExpr {
    arrow(Vec::new(), Expr::JSXElement(element))
}

/// `(chunks) => <Tag attrs>{chunks}</Tag>`
fn chunk_renderer(element: Box<JSXElement>) -> ArrowExpr {
    let JSXElement { opening, .. } = *element;
    let closing_name = opening.name.clone();

    let rewrapped = JSXElement {
        span: DUMMY_SP,
        opening: JSXOpeningElement {
            name: opening.name,
            span: DUMMY_SP,
            attrs: opening.attrs,
            self_closing: false,
            type_args: None,
        },
        children: vec![JSXElementChild::JSXExprContainer(expr_container(
            Expr::Ident(ident("chunks")),
        ))],
        closing: Some(JSXClosingElement {
            span: DUMMY_SP,
            name: closing_name,
        }),
    };

    arrow(
        vec![Pat::Ident(BindingIdent {
            id: ident("chunks"),
            type_ann: None,
        })],
        Expr::JSXElement(Box::new(rewrapped)),
    )
}
