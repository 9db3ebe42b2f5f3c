//! Hook-call and import construction.
//!
//! Synchronous components get `const { t } = useTranslation([...hashes])`;
//! asynchronous ones get `const { t } = await getTranslations({ hashes })`
//! and are forced async. Either form destructures `locale` as well when the
//! component needs a resolved locale value.

use swc_common::{DUMMY_SP, SyntaxContext};
use swc_ecma_ast::{
    ArrayLit, AssignPatProp, AwaitExpr, BindingIdent, CallExpr, Callee, Decl, Expr, ImportDecl,
    ImportNamedSpecifier, ImportSpecifier, KeyValueProp, ModuleDecl, ModuleItem, ObjectLit,
    ObjectPat, ObjectPatProp, Pat, Prop, PropName, PropOrSpread, Stmt, Str, VarDecl, VarDeclKind,
    VarDeclarator,
};
use swc_ecma_ast::IdentName;

use super::rewrite::{call_arg, ident, str_lit};

pub(crate) const SYNC_HOOK: &str = "useTranslation";
pub(crate) const ASYNC_HOOK: &str = "getTranslations";
pub(crate) const SYNC_IMPORT_SOURCE: &str = "lokal/react";
pub(crate) const ASYNC_IMPORT_SOURCE: &str = "lokal/react/server";

fn hash_array(hashes: &[String]) -> Expr {
    Expr::Array(ArrayLit {
        span: DUMMY_SP,
        elems: hashes.iter().map(|h| Some(call_arg(str_lit(h)))).collect(),
    })
}

/// `{ t }` or `{ t, locale }` destructuring pattern.
fn destructure_pattern(needs_locale: bool) -> Pat {
    let mut props = vec![shorthand_pat("t")];
    if needs_locale {
        props.push(shorthand_pat("locale"));
    }
    Pat::Object(ObjectPat {
        span: DUMMY_SP,
        props,
        optional: false,
        type_ann: None,
    })
}

fn shorthand_pat(name: &str) -> ObjectPatProp {
    ObjectPatProp::Assign(AssignPatProp {
        span: DUMMY_SP,
        key: BindingIdent {
            id: ident(name),
            type_ann: None,
        },
        value: None,
    })
}

fn hook_call(hook: &str, args: Vec<swc_ecma_ast::ExprOrSpread>) -> CallExpr {
    CallExpr {
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
        callee: Callee::Expr(Box::new(Expr::Ident(ident(hook)))),
        args,
        type_args: None,
    }
}

fn const_decl(name: Pat, init: Expr) -> Stmt {
    Stmt::Decl(Decl::Var(Box::new(VarDecl {
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
        kind: VarDeclKind::Const,
        declare: false,
        decls: vec![VarDeclarator {
            span: DUMMY_SP,
            name,
            init: Some(Box::new(init)),
            definite: false,
        }],
    })))
}

/// `const { t } = useTranslation(["hash1", ...])`
pub(crate) fn sync_hook_stmt(hashes: &[String], needs_locale: bool) -> Stmt {
    let call = hook_call(SYNC_HOOK, vec![call_arg(hash_array(hashes))]);
    const_decl(destructure_pattern(needs_locale), Expr::Call(call))
}

/// `const { t } = await getTranslations({ hashes: ["hash1", ...] })`
pub(crate) fn async_hook_stmt(hashes: &[String], needs_locale: bool) -> Stmt {
    let options = ObjectLit {
        span: DUMMY_SP,
        props: vec![PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
            key: PropName::Ident(IdentName::new("hashes".into(), DUMMY_SP)),
            value: Box::new(hash_array(hashes)),
        })))],
    };
    let call = hook_call(ASYNC_HOOK, vec![call_arg(Expr::Object(options))]);
    const_decl(
        destructure_pattern(needs_locale),
        Expr::Await(AwaitExpr {
            span: DUMMY_SP,
            arg: Box::new(Expr::Call(call)),
        }),
    )
}

fn named_import(name: &str, source: &str) -> ModuleItem {
    ModuleItem::ModuleDecl(ModuleDecl::Import(ImportDecl {
        span: DUMMY_SP,
        specifiers: vec![ImportSpecifier::Named(ImportNamedSpecifier {
            span: DUMMY_SP,
            local: ident(name),
            imported: None,
            is_type_only: false,
        })],
        src: Box::new(Str {
            span: DUMMY_SP,
            value: source.into(),
            raw: None,
        }),
        type_only: false,
        with: None,
        phase: Default::default(),
    }))
}

/// `import { useTranslation } from "lokal/react"`
pub(crate) fn sync_import() -> ModuleItem {
    named_import(SYNC_HOOK, SYNC_IMPORT_SOURCE)
}

/// `import { getTranslations } from "lokal/react/server"`
pub(crate) fn async_import() -> ModuleItem {
    named_import(ASYNC_HOOK, ASYNC_IMPORT_SOURCE)
}
