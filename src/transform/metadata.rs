//! Structured-field extraction for literal page-metadata exports.
//!
//! `export const metadata = { ... }` and exported `generateMetadata`
//! functions carry user-visible strings (titles, descriptions, image alt
//! texts) in a known shape. Allow-listed leaves become metadata entries and
//! are replaced with translate-calls; a static export with at least one
//! such leaf is converted into an async `generateMetadata` function. With
//! no translatable leaves the export is left completely unchanged.

use std::sync::LazyLock;

use regex::Regex;
use swc_common::{DUMMY_SP, SyntaxContext};
use swc_ecma_ast::{
    BlockStmt, Decl, Expr, ExprOrSpread, FnDecl, Function, Lit, ObjectLit, Pat, Prop, PropName,
    PropOrSpread, ReturnStmt, Stmt,
};
use swc_ecma_visit::{VisitMut, VisitMutWith};

use crate::entry::TranslationEntry;

use super::hooks;
use super::rewrite::{ident, translation_call};
use super::visitor::TransformVisitor;

pub(crate) const METADATA_EXPORT_NAME: &str = "metadata";
pub(crate) const GENERATE_METADATA_FN_NAME: &str = "generateMetadata";

/// Allow-list of metadata fields that should be translated. Technical
/// fields (URLs, viewport settings, ...) are left unchanged.
const TRANSLATABLE_METADATA_FIELDS: &[&str] = &[
    // Top-level fields
    "title",
    "description",
    // Title object fields (template and default)
    "title.template",
    "title.default",
    // OpenGraph fields
    "openGraph.title",
    "openGraph.description",
    "openGraph.images[*].alt",
    // Twitter fields
    "twitter.title",
    "twitter.description",
    "twitter.images[*].alt",
    // Apple Web App
    "appleWebApp.title",
];

static ARRAY_INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\d+\]").expect("array index regex"));

/// Check if a field path should be translated; array-indexed paths match
/// their `[*]` pattern (`openGraph.images[0].alt` matches
/// `openGraph.images[*].alt`).
fn is_translatable_field(field_path: &str) -> bool {
    if TRANSLATABLE_METADATA_FIELDS.contains(&field_path) {
        return true;
    }
    let normalized = ARRAY_INDEX.replace_all(field_path, "[*]");
    TRANSLATABLE_METADATA_FIELDS
        .iter()
        .any(|pattern| pattern.contains("[*]") && *pattern == normalized)
}

/// Convert `export const metadata = { ... }` into an async
/// `generateMetadata` function when it holds translatable leaves.
///
/// Returns true when the export was rewritten. With zero translatable
/// leaves the export is untouched and false is returned.
pub(crate) fn process_static_metadata_export(
    export: &mut swc_ecma_ast::ExportDecl,
    cx: &mut TransformVisitor,
) -> bool {
    let Decl::Var(var) = &export.decl else {
        return false;
    };
    let Some(declarator) = var.decls.first() else {
        return false;
    };
    let Pat::Ident(name) = &declarator.name else {
        return false;
    };
    if name.id.sym.as_str() != METADATA_EXPORT_NAME {
        return false;
    }
    let Some(init) = &declarator.init else {
        return false;
    };
    let Expr::Object(object) = &**init else {
        return false;
    };

    // Transform a clone so a fruitless walk leaves the export untouched.
    let mut transformed = object.clone();
    let mut entries = Vec::new();
    transform_metadata_object(&mut transformed, "", cx, &mut entries);
    if entries.is_empty() {
        return false;
    }

    let hashes: Vec<String> = entries.iter().map(|e| e.hash().to_string()).collect();
    cx.entries.extend(entries);
    cx.imports.needs_async_import = true;

    export.decl = Decl::Fn(FnDecl {
        ident: ident(GENERATE_METADATA_FN_NAME),
        declare: false,
        function: Box::new(Function {
            params: Vec::new(),
            decorators: Vec::new(),
            span: DUMMY_SP,
            ctxt: SyntaxContext::empty(),
            body: Some(BlockStmt {
                span: DUMMY_SP,
                ctxt: SyntaxContext::empty(),
                stmts: vec![
                    hooks::async_hook_stmt(&hashes, false),
                    Stmt::Return(ReturnStmt {
                        span: DUMMY_SP,
                        arg: Some(Box::new(Expr::Object(transformed))),
                    }),
                ],
            }),
            is_generator: false,
            is_async: true,
            type_params: None,
            return_type: None,
        }),
    });
    true
}

/// Transform an existing `generateMetadata` function in place: rewrite the
/// object literal of its first return statement, prepend the hook call and
/// force the function async. No-op when nothing matched the allow-list.
pub(crate) fn process_metadata_function(fn_decl: &mut FnDecl, cx: &mut TransformVisitor) -> bool {
    let Some(body) = &mut fn_decl.function.body else {
        return false;
    };

    let mut rewriter = ReturnObjectRewriter {
        cx,
        entries: Vec::new(),
        handled: false,
    };
    body.visit_mut_with(&mut rewriter);
    let entries = rewriter.entries;
    if entries.is_empty() {
        return false;
    }

    let hashes: Vec<String> = entries.iter().map(|e| e.hash().to_string()).collect();
    body.stmts.insert(0, hooks::async_hook_stmt(&hashes, false));

    if !fn_decl.function.is_async {
        fn_decl.function.is_async = true;
    }

    cx.entries.extend(entries);
    cx.imports.needs_async_import = true;
    true
}

/// Rewrites the object literal of the first return statement found.
struct ReturnObjectRewriter<'v, 'a> {
    cx: &'v TransformVisitor<'a>,
    entries: Vec<TranslationEntry>,
    handled: bool,
}

impl VisitMut for ReturnObjectRewriter<'_, '_> {
    fn visit_mut_return_stmt(&mut self, node: &mut ReturnStmt) {
        if self.handled {
            return;
        }
        self.handled = true;

        if let Some(arg) = &mut node.arg
            && let Expr::Object(object) = &mut **arg
        {
            transform_metadata_object(object, "", self.cx, &mut self.entries);
        }
    }
}

/// Walk a metadata object literal, replacing allow-listed string and static
/// template-literal leaves with `t(hash, fallback)` calls.
fn transform_metadata_object(
    object: &mut ObjectLit,
    parent_path: &str,
    cx: &TransformVisitor,
    entries: &mut Vec<TranslationEntry>,
) {
    for prop in &mut object.props {
        let PropOrSpread::Prop(prop) = prop else {
            continue;
        };
        let Prop::KeyValue(kv) = &mut **prop else {
            continue;
        };

        let key = match &kv.key {
            PropName::Ident(ident) => ident.sym.to_string(),
            PropName::Str(s) => match s.value.as_str() {
                Some(value) => value.to_string(),
                None => continue,
            },
            _ => continue,
        };
        let field_path = if parent_path.is_empty() {
            key
        } else {
            format!("{parent_path}.{key}")
        };
        let translatable = is_translatable_field(&field_path);

        match &mut *kv.value {
            Expr::Lit(Lit::Str(s)) if translatable => {
                let Some(text) = s.value.as_str().map(str::to_owned) else {
                    continue;
                };
                let entry =
                    TranslationEntry::metadata(text.clone(), field_path, cx.entry_location(s.span));
                kv.value = Box::new(Expr::Call(translation_call(entry.hash(), &text)));
                entries.push(entry);
            }
            // Only static template literals like `title`.
            Expr::Tpl(tpl) if translatable && tpl.exprs.is_empty() && tpl.quasis.len() == 1 => {
                let span = tpl.span;
                let Some(text) = tpl.quasis[0]
                    .cooked
                    .as_ref()
                    .and_then(|c| c.as_str())
                    .map(str::to_owned)
                else {
                    continue;
                };
                let entry =
                    TranslationEntry::metadata(text.clone(), field_path, cx.entry_location(span));
                kv.value = Box::new(Expr::Call(translation_call(entry.hash(), &text)));
                entries.push(entry);
            }
            // Always recurse into nested objects to check nested fields.
            Expr::Object(nested) => {
                transform_metadata_object(nested, &field_path, cx, entries);
            }
            // Arrays of objects, e.g. images: [{ url, alt }].
            Expr::Array(array) => {
                for (index, element) in array.elems.iter_mut().enumerate() {
                    if let Some(ExprOrSpread { expr, .. }) = element
                        && let Expr::Object(nested) = &mut **expr
                    {
                        transform_metadata_object(
                            nested,
                            &format!("{field_path}[{index}]"),
                            cx,
                            entries,
                        );
                    }
                }
            }
            _ => {}
        }
    }
}
