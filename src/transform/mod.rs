//! The markup transformation engine.
//!
//! A single pass over a parsed module: component-boundary functions push a
//! frame, their bodies are traversed (classification → scope resolution →
//! serialization → rewriting per markup node), and on exit each frame that
//! collected work gets exactly one hook call injected. Imports are added
//! once, at the end of file-level processing.
//!
//! The engine is synchronous and free of I/O; given the same tree and
//! config it produces byte-identical output and an identical ordered entry
//! list on every invocation.

mod classify;
mod component;
mod hooks;
mod metadata;
mod overrides;
mod rewrite;
mod scope;
mod serialize;
mod visitor;

#[cfg(test)]
mod tests;

pub use visitor::{ImportRequirements, TransformVisitor};

use swc_common::SourceMap;
use swc_ecma_ast::{Decl, Expr, Lit, Module, ModuleDecl, ModuleItem, Stmt};
use swc_ecma_visit::VisitMutWith;

use crate::config::Config;
use crate::entry::TranslationEntry;

/// File-level opt-in marker checked when `directiveRequired` is set.
pub const I18N_DIRECTIVE: &str = "use i18n";
/// React client-boundary marker; forces the synchronous hook variant in
/// `SyncMode::Directive`.
pub const USE_CLIENT_DIRECTIVE: &str = "use client";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    /// False when the directive gate skipped the file or nothing in it
    /// needed rewriting.
    pub transformed: bool,
    pub entries: Vec<TranslationEntry>,
    pub imports: ImportRequirements,
}

impl TransformOutput {
    fn skipped() -> Self {
        Self {
            transformed: false,
            entries: Vec::new(),
            imports: ImportRequirements::default(),
        }
    }
}

/// Check the module prologue for a directive like `"use client"`.
pub fn has_directive(module: &Module, directive: &str) -> bool {
    for item in &module.body {
        let ModuleItem::Stmt(Stmt::Expr(stmt)) = item else {
            return false;
        };
        let Expr::Lit(Lit::Str(value)) = &*stmt.expr else {
            return false;
        };
        if value.value.as_str() == Some(directive) {
            return true;
        }
    }
    false
}

/// Number of leading prologue directives; injected imports go after them so
/// markers like `"use client"` stay first.
fn prologue_len(module: &Module) -> usize {
    module
        .body
        .iter()
        .take_while(|item| {
            matches!(item, ModuleItem::Stmt(Stmt::Expr(stmt))
                if matches!(&*stmt.expr, Expr::Lit(Lit::Str(_))))
        })
        .count()
}

/// Transform a parsed module in place.
///
/// `file_path` should be relative to the configured source root; it feeds
/// entry hashes and must be stable across machines. The mutated tree is the
/// caller's to print; the returned output carries the ordered entry list
/// and the import flags that were applied.
pub fn transform_module(
    module: &mut Module,
    source_map: &SourceMap,
    file_path: &str,
    config: &Config,
) -> TransformOutput {
    if config.directive_required && !has_directive(module, I18N_DIRECTIVE) {
        return TransformOutput::skipped();
    }

    let has_use_client = has_directive(module, USE_CLIENT_DIRECTIVE);
    let mut visitor = TransformVisitor::new(file_path, source_map, config, has_use_client);

    for item in &mut module.body {
        if handle_file_level_item(item, &mut visitor) {
            continue;
        }
        item.visit_mut_with(&mut visitor);
    }

    let imports = visitor.imports;
    let insert_at = prologue_len(module);
    if imports.needs_async_import {
        module.body.insert(insert_at, hooks::async_import());
    }
    if imports.needs_sync_import {
        module.body.insert(insert_at, hooks::sync_import());
    }

    let entries = std::mem::take(&mut visitor.entries);
    TransformOutput {
        transformed: !entries.is_empty() || imports.any(),
        entries,
        imports,
    }
}

/// Metadata exports are handled at file level, before generic traversal.
/// Returns true when the item was fully handled.
fn handle_file_level_item(item: &mut ModuleItem, visitor: &mut TransformVisitor) -> bool {
    match item {
        ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
            // export const metadata = { ... }
            if metadata::process_static_metadata_export(export, visitor) {
                return true;
            }
            // export function generateMetadata() { ... }
            if let Decl::Fn(fn_decl) = &mut export.decl
                && fn_decl.ident.sym.as_str() == metadata::GENERATE_METADATA_FN_NAME
            {
                metadata::process_metadata_function(fn_decl, visitor);
                return true;
            }
            false
        }
        // Top-level function generateMetadata() { ... }
        ModuleItem::Stmt(Stmt::Decl(Decl::Fn(fn_decl)))
            if fn_decl.ident.sym.as_str() == metadata::GENERATE_METADATA_FN_NAME =>
        {
            metadata::process_metadata_function(fn_decl, visitor);
            true
        }
        _ => false,
    }
}
