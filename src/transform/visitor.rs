//! The traversal driver.
//!
//! One `TransformVisitor` is created per file and owns all traversal state:
//! the component frame stack, the collected entries and the file-wide
//! import needs. There is no shared or global state; concurrent per-file
//! invocations need no coordination.
//!
//! Mutations stay local to the node being visited. Hook calls are injected
//! when a component frame is popped, imports when file-level processing
//! finishes.

use std::collections::BTreeMap;

use swc_common::{DUMMY_SP, SourceMap, Span, SyntaxContext};
use swc_ecma_ast::{
    ArrowExpr, BlockStmt, BlockStmtOrExpr, DefaultDecl, Expr, ExportDefaultDecl,
    ExportDefaultExpr, FnDecl, FnExpr, Function, IdentName, JSXAttr, JSXAttrName, JSXAttrOrSpread,
    JSXAttrValue, JSXElement, JSXElementChild, JSXElementName, JSXFragment, JSXOpeningElement,
    Pat, ReturnStmt, Stmt, VarDecl,
};
use swc_ecma_visit::{VisitMut, VisitMutWith};

use crate::config::{Config, SyncMode};
use crate::entry::{EntryLocation, TranslationEntry};
use crate::utils::normalize_whitespace;

use super::classify;
use super::component::{arrow_returns_jsx, function_returns_jsx};
use super::hooks;
use super::overrides;
use super::rewrite;
use super::scope::{self, TranslationScope};

/// Import needs collected across the whole file. A file may need both
/// variants when it mixes synchronous and asynchronous components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportRequirements {
    pub needs_sync_import: bool,
    pub needs_async_import: bool,
}

impl ImportRequirements {
    pub fn any(&self) -> bool {
        self.needs_sync_import || self.needs_async_import
    }
}

/// Bookkeeping for one component-boundary function while its body is being
/// traversed. A stack of these tracks nesting; a frame's hashes belong only
/// to nodes directly owned by that component.
struct ComponentFrame {
    name: String,
    is_async: bool,
    hashes: Vec<String>,
    needs_locale: bool,
}

/// A component-boundary function of either shape, borrowed for processing.
enum FunctionBoundary<'n> {
    Func(&'n mut Function),
    Arrow(&'n mut ArrowExpr),
}

impl FunctionBoundary<'_> {
    fn returns_jsx(&self) -> bool {
        match self {
            Self::Func(function) => function_returns_jsx(function),
            Self::Arrow(arrow) => arrow_returns_jsx(arrow),
        }
    }

    fn is_async(&self) -> bool {
        match self {
            Self::Func(function) => function.is_async,
            Self::Arrow(arrow) => arrow.is_async,
        }
    }

    fn set_async(&mut self) {
        match self {
            Self::Func(function) => function.is_async = true,
            Self::Arrow(arrow) => arrow.is_async = true,
        }
    }

    fn visit_body(&mut self, visitor: &mut TransformVisitor) {
        match self {
            Self::Func(function) => function.visit_mut_children_with(visitor),
            Self::Arrow(arrow) => arrow.visit_mut_children_with(visitor),
        }
    }

    /// Insert the hook statement at the top of the body. An arrow with an
    /// expression body is converted to a block with an explicit return.
    fn inject_hook(&mut self, stmt: Stmt) {
        match self {
            Self::Func(function) => {
                if let Some(body) = &mut function.body {
                    body.stmts.insert(0, stmt);
                }
            }
            Self::Arrow(arrow) => match &mut *arrow.body {
                BlockStmtOrExpr::BlockStmt(body) => body.stmts.insert(0, stmt),
                BlockStmtOrExpr::Expr(_) => {
                    let body = std::mem::replace(
                        &mut *arrow.body,
                        BlockStmtOrExpr::BlockStmt(empty_block()),
                    );
                    if let BlockStmtOrExpr::Expr(expr) = body {
                        *arrow.body = BlockStmtOrExpr::BlockStmt(BlockStmt {
                            span: DUMMY_SP,
                            ctxt: SyntaxContext::empty(),
                            stmts: vec![
                                stmt,
                                Stmt::Return(ReturnStmt {
                                    span: DUMMY_SP,
                                    arg: Some(expr),
                                }),
                            ],
                        });
                    }
                }
            },
        }
    }
}

fn empty_block() -> BlockStmt {
    BlockStmt {
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
        stmts: Vec::new(),
    }
}

pub struct TransformVisitor<'a> {
    pub(crate) file_path: &'a str,
    pub(crate) source_map: &'a SourceMap,
    config: &'a Config,
    /// File-level `"use client"` marker, resolved once before traversal.
    has_use_client: bool,
    frames: Vec<ComponentFrame>,
    pub(crate) entries: Vec<TranslationEntry>,
    pub(crate) imports: ImportRequirements,
}

impl<'a> TransformVisitor<'a> {
    pub fn new(
        file_path: &'a str,
        source_map: &'a SourceMap,
        config: &'a Config,
        has_use_client: bool,
    ) -> Self {
        Self {
            file_path,
            source_map,
            config,
            has_use_client,
            frames: Vec::new(),
            entries: Vec::new(),
            imports: ImportRequirements::default(),
        }
    }

    pub(crate) fn entry_location(&self, span: Span) -> EntryLocation {
        let location = EntryLocation::new(self.file_path);
        if span.is_dummy() {
            return location;
        }
        let loc = self.source_map.lookup_char_pos(span.lo);
        location.with_position(loc.line, loc.col_display + 1)
    }

    /// Whether the frame for a component uses the awaited hook. Decided
    /// once on entry; the signature rewrite happens at injection time.
    fn resolve_frame_async(&self, fn_is_async: bool) -> bool {
        match self.config.sync_mode {
            SyncMode::AllSync => false,
            SyncMode::AllAsync => true,
            SyncMode::Directive => !self.has_use_client && fn_is_async,
        }
    }

    fn register_hash(&mut self, hash: &str) {
        if let Some(frame) = self.frames.last_mut() {
            frame.hashes.push(hash.to_string());
        }
    }

    fn current_component(&self) -> Option<&str> {
        self.frames.last().map(|frame| frame.name.as_str())
    }

    /// Handle a possible component boundary. Non-components and functions
    /// without an inferable name are left alone — their bodies are not
    /// traversed.
    fn process_function(&mut self, mut boundary: FunctionBoundary, name: Option<String>) {
        if !boundary.returns_jsx() {
            return;
        }
        let Some(name) = name else {
            return;
        };

        let is_async = self.resolve_frame_async(boundary.is_async());
        self.frames.push(ComponentFrame {
            name,
            is_async,
            hashes: Vec::new(),
            needs_locale: false,
        });
        boundary.visit_body(self);
        let Some(frame) = self.frames.pop() else {
            return;
        };

        if frame.hashes.is_empty() && !frame.needs_locale {
            return;
        }

        let stmt = if frame.is_async {
            self.imports.needs_async_import = true;
            if !boundary.is_async() {
                boundary.set_async();
            }
            hooks::async_hook_stmt(&frame.hashes, frame.needs_locale)
        } else {
            self.imports.needs_sync_import = true;
            hooks::sync_hook_stmt(&frame.hashes, frame.needs_locale)
        };
        boundary.inject_hook(stmt);
    }

    /// Rewrite allow-listed string-literal attributes into translate-calls.
    /// Runs on every visited element, skipped or not.
    pub(crate) fn translate_attributes(&mut self, opening: &mut JSXOpeningElement) {
        let Some(component_name) = self.current_component().map(str::to_owned) else {
            return;
        };
        let location_span = opening.span;

        for attr in &mut opening.attrs {
            let JSXAttrOrSpread::JSXAttr(attr) = attr else {
                continue;
            };
            let JSXAttrName::Ident(name) = &attr.name else {
                continue;
            };
            if !classify::is_translatable_attribute(name.sym.as_str()) {
                continue;
            }
            let Some(JSXAttrValue::Str(value)) = &attr.value else {
                continue;
            };
            let Some(raw) = value.value.as_str() else {
                continue;
            };
            let text = normalize_whitespace(raw);
            if text.is_empty() {
                continue;
            }

            let entry = TranslationEntry::attribute(
                text.clone(),
                name.sym.to_string(),
                component_name.clone(),
                self.entry_location(location_span),
            );
            attr.value = Some(JSXAttrValue::JSXExprContainer(
                rewrite::translation_call_container(entry.hash(), &text),
            ));
            self.register_hash(entry.hash());
            self.entries.push(entry);
        }
    }

    /// Give a locale-less `<html>` element a `lang={locale}` attribute and
    /// mark the owning frame as needing `locale` from its hook. No-op when
    /// the attribute exists or there is no enclosing frame.
    fn inject_html_lang(&mut self, opening: &mut JSXOpeningElement) {
        let JSXElementName::Ident(name) = &opening.name else {
            return;
        };
        if name.sym.as_str() != "html" {
            return;
        }

        let has_lang = opening.attrs.iter().any(|attr| {
            matches!(attr, JSXAttrOrSpread::JSXAttr(attr)
                if matches!(&attr.name, JSXAttrName::Ident(name)
                    if name.sym.as_str() == "lang" || name.sym.as_str() == "language"))
        });
        if has_lang {
            return;
        }
        let Some(frame) = self.frames.last_mut() else {
            return;
        };

        opening.attrs.push(JSXAttrOrSpread::JSXAttr(JSXAttr {
            span: DUMMY_SP,
            name: JSXAttrName::Ident(IdentName::new("lang".into(), DUMMY_SP)),
            value: Some(JSXAttrValue::JSXExprContainer(rewrite::expr_container(
                Expr::Ident(rewrite::ident("locale")),
            ))),
        }));
        frame.needs_locale = true;
    }

    fn process_element(&mut self, node: &mut JSXElement) -> bool {
        if self.frames.is_empty() {
            return false;
        }
        let span = node.span;
        let Some(scope) = scope::resolve_scope(&mut node.children, self) else {
            return false;
        };
        let overrides = overrides::take_overrides(node);
        self.commit_scope(scope, &mut node.children, span, overrides);
        true
    }

    fn process_fragment(&mut self, node: &mut JSXFragment) -> bool {
        if self.frames.is_empty() {
            return false;
        }
        let span = node.span;
        let Some(scope) = scope::resolve_scope(&mut node.children, self) else {
            return false;
        };
        self.commit_scope(scope, &mut node.children, span, None);
        true
    }

    /// Apply a resolved scope: create the entry and rewrite the children.
    /// The replaced subtree is fully consumed; traversal must not descend
    /// into it again.
    fn commit_scope(
        &mut self,
        scope: TranslationScope,
        children: &mut Vec<JSXElementChild>,
        span: Span,
        overrides: Option<BTreeMap<String, String>>,
    ) {
        let Some(component_name) = self.current_component().map(str::to_owned) else {
            return;
        };

        match scope {
            TranslationScope::Text { text, position } => {
                let entry = TranslationEntry::content(
                    text.clone(),
                    component_name,
                    self.entry_location(span),
                    overrides,
                );
                for (index, child) in children.iter_mut().enumerate() {
                    if index == position {
                        *child = JSXElementChild::JSXExprContainer(
                            rewrite::translation_call_container(entry.hash(), &text),
                        );
                    } else if let JSXElementChild::JSXElement(element) = child {
                        // Void siblings stay in place but still get their
                        // attributes translated.
                        self.translate_attributes(&mut element.opening);
                    }
                }
                self.register_hash(entry.hash());
                self.entries.push(entry);
            }
            TranslationScope::Mixed { content } => {
                let entry = TranslationEntry::content(
                    content.text.clone(),
                    component_name,
                    self.entry_location(span),
                    overrides,
                );
                let call = rewrite::rich_translation_call(entry.hash(), content);
                children.push(JSXElementChild::JSXExprContainer(rewrite::expr_container(
                    Expr::Call(call),
                )));
                self.register_hash(entry.hash());
                self.entries.push(entry);
            }
        }
    }
}

impl VisitMut for TransformVisitor<'_> {
    fn visit_mut_fn_decl(&mut self, node: &mut FnDecl) {
        let name = node.ident.sym.to_string();
        self.process_function(FunctionBoundary::Func(&mut node.function), Some(name));
    }

    fn visit_mut_fn_expr(&mut self, node: &mut FnExpr) {
        let name = node.ident.as_ref().map(|ident| ident.sym.to_string());
        self.process_function(FunctionBoundary::Func(&mut node.function), name);
    }

    fn visit_mut_arrow_expr(&mut self, node: &mut ArrowExpr) {
        // Anonymous arrows (callbacks, render props) have no inferable
        // component name.
        self.process_function(FunctionBoundary::Arrow(node), None);
    }

    fn visit_mut_var_decl(&mut self, node: &mut VarDecl) {
        for decl in &mut node.decls {
            let binding = match &decl.name {
                Pat::Ident(ident) => Some(ident.id.sym.to_string()),
                _ => None,
            };
            match decl.init.as_deref_mut() {
                // const MyComponent = () => ...
                Some(Expr::Arrow(arrow)) if binding.is_some() => {
                    self.process_function(FunctionBoundary::Arrow(arrow), binding);
                }
                // const MyComponent = function maybeNamed() { ... }
                Some(Expr::Fn(fn_expr)) if binding.is_some() || fn_expr.ident.is_some() => {
                    let name = fn_expr
                        .ident
                        .as_ref()
                        .map(|ident| ident.sym.to_string())
                        .or(binding);
                    self.process_function(FunctionBoundary::Func(&mut fn_expr.function), name);
                }
                _ => decl.visit_mut_children_with(self),
            }
        }
    }

    fn visit_mut_export_default_decl(&mut self, node: &mut ExportDefaultDecl) {
        if let DefaultDecl::Fn(fn_expr) = &mut node.decl {
            let name = fn_expr
                .ident
                .as_ref()
                .map(|ident| ident.sym.to_string())
                .unwrap_or_else(|| "default".to_string());
            self.process_function(FunctionBoundary::Func(&mut fn_expr.function), Some(name));
            return;
        }
        node.visit_mut_children_with(self);
    }

    fn visit_mut_export_default_expr(&mut self, node: &mut ExportDefaultExpr) {
        if let Expr::Arrow(arrow) = &mut *node.expr {
            self.process_function(FunctionBoundary::Arrow(arrow), Some("default".to_string()));
            return;
        }
        node.visit_mut_children_with(self);
    }

    fn visit_mut_jsx_element(&mut self, node: &mut JSXElement) {
        self.translate_attributes(&mut node.opening);
        self.inject_html_lang(&mut node.opening);

        if classify::should_skip_element(node) {
            return;
        }
        if self.process_element(node) {
            // The subtree was consumed by the rewrite.
            return;
        }
        node.visit_mut_children_with(self);
    }

    fn visit_mut_jsx_fragment(&mut self, node: &mut JSXFragment) {
        // Fragments are never skipped and carry no attributes; they mostly
        // exist to make bare text translatable.
        if self.process_fragment(node) {
            return;
        }
        node.visit_mut_children_with(self);
    }
}
