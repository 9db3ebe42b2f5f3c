//! Tests for the markup transformation engine.

use pretty_assertions::assert_eq;
use swc_ecma_ast::{
    BlockStmtOrExpr, CallExpr, Callee, Decl, DefaultDecl, Expr, Function, JSXAttrName,
    JSXAttrOrSpread, JSXAttrValue, JSXElement, JSXElementChild, JSXExpr, Lit, Module, ModuleDecl,
    ModuleItem, ObjectLit, ObjectPatProp, Pat, Prop, PropName, PropOrSpread, Stmt,
};

use super::{TransformOutput, transform_module};
use crate::config::{Config, SyncMode};
use crate::entry::TranslationEntry;
use crate::parsers::parse_jsx_source;
use crate::richtext::{self, RichTextOutput, RichTextParam};

fn transform_source(code: &str) -> (Module, TransformOutput) {
    transform_with_config(code, &Config::default())
}

fn transform_with_config(code: &str, config: &Config) -> (Module, TransformOutput) {
    let parsed = parse_jsx_source(code.to_string(), "app/test.tsx").unwrap();
    let mut module = parsed.module;
    let output = transform_module(&mut module, &parsed.source_map, "app/test.tsx", config);
    (module, output)
}

/// Look up a function declaration by name, through export wrappers.
fn function_named<'m>(module: &'m Module, name: &str) -> &'m Function {
    for item in &module.body {
        match item {
            ModuleItem::Stmt(Stmt::Decl(Decl::Fn(f))) if f.ident.sym.as_str() == name => {
                return &f.function;
            }
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
                if let Decl::Fn(f) = &export.decl
                    && f.ident.sym.as_str() == name
                {
                    return &f.function;
                }
            }
            ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(export)) => {
                if let DefaultDecl::Fn(f) = &export.decl
                    && f.ident.as_ref().is_some_and(|i| i.sym.as_str() == name)
                {
                    return &f.function;
                }
            }
            _ => {}
        }
    }
    panic!("no function named {name}");
}

fn returned_element(function: &Function) -> &JSXElement {
    for stmt in &function.body.as_ref().unwrap().stmts {
        if let Stmt::Return(ret) = stmt
            && let Some(arg) = &ret.arg
            && let Expr::JSXElement(element) = &**arg
        {
            return element;
        }
    }
    panic!("function returns no JSX element");
}

fn returned_object(function: &Function) -> &ObjectLit {
    for stmt in &function.body.as_ref().unwrap().stmts {
        if let Stmt::Return(ret) = stmt
            && let Some(arg) = &ret.arg
            && let Expr::Object(object) = &**arg
        {
            return object;
        }
    }
    panic!("function returns no object literal");
}

fn object_prop<'m>(object: &'m ObjectLit, name: &str) -> &'m Expr {
    for prop in &object.props {
        if let PropOrSpread::Prop(p) = prop
            && let Prop::KeyValue(kv) = &**p
            && let PropName::Ident(key) = &kv.key
            && key.sym.as_str() == name
        {
            return &kv.value;
        }
    }
    panic!("no property named {name}");
}

/// The translate-call inside a rewritten JSX child.
fn child_call(child: &JSXElementChild) -> &CallExpr {
    let JSXElementChild::JSXExprContainer(container) = child else {
        panic!("expected an expression container, got {child:?}");
    };
    let JSXExpr::Expr(expr) = &container.expr else {
        panic!("expected an expression");
    };
    let Expr::Call(call) = &**expr else {
        panic!("expected a call, got {expr:?}");
    };
    call
}

fn str_value(expr: &Expr) -> String {
    let Expr::Lit(Lit::Str(s)) = expr else {
        panic!("expected a string literal, got {expr:?}");
    };
    s.value.as_str().unwrap().to_string()
}

fn prop_name(prop: &PropOrSpread) -> String {
    let PropOrSpread::Prop(prop) = prop else {
        panic!("unexpected spread");
    };
    match &**prop {
        Prop::Shorthand(ident) => ident.sym.to_string(),
        Prop::KeyValue(kv) => match &kv.key {
            PropName::Ident(ident) => ident.sym.to_string(),
            other => panic!("unexpected key: {other:?}"),
        },
        other => panic!("unexpected prop: {other:?}"),
    }
}

struct InjectedHook {
    name: String,
    hashes: Vec<String>,
    awaited: bool,
    bindings: Vec<String>,
}

/// Parse the hook statement injected at the top of a component body.
fn injected_hook(function: &Function) -> InjectedHook {
    let body = function.body.as_ref().unwrap();
    let Stmt::Decl(Decl::Var(var)) = &body.stmts[0] else {
        panic!("first statement is not the hook declaration");
    };
    let declarator = &var.decls[0];

    let Pat::Object(pattern) = &declarator.name else {
        panic!("hook does not destructure");
    };
    let bindings: Vec<String> = pattern
        .props
        .iter()
        .map(|prop| match prop {
            ObjectPatProp::Assign(assign) => assign.key.id.sym.to_string(),
            other => panic!("unexpected destructuring prop: {other:?}"),
        })
        .collect();

    let mut init = declarator.init.as_deref().unwrap();
    let awaited = matches!(init, Expr::Await(_));
    if let Expr::Await(await_expr) = init {
        init = &await_expr.arg;
    }
    let Expr::Call(call) = init else {
        panic!("hook init is not a call");
    };
    let Callee::Expr(callee) = &call.callee else {
        panic!("unexpected callee");
    };
    let Expr::Ident(name) = &**callee else {
        panic!("callee is not an identifier");
    };

    let hashes = match &*call.args[0].expr {
        // useTranslation(["hash", ...])
        Expr::Array(array) => array,
        // getTranslations({ hashes: ["hash", ...] })
        Expr::Object(object) => {
            let PropOrSpread::Prop(prop) = &object.props[0] else {
                panic!("unexpected spread in hook options");
            };
            let Prop::KeyValue(kv) = &**prop else {
                panic!("unexpected hook option prop");
            };
            let Expr::Array(array) = &*kv.value else {
                panic!("hashes option is not an array");
            };
            array
        }
        other => panic!("unexpected hook argument: {other:?}"),
    }
    .elems
    .iter()
    .map(|elem| str_value(&elem.as_ref().unwrap().expr))
    .collect();

    InjectedHook {
        name: name.sym.to_string(),
        hashes,
        awaited,
        bindings,
    }
}

fn import_sources(module: &Module) -> Vec<String> {
    module
        .body
        .iter()
        .filter_map(|item| match item {
            ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => {
                Some(import.src.value.as_str().unwrap().to_string())
            }
            _ => None,
        })
        .collect()
}

#[test]
fn test_simple_text_rewrite() {
    let (module, output) =
        transform_source("export function Greeting() { return <div>Hello World</div>; }");

    assert!(output.transformed);
    assert_eq!(output.entries.len(), 1);
    let TranslationEntry::Content {
        source_text,
        hash,
        component_name,
        ..
    } = &output.entries[0]
    else {
        panic!("expected a content entry");
    };
    assert_eq!(source_text, "Hello World");
    assert_eq!(component_name, "Greeting");

    let function = function_named(&module, "Greeting");
    let element = returned_element(function);
    let call = child_call(&element.children[0]);
    assert_eq!(str_value(&call.args[0].expr), *hash);
    assert_eq!(str_value(&call.args[1].expr), "Hello World");
    assert_eq!(call.args.len(), 2);

    let hook = injected_hook(function);
    assert_eq!(hook.name, "useTranslation");
    assert!(!hook.awaited);
    assert_eq!(hook.hashes, vec![hash.clone()]);
    assert_eq!(hook.bindings, vec!["t"]);

    assert!(output.imports.needs_sync_import);
    assert!(!output.imports.needs_async_import);
    assert_eq!(import_sources(&module), vec!["lokal/react"]);
}

#[test]
fn test_mixed_content_rewrite() {
    let (module, output) = transform_source(
        "export function Inbox({ name, count }) { return <div>Hello {name}, you have <strong>{count}</strong> messages</div>; }",
    );

    assert_eq!(output.entries.len(), 1);
    let TranslationEntry::Content {
        source_text, hash, ..
    } = &output.entries[0]
    else {
        panic!("expected a content entry");
    };
    assert_eq!(
        source_text,
        "Hello {name}, you have <strong0>{count}</strong0> messages"
    );

    // All children collapse into one translate-call.
    let element = returned_element(function_named(&module, "Inbox"));
    assert_eq!(element.children.len(), 1);
    let call = child_call(&element.children[0]);
    assert_eq!(str_value(&call.args[0].expr), *hash);
    assert_eq!(str_value(&call.args[1].expr), *source_text);

    let Expr::Object(params) = &*call.args[2].expr else {
        panic!("expected a parameter object");
    };
    let names: Vec<String> = params.props.iter().map(prop_name).collect();
    assert_eq!(names, vec!["name", "count", "strong0"]);

    // The tag renderer takes the rendered chunks as its one parameter.
    let PropOrSpread::Prop(prop) = params.props.last().unwrap() else {
        panic!("unexpected spread");
    };
    let Prop::KeyValue(kv) = &**prop else {
        panic!("expected a key-value renderer");
    };
    let Expr::Arrow(renderer) = &*kv.value else {
        panic!("renderer is not an arrow");
    };
    assert_eq!(renderer.params.len(), 1);
}

#[test]
fn test_nested_components_get_their_own_hooks() {
    let code = r#"
export function Outer() {
    function Inner() {
        return <span>Inner text</span>;
    }
    return <div>Outer text</div>;
}
"#;
    let (module, output) = transform_source(code);

    assert_eq!(output.entries.len(), 2);
    assert_eq!(output.entries[0].source_text(), "Inner text");
    assert_eq!(output.entries[1].source_text(), "Outer text");

    let outer = function_named(&module, "Outer");
    let inner = outer
        .body
        .as_ref()
        .unwrap()
        .stmts
        .iter()
        .find_map(|stmt| match stmt {
            Stmt::Decl(Decl::Fn(f)) if f.ident.sym.as_str() == "Inner" => Some(&f.function),
            _ => None,
        })
        .expect("inner component survives");

    let inner_hash = output.entries[0].hash().to_string();
    let outer_hash = output.entries[1].hash().to_string();
    assert_eq!(injected_hook(inner).hashes, vec![inner_hash]);
    assert_eq!(injected_hook(outer).hashes, vec![outer_hash]);
}

#[test]
fn test_async_component_gets_awaited_hook() {
    let (module, output) =
        transform_source("export default async function Page() { return <main>Welcome</main>; }");

    let hook = injected_hook(function_named(&module, "Page"));
    assert_eq!(hook.name, "getTranslations");
    assert!(hook.awaited);
    assert!(output.imports.needs_async_import);
    assert!(!output.imports.needs_sync_import);
    assert_eq!(import_sources(&module), vec!["lokal/react/server"]);
}

#[test]
fn test_use_client_forces_sync_hook() {
    let code =
        "\"use client\";\nexport default async function Page() { return <main>Welcome</main>; }";
    let (module, output) = transform_source(code);

    let hook = injected_hook(function_named(&module, "Page"));
    assert_eq!(hook.name, "useTranslation");
    assert!(output.imports.needs_sync_import);

    // The import lands after the directive prologue, not before it.
    assert!(matches!(&module.body[0], ModuleItem::Stmt(Stmt::Expr(_))));
    assert!(matches!(
        &module.body[1],
        ModuleItem::ModuleDecl(ModuleDecl::Import(_))
    ));
}

#[test]
fn test_all_async_mode_forces_signature_async() {
    let config = Config {
        sync_mode: SyncMode::AllAsync,
        ..Default::default()
    };
    let (module, _) = transform_with_config(
        "export function Banner() { return <div>Sale today</div>; }",
        &config,
    );

    let function = function_named(&module, "Banner");
    assert!(function.is_async);
    assert!(injected_hook(function).awaited);
}

#[test]
fn test_file_with_both_component_kinds_needs_both_imports() {
    let code = r#"
export async function Page() { return <div>Server text</div>; }
export function Badge() { return <span>Client text</span>; }
"#;
    let (module, output) = transform_source(code);

    assert!(output.imports.needs_sync_import);
    assert!(output.imports.needs_async_import);
    assert_eq!(
        import_sources(&module),
        vec!["lokal/react", "lokal/react/server"]
    );
}

#[test]
fn test_directive_gate_skips_file() {
    let config = Config {
        directive_required: true,
        ..Default::default()
    };
    let code = "export function Greeting() { return <div>Hello</div>; }";

    let (module, output) = transform_with_config(code, &config);
    assert!(!output.transformed);
    assert!(output.entries.is_empty());
    assert_eq!(module.body.len(), 1);

    let opted_in = format!("\"use i18n\";\n{code}");
    let (_, output) = transform_with_config(&opted_in, &config);
    assert!(output.transformed);
    assert_eq!(output.entries.len(), 1);
}

#[test]
fn test_skip_listed_and_marked_elements_produce_nothing() {
    for code in [
        "export function Doc() { return <code>npm install lokal</code>; }",
        "export function Doc() { return <div translate=\"no\">Secret text</div>; }",
        "export function Doc() { return <div data-lokal-skip>Internal text</div>; }",
    ] {
        let (_, output) = transform_source(code);
        assert!(output.entries.is_empty(), "expected no entries for {code}");
        assert!(!output.transformed);
    }
}

#[test]
fn test_skip_listed_child_is_inert_in_mixed_content() {
    let (module, output) = transform_source(
        "export function Hint() { return <div>Run <code>npm i</code> to install</div>; }",
    );

    assert_eq!(output.entries.len(), 1);
    let source_text = output.entries[0].source_text();
    assert_eq!(source_text, "Run <code0></code0> to install");
    assert!(!source_text.contains("npm"));

    // The inert renderer takes no chunks.
    let element = returned_element(function_named(&module, "Hint"));
    let call = child_call(&element.children[0]);
    let Expr::Object(params) = &*call.args[2].expr else {
        panic!("expected a parameter object");
    };
    let PropOrSpread::Prop(prop) = &params.props[0] else {
        panic!("unexpected spread");
    };
    let Prop::KeyValue(kv) = &**prop else {
        panic!("expected the code0 renderer");
    };
    let Expr::Arrow(renderer) = &*kv.value else {
        panic!("renderer is not an arrow");
    };
    assert!(renderer.params.is_empty());
}

#[test]
fn test_translatable_attributes_become_entries() {
    let (module, output) = transform_source(
        r#"export function Pic() { return <img src="/cat.png" alt="A sleeping cat" />; }"#,
    );

    assert_eq!(output.entries.len(), 1);
    let TranslationEntry::Attribute {
        source_text,
        attribute_name,
        component_name,
        hash,
        ..
    } = &output.entries[0]
    else {
        panic!("expected an attribute entry");
    };
    assert_eq!(source_text, "A sleeping cat");
    assert_eq!(attribute_name, "alt");
    assert_eq!(component_name, "Pic");

    // alt is rewritten to a translate-call; src is untouched.
    let element = returned_element(function_named(&module, "Pic"));
    let JSXAttrOrSpread::JSXAttr(src) = &element.opening.attrs[0] else {
        panic!("unexpected spread");
    };
    assert!(matches!(&src.value, Some(JSXAttrValue::Str(_))));
    let JSXAttrOrSpread::JSXAttr(alt) = &element.opening.attrs[1] else {
        panic!("unexpected spread");
    };
    let Some(JSXAttrValue::JSXExprContainer(container)) = &alt.value else {
        panic!("alt was not rewritten");
    };
    let JSXExpr::Expr(expr) = &container.expr else {
        panic!("expected an expression");
    };
    let Expr::Call(call) = &**expr else {
        panic!("expected a call");
    };
    assert_eq!(str_value(&call.args[0].expr), *hash);

    // Attribute hashes load through the component's hook like content.
    assert_eq!(
        injected_hook(function_named(&module, "Pic")).hashes,
        vec![hash.clone()]
    );
}

#[test]
fn test_attributes_on_skipped_elements_still_translate() {
    let (_, output) = transform_source(
        r#"export function Snippet() { return <code title="Copy me">npm i</code>; }"#,
    );

    assert_eq!(output.entries.len(), 1);
    let TranslationEntry::Attribute {
        source_text,
        attribute_name,
        ..
    } = &output.entries[0]
    else {
        panic!("expected an attribute entry");
    };
    assert_eq!(source_text, "Copy me");
    assert_eq!(attribute_name, "title");
}

#[test]
fn test_opaque_expression_becomes_numbered_placeholder() {
    let (module, output) = transform_source(
        "export function Total({ price }) { return <span>Total: {price * 2}</span>; }",
    );

    assert_eq!(output.entries[0].source_text(), "Total: {expression0}");

    let element = returned_element(function_named(&module, "Total"));
    let call = child_call(&element.children[0]);
    let Expr::Object(params) = &*call.args[2].expr else {
        panic!("expected a parameter object");
    };
    assert_eq!(prop_name(&params.props[0]), "expression0");

    // The raw expression is preserved as the parameter value.
    let PropOrSpread::Prop(prop) = &params.props[0] else {
        panic!("unexpected spread");
    };
    let Prop::KeyValue(kv) = &**prop else {
        panic!("expected a key-value prop");
    };
    assert!(matches!(&*kv.value, Expr::Bin(_)));
}

#[test]
fn test_string_literal_expressions_inline_and_decode_back() {
    let (_, output) = transform_source(
        r#"export function Note({ name }) { return <p>It{"'"}s {name} day</p>; }"#,
    );

    let entry = &output.entries[0];
    assert_eq!(entry.source_text(), "It''s {name} day");

    let mut params = richtext::RichTextParams::new();
    params.insert("name".into(), RichTextParam::Value("launch".into()));
    let out = richtext::render_rich_text(entry.source_text(), &params);
    assert_eq!(out, RichTextOutput::Text("It's launch day".into()));
}

#[test]
fn test_text_with_void_siblings_keeps_them_in_place() {
    let (module, output) =
        transform_source("export function Tip() { return <p><br/>Press Enter</p>; }");

    assert_eq!(output.entries.len(), 1);
    assert_eq!(output.entries[0].source_text(), "Press Enter");

    let element = returned_element(function_named(&module, "Tip"));
    assert_eq!(element.children.len(), 2);
    assert!(matches!(&element.children[0], JSXElementChild::JSXElement(_)));
    let call = child_call(&element.children[1]);
    assert_eq!(str_value(&call.args[1].expr), "Press Enter");
}

#[test]
fn test_html_lang_injection_marks_locale_needed() {
    let (module, _) = transform_source(
        "export default async function RootLayout() { return <html><body>Welcome</body></html>; }",
    );

    let function = function_named(&module, "RootLayout");
    assert_eq!(injected_hook(function).bindings, vec!["t", "locale"]);

    let html = returned_element(function);
    let lang = html
        .opening
        .attrs
        .iter()
        .find_map(|attr| match attr {
            JSXAttrOrSpread::JSXAttr(attr) => match &attr.name {
                JSXAttrName::Ident(name) if name.sym.as_str() == "lang" => Some(attr),
                _ => None,
            },
            _ => None,
        })
        .expect("lang attribute injected");
    let Some(JSXAttrValue::JSXExprContainer(container)) = &lang.value else {
        panic!("lang is not bound to an expression");
    };
    let JSXExpr::Expr(expr) = &container.expr else {
        panic!("expected an expression");
    };
    assert!(matches!(&**expr, Expr::Ident(ident) if ident.sym.as_str() == "locale"));
}

#[test]
fn test_html_with_lang_is_left_alone() {
    let (module, _) = transform_source(
        r#"export default function RootLayout() { return <html lang="en"><body>Welcome</body></html>; }"#,
    );

    let function = function_named(&module, "RootLayout");
    let html = returned_element(function);
    assert_eq!(html.opening.attrs.len(), 1);
    assert_eq!(injected_hook(function).bindings, vec!["t"]);
}

#[test]
fn test_static_metadata_export_becomes_generate_metadata() {
    let code = r#"
export const metadata = {
    title: "My Site",
    description: "All about my site",
    robots: "noindex",
    openGraph: { title: "My Site on OG", images: [{ url: "/og.png", alt: "Site logo" }] },
};
"#;
    let (module, output) = transform_source(code);

    let paths: Vec<&str> = output
        .entries
        .iter()
        .map(|entry| match entry {
            TranslationEntry::Metadata { field_path, .. } => field_path.as_str(),
            other => panic!("expected metadata entries, got {other:?}"),
        })
        .collect();
    assert_eq!(
        paths,
        vec![
            "title",
            "description",
            "openGraph.title",
            "openGraph.images[0].alt"
        ]
    );
    assert!(output.imports.needs_async_import);

    let function = function_named(&module, "generateMetadata");
    assert!(function.is_async);
    let hook = injected_hook(function);
    assert_eq!(hook.name, "getTranslations");
    assert_eq!(hook.hashes.len(), 4);

    let object = returned_object(function);
    assert!(matches!(object_prop(object, "title"), Expr::Call(_)));
    assert!(matches!(
        object_prop(object, "robots"),
        Expr::Lit(Lit::Str(_))
    ));
}

#[test]
fn test_metadata_without_translatable_leaves_is_untouched() {
    let code = r##"export const metadata = { robots: "noindex", themeColor: "#000" };"##;
    let (module, output) = transform_source(code);

    assert!(output.entries.is_empty());
    assert!(!output.transformed);
    let ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) = &module.body[0] else {
        panic!("export disappeared");
    };
    assert!(matches!(&export.decl, Decl::Var(_)));
}

#[test]
fn test_existing_generate_metadata_is_rewritten_in_place() {
    let code = r#"
export function generateMetadata() {
    return { title: "Docs", robots: "noindex" };
}
"#;
    let (module, output) = transform_source(code);

    assert_eq!(output.entries.len(), 1);
    let function = function_named(&module, "generateMetadata");
    assert!(function.is_async);
    assert_eq!(injected_hook(function).name, "getTranslations");
    let object = returned_object(function);
    assert!(matches!(object_prop(object, "title"), Expr::Call(_)));
    assert!(matches!(
        object_prop(object, "robots"),
        Expr::Lit(Lit::Str(_))
    ));
}

#[test]
fn test_override_attribute_attaches_and_is_removed() {
    let code = r#"export function Promo() { return <div data-lokal-override={{ de: "Hallo Welt" }}>Hello World</div>; }"#;
    let (module, output) = transform_source(code);

    let TranslationEntry::Content { overrides, .. } = &output.entries[0] else {
        panic!("expected a content entry");
    };
    let overrides = overrides.as_ref().expect("overrides attached");
    assert_eq!(overrides.get("de").map(String::as_str), Some("Hallo Welt"));

    let element = returned_element(function_named(&module, "Promo"));
    assert!(element.opening.attrs.is_empty(), "override attribute removed");
}

#[test]
fn test_invalid_override_attribute_is_ignored() {
    let code = r#"export function Promo() { return <div data-lokal-override={{ deutsch: "Hallo" }}>Hello</div>; }"#;
    let (module, output) = transform_source(code);

    let TranslationEntry::Content { overrides, .. } = &output.entries[0] else {
        panic!("expected a content entry");
    };
    assert!(overrides.is_none());
    let element = returned_element(function_named(&module, "Promo"));
    assert_eq!(element.opening.attrs.len(), 1, "invalid override left in place");
}

#[test]
fn test_fragment_children_are_translatable() {
    let (_, output) = transform_source("export function Words() { return <>Just some words</>; }");

    assert_eq!(output.entries.len(), 1);
    assert_eq!(output.entries[0].source_text(), "Just some words");
}

#[test]
fn test_arrow_component_expression_body_becomes_block() {
    let (module, output) = transform_source("const Card = () => <div>Card title</div>;");

    assert_eq!(output.entries.len(), 1);
    let TranslationEntry::Content { component_name, .. } = &output.entries[0] else {
        panic!("expected a content entry");
    };
    assert_eq!(component_name, "Card");

    // The import goes first; the arrow's expression body became a block
    // with the hook before the explicit return.
    assert!(matches!(
        &module.body[0],
        ModuleItem::ModuleDecl(ModuleDecl::Import(_))
    ));
    let ModuleItem::Stmt(Stmt::Decl(Decl::Var(var))) = &module.body[1] else {
        panic!("declaration disappeared");
    };
    let Some(Expr::Arrow(arrow)) = var.decls[0].init.as_deref() else {
        panic!("initializer is not an arrow");
    };
    let BlockStmtOrExpr::BlockStmt(block) = &*arrow.body else {
        panic!("expression body was not converted to a block");
    };
    assert_eq!(block.stmts.len(), 2);
    assert!(matches!(block.stmts[0], Stmt::Decl(Decl::Var(_))));
    assert!(matches!(block.stmts[1], Stmt::Return(_)));
}

#[test]
fn test_anonymous_callbacks_are_not_components() {
    let (_, output) = transform_source(
        "export function List({ items }) { return <ul>{items.map((item) => <li>Item label</li>)}</ul>; }",
    );

    assert!(output.entries.is_empty());
}

#[test]
fn test_markup_outside_a_component_is_untouched() {
    let (module, output) = transform_source("const banner = <div>Plain text</div>;");

    assert!(output.entries.is_empty());
    assert!(!output.transformed);
    assert!(import_sources(&module).is_empty());
}

#[test]
fn test_repeated_runs_produce_identical_entries() {
    let code = "export function Page() { return <div>Stable <strong>text</strong> here</div>; }";
    let (_, first) = transform_source(code);
    let (_, second) = transform_source(code);

    assert_eq!(first.entries, second.entries);
}
