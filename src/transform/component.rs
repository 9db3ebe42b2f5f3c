//! Component-boundary detection.
//!
//! A function is a component boundary when it returns markup: either an
//! arrow function whose expression body is a JSX element/fragment, or any
//! function containing an explicit return statement with a JSX argument.

use swc_ecma_ast::{ArrowExpr, BlockStmtOrExpr, Expr, Function, ReturnStmt};
use swc_ecma_visit::{Visit, VisitWith};

pub(crate) fn unwrap_paren(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_paren(&paren.expr),
        _ => expr,
    }
}

fn is_jsx(expr: &Expr) -> bool {
    matches!(
        unwrap_paren(expr),
        Expr::JSXElement(_) | Expr::JSXFragment(_)
    )
}

struct ReturnsJsxFinder {
    found: bool,
}

impl Visit for ReturnsJsxFinder {
    fn visit_return_stmt(&mut self, node: &ReturnStmt) {
        if let Some(arg) = &node.arg
            && is_jsx(arg)
        {
            self.found = true;
        }
        node.visit_children_with(self);
    }
}

pub(crate) fn function_returns_jsx(function: &Function) -> bool {
    let Some(body) = &function.body else {
        return false;
    };
    let mut finder = ReturnsJsxFinder { found: false };
    body.visit_with(&mut finder);
    finder.found
}

pub(crate) fn arrow_returns_jsx(arrow: &ArrowExpr) -> bool {
    match &*arrow.body {
        BlockStmtOrExpr::Expr(expr) => {
            if is_jsx(expr) {
                return true;
            }
            let mut finder = ReturnsJsxFinder { found: false };
            expr.visit_with(&mut finder);
            finder.found
        }
        BlockStmtOrExpr::BlockStmt(body) => {
            let mut finder = ReturnsJsxFinder { found: false };
            body.visit_with(&mut finder);
            finder.found
        }
    }
}
