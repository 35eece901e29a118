//! AST presentation
//!
//! Read-only rendering of a parsed program: an indentation-scaled text
//! view for inspection, and a JSON document for export.

use crate::errors::PseudocResult;
use crate::parser::{Expr, Program, Stmt};
use crate::value::Value;

/// Render the program as an indented tree, one node per line
pub fn render_ast(program: &Program) -> String {
    let mut out = String::new();
    for stmt in &program.statements {
        render_statement(stmt, 0, &mut out);
    }
    out
}

fn indent(level: usize, out: &mut String) {
    for _ in 0..level {
        out.push_str("  ");
    }
}

fn render_statement(stmt: &Stmt, level: usize, out: &mut String) {
    indent(level, out);
    match stmt {
        Stmt::Assign { name, value, line } => {
            out.push_str(&format!("Assign {} (line {})\n", name, line));
            render_expression(value, level + 1, out);
        }
        Stmt::Call {
            builtin,
            args,
            line,
        } => {
            out.push_str(&format!("Call {} (line {})\n", builtin, line));
            for arg in args {
                render_expression(arg, level + 1, out);
            }
        }
    }
}

fn render_expression(expr: &Expr, level: usize, out: &mut String) {
    indent(level, out);
    match expr {
        Expr::Number { value } => {
            out.push_str(&format!("Number {}\n", crate::value::format_number(*value)));
        }
        Expr::List { elements } => {
            out.push_str(&format!("List {}\n", Value::List(elements.clone())));
        }
        Expr::Var { name } => {
            out.push_str(&format!("Var {}\n", name));
        }
    }
}

/// Serialize the program to a pretty-printed JSON document
pub fn ast_to_json(program: &Program) -> PseudocResult<String> {
    Ok(serde_json::to_string_pretty(program)?)
}
