//! Abstract Syntax Tree (AST) definitions for the pseudocode dialect
//!
//! These types represent the structure of a program after parsing. The
//! tree serializes to JSON for the export path.

use crate::lexer::Builtin;
use crate::value::Value;
use serde::Serialize;

/// A complete parsed program: an ordered sequence of statements
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// A top-level statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Stmt {
    /// Variable assignment: `name = expr`
    Assign {
        name: String,
        value: Expr,
        line: u32,
    },
    /// Builtin call: `ORDENAR(...)`, `BUSCAR(...)`, `RESULTADO(...)`.
    /// Argument count and kinds are fixed by the builtin at parse time.
    Call {
        builtin: Builtin,
        args: Vec<Expr>,
        line: u32,
    },
}

impl Stmt {
    /// The source line this statement starts on
    pub fn line(&self) -> u32 {
        match self {
            Stmt::Assign { line, .. } => *line,
            Stmt::Call { line, .. } => *line,
        }
    }
}

/// An expression: the grammar is flat, with no operators or nesting
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expr {
    /// Numeric literal
    Number { value: f64 },
    /// List literal with its parsed elements
    List { elements: Vec<Value> },
    /// Reference to a variable
    Var { name: String },
}
