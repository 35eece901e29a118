//! Syntactic analysis for the pseudocode dialect

mod ast;
mod parser;

pub use ast::{Expr, Program, Stmt};
pub use parser::Parser;
