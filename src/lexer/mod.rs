//! Lexical analysis for the pseudocode dialect

mod scanner;
mod token;

pub use scanner::Lexer;
pub use token::{Builtin, Token, TokenKind};
