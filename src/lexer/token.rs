//! Token definitions for the pseudocode dialect
//!
//! Defines all token types produced by the lexer.

use crate::errors::SourceSpan;
use crate::value::{format_number, Value};
use serde::Serialize;
use std::fmt;

/// A token produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// Source location of this token
    pub span: SourceSpan,
    /// 1-based source line
    pub line: u32,
    /// 1-based source column
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, span: SourceSpan, line: u32, column: u32) -> Self {
        Self {
            kind,
            span,
            line,
            column,
        }
    }
}

/// The built-in operations of the dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Builtin {
    /// `ORDENAR(list)` - sort a list ascending
    Sort,
    /// `BUSCAR(value, list)` - find the first occurrence of a value
    Search,
    /// `RESULTADO(expr)` - report a value
    Result,
}

impl Builtin {
    /// Try to parse a word as a builtin keyword
    pub fn from_word(s: &str) -> Option<Builtin> {
        match s {
            "ORDENAR" => Some(Builtin::Sort),
            "BUSCAR" => Some(Builtin::Search),
            "RESULTADO" => Some(Builtin::Result),
            _ => None,
        }
    }

    /// The surface spelling of this builtin
    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Sort => "ORDENAR",
            Builtin::Search => "BUSCAR",
            Builtin::Result => "RESULTADO",
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The kind of a token
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Number literal (integer or decimal)
    Number(f64),
    /// Bracketed list literal, captured verbatim and parsed as JSON.
    /// `text` keeps the original span for diagnostics.
    List { elements: Vec<Value>, text: String },
    /// Identifier
    Ident(String),
    /// Builtin keyword
    Keyword(Builtin),

    // Punctuation
    /// `=`
    Assign,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `.`
    Dot,

    /// End of file
    Eof,
}

impl TokenKind {
    /// Check if this is an EOF token
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    /// Get a human-readable description of this token kind
    pub fn description(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "number literal",
            TokenKind::List { .. } => "list literal",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Assign => "'='",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::Dot => "'.'",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", format_number(*n)),
            TokenKind::List { text, .. } => write!(f, "{}", text),
            TokenKind::Ident(s) => write!(f, "{}", s),
            TokenKind::Keyword(kw) => write!(f, "{}", kw),
            _ => write!(f, "{}", self.description()),
        }
    }
}
