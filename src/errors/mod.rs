//! Error handling for pseudoc
//!
//! Provides structured error types with source location tracking
//! for helpful diagnostic messages.

mod diagnostic;

use std::ops::Range;
use thiserror::Error;

pub use diagnostic::{format_error, print_error};

/// A span in the source code, represented as a byte range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl SourceSpan {
    /// Create a new source span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Merge two spans into one that covers both
    pub fn merge(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Get the length of this span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl From<Range<usize>> for SourceSpan {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<SourceSpan> for Range<usize> {
    fn from(span: SourceSpan) -> Self {
        span.start..span.end
    }
}

/// The main error type for pseudoc operations
#[derive(Error, Debug)]
pub enum PseudocError {
    #[error("Lexer error: {message}")]
    Lexer { message: String, span: SourceSpan },

    #[error("Parser error: {message}")]
    Parser { message: String, span: SourceSpan },

    #[error("Code generation error: {message}")]
    CodeGen {
        message: String,
        span: Option<SourceSpan>,
    },

    #[error("Execution error: {message}")]
    Execution { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PseudocError {
    /// Get the source span associated with this error, if any
    pub fn span(&self) -> Option<SourceSpan> {
        match self {
            PseudocError::Lexer { span, .. } => Some(*span),
            PseudocError::Parser { span, .. } => Some(*span),
            PseudocError::CodeGen { span, .. } => *span,
            PseudocError::Execution { .. } => None,
            PseudocError::Json(_) => None,
            PseudocError::Io(_) => None,
        }
    }

    /// Create a lexer error
    pub fn lexer(message: impl Into<String>, span: SourceSpan) -> Self {
        PseudocError::Lexer {
            message: message.into(),
            span,
        }
    }

    /// Create a parser error
    pub fn parser(message: impl Into<String>, span: SourceSpan) -> Self {
        PseudocError::Parser {
            message: message.into(),
            span,
        }
    }

    /// Create a code generation error (internal AST contract violation)
    pub fn codegen(message: impl Into<String>, span: Option<SourceSpan>) -> Self {
        PseudocError::CodeGen {
            message: message.into(),
            span,
        }
    }

    /// Create an execution error
    pub fn execution(message: impl Into<String>) -> Self {
        PseudocError::Execution {
            message: message.into(),
        }
    }
}

/// Result type alias for pseudoc operations
pub type PseudocResult<T> = Result<T, PseudocError>;
