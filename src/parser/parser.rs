//! Recursive descent parser for the pseudocode dialect
//!
//! Parses a token stream into an ordered sequence of statements. Uses one
//! token of lookahead beyond the current position. A structural failure
//! aborts the whole parse; there is no partial recovery.

use super::ast::{Expr, Program, Stmt};
use crate::errors::{PseudocError, PseudocResult};
use crate::lexer::{Builtin, Token, TokenKind};

/// The parser for pseudocode token streams
pub struct Parser {
    /// Tokens from the lexer; always terminated by `Eof`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
}

impl Parser {
    /// Create a new parser over a token stream
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the token stream into a program
    pub fn parse(mut self) -> PseudocResult<Program> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if let Some(stmt) = self.parse_statement()? {
                statements.push(stmt);
            }
        }

        Ok(Program { statements })
    }

    // ==================== Helpers ====================

    /// Check if we've reached EOF
    fn is_at_end(&self) -> bool {
        self.peek().kind.is_eof()
    }

    /// Peek at the current token
    fn peek(&self) -> &Token {
        self.tokens
            .get(self.pos)
            .unwrap_or_else(|| self.tokens.last().expect("tokens should have at least EOF"))
    }

    /// Peek at the token after the current one
    fn peek_next(&self) -> &Token {
        self.tokens
            .get(self.pos + 1)
            .unwrap_or_else(|| self.tokens.last().expect("tokens should have at least EOF"))
    }

    /// Advance and return the consumed token
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !token.kind.is_eof() {
            self.pos += 1;
        }
        token
    }

    /// Consume a token if its kind matches, otherwise error with the
    /// expected kind, the found token's text and its source line
    fn expect(&mut self, kind: &TokenKind, msg: &str) -> PseudocResult<Token> {
        if std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind) {
            Ok(self.advance())
        } else {
            let found = self.peek();
            Err(PseudocError::parser(
                format!("{}, found {} on line {}", msg, found.kind, found.line),
                found.span,
            ))
        }
    }

    // ==================== Statements ====================

    /// Parse one statement. Returns `None` for an unrecognized leading
    /// token, which is skipped rather than rejected (deliberate
    /// permissive-skip policy at the top level).
    fn parse_statement(&mut self) -> PseudocResult<Option<Stmt>> {
        match &self.peek().kind {
            TokenKind::Keyword(_) => Ok(Some(self.parse_call()?)),
            TokenKind::Ident(_) if matches!(self.peek_next().kind, TokenKind::Assign) => {
                Ok(Some(self.parse_assignment()?))
            }
            _ => {
                self.advance();
                Ok(None)
            }
        }
    }

    /// Parse a builtin call. The argument list's arity and shape are
    /// fixed per builtin; that is the whole of the grammar's checking.
    fn parse_call(&mut self) -> PseudocResult<Stmt> {
        let keyword = self.advance();
        let line = keyword.line;
        let builtin = match keyword.kind {
            TokenKind::Keyword(b) => b,
            _ => unreachable!("parse_call entered on a non-keyword token"),
        };

        self.expect(
            &TokenKind::LParen,
            &format!("expected '(' after {}", builtin),
        )?;

        let args = match builtin {
            Builtin::Sort => {
                vec![self.parse_expression()?]
            }
            Builtin::Search => {
                let value = self.parse_expression()?;
                self.expect(&TokenKind::Comma, "expected ',' between BUSCAR arguments")?;
                let list = self.parse_expression()?;
                vec![value, list]
            }
            Builtin::Result => {
                vec![self.parse_expression()?]
            }
        };

        self.expect(
            &TokenKind::RParen,
            &format!("expected ')' to close {} call", builtin),
        )?;

        Ok(Stmt::Call {
            builtin,
            args,
            line,
        })
    }

    /// Parse an assignment: `identifier = expression`
    fn parse_assignment(&mut self) -> PseudocResult<Stmt> {
        let ident = self.advance();
        let line = ident.line;
        let name = match ident.kind {
            TokenKind::Ident(name) => name,
            _ => unreachable!("parse_assignment entered on a non-identifier token"),
        };

        self.expect(&TokenKind::Assign, "expected '=' in assignment")?;
        let value = self.parse_expression()?;

        Ok(Stmt::Assign { name, value, line })
    }

    // ==================== Expressions ====================

    /// Parse an expression: exactly an identifier reference, a numeric
    /// literal, or a list literal
    fn parse_expression(&mut self) -> PseudocResult<Expr> {
        let token = self.peek();
        match &token.kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(Expr::Var { name })
            }
            TokenKind::Number(n) => {
                let value = *n;
                self.advance();
                Ok(Expr::Number { value })
            }
            TokenKind::List { elements, .. } => {
                let elements = elements.clone();
                self.advance();
                Ok(Expr::List { elements })
            }
            TokenKind::Eof => Err(PseudocError::parser(
                "expected expression, found end of file".to_string(),
                token.span,
            )),
            other => Err(PseudocError::parser(
                format!(
                    "expected expression, found {} on line {}",
                    other, token.line
                ),
                token.span,
            )),
        }
    }
}
