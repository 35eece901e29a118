//! Hand-written lexer/scanner for the pseudocode dialect
//!
//! Converts source code into a stream of tokens. Lexing is a single
//! left-to-right scan with one character of lookahead (two for comment
//! detection). Any unrecognized character is a fatal error.

use super::token::{Builtin, Token, TokenKind};
use crate::errors::{PseudocError, PseudocResult, SourceSpan};
use crate::value::Value;

/// The lexer for pseudocode source
pub struct Lexer<'src> {
    /// The source code being lexed
    source: &'src str,
    /// Current byte position in the source
    pos: usize,
    /// Start position of the current token
    start: usize,
    /// 1-based line of the current position
    line: u32,
    /// 1-based column of the current position
    column: u32,
    /// Line/column where the current token started
    token_line: u32,
    token_column: u32,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            start: 0,
            line: 1,
            column: 1,
            token_line: 1,
            token_column: 1,
        }
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Peek at the next character (one ahead of current)
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advance to the next character and return it
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Check if we've reached the end of the source
    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Get the current span (from start to current position)
    fn current_span(&self) -> SourceSpan {
        SourceSpan::new(self.start, self.pos)
    }

    /// Get the current lexeme (text from start to current position)
    fn current_lexeme(&self) -> &'src str {
        &self.source[self.start..self.pos]
    }

    /// Create a token with the current span
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.current_span(), self.token_line, self.token_column)
    }

    /// Skip whitespace and line comments
    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_next() == Some('/') => {
                    // Line comment: discard up to (not including) the newline
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    /// Scan a number literal: digits with at most one decimal point.
    /// The first character (a digit, or a point followed by a digit) has
    /// already been consumed.
    fn scan_number(&mut self, first: char) -> PseudocResult<Token> {
        let mut seen_point = first == '.';

        loop {
            match self.peek() {
                Some(c) if c.is_ascii_digit() => {
                    self.advance();
                }
                Some('.') if !seen_point && self.peek_next().is_some_and(|d| d.is_ascii_digit()) => {
                    seen_point = true;
                    self.advance();
                }
                _ => break,
            }
        }

        let text = self.current_lexeme();
        match text.parse::<f64>() {
            Ok(n) => Ok(self.make_token(TokenKind::Number(n))),
            Err(_) => Err(PseudocError::lexer(
                format!("invalid number literal '{}'", text),
                self.current_span(),
            )),
        }
    }

    /// Scan a bracketed list literal. The opening `[` has already been
    /// consumed. The whole balanced span is captured verbatim and parsed
    /// as a JSON array.
    fn scan_list(&mut self) -> PseudocResult<Token> {
        let open_line = self.token_line;
        let mut depth = 1;

        while depth > 0 {
            match self.advance() {
                Some('[') => depth += 1,
                Some(']') => depth -= 1,
                Some(_) => {}
                None => {
                    return Err(PseudocError::lexer(
                        format!("list opened at line {} is never closed", open_line),
                        self.current_span(),
                    ));
                }
            }
        }

        let text = self.current_lexeme().to_string();
        let parsed: serde_json::Value = serde_json::from_str(&text).map_err(|_| {
            PseudocError::lexer(
                format!("malformed list literal on line {}: {}", open_line, text),
                self.current_span(),
            )
        })?;

        match Value::from(parsed) {
            Value::List(elements) => Ok(self.make_token(TokenKind::List { elements, text })),
            _ => Err(PseudocError::lexer(
                format!("malformed list literal on line {}: {}", open_line, text),
                self.current_span(),
            )),
        }
    }

    /// Scan an identifier or keyword. Letters (including accented Latin
    /// letters), digits and underscores are admitted after the first
    /// character.
    fn scan_identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let text = self.current_lexeme();

        if let Some(builtin) = Builtin::from_word(text) {
            self.make_token(TokenKind::Keyword(builtin))
        } else {
            self.make_token(TokenKind::Ident(text.to_string()))
        }
    }

    /// Scan the next token
    pub fn next_token(&mut self) -> PseudocResult<Token> {
        self.skip_whitespace();
        self.start = self.pos;
        self.token_line = self.line;
        self.token_column = self.column;

        if self.is_at_end() {
            return Ok(self.make_token(TokenKind::Eof));
        }

        let c = self.advance().expect("not at end");

        // Identifiers and keywords
        if c.is_alphabetic() || c == '_' {
            return Ok(self.scan_identifier());
        }

        // Numbers; a leading point counts when followed by a digit
        if c.is_ascii_digit() || (c == '.' && self.peek().is_some_and(|d| d.is_ascii_digit())) {
            return self.scan_number(c);
        }

        // List literals capture the whole balanced span
        if c == '[' {
            return self.scan_list();
        }

        // Punctuation
        match c {
            '=' => Ok(self.make_token(TokenKind::Assign)),
            '(' => Ok(self.make_token(TokenKind::LParen)),
            ')' => Ok(self.make_token(TokenKind::RParen)),
            ']' => Ok(self.make_token(TokenKind::RBracket)),
            ',' => Ok(self.make_token(TokenKind::Comma)),
            '.' => Ok(self.make_token(TokenKind::Dot)),
            _ => Err(PseudocError::lexer(
                format!(
                    "unrecognized character '{}' on line {}",
                    c, self.token_line
                ),
                self.current_span(),
            )),
        }
    }

    /// Collect all tokens into a vector. The final token is always `Eof`,
    /// even for empty input.
    pub fn tokenize(mut self) -> PseudocResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.kind.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .expect("lexing should succeed")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn lex_err(source: &str) -> PseudocError {
        Lexer::new(source).tokenize().expect_err("lexing should fail")
    }

    #[test]
    fn test_punctuation() {
        let tokens = lex("= ( ) ] , .");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Assign,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::RBracket,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        let tokens = lex("42 3.5 .25 7");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Number(42.0),
                TokenKind::Number(3.5),
                TokenKind::Number(0.25),
                TokenKind::Number(7.0),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_decimal_point_not_consumed_twice() {
        let tokens = lex("1.2.3");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Number(1.2),
                TokenKind::Number(0.3),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let tokens = lex("ORDENAR BUSCAR RESULTADO mi_lista ordenar año");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Keyword(Builtin::Sort),
                TokenKind::Keyword(Builtin::Search),
                TokenKind::Keyword(Builtin::Result),
                TokenKind::Ident("mi_lista".to_string()),
                TokenKind::Ident("ordenar".to_string()),
                TokenKind::Ident("año".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_list_literal() {
        let tokens = lex("[3, 1, 2]");
        match &tokens[0] {
            TokenKind::List { elements, text } => {
                assert_eq!(text, "[3, 1, 2]");
                assert_eq!(elements.len(), 3);
                assert_eq!(elements[0], Value::Number(3.0));
            }
            other => panic!("expected list token, got {:?}", other),
        }
        assert_eq!(tokens[1], TokenKind::Eof);
    }

    #[test]
    fn test_nested_list_balances_depth() {
        let tokens = lex("[[1, 2], [3]]");
        match &tokens[0] {
            TokenKind::List { elements, .. } => assert_eq!(elements.len(), 2),
            other => panic!("expected list token, got {:?}", other),
        }
    }

    #[test]
    fn test_unclosed_list() {
        let err = lex_err("ORDENAR([1, 2");
        assert!(err.to_string().contains("never closed"), "{}", err);
        assert!(err.to_string().contains("line 1"), "{}", err);
    }

    #[test]
    fn test_malformed_list() {
        let err = lex_err("[1, oops]");
        assert!(err.to_string().contains("malformed list"), "{}", err);
    }

    #[test]
    fn test_unrecognized_character() {
        let err = lex_err("lista = $");
        assert!(err.to_string().contains("unrecognized character"), "{}", err);
    }

    #[test]
    fn test_comments_are_skipped() {
        let tokens = lex("a // this is ignored\nb");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Ident("a".to_string()),
                TokenKind::Ident("b".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_line_counting_across_comments() {
        let tokens = Lexer::new("a // comment\nb\nc")
            .tokenize()
            .expect("lexing should succeed");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[2].line, 3);
    }

    #[test]
    fn test_columns_are_one_based() {
        let tokens = Lexer::new("x = 5").tokenize().expect("lexing should succeed");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (1, 3));
        assert_eq!((tokens[2].line, tokens[2].column), (1, 5));
    }

    #[test]
    fn test_eof_always_present() {
        let tokens = lex("");
        assert_eq!(tokens, vec![TokenKind::Eof]);

        let tokens = lex("lista = [1]");
        assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        assert!(tokens.last().expect("non-empty").is_eof());
    }

    #[test]
    fn test_sample_program() {
        let tokens = lex("mi_lista = [5, 2, 8]\nORDENAR(mi_lista)\nBUSCAR(8, mi_lista)");
        assert!(matches!(tokens[0], TokenKind::Ident(_)));
        assert!(matches!(tokens[1], TokenKind::Assign));
        assert!(matches!(tokens[2], TokenKind::List { .. }));
        assert!(matches!(tokens[3], TokenKind::Keyword(Builtin::Sort)));
        assert!(matches!(tokens.last(), Some(TokenKind::Eof)));
    }
}
