//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the statement entry point.
//!
//! # Parser Architecture
//!
//! - This module: Parser struct, helper methods, and [`Parser::handle_statement`]
//! - `statements`: `let`, `function` and `extern` statements and prototypes
//! - `expressions`: primaries and precedence climbing over binary operators
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.

use crate::parser::ast::*;
use crate::parser::lexer::{LexError, LexErrorKind, Token};
use crate::parser::token_buffer::TokenBuffer;
use thiserror::Error;

/// Deepest expression nesting accepted before a statement is rejected
pub const MAX_NESTING_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Grammar violation: unexpected token, unmatched delimiter, bad argument list
    Syntax,
    /// A number literal that is not a valid float
    NumericFormat,
}

/// Parser error type
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Parse error at {location}: {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub location: SourceLocation,
}

impl ParseError {
    pub(crate) fn syntax(message: impl Into<String>, location: SourceLocation) -> Self {
        ParseError {
            kind: ParseErrorKind::Syntax,
            message: message.into(),
            location,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let kind = match err.kind {
            LexErrorKind::NumericFormat => ParseErrorKind::NumericFormat,
        };
        ParseError {
            kind,
            message: err.message,
            location: err.location,
        }
    }
}

/// Recursive descent parser over one line of tokens
pub struct Parser {
    pub(crate) tokens: TokenBuffer,
    diagnostics: Vec<ParseError>,
    pub(crate) depth: usize,
}

impl Parser {
    /// Tokenize `source` eagerly and build a parser over it.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let tokens = TokenBuffer::new(source)?;
        Ok(Self::from_buffer(tokens))
    }

    pub fn from_buffer(tokens: TokenBuffer) -> Self {
        Self {
            tokens,
            diagnostics: Vec::new(),
            depth: 0,
        }
    }

    /// Parse the next statement.
    ///
    /// On a syntax error the diagnostic is logged and kept (see
    /// [`Parser::diagnostics`]), the rest of the line is discarded, and `None`
    /// is returned.
    pub fn handle_statement(&mut self) -> Option<AstNode> {
        match self.parse_statement() {
            Ok(node) => Some(node),
            Err(err) => {
                tracing::warn!(
                    line = err.location.line,
                    column = err.location.column,
                    "{}",
                    err.message
                );
                self.diagnostics.push(err);
                self.tokens.discard_remaining();
                None
            }
        }
    }

    /// Parse one statement and its optional `;` terminator.
    pub fn parse_statement(&mut self) -> Result<AstNode, ParseError> {
        self.depth = 0;
        let statement = self.parse_statement_body()?;

        if !self.match_operator(";") && !self.is_at_end() {
            return Err(ParseError::syntax(
                format!("Expected ';' or end of input after statement, found {}", self.peek()),
                self.current_location(),
            ));
        }

        Ok(statement)
    }

    /// Parse every statement left on the line, stopping at the first error.
    pub fn parse_all(&mut self) -> Result<Vec<AstNode>, ParseError> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    /// Diagnostics recorded by [`Parser::handle_statement`], oldest first
    pub fn diagnostics(&self) -> &[ParseError] {
        &self.diagnostics
    }

    pub fn last_error(&self) -> Option<&ParseError> {
        self.diagnostics.last()
    }

    // ===== Helper methods =====

    pub fn is_at_end(&self) -> bool {
        self.tokens.is_at_end()
    }

    pub(crate) fn peek(&self) -> &Token {
        self.tokens.current()
    }

    pub(crate) fn peek_token(&self) -> Token {
        self.tokens.current().clone()
    }

    pub(crate) fn advance(&mut self) -> &Token {
        self.tokens.read()
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    pub(crate) fn check_operator(&self, lexeme: &str) -> bool {
        self.peek().is_operator(lexeme)
    }

    pub(crate) fn match_operator(&mut self, lexeme: &str) -> bool {
        if self.check_operator(lexeme) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect_operator(&mut self, lexeme: &str, message: &str) -> Result<(), ParseError> {
        if self.match_operator(lexeme) {
            Ok(())
        } else {
            Err(ParseError::syntax(
                format!("{}, found {}", message, self.peek()),
                self.current_location(),
            ))
        }
    }

    pub(crate) fn expect_identifier(&mut self, ctx: &str) -> Result<String, ParseError> {
        if let Token::Identifier(name, _) = self.peek_token() {
            self.advance();
            Ok(name)
        } else {
            Err(ParseError::syntax(
                format!("Expected identifier {}, found {}", ctx, self.peek()),
                self.current_location(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn loc(column: usize) -> SourceLocation {
        SourceLocation::new(1, column)
    }

    #[test]
    fn test_handle_statement_success() {
        let mut parser = Parser::new("1 + 2").unwrap();
        let node = parser.handle_statement().unwrap();

        assert_eq!(
            node,
            AstNode::BinaryOp {
                op: BinOp::Add,
                left: Box::new(AstNode::NumberLiteral(1.0, loc(1))),
                right: Box::new(AstNode::NumberLiteral(2.0, loc(5))),
                location: loc(3),
            }
        );
        assert!(parser.is_at_end());
        assert!(parser.diagnostics().is_empty());
    }

    #[test]
    fn test_handle_statement_failure_discards_line() {
        let mut parser = Parser::new("(1 + 2; 3").unwrap();

        assert!(parser.handle_statement().is_none());
        assert!(parser.is_at_end());

        let err = parser.last_error().unwrap();
        assert_eq!(err.kind, ParseErrorKind::Syntax);
        assert!(err.message.contains("Expected ')'"), "{}", err.message);
        assert_eq!(err.location, loc(7));
    }

    #[test]
    fn test_statement_terminator() {
        let mut parser = Parser::new("1; 2;").unwrap();
        let statements = parser.parse_all().unwrap();
        assert_eq!(statements.len(), 2);
    }

    #[test]
    fn test_trailing_token_is_error() {
        let mut parser = Parser::new("1 2").unwrap();
        let err = parser.parse_statement().unwrap_err();
        assert!(err.message.contains("Expected ';' or end of input"), "{}", err.message);
        assert_eq!(err.location, loc(3));
    }

    #[test]
    fn test_numeric_format_error() {
        let err = Parser::new("let x = 1.2.3").err().unwrap();
        assert_eq!(err.kind, ParseErrorKind::NumericFormat);
        assert_eq!(err.location, loc(9));
    }

    #[test]
    fn test_deep_nesting_is_rejected() {
        let n = 5000;
        let source = format!("{}1{}", "(".repeat(n), ")".repeat(n));
        let mut parser = Parser::new(&source).unwrap();

        assert!(parser.handle_statement().is_none());
        assert!(parser.is_at_end());
        let err = parser.last_error().unwrap();
        assert_eq!(err.kind, ParseErrorKind::Syntax);
        assert!(err.message.contains("nested too deeply"), "{}", err.message);
    }

    #[test]
    fn test_long_assignment_chain_is_rejected() {
        let source = "x = ".repeat(5000) + "1";
        let mut parser = Parser::new(&source).unwrap();
        assert!(parser.handle_statement().is_none());
        assert_eq!(parser.last_error().unwrap().kind, ParseErrorKind::Syntax);
    }

    #[test]
    fn test_nesting_within_limit() {
        let n = MAX_NESTING_DEPTH - 1;
        let source = format!("{}1{}; 2", "(".repeat(n), ")".repeat(n));
        let mut parser = Parser::new(&source).unwrap();

        assert_eq!(parser.handle_statement(), Some(AstNode::NumberLiteral(1.0, loc(n + 1))));
        assert_eq!(parser.handle_statement(), Some(AstNode::NumberLiteral(2.0, loc(2 * n + 4))));
    }

    #[test]
    fn test_failure_is_logged() {
        let (buf, writer) = capture();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer)
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut parser = Parser::new("(1 + 2").unwrap();
            assert!(parser.handle_statement().is_none());
        });

        let logged = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("WARN"), "{}", logged);
        assert!(logged.contains("Expected ')' after expression"), "{}", logged);
        assert!(logged.contains("column=7"), "{}", logged);
    }

    type Captured = std::sync::Arc<std::sync::Mutex<Vec<u8>>>;

    struct CaptureWriter(Captured);

    impl std::io::Write for CaptureWriter {
        fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture() -> (Captured, impl Fn() -> CaptureWriter + Send + Sync + 'static) {
        let buf = Captured::default();
        let sink = buf.clone();
        (buf, move || CaptureWriter(sink.clone()))
    }

    #[test]
    fn test_empty_line_is_error() {
        let mut parser = Parser::new("").unwrap();
        assert!(parser.handle_statement().is_none());
        assert_eq!(parser.diagnostics().len(), 1);
    }
}
