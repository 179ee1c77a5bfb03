//! Eager token sequence for one line of input
//!
//! The whole line is lexed up front so the parser can look ahead any number of
//! tokens without re-lexing. The sequence always ends with exactly one
//! [`Token::EndOfFile`], and the cursor never moves past it.

use super::ast::SourceLocation;
use super::lexer::{LexError, Lexer, Token};

#[derive(Debug, Clone)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenBuffer {
    /// Tokenize `source` completely.
    pub fn new(source: &str) -> Result<Self, LexError> {
        let tokens = Lexer::new(source).tokenize()?;
        Ok(Self { tokens, cursor: 0 })
    }

    /// Token at the cursor
    pub fn current(&self) -> &Token {
        &self.tokens[self.cursor]
    }

    /// Returns the current token and moves past it. Reading `EndOfFile` leaves
    /// the cursor where it is.
    pub fn read(&mut self) -> &Token {
        let index = self.cursor;
        if !self.is_at_end() {
            self.cursor += 1;
        }
        &self.tokens[index]
    }

    /// Token `offset` positions ahead of the cursor, or `None` past the end.
    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.cursor.checked_add(offset).and_then(|i| self.tokens.get(i))
    }

    pub fn is_at_end(&self) -> bool {
        matches!(self.current(), Token::EndOfFile(_))
    }

    /// Moves the cursor onto `EndOfFile`, dropping the rest of the line.
    pub fn discard_remaining(&mut self) {
        self.cursor = self.tokens.len() - 1;
    }

    /// Number of tokens, `EndOfFile` included, so never zero
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl From<Vec<Token>> for TokenBuffer {
    /// Wraps an already lexed sequence, appending `EndOfFile` if missing.
    fn from(mut tokens: Vec<Token>) -> Self {
        match tokens.iter().position(|t| matches!(t, Token::EndOfFile(_))) {
            Some(end) => tokens.truncate(end + 1),
            None => {
                let loc = tokens
                    .last()
                    .map(Token::location)
                    .unwrap_or_else(|| SourceLocation::new(1, 1));
                tokens.push(Token::EndOfFile(loc));
            }
        }
        Self { tokens, cursor: 0 }
    }
}
