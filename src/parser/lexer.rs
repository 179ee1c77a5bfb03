//! Lexer (tokenizer) for source lines
//!
//! Converts raw source text into [`Token`]s one at a time through
//! [`Lexer::next_token`]. `#` comments run to the end of the line and are
//! skipped entirely, so a comment-only input yields nothing but
//! [`Token::EndOfFile`].
//!
//! Operators are single characters, except `==` and `=>`, which are merged
//! here so the parser only ever sees whole lexemes.

use super::ast::SourceLocation;
use std::fmt;
use thiserror::Error;

/// Reserved words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Let,
    Function,
    Extern,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Let => "let",
            Keyword::Function => "function",
            Keyword::Extern => "extern",
        }
    }
}

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate line and column without a separate token→location table.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    EndOfFile(SourceLocation),
    Identifier(String, SourceLocation),
    Number(f64, SourceLocation),
    Operator(String, SourceLocation),
    Keyword(Keyword, SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::EndOfFile(loc)
            | Token::Identifier(_, loc)
            | Token::Number(_, loc)
            | Token::Operator(_, loc)
            | Token::Keyword(_, loc) => *loc,
        }
    }

    /// True if this is the operator token with exactly this lexeme.
    pub fn is_operator(&self, lexeme: &str) -> bool {
        matches!(self, Token::Operator(op, _) if op == lexeme)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::EndOfFile(_) => write!(f, "end of input"),
            Token::Identifier(s, _) => write!(f, "identifier '{}'", s),
            Token::Number(n, _) => write!(f, "number {}", n),
            Token::Operator(op, _) => write!(f, "operator '{}'", op),
            Token::Keyword(kw, _) => write!(f, "keyword '{}'", kw.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Digits and decimal points that do not form a valid float
    NumericFormat,
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Lexer error at {location}: {message}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub message: String,
    pub location: SourceLocation,
}

/// Lexer over a single source string
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input, `EndOfFile` included.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let done = matches!(token, Token::EndOfFile(_));
            tokens.push(token);
            if done {
                break;
            }
        }

        Ok(tokens)
    }

    /// Get the next token. Returns `EndOfFile` once the input is exhausted,
    /// and keeps returning it on further calls.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia();

        let loc = self.current_location();
        let Some(ch) = self.advance() else {
            return Ok(Token::EndOfFile(loc));
        };

        match ch {
            c if c.is_alphabetic() || c == '_' => Ok(self.identifier_or_keyword(c, loc)),

            c if c.is_ascii_digit() => self.number_literal(c, loc),

            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::Operator("==".to_string(), loc))
                } else if self.peek() == Some('>') {
                    self.advance();
                    Ok(Token::Operator("=>".to_string(), loc))
                } else {
                    Ok(Token::Operator("=".to_string(), loc))
                }
            }

            other => Ok(Token::Operator(other.to_string(), loc)),
        }
    }

    /// Parse numeric literal: digits with any number of '.', validated by the
    /// float parser.
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Result<Token, LexError> {
        let mut num_str = String::new();
        num_str.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() || ch == '.' {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let value = num_str.parse::<f64>().map_err(|_| LexError {
            kind: LexErrorKind::NumericFormat,
            message: format!("Invalid number literal: {}", num_str),
            location: loc,
        })?;

        Ok(Token::Number(value, loc))
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match ident.as_str() {
            "let" => Token::Keyword(Keyword::Let, loc),
            "function" => Token::Keyword(Keyword::Function, loc),
            "extern" => Token::Keyword(Keyword::Extern, loc),
            _ => Token::Identifier(ident, loc),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Skip any run of whitespace and `#` comments
    fn skip_trivia(&mut self) {
        loop {
            self.skip_whitespace();
            if self.peek() != Some('#') {
                break;
            }
            self.skip_line_comment();
        }
    }

    /// Skip a `#` comment, line terminator included
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.advance() {
            if ch == '\n' || ch == '\r' {
                break;
            }
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}
