//! Statement parsing implementation
//!
//! ```text
//! statement     ::= declaration | function_decl | extern_decl | expression
//! declaration   ::= 'let' identifier ('=' expression)?
//! function_decl ::= 'function' prototype '=>' expression
//! extern_decl   ::= 'extern' prototype
//! prototype     ::= identifier? '(' (identifier (',' identifier)*)? ')'
//! ```

use crate::parser::ast::*;
use crate::parser::lexer::{Keyword, Token};
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a statement without its terminator
    pub(crate) fn parse_statement_body(&mut self) -> Result<AstNode, ParseError> {
        match self.peek_token() {
            Token::Keyword(Keyword::Let, _) => self.parse_variable_declaration(),
            Token::Keyword(Keyword::Function, _) => self.parse_function_declaration(),
            Token::Keyword(Keyword::Extern, _) => self.parse_extern_declaration(),
            _ => self.parse_expression(),
        }
    }

    /// Parse `let name` or `let name = expression`. A missing initializer
    /// defaults to the literal `0`.
    fn parse_variable_declaration(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.current_location();
        self.advance(); // consume 'let'

        let name_loc = self.current_location();
        let name = self.expect_identifier("after 'let'")?;

        let initializer = if self.match_operator("=") {
            self.parse_expression()?
        } else {
            AstNode::NumberLiteral(0.0, name_loc)
        };

        Ok(AstNode::VariableDeclaration {
            name,
            initializer: Box::new(initializer),
            location: loc,
        })
    }

    /// Parse `function prototype => body`
    fn parse_function_declaration(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.current_location();
        self.advance(); // consume 'function'

        let prototype = self.parse_prototype()?;
        self.expect_operator("=>", "Expected '=>' after prototype")?;
        let body = self.parse_expression()?;

        Ok(AstNode::Function {
            prototype,
            body: Box::new(body),
            location: loc,
        })
    }

    /// Parse `extern prototype`
    fn parse_extern_declaration(&mut self) -> Result<AstNode, ParseError> {
        self.advance(); // consume 'extern'
        Ok(AstNode::Prototype(self.parse_prototype()?))
    }

    /// Parse a prototype; the name is optional (anonymous functions)
    pub(crate) fn parse_prototype(&mut self) -> Result<Prototype, ParseError> {
        let loc = self.current_location();

        let name = match self.peek_token() {
            Token::Identifier(name, _) => {
                self.advance();
                name
            }
            _ => String::new(),
        };

        self.expect_operator("(", "Expected '(' in prototype")?;

        let mut params = Vec::new();
        if !self.match_operator(")") {
            loop {
                params.push(self.expect_identifier("in parameter list")?);

                if self.match_operator(")") {
                    break;
                }
                if !self.match_operator(",") {
                    return Err(ParseError::syntax(
                        format!("Expected ',' or ')' in prototype, found {}", self.peek()),
                        self.current_location(),
                    ));
                }
            }
        }

        Ok(Prototype {
            name,
            params,
            location: loc,
        })
    }
}
