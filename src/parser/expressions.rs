//! Expression parsing implementation
//!
//! Primaries are parsed by recursive descent; binary operators by precedence
//! climbing over the table in [`BinOp::precedence`].
//!
//! ```text
//! expression      ::= primary binop_rhs
//! primary         ::= identifier_expr | number | '(' expression ')'
//! identifier_expr ::= identifier
//!                   | identifier '(' (expression (',' expression)*)? ')'
//!                   | identifier '=' expression
//! binop_rhs       ::= (operator primary)*
//! ```
//!
//! `=` is not a binary operator. It is only recognized directly after an
//! identifier, and its right-hand side is a whole expression, so
//! `1 + x = 2 + 3` parses as `1 + (x = (2 + 3))`.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser, MAX_NESTING_DEPTH};

/// Precedence reported for tokens that are not binary operators
const NOT_A_BINOP: i32 = -1;

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<AstNode, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::syntax(
                "Expression nested too deeply",
                self.current_location(),
            ));
        }

        self.depth += 1;
        let result = self
            .parse_primary()
            .and_then(|lhs| self.parse_binop_rhs(0, lhs));
        self.depth -= 1;
        result
    }

    /// Binary operator at the cursor, if any
    fn current_binop(&self) -> Option<BinOp> {
        match self.peek() {
            Token::Operator(lexeme, _) => BinOp::from_lexeme(lexeme),
            _ => None,
        }
    }

    fn current_precedence(&self) -> i32 {
        self.current_binop().map_or(NOT_A_BINOP, BinOp::precedence)
    }

    /// Fold `(operator primary)*` onto `lhs`, consuming only operators that
    /// bind at least as tightly as `min_precedence`.
    fn parse_binop_rhs(&mut self, min_precedence: i32, mut lhs: AstNode) -> Result<AstNode, ParseError> {
        loop {
            let precedence = self.current_precedence();
            if precedence < min_precedence {
                return Ok(lhs);
            }
            let Some(op) = self.current_binop() else {
                return Ok(lhs);
            };

            let loc = self.current_location();
            self.advance(); // consume operator

            let mut rhs = self.parse_primary()?;

            // A tighter operator after rhs takes rhs as its left operand
            if precedence < self.current_precedence() {
                rhs = self.parse_binop_rhs(precedence + 1, rhs)?;
            }

            lhs = AstNode::BinaryOp {
                op,
                left: Box::new(lhs),
                right: Box::new(rhs),
                location: loc,
            };
        }
    }

    /// Parse primary expression
    fn parse_primary(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.current_location();

        match self.peek_token() {
            Token::Identifier(name, _) => {
                self.advance();
                self.parse_identifier_expr(name, loc)
            }

            Token::Number(value, _) => {
                self.advance();
                Ok(AstNode::NumberLiteral(value, loc))
            }

            Token::Operator(ref op, _) if op == "(" => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect_operator(")", "Expected ')' after expression")?;
                Ok(expr)
            }

            Token::Operator(op, _) => Err(ParseError::syntax(
                format!("Unexpected operator '{}' when expecting an expression", op),
                loc,
            )),

            other => Err(ParseError::syntax(
                format!("Expected expression, found {}", other),
                loc,
            )),
        }
    }

    /// Parse what follows an identifier that was just consumed: a call, an
    /// assignment, or nothing (a plain reference).
    fn parse_identifier_expr(&mut self, name: String, loc: SourceLocation) -> Result<AstNode, ParseError> {
        if self.match_operator("(") {
            let args = self.parse_argument_list()?;
            return Ok(AstNode::Call {
                callee: name,
                args,
                location: loc,
            });
        }

        if self.match_operator("=") {
            let value = self.parse_expression()?;
            return Ok(AstNode::VariableAssignment {
                name,
                value: Box::new(value),
                location: loc,
            });
        }

        Ok(AstNode::VariableReference(name, loc))
    }

    /// Parse call arguments after the opening '(' up to and including ')'
    fn parse_argument_list(&mut self) -> Result<Vec<AstNode>, ParseError> {
        let mut args = Vec::new();

        if self.match_operator(")") {
            return Ok(args);
        }

        loop {
            args.push(self.parse_expression()?);

            if self.match_operator(")") {
                break;
            }
            if !self.match_operator(",") {
                return Err(ParseError::syntax(
                    format!("Expected ')' or ',' in argument list, found {}", self.peek()),
                    self.current_location(),
                ));
            }
        }

        Ok(args)
    }
}
