//! Line-at-a-time session driver
//!
//! [`Session`] ties the pipeline together for one interactive session: each
//! line gets a fresh [`Parser`], statements on it are evaluated in order
//! against one long-lived [`Evaluator`], and the results come back as
//! [`Outcome`]s. [`render`] turns an outcome into colored terminal output.

pub mod theme;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::interpreter::engine::Evaluator;
use crate::interpreter::errors::EvalError;
use crate::parser::ast::AstNode;
use crate::parser::parse::{ParseError, Parser};
use theme::DEFAULT_THEME;

/// Presentation settings, set from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Print the parsed tree before each result
    pub show_ast: bool,
    /// Print how long each statement took to parse
    pub debug_info: bool,
    /// Emit ANSI colors
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_ast: false,
            debug_info: false,
            color: true,
        }
    }
}

/// Result of processing one statement
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Evaluated {
        statement: AstNode,
        result: Result<f64, EvalError>,
        parse_time: Duration,
    },
    /// Parsing failed; nothing after this point on the line was processed
    SyntaxError(ParseError),
}

#[derive(Debug, Default)]
pub struct Session {
    evaluator: Evaluator,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and evaluate every statement on `line`.
    ///
    /// Evaluation errors are scoped to their statement; a syntax error ends
    /// processing of the line.
    pub fn process_line(&mut self, line: &str) -> Vec<Outcome> {
        let mut parser = match Parser::new(line) {
            Ok(parser) => parser,
            Err(err) => {
                tracing::warn!(
                    line = err.location.line,
                    column = err.location.column,
                    "{}",
                    err.message
                );
                return vec![Outcome::SyntaxError(err)];
            }
        };

        let mut outcomes = Vec::new();
        while !parser.is_at_end() {
            let start = Instant::now();
            match parser.handle_statement() {
                Some(statement) => {
                    let parse_time = start.elapsed();
                    let result = self.evaluator.evaluate(&statement);
                    outcomes.push(Outcome::Evaluated {
                        statement,
                        result,
                        parse_time,
                    });
                }
                None => {
                    if let Some(err) = parser.last_error() {
                        outcomes.push(Outcome::SyntaxError(err.clone()));
                    }
                    break;
                }
            }
        }

        outcomes
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }
}

fn write_line<W: Write>(out: &mut W, config: &Config, color: Color, text: &str) -> io::Result<()> {
    if config.color {
        queue!(out, SetForegroundColor(color), Print(text), ResetColor, Print("\n"))
    } else {
        writeln!(out, "{}", text)
    }
}

/// Write one outcome the way the REPL shows it
pub fn render<W: Write>(out: &mut W, outcome: &Outcome, config: &Config) -> io::Result<()> {
    match outcome {
        Outcome::Evaluated {
            statement,
            result,
            parse_time,
        } => {
            if config.show_ast {
                write_line(out, config, DEFAULT_THEME.secondary, &format!("{:#?}", statement))?;
            }
            if config.debug_info {
                write_line(
                    out,
                    config,
                    DEFAULT_THEME.secondary,
                    &format!("Parsed input in {:?}", parse_time),
                )?;
            }
            match result {
                Ok(value) => write_line(out, config, DEFAULT_THEME.value, &value.to_string()),
                Err(err) => write_line(out, config, DEFAULT_THEME.error, &format!("Error: {}", err)),
            }
        }
        Outcome::SyntaxError(err) => write_line(
            out,
            config,
            DEFAULT_THEME.warning,
            &format!("Invalid syntax, no abstract syntax tree generated: {}", err),
        ),
    }?;
    out.flush()
}

/// Write the input prompt
pub fn render_prompt<W: Write>(out: &mut W, config: &Config) -> io::Result<()> {
    if config.color {
        queue!(out, SetForegroundColor(DEFAULT_THEME.prompt), Print("> "), ResetColor)?;
    } else {
        write!(out, "> ")?;
    }
    out.flush()
}

/// Banner shown when the REPL starts
pub fn render_banner<W: Write>(out: &mut W, config: &Config) -> io::Result<()> {
    write_line(
        out,
        config,
        DEFAULT_THEME.info,
        "kaleido - enter statements to evaluate (Ctrl+D to exit)",
    )
}
