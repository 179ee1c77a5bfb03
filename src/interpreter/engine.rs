// Evaluation engine for the expression language

use crate::interpreter::errors::EvalError;
use crate::interpreter::ops::apply_binary;
use crate::parser::ast::*;
use rustc_hash::FxHashMap;

/// Variable bindings for one session: name -> current value
pub type Environment = FxHashMap<String, f64>;

/// Tree-walking evaluator over a single flat environment
///
/// The environment persists across [`Evaluator::evaluate`] calls and is only
/// reset by constructing a new evaluator. Not synchronized; keep one per
/// session.
#[derive(Debug, Default)]
pub struct Evaluator {
    environment: Environment,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate a statement or expression to its numeric value
    pub fn evaluate(&mut self, node: &AstNode) -> Result<f64, EvalError> {
        tracing::trace!(kind = ?node.kind(), "evaluate");

        match node {
            AstNode::NumberLiteral(value, _) => Ok(*value),

            AstNode::VariableReference(name, location) => self.lookup(name, *location),

            AstNode::VariableDeclaration {
                name,
                initializer,
                location,
            } => {
                // The initializer runs before the name exists, so `let x = x`
                // fails on the reference.
                let value = self.evaluate(initializer)?;

                if self.environment.contains_key(name) {
                    return Err(EvalError::DuplicateDeclaration {
                        name: name.clone(),
                        location: *location,
                    });
                }

                tracing::debug!(%name, value, "declare");
                self.environment.insert(name.clone(), value);
                Ok(value)
            }

            AstNode::VariableAssignment {
                name,
                value,
                location,
            } => {
                if !self.environment.contains_key(name) {
                    return Err(EvalError::UndefinedVariable {
                        name: name.clone(),
                        location: *location,
                    });
                }

                let value = self.evaluate(value)?;

                tracing::debug!(%name, value, "assign");
                self.environment.insert(name.clone(), value);
                Ok(value)
            }

            AstNode::BinaryOp {
                op, left, right, ..
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Ok(apply_binary(*op, left, right))
            }

            AstNode::Call {
                callee, location, ..
            } => Err(EvalError::NotImplemented {
                construct: format!("Call to '{}'", callee),
                location: *location,
            }),

            AstNode::Prototype(proto) => Err(EvalError::NotImplemented {
                construct: format!("Prototype '{}'", proto.name),
                location: proto.location,
            }),

            AstNode::Function {
                prototype,
                location,
                ..
            } => Err(EvalError::NotImplemented {
                construct: if prototype.name.is_empty() {
                    "Anonymous function".to_string()
                } else {
                    format!("Function '{}'", prototype.name)
                },
                location: *location,
            }),
        }
    }

    fn lookup(&self, name: &str, location: SourceLocation) -> Result<f64, EvalError> {
        self.environment
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UndefinedVariable {
                name: name.to_string(),
                location,
            })
    }

    /// Current value of `name`, if declared
    pub fn get(&self, name: &str) -> Option<f64> {
        self.environment.get(name).copied()
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::Parser;

    fn run(evaluator: &mut Evaluator, source: &str) -> Result<f64, EvalError> {
        let node = Parser::new(source).unwrap().parse_statement().unwrap();
        evaluator.evaluate(&node)
    }

    fn eval(source: &str) -> Result<f64, EvalError> {
        run(&mut Evaluator::new(), source)
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval("2 * 3"), Ok(6.0));
        assert_eq!(eval("1 + 2 * 3"), Ok(7.0));
        assert_eq!(eval("1 * 2 + 3"), Ok(5.0));
        assert_eq!(eval("(1 + 2) * 3"), Ok(9.0));
        assert_eq!(eval("1 / 0"), Ok(f64::INFINITY));
    }

    #[test]
    fn test_declaration_returns_value() {
        let mut evaluator = Evaluator::new();
        assert_eq!(run(&mut evaluator, "let x = 1 + 1"), Ok(2.0));
        assert_eq!(evaluator.get("x"), Some(2.0));
    }

    #[test]
    fn test_declaration_default_zero() {
        let mut evaluator = Evaluator::new();
        assert_eq!(run(&mut evaluator, "let x"), Ok(0.0));
        assert_eq!(run(&mut evaluator, "x"), Ok(0.0));
    }

    #[test]
    fn test_duplicate_declaration() {
        let mut evaluator = Evaluator::new();
        run(&mut evaluator, "let x = 1").unwrap();

        let err = run(&mut evaluator, "let x = 2").unwrap_err();
        assert!(matches!(err, EvalError::DuplicateDeclaration { ref name, .. } if name == "x"));
        assert_eq!(evaluator.get("x"), Some(1.0));
    }

    #[test]
    fn test_self_referential_declaration() {
        let mut evaluator = Evaluator::new();
        let err = run(&mut evaluator, "let x = x").unwrap_err();
        assert!(matches!(err, EvalError::UndefinedVariable { ref name, .. } if name == "x"));
        assert!(evaluator.environment().is_empty());
    }

    #[test]
    fn test_initializer_error_wins_over_duplicate() {
        let mut evaluator = Evaluator::new();
        run(&mut evaluator, "let x").unwrap();
        let err = run(&mut evaluator, "let x = y").unwrap_err();
        assert!(matches!(err, EvalError::UndefinedVariable { ref name, .. } if name == "y"));
    }

    #[test]
    fn test_failed_declaration_keeps_inner_assignment() {
        let mut evaluator = Evaluator::new();
        run(&mut evaluator, "let y = 1").unwrap();

        let err = run(&mut evaluator, "let y = (y = 5)").unwrap_err();
        assert!(matches!(err, EvalError::DuplicateDeclaration { ref name, .. } if name == "y"));
        assert_eq!(evaluator.get("y"), Some(5.0));
    }

    #[test]
    fn test_assignment() {
        let mut evaluator = Evaluator::new();
        run(&mut evaluator, "let x = 1").unwrap();
        assert_eq!(run(&mut evaluator, "x = 2"), Ok(2.0));
        assert_eq!(run(&mut evaluator, "x = x + x"), Ok(4.0));
        assert_eq!(evaluator.get("x"), Some(4.0));
    }

    #[test]
    fn test_assignment_to_undeclared() {
        let mut evaluator = Evaluator::new();
        let err = run(&mut evaluator, "y = 1").unwrap_err();
        assert!(matches!(err, EvalError::UndefinedVariable { ref name, .. } if name == "y"));
        assert!(evaluator.get("y").is_none());
    }

    #[test]
    fn test_undefined_reference() {
        let err = eval("y").unwrap_err();
        assert_eq!(
            err,
            EvalError::UndefinedVariable {
                name: "y".to_string(),
                location: SourceLocation::new(1, 1),
            }
        );
    }

    #[test]
    fn test_both_operands_evaluated() {
        let mut evaluator = Evaluator::new();
        run(&mut evaluator, "let a").unwrap();
        run(&mut evaluator, "let b").unwrap();
        assert_eq!(run(&mut evaluator, "(a = 1) < (b = 2)"), Ok(1.0));
        assert_eq!(evaluator.get("a"), Some(1.0));
        assert_eq!(evaluator.get("b"), Some(2.0));
    }

    #[test]
    fn test_functions_are_not_evaluated() {
        let mut evaluator = Evaluator::new();
        for source in ["f(1)", "function f(x) => x", "function (x) => x", "extern g()"] {
            let err = run(&mut evaluator, source).unwrap_err();
            assert!(matches!(err, EvalError::NotImplemented { .. }), "{}", source);
        }
        assert!(evaluator.environment().is_empty());
    }
}
