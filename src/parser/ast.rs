// AST (Abstract Syntax Tree) definitions for the expression language

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    // Comparison
    Lt,
    Gt,
    Eq,
}

impl BinOp {
    /// Maps an operator lexeme to its binary operator, if it is one.
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            "<" => Some(BinOp::Lt),
            ">" => Some(BinOp::Gt),
            "==" => Some(BinOp::Eq),
            _ => None,
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> i32 {
        match self {
            BinOp::Mul | BinOp::Div => 40,
            BinOp::Add | BinOp::Sub => 20,
            BinOp::Lt | BinOp::Gt => 10,
            BinOp::Eq => 5,
        }
    }

    pub fn lexeme(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::Eq => "==",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}

/// Discriminant tag of an [`AstNode`], one per node shape (binary nodes are
/// tagged by operator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    LessThan,
    GreaterThan,
    Equal,
    Call,
    Variable,
    Prototype,
    Function,
    Number,
    VariableDeclaration,
    VariableAssignment,
}

/// Function signature: name (empty for anonymous functions) and parameter names
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<String>,
    pub location: SourceLocation,
}

/// AST node types
///
/// Every node owns its children; the tree has no sharing.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    NumberLiteral(f64, SourceLocation),

    VariableReference(String, SourceLocation),

    VariableDeclaration {
        name: String,
        initializer: Box<AstNode>,
        location: SourceLocation,
    },

    VariableAssignment {
        name: String,
        value: Box<AstNode>,
        location: SourceLocation,
    },

    BinaryOp {
        op: BinOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
        location: SourceLocation,
    },

    Call {
        callee: String,
        args: Vec<AstNode>,
        location: SourceLocation,
    },

    Prototype(Prototype),

    Function {
        prototype: Prototype,
        body: Box<AstNode>,
        location: SourceLocation,
    },
}

impl AstNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            AstNode::NumberLiteral(..) => NodeKind::Number,
            AstNode::VariableReference(..) => NodeKind::Variable,
            AstNode::VariableDeclaration { .. } => NodeKind::VariableDeclaration,
            AstNode::VariableAssignment { .. } => NodeKind::VariableAssignment,
            AstNode::BinaryOp { op, .. } => match op {
                BinOp::Add => NodeKind::Add,
                BinOp::Sub => NodeKind::Subtract,
                BinOp::Mul => NodeKind::Multiply,
                BinOp::Div => NodeKind::Divide,
                BinOp::Lt => NodeKind::LessThan,
                BinOp::Gt => NodeKind::GreaterThan,
                BinOp::Eq => NodeKind::Equal,
            },
            AstNode::Call { .. } => NodeKind::Call,
            AstNode::Prototype(_) => NodeKind::Prototype,
            AstNode::Function { .. } => NodeKind::Function,
        }
    }

    pub fn location(&self) -> SourceLocation {
        match self {
            AstNode::NumberLiteral(_, loc) | AstNode::VariableReference(_, loc) => *loc,
            AstNode::VariableDeclaration { location, .. }
            | AstNode::VariableAssignment { location, .. }
            | AstNode::BinaryOp { location, .. }
            | AstNode::Call { location, .. }
            | AstNode::Function { location, .. } => *location,
            AstNode::Prototype(proto) => proto.location,
        }
    }
}
