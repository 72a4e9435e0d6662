//! Blocks and statements.
//!
//! Every node exclusively owns its children. Spans are filled in by the
//! parser, which back-fills `span.end` once the last child is known.

use super::{Expression, HasSpan, Identifier, Literal, YulString};
use crate::span::Span;
use serde::{Deserialize, Serialize};

/// Brace-delimited sequence of statements. Also the root of every parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub span: Span,
    pub statements: Vec<Statement>,
}

/// A single Yul statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// Nested scope: `{ ... }`
    Block(Block),
    /// `if cond { ... }`
    If(If),
    /// `switch expr case 0 { ... } default { ... }`
    Switch(Switch),
    /// `for { init } cond { post } { body }`
    ForLoop(ForLoop),
    /// `break`
    Break(Break),
    /// `continue`
    Continue(Continue),
    /// `leave`
    Leave(Leave),
    /// Expression evaluated for its effect, in practice always a call.
    Expression(ExpressionStatement),
    /// `let a, b := f()`
    VariableDeclaration(VariableDeclaration),
    /// `function f(a, b) -> r { ... }`
    FunctionDefinition(FunctionDefinition),
    /// `a, b := f()`
    Assignment(Assignment),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct If {
    pub span: Span,
    pub condition: Box<Expression>,
    pub body: Block,
}

/// Multi-way branch.
///
/// The parser guarantees at least one case, and that a default case (one
/// with `value == None`) appears at most once and only in last position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Switch {
    pub span: Span,
    pub expression: Box<Expression>,
    pub cases: Vec<Case>,
}

/// `case <literal> { ... }` or `default { ... }` when `value` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub span: Span,
    pub value: Option<Literal>,
    pub body: Block,
}

/// Loop with four independently scoped components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForLoop {
    pub span: Span,
    pub pre: Block,
    pub condition: Box<Expression>,
    pub post: Block,
    pub body: Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continue {
    pub span: Span,
}

/// Early exit from the enclosing function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leave {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub span: Span,
    pub expression: Expression,
}

/// `let` with one or more names and an optional initializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub span: Span,
    pub variables: Vec<TypedName>,
    pub value: Option<Box<Expression>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub span: Span,
    pub name: YulString,
    pub parameters: Vec<TypedName>,
    pub return_variables: Vec<TypedName>,
    pub body: Block,
}

/// Assignment to one or more existing variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub span: Span,
    pub variable_names: Vec<Identifier>,
    pub value: Box<Expression>,
}

/// Name with an optional `:type` annotation (typed flavour only).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypedName {
    pub span: Span,
    pub name: YulString,
    pub ty: Option<YulString>,
}

impl Case {
    /// Whether this is the `default` branch.
    pub fn is_default(&self) -> bool {
        self.value.is_none()
    }
}

impl HasSpan for Statement {
    fn span(&self) -> Span {
        match self {
            Statement::Block(node) => node.span,
            Statement::If(node) => node.span,
            Statement::Switch(node) => node.span,
            Statement::ForLoop(node) => node.span,
            Statement::Break(node) => node.span,
            Statement::Continue(node) => node.span,
            Statement::Leave(node) => node.span,
            Statement::Expression(node) => node.span,
            Statement::VariableDeclaration(node) => node.span,
            Statement::FunctionDefinition(node) => node.span,
            Statement::Assignment(node) => node.span,
        }
    }
}

macro_rules! impl_has_span {
    ($($node:ty),* $(,)?) => {
        $(
            impl HasSpan for $node {
                fn span(&self) -> Span {
                    self.span
                }
            }
        )*
    };
}

impl_has_span!(
    Block,
    If,
    Switch,
    Case,
    ForLoop,
    Break,
    Continue,
    Leave,
    ExpressionStatement,
    VariableDeclaration,
    FunctionDefinition,
    Assignment,
    TypedName,
);

macro_rules! impl_into_statement {
    ($($variant:ident => $node:ty),* $(,)?) => {
        $(
            impl From<$node> for Statement {
                fn from(node: $node) -> Self {
                    Statement::$variant(node)
                }
            }
        )*
    };
}

impl_into_statement!(
    Block => Block,
    If => If,
    Switch => Switch,
    ForLoop => ForLoop,
    Break => Break,
    Continue => Continue,
    Leave => Leave,
    Expression => ExpressionStatement,
    VariableDeclaration => VariableDeclaration,
    FunctionDefinition => FunctionDefinition,
    Assignment => Assignment,
);
