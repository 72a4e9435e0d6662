//! Expressions: function calls, identifiers and literals.

use super::{HasSpan, YulString};
use crate::span::Span;
use serde::{Deserialize, Serialize};

/// A Yul expression.
///
/// Yul has no operators; everything that computes a value is a call,
/// a variable reference or a literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// `f(a, b)` or a builtin such as `add(1, 2)`
    FunctionCall(FunctionCall),
    /// Variable reference
    Identifier(Identifier),
    /// Number, string or boolean literal
    Literal(Literal),
}

/// Call of a user-defined or builtin function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Source location, from the callee name to the closing `)`
    pub span: Span,
    /// Callee
    pub function_name: Identifier,
    /// Arguments in source order
    pub arguments: Vec<Expression>,
}

/// A name occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub span: Span,
    pub name: YulString,
}

/// Lexical category of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiteralKind {
    Number,
    String,
    Boolean,
}

/// A literal value.
///
/// `value` holds the raw text for numbers and booleans and the unescaped
/// contents for strings. `ty` is only present in the typed Yul flavour,
/// where every literal carries a `:type` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub span: Span,
    pub kind: LiteralKind,
    pub value: YulString,
    pub ty: Option<YulString>,
}

impl Identifier {
    pub fn new(span: Span, name: impl Into<YulString>) -> Self {
        Self {
            span,
            name: name.into(),
        }
    }
}

impl From<FunctionCall> for Expression {
    fn from(call: FunctionCall) -> Self {
        Expression::FunctionCall(call)
    }
}

impl From<Identifier> for Expression {
    fn from(identifier: Identifier) -> Self {
        Expression::Identifier(identifier)
    }
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Expression::Literal(literal)
    }
}

impl HasSpan for Expression {
    fn span(&self) -> Span {
        match self {
            Expression::FunctionCall(call) => call.span,
            Expression::Identifier(identifier) => identifier.span,
            Expression::Literal(literal) => literal.span,
        }
    }
}

impl HasSpan for FunctionCall {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for Identifier {
    fn span(&self) -> Span {
        self.span
    }
}

impl HasSpan for Literal {
    fn span(&self) -> Span {
        self.span
    }
}
