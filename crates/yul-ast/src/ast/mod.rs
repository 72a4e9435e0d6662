//! Yul syntax tree.
//!
//! The tree is strictly owned: every child lives in a `Box` or `Vec` of its
//! parent, nothing is shared, and nodes are immutable once the parser hands
//! the root back.

mod expression;
mod statement;
pub mod walk;

pub use expression::{Expression, FunctionCall, Identifier, Literal, LiteralKind};
pub use statement::{
    Assignment, Block, Break, Case, Continue, ExpressionStatement, ForLoop, FunctionDefinition,
    If, Leave, Statement, Switch, TypedName, VariableDeclaration,
};

use crate::span::Span;

/// Cheap-to-clone, inline-optimised string used for all names and literal values.
pub type YulString = smol_str::SmolStr;

/// Trait for nodes that have a source span.
pub trait HasSpan {
    /// Returns the source span of this node.
    fn span(&self) -> Span;
}
