//! AST walking utilities.
//!
//! Provides one shared pre-order traversal so passes that inspect the tree
//! (span checks, statistics, the CLI summary) don't each re-implement the
//! recursion.
//!
//! # Design
//!
//! - **Minimal API** - `walk_block` and `walk_expression`, not a trait hierarchy
//! - **Visitor pattern** - caller provides `FnMut(Node<'_>)`
//! - **Pre-order traversal** - visitor called before recursing into children
//!
//! # Examples
//!
//! ```rust,ignore
//! use yul_ast::walk::{walk_block, Node};
//!
//! let mut calls = 0;
//! walk_block(&block, &mut |node| {
//!     if let Node::Expression(Expression::FunctionCall(_)) = node {
//!         calls += 1;
//!     }
//! });
//! ```

use super::{Block, Case, Expression, HasSpan, Statement, TypedName};
use crate::span::Span;

/// A borrowed view of any node the walker visits.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Block(&'a Block),
    Statement(&'a Statement),
    Case(&'a Case),
    Expression(&'a Expression),
    TypedName(&'a TypedName),
}

impl HasSpan for Node<'_> {
    fn span(&self) -> Span {
        match self {
            Node::Block(node) => node.span,
            Node::Statement(node) => node.span(),
            Node::Case(node) => node.span,
            Node::Expression(node) => node.span(),
            Node::TypedName(node) => node.span,
        }
    }
}

/// Walk a block and everything below it in pre-order.
pub fn walk_block<'a, V>(block: &'a Block, visitor: &mut V)
where
    V: FnMut(Node<'a>),
{
    visitor(Node::Block(block));
    for statement in &block.statements {
        walk_statement(statement, visitor);
    }
}

/// Walk a statement and everything below it in pre-order.
pub fn walk_statement<'a, V>(statement: &'a Statement, visitor: &mut V)
where
    V: FnMut(Node<'a>),
{
    visitor(Node::Statement(statement));

    match statement {
        Statement::Block(block) => walk_block(block, visitor),
        Statement::If(node) => {
            walk_expression(&node.condition, visitor);
            walk_block(&node.body, visitor);
        }
        Statement::Switch(node) => {
            walk_expression(&node.expression, visitor);
            for case in &node.cases {
                visitor(Node::Case(case));
                walk_block(&case.body, visitor);
            }
        }
        Statement::ForLoop(node) => {
            walk_block(&node.pre, visitor);
            walk_expression(&node.condition, visitor);
            walk_block(&node.post, visitor);
            walk_block(&node.body, visitor);
        }
        Statement::Expression(node) => walk_expression(&node.expression, visitor),
        Statement::VariableDeclaration(node) => {
            for variable in &node.variables {
                visitor(Node::TypedName(variable));
            }
            if let Some(value) = &node.value {
                walk_expression(value, visitor);
            }
        }
        Statement::FunctionDefinition(node) => {
            for name in node.parameters.iter().chain(&node.return_variables) {
                visitor(Node::TypedName(name));
            }
            walk_block(&node.body, visitor);
        }
        Statement::Assignment(node) => walk_expression(&node.value, visitor),

        // Leaf statements
        Statement::Break(_) | Statement::Continue(_) | Statement::Leave(_) => {}
    }
}

/// Walk an expression tree in pre-order.
pub fn walk_expression<'a, V>(expression: &'a Expression, visitor: &mut V)
where
    V: FnMut(Node<'a>),
{
    visitor(Node::Expression(expression));

    if let Expression::FunctionCall(call) = expression {
        for argument in &call.arguments {
            walk_expression(argument, visitor);
        }
    }
}
