//! Expression parsing.
//!
//! Yul expressions have no operators, so there is no precedence climbing:
//! an expression is an elementary operation, optionally completed into a
//! call by a following argument list.
//!
//! - `atoms`: elementary operations (identifiers, literals, builtin heads)
//! - `call`: argument lists

mod atoms;
mod call;

use super::{ParseResult, Parser, TokenSource};
use yul_ast::{Expression, FunctionCall, Identifier, Literal};
use yul_lexer::Token;

/// Smallest unit the statement and expression parsers dispatch on.
///
/// `FunctionCall` only ever holds a builtin call head with no arguments yet;
/// [`Parser::parse_call`] fills in the argument list.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ElementaryOperation {
    Identifier(Identifier),
    Literal(Literal),
    FunctionCall(FunctionCall),
}

impl Parser<'_> {
    /// Parse a full expression.
    pub(super) fn parse_expression(
        &mut self,
        stream: &mut dyn TokenSource,
    ) -> ParseResult<Expression> {
        let _guard = self.recursion_guard(stream)?;

        let operation = self.parse_elementary_operation(stream)?;
        match operation {
            ElementaryOperation::FunctionCall(_) => self.parse_call(stream, operation),
            _ if stream.current_token() == Token::LParen => self.parse_call(stream, operation),
            ElementaryOperation::Identifier(identifier) => Ok(identifier.into()),
            ElementaryOperation::Literal(literal) => Ok(literal.into()),
        }
    }
}
