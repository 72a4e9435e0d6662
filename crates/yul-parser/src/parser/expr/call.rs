//! Function call argument lists.

use super::super::{ParseResult, Parser, TokenSource};
use super::ElementaryOperation;
use yul_ast::{Expression, FunctionCall};
use yul_lexer::Token;

impl Parser<'_> {
    /// Complete `head` into a call by parsing `( [expr {, expr}] )`.
    ///
    /// The head must be an identifier or a builtin call head; literals
    /// cannot be called. The call span ends at the closing `)`.
    pub(in crate::parser) fn parse_call(
        &mut self,
        stream: &mut dyn TokenSource,
        head: ElementaryOperation,
    ) -> ParseResult<Expression> {
        let _guard = self.recursion_guard(stream)?;

        let mut call = match head {
            ElementaryOperation::Identifier(identifier) => FunctionCall {
                span: identifier.span,
                function_name: identifier,
                arguments: Vec::new(),
            },
            ElementaryOperation::FunctionCall(call) => call,
            ElementaryOperation::Literal(_) => {
                let message = if self.dialect.flavour.is_typed() {
                    "Function name expected."
                } else {
                    "Assembly instruction or function name required in front of \"(\")"
                };
                return Err(self.fatal_here(stream, message));
            }
        };

        self.expect_token(stream, Token::LParen)?;
        if stream.current_token() != Token::RParen {
            call.arguments.push(self.parse_expression(stream)?);
            while stream.current_token() != Token::RParen {
                self.expect_token(stream, Token::Comma)?;
                call.arguments.push(self.parse_expression(stream)?);
            }
        }

        let close = self.expect_token(stream, Token::RParen)?;
        call.span = call.span.with_end(close.end);
        Ok(call.into())
    }
}
