//! Elementary operations: identifiers, literals and builtin call heads.

use super::super::token_utils::{is_identifier_like, is_literal_start};
use super::super::{ParseResult, Parser, TokenSource};
use super::ElementaryOperation;
use crate::number::is_valid_number_literal;
use yul_ast::{FunctionCall, Identifier, Literal, LiteralKind, YulString};
use yul_lexer::Token;

impl Parser<'_> {
    /// Parse one elementary operation.
    ///
    /// A builtin name yields a call head with no arguments; the `(` after it
    /// is checked but left for the call parser to consume.
    pub(in crate::parser) fn parse_elementary_operation(
        &mut self,
        stream: &mut dyn TokenSource,
    ) -> ParseResult<ElementaryOperation> {
        let _guard = self.recursion_guard(stream)?;
        let token = stream.current_token();

        if is_identifier_like(token) {
            let identifier = Identifier::new(stream.current_span(), stream.current_literal());
            stream.advance();

            if self.dialect.is_builtin(&identifier.name) {
                self.check_token(stream, Token::LParen)?;
                return Ok(ElementaryOperation::FunctionCall(FunctionCall {
                    span: identifier.span,
                    function_name: identifier,
                    arguments: Vec::new(),
                }));
            }
            return Ok(ElementaryOperation::Identifier(identifier));
        }

        if is_literal_start(token) {
            return self.parse_literal(stream).map(ElementaryOperation::Literal);
        }

        let message = if self.dialect.flavour.is_typed() {
            "Literal or identifier expected."
        } else {
            "Literal, identifier or instruction expected."
        };
        Err(self.fatal_here(stream, message))
    }

    fn parse_literal(&mut self, stream: &mut dyn TokenSource) -> ParseResult<Literal> {
        let kind = match stream.current_token() {
            Token::StringLiteral => LiteralKind::String,
            Token::Number => {
                if !is_valid_number_literal(stream.current_literal()) {
                    return Err(self.fatal_here(stream, "Invalid number literal."));
                }
                LiteralKind::Number
            }
            Token::TrueLiteral | Token::FalseLiteral => {
                if !self.dialect.flavour.is_typed() {
                    return Err(self.fatal_here(stream, "True and false are not valid literals."));
                }
                LiteralKind::Boolean
            }
            _ => {
                self.check_token(stream, Token::Number)?;
                LiteralKind::Number
            }
        };

        let mut literal = Literal {
            span: stream.current_span(),
            kind,
            value: YulString::new(stream.current_literal()),
            ty: None,
        };
        stream.advance();

        if self.dialect.flavour.is_typed() {
            self.expect_token(stream, Token::Colon)?;
            literal.span = literal.span.with_end(stream.current_span().end);
            literal.ty = Some(self.expect_asm_identifier(stream)?);
        }
        Ok(literal)
    }
}
