//! Typed names and identifier expectation.

use super::token_utils::is_identifier_like;
use super::{ParseResult, Parser, TokenSource};
use yul_ast::{TypedName, YulString};
use yul_lexer::Token;

impl Parser<'_> {
    /// Parse `name` or, in the typed flavour, `name:type`.
    ///
    /// In the typed flavour the span extends over the type name.
    pub(super) fn parse_typed_name(
        &mut self,
        stream: &mut dyn TokenSource,
    ) -> ParseResult<TypedName> {
        let _guard = self.recursion_guard(stream)?;

        let mut span = stream.current_span();
        let name = self.expect_asm_identifier(stream)?;

        let mut ty = None;
        if self.dialect.flavour.is_typed() {
            self.expect_token(stream, Token::Colon)?;
            span = span.with_end(stream.current_span().end);
            ty = Some(self.expect_asm_identifier(stream)?);
        }

        Ok(TypedName { span, name, ty })
    }

    /// Consume an identifier-like token that does not name a builtin.
    ///
    /// # Errors
    ///
    /// Fatal when the current token cannot serve as a name, or when the
    /// name is reserved by the dialect.
    pub(super) fn expect_asm_identifier(
        &mut self,
        stream: &mut dyn TokenSource,
    ) -> ParseResult<YulString> {
        if !is_identifier_like(stream.current_token()) {
            self.check_token(stream, Token::Identifier)?;
        }

        let name = YulString::new(stream.current_literal());
        if self.dialect.is_builtin(&name) {
            let message = format!("Cannot use builtin function name \"{name}\" as identifier name.");
            return Err(self.fatal_here(stream, message));
        }

        stream.advance();
        Ok(name)
    }
}
