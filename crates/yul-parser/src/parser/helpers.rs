//! Shared helpers: token expectation, fatal reporting and depth guarding.

use super::recursion::RecursionGuard;
use super::token_utils::describe_current;
use super::{FatalError, ParseResult, Parser, TokenSource};
use yul_ast::Span;
use yul_lexer::Token;

impl Parser<'_> {
    /// Record a fatal error at `span` and return the abort marker.
    pub(super) fn fatal(&mut self, span: Span, message: impl Into<String>) -> FatalError {
        self.reporter.parser_error(span, message)
    }

    /// Record a fatal error at the current token.
    pub(super) fn fatal_here(
        &mut self,
        stream: &dyn TokenSource,
        message: impl Into<String>,
    ) -> FatalError {
        self.fatal(stream.current_span(), message)
    }

    /// Require `expected` as the current token and step past it.
    ///
    /// Returns the span of the consumed token.
    pub(super) fn expect_token(
        &mut self,
        stream: &mut dyn TokenSource,
        expected: Token,
    ) -> ParseResult<Span> {
        let span = self.check_token(stream, expected)?;
        stream.advance();
        Ok(span)
    }

    /// Require `expected` as the current token without consuming it.
    pub(super) fn check_token(
        &mut self,
        stream: &dyn TokenSource,
        expected: Token,
    ) -> ParseResult<Span> {
        if stream.current_token() == expected {
            Ok(stream.current_span())
        } else {
            let message = format!("Expected {} but got {}", expected, describe_current(stream));
            Err(self.fatal_here(stream, message))
        }
    }

    /// Take one nesting level, aborting once the configured limit is passed.
    pub(super) fn recursion_guard(
        &mut self,
        stream: &dyn TokenSource,
    ) -> ParseResult<RecursionGuard> {
        let guard = self.depth.enter();
        if guard.depth() > self.config.max_recursion_depth {
            tracing::debug!(depth = guard.depth(), "recursion limit reached");
            return Err(self.fatal_here(stream, "Maximum recursion depth reached during parsing."));
        }
        Ok(guard)
    }
}
