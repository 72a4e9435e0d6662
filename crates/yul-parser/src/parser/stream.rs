//! Token source seam between the parser and a scanner.

use yul_ast::Span;
use yul_lexer::{Scanner, Token};

/// Cursor over a token stream with one token of lookahead.
///
/// The parser only ever looks at the current token, so any scanner that
/// can report the token under its cursor and step forward can drive it.
pub trait TokenSource {
    /// Kind of the current token. `Token::EndOfStream` once input is exhausted.
    fn current_token(&self) -> Token;

    /// Text of the current token (unescaped content for string literals).
    fn current_literal(&self) -> &str;

    /// Source span of the current token.
    fn current_span(&self) -> Span;

    /// Step to the next token.
    fn advance(&mut self);

    /// Whether `.` is currently scanned as part of identifiers.
    fn period_in_identifier(&self) -> bool;

    /// Toggle scanning of `.` inside identifiers.
    fn set_period_in_identifier(&mut self, enabled: bool);
}

impl TokenSource for Scanner<'_> {
    fn current_token(&self) -> Token {
        Scanner::current_token(self)
    }

    fn current_literal(&self) -> &str {
        Scanner::current_literal(self)
    }

    fn current_span(&self) -> Span {
        Scanner::current_span(self)
    }

    fn advance(&mut self) {
        Scanner::advance(self);
    }

    fn period_in_identifier(&self) -> bool {
        self.supports_period_in_identifier()
    }

    fn set_period_in_identifier(&mut self, enabled: bool) {
        Scanner::set_period_in_identifier(self, enabled);
    }
}

/// Enables the period mode for its lifetime and restores the previous
/// setting on drop, whichever way the parse ends.
pub(super) struct PeriodModeGuard<'s> {
    stream: &'s mut dyn TokenSource,
    previous: bool,
}

impl<'s> PeriodModeGuard<'s> {
    pub(super) fn enable(stream: &'s mut dyn TokenSource) -> Self {
        let previous = stream.period_in_identifier();
        stream.set_period_in_identifier(true);
        Self { stream, previous }
    }

    pub(super) fn stream(&mut self) -> &mut dyn TokenSource {
        &mut *self.stream
    }
}

impl Drop for PeriodModeGuard<'_> {
    fn drop(&mut self) {
        self.stream.set_period_in_identifier(self.previous);
    }
}
