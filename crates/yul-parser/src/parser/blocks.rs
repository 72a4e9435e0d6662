//! Block, switch and for-loop parsers.

use super::expr::ElementaryOperation;
use super::{ForLoopComponent, ParseResult, Parser, TokenSource};
use yul_ast::{Block, Case, ForLoop, HasSpan, Switch};
use yul_lexer::Token;

impl Parser<'_> {
    /// Parse `{ statement* }`.
    ///
    /// The block span runs from the opening to the closing brace.
    pub(super) fn parse_block(&mut self, stream: &mut dyn TokenSource) -> ParseResult<Block> {
        let _guard = self.recursion_guard(stream)?;
        let start = self.expect_token(stream, Token::LBrace)?;

        let mut statements = Vec::new();
        while stream.current_token() != Token::RBrace {
            if stream.current_token() == Token::EndOfStream {
                self.check_token(stream, Token::RBrace)?;
            }
            statements.push(self.parse_statement(stream)?);
        }

        let end = stream.current_span();
        stream.advance();
        Ok(Block {
            span: start.merge(&end),
            statements,
        })
    }

    /// Parse `switch <expr> case* [default]` with the `switch` keyword current.
    ///
    /// # Errors
    ///
    /// Fatal when a second `default` follows, when a `case` follows the
    /// `default`, or when no case was given at all.
    pub(super) fn parse_switch(&mut self, stream: &mut dyn TokenSource) -> ParseResult<Switch> {
        let start = self.expect_token(stream, Token::Switch)?;
        let expression = self.parse_expression(stream)?;

        let mut cases = Vec::new();
        while stream.current_token() == Token::Case {
            cases.push(self.parse_case(stream)?);
        }
        if stream.current_token() == Token::Default {
            cases.push(self.parse_case(stream)?);
        }

        match stream.current_token() {
            Token::Default => return Err(self.fatal_here(stream, "Only one default case allowed.")),
            Token::Case => {
                return Err(self.fatal_here(stream, "Case not allowed after default case."))
            }
            _ => {}
        }

        let Some(last) = cases.last() else {
            return Err(self.fatal_here(stream, "Switch statement without any cases."));
        };
        let span = start.with_end(last.body.span.end);

        Ok(Switch {
            span,
            expression: Box::new(expression),
            cases,
        })
    }

    /// Parse `case <literal> <block>` or `default <block>`.
    fn parse_case(&mut self, stream: &mut dyn TokenSource) -> ParseResult<Case> {
        let _guard = self.recursion_guard(stream)?;
        let start = stream.current_span();

        let value = match stream.current_token() {
            Token::Default => {
                stream.advance();
                None
            }
            Token::Case => {
                stream.advance();
                match self.parse_elementary_operation(stream)? {
                    ElementaryOperation::Literal(literal) => Some(literal),
                    ElementaryOperation::Identifier(_) | ElementaryOperation::FunctionCall(_) => {
                        return Err(self.fatal_here(stream, "Literal expected."));
                    }
                }
            }
            _ => {
                // Callers dispatch on `case`/`default` before getting here.
                self.check_token(stream, Token::Case)?;
                None
            }
        };

        let body = self.parse_block(stream)?;
        Ok(Case {
            span: start.with_end(body.span.end),
            value,
            body,
        })
    }

    /// Parse `for <pre> <condition> <post> <body>`.
    ///
    /// Each component is parsed with its own loop marker; the enclosing
    /// marker is put back afterwards whether or not parsing succeeded.
    pub(super) fn parse_for_loop(&mut self, stream: &mut dyn TokenSource) -> ParseResult<ForLoop> {
        let _guard = self.recursion_guard(stream)?;

        let outer = self.for_loop_component;
        let result = self.parse_for_loop_components(stream);
        self.for_loop_component = outer;
        result
    }

    fn parse_for_loop_components(&mut self, stream: &mut dyn TokenSource) -> ParseResult<ForLoop> {
        let start = self.expect_token(stream, Token::For)?;

        self.for_loop_component = ForLoopComponent::Pre;
        let pre = self.parse_block(stream)?;

        self.for_loop_component = ForLoopComponent::None;
        let condition = self.parse_expression(stream)?;

        self.for_loop_component = ForLoopComponent::Post;
        let post = self.parse_block(stream)?;

        self.for_loop_component = ForLoopComponent::Body;
        let body = self.parse_block(stream)?;

        Ok(ForLoop {
            span: start.with_end(body.span().end),
            pre,
            condition: Box::new(condition),
            post,
            body,
        })
    }
}
