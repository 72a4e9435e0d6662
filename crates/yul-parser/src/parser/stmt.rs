//! Statement dispatch.
//!
//! Keyword-led statements go to their dedicated parsers. Everything else
//! starts with an elementary operation and must turn out to be a call or an
//! assignment.

use super::expr::ElementaryOperation;
use super::{ForLoopComponent, ParseResult, Parser, TokenSource};
use tracing::trace;
use yul_ast::{
    Assignment, Break, Continue, ExpressionStatement, HasSpan, Identifier, If, Leave, Statement,
};
use yul_lexer::Token;

impl Parser<'_> {
    /// Parse one statement.
    pub(super) fn parse_statement(
        &mut self,
        stream: &mut dyn TokenSource,
    ) -> ParseResult<Statement> {
        let _guard = self.recursion_guard(stream)?;
        let token = stream.current_token();
        trace!(?token, depth = self.depth.current(), "statement");

        match token {
            Token::Let => return self.parse_variable_declaration(stream).map(Statement::from),
            Token::Function => return self.parse_function_definition(stream).map(Statement::from),
            Token::LBrace => return self.parse_block(stream).map(Statement::from),
            Token::If => return self.parse_if(stream).map(Statement::from),
            Token::Switch => return self.parse_switch(stream).map(Statement::from),
            Token::For => return self.parse_for_loop(stream).map(Statement::from),
            Token::Break => {
                let span = stream.current_span();
                self.check_break_continue_position("break", stream);
                stream.advance();
                return Ok(Break { span }.into());
            }
            Token::Continue => {
                let span = stream.current_span();
                self.check_break_continue_position("continue", stream);
                stream.advance();
                return Ok(Continue { span }.into());
            }
            Token::Identifier if stream.current_literal() == "leave" => {
                let span = stream.current_span();
                if !self.inside_function {
                    self.reporter.syntax_error(
                        span,
                        "Keyword \"leave\" can only be used inside a function.",
                    );
                }
                stream.advance();
                return Ok(Leave { span }.into());
            }
            _ => {}
        }

        let elementary = self.parse_elementary_operation(stream)?;
        match stream.current_token() {
            Token::LParen => {
                let expression = self.parse_call(stream, elementary)?;
                Ok(ExpressionStatement {
                    span: expression.span(),
                    expression,
                }
                .into())
            }
            Token::Comma | Token::AssemblyAssign => {
                self.parse_assignment(stream, elementary).map(Statement::from)
            }
            _ => Err(self.fatal_here(stream, "Call or assignment expected.")),
        }
    }

    fn parse_if(&mut self, stream: &mut dyn TokenSource) -> ParseResult<If> {
        let start = self.expect_token(stream, Token::If)?;
        let condition = self.parse_expression(stream)?;
        let body = self.parse_block(stream)?;
        Ok(If {
            span: start.with_end(body.span.end),
            condition: Box::new(condition),
            body,
        })
    }

    /// Parse `a [, b ...] := expr` once its first target has been read.
    ///
    /// # Errors
    ///
    /// Fatal when a target is not a plain identifier or names a builtin.
    fn parse_assignment(
        &mut self,
        stream: &mut dyn TokenSource,
        first: ElementaryOperation,
    ) -> ParseResult<Assignment> {
        let mut variable_names = vec![self.assignment_target(stream, first)?];
        while stream.current_token() == Token::Comma {
            stream.advance();
            let next = self.parse_elementary_operation(stream)?;
            variable_names.push(self.assignment_target(stream, next)?);
        }

        self.expect_token(stream, Token::AssemblyAssign)?;
        let value = self.parse_expression(stream)?;

        let start = variable_names
            .first()
            .map_or_else(|| value.span(), |name| name.span);
        Ok(Assignment {
            span: start.with_end(value.span().end),
            variable_names,
            value: Box::new(value),
        })
    }

    fn assignment_target(
        &mut self,
        stream: &dyn TokenSource,
        operation: ElementaryOperation,
    ) -> ParseResult<Identifier> {
        let identifier = match operation {
            ElementaryOperation::Identifier(identifier) => identifier,
            ElementaryOperation::Literal(_) | ElementaryOperation::FunctionCall(_) => {
                let message = if stream.current_token() == Token::Comma {
                    "Variable name must precede \",\" in multiple assignment."
                } else {
                    "Variable name must precede \":=\" in assignment."
                };
                return Err(self.fatal_here(stream, message));
            }
        };

        if self.dialect.is_builtin(&identifier.name) {
            let message = format!("Cannot assign to builtin function \"{}\".", identifier.name);
            return Err(self.fatal_here(stream, message));
        }
        Ok(identifier)
    }

    /// Report `break`/`continue` outside a loop body. Recoverable.
    fn check_break_continue_position(&mut self, keyword: &str, stream: &dyn TokenSource) {
        let message = match self.for_loop_component {
            ForLoopComponent::None => format!("Keyword \"{keyword}\" needs to be inside a for-loop body."),
            ForLoopComponent::Pre => {
                format!("Keyword \"{keyword}\" in for-loop init block is not allowed.")
            }
            ForLoopComponent::Post => {
                format!("Keyword \"{keyword}\" in for-loop post block is not allowed.")
            }
            ForLoopComponent::Body => return,
        };
        self.reporter.syntax_error(stream.current_span(), message);
    }
}

