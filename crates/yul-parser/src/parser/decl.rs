//! Declaration parsers: `let` and `function`.

use super::{ForLoopComponent, ParseResult, Parser, TokenSource};
use yul_ast::{FunctionDefinition, HasSpan, VariableDeclaration};
use yul_lexer::Token;

impl Parser<'_> {
    /// Parse `let a [, b ...] [:= expr]`.
    ///
    /// Without an initializer the span ends at the last declared name.
    pub(super) fn parse_variable_declaration(
        &mut self,
        stream: &mut dyn TokenSource,
    ) -> ParseResult<VariableDeclaration> {
        let _guard = self.recursion_guard(stream)?;
        let start = self.expect_token(stream, Token::Let)?;

        let mut variables = vec![self.parse_typed_name(stream)?];
        while stream.current_token() == Token::Comma {
            stream.advance();
            variables.push(self.parse_typed_name(stream)?);
        }

        let mut value = None;
        let mut end = variables.last().map_or(start.end, |v| v.span.end);
        if stream.current_token() == Token::AssemblyAssign {
            stream.advance();
            let expression = self.parse_expression(stream)?;
            end = expression.span().end;
            value = Some(Box::new(expression));
        }

        Ok(VariableDeclaration {
            span: start.with_end(end),
            variables,
            value,
        })
    }

    /// Parse `function name(params) [-> returns] { body }`.
    ///
    /// A definition inside a `for` init block is reported but still parsed.
    /// The loop marker is cleared for the definition and the body is parsed
    /// as inside a function; both are put back afterwards.
    pub(super) fn parse_function_definition(
        &mut self,
        stream: &mut dyn TokenSource,
    ) -> ParseResult<FunctionDefinition> {
        let _guard = self.recursion_guard(stream)?;

        if self.for_loop_component == ForLoopComponent::Pre {
            self.reporter.syntax_error(
                stream.current_span(),
                "Functions cannot be defined inside a for-loop init block.",
            );
        }

        let outer = std::mem::take(&mut self.for_loop_component);
        let result = self.parse_function_parts(stream);
        self.for_loop_component = outer;
        result
    }

    fn parse_function_parts(
        &mut self,
        stream: &mut dyn TokenSource,
    ) -> ParseResult<FunctionDefinition> {
        let start = self.expect_token(stream, Token::Function)?;
        let name = self.expect_asm_identifier(stream)?;

        self.expect_token(stream, Token::LParen)?;
        let mut parameters = Vec::new();
        if stream.current_token() != Token::RParen {
            parameters.push(self.parse_typed_name(stream)?);
            while stream.current_token() != Token::RParen {
                self.expect_token(stream, Token::Comma)?;
                parameters.push(self.parse_typed_name(stream)?);
            }
        }
        self.expect_token(stream, Token::RParen)?;

        let mut return_variables = Vec::new();
        if stream.current_token() == Token::Arrow {
            stream.advance();
            return_variables.push(self.parse_typed_name(stream)?);
            while stream.current_token() != Token::LBrace {
                self.expect_token(stream, Token::Comma)?;
                return_variables.push(self.parse_typed_name(stream)?);
            }
        }

        let outer_inside_function = std::mem::replace(&mut self.inside_function, true);
        let body = self.parse_block(stream);
        self.inside_function = outer_inside_function;
        let body = body?;

        Ok(FunctionDefinition {
            span: start.with_end(body.span.end),
            name,
            parameters,
            return_variables,
            body,
        })
    }
}
