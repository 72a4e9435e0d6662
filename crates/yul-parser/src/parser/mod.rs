//! Hand-written recursive descent parser for Yul.
//!
//! ## Architecture
//!
//! - `stream`: `TokenSource` seam and the period-mode guard
//! - `error`: diagnostics, `ErrorReporter` and the `FatalError` marker
//! - `recursion`: depth guard shared by all recursive routines
//! - `blocks`: blocks, `switch` cases and `for` loops
//! - `stmt`: statement dispatch, assignments, `break`/`continue`/`leave`
//! - `decl`: variable declarations and function definitions
//! - `types`: typed names and identifier expectation
//! - `expr`: elementary operations, expressions and calls
//!
//! ## Context-sensitive state
//!
//! Besides the token stream, the parser tracks which part of a `for` loop
//! it is in and whether it is inside a function body. Both are saved on
//! entry to the construct that changes them and restored on exit, on the
//! error path too.

mod blocks;
mod decl;
pub mod error;
mod expr;
mod helpers;
mod recursion;
mod stmt;
mod stream;
pub mod token_utils;
mod types;

pub use error::{Diagnostic, DiagnosticKind, ErrorReporter, FatalError, ParseResult};
pub use recursion::MAX_RECURSION_DEPTH;
pub use stream::TokenSource;

use crate::dialect::Dialect;
use recursion::RecursionDepth;
use stream::PeriodModeGuard;
use tracing::{debug, error, instrument};
use yul_ast::Block;
use yul_lexer::Token;

/// Tunables of a parser instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParserConfig {
    /// Nesting depth at which parsing aborts with a fatal error.
    pub max_recursion_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: MAX_RECURSION_DEPTH,
        }
    }
}

/// Which component of a `for` loop is being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ForLoopComponent {
    /// Not directly inside any loop component.
    #[default]
    None,
    /// The init block.
    Pre,
    /// The post block.
    Post,
    /// The body.
    Body,
}

/// Yul parser.
///
/// Diagnostics go to the borrowed [`ErrorReporter`]; builtin names and the
/// flavour come from the borrowed [`Dialect`].
pub struct Parser<'a> {
    reporter: &'a mut ErrorReporter,
    dialect: &'a Dialect,
    config: ParserConfig,
    depth: RecursionDepth,
    for_loop_component: ForLoopComponent,
    inside_function: bool,
}

impl<'a> Parser<'a> {
    pub fn new(reporter: &'a mut ErrorReporter, dialect: &'a Dialect) -> Self {
        Self::with_config(reporter, dialect, ParserConfig::default())
    }

    pub fn with_config(
        reporter: &'a mut ErrorReporter,
        dialect: &'a Dialect,
        config: ParserConfig,
    ) -> Self {
        Self {
            reporter,
            dialect,
            config,
            depth: RecursionDepth::default(),
            for_loop_component: ForLoopComponent::None,
            inside_function: false,
        }
    }

    pub fn dialect(&self) -> &Dialect {
        self.dialect
    }

    /// Parse one block from `stream`.
    ///
    /// The period-in-identifier mode is on for the duration of the call and
    /// put back afterwards. Unless `reuse_scanner` is set, the block must be
    /// followed by the end of the stream.
    ///
    /// # Returns
    ///
    /// - `Some(block)` when no fatal error occurred; recoverable errors may
    ///   still have been reported
    /// - `None` after a fatal error, in which case the reporter holds at
    ///   least one diagnostic
    #[instrument(skip_all, name = "yul_parse", fields(flavour = ?self.dialect.flavour))]
    pub fn parse(&mut self, stream: &mut dyn TokenSource, reuse_scanner: bool) -> Option<Block> {
        self.depth.reset();
        self.for_loop_component = ForLoopComponent::None;
        self.inside_function = false;

        let result = {
            let mut guard = PeriodModeGuard::enable(stream);
            self.parse_root(guard.stream(), reuse_scanner)
        };

        match result {
            Ok(block) => {
                debug!(
                    statements = block.statements.len(),
                    errors = self.reporter.errors().len(),
                    "parse complete"
                );
                Some(block)
            }
            Err(FatalError) => {
                if !self.reporter.has_errors() {
                    error!("fatal parse error without diagnostic");
                }
                debug_assert!(
                    self.reporter.has_errors(),
                    "Fatal error detected, but no error is reported."
                );
                debug!(errors = self.reporter.errors().len(), "parse aborted");
                None
            }
        }
    }

    fn parse_root(&mut self, stream: &mut dyn TokenSource, reuse_scanner: bool) -> ParseResult<Block> {
        let block = self.parse_block(stream)?;
        if !reuse_scanner {
            self.expect_token(stream, Token::EndOfStream)?;
        }
        Ok(block)
    }
}
