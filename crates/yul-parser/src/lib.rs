// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Hand-written recursive descent parser for Yul and inline assembly.
//!
//! The parser reads tokens from any [`TokenSource`] (normally a
//! [`yul_lexer::Scanner`]) and builds a [`yul_ast::Block`]. Which names are
//! reserved and whether literals carry types is decided by the [`Dialect`].
//!
//! Recoverable problems are recorded in the [`ErrorReporter`] and parsing
//! goes on; fatal ones abort the parse, which then yields `None`.
//!
//! # Examples
//!
//! ```
//! use yul_parser::{parse_source, Dialect};
//!
//! let block = parse_source("{ let x:u256 := f(1:u256) }", 0, &Dialect::yul()).unwrap();
//! assert_eq!(block.statements.len(), 1);
//! ```

pub mod dialect;
pub mod instructions;
pub mod number;
pub mod parser;

pub use dialect::{AsmFlavour, BuiltinFunction, Dialect};
pub use instructions::{Instruction, InstructionInfo, InstructionTable};
pub use parser::{
    Diagnostic, DiagnosticKind, ErrorReporter, FatalError, ParseResult, Parser, ParserConfig,
    TokenSource, MAX_RECURSION_DEPTH,
};

use yul_ast::Block;
use yul_lexer::Scanner;

/// Parse `source` and return the block together with every diagnostic.
///
/// The block is `None` after a fatal error. Recoverable errors leave a
/// block behind, so check the diagnostics as well.
pub fn parse_with_diagnostics(
    source: &str,
    source_id: u16,
    dialect: &Dialect,
    config: ParserConfig,
) -> (Option<Block>, Vec<Diagnostic>) {
    let mut reporter = ErrorReporter::new();
    let mut scanner = Scanner::new(source, source_id);
    let block = Parser::with_config(&mut reporter, dialect, config).parse(&mut scanner, false);
    (block, reporter.into_errors())
}

/// Parse `source`, failing on any diagnostic, recoverable or not.
pub fn parse_source(
    source: &str,
    source_id: u16,
    dialect: &Dialect,
) -> Result<Block, Vec<Diagnostic>> {
    match parse_with_diagnostics(source, source_id, dialect, ParserConfig::default()) {
        (Some(block), errors) if errors.is_empty() => Ok(block),
        (_, errors) => Err(errors),
    }
}
