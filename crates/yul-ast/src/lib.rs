// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! AST types for Yul.
//!
//! This crate contains the syntax tree produced by `yul-parser`, source
//! span tracking, and a printer that renders a tree back to source.

pub mod ast;
pub mod printer;
pub mod span;

pub use ast::*;
pub use printer::AsmPrinter;
pub use span::{SourceFile, SourceMap, Span};
