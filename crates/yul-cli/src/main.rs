//! yulp - parse a Yul or inline assembly source file
//!
//! Reads one source file, parses it with the selected dialect and prints a
//! summary, the canonical source (`--print`) or the AST as JSON (`--json`).
//! Diagnostics go to stderr with file, line and a caret marker.
//!
//! Exit codes: 0 on success, 1 when the source has errors, 2 when the file
//! cannot be read or the output cannot be produced.

use clap::{Parser as ClapParser, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yul_ast::walk::{walk_block, Node};
use yul_ast::{AsmPrinter, Block, SourceMap, Statement};
use yul_lexer::Scanner;
use yul_parser::{Dialect, ErrorReporter, InstructionTable, Parser, ParserConfig};

#[derive(ClapParser, Debug)]
#[command(name = "yulp")]
#[command(about = "Parse a Yul or inline assembly source file")]
struct Cli {
    /// Path to the source file
    file: PathBuf,

    /// Language flavour to parse
    #[arg(long, value_enum, default_value_t = DialectArg::Yul)]
    dialect: DialectArg,

    /// Print the AST as JSON
    #[arg(long, conflicts_with = "print")]
    json: bool,

    /// Print the parsed source in canonical form
    #[arg(long)]
    print: bool,

    /// Parse only the first block and ignore anything after it
    #[arg(long)]
    reuse_scanner: bool,

    /// Nesting depth at which parsing is abandoned
    #[arg(long, default_value_t = yul_parser::MAX_RECURSION_DEPTH)]
    max_depth: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DialectArg {
    /// Typed Yul without builtins
    Yul,
    /// Untyped inline assembly with EVM instructions as builtins
    Assembly,
}

impl DialectArg {
    fn dialect(self) -> Dialect {
        match self {
            DialectArg::Yul => Dialect::yul(),
            DialectArg::Assembly => Dialect::strict_assembly(&InstructionTable::new()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing failed with {} error(s)", diagnostics.len())]
    Parse { diagnostics: Vec<String> },

    #[error("failed to serialize AST: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Parse { .. } => 1,
            CliError::Io { .. } | CliError::Json(_) => 2,
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yulp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(CliError::Parse { diagnostics }) => {
            for diagnostic in &diagnostics {
                eprintln!("{diagnostic}");
            }
            error!("{} error(s) in {}", diagnostics.len(), cli.file.display());
            std::process::exit(1);
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Parse the file named by `cli` and render the requested output.
fn run(cli: &Cli) -> Result<String, CliError> {
    info!("Parsing {}", cli.file.display());

    let source = std::fs::read_to_string(&cli.file).map_err(|source| CliError::Io {
        path: cli.file.clone(),
        source,
    })?;

    let mut sources = SourceMap::new();
    let source_id = sources.add_file(cli.file.clone(), source.clone());

    let dialect = cli.dialect.dialect();
    let config = ParserConfig {
        max_recursion_depth: cli.max_depth,
    };

    let mut reporter = ErrorReporter::new();
    let mut scanner = Scanner::new(&source, source_id);
    let block =
        Parser::with_config(&mut reporter, &dialect, config).parse(&mut scanner, cli.reuse_scanner);

    let diagnostics: Vec<String> = reporter
        .errors()
        .iter()
        .map(|diagnostic| diagnostic.render(&sources))
        .collect();
    let block = match block {
        Some(block) if diagnostics.is_empty() => block,
        _ => return Err(CliError::Parse { diagnostics }),
    };

    if cli.json {
        return Ok(serde_json::to_string_pretty(&block)?);
    }
    if cli.print {
        return Ok(AsmPrinter::new().block(&block));
    }
    Ok(summary(&block))
}

/// One-line description of what a parsed block contains.
fn summary(block: &Block) -> String {
    let mut statements = 0;
    let mut functions = 0;
    let mut calls = 0;
    walk_block(block, &mut |node| match node {
        Node::Statement(Statement::FunctionDefinition(_)) => {
            statements += 1;
            functions += 1;
        }
        Node::Statement(_) => statements += 1,
        Node::Expression(yul_ast::Expression::FunctionCall(_)) => calls += 1,
        _ => {}
    });
    debug!(statements, functions, calls, "summary");

    format!("ok: {statements} statements, {functions} functions, {calls} calls")
}
