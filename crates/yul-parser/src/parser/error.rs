//! Diagnostics and the error reporter.
//!
//! Two severities exist. A syntax error is recorded and parsing carries on,
//! still producing the offending node. A parser error is recorded and the
//! parse is abandoned: the reporting routine returns [`FatalError`], which
//! travels up through `?` to [`Parser::parse`](super::Parser::parse).

use std::fmt;
use yul_ast::{SourceMap, Span};

/// Marker returned once a fatal diagnostic has been recorded.
///
/// Carries no data; the message lives in the [`ErrorReporter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("fatal parser error")]
pub struct FatalError;

/// Result type of every grammar routine.
pub type ParseResult<T> = Result<T, FatalError>;

/// A recorded problem with source location.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
    /// Severity of the problem
    pub kind: DiagnosticKind,
    /// Source location where the problem was detected
    pub span: Span,
    /// Human-readable message
    pub message: String,
}

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum DiagnosticKind {
    /// Structural rule violation; parsing continued and the node was kept.
    ///
    /// Example: `break` outside a for-loop body.
    SyntaxError,

    /// Grammar violation that aborted the parse.
    ///
    /// Example: `switch x` with no cases, or a malformed number literal.
    ParserError,
}

impl DiagnosticKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::SyntaxError => "SyntaxError",
            DiagnosticKind::ParserError => "ParserError",
        }
    }
}

impl Diagnostic {
    /// Whether this diagnostic aborted the parse.
    pub fn is_fatal(&self) -> bool {
        self.kind == DiagnosticKind::ParserError
    }

    /// Render the diagnostic with file, line and a caret marker.
    ///
    /// ```text
    /// test.yul:3:5: ParserError: Call or assignment expected.
    ///     x y
    ///       ^
    /// ```
    pub fn render(&self, sources: &SourceMap) -> String {
        let file = sources.file(&self.span);
        let (line, column) = sources.line_col(&self.span);
        let mut out = format!(
            "{}:{}:{}: {}",
            sources.file_path(&self.span).display(),
            line,
            column,
            self
        );
        if let Some(text) = file.line_text(line) {
            let text = text.trim_end_matches(['\n', '\r']);
            let line_end = file.line_range(line).map_or(self.span.end, |(_, end)| end);
            let width = (self.span.end.min(line_end).saturating_sub(self.span.start)).max(1);
            out.push('\n');
            out.push_str(text);
            out.push('\n');
            out.push_str(&" ".repeat(column as usize - 1));
            out.push_str(&"^".repeat(width as usize));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.message)
    }
}

/// Collects diagnostics for one or more parses.
#[derive(Debug, Clone, Default)]
pub struct ErrorReporter {
    errors: Vec<Diagnostic>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a recoverable error.
    pub fn syntax_error(&mut self, span: Span, message: impl Into<String>) {
        self.push(DiagnosticKind::SyntaxError, span, message.into());
    }

    /// Record a fatal error and hand back the abort marker.
    pub fn parser_error(&mut self, span: Span, message: impl Into<String>) -> FatalError {
        self.push(DiagnosticKind::ParserError, span, message.into());
        FatalError
    }

    fn push(&mut self, kind: DiagnosticKind, span: Span, message: String) {
        tracing::trace!(kind = kind.as_str(), %span, %message, "diagnostic");
        self.errors.push(Diagnostic {
            kind,
            span,
            message,
        });
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<Diagnostic> {
        self.errors
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parser_error_returns_marker_and_records() {
        let mut reporter = ErrorReporter::new();
        let fatal = reporter.parser_error(Span::new(0, 1, 2), "Literal expected.");
        assert_eq!(fatal, FatalError);
        assert_eq!(reporter.errors().len(), 1);
        assert!(reporter.errors()[0].is_fatal());
    }

    #[test]
    fn test_display() {
        let mut reporter = ErrorReporter::new();
        reporter.syntax_error(Span::zero(0), "Keyword \"break\" needs to be inside a for-loop body.");
        assert_eq!(
            reporter.errors()[0].to_string(),
            "SyntaxError: Keyword \"break\" needs to be inside a for-loop body."
        );
    }

    #[test]
    fn test_render_points_at_span() {
        let mut sources = SourceMap::new();
        let id = sources.add_file(PathBuf::from("test.yul"), "{\n  x y\n}\n".to_string());
        let diagnostic = Diagnostic {
            kind: DiagnosticKind::ParserError,
            span: Span::new(id, 6, 7),
            message: "Call or assignment expected.".to_string(),
        };

        assert_eq!(
            diagnostic.render(&sources),
            "test.yul:2:5: ParserError: Call or assignment expected.\n  x y\n    ^"
        );
    }
}
