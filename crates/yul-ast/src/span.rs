//! Source location tracking for AST nodes and diagnostics.
//!
//! # Design
//!
//! - `Span`: compact byte range into one source (10 bytes)
//! - `SourceMap`: owns all sources and turns spans into paths and lines
//! - `SourceFile`: single source with line indexing
//!
//! # Examples
//!
//! ```
//! # use yul_ast::span::*;
//! # use std::path::PathBuf;
//! let mut map = SourceMap::new();
//! let source_id = map.add_file(PathBuf::from("test.yul"), "{ let x := 1 }\n{ }".to_string());
//! let span = Span::new(source_id, 2, 12);
//!
//! assert_eq!(map.file_path(&span).to_str(), Some("test.yul"));
//! assert_eq!(map.line_col(&Span::new(source_id, 17, 18)), (2, 3));
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Byte range in a source, `end` exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Index into `SourceMap` files
    pub source_id: u16,
    /// Byte offset of the first character
    pub start: u32,
    /// Byte offset one past the last character
    pub end: u32,
}

/// Collection of all sources seen by one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceMap {
    files: Vec<SourceFile>,
}

/// A single source with line indexing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path the source was read from (or a label such as `<stdin>`)
    pub path: PathBuf,
    /// Original source text
    pub source: String,
    /// Byte offsets of each line start, followed by an EOF sentinel.
    pub line_starts: Vec<u32>,
}

impl Span {
    /// Create a new span.
    pub fn new(source_id: u16, start: u32, end: u32) -> Self {
        Self {
            source_id,
            start,
            end,
        }
    }

    /// Zero-length span at the start of a source.
    pub fn zero(source_id: u16) -> Self {
        Self::new(source_id, 0, 0)
    }

    /// Span covering both `self` and `other`.
    ///
    /// Panics if spans are from different sources.
    pub fn merge(&self, other: &Span) -> Span {
        assert_eq!(
            self.source_id, other.source_id,
            "cannot merge spans from different sources"
        );
        Span {
            source_id: self.source_id,
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Copy of this span with `end` replaced.
    pub fn with_end(self, end: u32) -> Span {
        Span { end, ..self }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}:{}..{}", self.source_id, self.start, self.end)
    }
}

impl SourceMap {
    /// Create an empty source map.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a source and return its ID.
    pub fn add_file(&mut self, path: PathBuf, source: String) -> u16 {
        let source_id = self.files.len();
        assert!(source_id < u16::MAX as usize, "too many source files");
        self.files.push(SourceFile::new(path, source));
        source_id as u16
    }

    /// Source file a span points into.
    pub fn file(&self, span: &Span) -> &SourceFile {
        &self.files[span.source_id as usize]
    }

    /// Path of the source a span points into.
    pub fn file_path(&self, span: &Span) -> &Path {
        &self.file(span).path
    }

    /// 1-based (line, column) of a span's start.
    pub fn line_col(&self, span: &Span) -> (u32, u32) {
        self.file(span).line_col(span.start)
    }
}

impl SourceFile {
    /// Create a new source file with precomputed line starts.
    pub fn new(path: PathBuf, source: String) -> Self {
        let line_starts = compute_line_starts(&source);
        Self {
            path,
            source,
            line_starts,
        }
    }

    /// 1-based (line, column) for a byte offset.
    ///
    /// # Panics
    /// Panics if offset is beyond EOF.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        assert!(
            offset <= self.source.len() as u32,
            "offset {} is beyond EOF (len = {})",
            offset,
            self.source.len()
        );

        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx.max(1) - 1,
        };
        // The EOF sentinel of a source ending in '\n' is not a line of its own.
        let line_idx = line_idx.min(self.line_count().saturating_sub(1));

        let line = (line_idx + 1) as u32;
        let col = (offset - self.line_starts[line_idx]) + 1;

        (line, col)
    }

    /// Byte range of a 1-based line, newline included.
    pub fn line_range(&self, line: u32) -> Option<(u32, u32)> {
        if line == 0 || line as usize >= self.line_starts.len() {
            return None;
        }

        let line_idx = (line - 1) as usize;
        Some((self.line_starts[line_idx], self.line_starts[line_idx + 1]))
    }

    /// Text of a 1-based line, newline included.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let (start, end) = self.line_range(line)?;
        Some(&self.source[start as usize..end as usize])
    }

    /// Number of lines in this file.
    pub fn line_count(&self) -> usize {
        self.line_starts.len() - 1
    }
}

/// Byte offsets of line starts plus an EOF sentinel.
fn compute_line_starts(source: &str) -> Vec<u32> {
    let mut line_starts = vec![0];

    for (idx, ch) in source.char_indices() {
        if ch == '\n' {
            line_starts.push((idx + 1) as u32);
        }
    }

    if line_starts.last() != Some(&(source.len() as u32)) || line_starts.len() == 1 {
        line_starts.push(source.len() as u32);
    }

    line_starts
}
