//! Diagnostics for the schema pipeline.
//!
//! Every pipeline stage reports problems as [`Diagnostic`] values instead of
//! stopping at the first one: a single malformed message must not hide the
//! nine others. Stages accumulate diagnostics in a [`Diagnostics`] region
//! and surface the whole list at the stage boundary.
//!
//! # Design
//!
//! - `Diagnostic` — one problem, with kind, severity, optional span, message
//! - `ErrorKind` — categorizes diagnostics by the stage that detects them
//! - `Diagnostics` — an accumulation region; [`Diagnostics::finish`] yields
//!   the region's value only if nothing was emitted
//! - `DiagnosticFormatter` — renders diagnostics with source snippets
//! - `CompileFailure` — the `std::error::Error` surface of a failed compile
//!
//! Internal invariant violations (an empty identifier, a malformed option
//! shape) are not diagnostics; they panic.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::foundation::{SourceMap, Span};

/// A single pipeline diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Category of the problem.
    pub kind: ErrorKind,
    /// Severity level. This layer only ever emits [`Severity::Error`].
    pub severity: Severity,
    /// Source location, when the parser supplied one.
    pub span: Option<Span>,
    /// Human-readable message.
    pub message: String,
    /// Additional context or suggestions.
    pub notes: Vec<String>,
}

/// Category of diagnostic, by the stage that detects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Duplicate field tag within a message, or duplicate value within an enum.
    DuplicateLabel,
    /// Field tag outside `1..=2^29-1`.
    TagOutOfRange,
    /// Field tag inside the reserved band `19000..=19999`.
    ReservedTag,
    /// More than one package declaration in a file.
    MultiplePackages,
    /// Two declarations share a name within one scope.
    DuplicateName,
    /// An imported file defines a name the importer already has.
    ImportCollision,
    /// A user-typed field reference that no visible scope defines.
    UnresolvedName,
    /// A reference that resolves to a field instead of a type.
    NotAType,
    /// Two declarations lower to the same fully-qualified path.
    DuplicateDeclaration,
}

impl ErrorKind {
    /// Human-readable name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::DuplicateLabel => "duplicate label",
            ErrorKind::TagOutOfRange => "tag out of range",
            ErrorKind::ReservedTag => "reserved tag",
            ErrorKind::MultiplePackages => "multiple packages",
            ErrorKind::DuplicateName => "duplicate name",
            ErrorKind::ImportCollision => "import collision",
            ErrorKind::UnresolvedName => "unresolved name",
            ErrorKind::NotAType => "not a type",
            ErrorKind::DuplicateDeclaration => "duplicate declaration",
        }
    }
}

/// Diagnostic severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Code is valid but suspicious. Not produced by this layer.
    Warning,
    /// Compilation cannot proceed.
    Error,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn error(kind: ErrorKind, span: Option<Span>, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            span,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Adds a note or hint. Chains.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.kind.name(), self.message)
    }
}

/// An accumulation region for diagnostics.
///
/// Fallible operations inside a region emit into it and keep going. On
/// region exit, [`finish`](Diagnostics::finish) yields the region's value
/// only if nothing was emitted; otherwise the full list, in emission order.
/// Regions nest by [`extend`](Diagnostics::extend)ing an inner region's
/// output into the outer one.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Convenience constructor-and-push for an error diagnostic.
    pub fn error(&mut self, kind: ErrorKind, span: Option<Span>, message: impl Into<String>) {
        self.push(Diagnostic::error(kind, span, message));
    }

    /// Forward an inner region's (or a pass's) diagnostics into this region.
    pub fn extend(&mut self, items: impl IntoIterator<Item = Diagnostic>) {
        self.items.extend(items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Exit the region: `value` if clean, the emitted list otherwise.
    pub fn finish<T>(self, value: T) -> Result<T, Vec<Diagnostic>> {
        if self.items.is_empty() {
            Ok(value)
        } else {
            Err(self.items)
        }
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// A failed compilation, as a standard error value.
#[derive(Debug, Error)]
#[error("schema compilation failed with {} diagnostic(s)", .diagnostics.len())]
pub struct CompileFailure {
    /// Every diagnostic the failing stage emitted, in emission order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Formats diagnostics with source context.
///
/// Produces `file:line:col` headers, the offending source line, and a caret
/// underline, plus any notes. Diagnostics without a span render as a bare
/// header line.
pub struct DiagnosticFormatter<'a> {
    sources: &'a SourceMap,
}

impl<'a> DiagnosticFormatter<'a> {
    pub fn new(sources: &'a SourceMap) -> Self {
        Self { sources }
    }

    /// Formats one diagnostic as a string with source context.
    pub fn format(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", diagnostic));

        if let Some(span) = &diagnostic.span {
            let file_path = self.sources.file_path(span);
            let (line, col) = self.sources.line_col(span);
            output.push_str(&format!("  --> {}:{}:{}\n", file_path.display(), line, col));

            let file = self.sources.file(span);
            if let Some(source_line) = file.line_text(line) {
                output.push_str("   |\n");
                output.push_str(&format!("{:3} | {}", line, source_line));
                if !source_line.ends_with('\n') {
                    output.push('\n');
                }

                let start_col = col as usize;
                let span_len = (span.end - span.start) as usize;
                let end_col = (start_col + span_len).min(source_line.len() + 1);
                let underline = " ".repeat(start_col.saturating_sub(1))
                    + &"^".repeat(end_col.saturating_sub(start_col).max(1));
                output.push_str(&format!("   | {}\n", underline));
            }
        }

        for note in &diagnostic.notes {
            output.push_str(&format!("   = note: {}\n", note));
        }

        output
    }

    /// Formats multiple diagnostics, separated by blank lines.
    pub fn format_all(&self, diagnostics: &[Diagnostic]) -> String {
        diagnostics
            .iter()
            .map(|d| self.format(d))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
