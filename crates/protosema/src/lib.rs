//! # protosema
//!
//! Semantic core of a protocol-buffer schema compiler.
//!
//! The crate takes a bundle of parsed `.proto` ASTs and turns it into a
//! fully-resolved, target-neutral declaration tree. Lexing, parsing, code
//! emission and all I/O live in external collaborators; this crate is the
//! pipeline between them:
//!
//! ```text
//! parser → Bundle<()> ──[ validate → sort → mangle → package →
//!     namespace → imports → type resolution → lowering ]──→ Ir → backend
//! ```
//!
//! Each phase aggregates diagnostics rather than stopping at the first
//! problem; the pipeline halts at a phase boundary if anything was emitted.
//! The whole pipeline is synchronous and deterministic: identical input
//! produces identical output, diagnostics included.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use protosema::ast::Bundle;
//!
//! let mut bundle = Bundle::new();
//! bundle.add_file("color.proto", parsed_file);
//!
//! let ir = protosema::compile(bundle)?;
//! for (path, module) in ir.modules() {
//!     // hand each declaration to the backend
//! }
//! ```

pub mod ast;
pub mod error;
pub mod foundation;
pub mod ir;
pub mod resolve;

pub use ast::{Bundle, SchemaFile};
pub use error::{CompileFailure, Diagnostic, DiagnosticFormatter, Diagnostics, ErrorKind, Severity};
pub use foundation::{FullRef, SourceMap, Span, TypePath};
pub use ir::{deserialize_ir, serialize_ir, Ir, IrField, IrInner, IrModule, IrShape};
pub use resolve::{Entry, Namespace};

/// Compiles a parsed bundle into the target-neutral declaration tree.
///
/// Thin wrapper over [`resolve::pipeline::compile`] that packages the
/// diagnostics of a failed run as a standard error value.
pub fn compile(bundle: Bundle<()>) -> Result<Ir, CompileFailure> {
    resolve::pipeline::compile(bundle).map_err(|diagnostics| CompileFailure { diagnostics })
}

/// Renders diagnostics with source snippets.
pub fn format_diagnostics(sources: &SourceMap, diagnostics: &[Diagnostic]) -> String {
    DiagnosticFormatter::new(sources).format_all(diagnostics)
}

/// Compiler version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
