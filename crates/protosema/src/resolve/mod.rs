//! Resolution and validation passes for schema compilation
//!
//! This module implements the semantic phases of the compiler pipeline:
//!
//! ```text
//! Parse → Label Validation → Field Sort → Name Mangling → Package Extraction →
//!             ^^^^^^            ^^^^^        ^^^^^^            ^^^^^^^
//!         resolve/labels    resolve/sort  resolve/mangle   resolve/package
//!
//! → Namespace Construction → Import Resolution → Type-Name Resolution → Lowering
//!         ^^^^^^^^^               ^^^^^^^             ^^^^^^^
//!     resolve/namespace       resolve/imports     resolve/typeref       ir/lower
//! ```
//!
//! # Label Validation (`labels`)
//!
//! Checks field tags and enum values without touching the AST: tags must be
//! in range and outside the reserved band, and unique per message; enum
//! values must be unique per enum.
//!
//! # Field Sort (`sort`)
//!
//! Reorders every message body so fields appear in ascending tag order.
//! Canonical order makes the lowered declaration tree deterministic.
//!
//! # Name Mangling (`mangle`)
//!
//! Normalizes capitalization by role: type names get an upper-case first
//! character, field names a lower-case one. Other roles are untouched.
//!
//! # Package Extraction (`package`)
//!
//! Lifts the file's package declaration into the `package` attribute of the
//! file node. More than one package declaration rejects the file.
//!
//! # Namespace Construction (`namespace`)
//!
//! Builds each file's namespace tree, detects intra-file name collisions,
//! attaches enclosing paths to declarations and wraps the result in the
//! package path.
//!
//! # Import Resolution (`imports`)
//!
//! Merges the namespaces of imported files into each importer and detects
//! cross-file collisions. After this phase every file is self-contained and
//! the bundle envelope is discarded.
//!
//! # Type-Name Resolution (`typeref`)
//!
//! Rewrites every user-typed field reference into a fully-qualified
//! reference, searching candidate scopes from innermost to outermost.
//!
//! # Pipeline Integration
//!
//! [`pipeline::compile`] runs all phases in order. Each phase accumulates
//! diagnostics instead of stopping at the first problem; the pipeline halts
//! at a phase boundary if anything was emitted.

pub mod imports;
pub mod labels;
pub mod mangle;
pub mod namespace;
pub mod package;
pub mod pipeline;
pub mod sort;
pub mod typeref;

pub use namespace::{Entry, Namespace};
pub use pipeline::compile;
