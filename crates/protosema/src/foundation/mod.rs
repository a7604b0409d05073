//! Compiler foundation types
//!
//! These types are used throughout the pipeline and are independent of any
//! particular stage: role-tagged identifiers, qualified names, and source
//! location tracking.

pub mod ident;
pub mod path;
pub mod span;

pub use ident::{
    FieldName, FieldRole, Ident, MethodName, MethodRole, PackageName, PackageRole, Role,
    ServiceName, ServiceRole, TypeName, TypeRole,
};
pub use path::{FullRef, TypePath};
pub use span::{SourceFile, SourceMap, Span};
