//! Schema AST.
//!
//! The parsed form of a `.proto` schema, as handed over by the parser:
//! files of top-level declarations, messages with nested declarations,
//! enums, services and options. The pipeline consumes and refines this
//! tree; it never builds one from source text.
//!
//! A [`SchemaFile`] is generic over a per-stage annotation payload: files
//! enter the pipeline as `SchemaFile<()>` and leave namespace construction
//! as `SchemaFile<Namespace>`.

pub mod bundle;
pub mod file;
pub mod message;
pub mod walk;

pub use bundle::{Bundle, FileId};
pub use file::{Decl, Method, SchemaFile, Service};
pub use message::{
    EnumDecl, EnumValue, Field, FieldTag, FieldType, Message, MessageEntry, Modifier, OptionDecl,
    OptionValue, Scalar,
};
