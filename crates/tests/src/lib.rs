//! Integration test harness for protosema.
//!
//! This crate provides utilities for end-to-end testing of the full
//! semantic pipeline: Bundle → Validate → Resolve → Lower → Verify.
//!
//! The parser is an external collaborator, so tests build ASTs directly
//! through the constructor helpers here; the harness assembles them into a
//! [`Bundle`] and runs the pipeline.

use protosema::ast::{
    Bundle, Decl, EnumDecl, EnumValue, Field, FieldTag, FieldType, Message, MessageEntry,
    Modifier, OptionDecl, OptionValue, Scalar, SchemaFile,
};
use protosema::foundation::{FieldName, PackageName, Span, TypeName};
use protosema::{Diagnostic, Ir};

/// Test harness assembling a bundle and running the pipeline over it.
pub struct TestHarness {
    bundle: Bundle<()>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            bundle: Bundle::new(),
        }
    }

    /// Add a file to the bundle; addition order is processing order.
    pub fn file(mut self, id: &str, decls: Vec<Decl>) -> Self {
        self.bundle.add_file(id, SchemaFile::new(decls));
        self
    }

    /// Resolve an import literal to a bundle file id.
    pub fn link(mut self, literal: &str, target: &str) -> Self {
        self.bundle.link_import(literal, target);
        self
    }

    /// Run the full pipeline.
    pub fn compile(self) -> Result<Ir, Vec<Diagnostic>> {
        protosema::resolve::pipeline::compile(self.bundle)
    }

    /// Run the full pipeline, panicking on diagnostics.
    pub fn compile_ok(self) -> Ir {
        match self.compile() {
            Ok(ir) => ir,
            Err(diagnostics) => panic!("compilation failed: {:#?}", diagnostics),
        }
    }

    /// The bundle built so far, for tests that drive stages by hand.
    pub fn into_bundle(self) -> Bundle<()> {
        self.bundle
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

fn span() -> Span {
    Span::zero(0)
}

/// `package a.b;`
pub fn package(path: &str) -> Decl {
    Decl::Package(path.split('.').map(PackageName::new).collect(), span())
}

/// `import "other.proto";`
pub fn import(literal: &str) -> Decl {
    Decl::Import(literal.into(), span())
}

/// A top-level message declaration.
pub fn message(name: &str, entries: Vec<MessageEntry>) -> Decl {
    Decl::Message(msg(name, entries))
}

/// A message value, for nesting.
pub fn msg(name: &str, entries: Vec<MessageEntry>) -> Message {
    Message::new(TypeName::new(name), entries, span())
}

/// A nested message entry.
pub fn nested(message: Message) -> MessageEntry {
    MessageEntry::Nested(message)
}

/// A top-level enum declaration.
pub fn enumeration(name: &str, values: &[(&str, i64)]) -> Decl {
    Decl::Enum(enum_decl(name, values))
}

/// An inline enum entry.
pub fn inline_enum(name: &str, values: &[(&str, i64)]) -> MessageEntry {
    MessageEntry::Enum(enum_decl(name, values))
}

fn enum_decl(name: &str, values: &[(&str, i64)]) -> EnumDecl {
    EnumDecl::new(
        TypeName::new(name),
        values
            .iter()
            .map(|(n, v)| EnumValue {
                name: FieldName::new(*n),
                number: *v,
            })
            .collect(),
        span(),
    )
}

pub fn required(ty: FieldType, name: &str, tag: i64) -> MessageEntry {
    field(Modifier::Required, ty, name, tag, vec![])
}

pub fn optional(ty: FieldType, name: &str, tag: i64) -> MessageEntry {
    field(Modifier::Optional, ty, name, tag, vec![])
}

pub fn repeated(ty: FieldType, name: &str, tag: i64) -> MessageEntry {
    field(Modifier::Repeated, ty, name, tag, vec![])
}

/// A field with an explicit option list.
pub fn field(
    modifier: Modifier,
    ty: FieldType,
    name: &str,
    tag: i64,
    options: Vec<OptionDecl>,
) -> MessageEntry {
    MessageEntry::Field(Field {
        modifier,
        ty,
        name: FieldName::new(name),
        tag: FieldTag(tag),
        options,
        span: span(),
    })
}

pub fn scalar(s: Scalar) -> FieldType {
    FieldType::Builtin(s)
}

/// A user-typed reference as written, possibly dotted.
pub fn user(name: &str) -> FieldType {
    FieldType::Unresolved(name.into())
}

pub fn bool_option(name: &str, value: bool) -> OptionDecl {
    OptionDecl {
        name: name.into(),
        value: OptionValue::Bool(value),
        span: span(),
    }
}
