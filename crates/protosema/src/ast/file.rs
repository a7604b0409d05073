//! Schema files and top-level declarations.

use serde::{Deserialize, Serialize};

use super::message::{EnumDecl, Message, OptionDecl};
use crate::foundation::{MethodName, PackageName, ServiceName, Span, TypePath};

/// One parsed schema file, generic over a per-stage annotation payload.
///
/// Files enter the pipeline as `SchemaFile<()>`. Package extraction fills
/// `package`; namespace construction swaps the annotation for the file's
/// namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaFile<A> {
    pub decls: Vec<Decl>,
    /// The file's package path; empty until package extraction.
    pub package: TypePath,
    pub annotation: A,
}

impl SchemaFile<()> {
    /// A fresh file as the parser hands it over.
    pub fn new(decls: Vec<Decl>) -> Self {
        Self {
            decls,
            package: TypePath::root(),
            annotation: (),
        }
    }
}

impl<A> SchemaFile<A> {
    /// Replace the annotation payload, keeping declarations and package.
    pub fn with_annotation<B>(self, annotation: B) -> SchemaFile<B> {
        SchemaFile {
            decls: self.decls,
            package: self.package,
            annotation,
        }
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decl {
    /// `package a.b.c;` — components as written.
    Package(Vec<PackageName>, Span),
    /// `import "other.proto";` — the literal as written; the parser has
    /// already resolved it to a bundle file id in the import map.
    Import(String, Span),
    Message(Message),
    Enum(EnumDecl),
    Service(Service),
    Option(OptionDecl),
}

/// A service declaration. Carried through the pipeline untouched; code
/// emission for services happens in a backend, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: ServiceName,
    pub methods: Vec<Method>,
    pub span: Span,
}

/// An rpc method: `rpc Lookup (Request) returns (Response);`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: MethodName,
    pub input: String,
    pub output: String,
    pub span: Span,
}
