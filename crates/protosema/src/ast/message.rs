//! Messages, fields and enums.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::foundation::{FieldName, FullRef, Span, TypeName, TypePath};

/// A message declaration, top-level or nested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub name: TypeName,
    pub entries: Vec<MessageEntry>,
    /// Enclosing path (package plus outer messages). Empty until namespace
    /// construction attaches it.
    pub scope: TypePath,
    pub span: Span,
}

impl Message {
    /// A message with an empty enclosing path, as the parser produces it.
    pub fn new(name: TypeName, entries: Vec<MessageEntry>, span: Span) -> Self {
        Self {
            name,
            entries,
            scope: TypePath::root(),
            span,
        }
    }

    /// Direct fields of this message, declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.entries.iter().filter_map(|entry| match entry {
            MessageEntry::Field(f) => Some(f),
            _ => None,
        })
    }
}

/// One item in a message body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MessageEntry {
    Field(Field),
    Nested(Message),
    Enum(EnumDecl),
    Option(OptionDecl),
    /// `extensions N to M;` placeholder; carried but never interpreted.
    Extensions(Span),
}

/// A message field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub modifier: Modifier,
    pub ty: FieldType,
    pub name: FieldName,
    pub tag: FieldTag,
    pub options: Vec<OptionDecl>,
    pub span: Span,
}

/// Field presence modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    Required,
    Optional,
    Repeated,
}

/// The declared type of a field.
///
/// User-typed references start [`Unresolved`](FieldType::Unresolved) and are
/// rewritten to [`Message`](FieldType::Message) or [`Enum`](FieldType::Enum)
/// by type-name resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldType {
    Builtin(Scalar),
    /// A user type reference as written, possibly dotted.
    Unresolved(String),
    Message(FullRef),
    Enum(FullRef),
}

/// Builtin scalar types of the protobuf language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scalar {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,
}

/// A wire-format field tag.
///
/// Stored wide so out-of-range parser output is representable; the label
/// validator narrows it to `1..=MAX` outside the reserved band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldTag(pub i64);

impl FieldTag {
    /// Largest valid tag: `2^29 - 1`.
    pub const MAX: i64 = (1 << 29) - 1;
    /// Band reserved by the protobuf specification.
    pub const RESERVED: RangeInclusive<i64> = 19_000..=19_999;

    pub fn in_range(self) -> bool {
        self.0 >= 1 && self.0 <= Self::MAX
    }

    pub fn is_reserved(self) -> bool {
        Self::RESERVED.contains(&self.0)
    }
}

/// An enum declaration, top-level or inline in a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDecl {
    pub name: TypeName,
    pub values: Vec<EnumValue>,
    /// Enclosing path; empty until namespace construction attaches it.
    pub scope: TypePath,
    pub span: Span,
}

impl EnumDecl {
    pub fn new(name: TypeName, values: Vec<EnumValue>, span: Span) -> Self {
        Self {
            name,
            values,
            scope: TypePath::root(),
            span,
        }
    }
}

/// A single enumerator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: FieldName,
    pub number: i64,
}

/// An option, top-level, inline in a message, or attached to a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDecl {
    pub name: String,
    pub value: OptionValue,
    pub span: Span,
}

/// Option payload as a tagged union; the parser guarantees the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OptionValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Real(f64),
}
