//! Role-tagged identifiers.
//!
//! Every identifier in a schema carries a syntactic role: type name, field
//! name, package component, method name or service name. The role is a
//! zero-sized marker type on [`Ident`], so handing a field name to an API
//! that expects a type name is rejected by the host compiler instead of
//! surfacing as a pipeline bug.
//!
//! An identifier is never empty. The parser boundary guarantees this, and
//! [`Ident::new`] asserts it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Syntactic role of an identifier.
pub trait Role: Copy + Clone + fmt::Debug + Eq + std::hash::Hash + Ord {
    /// Role name used in Debug output and invariant messages.
    const NAME: &'static str;
}

macro_rules! roles {
    ($($(#[$doc:meta])* $marker:ident => $name:literal,)*) => {
        $(
            $(#[$doc])*
            #[derive(
                Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
                Serialize, Deserialize,
            )]
            pub struct $marker;

            impl Role for $marker {
                const NAME: &'static str = $name;
            }
        )*
    };
}

roles! {
    /// Message, enum and other type declarations.
    TypeRole => "type",
    /// Message fields and enum value labels.
    FieldRole => "field",
    /// Components of a package declaration as written.
    PackageRole => "package",
    /// Service method names.
    MethodRole => "method",
    /// Service declarations.
    ServiceRole => "service",
}

/// A non-empty identifier tagged by its syntactic [`Role`].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ident<R: Role> {
    text: String,
    #[serde(skip)]
    role: PhantomData<R>,
}

/// A type name (message, enum, package wrapper).
pub type TypeName = Ident<TypeRole>;
/// A field name or enum value label.
pub type FieldName = Ident<FieldRole>;
/// A package path component as written in the declaration.
pub type PackageName = Ident<PackageRole>;
/// A service method name.
pub type MethodName = Ident<MethodRole>;
/// A service name.
pub type ServiceName = Ident<ServiceRole>;

impl<R: Role> Ident<R> {
    /// Creates an identifier from non-empty text.
    ///
    /// # Panics
    /// Panics if `text` is empty; the parser must never produce one.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        assert!(!text.is_empty(), "empty {} identifier", R::NAME);
        Self {
            text,
            role: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Returns this identifier with its first character upper-cased.
    ///
    /// Remaining characters are unchanged. Idempotent.
    pub fn capitalized(&self) -> Self {
        Self::new(capitalize_first(&self.text))
    }

    /// Returns this identifier with its first character lower-cased.
    ///
    /// Remaining characters are unchanged. Idempotent.
    pub fn uncapitalized(&self) -> Self {
        Self::new(lowercase_first(&self.text))
    }
}

impl PackageName {
    /// Re-tags a package component as a type name.
    ///
    /// Package extraction lifts the components of a package declaration into
    /// a qualified name, where the namespace treats each component as a
    /// synthetic message wrapper. The text is unchanged.
    pub fn to_type_name(&self) -> TypeName {
        TypeName::new(self.text.clone())
    }
}

impl<R: Role> fmt::Debug for Ident<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", R::NAME, self.text)
    }
}

impl<R: Role> fmt::Display for Ident<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Upper-cases the first character of `s`, leaving the rest unchanged.
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases the first character of `s`, leaving the rest unchanged.
pub(crate) fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
