//! Qualified names for namespaced declarations.
//!
//! A [`TypePath`] is a dot-separated sequence of type names: the package
//! path of a file, or the enclosing path of a nested declaration. The empty
//! path is the root package. A [`FullRef`] couples a path with a leaf type
//! name and identifies one declaration across the whole bundle.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ident::TypeName;

/// An ordered sequence of type names; may be empty (the root package).
///
/// Paths are immutable values with cheap comparison and hashing, used as
/// keys in the final declaration map.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TypePath {
    segments: Vec<TypeName>,
}

impl TypePath {
    /// Create a path from a vector of segments.
    pub fn new(segments: Vec<TypeName>) -> Self {
        Self { segments }
    }

    /// The empty path (root package).
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a path from a dot-separated string; `""` is the root path.
    pub fn from_dotted(s: &str) -> Self {
        if s.is_empty() {
            return Self::root();
        }
        Self::new(s.split('.').map(TypeName::new).collect())
    }

    pub fn segments(&self) -> &[TypeName] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get the last segment (leaf name).
    pub fn last(&self) -> Option<&TypeName> {
        self.segments.last()
    }

    /// Append a segment to create a new path.
    pub fn append(&self, segment: TypeName) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self::new(segments)
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for seg in &self.segments {
            if !first {
                f.write_str(".")?;
            }
            f.write_str(seg.as_str())?;
            first = false;
        }
        Ok(())
    }
}

/// A fully-qualified reference: an enclosing path plus a leaf type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FullRef {
    /// Package and outer-message path.
    pub path: TypePath,
    /// The referenced declaration.
    pub name: TypeName,
}

impl FullRef {
    pub fn new(path: TypePath, name: TypeName) -> Self {
        Self { path, name }
    }

    /// The full path of the referenced declaration, leaf included.
    pub fn full_path(&self) -> TypePath {
        self.path.append(self.name.clone())
    }
}

impl fmt::Display for FullRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(self.name.as_str())
        } else {
            write!(f, "{}.{}", self.path, self.name)
        }
    }
}
