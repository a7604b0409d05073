//! Type-name resolution.
//!
//! # What This Pass Does
//!
//! Rewrites every user-typed field reference into a fully-qualified
//! reference against the merged namespace visible to the file:
//!
//! 1. **Candidate scopes** - for a field inside a message with path `P`,
//!    try `P`, then each shorter prefix of `P`, then the root
//! 2. **Dotted descent** - within a candidate, walk each dot-separated
//!    segment through message entries; the final segment may be a message
//!    or an enum
//! 3. **First match wins** - the innermost scope that resolves the name
//!    ends the search
//! 4. **Error reporting** - names no scope resolves, and names that
//!    resolve to a field instead of a type, are diagnostics
//!
//! Builtin-typed fields pass through untouched. After this pass no
//! unresolved reference remains in an accepted file.

use crate::ast::{Decl, FieldType, Message, MessageEntry, SchemaFile};
use crate::error::{Diagnostic, Diagnostics, ErrorKind};
use crate::foundation::{FullRef, TypeName, TypePath};
use crate::resolve::namespace::{Entry, Namespace};

/// Resolves every user-typed field reference in the file.
pub fn resolve_type_names(
    file: SchemaFile<Namespace>,
) -> Result<SchemaFile<Namespace>, Vec<Diagnostic>> {
    let SchemaFile {
        mut decls,
        package,
        annotation,
    } = file;

    let mut diags = Diagnostics::new();
    for decl in &mut decls {
        if let Decl::Message(message) = decl {
            resolve_message(message, &annotation, &mut diags);
        }
    }

    diags.finish(SchemaFile {
        decls,
        package,
        annotation,
    })
}

fn resolve_message(message: &mut Message, global: &Namespace, diags: &mut Diagnostics) {
    // Fields of this message resolve relative to the message itself.
    let here = message.scope.append(message.name.clone());

    for entry in &mut message.entries {
        match entry {
            MessageEntry::Field(field) => {
                let FieldType::Unresolved(name) = &field.ty else {
                    continue;
                };
                match resolve_name(global, &here, name) {
                    Resolution::Message(full) => field.ty = FieldType::Message(full),
                    Resolution::Enum(full) => field.ty = FieldType::Enum(full),
                    Resolution::NotAType => diags.error(
                        ErrorKind::NotAType,
                        Some(field.span),
                        format!("Not a type name: {}", name),
                    ),
                    Resolution::NotFound => diags.error(
                        ErrorKind::UnresolvedName,
                        Some(field.span),
                        format!("Unresolved name: {}", name),
                    ),
                }
            }
            MessageEntry::Nested(nested) => resolve_message(nested, global, diags),
            _ => {}
        }
    }
}

enum Resolution {
    Message(FullRef),
    Enum(FullRef),
    /// The name resolved, but to a field rather than a type.
    NotAType,
    NotFound,
}

/// Searches candidate scopes from innermost to outermost.
fn resolve_name(global: &Namespace, scope: &TypePath, name: &str) -> Resolution {
    let segments = scope.segments();
    for len in (0..=segments.len()).rev() {
        if let Some(resolution) = lookup_in_scope(global, &segments[..len], name) {
            return resolution;
        }
    }
    Resolution::NotFound
}

/// Attempts a dotted lookup of `name` under one scope prefix.
///
/// Returns `None` if this scope does not resolve the name at all; a
/// successful lookup of a non-type entry is a definitive answer and stops
/// the outward search.
fn lookup_in_scope(global: &Namespace, prefix: &[TypeName], name: &str) -> Option<Resolution> {
    let mut ns = global;
    for segment in prefix {
        match ns.get(segment.as_str())? {
            Entry::Message { inner, .. } => ns = inner,
            _ => return None,
        }
    }

    // The reference's path: scope prefix plus the message entries the
    // dotted name descends through.
    let mut path: Vec<TypeName> = prefix.to_vec();
    let mut parts = name.split('.').peekable();
    loop {
        let part = parts.next()?;
        let entry = ns.get(part)?;
        if parts.peek().is_none() {
            return Some(match entry {
                Entry::Message { name, .. } => {
                    Resolution::Message(FullRef::new(TypePath::new(path), name.clone()))
                }
                Entry::Enum { name } => {
                    Resolution::Enum(FullRef::new(TypePath::new(path), name.clone()))
                }
                Entry::Field { .. } => Resolution::NotAType,
            });
        }
        match entry {
            Entry::Message { name, inner } => {
                path.push(name.clone());
                ns = inner;
            }
            _ => return None,
        }
    }
}
