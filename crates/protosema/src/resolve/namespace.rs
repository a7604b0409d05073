//! Namespace construction.
//!
//! # What This Pass Does
//!
//! 1. **Builds each file's namespace tree** - one [`Entry`] per declared
//!    name, messages carrying their own nested namespace
//! 2. **Hoists enum values** - protobuf puts enumerator names in the scope
//!    enclosing the enum, so each value is also inserted as a field entry
//! 3. **Detects intra-file collisions** - a duplicate key is reported and
//!    the insertion skipped
//! 4. **Attaches enclosing paths** - every message and enum learns its
//!    package-and-outer-message path
//! 5. **Wraps in the package path** - walking the path right-to-left, each
//!    component becomes a synthetic message entry, so `pkg.Outer.Inner`
//!    resolves through the same descent as any nested message
//!
//! The builder keeps a mutable scope while walking one message; nothing of
//! that state is observable outside the file being processed.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ast::{Decl, EnumDecl, Message, MessageEntry, SchemaFile};
use crate::error::{Diagnostic, Diagnostics, ErrorKind};
use crate::foundation::{FieldName, Span, TypeName, TypePath};

/// One named thing in a scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Entry {
    /// A message declaration with its own nested namespace.
    Message { name: TypeName, inner: Namespace },
    /// An enum declaration.
    Enum { name: TypeName },
    /// A field, or an enum value hoisted into the enclosing scope.
    Field { name: FieldName },
}

impl Entry {
    /// The textual key this entry occupies in its scope.
    pub fn key(&self) -> &str {
        match self {
            Entry::Message { name, .. } => name.as_str(),
            Entry::Enum { name } => name.as_str(),
            Entry::Field { name } => name.as_str(),
        }
    }

    /// Whether this entry names a type (message or enum).
    pub fn is_type(&self) -> bool {
        !matches!(self, Entry::Field { .. })
    }
}

/// A single-level mapping from textual identifier to [`Entry`].
///
/// Insertion order is preserved, which keeps merge diagnostics and every
/// downstream iteration deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    entries: IndexMap<String, Entry>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry under its own key. Returns `false` and leaves the
    /// namespace unchanged if the key is already taken.
    pub fn insert(&mut self, entry: Entry) -> bool {
        if self.entries.contains_key(entry.key()) {
            return false;
        }
        self.entries.insert(entry.key().to_string(), entry);
        true
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Entry)> {
        self.entries.iter()
    }

    /// Looks up a possibly-dotted name, descending through message entries.
    ///
    /// Every segment but the last must be a message; the final segment may
    /// be any entry.
    pub fn lookup(&self, dotted: &str) -> Option<&Entry> {
        let mut ns = self;
        let mut parts = dotted.split('.').peekable();
        loop {
            let part = parts.next()?;
            let entry = ns.get(part)?;
            if parts.peek().is_none() {
                return Some(entry);
            }
            match entry {
                Entry::Message { inner, .. } => ns = inner,
                _ => return None,
            }
        }
    }

    /// Wraps this namespace under a package path.
    ///
    /// Each component, walked right-to-left, becomes a synthetic message
    /// entry, so `lookup("p1.p2.X")` on the result finds what `lookup("X")`
    /// finds on the original.
    pub fn wrap(self, path: &TypePath) -> Namespace {
        let mut ns = self;
        for component in path.segments().iter().rev() {
            let mut outer = Namespace::new();
            outer.insert(Entry::Message {
                name: component.clone(),
                inner: ns,
            });
            ns = outer;
        }
        ns
    }

    /// Merges `other` into `self`: the union of both key sets.
    ///
    /// Overlapping keys are collisions — message entries are NOT merged
    /// recursively — and are returned in `other`'s order; `self` keeps its
    /// own entry for each.
    pub fn merge(&mut self, other: Namespace) -> Vec<String> {
        let mut collisions = Vec::new();
        for (key, entry) in other.entries {
            if self.entries.contains_key(&key) {
                collisions.push(key);
            } else {
                self.entries.insert(key, entry);
            }
        }
        collisions
    }
}

/// Builds the file's namespace and attaches it as the annotation.
///
/// Enclosing paths are attached to every message and enum along the way.
/// Duplicate names are reported and skipped; the file is rejected at the
/// stage boundary if any were found.
pub fn build_namespace(file: SchemaFile<()>) -> Result<SchemaFile<Namespace>, Vec<Diagnostic>> {
    let mut diags = Diagnostics::new();
    let mut top = Namespace::new();
    let package = file.package.clone();
    let mut decls = file.decls;

    for decl in &mut decls {
        match decl {
            Decl::Message(message) => {
                let entry = build_message(message, &package, &mut diags);
                try_insert(&mut top, entry, "file scope", message.span, &mut diags);
            }
            Decl::Enum(decl) => {
                insert_enum(&mut top, decl, &package, "file scope", &mut diags);
            }
            _ => {}
        }
    }

    let annotation = top.wrap(&package);
    let file = SchemaFile {
        decls,
        package,
        annotation,
    };
    diags.finish(file)
}

/// Builds one message's namespace entry, recursing into nested messages.
fn build_message(message: &mut Message, scope: &TypePath, diags: &mut Diagnostics) -> Entry {
    message.scope = scope.clone();
    let inner_scope = scope.append(message.name.clone());
    let context = format!("message '{}'", message.name);

    let mut ns = Namespace::new();
    for entry in &mut message.entries {
        match entry {
            MessageEntry::Field(field) => {
                try_insert(
                    &mut ns,
                    Entry::Field {
                        name: field.name.clone(),
                    },
                    &context,
                    field.span,
                    diags,
                );
            }
            MessageEntry::Nested(nested) => {
                let nested_entry = build_message(nested, &inner_scope, diags);
                try_insert(&mut ns, nested_entry, &context, nested.span, diags);
            }
            MessageEntry::Enum(decl) => {
                insert_enum(&mut ns, decl, &inner_scope, &context, diags);
            }
            MessageEntry::Option(_) | MessageEntry::Extensions(_) => {}
        }
    }

    Entry::Message {
        name: message.name.clone(),
        inner: ns,
    }
}

/// Inserts an enum entry plus one hoisted field entry per enumerator.
fn insert_enum(
    ns: &mut Namespace,
    decl: &mut EnumDecl,
    scope: &TypePath,
    context: &str,
    diags: &mut Diagnostics,
) {
    decl.scope = scope.clone();
    try_insert(
        ns,
        Entry::Enum {
            name: decl.name.clone(),
        },
        context,
        decl.span,
        diags,
    );
    for value in &decl.values {
        try_insert(
            ns,
            Entry::Field {
                name: value.name.clone(),
            },
            context,
            decl.span,
            diags,
        );
    }
}

fn try_insert(ns: &mut Namespace, entry: Entry, context: &str, span: Span, diags: &mut Diagnostics) {
    let key = entry.key().to_string();
    if !ns.insert(entry) {
        diags.error(
            ErrorKind::DuplicateName,
            Some(span),
            format!("duplicate name '{}' in {}", key, context),
        );
    }
}
