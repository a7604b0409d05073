//! Bundle import resolution.
//!
//! Merges the wrapped namespace of every directly imported file into its
//! importer. The merge is not transitive: each imported file contributes
//! only its own namespace, already wrapped in its package path. Overlapping
//! keys are cross-file collisions, reported against the importer.
//!
//! After this pass each file is self-contained and the bundle envelope is
//! discarded.
//!
//! # Preconditions
//!
//! The parser resolves every import literal to a bundle file id before the
//! bundle enters the pipeline. An unresolved literal here is a bundle
//! construction bug and panics.

use crate::ast::{Bundle, Decl, SchemaFile};
use crate::error::{Diagnostic, Diagnostics, ErrorKind};
use crate::resolve::namespace::Namespace;

/// Merges imported namespaces into each file, in bundle order.
pub fn resolve_imports(
    bundle: Bundle<Namespace>,
) -> Result<Vec<SchemaFile<Namespace>>, Vec<Diagnostic>> {
    let mut diags = Diagnostics::new();
    let mut out = Vec::with_capacity(bundle.files.len());

    for id in &bundle.files {
        let mut file = bundle
            .file_map
            .get(id)
            .unwrap_or_else(|| panic!("file '{}' missing from bundle map", id))
            .clone();

        for decl in &file.decls {
            let Decl::Import(literal, span) = decl else {
                continue;
            };
            let target = bundle
                .import_map
                .get(literal)
                .unwrap_or_else(|| panic!("import '{}' not resolved in bundle", literal));
            let imported = bundle
                .file_map
                .get(target)
                .unwrap_or_else(|| panic!("file '{}' missing from bundle map", target));

            for key in file.annotation.merge(imported.annotation.clone()) {
                diags.error(
                    ErrorKind::ImportCollision,
                    Some(*span),
                    format!("duplicate name in imports: '{}' (file '{}')", key, id),
                );
            }
        }

        out.push(file);
    }

    diags.finish(out)
}
