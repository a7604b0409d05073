//! Unified compilation pipeline.
//!
//! Orchestrates the semantic phases, from a parsed [`Bundle`] to the final
//! declaration tree:
//!
//! ```text
//! Bundle<()> → labels → sort → mangle → package → namespace →
//!     Bundle<Namespace> → imports → Vec<SchemaFile<Namespace>> →
//!     typeref → lowering → Ir
//! ```
//!
//! Every phase accumulates diagnostics instead of stopping at the first
//! problem. The pipeline halts at a phase boundary if anything was emitted,
//! so later phases can rely on the invariants the earlier ones establish.
//!
//! The pipeline is single-threaded and deterministic: declaration order
//! within a file and file order within the bundle fix the output order of
//! everything, diagnostics included.

use indexmap::IndexMap;
use tracing::debug;

use crate::ast::{Bundle, SchemaFile};
use crate::error::{Diagnostic, Diagnostics};
use crate::ir::{lower, Ir};
use crate::resolve::imports::resolve_imports;
use crate::resolve::labels::validate_labels;
use crate::resolve::mangle::mangle_names;
use crate::resolve::namespace::build_namespace;
use crate::resolve::package::extract_package;
use crate::resolve::sort::sort_fields;
use crate::resolve::typeref::resolve_type_names;

/// Compiles a parsed bundle into the target-neutral declaration tree.
///
/// This is the main entry point of the semantic core. On failure, returns
/// every diagnostic of the failing phase, in emission order.
pub fn compile(bundle: Bundle<()>) -> Result<Ir, Vec<Diagnostic>> {
    // 1. Label validation (reads only).
    let mut errors = Diagnostics::new();
    for id in &bundle.files {
        errors.extend(validate_labels(&bundle.file_map[id]));
    }
    errors.finish(())?;
    debug!(files = bundle.files.len(), "field labels validated");

    // 2-3. Canonical field order, then capitalization by role.
    let bundle = bundle.map_files(|file| mangle_names(sort_fields(file)));
    debug!("fields sorted, names mangled");

    // 4. Package extraction.
    let mut errors = Diagnostics::new();
    let bundle = try_map_files(bundle, &mut errors, extract_package);
    errors.finish(())?;

    // 5. Namespace construction.
    let mut errors = Diagnostics::new();
    let bundle = try_map_files(bundle, &mut errors, build_namespace);
    errors.finish(())?;
    debug!("namespaces built");

    // 6. Import resolution; the bundle envelope ends here.
    let files = resolve_imports(bundle)?;
    debug!(files = files.len(), "imports merged");

    // 7. Type-name resolution.
    let mut errors = Diagnostics::new();
    let mut resolved = Vec::with_capacity(files.len());
    for file in files {
        match resolve_type_names(file) {
            Ok(file) => resolved.push(file),
            Err(diags) => errors.extend(diags),
        }
    }
    errors.finish(())?;
    debug!("type names resolved");

    // 8. Lowering.
    let ir = lower(&resolved)?;
    debug!(modules = ir.len(), "declaration tree lowered");
    Ok(ir)
}

/// Applies a fallible per-file transform, forwarding per-file diagnostics
/// into the phase region. Files that fail are dropped; the caller halts at
/// the boundary anyway.
fn try_map_files<A, B>(
    bundle: Bundle<A>,
    errors: &mut Diagnostics,
    mut f: impl FnMut(SchemaFile<A>) -> Result<SchemaFile<B>, Vec<Diagnostic>>,
) -> Bundle<B> {
    let mut file_map = IndexMap::new();
    for (id, file) in bundle.file_map {
        match f(file) {
            Ok(file) => {
                file_map.insert(id, file);
            }
            Err(diags) => errors.extend(diags),
        }
    }
    Bundle {
        files: bundle.files,
        import_map: bundle.import_map,
        file_map,
    }
}
