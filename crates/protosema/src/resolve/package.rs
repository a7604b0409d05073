//! Package extraction.
//!
//! Scans a file's top-level declarations for `package` items and lifts the
//! result into the file's `package` attribute. Zero declarations leave the
//! file in the root package; exactly one sets the path; more than one
//! rejects the file with a single fatal diagnostic.
//!
//! The package declarations themselves stay in the declaration list; only
//! the summary is lifted.

use crate::ast::{Decl, SchemaFile};
use crate::error::{Diagnostic, ErrorKind};
use crate::foundation::TypePath;

/// Consolidates the file's package declarations into `file.package`.
pub fn extract_package<A>(mut file: SchemaFile<A>) -> Result<SchemaFile<A>, Vec<Diagnostic>> {
    let mut packages = file.decls.iter().filter_map(|decl| match decl {
        Decl::Package(components, span) => Some((components, *span)),
        _ => None,
    });

    let first = packages.next();
    if let Some((_, second_span)) = packages.next() {
        return Err(vec![Diagnostic::error(
            ErrorKind::MultiplePackages,
            Some(second_span),
            "Multiple package declarations",
        )]);
    }

    file.package = match first {
        Some((components, _)) => {
            TypePath::new(components.iter().map(|c| c.to_type_name()).collect())
        }
        None => TypePath::root(),
    };
    Ok(file)
}
