//! A bundle: the set of schema files in one compilation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::file::SchemaFile;

/// Identifies one file within a bundle. The parser uses the file's path.
pub type FileId = String;

/// All files participating in one compilation, with the import graph
/// resolved to file ids.
///
/// `files` fixes the processing order; `file_map` holds the files
/// themselves; `import_map` takes an import literal as written to the id of
/// the file it names. The parser resolves imports before the bundle enters
/// the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bundle<A> {
    pub files: Vec<FileId>,
    pub import_map: IndexMap<String, FileId>,
    pub file_map: IndexMap<FileId, SchemaFile<A>>,
}

impl Bundle<()> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file; order of addition is the processing order.
    pub fn add_file(&mut self, id: impl Into<FileId>, file: SchemaFile<()>) {
        let id = id.into();
        self.files.push(id.clone());
        self.file_map.insert(id, file);
    }

    /// Record that an import literal resolves to a bundle file.
    pub fn link_import(&mut self, literal: impl Into<String>, target: impl Into<FileId>) {
        self.import_map.insert(literal.into(), target.into());
    }
}

impl<A> Bundle<A> {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Apply an infallible per-file transform, preserving order and the
    /// import graph.
    pub fn map_files<B>(self, mut f: impl FnMut(SchemaFile<A>) -> SchemaFile<B>) -> Bundle<B> {
        Bundle {
            files: self.files,
            import_map: self.import_map,
            file_map: self
                .file_map
                .into_iter()
                .map(|(id, file)| (id, f(file)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Decl;
    use crate::foundation::Span;

    #[test]
    fn test_add_file_preserves_order() {
        let mut bundle = Bundle::new();
        bundle.add_file("b.proto", SchemaFile::new(vec![]));
        bundle.add_file("a.proto", SchemaFile::new(vec![]));

        assert_eq!(bundle.files, vec!["b.proto".to_string(), "a.proto".to_string()]);
        assert_eq!(bundle.len(), 2);
    }

    #[test]
    fn test_link_import() {
        let mut bundle = Bundle::new();
        bundle.add_file("a.proto", SchemaFile::new(vec![]));
        bundle.add_file(
            "b.proto",
            SchemaFile::new(vec![Decl::Import("a.proto".into(), Span::zero(1))]),
        );
        bundle.link_import("a.proto", "a.proto");

        assert_eq!(bundle.import_map.get("a.proto"), Some(&"a.proto".to_string()));
    }

    #[test]
    fn test_map_files_keeps_ids() {
        let mut bundle = Bundle::new();
        bundle.add_file("a.proto", SchemaFile::new(vec![]));
        let mapped = bundle.map_files(|f| f.with_annotation(7u32));

        assert_eq!(mapped.files, vec!["a.proto".to_string()]);
        assert_eq!(mapped.file_map.get("a.proto").unwrap().annotation, 7);
    }
}
