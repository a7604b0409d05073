//! Target-neutral intermediate representation.
//!
//! The end product of the pipeline: a flat, collision-checked map from
//! fully-qualified path to declaration, ready for a backend to walk. The
//! IR knows nothing about any target language; it records shapes, scalar
//! kinds and fully-qualified references only.

pub mod lower;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ast::{OptionValue, Scalar};
use crate::foundation::{FieldName, FullRef, TypeName, TypePath};

pub use lower::lower;

/// One lowered declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IrModule {
    Message {
        name: TypeName,
        fields: Vec<IrField>,
    },
    Enum {
        name: TypeName,
        variants: Vec<(FieldName, i64)>,
    },
}

/// A lowered message field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrField {
    pub name: FieldName,
    pub tag: i64,
    pub shape: IrShape,
    /// The `default` option's literal, when one was attached.
    pub default: Option<OptionValue>,
}

/// Outer shape of a field, from its modifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IrShape {
    Required(IrInner),
    Optional(IrInner),
    Repeated { inner: IrInner, packed: bool },
}

/// Inner type of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IrInner {
    Scalar(Scalar),
    Message(FullRef),
    Enum(FullRef),
}

/// The declaration tree: a collision-checked map keyed by full path.
///
/// Also preserves the per-file package paths, in bundle order, which a
/// backend needs for target-module naming.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ir {
    modules: IndexMap<TypePath, IrModule>,
    /// Package path of each compiled file, bundle order.
    pub packages: Vec<TypePath>,
}

impl Ir {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a module at its full path. Returns the rejected module if
    /// the slot is already occupied.
    pub fn insert(&mut self, path: TypePath, module: IrModule) -> Result<(), IrModule> {
        if self.modules.contains_key(&path) {
            return Err(module);
        }
        self.modules.insert(path, module);
        Ok(())
    }

    pub fn get(&self, path: &TypePath) -> Option<&IrModule> {
        self.modules.get(path)
    }

    /// All modules, insertion (bundle/document) order.
    pub fn modules(&self) -> impl Iterator<Item = (&TypePath, &IrModule)> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Serializes an [`Ir`] to a MessagePack byte vector.
pub fn serialize_ir(ir: &Ir) -> Result<Vec<u8>, rmp_serde::encode::Error> {
    rmp_serde::to_vec_named(ir)
}

/// Deserializes an [`Ir`] from a MessagePack byte vector.
pub fn deserialize_ir(bytes: &[u8]) -> Result<Ir, rmp_serde::decode::Error> {
    rmp_serde::from_slice(bytes)
}
