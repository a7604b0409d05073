//! Lowering: resolved AST → declaration tree.
//!
//! # What This Pass Does
//!
//! Folds every message and enum of every resolved file, nested and inline
//! declarations included, into the flat [`Ir`] map:
//!
//! 1. **Enums** become [`IrModule::Enum`] with their enumerator list
//! 2. **Messages** become [`IrModule::Message`]; each field's modifier
//!    picks the outer shape and its resolved type the inner one
//! 3. **`packed`** comes from the field's option list; absent means false
//! 4. **`default`** is carried as the option's literal, when present
//! 5. **Collisions** — two declarations lowering to the same full path —
//!    are aggregated and surfaced as one failure
//!
//! By this point type resolution has already run; an unresolved reference
//! or a non-boolean `packed` option here is a bug in an earlier stage (or
//! in the parser) and panics.

use crate::ast::{walk, Field, FieldType, Message, Modifier, OptionDecl, OptionValue, SchemaFile};
use crate::error::{Diagnostic, Diagnostics, ErrorKind};
use crate::resolve::namespace::Namespace;

use super::{Ir, IrField, IrInner, IrModule, IrShape};

/// Lowers every declaration of the resolved files into one [`Ir`].
pub fn lower(files: &[SchemaFile<Namespace>]) -> Result<Ir, Vec<Diagnostic>> {
    let mut ir = Ir::new();
    let mut diags = Diagnostics::new();

    for file in files {
        ir.packages.push(file.package.clone());

        for message in walk::messages_of(file) {
            let path = message.scope.append(message.name.clone());
            let module = lower_message(message);
            if ir.insert(path.clone(), module).is_err() {
                diags.error(
                    ErrorKind::DuplicateDeclaration,
                    Some(message.span),
                    format!("Duplicate declaration of '{}'", path),
                );
            }
        }

        for decl in walk::enums_of(file) {
            let path = decl.scope.append(decl.name.clone());
            let module = IrModule::Enum {
                name: decl.name.clone(),
                variants: decl
                    .values
                    .iter()
                    .map(|v| (v.name.clone(), v.number))
                    .collect(),
            };
            if ir.insert(path.clone(), module).is_err() {
                diags.error(
                    ErrorKind::DuplicateDeclaration,
                    Some(decl.span),
                    format!("Duplicate declaration of '{}'", path),
                );
            }
        }
    }

    diags.finish(ir)
}

fn lower_message(message: &Message) -> IrModule {
    IrModule::Message {
        name: message.name.clone(),
        fields: message.fields().map(lower_field).collect(),
    }
}

fn lower_field(field: &Field) -> IrField {
    let packed = match find_option(&field.options, "packed") {
        None => false,
        Some(OptionValue::Bool(b)) => *b,
        Some(_) => panic!("option 'packed' on field '{}' is not a boolean", field.name),
    };

    let inner = match &field.ty {
        FieldType::Builtin(scalar) => IrInner::Scalar(*scalar),
        FieldType::Message(full) => IrInner::Message(full.clone()),
        FieldType::Enum(full) => IrInner::Enum(full.clone()),
        FieldType::Unresolved(name) => {
            panic!("unresolved type name '{}' reached lowering", name)
        }
    };

    let shape = match field.modifier {
        Modifier::Required => IrShape::Required(inner),
        Modifier::Optional => IrShape::Optional(inner),
        Modifier::Repeated => IrShape::Repeated { inner, packed },
    };

    IrField {
        name: field.name.clone(),
        tag: field.tag.0,
        shape,
        default: find_option(&field.options, "default").cloned(),
    }
}

/// Linear scan of a field's option list; options are few.
fn find_option<'a>(options: &'a [OptionDecl], name: &str) -> Option<&'a OptionValue> {
    options.iter().find(|o| o.name == name).map(|o| &o.value)
}
