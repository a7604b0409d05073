//! Role-based name mangling.
//!
//! Downstream targets want `PascalCase` type names and `camelCase` field
//! names; this pass normalizes the first character of every identifier by
//! role:
//!
//! - Type-role names (messages, enums, nested declarations) get an
//!   upper-case first character.
//! - Field-role names (fields, enum value labels) get a lower-case one.
//! - Package components, service and method names are left alone.
//!
//! User-typed field references are rewritten to match: the final segment of
//! the written name is a type position and is capitalized; any leading
//! segments may be package components or outer messages and are left as
//! written. Mangling is idempotent.

use crate::ast::{Decl, EnumDecl, FieldType, Message, MessageEntry, SchemaFile};
use crate::foundation::ident::capitalize_first;

/// Applies role-based capitalization to every identifier in the file.
pub fn mangle_names<A>(mut file: SchemaFile<A>) -> SchemaFile<A> {
    for decl in &mut file.decls {
        match decl {
            Decl::Message(message) => mangle_message(message),
            Decl::Enum(decl) => mangle_enum(decl),
            _ => {}
        }
    }
    file
}

fn mangle_message(message: &mut Message) {
    message.name = message.name.capitalized();
    for entry in &mut message.entries {
        match entry {
            MessageEntry::Field(field) => {
                field.name = field.name.uncapitalized();
                if let FieldType::Unresolved(name) = &mut field.ty {
                    *name = mangle_type_ref(name);
                }
            }
            MessageEntry::Nested(nested) => mangle_message(nested),
            MessageEntry::Enum(decl) => mangle_enum(decl),
            MessageEntry::Option(_) | MessageEntry::Extensions(_) => {}
        }
    }
}

fn mangle_enum(decl: &mut EnumDecl) {
    decl.name = decl.name.capitalized();
    for value in &mut decl.values {
        value.name = value.name.uncapitalized();
    }
}

/// Capitalizes the final segment of a possibly-dotted type reference.
fn mangle_type_ref(name: &str) -> String {
    match name.rfind('.') {
        Some(dot) => format!("{}{}", &name[..dot + 1], capitalize_first(&name[dot + 1..])),
        None => capitalize_first(name),
    }
}
