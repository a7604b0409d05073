//! Canonical field ordering.
//!
//! Reorders every message body, nested messages included, so fields appear
//! in ascending tag order. Entries without a meaningful tag (nested
//! messages, inline enums, options, extension placeholders) sort with a
//! synthetic key of −1, placing them before all fields and keeping their
//! relative order. The sort is stable, so a second run is a no-op.

use crate::ast::{Decl, Message, MessageEntry, SchemaFile};

/// Sorts every message's entries by field tag, ascending.
pub fn sort_fields<A>(mut file: SchemaFile<A>) -> SchemaFile<A> {
    for decl in &mut file.decls {
        if let Decl::Message(message) = decl {
            sort_message(message);
        }
    }
    file
}

fn sort_message(message: &mut Message) {
    for entry in &mut message.entries {
        if let MessageEntry::Nested(nested) = entry {
            sort_message(nested);
        }
    }
    message.entries.sort_by_key(entry_key);
}

fn entry_key(entry: &MessageEntry) -> i64 {
    match entry {
        MessageEntry::Field(field) => field.tag.0,
        _ => -1,
    }
}
