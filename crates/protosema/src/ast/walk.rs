//! Structural walks over a schema file.
//!
//! Collect every node of one kind anywhere in the tree, in document order.
//! Passes that need "all messages, nested included" or "all enums, inline
//! included" use these instead of hand-rolling the recursion each time.

use super::file::{Decl, SchemaFile};
use super::message::{EnumDecl, Message, MessageEntry};

/// Every message in the file, nested messages included, document order.
pub fn messages_of<A>(file: &SchemaFile<A>) -> Vec<&Message> {
    let mut out = Vec::new();
    for decl in &file.decls {
        if let Decl::Message(m) = decl {
            collect_messages(m, &mut out);
        }
    }
    out
}

fn collect_messages<'a>(message: &'a Message, out: &mut Vec<&'a Message>) {
    out.push(message);
    for entry in &message.entries {
        if let MessageEntry::Nested(nested) = entry {
            collect_messages(nested, out);
        }
    }
}

/// Every enum in the file, inline enums included, document order.
pub fn enums_of<A>(file: &SchemaFile<A>) -> Vec<&EnumDecl> {
    let mut out = Vec::new();
    for decl in &file.decls {
        match decl {
            Decl::Enum(e) => out.push(e),
            Decl::Message(m) => collect_enums(m, &mut out),
            _ => {}
        }
    }
    out
}

fn collect_enums<'a>(message: &'a Message, out: &mut Vec<&'a EnumDecl>) {
    for entry in &message.entries {
        match entry {
            MessageEntry::Enum(e) => out.push(e),
            MessageEntry::Nested(nested) => collect_enums(nested, out),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{EnumValue, Field, FieldTag, FieldType, Modifier, Scalar};
    use crate::foundation::{FieldName, Span, TypeName};

    fn span() -> Span {
        Span::zero(0)
    }

    fn leaf_field(name: &str, tag: i64) -> MessageEntry {
        MessageEntry::Field(Field {
            modifier: Modifier::Required,
            ty: FieldType::Builtin(Scalar::Int32),
            name: FieldName::new(name),
            tag: FieldTag(tag),
            options: vec![],
            span: span(),
        })
    }

    fn enum_decl(name: &str) -> EnumDecl {
        EnumDecl::new(
            TypeName::new(name),
            vec![EnumValue {
                name: FieldName::new("a"),
                number: 0,
            }],
            span(),
        )
    }

    #[test]
    fn test_messages_document_order() {
        let inner = Message::new(TypeName::new("Inner"), vec![leaf_field("v", 1)], span());
        let outer = Message::new(
            TypeName::new("Outer"),
            vec![MessageEntry::Nested(inner), leaf_field("i", 2)],
            span(),
        );
        let trailing = Message::new(TypeName::new("Trailing"), vec![], span());
        let file = SchemaFile::new(vec![Decl::Message(outer), Decl::Message(trailing)]);

        let names: Vec<_> = messages_of(&file).iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Outer", "Inner", "Trailing"]);
    }

    #[test]
    fn test_enums_include_inline() {
        let msg = Message::new(
            TypeName::new("M"),
            vec![MessageEntry::Enum(enum_decl("Inline"))],
            span(),
        );
        let file = SchemaFile::new(vec![Decl::Enum(enum_decl("Top")), Decl::Message(msg)]);

        let names: Vec<_> = enums_of(&file).iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Top", "Inline"]);
    }
}
