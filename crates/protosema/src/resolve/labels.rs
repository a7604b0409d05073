//! Field tag and enum label validation.
//!
//! # What This Pass Does
//!
//! 1. **Tag bounds** - every field tag is in `1..=2^29-1` and outside the
//!    reserved band `19000..=19999`
//! 2. **Tag uniqueness** - no two fields of one message share a tag
//! 3. **Enum value uniqueness** - no two enumerators of one enum share a value
//!
//! The walk is structural and bottom-up: nested messages and inline enums
//! are checked the same as top-level ones. This pass never mutates the AST;
//! it only reads and reports.

use crate::ast::{walk, Message, SchemaFile};
use crate::error::{Diagnostic, ErrorKind};

/// Validates every field tag and enum value in the file.
///
/// Returns all violations in document order; an empty list means the file
/// satisfies the tag invariants.
pub fn validate_labels<A>(file: &SchemaFile<A>) -> Vec<Diagnostic> {
    let mut diags = Vec::new();

    for message in walk::messages_of(file) {
        check_message(message, &mut diags);
    }
    for decl in walk::enums_of(file) {
        let numbers: Vec<i64> = decl.values.iter().map(|v| v.number).collect();
        for n in duplicate_numbers(numbers) {
            diags.push(Diagnostic::error(
                ErrorKind::DuplicateLabel,
                Some(decl.span),
                format!("Duplicate label number {} in enum '{}'", n, decl.name),
            ));
        }
    }

    diags
}

fn check_message(message: &Message, diags: &mut Vec<Diagnostic>) {
    for field in message.fields() {
        if !field.tag.in_range() {
            diags.push(Diagnostic::error(
                ErrorKind::TagOutOfRange,
                Some(field.span),
                format!("Field tag is out of range: '{}' = {}", field.name, field.tag.0),
            ));
        } else if field.tag.is_reserved() {
            diags.push(Diagnostic::error(
                ErrorKind::ReservedTag,
                Some(field.span),
                format!("Field tag is in reserved range: '{}' = {}", field.name, field.tag.0),
            ));
        }
    }

    let tags: Vec<i64> = message.fields().map(|f| f.tag.0).collect();
    for n in duplicate_numbers(tags) {
        diags.push(Diagnostic::error(
            ErrorKind::DuplicateLabel,
            Some(message.span),
            format!("Duplicate label number {} in message '{}'", n, message.name),
        ));
    }
}

/// The distinct values appearing more than once in `numbers`.
fn duplicate_numbers(mut numbers: Vec<i64>) -> Vec<i64> {
    numbers.sort_unstable();
    let mut dups = Vec::new();
    for pair in numbers.windows(2) {
        if pair[0] == pair[1] && dups.last() != Some(&pair[0]) {
            dups.push(pair[0]);
        }
    }
    dups
}
