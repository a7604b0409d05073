//! End-to-end tests for the protosema pipeline.
//!
//! Each test drives the full pipeline:
//! Bundle → Validate → Sort → Mangle → Package → Namespace → Imports →
//! Type Resolution → Lowering → Verify.

use protosema::ast::{Modifier, Scalar};
use protosema::foundation::{FullRef, TypeName, TypePath};
use protosema::ir::{serialize_ir, IrInner, IrModule, IrShape};
use protosema::ErrorKind;
use protosema_tests::{
    bool_option, enumeration, field, import, inline_enum, message, msg, nested, optional, package,
    repeated, required, scalar, user, TestHarness,
};

fn message_fields<'a>(ir: &'a protosema::Ir, path: &str) -> &'a [protosema::IrField] {
    match ir.get(&TypePath::from_dotted(path)) {
        Some(IrModule::Message { fields, .. }) => fields,
        other => panic!("expected message at '{}', found {:?}", path, other),
    }
}

/// A message with two scalar fields lowers to one module with both fields
/// in tag order.
#[test]
fn test_simple_message() {
    let ir = TestHarness::new()
        .file(
            "foo.proto",
            vec![message(
                "Foo",
                vec![
                    required(scalar(Scalar::Int32), "x", 1),
                    optional(scalar(Scalar::String), "y", 2),
                ],
            )],
        )
        .compile_ok();

    assert_eq!(ir.len(), 1);
    let fields = message_fields(&ir, "Foo");
    assert_eq!(fields.len(), 2);

    assert_eq!(fields[0].name.as_str(), "x");
    assert_eq!(fields[0].tag, 1);
    assert_eq!(fields[0].shape, IrShape::Required(IrInner::Scalar(Scalar::Int32)));

    assert_eq!(fields[1].name.as_str(), "y");
    assert_eq!(fields[1].tag, 2);
    assert_eq!(fields[1].shape, IrShape::Optional(IrInner::Scalar(Scalar::String)));
}

/// Two fields sharing a tag produce a single duplicate-label diagnostic.
#[test]
fn test_duplicate_tag() {
    let diags = TestHarness::new()
        .file(
            "m.proto",
            vec![message(
                "M",
                vec![
                    required(scalar(Scalar::Int32), "a", 1),
                    required(scalar(Scalar::Int32), "b", 1),
                ],
            )],
        )
        .compile()
        .unwrap_err();

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, ErrorKind::DuplicateLabel);
    assert!(diags[0].message.contains("Duplicate label number"));
}

/// A tag inside 19000..=19999 is rejected.
#[test]
fn test_reserved_tag() {
    let diags = TestHarness::new()
        .file(
            "m.proto",
            vec![message("M", vec![required(scalar(Scalar::Int32), "x", 19_500)])],
        )
        .compile()
        .unwrap_err();

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, ErrorKind::ReservedTag);
    assert!(diags[0].message.contains("Field tag is in reserved range"));
}

/// A nested message resolves by its simple name from the enclosing
/// message, and both lower under their full paths.
#[test]
fn test_nested_resolution() {
    let ir = TestHarness::new()
        .file(
            "outer.proto",
            vec![message(
                "Outer",
                vec![
                    nested(msg("Inner", vec![required(scalar(Scalar::Int32), "v", 1)])),
                    required(user("Inner"), "i", 1),
                ],
            )],
        )
        .compile_ok();

    assert_eq!(ir.len(), 2);
    assert!(ir.get(&TypePath::from_dotted("Outer.Inner")).is_some());

    let fields = message_fields(&ir, "Outer");
    let expected = FullRef::new(TypePath::from_dotted("Outer"), TypeName::new("Inner"));
    assert_eq!(fields[0].shape, IrShape::Required(IrInner::Message(expected)));
}

/// Two files declaring the same top-level name collide when one imports
/// the other; the diagnostic names the importer and the key.
#[test]
fn test_cross_file_import_collision() {
    let diags = TestHarness::new()
        .file("a.proto", vec![message("Color", vec![])])
        .file(
            "b.proto",
            vec![import("a.proto"), message("Color", vec![])],
        )
        .link("a.proto", "a.proto")
        .compile()
        .unwrap_err();

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, ErrorKind::ImportCollision);
    assert!(diags[0].message.contains("'Color'"));
    assert!(diags[0].message.contains("b.proto"));
}

/// `[packed=true]` on a repeated scalar lands in the field shape.
#[test]
fn test_packed_repeated() {
    let ir = TestHarness::new()
        .file(
            "m.proto",
            vec![message(
                "M",
                vec![field(
                    Modifier::Repeated,
                    scalar(Scalar::Int32),
                    "xs",
                    1,
                    vec![bool_option("packed", true)],
                )],
            )],
        )
        .compile_ok();

    let fields = message_fields(&ir, "M");
    assert_eq!(
        fields[0].shape,
        IrShape::Repeated { inner: IrInner::Scalar(Scalar::Int32), packed: true }
    );
}

/// A qualified reference reaches a type in an imported file's package.
#[test]
fn test_cross_package_reference() {
    let ir = TestHarness::new()
        .file(
            "shapes.proto",
            vec![package("shapes"), message("Circle", vec![])],
        )
        .file(
            "scene.proto",
            vec![
                import("shapes.proto"),
                message("Scene", vec![required(user("shapes.Circle"), "c", 1)]),
            ],
        )
        .link("shapes.proto", "shapes.proto")
        .compile_ok();

    let fields = message_fields(&ir, "Scene");
    let expected = FullRef::new(TypePath::from_dotted("shapes"), TypeName::new("Circle"));
    assert_eq!(fields[0].shape, IrShape::Required(IrInner::Message(expected)));

    // Declarations key under their package path.
    assert!(ir.get(&TypePath::from_dotted("shapes.Circle")).is_some());
    // Per-file package paths survive for the backend, bundle order.
    assert_eq!(ir.packages.len(), 2);
    assert_eq!(ir.packages[0].to_string(), "shapes");
    assert!(ir.packages[1].is_empty());
}

/// Enum values hoist into the enclosing message scope; the enum itself
/// resolves as a field type.
#[test]
fn test_inline_enum_lowering() {
    let ir = TestHarness::new()
        .file(
            "m.proto",
            vec![message(
                "Config",
                vec![
                    inline_enum("Mode", &[("on", 1), ("off", 2)]),
                    required(user("Mode"), "mode", 1),
                ],
            )],
        )
        .compile_ok();

    assert_eq!(ir.len(), 2);
    match ir.get(&TypePath::from_dotted("Config.Mode")) {
        Some(IrModule::Enum { variants, .. }) => {
            assert_eq!(variants.len(), 2);
            assert_eq!(variants[0].0.as_str(), "on");
            assert_eq!(variants[0].1, 1);
        }
        other => panic!("expected enum, found {:?}", other),
    }

    let fields = message_fields(&ir, "Config");
    let expected = FullRef::new(TypePath::from_dotted("Config"), TypeName::new("Mode"));
    assert_eq!(fields[0].shape, IrShape::Required(IrInner::Enum(expected)));
}

/// Name mangling normalizes declarations and references together.
#[test]
fn test_mangling_end_to_end() {
    let ir = TestHarness::new()
        .file(
            "m.proto",
            vec![
                message("point", vec![required(scalar(Scalar::Int32), "X", 1)]),
                message("line", vec![required(user("point"), "start", 1)]),
            ],
        )
        .compile_ok();

    let fields = message_fields(&ir, "Point");
    assert_eq!(fields[0].name.as_str(), "x");

    let fields = message_fields(&ir, "Line");
    let expected = FullRef::new(TypePath::root(), TypeName::new("Point"));
    assert_eq!(fields[0].shape, IrShape::Required(IrInner::Message(expected)));
}

/// One bad message does not hide problems in the others; a phase's
/// diagnostics arrive together, in document order.
#[test]
fn test_diagnostics_aggregate_within_phase() {
    let diags = TestHarness::new()
        .file(
            "m.proto",
            vec![
                message(
                    "A",
                    vec![
                        required(scalar(Scalar::Int32), "x", 2),
                        required(scalar(Scalar::Int32), "y", 2),
                    ],
                ),
                message("B", vec![required(scalar(Scalar::Int32), "z", 19_001)]),
            ],
        )
        .compile()
        .unwrap_err();

    assert_eq!(diags.len(), 2);
    assert_eq!(diags[0].kind, ErrorKind::DuplicateLabel); // A, document order
    assert_eq!(diags[1].kind, ErrorKind::ReservedTag); // then B
}

/// Running the pipeline twice on identical input yields identical IR,
/// byte-for-byte.
#[test]
fn test_determinism() {
    let build = || {
        TestHarness::new()
            .file(
                "shapes.proto",
                vec![package("shapes"), message("Circle", vec![])],
            )
            .file(
                "scene.proto",
                vec![
                    import("shapes.proto"),
                    message(
                        "Scene",
                        vec![
                            required(user("shapes.Circle"), "c", 1),
                            repeated(scalar(Scalar::Double), "weights", 2),
                        ],
                    ),
                ],
            )
            .link("shapes.proto", "shapes.proto")
            .compile_ok()
    };

    let first = build();
    let second = build();
    assert_eq!(first, second);
    assert_eq!(serialize_ir(&first).unwrap(), serialize_ir(&second).unwrap());
}

/// Diagnostics are deterministic too.
#[test]
fn test_diagnostic_determinism() {
    let build = || {
        TestHarness::new()
            .file(
                "m.proto",
                vec![
                    message("A", vec![required(scalar(Scalar::Int32), "x", 0)]),
                    enumeration("Mode", &[("on", 1), ("off", 1)]),
                ],
            )
            .compile()
            .unwrap_err()
    };

    assert_eq!(build(), build());
}
