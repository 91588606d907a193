//! Union branch selection and error reporting

use avro_document::{Value, datum};
use avro_schema::{SchemaBuilder, SchemaDocument, SchemaNodeId, ValidatorError, validate};

fn errors(schema: &SchemaDocument, datum: &Value) -> Vec<String> {
    validate(schema, datum)
        .expect("schema should be well-formed")
        .errors()
}

/// `[int, record Point { x: int }]`
fn int_or_point() -> SchemaDocument {
    let mut b = SchemaBuilder::new();
    let int = b.int();
    let x = b.int();
    let point = b.record("Point", [("x", x)]);
    let root = b.union([int, point]);
    b.finish(root)
}

#[test]
fn test_any_matching_branch_accepts() {
    let schema = int_or_point();
    assert!(errors(&schema, &datum!(5)).is_empty());
    assert!(errors(&schema, &datum!({"x": 5})).is_empty());
}

#[test]
fn test_failed_composite_branch_surfaces_nested_errors() {
    let schema = int_or_point();
    assert_eq!(
        errors(&schema, &datum!({"x": "not-an-int"})),
        vec!["at .x expected type int, got string with value \"not-an-int\""]
    );
}

#[test]
fn test_scalar_only_union_reports_single_summary() {
    let mut b = SchemaBuilder::new();
    let int = b.int();
    let string = b.string();
    let root = b.union([int, string]);
    let schema = b.finish(root);

    assert_eq!(
        errors(&schema, &datum!(3.5)),
        vec!["at . expected union of ['int', 'string'], got float with value 3.5"]
    );
}

#[test]
fn test_first_composite_branch_in_declaration_order_wins() {
    let mut b = SchemaBuilder::new();
    let int_item = b.int();
    let ints = b.array(int_item);
    let string_value = b.string();
    let strings = b.map(string_value);
    let root = b.union([ints, strings]);
    let schema = b.finish(root);

    assert_eq!(
        errors(&schema, &datum!(["a"])),
        vec!["at .[0] expected type int, got string with value \"a\""]
    );
    // The array branch is reported even though the datum is map-shaped.
    assert_eq!(
        errors(&schema, &datum!({"k": 1})),
        vec!["at . expected type array, got record with value {\"k\": 1}"]
    );
}

#[test]
fn test_single_branch_union_is_transparent() {
    let mut b = SchemaBuilder::new();
    let string = b.string();
    let root = b.union([string]);
    let schema = b.finish(root);

    assert_eq!(
        errors(&schema, &datum!(1)),
        vec!["at . expected type string, got int with value 1"]
    );
}

#[test]
fn test_union_inside_record_reports_at_field() {
    let mut b = SchemaBuilder::new();
    let null = b.null();
    let string = b.string();
    let email = b.union([null, string]);
    let root = b.record("Contact", [("email", email)]);
    let schema = b.finish(root);

    assert!(errors(&schema, &datum!({"email": null})).is_empty());
    assert!(errors(&schema, &datum!({"email": "a@b.c"})).is_empty());
    assert_eq!(
        errors(&schema, &datum!({"email": 12})),
        vec!["at .email expected union of ['null', 'string'], got int with value 12"]
    );
}

#[test]
fn test_union_branch_kinds_resolve_references() {
    let mut b = SchemaBuilder::new();
    let null = b.null();
    let id = b.long();
    b.record("User", [("id", id)]);
    let user_ref = b.reference("User");
    let root = b.union([null, user_ref]);
    let schema = b.finish(root);

    assert_eq!(
        errors(&schema, &datum!({"id": "x"})),
        vec!["at .id expected type long, got string with value \"x\""]
    );
    assert_eq!(
        errors(&schema, &datum!(true)),
        vec!["at . expected type record, got boolean with value true"]
    );
}

#[test]
fn test_nested_union_is_fatal() {
    let mut b = SchemaBuilder::new();
    let int = b.int();
    let string = b.string();
    let inner = b.union([int, string]);
    let null = b.null();
    let root = b.union([null, inner]);
    let schema = b.finish(root);

    assert_eq!(
        validate(&schema, &datum!(null)),
        Err(ValidatorError::NestedUnion {
            union: root,
            branch: inner
        })
    );
}

#[test]
fn test_union_reached_through_reference_is_nested() {
    let mut b = SchemaBuilder::new();
    let int = b.int();
    let string = b.string();
    let either = b.union([int, string]);
    b.register_type("Either", either);
    let null = b.null();
    let either_ref = b.reference("Either");
    let root = b.union([null, either_ref]);
    let schema = b.finish(root);

    assert!(matches!(
        validate(&schema, &datum!(1)),
        Err(ValidatorError::NestedUnion { .. })
    ));
}

#[test]
fn test_dangling_branch_is_fatal() {
    let mut b = SchemaBuilder::new();
    let int = b.int();
    let root = b.union([int, SchemaNodeId(100)]);
    let schema = b.finish(root);

    assert_eq!(
        validate(&schema, &datum!(1)),
        Err(ValidatorError::UndefinedSchemaNode {
            id: SchemaNodeId(100)
        })
    );
}
