//! End-to-end validation of datums against primitive, named and container schemas

use avro_document::{Map, ObjectKey, Value, datum};
use avro_schema::{SchemaBuilder, SchemaDocument, SchemaNodeContent, validate};

fn errors(schema: &SchemaDocument, datum: &Value) -> Vec<String> {
    validate(schema, datum)
        .expect("schema should be well-formed")
        .errors()
}

#[test]
fn test_primitives_accept_matching_datums() {
    let cases = [
        (SchemaNodeContent::Null, datum!(null)),
        (SchemaNodeContent::Boolean, datum!(true)),
        (SchemaNodeContent::Int, datum!(42)),
        (SchemaNodeContent::Long, datum!(4_000_000_000i64)),
        (SchemaNodeContent::Float, datum!(1.5)),
        (SchemaNodeContent::Double, datum!(7)),
        (SchemaNodeContent::String, datum!("text")),
        (SchemaNodeContent::Bytes, datum!(b"\x00\x01")),
    ];
    for (content, datum) in cases {
        let schema = SchemaDocument::primitive(content.clone());
        assert!(
            errors(&schema, &datum).is_empty(),
            "{:?} should accept {}",
            content,
            datum
        );
    }
}

#[test]
fn test_primitive_mismatch_reports_type_and_literal() {
    let schema = SchemaDocument::primitive(SchemaNodeContent::Int);
    assert_eq!(
        errors(&schema, &datum!("5")),
        vec!["at . expected type int, got string with value \"5\""]
    );
    assert_eq!(
        errors(&schema, &datum!([1, 2])),
        vec!["at . expected type int, got array with value [1, 2]"]
    );
    assert_eq!(
        errors(&schema, &datum!(null)),
        vec!["at . expected type int, got null"]
    );
}

#[test]
fn test_int_and_long_bounds() {
    let int = SchemaDocument::primitive(SchemaNodeContent::Int);
    assert!(errors(&int, &datum!((i32::MAX))).is_empty());
    assert!(errors(&int, &datum!((i32::MIN))).is_empty());
    assert_eq!(
        errors(&int, &datum!((i32::MAX as i64 + 1))),
        vec!["at . out of bound value 2147483648"]
    );

    let long = SchemaDocument::primitive(SchemaNodeContent::Long);
    assert!(errors(&long, &datum!((i32::MAX as i64 + 1))).is_empty());
    assert_eq!(
        errors(&long, &datum!((i64::MIN as i128 - 1))),
        vec!["at . out of bound value -9223372036854775809"]
    );
}

#[test]
fn test_fixed_size_is_enforced() {
    let mut b = SchemaBuilder::new();
    let root = b.fixed("MD5", 16);
    let schema = b.finish(root);

    assert!(errors(&schema, &datum!((vec![0u8; 16]))).is_empty());
    assert_eq!(
        errors(&schema, &datum!(b"short")),
        vec!["at . expected fixed with size 16, got b\"short\" with size 5"]
    );
    assert_eq!(
        errors(&schema, &datum!(1.5)),
        vec!["at . expected fixed with size 16, got float with value 1.5"]
    );
}

#[test]
fn test_enum_symbols() {
    let mut b = SchemaBuilder::new();
    let root = b.enumeration("Suit", ["SPADES", "HEARTS", "DIAMONDS", "CLUBS"]);
    let schema = b.finish(root);

    assert!(errors(&schema, &datum!("CLUBS")).is_empty());
    assert_eq!(
        errors(&schema, &datum!("spades")),
        vec![
            "at . expected enum with values [\"SPADES\", \"HEARTS\", \"DIAMONDS\", \"CLUBS\"], got string with value \"spades\""
        ]
    );
}

#[test]
fn test_array_errors_carry_element_index() {
    let mut b = SchemaBuilder::new();
    let string = b.string();
    let tags = b.array(string);
    let root = b.record("Post", [("tags", tags)]);
    let schema = b.finish(root);

    assert!(errors(&schema, &datum!({"tags": []})).is_empty());
    assert_eq!(
        errors(&schema, &datum!({"tags": ["a", "b", 3, "d", false]})),
        vec![
            "at .tags[2] expected type string, got int with value 3",
            "at .tags[4] expected type string, got boolean with value false",
        ]
    );
}

#[test]
fn test_record_fields_in_declaration_order() {
    let mut b = SchemaBuilder::new();
    let string = b.string();
    let int = b.int();
    let root = b.record("User", [("name", string), ("age", int)]);
    let schema = b.finish(root);

    // Datum key order does not matter; errors follow field declaration order.
    assert_eq!(
        errors(&schema, &datum!({"age": "old", "name": 1})),
        vec![
            "at .name expected type string, got int with value 1",
            "at .age expected type int, got string with value \"old\"",
        ]
    );
}

#[test]
fn test_record_ignores_undeclared_keys() {
    let mut b = SchemaBuilder::new();
    let string = b.string();
    let root = b.record("User", [("name", string)]);
    let schema = b.finish(root);

    assert!(errors(&schema, &datum!({"name": "Ann", "nickname": 7})).is_empty());
}

#[test]
fn test_missing_field_is_validated_as_null() {
    let mut b = SchemaBuilder::new();
    let null = b.null();
    let string = b.string();
    let optional = b.union([null, string]);
    let required = b.string();
    let root = b.record("User", [("email", optional), ("name", required)]);
    let schema = b.finish(root);

    assert_eq!(
        errors(&schema, &datum!({})),
        vec!["at .name expected type string, got null"]
    );
}

#[test]
fn test_nested_record_paths() {
    let mut b = SchemaBuilder::new();
    let city = b.string();
    let zip = b.int();
    let address = b.record("Address", [("city", city), ("zip", zip)]);
    let addresses = b.array(address);
    let root = b.record("Customer", [("addresses", addresses)]);
    let schema = b.finish(root);

    let datum = datum!({
        "addresses": [
            {"city": "Oslo", "zip": 150},
            {"city": "Bergen", "zip": "5003"},
        ]
    });
    assert_eq!(
        errors(&schema, &datum),
        vec!["at .addresses[1].zip expected type int, got string with value \"5003\""]
    );
}

#[test]
fn test_map_reports_key_and_value_errors() {
    let mut b = SchemaBuilder::new();
    let long = b.long();
    let root = b.map(long);
    let schema = b.finish(root);

    assert!(errors(&schema, &datum!({"a": 1, "b": 2})).is_empty());

    let mut map = Map::new();
    map.insert(ObjectKey::from("a"), datum!(1));
    map.insert(ObjectKey::from(true), datum!(2));
    map.insert(ObjectKey::from("hello world"), datum!("three"));
    assert_eq!(
        errors(&schema, &Value::Map(map)),
        vec![
            "at . unexpected key type 'boolean' in map",
            "at .hello world expected type long, got string with value \"three\"",
        ]
    );

    assert_eq!(
        errors(&schema, &datum!(["a"])),
        vec!["at . expected type map, got array with value [\"a\"]"]
    );
}

#[test]
fn test_error_set_groups_by_path() {
    let mut b = SchemaBuilder::new();
    let int = b.int();
    let root = b.map(int);
    let schema = b.finish(root);

    let mut map = Map::new();
    map.insert(ObjectKey::from(1), datum!(1));
    map.insert(ObjectKey::from(2), datum!(2));
    let result = validate(&schema, &Value::Map(map)).unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result.paths().count(), 1);
    assert!(result.is_failure());
}

#[test]
fn test_int_and_string_keys_with_same_rendering_group_together() {
    let mut b = SchemaBuilder::new();
    let int = b.int();
    let root = b.map(int);
    let schema = b.finish(root);

    let mut map = Map::new();
    map.insert(ObjectKey::from(1), datum!("x"));
    map.insert(ObjectKey::from("z"), datum!("y"));
    map.insert(ObjectKey::from("1"), datum!("w"));
    let result = validate(&schema, &Value::Map(map)).unwrap();

    let paths: Vec<_> = result.paths().map(|p| p.to_string()).collect();
    assert_eq!(paths, vec![".", ".1", ".z"]);
    assert_eq!(
        result.errors(),
        vec![
            "at . unexpected key type 'int' in map",
            "at .1 expected type int, got string with value \"x\"",
            "at .1 expected type int, got string with value \"w\"",
            "at .z expected type int, got string with value \"y\"",
        ]
    );
}
