//! Validating datums decoded from JSON

use avro_document::Value;
use avro_schema::{SchemaBuilder, SchemaDocument, validate};
use serde_json::json;

/// `record Event { enum Kind kind; long at; map<double> metrics; union { null, array<string> } tags; }`
fn event() -> SchemaDocument {
    let mut b = SchemaBuilder::new();
    let kind = b.enumeration("Kind", ["click", "view"]);
    let at = b.long();
    let metric = b.double();
    let metrics = b.map(metric);
    let null = b.null();
    let tag = b.string();
    let tag_list = b.array(tag);
    let tags = b.union([null, tag_list]);
    let root = b.record(
        "Event",
        [("kind", kind), ("at", at), ("metrics", metrics), ("tags", tags)],
    );
    b.finish(root)
}

#[test]
fn test_json_datum_conforms() {
    let datum = Value::from(json!({
        "kind": "click",
        "at": 1_700_000_000_000u64,
        "metrics": {"latency": 12.5, "retries": 0},
        "tags": ["ui", "beta"],
    }));
    assert!(validate(&event(), &datum).unwrap().is_success());
}

#[test]
fn test_json_datum_errors() {
    let datum = Value::from(json!({
        "kind": "scroll",
        "at": u64::MAX,
        "metrics": {"latency": "fast"},
        "tags": ["ui", 7],
    }));
    assert_eq!(
        validate(&event(), &datum).unwrap().errors(),
        vec![
            "at .kind expected enum with values [\"click\", \"view\"], got string with value \"scroll\"",
            "at .at out of bound value 18446744073709551615",
            "at .metrics.latency expected type double, got string with value \"fast\"",
            "at .tags[1] expected type string, got int with value 7",
        ]
    );
}
