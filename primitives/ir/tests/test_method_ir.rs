//! Integration tests for the method IR

use methodbook_ir::*;

#[test]
fn test_method_def_constructors() {
    assert_eq!(MethodDef::instance("foo").kind, MethodKind::InstanceMethod);
    assert_eq!(MethodDef::class("foo").kind, MethodKind::ClassMethod);
    assert_eq!(MethodDef::property("foo").kind, MethodKind::Property);

    let method = MethodDef::instance("foo");
    assert_eq!(method.selector(), "foo");
    assert!(method.parent().is_none());
    assert!(!method.has_comment());
}

#[test]
fn test_unregistered_record_omits_parent_in_json() {
    let method = MethodDef::instance("description").with_result_type("NSString *");
    let json = serde_json::to_value(&method).expect("method should serialize");

    assert_eq!(json["selector"], "description");
    assert_eq!(json["kind"], "InstanceMethod");
    assert!(json.get("parent").is_none());
    assert!(json.get("comment").is_none());
}

#[test]
fn test_json_without_optional_collections() {
    let json = r#"{ "selector": "count", "kind": "Property", "result_type": "NSUInteger" }"#;
    let method: MethodDef = serde_json::from_str(json).expect("minimal record should parse");

    assert_eq!(method.kind(), MethodKind::Property);
    assert!(method.arguments.is_empty());
    assert!(method.attributes.is_empty());
    assert!(method.source_infos.is_empty());
}

#[test]
fn test_source_infos_are_ordered_and_deduplicated() {
    let method = MethodDef::instance("foo")
        .with_source_info("B.h", 3)
        .with_source_info("A.h", 9)
        .with_source_info("B.h", 3);

    let files: Vec<_> = method.source_infos.iter().map(|s| s.file.as_str()).collect();
    assert_eq!(files, vec!["A.h", "B.h"]);
}
