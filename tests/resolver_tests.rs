//! File-system resolver tests over real on-disk layouts.

use std::fs;

use tempfile::tempdir;

use apex::model::convert;
use apex::parser::Resolver;
use apex::resolve::FsResolver;
use apex::{parse, validate, ParseOptions, RULES};

#[test]
fn resolves_a_bare_location_with_the_apex_extension() {
    let root = tempdir().expect("tempdir");
    fs::write(
        root.path().join("common.apex"),
        "type Shared { id: string }",
    )
    .expect("write");

    let resolver = FsResolver::new(root.path());
    let text = resolver.resolve("common", "").expect("resolve");
    assert!(text.contains("Shared"));
}

#[test]
fn resolves_an_exact_file_name() {
    let root = tempdir().expect("tempdir");
    fs::write(root.path().join("exact.apex"), "type A { x: string }").expect("write");

    let resolver = FsResolver::new(root.path());
    assert!(resolver.resolve("exact.apex", "").is_ok());
}

#[test]
fn resolves_a_directory_through_its_index() {
    let root = tempdir().expect("tempdir");
    fs::create_dir(root.path().join("lib")).expect("mkdir");
    fs::write(
        root.path().join("lib").join("index.apex"),
        "type FromIndex { x: string }",
    )
    .expect("write");

    let resolver = FsResolver::new(root.path());
    let text = resolver.resolve("lib", "").expect("resolve");
    assert!(text.contains("FromIndex"));
}

#[test]
fn missing_locations_fail() {
    let root = tempdir().expect("tempdir");
    let resolver = FsResolver::new(root.path());
    let error = resolver.resolve("nowhere", "").expect_err("missing");
    assert!(error.message.contains("nowhere"));
}

#[test]
fn imports_resolve_against_the_root_through_the_whole_pipeline() {
    let root = tempdir().expect("tempdir");
    fs::write(
        root.path().join("common.apex"),
        "type Shared { id: string }",
    )
    .expect("write");

    let resolver = FsResolver::new(root.path());
    let options = ParseOptions {
        resolver: Some(&resolver),
        ..Default::default()
    };
    let document = parse(
        "namespace \"m\"  import { Shared } from \"common\"  type T { s: Shared }",
        options,
    )
    .expect("parse");

    assert!(validate(&document, RULES).is_empty());
    let ns = convert(&document).expect("convert");
    assert_eq!(ns.imports[0].from, "common");
}

#[test]
fn nested_imports_resolve_recursively() {
    let root = tempdir().expect("tempdir");
    fs::write(
        root.path().join("outer.apex"),
        "import { Inner } from \"inner\"  type Outer { i: Inner }",
    )
    .expect("write");
    fs::write(root.path().join("inner.apex"), "type Inner { n: i32 }").expect("write");

    let resolver = FsResolver::new(root.path());
    let options = ParseOptions {
        resolver: Some(&resolver),
        ..Default::default()
    };
    let document = parse(
        "namespace \"m\"  import { Outer } from \"outer\"  type T { o: Outer }",
        options,
    )
    .expect("parse");

    assert_eq!(document.imported.len(), 3);
    assert!(validate(&document, RULES).is_empty());
}

#[test]
fn unresolvable_imports_fail_the_parse() {
    let root = tempdir().expect("tempdir");
    let resolver = FsResolver::new(root.path());
    let options = ParseOptions {
        resolver: Some(&resolver),
        ..Default::default()
    };
    let error = parse("import { X } from \"missing\"", options).expect_err("unresolved");
    assert!(error.message.contains("Unable to resolve import \"missing\""));
}
