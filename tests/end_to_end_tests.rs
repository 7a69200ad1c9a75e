//! End-to-end tests over the pure processing API: the same pipeline the CLI
//! drives, minus the terminal handling.

use serde_json::Value;

use apex::api::{process, OutputFormat, ProcessArgs};
use apex::parser::Resolver;

fn args(content: &str, format: OutputFormat) -> ProcessArgs {
    ProcessArgs {
        content: content.to_string(),
        source_name: String::new(),
        format,
        pretty: false,
    }
}

fn run_model(content: &str) -> Value {
    let output = process(&args(content, OutputFormat::Model), None).expect("process");
    serde_json::from_str(&output).expect("valid JSON")
}

#[test]
fn model_output_for_a_minimal_namespace() {
    let value = run_model("namespace \"example\"");
    assert_eq!(value, serde_json::json!({ "name": "example" }));
}

#[test]
fn model_output_for_a_type_with_scalar_fields() {
    let value = run_model("namespace \"m\"  type Person { name: string  age: u32 }");
    let fields = &value["types"][0]["fields"];
    assert_eq!(fields[0]["type"]["Scalar"], "STRING");
    assert_eq!(fields[1]["type"]["Scalar"], "U32");
}

#[test]
fn tokens_output_lists_the_stream() {
    let output = process(&args("namespace \"m\"", OutputFormat::Tokens), None).expect("process");
    let value: Value = serde_json::from_str(&output).expect("valid JSON");
    let kinds: Vec<&str> = value["tokens"]
        .as_array()
        .expect("token array")
        .iter()
        .map(|t| t["kind"].as_str().expect("kind"))
        .collect();
    assert_eq!(kinds, vec!["NAME", "STRING", "EOF"]);
}

#[test]
fn ast_output_wraps_the_document() {
    let output = process(&args("namespace \"m\"", OutputFormat::Ast), None).expect("process");
    let value: Value = serde_json::from_str(&output).expect("valid JSON");
    assert!(value["document"]["definitions"].is_array());
}

#[test]
fn syntax_errors_short_circuit_with_a_position() {
    let result = process(&args("type T {", OutputFormat::Model), None);
    let err = result.expect_err("expected a syntax error");
    let errors = err.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].positions.len(), 1);

    let rendered = serde_json::to_value(&errors).expect("serialize errors");
    assert!(rendered[0]["message"].is_string());
    assert!(rendered[0]["positions"][0].is_number());
    assert!(rendered[0]["locations"][0]["line"].is_number());
    assert!(rendered[0]["locations"][0]["column"].is_number());
}

#[test]
fn validation_errors_come_back_as_a_batch() {
    let content = "namespace \"m\"  enum E { A = 0  B = 0  C = 0 }";
    let err = process(&args(content, OutputFormat::Model), None)
        .expect_err("expected validation errors");
    let errors = err.errors();
    assert_eq!(errors.len(), 2);
    for error in &errors {
        assert!(error.message.contains("duplicate index 0 in enum \"E\""));
    }
}

#[test]
fn error_json_omits_empty_position_lists() {
    let err = process(&args("type T { x: string }", OutputFormat::Model), None)
        .expect_err("no namespace");
    let rendered = serde_json::to_value(err.errors()).expect("serialize");
    assert_eq!(rendered[0]["message"], "no namespace found");
    assert!(rendered[0].get("positions").is_none());
    assert!(rendered[0].get("locations").is_none());
}

#[test]
fn resolver_is_threaded_through_the_pipeline() {
    struct Fixed;
    impl Resolver for Fixed {
        fn resolve(&self, _location: &str, _from: &str) -> Result<String, apex::Error> {
            Ok("type Shared { id: string }".to_string())
        }
    }

    let content = "namespace \"m\"  import { Shared } from \"lib\"  type T { s: Shared }";
    let output =
        process(&args(content, OutputFormat::Model), Some(&Fixed)).expect("process");
    let value: Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(value["types"][0]["fields"][0]["type"]["Named"]["name"], "Shared");
}

#[test]
fn pretty_output_is_multiline() {
    let mut pretty = args("namespace \"m\"", OutputFormat::Model);
    pretty.pretty = true;
    let output = process(&pretty, None).expect("process");
    assert!(output.contains('\n'));
}
