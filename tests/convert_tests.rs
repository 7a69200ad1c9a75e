//! Converter tests: the lowered semantic model and its JSON shape.

use serde_json::json;

use apex::model::{convert, Kind, Namespace, Scalar, TypeRef, Value};
use apex::{parse, ParseOptions};

fn convert_ok(text: &str) -> Namespace {
    let document = parse(text, ParseOptions::default()).expect("parse");
    convert(&document).expect("convert")
}

fn convert_err(text: &str) -> Vec<apex::Error> {
    let document = parse(text, ParseOptions::default()).expect("parse");
    convert(&document).expect_err("expected conversion errors")
}

#[test]
fn minimal_namespace() {
    let ns = convert_ok("namespace \"example\"");
    assert_eq!(ns.name, "example");
    assert!(ns.types.is_empty());
    assert!(ns.interfaces.is_empty());
    assert!(ns.functions.is_empty());
    assert!(ns.aliases.is_empty());
    assert!(ns.enums.is_empty());
    assert!(ns.unions.is_empty());
}

#[test]
fn missing_namespace_is_a_conversion_error() {
    let errors = convert_err("type T { x: string }");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "no namespace found");
}

#[test]
fn type_with_scalar_fields() {
    let ns = convert_ok("namespace \"m\"  type Person { name: string  age: u32 }");
    assert_eq!(ns.types.len(), 1);
    let person = &ns.types[0];
    assert_eq!(person.name, "Person");
    assert_eq!(person.fields.len(), 2);
    assert_eq!(person.fields[0].ty, TypeRef::Scalar(Scalar::String));
    assert_eq!(person.fields[1].ty, TypeRef::Scalar(Scalar::U32));
}

#[test]
fn optional_and_list_compose() {
    let ns = convert_ok("namespace \"m\"  type Group { members: [string]?  label: string? }");
    let group = &ns.types[0];

    let TypeRef::Optional(optional) = &group.fields[0].ty else {
        panic!("expected optional");
    };
    let TypeRef::List(list) = &optional.ty else {
        panic!("expected list inside optional");
    };
    assert_eq!(list.ty, TypeRef::Scalar(Scalar::String));

    let TypeRef::Optional(optional) = &group.fields[1].ty else {
        panic!("expected optional");
    };
    assert_eq!(optional.ty, TypeRef::Scalar(Scalar::String));
}

#[test]
fn enum_values_keep_indexes_and_display() {
    let ns = convert_ok("namespace \"m\"  enum Color { RED = 0 as \"Red\"  GREEN = 1  BLUE = 2 }");
    assert_eq!(ns.enums.len(), 1);
    let color = &ns.enums[0];
    let indexes: Vec<u64> = color.values.iter().map(|v| v.index).collect();
    assert_eq!(indexes, vec![0, 1, 2]);
    assert_eq!(color.values[0].display.as_deref(), Some("Red"));
    assert!(color.values[1].display.is_none());
    assert!(color.values[2].display.is_none());
}

#[test]
fn unary_operations_promote_their_parameter() {
    let ns = convert_ok(
        "namespace \"m\"\n\
         type GreetReq { name: string }\n\
         type GreetResp { message: string }\n\
         interface { greet{ req: GreetReq }: GreetResp }",
    );
    let operation = &ns.interfaces[0].operations[0];
    assert!(operation.parameters.is_empty());
    let unary = operation.unary.as_ref().expect("unary parameter");
    assert_eq!(unary.name, "req");
    assert_eq!(
        unary.ty,
        TypeRef::Named(apex::model::Named {
            kind: Kind::Type,
            name: "GreetReq".to_string()
        })
    );
    assert_eq!(
        operation.returns,
        Some(TypeRef::Named(apex::model::Named {
            kind: Kind::Type,
            name: "GreetResp".to_string()
        }))
    );
}

#[test]
fn void_returns_are_dropped() {
    let ns = convert_ok("namespace \"m\"  interface { fire(event: string) }");
    let operation = &ns.interfaces[0].operations[0];
    assert!(operation.returns.is_none());
    assert!(operation.unary.is_none());
    assert_eq!(operation.parameters.len(), 1);
}

#[test]
fn named_references_carry_their_kind() {
    let ns = convert_ok(
        "namespace \"m\"\n\
         alias Id = string\n\
         enum State { ON = 0  OFF = 1 }\n\
         type Thing { id: Id  state: State }\n\
         union Any = Thing | State",
    );
    let thing = &ns.types[0];
    assert!(
        matches!(&thing.fields[0].ty, TypeRef::Named(n) if n.kind == Kind::Alias && n.name == "Id")
    );
    assert!(
        matches!(&thing.fields[1].ty, TypeRef::Named(n) if n.kind == Kind::Enum && n.name == "State")
    );
    let union = &ns.unions[0];
    assert!(matches!(&union.types[0], TypeRef::Named(n) if n.kind == Kind::Type));
    assert!(matches!(&union.types[1], TypeRef::Named(n) if n.kind == Kind::Enum));
}

#[test]
fn functions_are_top_level_operations() {
    let ns = convert_ok("namespace \"m\"  func fetch(url: string): string");
    assert_eq!(ns.functions.len(), 1);
    assert_eq!(ns.functions[0].name, "fetch");
    assert_eq!(ns.functions[0].parameters.len(), 1);
    assert_eq!(ns.functions[0].returns, Some(TypeRef::Scalar(Scalar::String)));
}

#[test]
fn annotation_arguments_are_preserved() {
    let ns = convert_ok(
        "namespace \"m\"\n\
         directive @deprecated(reason: string) on FIELD | OPERATION\n\
         type T { f: string @deprecated(reason: \"use g\") }",
    );
    let annotation = &ns.types[0].fields[0].annotations[0];
    assert_eq!(annotation.name, "deprecated");
    assert_eq!(annotation.arguments[0].name, "reason");
    assert_eq!(
        annotation.arguments[0].value,
        Value::String("use g".to_string())
    );
}

#[test]
fn default_values_lower_to_semantic_values() {
    let ns = convert_ok(
        "namespace \"m\"\n\
         enum Mode { FAST = 0  SAFE = 1 }\n\
         type Config { retries: i32 = 3  mode: Mode = FAST  tags: [string] = [\"a\"] }",
    );
    let fields = &ns.types[0].fields;
    assert_eq!(fields[0].default_value, Some(Value::I64(3)));
    assert_eq!(
        fields[1].default_value,
        Some(Value::Reference(apex::model::Reference {
            name: "FAST".to_string()
        }))
    );
    assert!(matches!(
        &fields[2].default_value,
        Some(Value::ListValue(l)) if l.values == vec![Value::String("a".to_string())]
    ));
}

#[test]
fn unknown_type_reference_is_a_conversion_error() {
    let errors = convert_err("namespace \"m\"  type T { x: Unknown }");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "unknown type Unknown");
}

#[test]
fn imported_names_resolve_during_conversion() {
    let resolver = |_location: &str, _from: &str| -> Result<String, apex::Error> {
        Ok("type Shared { id: string }".to_string())
    };
    let options = ParseOptions {
        resolver: Some(&resolver),
        ..Default::default()
    };
    let document = parse(
        "namespace \"m\"  import { Shared } from \"lib\"  type T { s: Shared }",
        options,
    )
    .expect("parse");
    let ns = convert(&document).expect("convert");

    // the imported type resolves but is not emitted
    assert_eq!(ns.types.len(), 1);
    assert_eq!(ns.imports.len(), 1);
    assert_eq!(ns.imports[0].from, "lib");
    assert!(
        matches!(&ns.types[0].fields[0].ty, TypeRef::Named(n) if n.kind == Kind::Type && n.name == "Shared")
    );
}

#[test]
fn directives_lower_locations_and_requires() {
    let ns = convert_ok(
        "namespace \"m\"\n\
         directive @b on NAMESPACE\n\
         directive @a(limit: u32) on TYPE | FIELD require @b NAMESPACE | SELF",
    );
    let directive = &ns.directives[1];
    assert_eq!(directive.name, "a");
    let rendered: Vec<String> = directive.locations.iter().map(|l| l.to_string()).collect();
    assert_eq!(rendered, vec!["TYPE", "FIELD"]);
    assert_eq!(directive.require.len(), 1);
    assert_eq!(directive.require[0].directive, "b");
    let rendered: Vec<String> = directive.require[0]
        .locations
        .iter()
        .map(|l| l.to_string())
        .collect();
    assert_eq!(rendered, vec!["NAMESPACE", "SELF"]);
}

#[test]
fn serialized_namespace_uses_tagged_unions_and_omits_empties() {
    let ns = convert_ok(
        "namespace \"m\"\n\
         \"A person\"\n\
         type Person { name: string  nickname: string? }",
    );
    let value = serde_json::to_value(&ns).expect("serialize");

    assert_eq!(value["name"], json!("m"));
    // empty collections are omitted entirely
    assert!(value.get("interfaces").is_none());
    assert!(value.get("functions").is_none());
    assert!(value.get("imports").is_none());

    let person = &value["types"][0];
    assert_eq!(person["description"], json!("A person"));
    assert_eq!(person["fields"][0]["type"], json!({ "Scalar": "STRING" }));
    assert_eq!(
        person["fields"][1]["type"],
        json!({ "Optional": { "type": { "Scalar": "STRING" } } })
    );
}

#[test]
fn serialized_values_use_lowercase_primitive_tags() {
    let ns = convert_ok(
        "namespace \"m\"\n\
         directive @opts(s: string, n: i32, b: bool) on FIELD\n\
         type T { f: string @opts(s: \"x\", n: 7, b: true) }",
    );
    let value = serde_json::to_value(&ns).expect("serialize");
    let arguments = &value["types"][0]["fields"][0]["annotations"][0]["arguments"];
    assert_eq!(arguments[0]["value"], json!({ "string": "x" }));
    assert_eq!(arguments[1]["value"], json!({ "i64": 7 }));
    assert_eq!(arguments[2]["value"], json!({ "bool": true }));
}

#[test]
fn namespace_json_round_trips() {
    let ns = convert_ok(
        "namespace \"m\"\n\
         alias Id = string\n\
         enum State { ON = 0  OFF = 1 as \"Off\" }\n\
         type Thing { id: Id  state: State = ON  history: [State] }\n\
         union Value = Thing | State\n\
         interface { get(id: Id): Thing  watch{ t: Thing }: stream State }\n\
         func ping(): bool",
    );
    let text = serde_json::to_string(&ns).expect("serialize");
    let back: Namespace = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(ns, back);
}

#[test]
fn scalar_tags_cover_the_closed_set() {
    let ns = convert_ok(
        "namespace \"m\"\n\
         type Everything {\n\
           a: string  b: bool  c: i8  d: i16  e: i32  f: i64\n\
           g: u8  h: u16  i: u32  j: u64  k: f32  l: f64\n\
           m: bytes  n: datetime  o: any  p: raw\n\
         }",
    );
    let value = serde_json::to_value(&ns).expect("serialize");
    let tags: Vec<String> = (0..16)
        .map(|i| {
            value["types"][0]["fields"][i]["type"]["Scalar"]
                .as_str()
                .expect("scalar tag")
                .to_string()
        })
        .collect();
    assert_eq!(
        tags,
        vec![
            "STRING", "BOOL", "I8", "I16", "I32", "I64", "U8", "U16", "U32", "U64", "F32", "F64",
            "BYTES", "DATETIME", "ANY", "RAW"
        ]
    );
}
