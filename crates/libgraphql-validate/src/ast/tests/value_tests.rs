use crate::ast::Value;
use indexmap::IndexMap;

fn object(fields: &[(&str, Value)]) -> Value {
    Value::Object(
        fields.iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect::<IndexMap<_, _>>()
    )
}

#[test]
fn prints_scalars_canonically() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Int(-42).to_string(), "-42");
    assert_eq!(Value::Float(1.5).to_string(), "1.5");
    assert_eq!(Value::Float(2.0).to_string(), "2.0");
    assert_eq!(Value::Boolean(true).to_string(), "true");
    assert_eq!(Value::Enum("RED".to_string()).to_string(), "RED");
    assert_eq!(Value::Variable("input".to_string()).to_string(), "$input");
}

#[test]
fn prints_strings_with_escapes() {
    assert_eq!(Value::String("foo".to_string()).to_string(), "\"foo\"");
    assert_eq!(
        Value::String("a \"quoted\"\nline".to_string()).to_string(),
        r#""a \"quoted\"\nline""#,
    );
}

#[test]
fn prints_lists_and_objects() {
    let list = Value::List(vec![
        Value::String("foo".to_string()),
        Value::String("bar".to_string()),
        Value::String("baz".to_string()),
    ]);
    assert_eq!(list.to_string(), r#"["foo", "bar", "baz"]"#);

    let obj = object(&[
        ("a", Value::String("foo".to_string())),
        ("b", Value::List(vec![Value::Int(1)])),
        ("c", Value::Null),
    ]);
    assert_eq!(obj.to_string(), r#"{a: "foo", b: [1], c: null}"#);
    assert_eq!(Value::List(vec![]).to_string(), "[]");
    assert_eq!(object(&[]).to_string(), "{}");
}

#[test]
fn converts_variable_free_literals_to_json() {
    let obj = object(&[
        ("a", Value::String("foo".to_string())),
        ("b", Value::List(vec![Value::Int(1), Value::Boolean(false)])),
        ("c", Value::Enum("RED".to_string())),
        ("d", Value::Null),
    ]);
    assert_eq!(
        obj.to_json(),
        Some(serde_json::json!({
            "a": "foo",
            "b": [1, false],
            "c": "RED",
            "d": null,
        })),
    );
}

#[test]
fn literals_containing_variables_have_no_json_form() {
    let obj = object(&[
        ("a", Value::List(vec![Value::Variable("v".to_string())])),
    ]);
    assert_eq!(obj.to_json(), None);
}
