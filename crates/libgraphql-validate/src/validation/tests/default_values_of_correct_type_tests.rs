use crate::DocumentValidator;
use crate::ValidationResult;
use crate::test_utils;
use crate::validation::ValidationRule;
use crate::validation::rules::DefaultValuesOfCorrectType;

fn validate(query: &str) -> ValidationResult {
    let schema = test_utils::pets_schema();
    let document = test_utils::parse_document(query);
    let rules: Vec<Box<dyn ValidationRule>> = vec![Box::new(DefaultValuesOfCorrectType)];
    DocumentValidator::validate(&schema, &document, Some(rules.as_slice()))
}

#[test]
fn variables_with_no_default_values() {
    assert!(validate("query NullableValues($a: Int, $b: String, $c: ComplexInput) { dog { name } }").is_valid());
}

#[test]
fn required_variables_without_default_values() {
    assert!(validate("query RequiredValues($a: Int!, $b: String!) { dog { name } }").is_valid());
}

#[test]
fn variables_with_valid_default_values() {
    assert!(validate(r#"
        query WithDefaultValues(
          $a: Int = 1,
          $b: String = "ok",
          $c: ComplexInput = { requiredField: true, intField: 3 }
          $d: [String] = "single"
        ) {
          dog { name }
        }
    "#).is_valid());
}

#[test]
fn no_required_variables_with_default_values() {
    let result = validate(r#"query UnreachableDefaultValues($a: Int! = 3, $b: String! = "default") { dog { name } }"#);
    assert_eq!(
        test_utils::messages(&result),
        vec![
            "Variable \"$a\" of type \"Int!\" is required and will not use the default value. \
            Perhaps you meant to use type \"Int\".",
            "Variable \"$b\" of type \"String!\" is required and will not use the default value. \
            Perhaps you meant to use type \"String\".",
        ],
    );
}

#[test]
fn variables_with_invalid_default_values() {
    let result = validate(r#"
        query InvalidDefaultValues($a: Int = "one", $b: String = 4) {
          dog { name }
        }
    "#);
    assert_eq!(
        test_utils::messages(&result),
        vec![
            "Variable \"$a\" of type \"Int\" has invalid default value \"one\".\
            \nExpected type \"Int\", found \"one\".",
            "Variable \"$b\" of type \"String\" has invalid default value 4.\
            \nExpected type \"String\", found 4.",
        ],
    );
}

#[test]
fn complex_variables_missing_required_field() {
    let result = validate("query MissingRequiredField($a: ComplexInput = {intField: 3}) { dog { name } }");
    assert_eq!(
        test_utils::messages(&result),
        vec![
            "Variable \"$a\" of type \"ComplexInput\" has invalid default value {intField: 3}.\
            \nIn field \"requiredField\": Expected Boolean, found null",
        ],
    );
}

#[test]
fn list_variables_with_invalid_item() {
    let result = validate(r#"query InvalidItem($a: [String] = ["one", 2]) { dog { name } }"#);
    assert_eq!(
        test_utils::messages(&result),
        vec![
            "Variable \"$a\" of type \"[String]\" has invalid default value [\"one\", 2].\
            \nIn element 1: Expected type \"String\", found 2.",
        ],
    );
}
