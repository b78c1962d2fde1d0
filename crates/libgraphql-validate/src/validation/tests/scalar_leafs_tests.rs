use crate::DocumentValidator;
use crate::ValidationResult;
use crate::loc::SourceLocation;
use crate::test_utils;
use crate::validation::ValidationRule;
use crate::validation::rules::ScalarLeafs;

fn validate(query: &str) -> ValidationResult {
    let schema = test_utils::pets_schema();
    let document = test_utils::parse_document(query);
    let rules: Vec<Box<dyn ValidationRule>> = vec![Box::new(ScalarLeafs)];
    DocumentValidator::validate(&schema, &document, Some(rules.as_slice()))
}

#[test]
fn valid_scalar_selection() {
    assert!(validate("fragment scalarSelection on Dog { barkVolume }").is_valid());
}

#[test]
fn object_type_missing_selection() {
    let result = validate("query directQueryOnObjectWithoutSubFields { human }");
    assert_eq!(
        test_utils::messages(&result),
        vec!["Field human of type Human must have a sub selection"],
    );
}

#[test]
fn interface_type_missing_selection() {
    let result = validate("{ human { pets } }");
    assert_eq!(
        test_utils::messages(&result),
        vec!["Field pets of type [Pet!]! must have a sub selection"],
    );
}

#[test]
fn valid_scalar_selection_with_args() {
    assert!(validate(r#"
        fragment scalarSelectionWithArgs on Dog {
          doesKnowCommand(dogCommand: SIT)
        }
    "#).is_valid());
}

#[test]
fn scalar_selection_not_allowed_on_boolean() {
    let result = validate("{ dog { isHousetrained { name } } }");
    assert_eq!(
        test_utils::messages(&result),
        vec!["Field isHousetrained of type Boolean! must not have a sub selection"],
    );
}

#[test]
fn scalar_selection_not_allowed_on_enum() {
    let schema = crate::schema::SchemaBuilder::new()
        .load_str(r#"
            enum FurColor { BROWN, BLACK }
            type Query { furColor: FurColor }
        "#)
        .and_then(crate::schema::SchemaBuilder::build)
        .expect("schema builds");
    let document = test_utils::parse_document("{ furColor { inHexdec } }");
    let rules: Vec<Box<dyn ValidationRule>> = vec![Box::new(ScalarLeafs)];
    let result = DocumentValidator::validate(&schema, &document, Some(rules.as_slice()));
    assert_eq!(
        test_utils::messages(&result),
        vec!["Field furColor of type FurColor must not have a sub selection"],
    );
}

#[test]
fn reports_the_field_location() {
    let result = validate("{ dog { name { first } } }");
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].locations(), &[SourceLocation::new(1, 9)]);
}

#[test]
fn unknown_fields_are_not_reported() {
    assert!(validate("{ dog { unknownField { a } } }").is_valid());
}

#[test]
fn typename_is_a_leaf() {
    let result = validate("{ dog { __typename { x } } }");
    assert_eq!(
        test_utils::messages(&result),
        vec!["Field __typename of type String! must not have a sub selection"],
    );
    assert!(validate("{ catOrDog { __typename } }").is_valid());
}

#[test]
fn checks_fields_inside_fragments() {
    let result = validate(r#"
        {
          catOrDog {
            ... on Dog { owner }
            ... { __typename }
          }
        }
    "#);
    assert_eq!(
        test_utils::messages(&result),
        vec!["Field owner of type Human must have a sub selection"],
    );
}

#[test]
fn check_field_can_be_used_directly() {
    let schema = test_utils::pets_schema();
    let document = test_utils::parse_document("{ dog }");
    let op = document.operation(None).expect("one operation");
    let crate::ast::Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field selection");
    };

    let dog_type = crate::types::TypeRef::named("Dog");
    let err = ScalarLeafs::check_field(field, Some(&dog_type), &schema)
        .expect("dog needs a selection");
    assert_eq!(err.message(), "Field dog of type Dog must have a sub selection");
    assert!(ScalarLeafs::check_field(field, None, &schema).is_none());
}
