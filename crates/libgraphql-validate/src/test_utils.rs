use crate::Variables;
use crate::ast;
use crate::coercion::CoercionError;
use crate::coercion::coerce_argument_values;
use crate::coercion::coerce_variable_values;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::types::ScalarCoercion;
use crate::validation::ValidationResult;
use std::sync::Arc;

/// A schema exercising input coercion: an input object with nullable,
/// list, non-null and custom-scalar fields, plus fields taking each kind of
/// argument.
pub(crate) const VARIABLES_SCHEMA_SDL: &str = r#"
    scalar ComplexScalar

    input TestInputObject {
      a: String
      b: [String]
      c: String!
      d: ComplexScalar
    }

    type TestType {
      fieldWithObjectInput(input: TestInputObject): String
      fieldWithNullableStringInput(input: String): String
      fieldWithNonNullableStringInput(input: String!): String
      fieldWithDefaultArgumentValue(input: String = "Hello World"): String
    }

    schema {
      query: TestType
    }
"#;

/// A small pets-themed schema for validation rule tests.
pub(crate) const PETS_SCHEMA_SDL: &str = r#"
    enum DogCommand { SIT, HEEL, DOWN }

    interface Pet {
      name: String
    }

    type Dog implements Pet {
      name: String
      nickname: String
      barkVolume: Int
      doesKnowCommand(dogCommand: DogCommand!): Boolean!
      isHousetrained(atOtherHomes: Boolean = true): Boolean!
      owner: Human
    }

    type Cat implements Pet {
      name: String
      meowVolume: Int
    }

    union CatOrDog = Cat | Dog

    type Human {
      name: String
      pets: [Pet!]!
    }

    input ComplexInput {
      requiredField: Boolean!
      intField: Int
      stringListField: [String]
    }

    type ComplicatedArgs {
      intArgField(intArg: Int): String
      nonNullIntArgField(nonNullIntArg: Int!): String
      stringListArgField(stringListArg: [String]): String
      complexArgField(complexArg: ComplexInput): String
      enumArgField(enumArg: DogCommand): String
    }

    type Query {
      dog: Dog
      pet: Pet
      catOrDog: CatOrDog
      human(id: ID): Human
      complicatedArgs: ComplicatedArgs
    }
"#;

/// Maps the serialized form `"SerializedValue"` to the internal form
/// `"DeserializedValue"` and rejects everything else.
#[derive(Debug)]
pub(crate) struct ComplexScalar;
impl ScalarCoercion for ComplexScalar {
    fn serialize(&self, value: &serde_json::Value) -> Option<serde_json::Value> {
        if value == "DeserializedValue" {
            Some(serde_json::Value::from("SerializedValue"))
        } else {
            Some(value.clone())
        }
    }

    fn parse_value(&self, value: &serde_json::Value) -> Option<serde_json::Value> {
        (value == "SerializedValue").then(|| serde_json::Value::from("DeserializedValue"))
    }

    fn parse_literal(&self, value: &ast::Value) -> Option<serde_json::Value> {
        (value.as_str() == Some("SerializedValue"))
            .then(|| serde_json::Value::from("DeserializedValue"))
    }
}

pub(crate) fn variables_schema() -> Schema {
    SchemaBuilder::new()
        .add_scalar_coercion("ComplexScalar", Arc::new(ComplexScalar))
        .load_str(VARIABLES_SCHEMA_SDL)
        .expect("schema loads")
        .build()
        .expect("schema builds")
}

pub(crate) fn pets_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(PETS_SCHEMA_SDL)
        .expect("schema loads")
        .build()
        .expect("schema builds")
}

pub(crate) fn parse_document(source: &str) -> ast::Document {
    ast::Document::parse(source).expect("document parses")
}

/// Parse a literal by wrapping it in an argument position.
pub(crate) fn parse_literal(source: &str) -> ast::Value {
    let doc = parse_document(format!("{{ f(arg: {source}) }}").as_str());
    let op = doc.operation(None).expect("one operation");
    let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    field.arguments[0].value.clone()
}

pub(crate) fn messages(result: &ValidationResult) -> Vec<&str> {
    result.errors().iter().map(|err| err.message()).collect()
}

pub(crate) fn json_object(value: serde_json::Value) -> Variables {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected a JSON object, found {other}"),
    }
}

/// Coerce `inputs` for the document's only operation and then the arguments
/// of that operation's first (root) field selection.
pub(crate) fn first_field_arguments(
    schema: &Schema,
    query: &str,
    inputs: serde_json::Value,
) -> Result<Variables, CoercionError> {
    let doc = parse_document(query);
    let op = doc.operation(None).expect("one operation");
    let variables = coerce_variable_values(schema, op, &json_object(inputs))?;
    let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    let field_def = schema.query_type()
        .field(field.name.as_str())
        .expect("root field is defined");
    coerce_argument_values(schema, field_def, field, &variables)
}
