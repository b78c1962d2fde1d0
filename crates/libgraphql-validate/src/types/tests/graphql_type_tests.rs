use crate::ast;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::TypeRef;
use crate::types::UnionType;
use crate::types::typename_field;
use serde_json::json;

#[test]
fn enum_type_parses_declared_values_only() {
    let enum_type = EnumType::new("Color")
        .add_value(EnumValue::new("RED"))
        .and_then(|enum_type| enum_type.add_value(EnumValue::new("GREEN")))
        .expect("values are unique");

    assert_eq!(
        enum_type.parse_literal(&ast::Value::Enum("RED".to_string())),
        Some(json!("RED")),
    );
    assert_eq!(enum_type.parse_literal(&ast::Value::Enum("BLUE".to_string())), None);
    assert_eq!(enum_type.parse_literal(&ast::Value::String("RED".to_string())), None);
    assert_eq!(enum_type.parse_value(&json!("GREEN")), Some(json!("GREEN")));
    assert_eq!(enum_type.parse_value(&json!(0)), None);
    assert_eq!(
        enum_type.values().keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["RED", "GREEN"],
    );
}

#[test]
fn enum_type_rejects_duplicate_values() {
    let result = EnumType::new("Color")
        .add_value(EnumValue::new("RED"))
        .and_then(|enum_type| enum_type.add_value(EnumValue::new("RED")));
    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateEnumValueDefinition { enum_name, value_name })
            if enum_name == "Color" && value_name == "RED"
    ));
}

#[test]
fn object_type_rejects_duplicate_fields_and_interfaces() {
    let obj = ObjectType::new("Dog")
        .add_field(Field::new("name", TypeRef::named("String")))
        .expect("first field");

    let dup_field = obj.clone().add_field(Field::new("name", TypeRef::named("String")));
    assert!(matches!(
        dup_field,
        Err(SchemaBuildError::DuplicateFieldNameDefinition { type_name, field_name })
            if type_name == "Dog" && field_name == "name"
    ));

    let dup_iface = obj.implement("Pet").and_then(|obj| obj.implement("Pet"));
    assert!(matches!(
        dup_iface,
        Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration { .. })
    ));
}

#[test]
fn field_rejects_duplicate_parameters() {
    let result = Field::new("greet", TypeRef::named("String"))
        .add_parameter(Parameter::new("name", TypeRef::named("String")))
        .and_then(|field| field.add_parameter(Parameter::new("name", TypeRef::named("ID"))));
    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateParameterDefinition { field_name, parameter_name })
            if field_name == "greet" && parameter_name == "name"
    ));
}

#[test]
fn input_object_and_union_reject_duplicates() {
    let input_obj = InputObjectType::new("Filter")
        .add_field(InputField::new("limit", TypeRef::named("Int")))
        .and_then(|input_obj| input_obj.add_field(InputField::new("limit", TypeRef::named("Int"))));
    assert!(matches!(
        input_obj,
        Err(SchemaBuildError::DuplicateFieldNameDefinition { .. })
    ));

    let union_type = UnionType::new("CatOrDog")
        .add_member("Cat")
        .and_then(|union_type| union_type.add_member("Cat"));
    assert!(matches!(
        union_type,
        Err(SchemaBuildError::DuplicateUnionMember { type_name, member_name })
            if type_name == "CatOrDog" && member_name == "Cat"
    ));
}

#[test]
fn classifies_type_kinds() {
    let enum_type: GraphQLType = EnumType::new("Color").into();
    let input_obj: GraphQLType = InputObjectType::new("Filter").into();
    let obj: GraphQLType = ObjectType::new("Dog").into();
    let union_type: GraphQLType = UnionType::new("CatOrDog").into();

    assert!(enum_type.is_leaf() && enum_type.is_input_type() && !enum_type.is_composite());
    assert!(input_obj.is_input_type() && !input_obj.is_leaf() && !input_obj.is_composite());
    assert!(obj.is_composite() && !obj.is_input_type() && !obj.is_leaf());
    assert!(union_type.is_composite() && union_type.fields().is_none());

    assert_eq!(obj.kind(), GraphQLTypeKind::Object);
    assert_eq!(input_obj.kind().to_string(), "InputObject");
}

#[test]
fn typename_field_is_a_non_null_string() {
    let field = typename_field();
    assert_eq!(field.name(), "__typename");
    assert_eq!(field.type_ref().to_string(), "String!");
    assert!(field.parameters().is_empty());
}
