use crate::coercion::CoercionError;
use crate::coercion::EnumShape;
use crate::coercion::Materialized;
use crate::coercion::Materializer;
use crate::coercion::MemberShape;
use crate::coercion::ObjectShape;
use crate::coercion::PrimitiveKind;
use crate::coercion::Shape;
use crate::coercion::ShapeRegistry;
use crate::test_utils;
use crate::types::TypeRef;
use indexmap::IndexMap;
use serde_json::json;

fn nullable(shape: Shape) -> Shape {
    Shape::Nullable(Box::new(shape))
}

fn list(shape: Shape) -> Shape {
    Shape::List(Box::new(shape))
}

fn registry() -> ShapeRegistry {
    let mut registry = ShapeRegistry::new();
    registry.register_enum(EnumShape::from_names("Color", ["RED", "GREEN", "BLUE"]));
    registry.register_object(
        ObjectShape::new("Point")
            .with_member(MemberShape::new("x", Shape::Primitive(PrimitiveKind::Int)))
            .with_member(MemberShape::new("y", Shape::Primitive(PrimitiveKind::Int)))
            .with_member(
                MemberShape::new("label", nullable(Shape::Primitive(PrimitiveKind::String)))
                    .with_default_value(json!("origin")),
            )
            .with_member(MemberShape::new("color", nullable(Shape::Enum("Color".to_string())))),
    );
    registry
}

#[test]
fn matches_object_members_ignoring_case() {
    let registry = registry();
    let materializer = Materializer::new(&registry);
    let point = materializer
        .materialize(&Shape::Object("Point".to_string()), &json!({"X": 2.5, "y": " 3 ", "extra": 1}))
        .expect("point materializes");

    let mut expected = IndexMap::new();
    expected.insert("x".to_string(), Materialized::Int(2));
    expected.insert("y".to_string(), Materialized::Int(3));
    expected.insert("label".to_string(), Materialized::String("origin".to_string()));
    expected.insert("color".to_string(), Materialized::Null);
    assert_eq!(point, Materialized::Object(expected));
}

#[test]
fn reports_member_errors_with_their_path() {
    let registry = registry();
    let materializer = Materializer::new(&registry);
    let err = materializer
        .materialize(&Shape::Object("Point".to_string()), &json!({"x": "left", "y": 0}))
        .expect_err("x is not an integer");
    assert_eq!(
        err,
        CoercionError::InMember {
            member_name: "x".to_string(),
            source: Box::new(CoercionError::PrimitiveConversion {
                value: json!("left"),
                target: PrimitiveKind::Int,
            }),
        },
    );
}

#[test]
fn rejects_non_object_sources_for_objects() {
    let registry = registry();
    let materializer = Materializer::new(&registry);
    assert_eq!(
        materializer.materialize(&Shape::Object("Point".to_string()), &json!([1, 2])),
        Err(CoercionError::ExpectedObject {
            shape_name: "Point".to_string(),
            value: json!([1, 2]),
        }),
    );
    assert_eq!(
        materializer.materialize(&Shape::Object("Point".to_string()), &json!(null)),
        Ok(Materialized::Null),
    );
}

#[test]
fn matches_enum_members_by_name_or_value() {
    let registry = registry();
    let materializer = Materializer::new(&registry);
    let color = Shape::Enum("Color".to_string());
    let member = |name: &str, value: i64| Materialized::Enum {
        name: name.to_string(),
        value,
    };

    assert_eq!(materializer.materialize(&color, &json!("green")), Ok(member("GREEN", 1)));
    assert_eq!(materializer.materialize(&color, &json!("2")), Ok(member("BLUE", 2)));
    assert_eq!(materializer.materialize(&color, &json!(0)), Ok(member("RED", 0)));
    assert_eq!(materializer.materialize(&color, &json!(null)), Ok(member("RED", 0)));

    let err = materializer.materialize(&color, &json!("PURPLE")).expect_err("no such member");
    assert_eq!(err.to_string(), "Unknown value 'PURPLE' for enum 'Color'.");
    assert!(matches!(
        materializer.materialize(&color, &json!(7)),
        Err(CoercionError::UnknownEnumValue { .. })
    ));
}

#[test]
fn nullable_enums_and_lists_keep_their_null_meaning() {
    let registry = registry();
    let materializer = Materializer::new(&registry);

    assert_eq!(
        materializer.materialize(&nullable(Shape::Enum("Color".to_string())), &json!(null)),
        Ok(Materialized::Enum { name: "RED".to_string(), value: 0 }),
    );
    assert_eq!(
        materializer.materialize(&nullable(list(Shape::Any)), &json!(null)),
        Ok(Materialized::List(vec![])),
    );
    assert_eq!(
        materializer.materialize(&nullable(Shape::Primitive(PrimitiveKind::Int)), &json!(null)),
        Ok(Materialized::Null),
    );
}

#[test]
fn schema_shapes_apply_enum_and_list_null_rules() {
    let schema = test_utils::variables_schema();
    let materializer = Materializer::new(schema.input_shapes());
    let input = Shape::from_type_ref(&TypeRef::named("TestInputObject"), &schema)
        .expect("TestInputObject is an input type");
    let materialized = materializer
        .materialize(&input, &json!({"a": "foo", "b": null, "c": "baz"}))
        .expect("input materializes");
    assert_eq!(
        materialized.as_object().expect("an object")["b"],
        Materialized::List(vec![]),
    );

    let pets = test_utils::pets_schema();
    let dog_command = Shape::from_type_ref(&TypeRef::named("DogCommand"), &pets)
        .expect("DogCommand is an input type");
    assert_eq!(
        Materializer::new(pets.input_shapes()).materialize(&dog_command, &json!(null)),
        Ok(Materialized::Enum { name: "SIT".to_string(), value: 0 }),
    );
}

#[test]
fn materializes_lists() {
    let registry = registry();
    let materializer = Materializer::new(&registry);
    let ints = list(Shape::Primitive(PrimitiveKind::Int));

    assert_eq!(materializer.materialize(&ints, &json!(null)), Ok(Materialized::List(vec![])));
    assert_eq!(
        materializer.materialize(&ints, &json!([1, "2"])),
        Ok(Materialized::List(vec![Materialized::Int(1), Materialized::Int(2)])),
    );
    assert_eq!(
        materializer.materialize(&ints, &json!(1)),
        Err(CoercionError::ExpectedList { value: json!(1) }),
    );
    assert!(matches!(
        materializer.materialize(&ints, &json!([1, "two"])),
        Err(CoercionError::InElement { index: 1, .. })
    ));
}

#[test]
fn converts_primitives() {
    let registry = ShapeRegistry::new();
    let materializer = Materializer::new(&registry);
    let primitive = Shape::Primitive;

    assert_eq!(
        materializer.materialize(&primitive(PrimitiveKind::Boolean), &json!("TRUE")),
        Ok(Materialized::Boolean(true)),
    );
    assert_eq!(
        materializer.materialize(&primitive(PrimitiveKind::Boolean), &json!(0)),
        Ok(Materialized::Boolean(false)),
    );
    assert_eq!(
        materializer.materialize(&primitive(PrimitiveKind::Float), &json!("1.5")),
        Ok(Materialized::Float(1.5)),
    );
    assert_eq!(
        materializer.materialize(&primitive(PrimitiveKind::Long), &json!(" 42 ")),
        Ok(Materialized::Long(42)),
    );
    assert_eq!(
        materializer.materialize(&primitive(PrimitiveKind::Int), &json!(3.5)),
        Ok(Materialized::Int(4)),
    );
    assert_eq!(
        materializer.materialize(&primitive(PrimitiveKind::String), &json!(12)),
        Ok(Materialized::String("12".to_string())),
    );
    assert_eq!(
        materializer.materialize(&primitive(PrimitiveKind::Int), &json!(5_000_000_000i64)),
        Err(CoercionError::PrimitiveConversion {
            value: json!(5_000_000_000i64),
            target: PrimitiveKind::Int,
        }),
    );
    assert_eq!(
        materializer.materialize(&primitive(PrimitiveKind::Int), &json!(null)),
        Ok(Materialized::Null),
    );
}

#[test]
fn keeps_any_values_as_json() {
    let registry = ShapeRegistry::new();
    let materializer = Materializer::new(&registry);
    assert_eq!(
        materializer.materialize(&Shape::Any, &json!({"free": ["form"]})),
        Ok(Materialized::Json(json!({"free": ["form"]}))),
    );
    assert_eq!(materializer.materialize(&Shape::Any, &json!(null)), Ok(Materialized::Null));
}

#[test]
fn unregistered_shapes_are_an_error() {
    let registry = ShapeRegistry::new();
    let materializer = Materializer::new(&registry);
    assert_eq!(
        materializer.materialize(&Shape::Enum("Mood".to_string()), &json!("HAPPY")),
        Err(CoercionError::UnknownShape { shape_name: "Mood".to_string() }),
    );
}

#[test]
fn derives_shapes_from_schema_types() {
    let schema = test_utils::pets_schema();
    assert_eq!(
        Shape::from_type_ref(&TypeRef::non_null(TypeRef::named("ComplexInput")), &schema),
        Some(Shape::Object("ComplexInput".to_string())),
    );
    assert_eq!(
        Shape::from_type_ref(
            &TypeRef::list(TypeRef::non_null(TypeRef::named("ID"))),
            &schema,
        ),
        Some(nullable(list(Shape::Primitive(PrimitiveKind::String)))),
    );
    assert_eq!(Shape::from_type_ref(&TypeRef::named("Dog"), &schema), None);

    let complex_input = schema.input_shapes()
        .object_shape("ComplexInput")
        .expect("ComplexInput has a shape");
    let member_shapes = complex_input.members()
        .iter()
        .map(|member| (member.name(), member.shape().clone()))
        .collect::<Vec<_>>();
    assert_eq!(member_shapes, vec![
        ("requiredField", Shape::Primitive(PrimitiveKind::Boolean)),
        ("intField", nullable(Shape::Primitive(PrimitiveKind::Int))),
        ("stringListField", nullable(list(nullable(Shape::Primitive(PrimitiveKind::String))))),
    ]);

    let dog_command = schema.input_shapes()
        .enum_shape("DogCommand")
        .expect("DogCommand has a shape");
    assert_eq!(dog_command.members(), &[
        ("SIT".to_string(), 0),
        ("HEEL".to_string(), 1),
        ("DOWN".to_string(), 2),
    ]);
}

#[test]
fn materializes_coerced_variables_end_to_end() {
    let schema = test_utils::variables_schema();
    let args = test_utils::first_field_arguments(
        &schema,
        "query q($input: TestInputObject) { fieldWithObjectInput(input: $input) }",
        json!({"input": {"a": "foo", "b": "bar", "c": "baz"}}),
    ).expect("arguments coerce");

    let shape = Shape::from_type_ref(&TypeRef::named("TestInputObject"), &schema)
        .expect("TestInputObject is an input type");
    let materialized = Materializer::new(schema.input_shapes())
        .materialize(&shape, &args["input"])
        .expect("input materializes");

    assert_eq!(
        materialized.to_json(),
        json!({"a": "foo", "b": ["bar"], "c": "baz", "d": null}),
    );
    let members = materialized.as_object().expect("an object");
    assert_eq!(members["c"], Materialized::String("baz".to_string()));
    assert!(members["d"].is_null());
}
