use crate::ast;
use crate::test_utils;
use crate::types::GraphQLTypeKind;
use crate::types::TypeRef;

#[test]
fn displays_wrapped_types_in_sdl_notation() {
    let type_ref = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("Int"))));
    assert_eq!(type_ref.to_string(), "[Int!]!");
    assert_eq!(TypeRef::list(TypeRef::named("String")).to_string(), "[String]");
}

#[test]
fn non_null_constructor_does_not_double_wrap() {
    let once = TypeRef::non_null(TypeRef::named("String"));
    let twice = TypeRef::non_null(once.clone());
    assert_eq!(once, twice);
    assert_eq!(twice.to_string(), "String!");
}

#[test]
fn nullable_strips_exactly_one_non_null_layer() {
    let type_ref = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("Int"))));
    assert_eq!(type_ref.nullable().to_string(), "[Int!]");
    assert_eq!(type_ref.nullable().nullable().to_string(), "[Int!]");
    assert!(type_ref.is_non_null());
    assert!(!type_ref.nullable().is_non_null());
}

#[test]
fn is_list_looks_through_non_null() {
    assert!(TypeRef::non_null(TypeRef::list(TypeRef::named("Int"))).is_list());
    assert!(!TypeRef::non_null(TypeRef::named("Int")).is_list());
}

#[test]
fn named_type_name_unwraps_every_layer() {
    let type_ref = TypeRef::list(TypeRef::non_null(TypeRef::list(TypeRef::named("Dog"))));
    assert_eq!(type_ref.named_type_name(), "Dog");
}

#[test]
fn from_ast_mirrors_the_annotation() {
    let ast_type = ast::Type::NonNull(Box::new(ast::Type::List(Box::new(
        ast::Type::Named("String".to_string()),
    ))));
    assert_eq!(TypeRef::from_ast(&ast_type).to_string(), "[String]!");
}

#[test]
fn named_type_resolves_against_a_schema() {
    let schema = test_utils::pets_schema();

    let dog = TypeRef::non_null(TypeRef::named("Dog"));
    let resolved = dog.named_type(&schema).expect("Dog is defined");
    assert_eq!(resolved.name(), "Dog");
    assert_eq!(GraphQLTypeKind::from(resolved), GraphQLTypeKind::Object);

    assert!(TypeRef::named("Unicorn").named_type(&schema).is_none());
}
