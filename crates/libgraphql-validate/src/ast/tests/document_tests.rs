use crate::ast;
use crate::loc::SourceLocation;

type Result<T> = std::result::Result<T, ast::DocumentParseError>;

#[test]
fn shorthand_selection_set_lowers_to_anonymous_query() -> Result<()> {
    let doc = ast::Document::parse("{ a }")?;

    let op = doc.operation(None).expect("one operation");
    assert_eq!(op.kind, ast::OperationKind::Query);
    assert_eq!(op.name, None);
    assert!(op.variable_definitions.is_empty());
    assert_eq!(op.location, SourceLocation::new(1, 1));

    Ok(())
}

#[test]
fn named_operations_are_found_by_name() -> Result<()> {
    let doc = ast::Document::parse(
        "query Foo { a } mutation Bar { b } subscription Baz { c }",
    )?;

    assert_eq!(doc.operations().count(), 3);
    assert_eq!(
        doc.operation(Some("Bar")).map(|op| op.kind),
        Some(ast::OperationKind::Mutation),
    );
    assert_eq!(
        doc.operation(Some("Baz")).map(|op| op.kind),
        Some(ast::OperationKind::Subscription),
    );
    assert!(doc.operation(Some("Qux")).is_none());

    // Ambiguous without a name
    assert!(doc.operation(None).is_none());

    Ok(())
}

#[test]
fn field_locations_and_leaf_selection_sets() -> Result<()> {
    let doc = ast::Document::parse("query Foo { a }")?;

    let op = doc.operation(Some("Foo")).expect("operation Foo");
    assert_eq!(op.selection_set.location, SourceLocation::new(1, 11));
    let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    assert_eq!(field.name, "a");
    assert_eq!(field.location, SourceLocation::new(1, 13));
    assert!(field.selection_set.is_none());
    assert!(!field.has_sub_selection());

    Ok(())
}

#[test]
fn aliases_arguments_and_nested_selections() -> Result<()> {
    let doc = ast::Document::parse(r#"
        {
          renamed: field(a: 1, b: "two") {
            child
          }
        }
    "#)?;

    let op = doc.operation(None).expect("one operation");
    let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    assert_eq!(field.alias.as_deref(), Some("renamed"));
    assert_eq!(field.response_key(), "renamed");
    assert!(field.has_sub_selection());
    assert_eq!(
        field.argument("a").map(|arg| &arg.value),
        Some(&ast::Value::Int(1)),
    );
    assert_eq!(
        field.argument("b").map(|arg| &arg.value),
        Some(&ast::Value::String("two".to_string())),
    );
    assert!(field.arguments.iter().all(|arg| arg.location == field.location));

    Ok(())
}

#[test]
fn variable_definitions_lower_types_and_defaults() -> Result<()> {
    let doc = ast::Document::parse(r#"
        query Q($a: [String!]!, $b: Int = 3, $c: TestInputObject) {
          field
        }
    "#)?;

    let op = doc.operation(Some("Q")).expect("operation Q");
    let a = op.variable_definition("a").expect("$a");
    assert_eq!(a.var_type.to_string(), "[String!]!");
    assert_eq!(a.default_value, None);

    let b = op.variable_definition("b").expect("$b");
    assert_eq!(b.var_type, ast::Type::Named("Int".to_string()));
    assert_eq!(b.default_value, Some(ast::Value::Int(3)));

    let c = op.variable_definition("c").expect("$c");
    assert_eq!(c.var_type.to_string(), "TestInputObject");

    Ok(())
}

#[test]
fn fragments_and_inline_fragments() -> Result<()> {
    let doc = ast::Document::parse(r#"
        query Q {
          ...F
          ... on Dog { bark }
          ... { name }
        }
        fragment F on Dog { name }
    "#)?;

    assert_eq!(doc.definitions.len(), 2);
    let ast::Definition::Fragment(frag) = &doc.definitions[1] else {
        panic!("expected a fragment definition");
    };
    assert_eq!(frag.name, "F");
    assert_eq!(frag.type_condition, "Dog");

    let op = doc.operation(Some("Q")).expect("operation Q");
    let selections = &op.selection_set.selections;
    assert!(matches!(
        &selections[0],
        ast::Selection::FragmentSpread(spread) if spread.fragment_name == "F",
    ));
    assert!(matches!(
        &selections[1],
        ast::Selection::InlineFragment(inline)
            if inline.type_condition.as_deref() == Some("Dog"),
    ));
    assert!(matches!(
        &selections[2],
        ast::Selection::InlineFragment(inline) if inline.type_condition.is_none(),
    ));

    Ok(())
}

#[test]
fn syntax_errors_are_reported() {
    let result = ast::Document::parse("query {");
    assert!(matches!(result, Err(ast::DocumentParseError::ParseError(_))));
}
