use crate::ast;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeRef;

/// Check whether the literal `value` is acceptable for `type_ref`, returning
/// a description of every problem found (empty when valid). `None` stands for
/// an omitted value and is treated like `null`.
///
/// Variable references are always accepted: they are checked against their
/// own declared type when variable values are coerced. A non-list literal is
/// checked against a list type as though it were a one-element list.
pub fn is_valid_literal(
    type_ref: &TypeRef,
    value: Option<&ast::Value>,
    schema: &Schema,
) -> Vec<String> {
    let value = value.filter(|value| !value.is_null());

    match type_ref {
        TypeRef::NonNull(inner) => match value {
            Some(value) => is_valid_literal(inner, Some(value), schema),
            None => vec![non_null_violation(inner, schema)],
        },

        TypeRef::List(inner) => match value {
            None | Some(ast::Value::Variable(_)) => vec![],
            Some(ast::Value::List(items)) =>
                items.iter()
                    .enumerate()
                    .flat_map(|(index, item)| {
                        is_valid_literal(inner, Some(item), schema)
                            .into_iter()
                            .map(move |err| format!("In element {index}: {err}"))
                    })
                    .collect(),
            Some(value) => is_valid_literal(inner, Some(value), schema),
        },

        TypeRef::Named(named_ref) => match value {
            None | Some(ast::Value::Variable(_)) => vec![],
            Some(value) => is_valid_named_literal(named_ref, value, schema),
        },
    }
}

fn is_valid_named_literal(
    named_ref: &NamedGraphQLTypeRef,
    value: &ast::Value,
    schema: &Schema,
) -> Vec<String> {
    let Ok(type_) = named_ref.deref(schema) else {
        return vec![format!("Unknown type \"{}\".", named_ref.name())];
    };

    let parsed = match type_ {
        GraphQLType::InputObject(input_obj) => {
            let ast::Value::Object(provided_fields) = value else {
                return vec![format!(
                    "Expected \"{}\", found not an object.",
                    input_obj.name(),
                )];
            };

            let mut errors = vec![];
            for provided_name in provided_fields.keys() {
                if input_obj.field(provided_name).is_none() {
                    errors.push(format!("In field \"{provided_name}\": Unknown field."));
                }
            }
            for field in input_obj.fields().values() {
                let field_errors = is_valid_literal(
                    field.type_ref(),
                    provided_fields.get(field.name()),
                    schema,
                );
                errors.extend(field_errors.into_iter().map(|err| {
                    format!("In field \"{}\": {err}", field.name())
                }));
            }
            return errors;
        },

        GraphQLType::Enum(enum_type) => enum_type.parse_literal(value),
        GraphQLType::Scalar(scalar) => scalar.parse_literal(value),

        // Output types can never be the type of a literal.
        GraphQLType::Interface(_)
            | GraphQLType::Object(_)
            | GraphQLType::Union(_) => None,
    };

    match parsed {
        Some(_) => vec![],
        None => vec![format!("Expected type \"{}\", found {value}.", type_.name())],
    }
}

fn non_null_violation(inner: &TypeRef, schema: &Schema) -> String {
    let expected = match inner {
        TypeRef::Named(named_ref) =>
            named_ref.deref(schema).ok().map(|type_| type_.name().to_string()),
        TypeRef::List(_) | TypeRef::NonNull(_) => Some(inner.to_string()),
    };
    match expected {
        Some(expected) => format!("Expected {expected}, found null"),
        None => "Expected non-null value, found null".to_string(),
    }
}
