use crate::Variables;
use crate::ast;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeRef;

/// Produce the runtime value of a literal for `type_ref`, resolving variable
/// references against already-coerced `variables`.
///
/// Returns `None` when the literal can't be coerced (including a reference to
/// a variable that has no value). Input object fields that aren't declared on
/// the type are ignored here; static validation is what reports them.
pub fn value_from_ast(
    type_ref: &TypeRef,
    value: &ast::Value,
    variables: &Variables,
    schema: &Schema,
) -> Option<serde_json::Value> {
    if let ast::Value::Variable(var_name) = value {
        let var_value = variables.get(var_name)?;
        if var_value.is_null() && type_ref.is_non_null() {
            return None;
        }
        return Some(var_value.clone());
    }

    match type_ref {
        TypeRef::NonNull(inner) => {
            if value.is_null() {
                None
            } else {
                value_from_ast(inner, value, variables, schema)
            }
        },

        _ if value.is_null() => Some(serde_json::Value::Null),

        TypeRef::List(inner) => match value {
            ast::Value::List(items) =>
                items.iter()
                    .map(|item| {
                        if is_missing_variable(item, variables) {
                            (!inner.is_non_null()).then_some(serde_json::Value::Null)
                        } else {
                            value_from_ast(inner, item, variables, schema)
                        }
                    })
                    .collect::<Option<Vec<_>>>()
                    .map(serde_json::Value::Array),
            _ => value_from_ast(inner, value, variables, schema)
                .map(|item| serde_json::Value::Array(vec![item])),
        },

        TypeRef::Named(named_ref) => match named_ref.deref(schema).ok()? {
            GraphQLType::InputObject(input_obj) => {
                let ast::Value::Object(provided_fields) = value else {
                    return None;
                };

                let mut coerced = serde_json::Map::new();
                for field in input_obj.fields().values() {
                    let provided = provided_fields
                        .get(field.name())
                        .filter(|field_value| !is_missing_variable(field_value, variables));
                    let field_value = match (provided, field.default_value()) {
                        (Some(provided), _) =>
                            value_from_ast(field.type_ref(), provided, variables, schema)?,
                        (None, Some(default_value)) => value_from_ast(
                            field.type_ref(),
                            default_value,
                            &Variables::new(),
                            schema,
                        )?,
                        (None, None) if field.type_ref().is_non_null() => return None,
                        (None, None) => continue,
                    };
                    coerced.insert(field.name().to_string(), field_value);
                }
                Some(serde_json::Value::Object(coerced))
            },

            GraphQLType::Enum(enum_type) => enum_type.parse_literal(value),
            GraphQLType::Scalar(scalar) => scalar.parse_literal(value),

            GraphQLType::Interface(_)
                | GraphQLType::Object(_)
                | GraphQLType::Union(_) => None,
        },
    }
}

fn is_missing_variable(value: &ast::Value, variables: &Variables) -> bool {
    matches!(value, ast::Value::Variable(var_name) if !variables.contains_key(var_name))
}
