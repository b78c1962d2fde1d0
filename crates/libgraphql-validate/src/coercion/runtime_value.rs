use crate::Variables;
use crate::coercion::value_from_ast;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeRef;

/// Check whether the runtime (JSON) `value` is acceptable for `type_ref`,
/// returning a description of every problem found (empty when valid).
pub fn is_valid_value(
    type_ref: &TypeRef,
    value: &serde_json::Value,
    schema: &Schema,
) -> Vec<String> {
    match type_ref {
        TypeRef::NonNull(inner) => {
            if value.is_null() {
                vec![format!("Expected \"{type_ref}\", found null.")]
            } else {
                is_valid_value(inner, value, schema)
            }
        },

        _ if value.is_null() => vec![],

        TypeRef::List(inner) => match value {
            serde_json::Value::Array(items) =>
                items.iter()
                    .enumerate()
                    .flat_map(|(index, item)| {
                        is_valid_value(inner, item, schema)
                            .into_iter()
                            .map(move |err| format!("In element {index}: {err}"))
                    })
                    .collect(),
            _ => is_valid_value(inner, value, schema),
        },

        TypeRef::Named(named_ref) => {
            let Ok(type_) = named_ref.deref(schema) else {
                return vec![format!("Unknown type \"{}\".", named_ref.name())];
            };

            let parsed = match type_ {
                GraphQLType::InputObject(input_obj) => {
                    let serde_json::Value::Object(provided_fields) = value else {
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
                        let field_value = provided_fields
                            .get(field.name())
                            .unwrap_or(&serde_json::Value::Null);
                        errors.extend(
                            is_valid_value(field.type_ref(), field_value, schema)
                                .into_iter()
                                .map(|err| format!("In field \"{}\": {err}", field.name())),
                        );
                    }
                    return errors;
                },

                GraphQLType::Enum(enum_type) => enum_type.parse_value(value),
                GraphQLType::Scalar(scalar) => scalar.parse_value(value),

                GraphQLType::Interface(_)
                    | GraphQLType::Object(_)
                    | GraphQLType::Union(_) => None,
            };

            match parsed {
                Some(_) => vec![],
                None => vec![format!("Expected type \"{}\", found {value}.", type_.name())],
            }
        },
    }
}

/// Coerce a runtime (JSON) `value` that [`is_valid_value()`] accepted into the
/// runtime value for `type_ref`: wraps single values into one-element lists,
/// fills in input object field defaults and applies each scalar's
/// `parse_value`.
///
/// Returns `None` if the value turns out not to be coercible after all.
pub fn coerce_value(
    type_ref: &TypeRef,
    value: &serde_json::Value,
    schema: &Schema,
) -> Option<serde_json::Value> {
    match type_ref {
        TypeRef::NonNull(inner) => {
            if value.is_null() {
                None
            } else {
                coerce_value(inner, value, schema)
            }
        },

        _ if value.is_null() => Some(serde_json::Value::Null),

        TypeRef::List(inner) => match value {
            serde_json::Value::Array(items) =>
                items.iter()
                    .map(|item| coerce_value(inner, item, schema))
                    .collect::<Option<Vec<_>>>()
                    .map(serde_json::Value::Array),
            _ => coerce_value(inner, value, schema)
                .map(|item| serde_json::Value::Array(vec![item])),
        },

        TypeRef::Named(named_ref) => match named_ref.deref(schema).ok()? {
            GraphQLType::InputObject(input_obj) => {
                let serde_json::Value::Object(provided_fields) = value else {
                    return None;
                };

                let mut coerced = serde_json::Map::new();
                for field in input_obj.fields().values() {
                    let field_value = match (provided_fields.get(field.name()), field.default_value()) {
                        (Some(provided), _) =>
                            coerce_value(field.type_ref(), provided, schema)?,
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

            GraphQLType::Enum(enum_type) => enum_type.parse_value(value),
            GraphQLType::Scalar(scalar) => scalar.parse_value(value),

            GraphQLType::Interface(_)
                | GraphQLType::Object(_)
                | GraphQLType::Union(_) => None,
        },
    }
}
