use crate::Variables;
use crate::ast;
use crate::coercion::CoercionError;
use crate::coercion::coerce_value;
use crate::coercion::is_valid_value;
use crate::coercion::value_from_ast;
use crate::schema::Schema;
use crate::types::TypeRef;

type Result<T> = std::result::Result<T, CoercionError>;

/// Build the coerced value of every variable `operation` defines from the raw
/// `inputs` supplied with a request.
///
/// * An omitted variable takes its default value, if it has one; otherwise a
///   nullable variable is left out of the result and a non-null variable is an
///   error.
/// * An explicit `null` is kept for a nullable variable (even one with a
///   default) and is an error for a non-null variable.
/// * Any other input must be valid for the variable's type.
///
/// Inputs for names the operation doesn't define are ignored.
pub fn coerce_variable_values(
    schema: &Schema,
    operation: &ast::OperationDefinition,
    inputs: &Variables,
) -> Result<Variables> {
    let mut coerced = Variables::new();

    for var_def in &operation.variable_definitions {
        let var_name = var_def.name.as_str();
        let type_ref = TypeRef::from_ast(&var_def.var_type);
        let type_name = type_ref.named_type_name();

        let Some(named_type) = type_ref.named_type(schema) else {
            return Err(CoercionError::UnknownVariableType {
                variable_name: var_name.to_string(),
                type_name: type_name.to_string(),
            });
        };
        if !named_type.is_input_type() {
            return Err(CoercionError::NonInputVariableType {
                variable_name: var_name.to_string(),
                type_name: type_name.to_string(),
            });
        }

        let missing_required = || CoercionError::MissingRequiredVariable {
            variable_name: var_name.to_string(),
            type_name: type_name.to_string(),
        };

        match inputs.get(var_name) {
            None => {
                if let Some(default_value) = &var_def.default_value {
                    let value = value_from_ast(
                        &type_ref,
                        default_value,
                        &Variables::new(),
                        schema,
                    ).ok_or_else(|| CoercionError::InvalidVariableValue {
                        variable_name: var_name.to_string(),
                        type_name: type_name.to_string(),
                        source: Box::new(CoercionError::InvalidValue {
                            problems: vec![format!(
                                "Default value {default_value} is not coercible."
                            )],
                        }),
                    })?;
                    coerced.insert(var_name.to_string(), value);
                } else if type_ref.is_non_null() {
                    return Err(missing_required());
                }
            },

            Some(serde_json::Value::Null) => {
                if type_ref.is_non_null() {
                    return Err(missing_required());
                }
                coerced.insert(var_name.to_string(), serde_json::Value::Null);
            },

            Some(input) => {
                let invalid = |problems: Vec<String>| CoercionError::InvalidVariableValue {
                    variable_name: var_name.to_string(),
                    type_name: type_name.to_string(),
                    source: Box::new(CoercionError::InvalidValue { problems }),
                };

                let problems = is_valid_value(&type_ref, input, schema);
                if !problems.is_empty() {
                    return Err(invalid(problems));
                }
                let value = coerce_value(&type_ref, input, schema)
                    .ok_or_else(|| invalid(vec![]))?;
                coerced.insert(var_name.to_string(), value);
            },
        }
    }

    log::debug!(
        "Coerced {} of {} variable(s) for operation {}",
        coerced.len(),
        operation.variable_definitions.len(),
        operation.name.as_deref().unwrap_or("<anonymous>"),
    );

    Ok(coerced)
}
