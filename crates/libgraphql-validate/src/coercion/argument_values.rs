use crate::Variables;
use crate::ast;
use crate::coercion::CoercionError;
use crate::coercion::value_from_ast;
use crate::schema::Schema;
use crate::types::Field;

type Result<T> = std::result::Result<T, CoercionError>;

/// Build the coerced value of every argument `field_def` declares for one
/// selection of that field, in declaration order.
///
/// `variables` must already be coerced (see
/// [`coerce_variable_values()`](crate::coercion::coerce_variable_values)).
/// An omitted argument, or one given as a variable with no value, takes the
/// parameter's default if it has one and is otherwise left out. A literal that
/// can't be coerced also falls back to the default, or to `null` without one.
/// A non-null parameter that ends up without a (non-null) value is an error.
pub fn coerce_argument_values(
    schema: &Schema,
    field_def: &Field,
    field: &ast::Field,
    variables: &Variables,
) -> Result<Variables> {
    let mut coerced = Variables::new();

    for param in field_def.parameters().values() {
        let default = || param.default_value().and_then(|default_value| {
            value_from_ast(param.type_ref(), default_value, &Variables::new(), schema)
        });

        let value = match field.argument(param.name()).map(|arg| &arg.value) {
            None => default(),
            Some(ast::Value::Variable(var_name)) => match variables.get(var_name) {
                Some(var_value) => Some(var_value.clone()),
                None => default(),
            },
            Some(literal) => Some(
                value_from_ast(param.type_ref(), literal, variables, schema)
                    .or_else(default)
                    .unwrap_or(serde_json::Value::Null)
            ),
        };

        let non_null = param.type_ref().is_non_null();
        match value {
            Some(value) if !(non_null && value.is_null()) => {
                coerced.insert(param.name().to_string(), value);
            },
            None if !non_null => (),
            _ => return Err(CoercionError::InvalidArgument {
                argument_name: param.name().to_string(),
                field_name: field_def.name().to_string(),
                type_name: param.type_ref().to_string(),
            }),
        }
    }

    Ok(coerced)
}
