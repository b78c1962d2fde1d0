use crate::coercion::is_valid_literal;
use crate::types::TypeRef;
use crate::validation::Node;
use crate::validation::NodeVisitor;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationRule;
use inherent::inherent;

/// Variable default values must be valid for the variable's type, and a
/// non-null variable can't have one (it would never be used).
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultValuesOfCorrectType;

#[inherent]
impl ValidationRule for DefaultValuesOfCorrectType {
    pub fn name(&self) -> &'static str {
        "DefaultValuesOfCorrectType"
    }

    pub fn validator<'a>(
        &self,
        _context: &ValidationContext<'a>,
    ) -> Box<dyn NodeVisitor<'a> + 'a> {
        Box::new(DefaultValuesOfCorrectTypeVisitor)
    }
}

struct DefaultValuesOfCorrectTypeVisitor;
impl<'a> NodeVisitor<'a> for DefaultValuesOfCorrectTypeVisitor {
    fn enter(
        &mut self,
        context: &ValidationContext<'a>,
        node: Node<'a>,
        errors: &mut Vec<ValidationError>,
    ) {
        let Node::VariableDefinition(var_def) = node else {
            return;
        };
        let Some(default_value) = &var_def.default_value else {
            return;
        };

        let type_ref = TypeRef::from_ast(&var_def.var_type);
        let name = var_def.name.as_str();

        if type_ref.is_non_null() {
            errors.push(ValidationError::new(
                format!(
                    "Variable \"${name}\" of type \"{type_ref}\" is required and will \
                    not use the default value. Perhaps you meant to use type \"{}\".",
                    type_ref.nullable(),
                ),
                vec![var_def.location],
            ));
            return;
        }

        let problems = is_valid_literal(&type_ref, Some(default_value), context.schema());
        if problems.is_empty() {
            return;
        }

        let mut message = format!(
            "Variable \"${name}\" of type \"{type_ref}\" has invalid default value \
            {default_value}.",
        );
        for problem in problems {
            message.push('\n');
            message.push_str(problem.as_str());
        }
        errors.push(ValidationError::new(message, vec![var_def.location]));
    }
}
