use crate::coercion::is_valid_literal;
use crate::validation::Node;
use crate::validation::NodeVisitor;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationRule;
use inherent::inherent;

/// [Values of correct type](https://spec.graphql.org/October2021/#sec-Values-of-Correct-Type)
/// for field arguments: every argument literal must be valid for the type of
/// the parameter it is passed to.
///
/// Arguments the field doesn't define are skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArgumentsOfCorrectType;

#[inherent]
impl ValidationRule for ArgumentsOfCorrectType {
    pub fn name(&self) -> &'static str {
        "ArgumentsOfCorrectType"
    }

    pub fn validator<'a>(
        &self,
        _context: &ValidationContext<'a>,
    ) -> Box<dyn NodeVisitor<'a> + 'a> {
        Box::new(ArgumentsOfCorrectTypeVisitor)
    }
}

struct ArgumentsOfCorrectTypeVisitor;
impl<'a> NodeVisitor<'a> for ArgumentsOfCorrectTypeVisitor {
    fn enter(
        &mut self,
        context: &ValidationContext<'a>,
        node: Node<'a>,
        errors: &mut Vec<ValidationError>,
    ) {
        let Node::Argument(arg) = node else {
            return;
        };
        let Some(param) = context.type_info().argument() else {
            return;
        };

        let problems = is_valid_literal(param.type_ref(), Some(&arg.value), context.schema());
        if problems.is_empty() {
            return;
        }

        let mut message = format!("Argument \"{}\" has invalid value {}.", arg.name, arg.value);
        for problem in problems {
            message.push('\n');
            message.push_str(problem.as_str());
        }
        errors.push(ValidationError::new(message, vec![arg.location]));
    }
}
