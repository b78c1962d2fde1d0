use crate::validation::Node;
use crate::validation::NodeVisitor;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationRule;
use inherent::inherent;

/// [Lone anonymous operation](https://spec.graphql.org/October2021/#sec-Lone-Anonymous-Operation):
/// an operation without a name must be the only operation in its document.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoneAnonymousOperation;

#[inherent]
impl ValidationRule for LoneAnonymousOperation {
    pub fn name(&self) -> &'static str {
        "LoneAnonymousOperation"
    }

    pub fn validator<'a>(
        &self,
        _context: &ValidationContext<'a>,
    ) -> Box<dyn NodeVisitor<'a> + 'a> {
        Box::new(LoneAnonymousOperationVisitor { operation_count: 0 })
    }
}

struct LoneAnonymousOperationVisitor {
    operation_count: usize,
}
impl<'a> NodeVisitor<'a> for LoneAnonymousOperationVisitor {
    fn enter(
        &mut self,
        _context: &ValidationContext<'a>,
        node: Node<'a>,
        errors: &mut Vec<ValidationError>,
    ) {
        match node {
            Node::Document(doc) => self.operation_count = doc.operations().count(),
            Node::OperationDefinition(op) if op.name.is_none() && self.operation_count > 1 =>
                errors.push(ValidationError::new(
                    "This anonymous operation must be the only defined operation.",
                    vec![op.location],
                )),
            _ => (),
        }
    }
}
