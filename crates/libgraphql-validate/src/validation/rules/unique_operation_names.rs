use crate::loc::SourceLocation;
use crate::validation::Node;
use crate::validation::NodeVisitor;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationRule;
use inherent::inherent;
use std::collections::HashMap;

/// [Operation name uniqueness](https://spec.graphql.org/October2021/#sec-Operation-Name-Uniqueness):
/// no two operations in a document may share a name.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniqueOperationNames;

#[inherent]
impl ValidationRule for UniqueOperationNames {
    pub fn name(&self) -> &'static str {
        "UniqueOperationNames"
    }

    pub fn validator<'a>(
        &self,
        _context: &ValidationContext<'a>,
    ) -> Box<dyn NodeVisitor<'a> + 'a> {
        Box::new(UniqueOperationNamesVisitor {
            known_names: HashMap::new(),
        })
    }
}

struct UniqueOperationNamesVisitor<'a> {
    known_names: HashMap<&'a str, SourceLocation>,
}
impl<'a> NodeVisitor<'a> for UniqueOperationNamesVisitor<'a> {
    fn enter(
        &mut self,
        _context: &ValidationContext<'a>,
        node: Node<'a>,
        errors: &mut Vec<ValidationError>,
    ) {
        let Node::OperationDefinition(op) = node else {
            return;
        };
        let Some(name) = op.name.as_deref() else {
            return;
        };

        match self.known_names.get(name) {
            Some(first_location) => errors.push(ValidationError::new(
                format!("There can only be one operation named \"{name}\"."),
                vec![*first_location, op.location],
            )),
            None => {
                self.known_names.insert(name, op.location);
            },
        }
    }
}
