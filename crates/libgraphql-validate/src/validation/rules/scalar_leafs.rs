use crate::ast;
use crate::schema::Schema;
use crate::types::TypeRef;
use crate::validation::Node;
use crate::validation::NodeVisitor;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationRule;
use inherent::inherent;

/// [Leaf field selections](https://spec.graphql.org/October2021/#sec-Leaf-Field-Selections):
/// a field of a leaf type (Scalar or Enum, once list and non-null wrappers
/// are removed) must not have a sub-selection, and a field of a composite type
/// must have a non-empty one.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarLeafs;
impl ScalarLeafs {
    /// Check one field against its (tracked) type. Returns no error when the
    /// type is unknown.
    pub fn check_field(
        field: &ast::Field,
        type_ref: Option<&TypeRef>,
        schema: &Schema,
    ) -> Option<ValidationError> {
        let type_ref = type_ref?;
        let named_type = type_ref.named_type(schema)?;

        let message = if named_type.is_leaf() {
            if !field.has_sub_selection() {
                return None;
            }
            format!(
                "Field {} of type {type_ref} must not have a sub selection",
                field.name,
            )
        } else {
            if field.has_sub_selection() {
                return None;
            }
            format!(
                "Field {} of type {type_ref} must have a sub selection",
                field.name,
            )
        };

        Some(ValidationError::new(message, vec![field.location]))
    }
}

#[inherent]
impl ValidationRule for ScalarLeafs {
    pub fn name(&self) -> &'static str {
        "ScalarLeafs"
    }

    pub fn validator<'a>(
        &self,
        _context: &ValidationContext<'a>,
    ) -> Box<dyn NodeVisitor<'a> + 'a> {
        Box::new(ScalarLeafsVisitor)
    }
}

struct ScalarLeafsVisitor;
impl<'a> NodeVisitor<'a> for ScalarLeafsVisitor {
    fn enter(
        &mut self,
        context: &ValidationContext<'a>,
        node: Node<'a>,
        errors: &mut Vec<ValidationError>,
    ) {
        if let Node::Field(field) = node {
            let current_type = context.type_info().current_type();
            errors.extend(ScalarLeafs::check_field(field, current_type, context.schema()));
        }
    }
}
