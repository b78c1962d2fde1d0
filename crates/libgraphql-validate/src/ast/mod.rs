//! The immutable executable-document AST consumed by
//! [`validation`](crate::validation) and [`coercion`](crate::coercion).
//!
//! Documents are usually produced with [`Document::parse()`], which lowers the
//! output of [`graphql_parser`] into this model, but every node is plain data
//! and can be constructed directly as well.

mod argument;
mod definition;
mod document;
mod document_parse_error;
mod field;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod lower;
mod operation_definition;
mod operation_kind;
mod selection;
mod selection_set;
mod type_annotation;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use definition::Definition;
pub use document::Document;
pub use document_parse_error::DocumentParseError;
pub use field::Field;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use type_annotation::Type;
pub use value::Value;
pub use variable_definition::VariableDefinition;

pub(crate) use lower::lower_type;
pub(crate) use lower::lower_value;

#[cfg(test)]
mod tests;
