//! Single-pass validation of an executable [`Document`](crate::ast::Document).
//!
//! [`DocumentValidator::validate()`] walks the document depth-first exactly
//! once. At every [`Node`] it first updates the [`TypeInfo`] tracker, then
//! calls `enter` on each rule's [`NodeVisitor`]; after the node's children it
//! calls `leave` on each visitor and only then lets the tracker pop its state.
//! Rules therefore always observe the type context of the node they are
//! looking at, on the way in and on the way out.

mod document_validator;
mod node;
mod node_visitor;
pub mod rules;
mod type_info;
mod validation_context;
mod validation_error;
mod validation_result;
mod validation_rule;

pub use document_validator::DocumentValidator;
pub use node::Node;
pub use node_visitor::NodeVisitor;
pub use rules::default_rules;
pub use type_info::TypeInfo;
pub use validation_context::ValidationContext;
pub use validation_error::ValidationError;
pub use validation_result::ValidationResult;
pub use validation_rule::ValidationRule;

#[cfg(test)]
mod tests;
