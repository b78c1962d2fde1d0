use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;

/// Receives every [`Node`] of a document as the validation traversal enters
/// and leaves it. Both hooks default to doing nothing, so a visitor only
/// implements the side it cares about.
///
/// Problems are reported by pushing onto `errors`; visitors never see each
/// other's errors.
pub trait NodeVisitor<'a> {
    fn enter(
        &mut self,
        _context: &ValidationContext<'a>,
        _node: Node<'a>,
        _errors: &mut Vec<ValidationError>,
    ) {}

    fn leave(
        &mut self,
        _context: &ValidationContext<'a>,
        _node: Node<'a>,
        _errors: &mut Vec<ValidationError>,
    ) {}
}
