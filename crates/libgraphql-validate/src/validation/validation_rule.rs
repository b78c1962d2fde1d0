use crate::validation::NodeVisitor;
use crate::validation::ValidationContext;

/// A validation rule produces a fresh [`NodeVisitor`] for each validation.
///
/// Rules are shared between validations (and threads), so any per-document
/// state belongs in the visitor, never in the rule.
pub trait ValidationRule: Send + Sync {
    /// A short, stable identifier for the rule (e.g. `"ScalarLeafs"`).
    fn name(&self) -> &'static str;

    fn validator<'a>(
        &self,
        context: &ValidationContext<'a>,
    ) -> Box<dyn NodeVisitor<'a> + 'a>;
}
