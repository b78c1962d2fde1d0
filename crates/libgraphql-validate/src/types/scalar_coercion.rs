use crate::ast;

/// The serialize/parse contract every
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) implements.
///
/// Each method returns `None` when the input cannot be coerced. Coercion never
/// passes `null` or a variable reference to an implementation: those are
/// resolved before the scalar is consulted.
pub trait ScalarCoercion: std::fmt::Debug + Send + Sync {
    /// Convert an internal value into its result form.
    fn serialize(&self, value: &serde_json::Value) -> Option<serde_json::Value>;

    /// Coerce a runtime input value (e.g. a variable's JSON value).
    fn parse_value(&self, value: &serde_json::Value) -> Option<serde_json::Value>;

    /// Coerce a literal written in a document.
    fn parse_literal(&self, value: &ast::Value) -> Option<serde_json::Value>;
}
