//! Single-pass validation of GraphQL executable documents against a
//! [`Schema`](schema::Schema), plus the algorithms that coerce literal and
//! variable-supplied input data into values that agree with the schema's type
//! system.
//!
//! The two halves share one type model:
//!
//! * [`validation`] walks a parsed [`ast::Document`] exactly once, tracking the
//!   [`TypeRef`](types::TypeRef) implied at every position and dispatching to
//!   any number of independent [`ValidationRule`](validation::ValidationRule)s.
//! * [`coercion`] decides whether a literal is valid for a declared type,
//!   builds runtime (JSON-like) argument and variable values, and materializes
//!   those values into resolver-facing [`Materialized`](coercion::Materialized)
//!   shapes.

pub mod ast;
pub mod coercion;
pub mod file_reader;
pub mod loc;
pub mod named_ref;
pub mod schema;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_utils;

pub use schema::Schema;
pub use validation::DocumentValidator;
pub use validation::ValidationError;
pub use validation::ValidationResult;

/// Input data supplied alongside a document (e.g. the `"variables"` entry of a
/// GraphQL request), keyed by variable name.
pub type Variables = serde_json::Map<String, serde_json::Value>;
