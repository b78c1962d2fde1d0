//! Input value coercion.
//!
//! Three separate algorithms live here, applied at different points of a
//! request's lifetime:
//!
//! * [`is_valid_literal()`] decides statically whether a literal written in a
//!   document is acceptable for a declared type. Validation rules use it to
//!   check argument literals and variable defaults.
//! * [`coerce_variable_values()`] and [`coerce_argument_values()`] turn raw
//!   JSON inputs and literals into JSON-like runtime values (via
//!   [`value_from_ast()`], [`is_valid_value()`] and [`coerce_value()`]).
//! * [`Materializer`] converts those runtime values into
//!   resolver-facing [`Materialized`] values described by a [`Shape`].
//!
//! The literal and runtime checks are intentionally not unified: they overlap
//! (both handle lists, non-null and input objects) but each keeps its own
//! acceptance rules.

mod argument_values;
mod coercion_error;
mod literal;
mod materialized;
mod materializer;
mod runtime_value;
mod shape;
mod shape_registry;
mod value_from_ast;
mod variable_values;

pub use argument_values::coerce_argument_values;
pub use coercion_error::CoercionError;
pub use literal::is_valid_literal;
pub use materialized::Materialized;
pub use materializer::Materializer;
pub use runtime_value::coerce_value;
pub use runtime_value::is_valid_value;
pub use shape::EnumShape;
pub use shape::MemberShape;
pub use shape::ObjectShape;
pub use shape::PrimitiveKind;
pub use shape::Shape;
pub use shape_registry::ShapeRegistry;
pub use value_from_ast::value_from_ast;
pub use variable_values::coerce_variable_values;

#[cfg(test)]
mod tests;
