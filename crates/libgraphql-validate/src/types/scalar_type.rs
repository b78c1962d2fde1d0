use crate::ast;
use crate::types::AnyScalar;
use crate::types::BooleanScalar;
use crate::types::FloatScalar;
use crate::types::IdScalar;
use crate::types::IntScalar;
use crate::types::ScalarCoercion;
use crate::types::StringScalar;
use std::sync::Arc;

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars), either one
/// of the five built-in scalars or a custom scalar defined within some
/// [`Schema`](crate::Schema).
#[derive(Clone, Debug)]
pub struct ScalarType {
    coercion: Arc<dyn ScalarCoercion>,
    description: Option<String>,
    name: String,
}
impl ScalarType {
    /// A custom scalar with no coercion of its own. Any non-null literal or
    /// runtime value is accepted unchanged.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self::with_coercion(name, Arc::new(AnyScalar))
    }

    pub fn with_coercion(
        name: impl AsRef<str>,
        coercion: Arc<dyn ScalarCoercion>,
    ) -> Self {
        Self {
            coercion,
            description: None,
            name: name.as_ref().to_string(),
        }
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    /// The built-in `Boolean`, `Float`, `ID`, `Int` and `String` scalars that
    /// every [`Schema`](crate::Schema) defines.
    pub fn builtins() -> [ScalarType; 5] {
        [
            Self::with_coercion("Boolean", Arc::new(BooleanScalar)),
            Self::with_coercion("Float", Arc::new(FloatScalar)),
            Self::with_coercion("ID", Arc::new(IdScalar)),
            Self::with_coercion("Int", Arc::new(IntScalar)),
            Self::with_coercion("String", Arc::new(StringScalar)),
        ]
    }

    pub fn coercion(&self) -> &dyn ScalarCoercion {
        self.coercion.as_ref()
    }

    /// The description of this [`ScalarType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.name.as_str(), "Boolean" | "Float" | "ID" | "Int" | "String")
    }

    /// The name of this [`ScalarType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parse_literal(&self, value: &ast::Value) -> Option<serde_json::Value> {
        self.coercion.parse_literal(value)
    }

    /// Coerce a runtime input value. `null` always coerces to `null`; every
    /// other value is handed to this scalar's [`ScalarCoercion`].
    pub fn parse_value(&self, value: &serde_json::Value) -> Option<serde_json::Value> {
        if value.is_null() {
            return Some(serde_json::Value::Null);
        }
        self.coercion.parse_value(value)
    }

    pub(crate) fn set_coercion(&mut self, coercion: Arc<dyn ScalarCoercion>) {
        self.coercion = coercion;
    }

    pub fn serialize(&self, value: &serde_json::Value) -> Option<serde_json::Value> {
        self.coercion.serialize(value)
    }
}
