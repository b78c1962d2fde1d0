use crate::ast;
use crate::types::TypeRef;

/// Represents a
/// [field argument definition](https://spec.graphql.org/October2021/#ArgumentsDefinition)
/// declared on a [`Field`](crate::types::Field).
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(super) default_value: Option<ast::Value>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) type_ref: TypeRef,
}
impl Parameter {
    pub fn new(name: impl AsRef<str>, type_ref: TypeRef) -> Self {
        Self {
            default_value: None,
            description: None,
            name: name.as_ref().to_string(),
            type_ref,
        }
    }

    pub fn with_default_value(mut self, default_value: ast::Value) -> Self {
        self.default_value = Some(default_value);
        self
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    /// The literal used when an argument for this parameter is omitted.
    pub fn default_value(&self) -> Option<&ast::Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}
