use crate::ast;
use crate::types::TypeRef;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(super) default_value: Option<ast::Value>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) type_ref: TypeRef,
}
impl InputField {
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

    /// The literal used when this field is omitted from an input object.
    pub fn default_value(&self) -> Option<&ast::Value> {
        self.default_value.as_ref()
    }

    /// The description of this [`InputField`] as defined in the schema
    /// (e.g. in a `"""`-string immediately before the input field definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name of this [`InputField`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The [`TypeRef`] specifying the schema-defined type of this
    /// [`InputField`].
    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}
