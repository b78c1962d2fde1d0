use crate::schema::SchemaBuildError;
use crate::types::Parameter;
use crate::types::TypeRef;
use indexmap::IndexMap;
use std::sync::OnceLock;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Represents a
/// [field definition](https://spec.graphql.org/October2021/#FieldsDefinition)
/// on an [`ObjectType`](crate::types::ObjectType) or
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    description: Option<String>,
    name: String,
    parameters: IndexMap<String, Parameter>,
    type_ref: TypeRef,
}
impl Field {
    pub fn new(name: impl AsRef<str>, type_ref: TypeRef) -> Self {
        Self {
            description: None,
            name: name.as_ref().to_string(),
            parameters: IndexMap::new(),
            type_ref,
        }
    }

    pub fn add_parameter(mut self, parameter: Parameter) -> Result<Self> {
        if self.parameters.contains_key(parameter.name()) {
            return Err(SchemaBuildError::DuplicateParameterDefinition {
                field_name: self.name,
                parameter_name: parameter.name,
            });
        }
        self.parameters.insert(parameter.name.to_owned(), parameter);
        Ok(self)
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    /// The parameters (argument definitions) of this [`Field`], in definition
    /// order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    /// The declared (possibly wrapped) return type of this [`Field`].
    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}

/// The implicit
/// [`__typename`](https://spec.graphql.org/October2021/#sec-Type-Name-Introspection)
/// meta-field that may be selected on any composite type.
pub fn typename_field() -> &'static Field {
    static TYPENAME_FIELD: OnceLock<Field> = OnceLock::new();
    TYPENAME_FIELD.get_or_init(|| Field::new(
        "__typename",
        TypeRef::non_null(TypeRef::named("String")),
    ))
}
