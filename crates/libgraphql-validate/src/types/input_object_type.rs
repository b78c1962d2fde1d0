use crate::schema::SchemaBuildError;
use crate::types::InputField;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    description: Option<String>,
    fields: IndexMap<String, InputField>,
    name: String,
}
impl InputObjectType {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            description: None,
            fields: IndexMap::new(),
            name: name.as_ref().to_string(),
        }
    }

    pub fn add_field(mut self, field: InputField) -> Result<Self> {
        if self.fields.contains_key(field.name()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: self.name,
                field_name: field.name,
            });
        }
        self.fields.insert(field.name.to_owned(), field);
        Ok(self)
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.fields.get(name)
    }

    /// The fields of this [`InputObjectType`], in definition order.
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
