use crate::ast;
use crate::schema::SchemaBuildError;
use crate::types::EnumValue;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined within
/// some [`Schema`](crate::Schema).
///
/// An enum's runtime value is the name of one of its [`EnumValue`]s.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    description: Option<String>,
    name: String,
    values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            description: None,
            name: name.as_ref().to_string(),
            values: IndexMap::new(),
        }
    }

    pub fn add_value(mut self, value: EnumValue) -> Result<Self> {
        if self.values.contains_key(value.name()) {
            return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                enum_name: self.name,
                value_name: value.name,
            });
        }
        self.values.insert(value.name.to_owned(), value);
        Ok(self)
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    /// The description of this [`EnumType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name of this [`EnumType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Accepts an enum literal (not a string) naming one of this type's
    /// values.
    pub fn parse_literal(&self, value: &ast::Value) -> Option<serde_json::Value> {
        match value {
            ast::Value::Enum(name) if self.values.contains_key(name) =>
                Some(serde_json::Value::String(name.to_owned())),
            _ => None,
        }
    }

    /// Accepts a runtime string naming one of this type's values.
    pub fn parse_value(&self, value: &serde_json::Value) -> Option<serde_json::Value> {
        match value {
            serde_json::Value::String(name) if self.values.contains_key(name) =>
                Some(value.clone()),
            _ => None,
        }
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

    /// The values defined on this enum, in definition order.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }
}
