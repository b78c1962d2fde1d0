use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces) defined within
/// some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(ObjectOrInterfaceTypeData);
impl InterfaceType {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(ObjectOrInterfaceTypeData::new(name.as_ref()))
    }

    pub fn add_field(mut self, field: Field) -> Result<Self> {
        self.0.add_field(field)?;
        Ok(self)
    }

    /// Declare that this type implements the interface named
    /// `interface_name`.
    pub fn implement(mut self, interface_name: impl AsRef<str>) -> Result<Self> {
        self.0.add_interface(interface_name.as_ref())?;
        Ok(self)
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.0.description = Some(description.as_ref().to_string());
        self
    }

    /// The description of this [`InterfaceType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.0.fields.get(name)
    }

    /// The fields defined on this [`InterfaceType`], in definition order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.0.fields
    }

    /// The names of the interfaces this [`InterfaceType`] implements, in the
    /// order they were declared.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }
}
