use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Clone, Debug, PartialEq)]
pub(super) struct ObjectOrInterfaceTypeData {
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, Field>,
    pub(super) interfaces: Vec<NamedGraphQLTypeRef>,
    pub(super) name: String,
}
impl ObjectOrInterfaceTypeData {
    pub(super) fn new(name: &str) -> Self {
        Self {
            description: None,
            fields: IndexMap::new(),
            interfaces: vec![],
            name: name.to_string(),
        }
    }

    pub(super) fn add_field(&mut self, field: Field) -> Result<()> {
        if self.fields.contains_key(field.name()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: self.name.to_owned(),
                field_name: field.name().to_string(),
            });
        }
        self.fields.insert(field.name().to_string(), field);
        Ok(())
    }

    pub(super) fn add_interface(&mut self, interface_name: &str) -> Result<()> {
        if self.interfaces.iter().any(|iface_ref| iface_ref.name() == interface_name) {
            return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                type_name: self.name.to_owned(),
                interface_name: interface_name.to_string(),
            });
        }
        self.interfaces.push(NamedGraphQLTypeRef::new(interface_name));
        Ok(())
    }

    pub(super) fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_ref| iface_ref.name())
            .collect()
    }
}
