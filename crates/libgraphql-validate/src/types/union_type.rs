use crate::schema::SchemaBuildError;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    description: Option<String>,
    members: IndexMap<String, NamedGraphQLTypeRef>,
    name: String,
}
impl UnionType {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            description: None,
            members: IndexMap::new(),
            name: name.as_ref().to_string(),
        }
    }

    pub fn add_member(mut self, member_name: impl AsRef<str>) -> Result<Self> {
        let member_name = member_name.as_ref();
        if self.members.contains_key(member_name) {
            return Err(SchemaBuildError::DuplicateUnionMember {
                type_name: self.name,
                member_name: member_name.to_string(),
            });
        }
        self.members.insert(
            member_name.to_string(),
            NamedGraphQLTypeRef::new(member_name),
        );
        Ok(self)
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    /// The description of this [`UnionType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// An ordered list of the names of each type defined as a member of this
    /// union.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys().map(String::as_str).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
