use crate::ast::OperationKind;
use crate::coercion::ShapeRegistry;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// Represents a fully built, read-only GraphQL
/// [schema](https://spec.graphql.org/October2021/#sec-Schema): a registry of
/// named [`GraphQLType`]s plus the root operation types.
///
/// A `Schema` never changes after [`SchemaBuilder::build()`] returns it, so it
/// can be shared (e.g. behind an `Arc`) by any number of concurrent
/// validations and coercions.
#[derive(Clone, Debug)]
pub struct Schema {
    pub(super) input_shapes: ShapeRegistry,
    pub(super) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(super) query_type: NamedGraphQLTypeRef,
    pub(super) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(super) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Every type defined in this schema (including the built-in scalars), in
    /// the order they were registered.
    pub fn all_types(&self) -> impl Iterator<Item = &GraphQLType> {
        self.types.values()
    }

    pub fn find_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// The runtime shapes of every input object and enum type in this schema,
    /// used to materialize coerced input data.
    pub fn input_shapes(&self) -> &ShapeRegistry {
        &self.input_shapes
    }

    /// The
    /// [`Mutation` root operation type](https://spec.graphql.org/October2021/#sec-Root-Operation-Types)
    /// if one was defined.
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type.as_ref().map(|type_ref| self.deref_root(type_ref))
    }

    /// The
    /// [`Query` root operation type](https://spec.graphql.org/October2021/#sec-Root-Operation-Types).
    pub fn query_type(&self) -> &ObjectType {
        self.deref_root(&self.query_type)
    }

    /// The root type an operation of the given kind selects against, if this
    /// schema defines one.
    pub fn root_type(&self, kind: OperationKind) -> Option<&GraphQLType> {
        let type_ref = match kind {
            OperationKind::Mutation => self.mutation_type.as_ref()?,
            OperationKind::Query => &self.query_type,
            OperationKind::Subscription => self.subscription_type.as_ref()?,
        };
        type_ref.deref(self).ok()
    }

    /// The
    /// [`Subscription` root operation type](https://spec.graphql.org/October2021/#sec-Root-Operation-Types)
    /// if one was defined.
    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.subscription_type.as_ref().map(|type_ref| self.deref_root(type_ref))
    }

    fn deref_root(&self, type_ref: &NamedGraphQLTypeRef) -> &ObjectType {
        type_ref.deref(self)
            .expect("root type is present in schema")
            .as_object()
            .expect("root type is an object type")
    }
}
