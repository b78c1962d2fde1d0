//! The type system model: named [`GraphQLType`]s registered in a
//! [`Schema`](crate::Schema) and the wrapping [`TypeRef`]s that point at them
//! by name.

mod builtin_scalars;
mod enum_type;
mod enum_value;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_field;
mod input_object_type;
mod interface_type;
mod object_or_interface_type_data;
mod object_type;
mod parameter;
mod scalar_coercion;
mod scalar_type;
mod type_ref;
mod union_type;

pub use builtin_scalars::AnyScalar;
pub use builtin_scalars::BooleanScalar;
pub use builtin_scalars::FloatScalar;
pub use builtin_scalars::IdScalar;
pub use builtin_scalars::IntScalar;
pub use builtin_scalars::StringScalar;
pub use enum_type::EnumType;
pub use enum_value::EnumValue;
pub use field::Field;
pub use field::typename_field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_type::ObjectType;
pub use parameter::Parameter;
pub use scalar_coercion::ScalarCoercion;
pub use scalar_type::ScalarType;
pub use type_ref::NamedGraphQLTypeRef;
pub use type_ref::TypeRef;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
