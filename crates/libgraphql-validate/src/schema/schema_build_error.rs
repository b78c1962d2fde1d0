use crate::ast::OperationKind;
use crate::file_reader::ReadContentError;
use crate::types::GraphQLTypeKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("Multiple definitions of the `{value_name}` value on enum `{enum_name}`")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
    },

    #[error("Multiple definitions of the `{field_name}` field on type `{type_name}`")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
    },

    #[error("`{type_name}` declares that it implements `{interface_name}` more than once")]
    DuplicateInterfaceImplementsDeclaration {
        type_name: String,
        interface_name: String,
    },

    #[error("Multiple definitions of the `{parameter_name}` parameter on field `{field_name}`")]
    DuplicateParameterDefinition {
        field_name: String,
        parameter_name: String,
    },

    #[error("Multiple schema definitions declare the {operation} root operation type")]
    DuplicateOperationTypeDefinition {
        operation: OperationKind,
    },

    #[error("Multiple definitions of the `{type_name}` type")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("Union `{type_name}` lists `{member_name}` as a member more than once")]
    DuplicateUnionMember {
        type_name: String,
        member_name: String,
    },

    #[error(
        "The {operation} root operation type must be an Object type, but \
        `{type_name}` is a(n) {type_kind} type"
    )]
    InvalidOperationType {
        operation: OperationKind,
        type_name: String,
        type_kind: GraphQLTypeKind,
    },

    #[error("No `Query` root operation type was defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "A scalar coercion was registered for `{type_name}`, but no custom \
        scalar by that name is defined"
    )]
    ScalarCoercionForUndefinedScalar {
        type_name: String,
    },

    #[error("Failure to read schema file {}: {source}", .file_path.display())]
    SchemaFileReadError {
        file_path: PathBuf,
        source: Box<ReadContentError>,
    },

    #[error("Failure to parse schema source: {0}")]
    SchemaParseError(String),

    #[error("The {operation} root operation type `{type_name}` is not defined")]
    UndefinedOperationType {
        operation: OperationKind,
        type_name: String,
    },

    #[error("{referenced_by} refers to `{type_name}`, which is not defined")]
    UndefinedTypeReference {
        referenced_by: String,
        type_name: String,
    },

    #[error("Type extensions are not supported (found an extension of `{type_name}`)")]
    UnsupportedTypeExtension {
        type_name: String,
    },
}
