use crate::coercion::PrimitiveKind;
use thiserror::Error;

/// A failure to coerce runtime input data. Unlike a
/// [`ValidationError`](crate::ValidationError), this is raised after a document
/// has been accepted, while building argument/variable values or
/// materializing them.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoercionError {
    #[error("Expected a list, found {value}.")]
    ExpectedList {
        value: serde_json::Value,
    },

    #[error("Expected an object for `{shape_name}`, found {value}.")]
    ExpectedObject {
        shape_name: String,
        value: serde_json::Value,
    },

    #[error("In element {index}")]
    InElement {
        index: usize,
        #[source]
        source: Box<CoercionError>,
    },

    #[error("In member `{member_name}`")]
    InMember {
        member_name: String,
        #[source]
        source: Box<CoercionError>,
    },

    #[error(
        "Argument '{argument_name}' of required type '{type_name}' on field \
        '{field_name}' was not provided."
    )]
    InvalidArgument {
        argument_name: String,
        field_name: String,
        type_name: String,
    },

    /// The specific problems that made a runtime value invalid for its type.
    #[error("{}", .problems.join("\n"))]
    InvalidValue {
        problems: Vec<String>,
    },

    #[error("Variable '${variable_name}' expected value of type '{type_name}'.")]
    InvalidVariableValue {
        variable_name: String,
        type_name: String,
        #[source]
        source: Box<CoercionError>,
    },

    #[error("Variable '${variable_name}' of required type '{type_name}' was not provided.")]
    MissingRequiredVariable {
        variable_name: String,
        type_name: String,
    },

    #[error(
        "Variable '${variable_name}' expected value of type '{type_name}' \
        which cannot be used as an input type."
    )]
    NonInputVariableType {
        variable_name: String,
        type_name: String,
    },

    #[error("Cannot convert {value} to {target}.")]
    PrimitiveConversion {
        value: serde_json::Value,
        target: PrimitiveKind,
    },

    #[error("Unknown value '{value}' for enum '{enum_name}'.")]
    UnknownEnumValue {
        value: String,
        enum_name: String,
    },

    #[error("No shape is registered for `{shape_name}`.")]
    UnknownShape {
        shape_name: String,
    },

    #[error("Variable '${variable_name}' has unknown type '{type_name}'.")]
    UnknownVariableType {
        variable_name: String,
        type_name: String,
    },
}
