use crate::ast::Value;
use crate::loc::SourceLocation;

/// A `name: value` argument passed to a [`Field`](crate::ast::Field).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Argument {
    pub name: String,
    pub value: Value,
    pub location: SourceLocation,
}
