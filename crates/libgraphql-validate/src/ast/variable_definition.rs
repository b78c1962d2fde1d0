use crate::ast::Type;
use crate::ast::Value;
use crate::loc::SourceLocation;

/// `$name: Type = default` as declared on an operation.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableDefinition {
    pub name: String,
    pub var_type: Type,
    pub default_value: Option<Value>,
    pub location: SourceLocation,
}
