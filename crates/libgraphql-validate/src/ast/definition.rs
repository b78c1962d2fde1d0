use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::loc::SourceLocation;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}
impl Definition {
    pub fn as_operation(&self) -> Option<&OperationDefinition> {
        if let Self::Operation(op) = self {
            Some(op)
        } else {
            None
        }
    }

    pub fn location(&self) -> SourceLocation {
        match self {
            Self::Operation(op) => op.location,
            Self::Fragment(frag) => frag.location,
        }
    }
}
