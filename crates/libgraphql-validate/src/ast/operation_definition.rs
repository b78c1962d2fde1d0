use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::loc::SourceLocation;

/// A query, mutation, or subscription. The `{ ... }` shorthand form lowers to
/// an anonymous [`OperationKind::Query`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub selection_set: SelectionSet,
    pub location: SourceLocation,
}
impl OperationDefinition {
    pub fn variable_definition(&self, name: &str) -> Option<&VariableDefinition> {
        self.variable_definitions.iter().find(|var_def| var_def.name == name)
    }
}
