use crate::ast::SelectionSet;
use crate::loc::SourceLocation;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentDefinition {
    pub name: String,
    pub type_condition: String,
    pub selection_set: SelectionSet,
    pub location: SourceLocation,
}
