use crate::ast::SelectionSet;
use crate::loc::SourceLocation;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub selection_set: SelectionSet,
    pub location: SourceLocation,
}
