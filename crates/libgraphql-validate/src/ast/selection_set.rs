use crate::ast::Selection;
use crate::loc::SourceLocation;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub location: SourceLocation,
}
