use crate::loc::SourceLocation;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentSpread {
    pub fragment_name: String,
    pub location: SourceLocation,
}
