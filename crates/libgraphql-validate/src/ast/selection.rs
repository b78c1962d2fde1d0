use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::loc::SourceLocation;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}
impl Selection {
    pub fn location(&self) -> SourceLocation {
        match self {
            Self::Field(field) => field.location,
            Self::FragmentSpread(spread) => spread.location,
            Self::InlineFragment(frag) => frag.location,
        }
    }
}
