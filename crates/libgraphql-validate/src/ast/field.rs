use crate::ast::Argument;
use crate::ast::SelectionSet;
use crate::loc::SourceLocation;

/// A field selection, e.g. `alias: name(arg: 1) { ... }`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub selection_set: Option<SelectionSet>,
    pub location: SourceLocation,
}
impl Field {
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }

    /// Whether this field carries a selection set with at least one
    /// selection in it.
    pub fn has_sub_selection(&self) -> bool {
        self.selection_set
            .as_ref()
            .is_some_and(|selection_set| !selection_set.selections.is_empty())
    }

    /// The key this field's result is written under: its alias if it has
    /// one, otherwise its name.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }
}
