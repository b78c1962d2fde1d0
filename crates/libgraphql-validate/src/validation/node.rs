use crate::ast;
use crate::loc::SourceLocation;

/// A reference to one node of a [`Document`](ast::Document) as visited by the
/// validation traversal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Node<'a> {
    Argument(&'a ast::Argument),
    Document(&'a ast::Document),
    Field(&'a ast::Field),
    FragmentDefinition(&'a ast::FragmentDefinition),
    FragmentSpread(&'a ast::FragmentSpread),
    InlineFragment(&'a ast::InlineFragment),
    OperationDefinition(&'a ast::OperationDefinition),
    SelectionSet(&'a ast::SelectionSet),
    VariableDefinition(&'a ast::VariableDefinition),
}
impl<'a> Node<'a> {
    /// The nodes visited beneath this one, in document order. Fragment
    /// spreads are leaves: the fragment they name is visited where it is
    /// defined, not where it is spread.
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Self::Document(doc) =>
                doc.definitions.iter()
                    .map(|def| match def {
                        ast::Definition::Fragment(frag) => Node::FragmentDefinition(frag),
                        ast::Definition::Operation(op) => Node::OperationDefinition(op),
                    })
                    .collect(),

            Self::Field(field) =>
                field.arguments.iter()
                    .map(Node::Argument)
                    .chain(field.selection_set.as_ref().map(Node::SelectionSet))
                    .collect(),

            Self::FragmentDefinition(frag) => vec![Node::SelectionSet(&frag.selection_set)],

            Self::InlineFragment(inline) => vec![Node::SelectionSet(&inline.selection_set)],

            Self::OperationDefinition(op) =>
                op.variable_definitions.iter()
                    .map(Node::VariableDefinition)
                    .chain(std::iter::once(Node::SelectionSet(&op.selection_set)))
                    .collect(),

            Self::SelectionSet(selection_set) =>
                selection_set.selections.iter()
                    .map(|selection| match selection {
                        ast::Selection::Field(field) => Node::Field(field),
                        ast::Selection::FragmentSpread(spread) => Node::FragmentSpread(spread),
                        ast::Selection::InlineFragment(inline) => Node::InlineFragment(inline),
                    })
                    .collect(),

            Self::Argument(_)
                | Self::FragmentSpread(_)
                | Self::VariableDefinition(_) => vec![],
        }
    }

    /// Where this node starts in the source document. `None` for the
    /// [`Node::Document`] itself.
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            Self::Argument(arg) => Some(arg.location),
            Self::Document(_) => None,
            Self::Field(field) => Some(field.location),
            Self::FragmentDefinition(frag) => Some(frag.location),
            Self::FragmentSpread(spread) => Some(spread.location),
            Self::InlineFragment(inline) => Some(inline.location),
            Self::OperationDefinition(op) => Some(op.location),
            Self::SelectionSet(selection_set) => Some(selection_set.location),
            Self::VariableDefinition(var_def) => Some(var_def.location),
        }
    }
}
