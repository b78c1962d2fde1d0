use crate::ast::Definition;
use crate::ast::DocumentParseError;
use crate::ast::OperationDefinition;
use crate::ast::lower;
use crate::file_reader;
use std::path::Path;

/// A parsed
/// [executable document](https://spec.graphql.org/October2021/#ExecutableDocument):
/// an ordered list of operation and fragment definitions.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
}
impl Document {
    /// Read and parse the executable document stored at `file_path`.
    pub fn from_file(
        file_path: impl AsRef<Path>,
    ) -> Result<Self, DocumentParseError> {
        let content = file_reader::read_content(file_path.as_ref())
            .map_err(|err| DocumentParseError::FileReadError(Box::new(err)))?;
        Self::parse(content.as_str())
    }

    /// Find an operation by name. Passing `None` selects the document's only
    /// operation (and returns `None` if there is more than one).
    pub fn operation(&self, name: Option<&str>) -> Option<&OperationDefinition> {
        match name {
            Some(name) => self.operations().find(|op| op.name.as_deref() == Some(name)),
            None => {
                let mut ops = self.operations();
                let first = ops.next();
                if ops.next().is_some() {
                    None
                } else {
                    first
                }
            },
        }
    }

    /// Iterate over every [`OperationDefinition`] in document order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(Definition::as_operation)
    }

    /// Parse an executable document.
    pub fn parse(source: &str) -> Result<Self, DocumentParseError> {
        let ast_doc = graphql_parser::query::parse_query::<String>(source)
            .map_err(|err| DocumentParseError::ParseError(err.to_string()))?;
        Ok(lower::lower_document(&ast_doc))
    }
}
