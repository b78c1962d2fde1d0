use crate::file_reader;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentParseError {
    #[error("Failure while trying to read an executable document from disk")]
    FileReadError(#[source] Box<file_reader::ReadContentError>),

    #[error("Error parsing executable document: {0}")]
    ParseError(String),
}
