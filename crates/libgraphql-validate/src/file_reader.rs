//! Reading of schema, document and variables files from disk.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadContentError>;

/// Read the UTF-8 text stored at `file_path`.
pub fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path).map_err(|err| {
        ReadContentError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        }
    })?;
    log::trace!("Read {} bytes from {}.", bytes.len(), file_path.display());

    String::from_utf8(bytes).map_err(|err| {
        ReadContentError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        }
    })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("The contents of {file_path:?} are not valid UTF-8")]
    FileDecodeError {
        file_path: PathBuf,
        #[source]
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read {file_path:?}")]
    FileReadError {
        file_path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("{0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
