use crate::loc::SourceLocation;
use std::sync::Arc;

/// A problem found while validating a document: a message and the
/// location(s) it applies to.
#[derive(Clone, Debug)]
pub struct ValidationError {
    cause: Option<Arc<dyn std::error::Error + Send + Sync>>,
    locations: Vec<SourceLocation>,
    message: String,
}
impl ValidationError {
    pub fn new(message: impl Into<String>, locations: Vec<SourceLocation>) -> Self {
        Self {
            cause: None,
            locations,
            message: message.into(),
        }
    }

    pub fn with_cause(mut self, cause: Arc<dyn std::error::Error + Send + Sync>) -> Self {
        self.cause = Some(cause);
        self
    }

    /// The underlying error that led to this one, if any.
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn locations(&self) -> &[SourceLocation] {
        self.locations.as_slice()
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}
impl std::cmp::PartialEq for ValidationError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message && self.locations == other.locations
    }
}
impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message.as_str())
    }
}
impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
