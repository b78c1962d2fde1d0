use crate::validation::ValidationError;

/// Every [`ValidationError`] found by a validation, in the order they were
/// reported. A document is valid (against the rules it was checked with) when
/// there are none.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}
impl ValidationResult {
    pub fn errors(&self) -> &[ValidationError] {
        self.errors.as_slice()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
