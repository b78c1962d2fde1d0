//! The validation rules shipped with this crate.

mod arguments_of_correct_type;
mod default_values_of_correct_type;
mod lone_anonymous_operation;
mod scalar_leafs;
mod unique_operation_names;

pub use arguments_of_correct_type::ArgumentsOfCorrectType;
pub use default_values_of_correct_type::DefaultValuesOfCorrectType;
pub use lone_anonymous_operation::LoneAnonymousOperation;
pub use scalar_leafs::ScalarLeafs;
pub use unique_operation_names::UniqueOperationNames;

use crate::validation::ValidationRule;
use std::sync::OnceLock;

/// The rules [`DocumentValidator::validate()`](crate::DocumentValidator::validate)
/// uses when it isn't given any:
///
/// 1. [`UniqueOperationNames`]
/// 2. [`LoneAnonymousOperation`]
/// 3. [`ScalarLeafs`]
/// 4. [`ArgumentsOfCorrectType`]
/// 5. [`DefaultValuesOfCorrectType`]
pub fn default_rules() -> &'static [Box<dyn ValidationRule>] {
    static DEFAULT_RULES: OnceLock<Vec<Box<dyn ValidationRule>>> = OnceLock::new();
    DEFAULT_RULES.get_or_init(|| vec![
        Box::new(UniqueOperationNames),
        Box::new(LoneAnonymousOperation),
        Box::new(ScalarLeafs),
        Box::new(ArgumentsOfCorrectType),
        Box::new(DefaultValuesOfCorrectType),
    ])
}
