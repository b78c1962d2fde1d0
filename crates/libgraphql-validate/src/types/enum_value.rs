/// Represents a single value defined on an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValue {
    pub(super) deprecation_reason: Option<String>,
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl EnumValue {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            deprecation_reason: None,
            description: None,
            name: name.as_ref().to_string(),
        }
    }

    pub fn with_deprecation_reason(mut self, reason: impl AsRef<str>) -> Self {
        self.deprecation_reason = Some(reason.as_ref().to_string());
        self
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    /// The reason given by a `@deprecated` annotation on this value, if any.
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
