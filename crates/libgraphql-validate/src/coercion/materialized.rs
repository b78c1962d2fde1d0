use indexmap::IndexMap;

/// A strongly-typed, resolver-facing value produced by a
/// [`Materializer`](crate::coercion::Materializer).
#[derive(Clone, Debug, PartialEq)]
pub enum Materialized {
    Boolean(bool),
    Enum {
        name: String,
        value: i64,
    },
    Float(f64),
    Int(i32),
    /// A value of [`Shape::Any`](crate::coercion::Shape::Any), kept as-is.
    Json(serde_json::Value),
    List(Vec<Materialized>),
    Long(i64),
    Null,
    /// Members keyed by their declared name, in declaration order.
    Object(IndexMap<String, Materialized>),
    String(String),
}
impl Materialized {
    pub fn as_object(&self) -> Option<&IndexMap<String, Materialized>> {
        if let Self::Object(members) = self {
            Some(members)
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Convert back into plain JSON. Enums become their member name.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Boolean(b) => serde_json::Value::Bool(*b),
            Self::Enum { name, .. } => serde_json::Value::String(name.to_owned()),
            Self::Float(f) => serde_json::Value::from(*f),
            Self::Int(i) => serde_json::Value::from(*i),
            Self::Json(value) => value.clone(),
            Self::List(items) =>
                serde_json::Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Long(l) => serde_json::Value::from(*l),
            Self::Null => serde_json::Value::Null,
            Self::Object(members) => serde_json::Value::Object(
                members.iter()
                    .map(|(name, value)| (name.to_owned(), value.to_json()))
                    .collect(),
            ),
            Self::String(s) => serde_json::Value::String(s.to_owned()),
        }
    }
}
