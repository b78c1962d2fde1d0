use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeRef;

/// Describes the resolver-facing form a runtime value is
/// [materialized](crate::coercion::Materializer) into.
///
/// Object and enum shapes are referenced by name and looked up in a
/// [`ShapeRegistry`](crate::coercion::ShapeRegistry), so shapes can be
/// recursive.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Shape {
    /// Any non-null JSON value, kept as-is.
    Any,
    Enum(String),
    List(Box<Shape>),
    /// `null` is allowed (and kept) in place of the inner shape. Lists and
    /// enums still materialize `null` as an empty list and the first member.
    Nullable(Box<Shape>),
    Object(String),
    Primitive(PrimitiveKind),
}
impl Shape {
    /// The shape of a value of the given schema type. Returns `None` for
    /// types that can't be used as input (or that the schema doesn't define).
    ///
    /// Built-in scalars map to [`Shape::Primitive`]s (`ID` is a
    /// [`PrimitiveKind::String`]), custom scalars to [`Shape::Any`]. Every
    /// position that isn't wrapped in a non-null type becomes a
    /// [`Shape::Nullable`].
    pub fn from_type_ref(type_ref: &TypeRef, schema: &Schema) -> Option<Self> {
        match type_ref {
            TypeRef::NonNull(inner) => Self::from_non_null_type_ref(inner, schema),
            _ => Self::from_non_null_type_ref(type_ref, schema)
                .map(|shape| Self::Nullable(Box::new(shape))),
        }
    }

    fn from_non_null_type_ref(type_ref: &TypeRef, schema: &Schema) -> Option<Self> {
        match type_ref {
            TypeRef::NonNull(inner) => Self::from_non_null_type_ref(inner, schema),
            TypeRef::List(inner) =>
                Self::from_type_ref(inner, schema).map(|shape| Self::List(Box::new(shape))),
            TypeRef::Named(named_ref) => match named_ref.deref(schema).ok()? {
                GraphQLType::Enum(enum_type) =>
                    Some(Self::Enum(enum_type.name().to_string())),
                GraphQLType::InputObject(input_obj) =>
                    Some(Self::Object(input_obj.name().to_string())),
                GraphQLType::Scalar(scalar) => Some(match scalar.name() {
                    "Boolean" => Self::Primitive(PrimitiveKind::Boolean),
                    "Float" => Self::Primitive(PrimitiveKind::Float),
                    "ID" | "String" => Self::Primitive(PrimitiveKind::String),
                    "Int" => Self::Primitive(PrimitiveKind::Int),
                    _ => Self::Any,
                }),
                GraphQLType::Interface(_)
                    | GraphQLType::Object(_)
                    | GraphQLType::Union(_) => None,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PrimitiveKind {
    Boolean,
    Float,
    /// A signed 32-bit integer.
    Int,
    /// A signed 64-bit integer.
    Long,
    String,
}
impl PrimitiveKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::String => "String",
        }
    }
}
impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A named object made of [`MemberShape`]s, in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectShape {
    members: Vec<MemberShape>,
    name: String,
}
impl ObjectShape {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            members: vec![],
            name: name.as_ref().to_string(),
        }
    }

    pub fn with_member(mut self, member: MemberShape) -> Self {
        self.members.push(member);
        self
    }

    pub fn members(&self) -> &[MemberShape] {
        self.members.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MemberShape {
    default_value: Option<serde_json::Value>,
    name: String,
    shape: Shape,
}
impl MemberShape {
    pub fn new(name: impl AsRef<str>, shape: Shape) -> Self {
        Self {
            default_value: None,
            name: name.as_ref().to_string(),
            shape,
        }
    }

    pub fn with_default_value(mut self, default_value: serde_json::Value) -> Self {
        self.default_value = Some(default_value);
        self
    }

    /// The value a member takes when the source object has no entry for it.
    pub fn default_value(&self) -> Option<&serde_json::Value> {
        self.default_value.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

/// A named enum whose members each carry a numeric discriminant.
///
/// Member order matters: a `null` source materializes to the first member.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumShape {
    members: Vec<(String, i64)>,
    name: String,
}
impl EnumShape {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            members: vec![],
            name: name.as_ref().to_string(),
        }
    }

    /// An enum whose discriminants are the 0-based positions of
    /// `member_names`.
    pub fn from_names<S: AsRef<str>>(
        name: impl AsRef<str>,
        member_names: impl IntoIterator<Item = S>,
    ) -> Self {
        member_names.into_iter()
            .zip(0..)
            .fold(Self::new(name), |shape, (member_name, value)| {
                shape.with_member(member_name, value)
            })
    }

    pub fn with_member(mut self, member_name: impl AsRef<str>, value: i64) -> Self {
        self.members.push((member_name.as_ref().to_string(), value));
        self
    }

    /// Find a member by name, ignoring ASCII case.
    pub fn find_by_name(&self, member_name: &str) -> Option<(&str, i64)> {
        self.members
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(member_name))
            .map(|(name, value)| (name.as_str(), *value))
    }

    pub fn find_by_value(&self, value: i64) -> Option<(&str, i64)> {
        self.members
            .iter()
            .find(|(_, member_value)| *member_value == value)
            .map(|(name, value)| (name.as_str(), *value))
    }

    pub fn first_member(&self) -> Option<(&str, i64)> {
        self.members.first().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn members(&self) -> &[(String, i64)] {
        self.members.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
