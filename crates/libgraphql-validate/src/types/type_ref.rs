use crate::ast;
use crate::named_ref::NamedRef;
use crate::schema::Schema;
use crate::types::GraphQLType;

/// A by-name reference to a [`GraphQLType`] stored in a [`Schema`].
pub type NamedGraphQLTypeRef = NamedRef<Schema, GraphQLType>;

/// A (possibly wrapped) reference to a type: the type of a field, parameter,
/// input field or variable.
///
/// Unwrapping [`TypeRef::List`] and [`TypeRef::NonNull`] layers always ends at
/// exactly one [`TypeRef::Named`]. The named type is only resolved when a
/// [`Schema`] is supplied, so a `TypeRef` may refer to a type that (directly or
/// indirectly) contains itself.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeRef {
    List(Box<TypeRef>),
    Named(NamedGraphQLTypeRef),
    NonNull(Box<TypeRef>),
}
impl TypeRef {
    pub fn named(type_name: impl AsRef<str>) -> Self {
        Self::Named(NamedGraphQLTypeRef::new(type_name))
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wrap `inner` in a [`TypeRef::NonNull`]. Wrapping a type that is already
    /// non-null returns it unchanged, so `NonNull(NonNull(_))` can't be built
    /// through this constructor.
    pub fn non_null(inner: TypeRef) -> Self {
        if inner.is_non_null() {
            inner
        } else {
            Self::NonNull(Box::new(inner))
        }
    }

    pub fn from_ast(ast_type: &ast::Type) -> Self {
        match ast_type {
            ast::Type::Named(name) => Self::named(name),
            ast::Type::List(inner) => Self::list(Self::from_ast(inner)),
            ast::Type::NonNull(inner) => Self::non_null(Self::from_ast(inner)),
        }
    }

    pub fn as_named_ref(&self) -> Option<&NamedGraphQLTypeRef> {
        if let Self::Named(named_ref) = self {
            Some(named_ref)
        } else {
            None
        }
    }

    pub fn is_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::NonNull(inner) => inner.is_list(),
            Self::Named(_) => false,
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// The name of the type left after unwrapping every
    /// [`TypeRef::List`]/[`TypeRef::NonNull`] layer.
    pub fn named_type_name(&self) -> &str {
        self.innermost_named_ref().name()
    }

    /// Resolve the type left after unwrapping every
    /// [`TypeRef::List`]/[`TypeRef::NonNull`] layer. Returns `None` if the
    /// schema has no type by that name.
    pub fn named_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        self.innermost_named_ref().deref(schema).ok()
    }

    /// This type with one outer [`TypeRef::NonNull`] layer removed (if there
    /// is one).
    pub fn nullable(&self) -> &TypeRef {
        match self {
            Self::NonNull(inner) => inner,
            _ => self,
        }
    }

    fn innermost_named_ref(&self) -> &NamedGraphQLTypeRef {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_named_ref(),
            Self::Named(named_ref) => named_ref,
        }
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(named_ref) => f.write_str(named_ref.name()),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
