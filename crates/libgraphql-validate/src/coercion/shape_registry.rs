use crate::Variables;
use crate::coercion::EnumShape;
use crate::coercion::MemberShape;
use crate::coercion::ObjectShape;
use crate::coercion::Shape;
use crate::coercion::value_from_ast;
use crate::schema::Schema;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// The named [`ObjectShape`]s and [`EnumShape`]s that [`Shape::Object`] and
/// [`Shape::Enum`] refer to.
///
/// Every [`Schema`] carries a registry describing its own input object and
/// enum types ([`Schema::input_shapes()`]); callers may also build their own.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeRegistry {
    enums: IndexMap<String, EnumShape>,
    objects: IndexMap<String, ObjectShape>,
}
impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Describe every input object and enum type defined in `schema`.
    ///
    /// Enum members are numbered by declaration order. Input object members
    /// take their default from the field's default value, coerced for the
    /// field's type.
    pub fn from_schema(schema: &Schema) -> Self {
        let mut registry = Self::new();
        for type_ in schema.all_types() {
            match type_ {
                GraphQLType::Enum(enum_type) => {
                    registry.register_enum(EnumShape::from_names(
                        enum_type.name(),
                        enum_type.values().keys(),
                    ));
                },

                GraphQLType::InputObject(input_obj) => {
                    let object_shape = input_obj.fields()
                        .values()
                        .fold(ObjectShape::new(input_obj.name()), |object_shape, field| {
                            let shape = Shape::from_type_ref(field.type_ref(), schema)
                                .unwrap_or(Shape::Any);
                            let mut member = MemberShape::new(field.name(), shape);
                            let default_value = field.default_value().and_then(|default_value| {
                                value_from_ast(
                                    field.type_ref(),
                                    default_value,
                                    &Variables::new(),
                                    schema,
                                )
                            });
                            if let Some(default_value) = default_value {
                                member = member.with_default_value(default_value);
                            }
                            object_shape.with_member(member)
                        });
                    registry.register_object(object_shape);
                },

                GraphQLType::Interface(_)
                    | GraphQLType::Object(_)
                    | GraphQLType::Scalar(_)
                    | GraphQLType::Union(_) => (),
            }
        }
        registry
    }

    pub fn enum_shape(&self, name: &str) -> Option<&EnumShape> {
        self.enums.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty() && self.objects.is_empty()
    }

    /// The total number of registered shapes.
    pub fn len(&self) -> usize {
        self.enums.len() + self.objects.len()
    }

    pub fn object_shape(&self, name: &str) -> Option<&ObjectShape> {
        self.objects.get(name)
    }

    /// Register an [`EnumShape`], returning any shape previously registered
    /// under the same name.
    pub fn register_enum(&mut self, shape: EnumShape) -> Option<EnumShape> {
        self.enums.insert(shape.name().to_string(), shape)
    }

    /// Register an [`ObjectShape`], returning any shape previously registered
    /// under the same name.
    pub fn register_object(&mut self, shape: ObjectShape) -> Option<ObjectShape> {
        self.objects.insert(shape.name().to_string(), shape)
    }
}
