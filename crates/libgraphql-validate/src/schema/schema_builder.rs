use crate::ast;
use crate::ast::OperationKind;
use crate::coercion::ShapeRegistry;
use crate::file_reader;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarCoercion;
use crate::types::ScalarType;
use crate::types::TypeRef;
use crate::types::UnionType;
use graphql_parser::schema as gp;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Incrementally registers types (programmatically or by loading SDL) and
/// then [builds](SchemaBuilder::build) an immutable [`Schema`].
///
/// ```
/// use libgraphql_validate::schema::SchemaBuilder;
///
/// # fn example() -> Result<(), libgraphql_validate::schema::SchemaBuildError> {
/// let schema = SchemaBuilder::new()
///     .load_str("type Query { hello(name: String = \"World\"): String }")?
///     .build()?;
///
/// assert!(schema.query_type().field("hello").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    mutation_type_name: Option<String>,
    query_type_name: Option<String>,
    scalar_coercions: HashMap<String, Arc<dyn ScalarCoercion>>,
    subscription_type_name: Option<String>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    /// A builder with only the built-in scalars (`Boolean`, `Float`, `ID`,
    /// `Int` and `String`) defined.
    pub fn new() -> Self {
        Self {
            mutation_type_name: None,
            query_type_name: None,
            scalar_coercions: HashMap::new(),
            subscription_type_name: None,
            types: ScalarType::builtins()
                .into_iter()
                .map(|scalar| (scalar.name().to_string(), GraphQLType::from(scalar)))
                .collect(),
        }
    }

    /// Supply the [`ScalarCoercion`] for a custom scalar. The scalar itself
    /// may be defined before or after this call (e.g. by SDL loaded later); it
    /// only needs to exist once [`SchemaBuilder::build()`] is called.
    pub fn add_scalar_coercion(
        mut self,
        type_name: impl AsRef<str>,
        coercion: Arc<dyn ScalarCoercion>,
    ) -> Self {
        self.scalar_coercions.insert(type_name.as_ref().to_string(), coercion);
        self
    }

    pub fn add_type(mut self, type_: impl Into<GraphQLType>) -> Result<Self> {
        let type_ = type_.into();
        let type_name = type_.name().to_string();
        if self.types.contains_key(&type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition { type_name });
        }
        self.types.insert(type_name, type_);
        Ok(self)
    }

    /// Parse schema definition language from a file and register every type
    /// (and the `schema { ... }` root operation types) it defines.
    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| SchemaBuildError::SchemaFileReadError {
                file_path: file_path.to_path_buf(),
                source: Box::new(err),
            })?;
        log::debug!("Loading schema file {}", file_path.display());
        self.load_str(content.as_str())
    }

    pub fn load_files<P: AsRef<Path>>(
        self,
        file_paths: impl IntoIterator<Item = P>,
    ) -> Result<Self> {
        file_paths.into_iter()
            .try_fold(self, |builder, file_path| builder.load_file(file_path))
    }

    /// Parse schema definition language and register every type (and the
    /// `schema { ... }` root operation types) it defines.
    ///
    /// Directive definitions are accepted but ignored. Type extensions are
    /// rejected.
    pub fn load_str(mut self, content: &str) -> Result<Self> {
        let doc = gp::parse_schema::<String>(content)
            .map_err(|err| SchemaBuildError::SchemaParseError(err.to_string()))?;

        for def in &doc.definitions {
            match def {
                gp::Definition::SchemaDefinition(schema_def) => {
                    if let Some(name) = &schema_def.query {
                        self.set_root_type_name(OperationKind::Query, name)?;
                    }
                    if let Some(name) = &schema_def.mutation {
                        self.set_root_type_name(OperationKind::Mutation, name)?;
                    }
                    if let Some(name) = &schema_def.subscription {
                        self.set_root_type_name(OperationKind::Subscription, name)?;
                    }
                },

                gp::Definition::TypeDefinition(type_def) =>
                    self = self.add_type(lower_type_definition(type_def)?)?,

                gp::Definition::TypeExtension(type_ext) =>
                    return Err(SchemaBuildError::UnsupportedTypeExtension {
                        type_name: type_extension_name(type_ext).to_string(),
                    }),

                gp::Definition::DirectiveDefinition(directive_def) =>
                    log::warn!(
                        "Ignoring definition of directive `@{}`",
                        directive_def.name,
                    ),
            }
        }

        Ok(self)
    }

    pub fn set_mutation_type(mut self, type_name: impl AsRef<str>) -> Result<Self> {
        self.set_root_type_name(OperationKind::Mutation, type_name.as_ref())?;
        Ok(self)
    }

    /// Use `type_name` as the `Query` root operation type rather than the type
    /// named `Query`.
    pub fn set_query_type(mut self, type_name: impl AsRef<str>) -> Result<Self> {
        self.set_root_type_name(OperationKind::Query, type_name.as_ref())?;
        Ok(self)
    }

    pub fn set_subscription_type(mut self, type_name: impl AsRef<str>) -> Result<Self> {
        self.set_root_type_name(OperationKind::Subscription, type_name.as_ref())?;
        Ok(self)
    }

    /// Finalize the schema.
    ///
    /// Root operation types that were not set explicitly default to the
    /// types named `Query`, `Mutation` and `Subscription` (when defined). Every
    /// type referenced by a field, parameter, input field, interface list or
    /// union must be defined. Beyond that the type system is assumed to be
    /// well-formed.
    pub fn build(self) -> Result<Schema> {
        let Self {
            mutation_type_name,
            query_type_name,
            scalar_coercions,
            subscription_type_name,
            mut types,
        } = self;

        for (type_name, coercion) in scalar_coercions {
            match types.get_mut(&type_name) {
                Some(GraphQLType::Scalar(scalar)) if !scalar.is_builtin() =>
                    scalar.set_coercion(coercion),
                _ => return Err(SchemaBuildError::ScalarCoercionForUndefinedScalar {
                    type_name,
                }),
            }
        }

        let query_type =
            resolve_root_type(&types, OperationKind::Query, query_type_name)?
                .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type =
            resolve_root_type(&types, OperationKind::Mutation, mutation_type_name)?;
        let subscription_type =
            resolve_root_type(&types, OperationKind::Subscription, subscription_type_name)?;

        check_type_references(&types)?;

        let mut schema = Schema {
            input_shapes: ShapeRegistry::new(),
            mutation_type,
            query_type,
            subscription_type,
            types,
        };
        schema.input_shapes = ShapeRegistry::from_schema(&schema);

        log::debug!(
            "Built schema with {} types ({} input shapes)",
            schema.types.len(),
            schema.input_shapes.len(),
        );

        Ok(schema)
    }

    fn set_root_type_name(
        &mut self,
        operation: OperationKind,
        type_name: &str,
    ) -> Result<()> {
        let slot = match operation {
            OperationKind::Mutation => &mut self.mutation_type_name,
            OperationKind::Query => &mut self.query_type_name,
            OperationKind::Subscription => &mut self.subscription_type_name,
        };
        if slot.is_some() {
            return Err(SchemaBuildError::DuplicateOperationTypeDefinition {
                operation,
            });
        }
        *slot = Some(type_name.to_string());
        Ok(())
    }
}
impl std::default::Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_root_type(
    types: &IndexMap<String, GraphQLType>,
    operation: OperationKind,
    explicit_type_name: Option<String>,
) -> Result<Option<NamedGraphQLTypeRef>> {
    let type_name = match explicit_type_name {
        Some(type_name) => type_name,
        None => {
            let default_name = match operation {
                OperationKind::Mutation => "Mutation",
                OperationKind::Query => "Query",
                OperationKind::Subscription => "Subscription",
            };
            if !types.contains_key(default_name) {
                return Ok(None);
            }
            default_name.to_string()
        },
    };

    match types.get(&type_name) {
        Some(GraphQLType::Object(_)) =>
            Ok(Some(NamedGraphQLTypeRef::new(type_name))),
        Some(other_type) => Err(SchemaBuildError::InvalidOperationType {
            operation,
            type_name,
            type_kind: other_type.into(),
        }),
        None => Err(SchemaBuildError::UndefinedOperationType {
            operation,
            type_name,
        }),
    }
}

fn check_type_references(types: &IndexMap<String, GraphQLType>) -> Result<()> {
    let check_defined = |type_name: &str, referenced_by: &dyn Fn() -> String| -> Result<()> {
        if types.contains_key(type_name) {
            Ok(())
        } else {
            Err(SchemaBuildError::UndefinedTypeReference {
                referenced_by: referenced_by(),
                type_name: type_name.to_string(),
            })
        }
    };

    let check_fields = |type_name: &str, fields: &IndexMap<String, Field>| -> Result<()> {
        for field in fields.values() {
            check_defined(
                field.type_ref().named_type_name(),
                &|| format!("Field `{type_name}.{}`", field.name()),
            )?;
            for param in field.parameters().values() {
                check_defined(
                    param.type_ref().named_type_name(),
                    &|| format!(
                        "Parameter `{type_name}.{}({}:)`",
                        field.name(),
                        param.name(),
                    ),
                )?;
            }
        }
        Ok(())
    };

    for type_ in types.values() {
        match type_ {
            GraphQLType::Enum(_) | GraphQLType::Scalar(_) => (),

            GraphQLType::InputObject(input_obj) => {
                for field in input_obj.fields().values() {
                    check_defined(
                        field.type_ref().named_type_name(),
                        &|| format!("Input field `{}.{}`", input_obj.name(), field.name()),
                    )?;
                }
            },

            GraphQLType::Interface(iface) => {
                check_fields(iface.name(), iface.fields())?;
                for iface_name in iface.interface_names() {
                    check_defined(iface_name, &|| format!("Interface `{}`", iface.name()))?;
                }
            },

            GraphQLType::Object(obj) => {
                check_fields(obj.name(), obj.fields())?;
                for iface_name in obj.interface_names() {
                    check_defined(iface_name, &|| format!("Object `{}`", obj.name()))?;
                }
            },

            GraphQLType::Union(union_type) => {
                for member_name in union_type.member_type_names() {
                    check_defined(member_name, &|| format!("Union `{}`", union_type.name()))?;
                }
            },
        }
    }

    Ok(())
}

fn deprecation_reason(directives: &[gp::Directive<'_, String>]) -> Option<String> {
    let deprecated = directives.iter().find(|directive| directive.name == "deprecated")?;
    let reason = deprecated.arguments.iter().find_map(|(arg_name, value)| {
        match (arg_name.as_str(), value) {
            ("reason", gp::Value::String(reason)) => Some(reason.to_owned()),
            _ => None,
        }
    });
    Some(reason.unwrap_or_else(|| "No longer supported".to_string()))
}

fn lower_field(field_def: &gp::Field<'_, String>) -> Result<Field> {
    let mut field = Field::new(
        field_def.name.as_str(),
        TypeRef::from_ast(&ast::lower_type(&field_def.field_type)),
    );
    if let Some(description) = &field_def.description {
        field = field.with_description(description);
    }
    for input_value in &field_def.arguments {
        let mut param = Parameter::new(
            input_value.name.as_str(),
            TypeRef::from_ast(&ast::lower_type(&input_value.value_type)),
        );
        if let Some(default_value) = &input_value.default_value {
            param = param.with_default_value(ast::lower_value(default_value));
        }
        if let Some(description) = &input_value.description {
            param = param.with_description(description);
        }
        field = field.add_parameter(param)?;
    }
    Ok(field)
}

fn lower_type_definition(type_def: &gp::TypeDefinition<'_, String>) -> Result<GraphQLType> {
    Ok(match type_def {
        gp::TypeDefinition::Enum(enum_def) => {
            let mut enum_type = EnumType::new(enum_def.name.as_str());
            if let Some(description) = &enum_def.description {
                enum_type = enum_type.with_description(description);
            }
            for value_def in &enum_def.values {
                let mut value = EnumValue::new(value_def.name.as_str());
                if let Some(description) = &value_def.description {
                    value = value.with_description(description);
                }
                if let Some(reason) = deprecation_reason(&value_def.directives) {
                    value = value.with_deprecation_reason(reason);
                }
                enum_type = enum_type.add_value(value)?;
            }
            enum_type.into()
        },

        gp::TypeDefinition::InputObject(input_obj_def) => {
            let mut input_obj = InputObjectType::new(input_obj_def.name.as_str());
            if let Some(description) = &input_obj_def.description {
                input_obj = input_obj.with_description(description);
            }
            for input_value in &input_obj_def.fields {
                let mut field = InputField::new(
                    input_value.name.as_str(),
                    TypeRef::from_ast(&ast::lower_type(&input_value.value_type)),
                );
                if let Some(default_value) = &input_value.default_value {
                    field = field.with_default_value(ast::lower_value(default_value));
                }
                if let Some(description) = &input_value.description {
                    field = field.with_description(description);
                }
                input_obj = input_obj.add_field(field)?;
            }
            input_obj.into()
        },

        gp::TypeDefinition::Interface(iface_def) => {
            let mut iface = InterfaceType::new(iface_def.name.as_str());
            if let Some(description) = &iface_def.description {
                iface = iface.with_description(description);
            }
            for field_def in &iface_def.fields {
                iface = iface.add_field(lower_field(field_def)?)?;
            }
            iface.into()
        },

        gp::TypeDefinition::Object(obj_def) => {
            let mut obj = ObjectType::new(obj_def.name.as_str());
            if let Some(description) = &obj_def.description {
                obj = obj.with_description(description);
            }
            for iface_name in &obj_def.implements_interfaces {
                obj = obj.implement(iface_name)?;
            }
            for field_def in &obj_def.fields {
                obj = obj.add_field(lower_field(field_def)?)?;
            }
            obj.into()
        },

        gp::TypeDefinition::Scalar(scalar_def) => {
            let mut scalar = ScalarType::new(scalar_def.name.as_str());
            if let Some(description) = &scalar_def.description {
                scalar = scalar.with_description(description);
            }
            scalar.into()
        },

        gp::TypeDefinition::Union(union_def) => {
            let mut union_type = UnionType::new(union_def.name.as_str());
            if let Some(description) = &union_def.description {
                union_type = union_type.with_description(description);
            }
            for member_name in &union_def.types {
                union_type = union_type.add_member(member_name)?;
            }
            union_type.into()
        },
    })
}

fn type_extension_name<'a>(type_ext: &'a gp::TypeExtension<'_, String>) -> &'a str {
    match type_ext {
        gp::TypeExtension::Enum(ext) => ext.name.as_str(),
        gp::TypeExtension::InputObject(ext) => ext.name.as_str(),
        gp::TypeExtension::Interface(ext) => ext.name.as_str(),
        gp::TypeExtension::Object(ext) => ext.name.as_str(),
        gp::TypeExtension::Scalar(ext) => ext.name.as_str(),
        gp::TypeExtension::Union(ext) => ext.name.as_str(),
    }
}
