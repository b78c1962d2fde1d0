use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::Parameter;
use crate::types::TypeRef;
use crate::types::typename_field;
use crate::validation::Node;

/// Tracks the type implied by each position of a document during a
/// validation traversal.
///
/// The traversal calls [`TypeInfo::enter()`] before any rule sees a node and
/// [`TypeInfo::leave()`] after every rule is done with it. Each accessor
/// returns `None` where the type can't be determined (e.g. inside a field the
/// parent type doesn't define); reporting that is left to whichever rule
/// cares.
#[derive(Debug)]
pub struct TypeInfo<'a> {
    argument: Option<&'a Parameter>,
    field_def_stack: Vec<Option<&'a Field>>,
    input_type_stack: Vec<Option<TypeRef>>,
    parent_type_stack: Vec<Option<&'a GraphQLType>>,
    schema: &'a Schema,
    type_stack: Vec<(Node<'a>, Option<TypeRef>)>,
}
impl<'a> TypeInfo<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            argument: None,
            field_def_stack: vec![],
            input_type_stack: vec![],
            parent_type_stack: vec![],
            schema,
            type_stack: vec![],
        }
    }

    /// The definition of the argument currently being visited.
    pub fn argument(&self) -> Option<&'a Parameter> {
        self.argument
    }

    /// The (possibly wrapped) type of the innermost operation, fragment or
    /// field enclosing the current position.
    pub fn current_type(&self) -> Option<&TypeRef> {
        self.type_stack.last().and_then(|(_, type_ref)| type_ref.as_ref())
    }

    /// The definition of the field currently being visited.
    pub fn field_def(&self) -> Option<&'a Field> {
        self.field_def_stack.last().copied().flatten()
    }

    /// The declared type of the argument or variable definition currently
    /// being visited.
    pub fn input_type(&self) -> Option<&TypeRef> {
        self.input_type_stack.last().and_then(Option::as_ref)
    }

    /// The composite type whose selection set is currently being visited,
    /// i.e. the type that owns the fields selected at this position.
    pub fn parent_type(&self) -> Option<&'a GraphQLType> {
        self.parent_type_stack.last().copied().flatten()
    }

    pub fn enter(&mut self, node: Node<'a>) {
        match node {
            Node::Argument(arg) => {
                let param = self.field_def()
                    .and_then(|field_def| field_def.parameter(arg.name.as_str()));
                self.argument = param;
                self.input_type_stack.push(param.map(|param| param.type_ref().clone()));
            },

            Node::Field(field) => {
                let field_def = self.parent_type().and_then(|parent_type| {
                    if field.name == "__typename" {
                        Some(typename_field())
                    } else {
                        parent_type.field(field.name.as_str())
                    }
                });
                self.field_def_stack.push(field_def);
                self.type_stack.push((node, field_def.map(|field_def| field_def.type_ref().clone())));
            },

            Node::FragmentDefinition(frag) => {
                let type_ref = self.named_type_ref(frag.type_condition.as_str());
                self.type_stack.push((node, type_ref));
            },

            Node::InlineFragment(inline) => {
                let type_ref = match &inline.type_condition {
                    Some(type_condition) => self.named_type_ref(type_condition.as_str()),
                    None => self.current_type()
                        .map(|type_ref| TypeRef::named(type_ref.named_type_name())),
                };
                self.type_stack.push((node, type_ref));
            },

            Node::OperationDefinition(op) => {
                let type_ref = self.schema
                    .root_type(op.kind)
                    .map(|root_type| TypeRef::named(root_type.name()));
                self.type_stack.push((node, type_ref));
            },

            Node::SelectionSet(_) => {
                let parent_type = self.current_type()
                    .and_then(|type_ref| type_ref.named_type(self.schema))
                    .filter(|named_type| named_type.is_composite());
                self.parent_type_stack.push(parent_type);
            },

            Node::VariableDefinition(var_def) =>
                self.input_type_stack.push(Some(TypeRef::from_ast(&var_def.var_type))),

            Node::Document(_) | Node::FragmentSpread(_) => (),
        }
    }

    pub fn leave(&mut self, node: Node<'a>) {
        match node {
            Node::Argument(_) => {
                self.argument = None;
                self.input_type_stack.pop();
            },

            Node::Field(_) => {
                self.field_def_stack.pop();
                self.type_stack.pop();
            },

            Node::FragmentDefinition(_)
                | Node::InlineFragment(_)
                | Node::OperationDefinition(_) => {
                self.type_stack.pop();
            },

            Node::SelectionSet(_) => {
                self.parent_type_stack.pop();
            },

            Node::VariableDefinition(_) => {
                self.input_type_stack.pop();
            },

            Node::Document(_) | Node::FragmentSpread(_) => (),
        }
    }

    fn named_type_ref(&self, type_name: &str) -> Option<TypeRef> {
        self.schema.find_type(type_name).map(|_| TypeRef::named(type_name))
    }
}
