//! Lowers [`graphql_parser`]'s query AST into this crate's [`ast`](crate::ast)
//! model.
//!
//! `graphql_parser` does not record positions for arguments, so each
//! [`Argument`](ast::Argument) carries the position of its field. Object
//! literals come out of `graphql_parser` keyed by a `BTreeMap`, so their field
//! order is lexicographic rather than source order.

use crate::ast;
use crate::loc::SourceLocation;
use graphql_parser::query as gp;

pub(super) fn lower_document(doc: &gp::Document<'_, String>) -> ast::Document {
    ast::Document {
        definitions: doc.definitions.iter().map(lower_definition).collect(),
    }
}

fn lower_definition(def: &gp::Definition<'_, String>) -> ast::Definition {
    match def {
        gp::Definition::Operation(op) =>
            ast::Definition::Operation(lower_operation(op)),

        gp::Definition::Fragment(frag) => {
            let gp::TypeCondition::On(type_condition) = &frag.type_condition;
            ast::Definition::Fragment(ast::FragmentDefinition {
                name: frag.name.to_owned(),
                type_condition: type_condition.to_owned(),
                selection_set: lower_selection_set(&frag.selection_set),
                location: SourceLocation::from_pos(frag.position),
            })
        },
    }
}

fn lower_operation(
    op: &gp::OperationDefinition<'_, String>,
) -> ast::OperationDefinition {
    match op {
        gp::OperationDefinition::SelectionSet(selection_set) =>
            ast::OperationDefinition {
                kind: ast::OperationKind::Query,
                name: None,
                variable_definitions: vec![],
                selection_set: lower_selection_set(selection_set),
                location: SourceLocation::from_pos(selection_set.span.0),
            },

        gp::OperationDefinition::Query(gp::Query {
            name,
            position,
            selection_set,
            variable_definitions,
            ..
        }) => ast::OperationDefinition {
            kind: ast::OperationKind::Query,
            name: name.to_owned(),
            variable_definitions: variable_definitions.iter()
                .map(lower_variable_definition)
                .collect(),
            selection_set: lower_selection_set(selection_set),
            location: SourceLocation::from_pos(*position),
        },

        gp::OperationDefinition::Mutation(gp::Mutation {
            name,
            position,
            selection_set,
            variable_definitions,
            ..
        }) => ast::OperationDefinition {
            kind: ast::OperationKind::Mutation,
            name: name.to_owned(),
            variable_definitions: variable_definitions.iter()
                .map(lower_variable_definition)
                .collect(),
            selection_set: lower_selection_set(selection_set),
            location: SourceLocation::from_pos(*position),
        },

        gp::OperationDefinition::Subscription(gp::Subscription {
            name,
            position,
            selection_set,
            variable_definitions,
            ..
        }) => ast::OperationDefinition {
            kind: ast::OperationKind::Subscription,
            name: name.to_owned(),
            variable_definitions: variable_definitions.iter()
                .map(lower_variable_definition)
                .collect(),
            selection_set: lower_selection_set(selection_set),
            location: SourceLocation::from_pos(*position),
        },
    }
}

fn lower_variable_definition(
    var_def: &gp::VariableDefinition<'_, String>,
) -> ast::VariableDefinition {
    ast::VariableDefinition {
        name: var_def.name.to_owned(),
        var_type: lower_type(&var_def.var_type),
        default_value: var_def.default_value.as_ref().map(lower_value),
        location: SourceLocation::from_pos(var_def.position),
    }
}

fn lower_selection_set(
    selection_set: &gp::SelectionSet<'_, String>,
) -> ast::SelectionSet {
    ast::SelectionSet {
        selections: selection_set.items.iter().map(lower_selection).collect(),
        location: SourceLocation::from_pos(selection_set.span.0),
    }
}

fn lower_selection(selection: &gp::Selection<'_, String>) -> ast::Selection {
    match selection {
        gp::Selection::Field(field) => {
            let location = SourceLocation::from_pos(field.position);
            ast::Selection::Field(ast::Field {
                alias: field.alias.to_owned(),
                name: field.name.to_owned(),
                arguments: field.arguments.iter()
                    .map(|(name, value)| ast::Argument {
                        name: name.to_owned(),
                        value: lower_value(value),
                        location,
                    })
                    .collect(),
                // `graphql_parser` represents "no selection set" as an empty
                // one.
                selection_set:
                    if field.selection_set.items.is_empty() {
                        None
                    } else {
                        Some(lower_selection_set(&field.selection_set))
                    },
                location,
            })
        },

        gp::Selection::FragmentSpread(spread) =>
            ast::Selection::FragmentSpread(ast::FragmentSpread {
                fragment_name: spread.fragment_name.to_owned(),
                location: SourceLocation::from_pos(spread.position),
            }),

        gp::Selection::InlineFragment(frag) =>
            ast::Selection::InlineFragment(ast::InlineFragment {
                type_condition: frag.type_condition.as_ref().map(|cond| {
                    let gp::TypeCondition::On(name) = cond;
                    name.to_owned()
                }),
                selection_set: lower_selection_set(&frag.selection_set),
                location: SourceLocation::from_pos(frag.position),
            }),
    }
}

pub(crate) fn lower_type(ast_type: &gp::Type<'_, String>) -> ast::Type {
    match ast_type {
        gp::Type::NamedType(name) => ast::Type::Named(name.to_owned()),
        gp::Type::ListType(inner) => ast::Type::List(Box::new(lower_type(inner))),
        gp::Type::NonNullType(inner) => ast::Type::NonNull(Box::new(lower_type(inner))),
    }
}

pub(crate) fn lower_value(value: &gp::Value<'_, String>) -> ast::Value {
    match value {
        gp::Value::Variable(name) => ast::Value::Variable(name.to_owned()),
        // `graphql_parser` only produces `Number`s that fit in an i64.
        gp::Value::Int(number) => ast::Value::Int(number.as_i64().unwrap_or_default()),
        gp::Value::Float(f) => ast::Value::Float(*f),
        gp::Value::String(s) => ast::Value::String(s.to_owned()),
        gp::Value::Boolean(b) => ast::Value::Boolean(*b),
        gp::Value::Null => ast::Value::Null,
        gp::Value::Enum(name) => ast::Value::Enum(name.to_owned()),
        gp::Value::List(items) => ast::Value::List(items.iter().map(lower_value).collect()),
        gp::Value::Object(fields) => ast::Value::Object(
            fields.iter()
                .map(|(name, value)| (name.to_owned(), lower_value(value)))
                .collect(),
        ),
    }
}
