use crate::ast::Document;
use crate::schema::Schema;
use crate::validation::Node;
use crate::validation::NodeVisitor;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationResult;
use crate::validation::ValidationRule;
use crate::validation::default_rules;

/// Validates executable documents against a [`Schema`].
///
/// ```
/// use libgraphql_validate::DocumentValidator;
/// use libgraphql_validate::ast::Document;
/// use libgraphql_validate::schema::SchemaBuilder;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = SchemaBuilder::new()
///     .load_str("type Query { name: String }")?
///     .build()?;
/// let document = Document::parse("{ name { first } }")?;
///
/// let result = DocumentValidator::validate(&schema, &document, None);
/// assert_eq!(
///     result.errors()[0].message(),
///     "Field name of type String must not have a sub selection",
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentValidator;
impl DocumentValidator {
    /// Check `document` against `schema` with the given rules, or with
    /// [`default_rules()`] when `rules` is `None`. An empty rule list accepts
    /// every document.
    ///
    /// The document is traversed exactly once regardless of how many rules
    /// run, and every rule sees every node: errors never cut the traversal
    /// short.
    pub fn validate(
        schema: &Schema,
        document: &Document,
        rules: Option<&[Box<dyn ValidationRule>]>,
    ) -> ValidationResult {
        let rules = rules.unwrap_or_else(|| default_rules());
        let context = ValidationContext::new(schema, document);
        let visitors = rules.iter()
            .map(|rule| rule.validator(&context))
            .collect::<Vec<_>>();

        let mut traversal = Traversal {
            context,
            errors: vec![],
            visitors,
        };
        traversal.visit(Node::Document(document));

        log::debug!(
            "Validated document ({} definitions) with {} rule(s): {} error(s)",
            document.definitions.len(),
            rules.len(),
            traversal.errors.len(),
        );

        ValidationResult {
            errors: traversal.errors,
        }
    }
}

struct Traversal<'a> {
    context: ValidationContext<'a>,
    errors: Vec<ValidationError>,
    visitors: Vec<Box<dyn NodeVisitor<'a> + 'a>>,
}
impl<'a> Traversal<'a> {
    fn visit(&mut self, node: Node<'a>) {
        if let Node::OperationDefinition(op) = node {
            log::trace!(
                "Visiting {} {}",
                op.kind,
                op.name.as_deref().unwrap_or("<anonymous>"),
            );
        }

        self.context.type_info.enter(node);
        for visitor in self.visitors.iter_mut() {
            visitor.enter(&self.context, node, &mut self.errors);
        }

        for child in node.children() {
            self.visit(child);
        }

        for visitor in self.visitors.iter_mut() {
            visitor.leave(&self.context, node, &mut self.errors);
        }
        self.context.type_info.leave(node);
    }
}
