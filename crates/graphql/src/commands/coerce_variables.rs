use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::SchemaArgs;
use anyhow::Context;
use libgraphql_validate::DocumentValidator;
use libgraphql_validate::Variables;
use libgraphql_validate::ast::Document;
use libgraphql_validate::coercion::coerce_variable_values;
use libgraphql_validate::file_reader;
use std::path::PathBuf;

/// Coerce a JSON object of raw variable values against one operation's
/// variable definitions and print the coerced values.
#[derive(Debug, clap::Args)]
pub(crate) struct CoerceVariablesCmd {
    #[command(flatten)]
    schema: SchemaArgs,

    #[arg(
        help="Name of the operation whose variables are coerced. May be \
             omitted when the document defines exactly one operation.",
        long,
    )]
    operation: Option<String>,

    #[arg(
        help="Path to the GraphQL executable document.",
        name="DOCUMENT_PATH",
    )]
    document_path: PathBuf,

    #[arg(
        help="Path to a JSON file holding an object of raw variable values. \
             No file means no variables were supplied.",
        name="VARIABLES_PATH",
    )]
    variables_path: Option<PathBuf>,
}
impl CoerceVariablesCmd {
    fn run_coercion(&self) -> anyhow::Result<CommandResult> {
        let schema = self.schema.load()?;
        let document = Document::from_file(&self.document_path)
            .with_context(|| format!(
                "Failed to load {}",
                self.document_path.display(),
            ))?;

        let result = DocumentValidator::validate(&schema, &document, None);
        if !result.is_valid() {
            return Ok(CommandResult::stderr(format_args!(
                "{} {} is not valid:\n{}",
                output_utils::RED_X,
                self.document_path.display(),
                output_utils::bullet_list(result.errors()),
            )));
        }

        let Some(operation) = document.operation(self.operation.as_deref()) else {
            return Ok(CommandResult::stderr(format_args!(
                "{} {}",
                output_utils::RED_X,
                missing_operation_message(
                    self.operation.as_deref(),
                    document.operations().count(),
                ),
            )));
        };

        let inputs = match &self.variables_path {
            Some(path) => {
                let content = file_reader::read_content(path)
                    .with_context(|| format!(
                        "Failed to read variables file {}",
                        path.display(),
                    ))?;
                serde_json::from_str::<Variables>(content.as_str())
                    .with_context(|| format!(
                        "Variables file {} must contain a JSON object",
                        path.display(),
                    ))?
            },
            None => Variables::new(),
        };

        let coerced = coerce_variable_values(&schema, operation, &inputs)
            .context("Variable coercion failed")?;
        let rendered = serde_json::to_string_pretty(&coerced)
            .context("Failed to render coerced variables")?;
        Ok(CommandResult::stdout(format_args!("{rendered}")))
    }
}

#[inherent::inherent]
impl RunnableCommand for CoerceVariablesCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.run_coercion().unwrap_or_else(CommandResult::from)
    }
}

fn missing_operation_message(
    operation_name: Option<&str>,
    num_operations: usize,
) -> String {
    match (operation_name, num_operations) {
        (Some(name), _) => format!("No operation named `{name}` was found."),
        (None, 0) => "The document does not define any operations.".to_string(),
        (None, _) =>
            "The document defines more than one operation; pass --operation \
            to pick one.".to_string(),
    }
}
