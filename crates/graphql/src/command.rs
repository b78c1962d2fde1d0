use crate::Cli;
use crate::CommandResult;
use anyhow::Context;
use libgraphql_validate::Schema;
use libgraphql_validate::schema::SchemaBuilder;
use std::path::PathBuf;

pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

/// The schema every document-checking command runs against.
#[derive(Debug, clap::Args)]
pub(crate) struct SchemaArgs {
    #[arg(
        help="Path to a GraphQL schema (SDL) file. May be passed more than \
             once to load a schema split across several files.",
        long,
        required=true,
    )]
    schema: Vec<PathBuf>,
}
impl SchemaArgs {
    pub(crate) fn load(&self) -> anyhow::Result<Schema> {
        let schema = SchemaBuilder::new()
            .load_files(&self.schema)
            .and_then(SchemaBuilder::build)
            .context("Errors loading schema")?;
        log::debug!(
            "Loaded {} schema types from {} file(s).",
            schema.all_types().count(),
            self.schema.len(),
        );
        Ok(schema)
    }
}
