use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::SchemaArgs;
use anyhow::Context;
use libgraphql_validate::DocumentValidator;
use libgraphql_validate::Schema;
use libgraphql_validate::Variables;
use libgraphql_validate::ast::Document;
use libgraphql_validate::coercion::coerce_variable_values;
use libgraphql_validate::file_reader;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for \
             executable documents within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[command(flatten)]
    schema: SchemaArgs,

    #[arg(
        help="Path to a JSON file holding an object of variable values. When \
             given, the variables of every operation are coerced against it.",
        long,
    )]
    variables: Option<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL executable documents or \
             directories containing them.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl ValidateCmd {
    /// Find all document files recursively located at or under each path
    /// passed as an arg. Returns the paths found and the number of directory
    /// entries that were skipped.
    fn find_document_paths(&self) -> anyhow::Result<(Vec<PathBuf>, usize)> {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = entry.with_context(|| format!(
                    "Failed to scan {}",
                    path.display(),
                ))?;
                let entry_path = entry.path();
                let is_graphql_file = entry.file_type().is_file()
                    && entry_path.extension()
                        .map(|ext| ext.to_string_lossy())
                        .is_some_and(|ext| graphql_file_exts.contains(&*ext));
                if is_graphql_file {
                    log::trace!("Found document at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                } else {
                    log::trace!("Skipping {entry_path:#?}.");
                    num_skipped += 1;
                }
            }
        }

        // A single file passed explicitly is validated even if its extension
        // isn't one of `graphql_file_exts`.
        if file_paths.is_empty()
            && let [only_path] = self.file_or_dir_paths.as_slice()
            && only_path.is_file() {
            log::warn!(
                "Proceeding to validate {only_path:#?} even though it doesn't \
                match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(only_path.to_owned());
            num_skipped = num_skipped.saturating_sub(1);
        }

        Ok((file_paths, num_skipped))
    }

    fn load_variables(&self) -> anyhow::Result<Option<Variables>> {
        let Some(variables_path) = &self.variables else {
            return Ok(None);
        };
        let content = file_reader::read_content(variables_path)
            .with_context(|| format!(
                "Failed to read variables file {}",
                variables_path.display(),
            ))?;
        let variables = serde_json::from_str::<Variables>(content.as_str())
            .with_context(|| format!(
                "Variables file {} must contain a JSON object",
                variables_path.display(),
            ))?;
        log::debug!("Loaded {} variable value(s).", variables.len());
        Ok(Some(variables))
    }

    fn run_validation(&self) -> anyhow::Result<CommandResult> {
        let (file_paths, num_skipped) = self.find_document_paths()?;
        log::debug!("Found {} documents to be validated.", file_paths.len());

        let schema = self.schema.load()?;
        let variables = self.load_variables()?;

        let mut problems = vec![];
        let mut num_operations = 0;
        for file_path in &file_paths {
            let document = match Document::from_file(file_path) {
                Ok(document) => document,
                Err(err) => {
                    problems.push(format!("{}: {err}", file_path.display()));
                    continue;
                },
            };
            num_operations += document.operations().count();
            problems.extend(check_document(
                &schema,
                file_path,
                &document,
                variables.as_ref(),
            ));
        }

        if !problems.is_empty() {
            return Ok(CommandResult::stderr(format_args!(
                "{} GraphQL validation errors:\n{}",
                output_utils::RED_X,
                output_utils::bullet_list(&problems),
            )));
        }

        Ok(CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Loaded {} schema types.\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql entries.\n",
                "  * Validated {} operations.{}",
            ),
            output_utils::GREEN_CHECK,
            schema.all_types().count(),
            file_paths.len(),
            num_skipped,
            num_operations,
            if variables.is_some() {
                "\n  * Coerced variables for every operation."
            } else {
                ""
            },
        )))
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.run_validation().unwrap_or_else(CommandResult::from)
    }
}

/// Validate one document with the default rules and, if variable values were
/// supplied, coerce them for each of its operations.
fn check_document(
    schema: &Schema,
    file_path: &Path,
    document: &Document,
    variables: Option<&Variables>,
) -> Vec<String> {
    let result = DocumentValidator::validate(schema, document, None);
    let mut problems = result.errors()
        .iter()
        .map(|err| {
            let location = err.locations()
                .first()
                .map(|loc| format!(":{loc}"))
                .unwrap_or_default();
            format!("{}{location}: {err}", file_path.display())
        })
        .collect::<Vec<_>>();

    // Only coerce variables for documents that passed validation.
    if let Some(variables) = variables
        && result.is_valid() {
        for op in document.operations() {
            if let Err(err) = coerce_variable_values(schema, op, variables) {
                let op_name = op.name.as_deref().unwrap_or("<anonymous>");
                let cause = std::error::Error::source(&err)
                    .map(|cause| format!("\n{cause}"))
                    .unwrap_or_default();
                problems.push(format!(
                    "{}:{}: In operation {op_name}: {err}{cause}",
                    file_path.display(),
                    op.location,
                ));
            }
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::ValidateCmd;
    use crate::Cli;
    use crate::commands::CommandEnum;
    use clap::Parser;
    use std::path::Path;
    use std::path::PathBuf;

    fn parse_validate_cmd(paths: &[&Path]) -> ValidateCmd {
        let mut args = vec![
            "graphql".to_string(),
            "validate".to_string(),
            "--schema".to_string(),
            "schema.graphql".to_string(),
        ];
        args.extend(paths.iter().map(|path| path.display().to_string()));
        match Cli::try_parse_from(args).expect("args parse").cmd {
            Some(CommandEnum::Validate(cmd)) => *cmd,
            other => panic!("expected a validate command, got {other:?}"),
        }
    }

    fn temp_docs_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "graphql-validate-{}-{name}",
            std::process::id(),
        ));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("query.graphql"), "{ dog { name } }").unwrap();
        std::fs::write(dir.join("notes.txt"), "not graphql").unwrap();
        dir
    }

    #[test]
    fn finds_documents_by_extension_and_counts_skipped_entries() {
        let dir = temp_docs_dir("scan");
        let cmd = parse_validate_cmd(&[dir.as_path()]);
        let found = cmd.find_document_paths();
        std::fs::remove_dir_all(&dir).unwrap();

        let (file_paths, num_skipped) = found.unwrap();
        assert_eq!(file_paths, vec![dir.join("query.graphql")]);
        // The directory entry itself and notes.txt.
        assert_eq!(num_skipped, 2);
    }

    #[test]
    fn a_single_explicit_file_is_kept_regardless_of_extension() {
        let dir = temp_docs_dir("single");
        let notes = dir.join("notes.txt");
        let cmd = parse_validate_cmd(&[notes.as_path()]);
        let found = cmd.find_document_paths();
        std::fs::remove_dir_all(&dir).unwrap();

        let (file_paths, num_skipped) = found.unwrap();
        assert_eq!(file_paths, vec![notes]);
        assert_eq!(num_skipped, 0);
    }
}
