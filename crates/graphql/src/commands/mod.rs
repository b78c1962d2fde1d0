mod coerce_variables;
mod validate;

use crate::Cli;
use crate::CommandResult;
use coerce_variables::CoerceVariablesCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Coerce raw variable values against one operation of a document.
    CoerceVariables(Box<CoerceVariablesCmd>),

    /// Validate executable documents against a schema.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        log::debug!("Running `{}`.", self.name());
        match self {
            Self::CoerceVariables(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::CoerceVariables(_) => "coerce-variables",
            Self::Validate(_) => "validate",
        }
    }
}
