mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command::SchemaArgs;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                std::process::ExitCode::FAILURE
            },
        }
    }
}

fn setup_logger(cli: &Cli) {
    let mut log_level_warnings: Vec<String> = vec![];
    let log_level =
        if cli.verbose {
            tracing::Level::DEBUG
        } else {
            match std::env::var("LOG_LEVEL") {
                Ok(env_val) => parse_log_level(&env_val).unwrap_or_else(|| {
                    log_level_warnings.push(format!(
                        "Invalid `LOG_LEVEL` environment variable value: \
                        `{}`",
                        env_val.trim(),
                    ));
                    DEFAULT_LOG_LEVEL
                }),
                Err(_) => DEFAULT_LOG_LEVEL,
            }
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    for warning in log_level_warnings.drain(..) {
        log::warn!("{warning}");
    }
}

fn parse_log_level(env_val: &str) -> Option<tracing::Level> {
    match env_val.trim() {
        "DEBUG" | "debug" => Some(tracing::Level::DEBUG),
        "INFO" | "info" => Some(tracing::Level::INFO),
        "TRACE" | "trace" => Some(tracing::Level::TRACE),
        "VERBOSE" | "verbose" => Some(tracing::Level::DEBUG),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_log_level;

    #[test]
    fn log_levels_parse_in_upper_or_lower_case() {
        assert_eq!(parse_log_level("TRACE"), Some(tracing::Level::TRACE));
        assert_eq!(parse_log_level(" debug "), Some(tracing::Level::DEBUG));
        assert_eq!(parse_log_level("verbose"), Some(tracing::Level::DEBUG));
        assert_eq!(parse_log_level("Info"), None);
        assert_eq!(parse_log_level("loud"), None);
    }
}
