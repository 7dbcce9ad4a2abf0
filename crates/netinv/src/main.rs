mod cli;
mod commands;
mod error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use netinv_config::{LogFormat, LoggingSettings};

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "netinv", &mut std::io::stdout());
            Ok(())
        }

        Command::Config(args) => commands::config_cmd::handle(&args, &cli.global),

        Command::Serve(args) => {
            let config = netinv_config::load_config(cli.global.config.as_deref())?;
            init_tracing(&cli.global, &config.logging)?;
            tracing::debug!(?args, "starting server");
            commands::serve::handle(args, config).await
        }
    }
}

/// `RUST_LOG` wins; otherwise `-q` / `-v` override the configured level.
fn init_tracing(global: &GlobalOpts, logging: &LoggingSettings) -> Result<(), CliError> {
    let directive = match (global.quiet, global.verbose) {
        (true, _) => "error",
        (false, 0) => logging.level.as_str(),
        (false, 1) => "debug",
        _ => "trace",
    };

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directive).map_err(|e| CliError::Validation {
            field: "logging.level".into(),
            reason: e.to_string(),
        })?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.with_target(false).init(),
    }
    Ok(())
}
