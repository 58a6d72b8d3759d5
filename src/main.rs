mod cli;
mod client;
mod commands;
mod config;
mod error;
mod form;
mod navigation;
mod output;
mod types;
mod validation;

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, OutputFormat};
use commands::FormSettings;
use config::Config;
use error::Result;
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        if !e.is_reported() {
            eprintln!("Error: {e}");
        }

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = std::error::Error::source(cause);
            }
        }

        std::process::exit(1);
    }
}

fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);
    output::set_json_output(cli.output_format() == OutputFormat::Json);
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't require config
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "create-user", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        // Commands that read config
        ref command => {
            let config = Config::load()?;
            let settings = FormSettings::resolve(&cli, &config);
            tracing::debug!(?settings, "resolved settings");

            match command {
                Commands::Submit(args) => {
                    commands::submit::run(&settings, args).await?;
                }
                Commands::Validate(args) => {
                    commands::validate::run(settings.phone_rule, args)?;
                }
                Commands::Interactive => {
                    commands::interactive::run(&settings).await?;
                }
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
