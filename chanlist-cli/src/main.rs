mod cli;
mod config;
mod error;
mod output;
mod pipeline;

use crate::{
    cli::{Args, Commands},
    config::AppConfig,
    error::{CliError, Result},
    output::Reporter,
    pipeline::PlaylistGenerator,
};
use clap::Parser;
#[cfg(feature = "colored-output")]
use colored::*;
use std::process;
use tracing::{Level, debug, error};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        error!("Application error: {}", e);
        #[cfg(feature = "colored-output")]
        {
            eprintln!("{} {}", "Error:".red().bold(), e);
        }
        #[cfg(not(feature = "colored-output"))]
        {
            eprintln!("Error: {}", e);
        }
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet)?;

    let config = AppConfig::load(args.config.as_deref())?.with_args(&args);
    debug!("Effective configuration: {:?}", config);

    match args.command {
        Some(Commands::Completions { shell }) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Args::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }

        Some(Commands::Config { show }) => {
            if show {
                println!("{}", config.show()?);
            } else {
                println!("Use --show to display the effective configuration");
            }
        }

        None => {
            let reporter = Reporter::new(args.quiet, config.colored_output);
            PlaylistGenerator::new(config, reporter).run().await?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(verbose),
        )
        .with(filter)
        .try_init()
        .map_err(|e| CliError::Initialization(e.to_string()))
}
