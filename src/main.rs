// src/main.rs

use std::process::ExitCode;

use cross_seed_config::cli::{Cli, Commands};
use cross_seed_config::config::{process_env, render, save_config};
use cross_seed_config::{run, AppError};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(cli: &Cli) {
    let env_filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr; stdout carries the rendered config.
    let (json_layer, plain_layer) = if cli.json_logs {
        let layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(std::io::stderr);
        (Some(layer), None)
    } else {
        (None, Some(fmt::layer().with_writer(std::io::stderr)))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(plain_layer)
        .init();
}

fn execute(cli: &Cli) -> Result<(), AppError> {
    let config = run(&cli.template, &process_env())?;

    match cli.resolved_command() {
        Commands::Render {
            output: Some(path),
            format,
        } => save_config(&config, &path, format),
        Commands::Render { output: None, format } => {
            print!("{}", render(&config, format)?);
            Ok(())
        }
        Commands::Check { verbose } => {
            if verbose {
                println!("{config:#?}");
            } else {
                println!("{}", config.summary());
            }
            info!("Configuration check passed");
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(&cli);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
