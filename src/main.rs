use clap::Parser;
use hertz_listgen::cli::{failure_message, show_config, Cli, Commands};
use hertz_listgen::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load_or_default(&cli.config);

    // Initialize telemetry
    if let Err(e) = hertz_listgen::telemetry::init_telemetry(&config.telemetry, cli.log_level.as_deref()) {
        eprintln!("Warning: {}", e);
    }

    let result = match &cli.command {
        Commands::TokenList(args) => {
            tracing::debug!("Starting token list generation");
            args.execute(&config)
        }
        Commands::Kline(args) => {
            tracing::debug!("Starting k-line config generation");
            args.execute(&config)
        }
        Commands::Config => {
            show_config(&config);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}
