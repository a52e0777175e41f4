use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use imgmark::{
    Config, Pipeline,
    args::{self, ArgsOutcome},
};

const EXIT_FATAL: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn init_logging(log_level: &str) -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> ExitCode {
    // Help and usage errors never depend on the config file
    let parsed = args::parse_args(std::env::args().skip(1));
    match &parsed.outcome {
        ArgsOutcome::Proceed => {}
        ArgsOutcome::HelpRequested => {
            let _ = args::write_help(&mut std::io::stdout());
            return ExitCode::SUCCESS;
        }
        ArgsOutcome::UnknownArgument(token) => {
            let _ = args::write_unsupported(&mut std::io::stderr(), token);
            return ExitCode::from(EXIT_USAGE);
        }
    }

    let (config, config_path) = match Config::load() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_FATAL);
        }
    };

    if let Err(e) = init_logging(&config.app.log_level) {
        eprintln!("Error: failed to initialize logging: {}", e);
        return ExitCode::from(EXIT_FATAL);
    }

    match &config_path {
        Some(path) => info!("Configuration loaded from: {:?}", path),
        None => info!("No config file found, using defaults"),
    }
    debug!("Requested files: {:?}", parsed.paths.files());

    let pipeline = Pipeline::new(&config.output);
    match pipeline.run(&parsed.paths) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}
