use std::io;

use topsis_cli::config::ENV_LOG;
use topsis_cli::{demo, run, CliConfig, CliError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = CliConfig::from_env()?;
    let problem = demo::model_selection()?;
    let stdout = io::stdout();
    run(&config, &problem, &mut stdout.lock())?;
    Ok(())
}
