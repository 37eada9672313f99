use explorer_sim::{read_script, run_script, Config, SimError};
use log::{error, info, warn};
use std::env;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{}", e);
        if matches!(e, SimError::MissingScript) {
            eprintln!("Usage: explorer_sim <script> [config.toml]");
        }
        process::exit(1);
    }
}

fn run() -> Result<(), SimError> {
    let mut args = env::args().skip(1);
    let script = PathBuf::from(args.next().ok_or(SimError::MissingScript)?);
    let config_path = args.next().map(PathBuf::from);
    let config = Config::resolve(config_path.as_deref())?;

    info!("Running script {}", script.display());
    let lines = read_script(&script)?;
    let outcome = run_script(&lines, &config)?;

    for report in &outcome.reports {
        println!("{}\n", report.render(&config.report.separator));
    }

    if config.run_log.enabled {
        match outcome.log.save_to_file(Path::new(&config.run_log.path)) {
            Ok(()) => info!("Run log saved to {}", config.run_log.path),
            Err(e) => warn!("Failed to save run log to {}: {}", config.run_log.path, e),
        }
    }

    Ok(())
}
