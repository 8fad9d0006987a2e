use anyhow::Context;
use clap::Parser;
use std::path::Path;

mod cli;
mod api;
mod core;
mod models;
mod generators;

use crate::cli::Args;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(true);

    if let Some(log_file) = &config.log_file {
        if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
        let file = std::fs::File::create(log_file)
            .with_context(|| format!("creating log file {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    let dotenv_loaded = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();
    let (mut config, config_warnings) = Config::load();
    args.apply(&mut config);

    init_logging(&config)?;
    for warning in &config_warnings {
        log::warn!("{}", warning);
    }
    if dotenv_loaded {
        log::debug!("Loaded .env file");
    }
    log::debug!("Loaded config: {:?}", config);

    if config.rng_seed.is_some() {
        log::warn!("RNG seed is fixed; generated passwords are reproducible");
    }
    let generator = PasswordGenerator::from_policy(config.rng_policy, config.rng_seed);

    api::start_server(generator, &config)
        .await
        .with_context(|| format!("API server on {}:{} failed", config.web_address, config.web_port))?;

    log::info!("Password Generator API shut down");
    Ok(())
}
