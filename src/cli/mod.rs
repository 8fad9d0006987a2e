// src/cli/mod.rs
use clap::Parser;
use log::LevelFilter;
use crate::core::config::{parse_log_level, Config, RngPolicy};

fn log_level_arg(level: &str) -> Result<LevelFilter, String> {
    parse_log_level(level)
        .ok_or_else(|| format!("expected one of off, error, warn, info, debug, trace; got '{}'", level))
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Password Generator API server", long_about = None)]
pub struct Args {
    /// Address to bind
    #[arg(long)]
    pub address: Option<String>,

    /// API server port
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Random source used for generation
    #[arg(long, value_enum)]
    pub rng_policy: Option<RngPolicy>,

    /// Fixed RNG seed (reproducible output, testing only)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_parser = log_level_arg)]
    pub log_level: Option<LevelFilter>,
}

impl Args {
    /// Command line flags take precedence over the environment.
    pub fn apply(&self, config: &mut Config) {
        if let Some(address) = &self.address {
            config.web_address = address.clone();
        }
        if let Some(port) = self.port {
            config.web_port = port;
        }
        if let Some(policy) = self.rng_policy {
            config.rng_policy = policy;
        }
        if self.seed.is_some() {
            config.rng_seed = self.seed;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
    }
}
