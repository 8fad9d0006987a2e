// src/core/config.rs
use std::env;
use std::path::PathBuf;
use clap::ValueEnum;
use log::LevelFilter;

/// Which random source backs password generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RngPolicy {
    /// ChaCha20 seeded from the operating system
    Secure,
    /// Small non-cryptographic generator
    Fast,
}

// Configuration for the password service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,
    pub cors_allow_any_origin: bool,

    // Password Generation
    pub rng_policy: RngPolicy,
    pub rng_seed: Option<u64>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_address: "0.0.0.0".to_string(),
            web_port: 8000,
            cors_allow_any_origin: true,

            rng_policy: RngPolicy::Secure,
            rng_seed: None,

            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables. Rejected values come back as
    // warnings because the logger is configured from the result.
    pub fn load() -> (Self, Vec<String>) {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Web Interface
        if let Some(address) = var("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Some(val) = var("PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => warnings.push(format!("Invalid PORT '{}', using {}", val, config.web_port)),
            }
        }

        if let Some(val) = var("CORS_ALLOW_ANY_ORIGIN") {
            match val.parse() {
                Ok(allow) => config.cors_allow_any_origin = allow,
                Err(_) => warnings.push(format!("Invalid CORS_ALLOW_ANY_ORIGIN '{}', using true", val)),
            }
        }

        // Password Generation
        if let Some(policy) = var("RNG_POLICY") {
            match RngPolicy::from_str(&policy, true) {
                Ok(policy) => config.rng_policy = policy,
                Err(_) => warnings.push(format!("Unknown RNG policy '{}', using secure", policy)),
            }
        }

        if let Some(val) = var("RNG_SEED") {
            match val.parse() {
                Ok(seed) => config.rng_seed = Some(seed),
                Err(_) => warnings.push(format!("Invalid RNG_SEED '{}', ignoring", val)),
            }
        }

        // Logging
        if let Some(level) = var("LOG_LEVEL") {
            match parse_log_level(&level) {
                Some(filter) => config.log_level = filter,
                None => warnings.push(format!("Unknown LOG_LEVEL '{}', using info", level)),
            }
        }

        if let Some(file) = var("LOG_FILE") {
            config.log_file = Some(PathBuf::from(file));
        }

        (config, warnings)
    }
}

pub fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> (Config, Vec<String>) {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let (config, warnings) = config_from(&[]);
        assert!(warnings.is_empty());
        assert_eq!(config.web_address, "0.0.0.0");
        assert_eq!(config.web_port, 8000);
        assert_eq!(config.rng_policy, RngPolicy::Secure);
        assert_eq!(config.rng_seed, None);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn environment_overrides_defaults() {
        let (config, warnings) = config_from(&[
            ("PORT", "9090"),
            ("RNG_POLICY", "FAST"),
            ("RNG_SEED", "17"),
            ("LOG_LEVEL", "debug"),
            ("LOG_FILE", "/tmp/passgen.log"),
            ("CORS_ALLOW_ANY_ORIGIN", "false"),
        ]);
        assert_eq!(config.web_port, 9090);
        assert_eq!(config.rng_policy, RngPolicy::Fast);
        assert_eq!(config.rng_seed, Some(17));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/passgen.log")));
        assert!(!config.cors_allow_any_origin);
        assert!(warnings.is_empty());
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let (config, warnings) =
            config_from(&[("PORT", "eighty"), ("RNG_POLICY", "quantum"), ("LOG_LEVEL", "loud")]);
        assert_eq!(config.web_port, 8000);
        assert_eq!(config.rng_policy, RngPolicy::Secure);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(
            warnings,
            vec![
                "Invalid PORT 'eighty', using 8000".to_string(),
                "Unknown RNG policy 'quantum', using secure".to_string(),
                "Unknown LOG_LEVEL 'loud', using info".to_string(),
            ]
        );
    }
}
