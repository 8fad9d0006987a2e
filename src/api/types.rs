// src/api/types.rs
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use crate::models::{StrengthLabel, DEFAULT_PASSWORD_LENGTH};

fn default_length() -> usize {
    DEFAULT_PASSWORD_LENGTH
}

fn default_true() -> bool {
    true
}

/// Query flag in any of the spellings form-style clients send (`true`, `1`, `yes`, `on`, ...).
fn query_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" | "on" => Ok(true),
        "false" | "f" | "0" | "no" | "n" | "off" => Ok(false),
        _ => Err(de::Error::invalid_value(Unexpected::Str(&raw), &"a boolean")),
    }
}

// Absent fields take the serde default; an explicit `null` disables the class.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

// Generator requests and responses
#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenerateQuery {
    /// Password length (minimum 4)
    #[serde(default = "default_length")]
    #[param(default = 12, minimum = 4)]
    pub length: usize,
    /// Include uppercase letters
    #[serde(default = "default_true", deserialize_with = "query_bool")]
    #[param(default = true)]
    pub uppercase: bool,
    /// Include lowercase letters
    #[serde(default = "default_true", deserialize_with = "query_bool")]
    #[param(default = true)]
    pub lowercase: bool,
    /// Include digits
    #[serde(default = "default_true", deserialize_with = "query_bool")]
    #[param(default = true)]
    pub digits: bool,
    /// Include symbols from `!@#$%&*`
    #[serde(default = "default_true", deserialize_with = "query_bool")]
    #[param(default = true)]
    pub symbols: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordResponse {
    /// The generated password
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BatchRequest {
    /// Length of every password (minimum 4)
    pub length: i64,
    /// Number of passwords (maximum 100)
    pub count: i64,
    /// Include uppercase letters (default true, `null` disables)
    #[serde(default = "default_true", deserialize_with = "null_as_false")]
    #[schema(default = true, nullable)]
    pub uppercase: bool,
    /// Include lowercase letters (default true, `null` disables)
    #[serde(default = "default_true", deserialize_with = "null_as_false")]
    #[schema(default = true, nullable)]
    pub lowercase: bool,
    /// Include digits (default true, `null` disables)
    #[serde(default = "default_true", deserialize_with = "null_as_false")]
    #[schema(default = true, nullable)]
    pub digits: bool,
    /// Include symbols (default true, `null` disables)
    #[serde(default = "default_true", deserialize_with = "null_as_false")]
    #[schema(default = true, nullable)]
    pub symbols: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BatchResponse {
    /// Generated passwords, in generation order
    pub passwords: Vec<String>,
}

// Strength requests and responses
#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StrengthQuery {
    /// Password to evaluate
    #[param(min_length = 1)]
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StrengthResponse {
    /// The evaluated password, echoed back
    pub password: String,
    /// Number of character classes present (0-4)
    pub score: u8,
    /// Strength label derived from the score
    pub strength: StrengthLabel,
    /// Advice for improving the password, or "Good password."
    pub recommendation: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable reason the request was rejected
    pub detail: String,
}
