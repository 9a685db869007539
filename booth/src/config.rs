//! Configuration management for the ticket booth.
//!
//! Loads configuration from environment variables with sensible defaults.
//! A `.env` file in the working directory is read first when present.

use crate::types::SaleMode;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Default ticket capacity
pub const DEFAULT_MAX_TICKETS: usize = 3;

/// An environment variable held a value that could not be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value {value:?} for {key}: expected {expected}")]
pub struct ConfigError {
    /// Variable name
    pub key: &'static str,
    /// Value found
    pub value: String,
    /// What would have been accepted
    pub expected: &'static str,
}

/// Booth configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tickets available for the session (`BOOTH_MAX_TICKETS`, default 3)
    pub max_tickets: usize,
    /// Selling rules (`BOOTH_MODE`: `simple` or `fundraiser`, default `fundraiser`)
    pub mode: SaleMode,
    /// Directory the report file is written to (`BOOTH_OUTPUT_DIR`, default `.`)
    pub output_dir: PathBuf,
    /// Skip the instructions question (`BOOTH_SKIP_INSTRUCTIONS`, default `false`)
    pub skip_instructions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_tickets: DEFAULT_MAX_TICKETS,
            mode: SaleMode::default(),
            output_dir: PathBuf::from("."),
            skip_instructions: false,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// Unset variables take their defaults; set ones must parse.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_tickets = match lookup("BOOTH_MAX_TICKETS") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError {
                key: "BOOTH_MAX_TICKETS",
                value,
                expected: "a non-negative integer",
            })?,
            None => defaults.max_tickets,
        };

        let mode = match lookup("BOOTH_MODE") {
            Some(value) => value.parse().map_err(|_| ConfigError {
                key: "BOOTH_MODE",
                value,
                expected: "\"simple\" or \"fundraiser\"",
            })?,
            None => defaults.mode,
        };

        let output_dir = lookup("BOOTH_OUTPUT_DIR")
            .filter(|dir| !dir.is_empty())
            .map_or(defaults.output_dir, PathBuf::from);

        let skip_instructions = match lookup("BOOTH_SKIP_INSTRUCTIONS") {
            Some(value) => parse_flag(&value).ok_or(ConfigError {
                key: "BOOTH_SKIP_INSTRUCTIONS",
                value,
                expected: "true or false",
            })?,
            None => defaults.skip_instructions,
        };

        Ok(Self {
            max_tickets,
            mode,
            output_dir,
            skip_instructions,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
