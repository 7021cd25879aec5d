//! Configuration loading for tickoff.
//!
//! Supports tickoff.toml, CLI flags, and environment variables.
//! Precedence (highest to lowest): CLI flags > env vars > config file > defaults.

mod cli;
mod env;
mod toml;
mod types;

pub use cli::{parse_args, CliArgs, Command};
pub use types::{Config, ConfigError, CONFIG_FILE, DEFAULT_LOG_PATH, DEFAULT_STORE_PATH};

#[cfg(test)]
mod tests;
