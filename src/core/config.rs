// src/core/config.rs
use std::env;
use std::str::FromStr;
use std::time::Duration;
use log::LevelFilter;

use crate::models::{clamp_length, PasswordGenerationOptions};

/// Longest a banner or a clipboard hold may last.
pub const MAX_DELAY_SECONDS: u64 = 3600;

// Configuration for the generator front end
#[derive(Debug, Clone)]
pub struct Config {
    // Initial form values
    pub default_options: PasswordGenerationOptions,

    // How long success/error banners stay visible
    pub message_duration: Duration,

    // How long a one-shot `--copy` keeps the clipboard before clearing it
    pub clipboard_hold: Duration,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_options: PasswordGenerationOptions::default(),
            message_duration: Duration::from_secs(3),
            clipboard_hold: Duration::from_secs(10),
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn load_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let options = &mut config.default_options;

        if let Some(length) = parse_var::<usize, _>(&lookup, "PASSGEN_DEFAULT_LENGTH") {
            options.length = clamp_length(length);
        }

        if let Some(on) = parse_var(&lookup, "PASSGEN_UPPERCASE") {
            options.include_uppercase = on;
        }

        if let Some(on) = parse_var(&lookup, "PASSGEN_LOWERCASE") {
            options.include_lowercase = on;
        }

        if let Some(on) = parse_var(&lookup, "PASSGEN_NUMBERS") {
            options.include_numbers = on;
        }

        if let Some(on) = parse_var(&lookup, "PASSGEN_SYMBOLS") {
            options.include_symbols = on;
        }

        if let Some(delay) = parse_delay(&lookup, "PASSGEN_MESSAGE_SECONDS") {
            config.message_duration = delay;
        }

        if let Some(delay) = parse_delay(&lookup, "PASSGEN_CLIPBOARD_SECONDS") {
            config.clipboard_hold = delay;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', keeping {}", level, config.log_level),
            }
        }

        config
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring {}: cannot parse '{}'", key, raw);
            None
        }
    }
}

fn parse_delay<F>(lookup: &F, key: &str) -> Option<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let secs = parse_var::<u64, _>(lookup, key)?;
    if secs > MAX_DELAY_SECONDS {
        log::warn!("Ignoring {}: {} s is over the {} s limit", key, secs, MAX_DELAY_SECONDS);
        return None;
    }
    Some(Duration::from_secs(secs))
}
