// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

// Runtime settings for the directory console
#[derive(Debug, Clone)]
pub struct Config {
    // Console
    pub clear_screen: bool,
    pub pause_after_action: bool,
    pub color: bool,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Console
            clear_screen: true,
            pause_after_action: true,
            color: true,

            // Logging
            log_level: LevelFilter::Info,
            log_file: PathBuf::from("./logs/userdir.log"),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Console
        if let Some(val) = lookup("CLEAR_SCREEN") {
            match parse_bool(&val) {
                Some(clear) => config.clear_screen = clear,
                None => log::warn!("Ignoring CLEAR_SCREEN='{}', expected a boolean", val),
            }
        }

        if let Some(val) = lookup("PAUSE_AFTER_ACTION") {
            match parse_bool(&val) {
                Some(pause) => config.pause_after_action = pause,
                None => log::warn!("Ignoring PAUSE_AFTER_ACTION='{}', expected a boolean", val),
            }
        }

        if lookup("NO_COLOR").is_some() {
            config.color = false;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_level(&level) {
                Some(filter) => config.log_level = filter,
                None => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = PathBuf::from(file);
            }
        }

        config
    }
}

pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert!(config.clear_screen);
        assert!(config.pause_after_action);
        assert!(config.color);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.log_file, PathBuf::from("./logs/userdir.log"));
    }

    #[test]
    fn environment_overrides() {
        let config = config_from(&[
            ("CLEAR_SCREEN", "false"),
            ("PAUSE_AFTER_ACTION", "0"),
            ("NO_COLOR", ""),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FILE", "/tmp/dir.log"),
        ]);
        assert!(!config.clear_screen);
        assert!(!config.pause_after_action);
        assert!(!config.color);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, PathBuf::from("/tmp/dir.log"));
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = config_from(&[("CLEAR_SCREEN", "maybe"), ("LOG_LEVEL", "loud"), ("LOG_FILE", " ")]);
        assert!(config.clear_screen);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.log_file, PathBuf::from("./logs/userdir.log"));
    }
}
