//! Console configuration
//!
//! Defaults match the legacy console; each field can be overridden from the
//! environment.

use crate::engine::EngineConfig;
use crate::robot::SimulatedRobotConfig;
use anyhow::{Context, Result};
use rover_shared::TokenPolicy;
use std::path::PathBuf;
use tracing::debug;

/// Default location of the saved command bank, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "Data/Commands.txt";

/// Unit duration of the connect and completion chimes
pub const CHIME_UNIT_MS: u64 = 1000;

/// Times the console retries an unanswered connect before giving up
pub const CONNECT_ATTEMPTS: u32 = 3;

/// Configuration for the operator console
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Where the command bank is saved and loaded
    pub data_path: PathBuf,
    /// How unknown tokens in the saved file are treated
    pub token_policy: TokenPolicy,
    /// Play the "OK" chime after each executed list
    pub completion_chime: bool,
    /// Engine constants
    pub engine: EngineConfig,
    /// Simulated robot behaviour
    pub robot: SimulatedRobotConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            token_policy: TokenPolicy::Lenient,
            completion_chime: true,
            engine: EngineConfig::default(),
            robot: SimulatedRobotConfig::default(),
        }
    }
}

impl ConsoleConfig {
    /// Defaults overridden by `ROVER_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup("ROVER_DATA_PATH") {
            config.data_path = PathBuf::from(path);
        }
        if let Some(strict) = lookup("ROVER_STRICT_TOKENS") {
            config.token_policy = if parse_flag("ROVER_STRICT_TOKENS", &strict)? {
                TokenPolicy::Strict
            } else {
                TokenPolicy::Lenient
            };
        }
        if let Some(chime) = lookup("ROVER_COMPLETION_CHIME") {
            config.completion_chime = parse_flag("ROVER_COMPLETION_CHIME", &chime)?;
        }
        if let Some(scale) = lookup("ROVER_BEEP_HOLD_SCALE") {
            config.engine.beep_hold_scale = scale
                .trim()
                .parse()
                .with_context(|| format!("ROVER_BEEP_HOLD_SCALE must be a whole number, got {:?}", scale))?;
        }
        if let Some(realtime) = lookup("ROVER_SIM_REALTIME") {
            config.robot.realtime = parse_flag("ROVER_SIM_REALTIME", &realtime)?;
        }

        debug!("Console config: {:?}", config);
        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("{} must be a boolean, got {:?}", key, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.data_path, PathBuf::from("Data/Commands.txt"));
        assert_eq!(config.token_policy, TokenPolicy::Lenient);
        assert_eq!(config.engine.beep_hold_scale, 1000);
        assert!(config.completion_chime);
    }

    #[test]
    fn test_env_overrides() {
        let config = ConsoleConfig::from_lookup(lookup_from(&[
            ("ROVER_DATA_PATH", "/tmp/bank.txt"),
            ("ROVER_STRICT_TOKENS", "true"),
            ("ROVER_BEEP_HOLD_SCALE", "1"),
            ("ROVER_COMPLETION_CHIME", "off"),
            ("ROVER_SIM_REALTIME", "0"),
        ]))
        .unwrap();

        assert_eq!(config.data_path, PathBuf::from("/tmp/bank.txt"));
        assert_eq!(config.token_policy, TokenPolicy::Strict);
        assert_eq!(config.engine.beep_hold_scale, 1);
        assert!(!config.completion_chime);
        assert!(!config.robot.realtime);
    }

    #[test]
    fn test_bad_values_rejected() {
        assert!(ConsoleConfig::from_lookup(lookup_from(&[("ROVER_STRICT_TOKENS", "sometimes")])).is_err());
        assert!(ConsoleConfig::from_lookup(lookup_from(&[("ROVER_BEEP_HOLD_SCALE", "-3")])).is_err());
    }
}
