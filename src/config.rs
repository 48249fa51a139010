use log::warn;
use std::env;

const DEFAULT_BIND: &str = "127.0.0.1:4000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: String,
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: DEFAULT_BIND.to_owned(),
            seed: true,
        }
    }
}

impl Config {
    /// Reads `MOVIEGRAPH_BIND` and `MOVIEGRAPH_SEED`, falling back to defaults.
    pub fn from_env() -> Config {
        Config::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F: Fn(&str) -> Option<String>>(var: F) -> Config {
        let mut config = Config::default();
        if let Some(bind) = var("MOVIEGRAPH_BIND").filter(|b| !b.trim().is_empty()) {
            config.bind = bind.trim().to_owned();
        }
        if let Some(seed) = var("MOVIEGRAPH_SEED") {
            match parse_flag(&seed) {
                Some(seed) => config.seed = seed,
                None => warn!("ignoring MOVIEGRAPH_SEED={:?}, expected a boolean", seed),
            }
        }
        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
