//! Runtime settings, read from the environment (and `.env` via dotenv).

use std::str::FromStr;

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
/// Enclosing prefix used when listing sibling subnets for a host-count scheme.
pub const DEFAULT_SCHEME_PARENT_PREFIX: u8 = 24;
/// Subnet table rows printed before truncating.
pub const DEFAULT_MAX_ROWS: usize = 256;

/// Calculator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the log4rs YAML file.
    pub log_config: String,
    /// Parent prefix for the sibling table of a generated scheme (0..=30).
    pub scheme_parent_prefix: u8,
    /// Maximum rows in a subnet table.
    pub max_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            scheme_parent_prefix: DEFAULT_SCHEME_PARENT_PREFIX,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read `SUBNET_CALC_*` variables.
    pub fn from_env() -> Config {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset or invalid values fall back
    /// to defaults.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        Config {
            log_config: lookup("SUBNET_CALC_LOG_CONFIG")
                .filter(|path| !path.trim().is_empty())
                .unwrap_or(defaults.log_config),
            scheme_parent_prefix: setting(
                "SUBNET_CALC_SCHEME_PARENT_PREFIX",
                lookup("SUBNET_CALC_SCHEME_PARENT_PREFIX"),
                defaults.scheme_parent_prefix,
                |prefix| *prefix <= 30,
            ),
            max_rows: setting(
                "SUBNET_CALC_MAX_ROWS",
                lookup("SUBNET_CALC_MAX_ROWS"),
                defaults.max_rows,
                |rows| *rows > 0,
            ),
        }
    }
}

fn setting<T>(key: &str, raw: Option<String>, default: T, valid: impl Fn(&T) -> bool) -> T
where
    T: FromStr + std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            log::warn!("Ignoring invalid {key}={raw:?}, using {default}");
            default
        }
    }
}
