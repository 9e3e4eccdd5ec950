//! Loading `RuntimeConfig` from the process environment
//!
//! A `.env` file in the working directory is honoured when present. Values are
//! read once; the resulting config is never mutated afterwards.

use log::{debug, info, warn};

use super::types::{ConfigError, RuntimeConfig};
use crate::advisory::Advisory;
use crate::utils::{ENV_API_KEY, ENV_CACHE_ENABLED, ENV_REMOTE_KEY, ENV_REMOTE_URL, parse_flag};

impl RuntimeConfig {
    /// Read the runtime settings from the environment
    ///
    /// Loads `.env` first (missing file is not an error), then reads
    /// `SUPABASE_URL`, `SUPABASE_KEY`, `GEMINI_API_KEY` and
    /// `REMOTE_CACHE_ENABLED`.
    pub fn from_env() -> (Self, Vec<Advisory>) {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment overrides from {}", path.display()),
            Err(e) if e.not_found() => debug!("No .env file found, using process environment"),
            Err(e) => debug!("Ignoring unreadable .env file: {e}"),
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the settings from an arbitrary variable lookup
    ///
    /// Unset variables become empty strings. `REMOTE_CACHE_ENABLED` defaults to
    /// enabled. An unrecognised value disables the remote tier and is reported
    /// in the returned advisories; loading itself never fails.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<Advisory>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut advisories = Vec::new();
        let cache_enabled = match cache_flag(&lookup) {
            Ok(enabled) => enabled,
            Err(e) => {
                warn!("{e}; remote records disabled");
                advisories.push(Advisory::warning(format!(
                    "{e}; using the bundled offline dataset"
                )));
                false
            }
        };

        let config = Self {
            cache_enabled,
            remote_endpoint: lookup(ENV_REMOTE_URL).unwrap_or_default(),
            remote_key: lookup(ENV_REMOTE_KEY).unwrap_or_default(),
            api_key: lookup(ENV_API_KEY).unwrap_or_default(),
        };
        (config, advisories)
    }
}

fn cache_flag<F>(lookup: &F) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(ENV_CACHE_ENABLED) {
        None => Ok(true),
        Some(raw) if raw.trim().is_empty() => Ok(true),
        Some(raw) => parse_flag(&raw).ok_or_else(|| ConfigError::InvalidFlag {
            var: ENV_CACHE_ENABLED.to_string(),
            value: raw,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_unset_variables_become_empty_strings() {
        let (config, advisories) = RuntimeConfig::from_lookup(lookup_from(&[]));
        assert!(advisories.is_empty());
        assert!(config.cache_enabled);
        assert_eq!(config.remote_endpoint, "");
        assert_eq!(config.remote_key, "");
        assert_eq!(config.api_key, "");
        assert!(config.remote_settings().is_none());
    }

    #[test]
    fn test_full_environment() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://x.supabase.co"),
            ("SUPABASE_KEY", "anon"),
            ("GEMINI_API_KEY", "g-key"),
            ("REMOTE_CACHE_ENABLED", "yes"),
        ]))
        .0;

        let remote = config.remote_settings().unwrap();
        assert_eq!(remote.endpoint, "https://x.supabase.co");
        assert_eq!(remote.key, "anon");
        assert_eq!(config.api_key, "g-key");
    }

    #[test]
    fn test_disabled_flag_turns_off_remote_tier() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://x.supabase.co"),
            ("SUPABASE_KEY", "anon"),
            ("REMOTE_CACHE_ENABLED", "off"),
        ]))
        .0;

        assert!(!config.cache_enabled);
        assert!(config.remote_settings().is_none());
    }

    #[test]
    fn test_invalid_flag_disables_remote_with_advisory() {
        let (config, advisories) = RuntimeConfig::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://x.supabase.co"),
            ("SUPABASE_KEY", "anon"),
            ("REMOTE_CACHE_ENABLED", "maybe"),
        ]));

        assert!(!config.cache_enabled);
        assert!(config.remote_settings().is_none());
        assert_eq!(advisories.len(), 1);
        assert!(advisories[0].message.contains("REMOTE_CACHE_ENABLED"));
        assert!(advisories[0].message.contains("maybe"));
    }
}
