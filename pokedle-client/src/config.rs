use std::env;
use std::time::Duration;

use pokedle_core::Locale;

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub lang: String,
    pub request_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; missing keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_url = lookup("POKEDLE_API_URL").unwrap_or(defaults.api_url);
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                name: "POKEDLE_API_URL",
                value: api_url,
            });
        }

        let lang = lookup("POKEDLE_LANG")
            .map(|lang| lang.trim().to_lowercase())
            .unwrap_or(defaults.lang);
        if lang.is_empty() || !lang.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::Invalid {
                name: "POKEDLE_LANG",
                value: lang,
            });
        }

        let request_timeout_seconds = match lookup("POKEDLE_TIMEOUT_SECONDS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "POKEDLE_TIMEOUT_SECONDS",
                        value: raw,
                    });
                }
            },
            None => defaults.request_timeout_seconds,
        };

        Ok(Self {
            api_url,
            lang,
            request_timeout_seconds,
        })
    }

    pub fn locale(&self) -> Locale {
        Locale::from_code(&self.lang)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:8080".to_string(),
            lang: "en".to_string(),
            request_timeout_seconds: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:8080");
        assert_eq!(config.locale(), Locale::En);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("POKEDLE_API_URL", "https://pokedle.example"),
            ("POKEDLE_LANG", " FR "),
            ("POKEDLE_TIMEOUT_SECONDS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://pokedle.example");
        assert_eq!(config.lang, "fr");
        assert_eq!(config.locale(), Locale::Fr);
        assert_eq!(config.request_timeout_seconds, 3);
    }

    #[test]
    fn test_invalid_values() {
        let bad_timeout = Config::from_lookup(lookup_from(&[("POKEDLE_TIMEOUT_SECONDS", "soon")]));
        assert!(matches!(
            bad_timeout,
            Err(ConfigError::Invalid {
                name: "POKEDLE_TIMEOUT_SECONDS",
                ..
            })
        ));

        let zero_timeout = Config::from_lookup(lookup_from(&[("POKEDLE_TIMEOUT_SECONDS", "0")]));
        assert!(zero_timeout.is_err());

        let bad_url = Config::from_lookup(lookup_from(&[("POKEDLE_API_URL", "localhost:8080")]));
        assert!(bad_url.is_err());

        let bad_lang = Config::from_lookup(lookup_from(&[("POKEDLE_LANG", "e n")]));
        assert!(bad_lang.is_err());
    }
}
