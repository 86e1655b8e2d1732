//! Row-store connection settings.
//!
//! Values are looked up in the process environment first and then in the environment the
//! crate was built with, so web builds can bake them in at compile time.

use thiserror::Error;
use url::Url;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

const PUBLIC_URL_VAR: &str = "NEXT_PUBLIC_SUPABASE_URL";
const PUBLIC_ANON_KEY_VAR: &str = "NEXT_PUBLIC_SUPABASE_ANON_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing configuration value {0}")]
    Missing(&'static str),
    #[error("invalid row store URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowStoreConfig {
    /// Project root, always with a trailing slash.
    pub base_url: Url,
    pub anon_key: String,
}

impl RowStoreConfig {
    pub fn new(base_url: &str, anon_key: impl Into<String>) -> Result<Self, ConfigError> {
        let mut base_url = Url::parse(base_url.trim())?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            anon_key: anon_key.into(),
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok().or_else(|| build_env(name)))
    }

    /// Resolves both values through `lookup`, accepting the `NEXT_PUBLIC_` spellings too.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |primary: &'static str, fallback: &'static str| {
            lookup(primary)
                .or_else(|| lookup(fallback))
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(primary))
        };

        let url = resolve(URL_VAR, PUBLIC_URL_VAR)?;
        let anon_key = resolve(ANON_KEY_VAR, PUBLIC_ANON_KEY_VAR)?;
        Self::new(&url, anon_key.trim())
    }
}

fn build_env(name: &str) -> Option<String> {
    let value = match name {
        URL_VAR => option_env!("SUPABASE_URL"),
        ANON_KEY_VAR => option_env!("SUPABASE_ANON_KEY"),
        PUBLIC_URL_VAR => option_env!("NEXT_PUBLIC_SUPABASE_URL"),
        PUBLIC_ANON_KEY_VAR => option_env!("NEXT_PUBLIC_SUPABASE_ANON_KEY"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let config = RowStoreConfig::new("https://demo.supabase.co/prefix", "key").unwrap();

        assert_eq!(config.base_url.as_str(), "https://demo.supabase.co/prefix/");
    }

    #[test]
    fn lookup_prefers_primary_names() {
        let config = RowStoreConfig::from_lookup(lookup_from(&[
            (URL_VAR, "https://primary.example"),
            (PUBLIC_URL_VAR, "https://public.example"),
            (ANON_KEY_VAR, " anon "),
        ]))
        .unwrap();

        assert_eq!(config.base_url.as_str(), "https://primary.example/");
        assert_eq!(config.anon_key, "anon");
    }

    #[test]
    fn lookup_falls_back_to_public_names() {
        let config = RowStoreConfig::from_lookup(lookup_from(&[
            (PUBLIC_URL_VAR, "https://public.example"),
            (PUBLIC_ANON_KEY_VAR, "public-key"),
        ]))
        .unwrap();

        assert_eq!(config.base_url.as_str(), "https://public.example/");
        assert_eq!(config.anon_key, "public-key");
    }

    #[test]
    fn missing_key_is_reported_by_name() {
        let error = RowStoreConfig::from_lookup(lookup_from(&[(URL_VAR, "https://x.example")]))
            .unwrap_err();

        assert!(matches!(error, ConfigError::Missing(ANON_KEY_VAR)));
    }

    #[test]
    fn malformed_url_is_rejected() {
        let error = RowStoreConfig::new("not a url", "key").unwrap_err();

        assert!(matches!(error, ConfigError::InvalidUrl(_)));
    }
}
