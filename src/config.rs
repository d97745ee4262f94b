use crate::i18n::LanguageRegistry;
use crate::normalize::NormalizationPolicy;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Language used when the caller does not pass one
    pub default_language: String,

    // Normalization
    pub policy: NormalizationPolicy,

    // Optional JSON file merged over the built-in language tables
    pub profiles_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            default_language: std::env::var("COIA_LANG")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "fr".to_string()),

            policy: match std::env::var("COIA_POLICY") {
                Ok(v) => v
                    .parse::<NormalizationPolicy>()
                    .map_err(anyhow::Error::msg)
                    .context("COIA_POLICY is invalid")?,
                Err(_) => NormalizationPolicy::default(),
            },

            profiles_file: std::env::var("COIA_PROFILES")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    /// Language tables this configuration selects.
    pub fn load_registry(&self) -> Result<LanguageRegistry> {
        match &self.profiles_file {
            Some(path) => LanguageRegistry::with_overrides_from_file(path),
            None => Ok(LanguageRegistry::get().clone()),
        }
    }
}
