//! Language registry: the lookup tables behind alias composition.
//!
//! The built-in registry is a singleton initialized once with `OnceLock` and
//! never mutated afterwards. Custom registries (for example, built-in tables
//! extended from a JSON file) are plain values owned by the caller.

use crate::i18n::LanguageProfile;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Immutable set of language profiles, queried by exact code match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRegistry {
    profiles: Vec<LanguageProfile>,
}

/// Built-in registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the built-in language registry.
    ///
    /// The registry is initialized on first call; later calls return the same
    /// instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry::new(default_profiles()))
    }

    /// Build a registry from a list of profiles.
    ///
    /// Profiles sharing a code are merged in order, later entries overriding
    /// the fields they define.
    pub fn new(profiles: Vec<LanguageProfile>) -> Self {
        let mut registry = LanguageRegistry {
            profiles: Vec::with_capacity(profiles.len()),
        };
        registry.extend(profiles);
        registry
    }

    /// Parse a JSON array of profiles into a standalone registry.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let profiles: Vec<LanguageProfile> =
            serde_json::from_str(json).context("Failed to parse language profiles")?;
        Ok(Self::new(profiles))
    }

    /// Built-in tables with the profiles from a JSON file merged on top.
    pub fn with_overrides_from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read language profiles from {}", path.display()))?;
        let overrides: Vec<LanguageProfile> = serde_json::from_str(&json)
            .with_context(|| format!("Invalid language profiles in {}", path.display()))?;

        debug!(
            "Loaded {} language profile(s) from {}",
            overrides.len(),
            path.display()
        );

        let mut registry = Self::get().clone();
        registry.extend(overrides);
        Ok(registry)
    }

    /// Merge profiles into the registry.
    pub fn extend(&mut self, profiles: Vec<LanguageProfile>) {
        for profile in profiles {
            warn_on_incomplete(&profile);
            match self.profiles.iter_mut().find(|p| p.code == profile.code) {
                Some(existing) => existing.merge(profile),
                None => self.profiles.push(profile),
            }
        }
    }

    /// Get a language profile by its code.
    ///
    /// # Arguments
    /// * `code` - The language code (e.g., "en", "fr"), matched exactly
    ///
    /// # Returns
    /// * `Some(&LanguageProfile)` if the language is registered
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageProfile> {
        self.profiles.iter().find(|profile| profile.code == code)
    }

    /// Get the localized first-person pronoun for a language.
    ///
    /// # Arguments
    /// * `code` - The language code (e.g., "en", "fr")
    ///
    /// # Returns
    /// * `Some(&str)` with the pronoun (e.g., "moi" for "fr")
    /// * `None` if the language is unknown or has no pronoun entry
    pub fn pronoun(&self, code: &str) -> Option<&str> {
        self.get_by_code(code)?.pronoun.as_deref()
    }

    /// Get the sentence template for a language.
    ///
    /// # Arguments
    /// * `code` - The language code (e.g., "en", "fr")
    ///
    /// # Returns
    /// * `Some(&str)` with the template, using `{flags}`, `{who}`, `{role}`
    ///   and `{scope}` placeholders
    /// * `None` if the language is unknown or has no sentence template
    pub fn sentence_template(&self, code: &str) -> Option<&str> {
        self.get_by_code(code)?.sentence_template.as_deref()
    }

    /// Get the scope clause template for a language.
    ///
    /// # Arguments
    /// * `code` - The language code (e.g., "en", "fr")
    ///
    /// # Returns
    /// * `Some(&str)` with the template, using the `{org}` placeholder
    /// * `None` if the language is unknown or has no scope template
    pub fn scope_template(&self, code: &str) -> Option<&str> {
        self.get_by_code(code)?.scope_template.as_deref()
    }

    /// All registered language codes, in registration order.
    pub fn codes(&self) -> Vec<&str> {
        self.profiles.iter().map(|profile| profile.code.as_str()).collect()
    }

    /// Get all language profiles.
    ///
    /// # Returns
    /// A slice of every registered profile, in registration order.
    pub fn list_all(&self) -> &[LanguageProfile] {
        &self.profiles
    }
}

fn warn_on_incomplete(profile: &LanguageProfile) {
    let missing = profile.missing_sentence_placeholders();
    if !missing.is_empty() {
        warn!(
            code = %profile.code,
            "Sentence template never uses placeholder(s) {:?}",
            missing
        );
    }
    if !profile.scope_template_has_org() {
        warn!(code = %profile.code, "Scope template never uses {{org}}");
    }
}

/// Built-in language profiles.
fn default_profiles() -> Vec<LanguageProfile> {
    vec![
        LanguageProfile::new("en", "me", "{flags}{who} as {role}{scope}", " at {org}"),
        LanguageProfile::new("fr", "moi", "{flags}{who} comme {role}{scope}", " à {org}"),
        LanguageProfile::new("es", "yo", "{flags}{who} como {role}{scope}", " en {org}"),
        LanguageProfile::new("de", "ich", "{flags}{who} als {role}{scope}", " bei {org}"),
        LanguageProfile::new("pt", "eu", "{flags}{who} como {role}{scope}", " na {org}"),
        LanguageProfile::new("ja", "私", "{flags}{who}として{role}{scope}", "に-{org}"),
        LanguageProfile::new("zh", "我", "{flags}{who}作为{role}{scope}", "在-{org}"),
        LanguageProfile::new("ko", "나", "{flags}{who}로서{role}{scope}", "-{org}"),
        LanguageProfile::new("ar", "أنا", "{flags}{who} بصفتي {role}{scope}", " في {org}"),
        LanguageProfile::new("he", "אני", "{flags}{who} בתור {role}{scope}", " ב{org}"),
        LanguageProfile::new("ru", "я", "{flags}{who} как {role}{scope}", " в {org}"),
    ]
}
