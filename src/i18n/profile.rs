//! Language profile: one language's row across the three lookup tables.

use serde::{Deserialize, Serialize};

/// Placeholder names recognized in sentence templates.
pub const SENTENCE_PLACEHOLDERS: [&str; 4] = ["flags", "who", "role", "scope"];

/// Placeholder name recognized in scope templates.
pub const SCOPE_PLACEHOLDER: &str = "org";

/// Localized composition data for a single language.
///
/// Each field is optional because the tables are independent: a language may
/// define a sentence template without a scope clause, and a request only
/// needs the entries its own path touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageProfile {
    /// Language code the profile is keyed by (e.g., "en", "fr")
    pub code: String,

    /// First-person pronoun substituted when the actor is omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronoun: Option<String>,

    /// Sentence template
    /// Placeholders: {flags}, {who}, {role}, {scope}
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence_template: Option<String>,

    /// Scope clause template
    /// Placeholders: {org}
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_template: Option<String>,
}

impl LanguageProfile {
    /// Create a profile with entries in all three tables.
    pub fn new(code: &str, pronoun: &str, sentence_template: &str, scope_template: &str) -> Self {
        Self {
            code: code.to_string(),
            pronoun: Some(pronoun.to_string()),
            sentence_template: Some(sentence_template.to_string()),
            scope_template: Some(scope_template.to_string()),
        }
    }

    /// Overlay every entry `other` defines onto this profile.
    pub fn merge(&mut self, other: LanguageProfile) {
        if other.pronoun.is_some() {
            self.pronoun = other.pronoun;
        }
        if other.sentence_template.is_some() {
            self.sentence_template = other.sentence_template;
        }
        if other.scope_template.is_some() {
            self.scope_template = other.scope_template;
        }
    }

    /// Placeholders the sentence template never mentions.
    pub fn missing_sentence_placeholders(&self) -> Vec<&'static str> {
        match &self.sentence_template {
            Some(template) => SENTENCE_PLACEHOLDERS
                .iter()
                .copied()
                .filter(|name| !template.contains(&format!("{{{}}}", name)))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Whether the scope template mentions `{org}`. Absent templates count as valid.
    pub fn scope_template_has_org(&self) -> bool {
        self.scope_template
            .as_deref()
            .map(|template| template.contains(&format!("{{{}}}", SCOPE_PLACEHOLDER)))
            .unwrap_or(true)
    }
}
