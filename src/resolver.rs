//! Template resolution: validates a request and interpolates it into the
//! localized sentence for its language.

use crate::error::{AliasError, ConfigurationError, ValidationError};
use crate::i18n::LanguageRegistry;
use regex::{Captures, Regex};
use std::sync::OnceLock;
use tracing::debug;

/// Maximum number of flag digits.
pub const MAX_FLAGS_LEN: usize = 10;

/// Who the alias is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    /// The speaker; rendered as the language's first-person pronoun.
    Me,
    /// A named actor, inserted as given (after trimming).
    Named(String),
}

impl Actor {
    /// Map raw input onto an actor. Blank input means [`Actor::Me`].
    pub fn from_input(input: &str) -> Self {
        let trimmed = trim_field(input);
        if trimmed.is_empty() {
            Actor::Me
        } else {
            Actor::Named(trimmed.to_string())
        }
    }
}

/// Everything needed to compose one alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRequest {
    pub language_code: String,
    pub flags: String,
    pub actor: Actor,
    pub role: String,
    pub scope: String,
}

impl AliasRequest {
    /// Build a request from raw strings, treating a blank `actor` as [`Actor::Me`].
    pub fn new(language_code: &str, flags: &str, actor: &str, role: &str, scope: &str) -> Self {
        Self {
            language_code: language_code.to_string(),
            flags: flags.to_string(),
            actor: Actor::from_input(actor),
            role: role.to_string(),
            scope: scope.to_string(),
        }
    }
}

/// Strip edge whitespace from a request field.
///
/// Besides `White_Space`, the information separators U+001C..U+001F count as
/// blanks here, so a field holding only separators is empty.
pub fn trim_field(field: &str) -> &str {
    field.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Substitute `{name}` placeholders in one pass over `template`.
///
/// Values are inserted verbatim and never rescanned, so braces inside them
/// are plain text. Placeholders without a value are left untouched.
pub fn interpolate(template: &str, values: &[(&str, &str)]) -> String {
    let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([A-Za-z_]+)\}").unwrap());

    regex
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Validate `request` and compose its localized sentence.
///
/// Checks run in a fixed order and the first failure is returned:
/// role, flag characters, flag length, pronoun, scope template, sentence
/// template.
pub fn resolve(registry: &LanguageRegistry, request: &AliasRequest) -> Result<String, AliasError> {
    let code = request.language_code.as_str();
    let flags = trim_field(&request.flags);
    let role = trim_field(&request.role);
    let scope = trim_field(&request.scope);

    if role.is_empty() {
        return Err(ValidationError::EmptyRole.into());
    }
    if !flags.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::FlagsNotDigits.into());
    }
    if flags.len() > MAX_FLAGS_LEN {
        return Err(ValidationError::FlagsTooLong { len: flags.len() }.into());
    }

    let who = match &request.actor {
        Actor::Me => registry
            .pronoun(code)
            .ok_or_else(|| ConfigurationError::MissingPronoun(code.to_string()))?,
        Actor::Named(name) => trim_field(name),
    };

    let flags_prefix = if flags.is_empty() {
        String::new()
    } else {
        let mut digits: Vec<char> = flags.chars().collect();
        digits.sort();
        let mut prefix: String = digits.into_iter().collect();
        prefix.push(' ');
        prefix
    };

    let scope_clause = if scope.is_empty() {
        String::new()
    } else {
        let template = registry
            .scope_template(code)
            .ok_or_else(|| ConfigurationError::MissingScopeTemplate(code.to_string()))?;
        format!(" {}", interpolate(template, &[("org", scope)]))
    };

    let template = registry
        .sentence_template(code)
        .ok_or_else(|| ConfigurationError::MissingSentenceTemplate(code.to_string()))?;

    let composed = interpolate(
        template,
        &[
            ("flags", flags_prefix.as_str()),
            ("who", who),
            ("role", role),
            ("scope", scope_clause.as_str()),
        ],
    );

    debug!(language = code, composed = %composed, "Resolved alias template");
    Ok(composed)
}
