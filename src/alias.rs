//! Alias generation: template resolution followed by Unicode normalization.

use crate::error::AliasError;
use crate::i18n::LanguageRegistry;
use crate::normalize::{normalize_with, NormalizationPolicy};
use crate::resolver::{resolve, AliasRequest};
use tracing::debug;

/// Composes aliases against one registry with one normalization policy.
#[derive(Debug, Clone, Copy)]
pub struct AliasGenerator<'a> {
    registry: &'a LanguageRegistry,
    policy: NormalizationPolicy,
}

impl Default for AliasGenerator<'static> {
    fn default() -> Self {
        Self::new(LanguageRegistry::get())
    }
}

impl<'a> AliasGenerator<'a> {
    /// Generator over `registry` using the standard policy.
    pub fn new(registry: &'a LanguageRegistry) -> Self {
        Self {
            registry,
            policy: NormalizationPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: NormalizationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> NormalizationPolicy {
        self.policy
    }

    pub fn registry(&self) -> &'a LanguageRegistry {
        self.registry
    }

    /// Resolve and normalize `request`. No partial alias is returned on failure.
    pub fn generate(&self, request: &AliasRequest) -> Result<String, AliasError> {
        let composed = resolve(self.registry, request)?;
        let alias = normalize_with(&composed, self.policy);

        debug!(
            language = %request.language_code,
            policy = %self.policy,
            alias = %alias,
            "Generated alias"
        );

        Ok(alias)
    }
}

/// Create an alias with the built-in language tables and standard policy.
///
/// A blank `actor` is replaced by the language's first-person pronoun.
///
/// # Example
/// ```
/// let alias = coia::create_alias("en", "", "Jane", "Engineer", "").unwrap();
/// assert_eq!(alias, "jane-as-engineer");
/// ```
pub fn create_alias(
    language_code: &str,
    flags: &str,
    actor: &str,
    role: &str,
    scope: &str,
) -> Result<String, AliasError> {
    AliasGenerator::default().generate(&AliasRequest::new(language_code, flags, actor, role, scope))
}
