use thiserror::Error;

/// Which family an [`AliasError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied a malformed field.
    Validation,
    /// A language table has no entry for the requested code.
    Configuration,
}

/// A caller-supplied field failed its structural checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("empty role")]
    EmptyRole,

    #[error("flags must be digits")]
    FlagsNotDigits,

    #[error("flags too long ({len} > 10)")]
    FlagsTooLong { len: usize },
}

/// The language tables are missing an entry the request needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("no pronoun for language '{0}'")]
    MissingPronoun(String),

    #[error("no scope template for language '{0}'")]
    MissingScopeTemplate(String),

    #[error("no template for language '{0}'")]
    MissingSentenceTemplate(String),
}

/// Single failure channel for alias generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl AliasError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AliasError::Validation(_) => ErrorKind::Validation,
            AliasError::Configuration(_) => ErrorKind::Configuration,
        }
    }
}
