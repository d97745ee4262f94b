//! Deterministic, identifier-safe aliases built from localized role sentences.
//!
//! An alias is produced in two stages: [`resolver::resolve`] validates the
//! request and fills the language's sentence template, then
//! [`normalize::normalize_with`] reduces the sentence to lowercase tokens
//! joined by `-`.

pub mod alias;
pub mod config;
pub mod error;
pub mod i18n;
pub mod normalize;
pub mod resolver;

pub use alias::{create_alias, AliasGenerator};
pub use error::{AliasError, ConfigurationError, ErrorKind, ValidationError};
pub use i18n::{LanguageProfile, LanguageRegistry};
pub use normalize::{normalize, normalize_with, NormalizationPolicy};
pub use resolver::{resolve, Actor, AliasRequest};
