//! Per-language configuration for alias composition.
//!
//! All language-dependent data lives here: the first-person pronoun used when
//! no actor is given, the sentence template and the scope clause template.
//!
//! # Architecture
//!
//! - `profile`: One language's entries in each of the three tables
//! - `registry`: Immutable lookup over profiles, with a built-in singleton
//!
//! # Example
//!
//! ```rust,ignore
//! use coia::i18n::LanguageRegistry;
//!
//! let registry = LanguageRegistry::get();
//! assert_eq!(registry.pronoun("fr"), Some("moi"));
//! ```

mod profile;
mod registry;

pub use profile::LanguageProfile;
pub use registry::LanguageRegistry;
