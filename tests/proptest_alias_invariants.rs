//! Property-based invariant tests for alias generation (public API only).
//!
//! 1. Aliases never contain whitespace or uppercase letters
//! 2. Aliases only contain letters, digits and '-'
//! 3. Normalizing an alias again leaves it unchanged
//! 4. Flags are sorted into the alias prefix
//! 5. Non-digit flags are always rejected
//! 6. Normalization never panics and never emits a disallowed character

use std::sync::OnceLock;

use coia::{create_alias, normalize, AliasError, ErrorKind, ValidationError};
use proptest::prelude::*;
use regex::Regex;

// ── Helpers ──────────────────────────────────────────────────────────

const LANGUAGES: [&str; 11] = ["en", "fr", "es", "de", "pt", "ja", "zh", "ko", "ar", "he", "ru"];

fn arb_language() -> impl Strategy<Value = &'static str> {
    prop::sample::select(LANGUAGES.to_vec())
}

/// Words joined by separators that all map to spaces, so no edge separator
/// can survive filtering.
fn arb_phrase() -> impl Strategy<Value = String> {
    let word = "[A-Za-z0-9éÉàüßçñøЖжΩ名]{1,8}";
    let sep = prop::sample::select(vec![" ", "  ", "-", ", ", ". ", " & ", "\u{2014}", "'"]);
    (
        proptest::collection::vec(word, 1..5),
        proptest::collection::vec(sep, 4),
    )
        .prop_map(|(words, seps)| {
            let mut phrase = String::new();
            for (i, w) in words.iter().enumerate() {
                if i > 0 {
                    phrase.push_str(seps[i - 1]);
                }
                phrase.push_str(w);
            }
            phrase
        })
}

fn arb_flags() -> impl Strategy<Value = String> {
    "[0-9]{0,10}"
}

static FORBIDDEN_REGEX: OnceLock<Regex> = OnceLock::new();

/// Character classes that must never appear in an alias.
fn is_forbidden(c: char) -> bool {
    let regex = FORBIDDEN_REGEX.get_or_init(|| {
        Regex::new(
            r"^[\p{Cc}\p{Cf}\p{Co}\p{Cn}\p{So}\p{Sm}\p{Sc}\p{Sk}\p{P}\p{M}\p{White_Space}]$",
        )
        .unwrap()
    });
    regex.is_match(c.encode_utf8(&mut [0u8; 4]))
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. Output shape and idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn alias_has_no_whitespace_or_uppercase(
        lang in arb_language(),
        flags in arb_flags(),
        who in arb_phrase(),
        role in arb_phrase(),
        scope in arb_phrase(),
    ) {
        let alias = create_alias(lang, &flags, &who, &role, &scope).unwrap();
        prop_assert!(!alias.chars().any(char::is_whitespace), "alias: {:?}", alias);
        prop_assert!(!alias.chars().any(char::is_uppercase), "alias: {:?}", alias);
    }

    #[test]
    fn alias_only_letters_digits_and_hyphens(
        lang in arb_language(),
        flags in arb_flags(),
        role in arb_phrase(),
        scope in arb_phrase(),
    ) {
        let alias = create_alias(lang, &flags, "", &role, &scope).unwrap();
        prop_assert!(
            alias.chars().all(|c| c == '-' || c.is_alphanumeric()),
            "alias: {:?}",
            alias
        );
        prop_assert!(!alias.contains("--"), "alias: {:?}", alias);
    }

    #[test]
    fn normalize_is_idempotent_on_aliases(
        lang in arb_language(),
        who in arb_phrase(),
        role in arb_phrase(),
        scope in arb_phrase(),
    ) {
        let alias = create_alias(lang, "", &who, &role, &scope).unwrap();
        prop_assert_eq!(normalize(&alias), alias);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-5. Flags
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn flags_sorted_into_prefix(flags in "[0-9]{1,10}") {
        let alias = create_alias("en", &flags, "Jane", "Engineer", "").unwrap();
        let mut sorted: Vec<char> = flags.chars().collect();
        sorted.sort();
        let prefix: String = sorted.into_iter().collect();
        prop_assert_eq!(alias, format!("{}-jane-as-engineer", prefix));
    }

    #[test]
    fn non_digit_flags_rejected(flags in "[0-9]{0,4}[a-z!+][0-9]{0,4}") {
        let err = create_alias("en", &flags, "Jane", "Engineer", "").unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Validation);
        prop_assert_eq!(err, AliasError::Validation(ValidationError::FlagsNotDigits));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Total function
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn normalize_never_panics(text in any::<String>()) {
        let out = normalize(&text);
        prop_assert!(!out.chars().any(char::is_whitespace));
        prop_assert!(
            out.chars().all(|c| c == '-' || !is_forbidden(c)),
            "output: {:?}",
            out
        );
    }

    #[test]
    fn normalize_drops_symbol_and_unassigned_classes(
        text in "[a-z \\^`\u{02C2}\u{0378}\u{2615}+$\u{E000}\u{200B}]{0,24}"
    ) {
        let out = normalize(&text);
        prop_assert!(
            out.chars().all(|c| c == '-' || c.is_ascii_lowercase()),
            "output: {:?}",
            out
        );
    }
}
