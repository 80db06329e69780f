use std::borrow::Cow;

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;

/// Whether `ch` should be skipped under `cfg`.
pub fn ignore_char(ch: char, cfg: &NormalizeConfig) -> bool {
    (cfg.ignore_whitespace && ch.is_whitespace())
        || (cfg.ignore_punctuation && ch.is_punctuation())
}

/// Fold a single character.
///
/// Lowercasing is applied only when it maps to exactly one character.
pub fn fold_char(ch: char, cfg: &NormalizeConfig) -> char {
    if !cfg.lowercase {
        return ch;
    }
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// Whether a whole token should be skipped under `cfg`.
///
/// A token is ignored when every character in it is ignored, so `"--"` is
/// skipped with `ignore_punctuation` but `"e-mail"` is not.
pub fn ignore_token(token: &str, cfg: &NormalizeConfig) -> bool {
    (cfg.ignore_whitespace || cfg.ignore_punctuation)
        && token.chars().all(|ch| ignore_char(ch, cfg))
}

/// Fold a token: NFKC first (it can change character boundaries), then
/// lowercasing.
pub fn fold_token(token: &str, cfg: &NormalizeConfig) -> String {
    let normalized: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(token.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(token)
    };
    if cfg.lowercase {
        normalized.to_lowercase()
    } else {
        normalized.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_config_keeps_everything() {
        let cfg = NormalizeConfig::default();
        assert!(!ignore_char(' ', &cfg));
        assert!(!ignore_char(',', &cfg));
        assert_eq!(fold_char('A', &cfg), 'A');
        assert_eq!(fold_token("Caf\u{00E9}", &cfg), "Caf\u{00E9}");
    }

    #[test]
    fn lowercase_single_char_only() {
        let cfg = NormalizeConfig::new().with_lowercase(true);
        assert_eq!(fold_char('W', &cfg), 'w');
        assert_eq!(fold_char('\u{0130}', &cfg), '\u{0130}');
        assert_eq!(fold_token("SoMe", &cfg), "some");
    }

    #[test]
    fn whitespace_and_punctuation_ignored() {
        let cfg = NormalizeConfig::new()
            .with_ignore_whitespace(true)
            .with_ignore_punctuation(true);
        assert!(ignore_char('\t', &cfg));
        assert!(ignore_char('!', &cfg));
        assert!(!ignore_char('a', &cfg));
        assert!(ignore_token("--", &cfg));
        assert!(!ignore_token("e-mail", &cfg));
    }

    #[test]
    fn nfkc_merges_compatibility_forms() {
        let cfg = NormalizeConfig::new()
            .with_normalize_unicode(true)
            .with_lowercase(true);
        assert_eq!(
            fold_token("Cafe\u{0301}", &cfg),
            fold_token("Caf\u{00E9}", &cfg)
        );
        assert_eq!(fold_token("\u{FB01}le", &cfg), "file");
    }
}
