//! Locale-aware string ordering for display sorting.
//!
//! Approximates a root-locale collator in three levels:
//!
//! 1. primary: letters compared case- and accent-insensitively
//! 2. tertiary: at the first case difference, lowercase sorts first
//! 3. code point order as the final tie breaker
//!
//! So `"beth" < "Beth" < "Birdperson"` and `"Émile" < "Eve"`.
//!
//! Accents are removed by canonical decomposition (NFD) and dropping the
//! combining marks. Letters with no decomposition (`ł`, `ø`, `ß`, ...) are
//! mapped to their base letters by hand.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two strings the way a user expects names to be ordered.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| case_cmp(a, b))
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
    {
        match c {
            'ß' => key.push_str("ss"),
            'æ' => key.push_str("ae"),
            'œ' => key.push_str("oe"),
            other => key.push(fold_base(other)),
        }
    }
    key
}

fn case_cmp(a: &str, b: &str) -> Ordering {
    a.chars().map(case_rank).cmp(b.chars().map(case_rank))
}

fn case_rank(c: char) -> u8 {
    if c.is_lowercase() {
        0
    } else if c.is_uppercase() {
        2
    } else {
        1
    }
}

/// Base letter for lowercase Latin letters NFD leaves intact.
fn fold_base(c: char) -> char {
    match c {
        'ł' => 'l',
        'ø' => 'o',
        'đ' | 'ð' => 'd',
        'ħ' => 'h',
        'ı' => 'i',
        'ŧ' => 't',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<&str>) -> Vec<&str> {
        v.sort_by(|a, b| locale_cmp(a, b));
        v
    }

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(
            sorted(vec!["morty", "Rick", "beth", "Summer"]),
            vec!["beth", "morty", "Rick", "Summer"]
        );
    }

    #[test]
    fn test_lowercase_first_on_tie() {
        assert_eq!(locale_cmp("rick", "Rick"), Ordering::Less);
        assert_eq!(locale_cmp("Rick", "rick"), Ordering::Greater);
        assert_eq!(locale_cmp("Rick", "Rick"), Ordering::Equal);
    }

    #[test]
    fn test_accents_ignored_at_primary_level() {
        assert_eq!(sorted(vec!["Eve", "Émile", "Ada"]), vec!["Ada", "Émile", "Eve"]);
        assert_ne!(locale_cmp("é", "e"), Ordering::Equal);
    }

    #[test]
    fn test_letters_outside_basic_latin_sort_with_their_base() {
        assert_eq!(locale_cmp("Ștefan", "Summer"), Ordering::Less);
        assert_eq!(locale_cmp("Ğuy", "Hank"), Ordering::Less);
        assert_eq!(
            sorted(vec!["Summer", "Ștefan", "Sanchez", "Ğuy", "Hank", "Łukasz", "Maß"]),
            vec!["Ğuy", "Hank", "Łukasz", "Maß", "Sanchez", "Ștefan", "Summer"]
        );
    }

    #[test]
    fn test_sharp_s_expands() {
        assert_eq!(locale_cmp("Maß", "Mast"), Ordering::Less);
        assert_eq!(locale_cmp("Maß", "Masr"), Ordering::Greater);
    }

    #[test]
    fn test_empty_sorts_first() {
        assert_eq!(locale_cmp("", "Abradolf Lincler"), Ordering::Less);
        assert_eq!(locale_cmp("", ""), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_before_longer() {
        assert_eq!(locale_cmp("Rick", "Rick Sanchez"), Ordering::Less);
    }
}
