//! English singular/plural forms for entity and table names.
//!
//! Only the last word of a compound identifier is inflected, so
//! `SalesPerson` becomes `SalesPeople` and the leading words keep their case.

use crate::naming::words;

const UNCOUNTABLE: &[&str] = &[
    "data",
    "deer",
    "equipment",
    "fish",
    "info",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
];

/// (singular, plural)
const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("status", "statuses"),
    ("tooth", "teeth"),
    ("woman", "women"),
    ("knife", "knives"),
    ("life", "lives"),
    ("wife", "wives"),
    ("calf", "calves"),
    ("half", "halves"),
    ("leaf", "leaves"),
    ("loaf", "loaves"),
    ("self", "selves"),
    ("shelf", "shelves"),
    ("thief", "thieves"),
    ("wolf", "wolves"),
    ("cookie", "cookies"),
    ("movie", "movies"),
    ("tie", "ties"),
];

/// Pluralize the last word of an identifier (e.g., "Category" -> "Categories").
pub fn pluralize(word: &str) -> String {
    let Some((stem, last, tail)) = split_last(word) else {
        return word.to_string();
    };
    let lower = last.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) || IRREGULAR.iter().any(|(_, p)| *p == lower) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(s, _)| *s == lower) {
        return format!("{}{}{}", stem, match_case(last, plural), tail);
    }

    let (strip, append) = if lower.ends_with('y') && !ends_with_vowel_before(&lower, 1) {
        (1, "ies")
    } else if lower.ends_with("is") {
        (2, "es")
    } else if ["s", "x", "z", "ch", "sh"].iter().any(|s| lower.ends_with(s)) {
        (0, "es")
    } else {
        (0, "s")
    };
    format!("{}{}{}", stem, apply_suffix(last, strip, append), tail)
}

/// Singularize the last word of an identifier (e.g., "Users" -> "User").
///
/// Words that are already singular are returned unchanged.
pub fn singularize(word: &str) -> String {
    let Some((stem, last, tail)) = split_last(word) else {
        return word.to_string();
    };
    let lower = last.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) || IRREGULAR.iter().any(|(s, _)| *s == lower) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, p)| *p == lower) {
        return format!("{}{}{}", stem, match_case(last, singular), tail);
    }

    let (strip, append) = if lower.len() > 3 && lower.ends_with("ies") {
        (3, "y")
    } else if lower.ends_with("yses") {
        (2, "is")
    } else if ["sses", "xes", "zes", "ches", "shes"]
        .iter()
        .any(|s| lower.ends_with(s))
    {
        (2, "")
    } else if lower.len() > 1
        && lower.ends_with('s')
        && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s))
    {
        (1, "")
    } else {
        (0, "")
    };
    format!("{}{}{}", stem, apply_suffix(last, strip, append), tail)
}

/// Split around the last word: (everything before it, the word, trailing separators).
fn split_last(word: &str) -> Option<(&str, &str, &str)> {
    let last = *words(word).last()?;
    // Only separators can follow the last word, so its final occurrence is the word itself.
    let at = word.rfind(last)?;
    Some((&word[..at], last, &word[at + last.len()..]))
}

fn ends_with_vowel_before(lower: &str, offset: usize) -> bool {
    lower
        .chars()
        .rev()
        .nth(offset)
        .is_some_and(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
}

fn apply_suffix(word: &str, strip: usize, append: &str) -> String {
    let kept = &word[..word.len() - strip];
    if word.len() > 1 && word.chars().all(|c| !c.is_lowercase()) {
        format!("{}{}", kept, append.to_uppercase())
    } else {
        format!("{}{}", kept, append)
    }
}

/// Spell `replacement` with the capitalization of `original`.
fn match_case(original: &str, replacement: &str) -> String {
    if original.len() > 1 && original.chars().all(|c| !c.is_lowercase()) {
        replacement.to_uppercase()
    } else if original.starts_with(char::is_uppercase) {
        crate::capitalize(replacement)
    } else {
        replacement.to_string()
    }
}
