//! Identifier case conversions used by the generated artifacts.

/// Split an identifier into words.
///
/// Words are separated by `_`, `-`, `.` or whitespace, and by case
/// boundaries: `userId` -> `user`, `Id` and `HTTPServer` -> `HTTP`, `Server`.
pub(crate) fn words(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    let chars: Vec<(usize, char)> = s.char_indices().collect();

    for (i, &(pos, c)) in chars.iter().enumerate() {
        if matches!(c, '_' | '-' | '.') || c.is_whitespace() {
            if let Some(begin) = start.take() {
                words.push(&s[begin..pos]);
            }
            continue;
        }

        if let Some(begin) = start
            && c.is_uppercase()
        {
            let prev = chars[i - 1].1;
            let next_is_lower = chars.get(i + 1).is_some_and(|(_, n)| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(&s[begin..pos]);
                start = Some(pos);
                continue;
            }
        }

        if start.is_none() {
            start = Some(pos);
        }
    }

    if let Some(begin) = start {
        words.push(&s[begin..]);
    }
    words
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "user_id" -> "UserId", "userID" -> "UserID")
pub fn to_pascal_case(s: &str) -> String {
    words(s).into_iter().map(capitalize).collect()
}

/// Convert a string to camelCase (e.g., "user_name" -> "userName", "ID" -> "id")
pub fn to_camel_case(s: &str) -> String {
    let mut words = words(s).into_iter();
    match words.next() {
        None => String::new(),
        Some(first) => first.to_lowercase() + &words.map(capitalize).collect::<String>(),
    }
}

/// Convert a string to snake_case (e.g., "UserGroup" -> "user_group", "UserID" -> "user_id")
pub fn to_snake_case(s: &str) -> String {
    words(s)
        .into_iter()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// ASCII lowercase, without splitting words.
pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// PascalCase an identifier and spell a trailing `id` as `ID`.
///
/// This is how ent names the Go struct fields and predicate functions it
/// generates, so every reference into generated ent code goes through it.
/// Identifiers shorter than two characters are returned PascalCased only.
pub fn normalize_identifier(s: &str) -> String {
    let pascal = to_pascal_case(s);
    if pascal.len() < 2 {
        return pascal;
    }

    let split = pascal.len() - 2;
    match pascal.get(split..) {
        Some(tail) if tail.eq_ignore_ascii_case("id") => format!("{}ID", &pascal[..split]),
        _ => pascal,
    }
}
