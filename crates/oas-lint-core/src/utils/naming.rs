//! Identifier case and blank-text predicates.

/// Returns `true` for lowerCamelCase: a lowercase ASCII letter followed by
/// ASCII letters or digits only.
#[must_use]
pub fn is_lower_camel_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Returns `true` for UPPER_SNAKE_CASE: one or more groups of uppercase
/// ASCII letters or digits joined by single underscores.
#[must_use]
pub fn is_upper_snake_case(value: &str) -> bool {
    value.split('_').all(|group| {
        !group.is_empty()
            && group
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    })
}

/// Returns `true` if `text` is empty or whitespace only.
///
/// No-break spaces (U+00A0, U+2007, U+202F) and NEL (U+0085) count as
/// content; the information separators U+001C..U+001F count as whitespace.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.chars().all(|c| {
        matches!(c, '\u{1C}'..='\u{1F}')
            || (c.is_whitespace() && !matches!(c, '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_camel_case() {
        for ok in ["firstName", "id", "userId", "a1b2", "x"] {
            assert!(is_lower_camel_case(ok), "{ok} should be lowerCamelCase");
        }
        for bad in ["First_name", "first_name", "1stName", "FirstName", "", "first-name", "naïve"] {
            assert!(!is_lower_camel_case(bad), "{bad} should not be lowerCamelCase");
        }
    }

    #[test]
    fn test_upper_snake_case() {
        for ok in ["DARK_GREEN", "ACTIVE", "IN_PROGRESS", "V2", "2XX", "A_1_B"] {
            assert!(is_upper_snake_case(ok), "{ok} should be UPPER_SNAKE_CASE");
        }
        for bad in ["red", "Blue", "dark_green", "_ACTIVE", "ACTIVE_", "IN__PROGRESS", "", "IN-PROGRESS"] {
            assert!(!is_upper_snake_case(bad), "{bad} should not be UPPER_SNAKE_CASE");
        }
    }

    #[test]
    fn test_is_blank() {
        for blank in ["", " ", "\t\n\r", "\u{2003}\u{3000}", "\u{1F}"] {
            assert!(is_blank(blank), "{blank:?} should be blank");
        }
        for text in ["a", "  x  ", "\u{A0}", "\u{2007}\u{202F}", "\u{85}"] {
            assert!(!is_blank(text), "{text:?} should not be blank");
        }
    }
}
