//! String-policy matching
//!
//! One dispatch arm per policy so each policy's edge cases stay independently
//! testable. Input text is an `Option` because some call sites (argument
//! matching in the surrounding system) must distinguish "no text" from empty
//! text; the node matcher always supplies `Some`.

use crate::error::{MatchError, Result};
use crate::matcher::whitespace::collapse_whitespace;
use crate::matcher::{StringMatcher, TextBody};
use regex::Regex;

/// Evaluate a string-policy matcher against optional text
pub fn match_text(text: Option<&str>, matcher: &StringMatcher) -> Result<bool> {
    match matcher {
        StringMatcher::Equals(expected) => Ok(text == Some(expected.as_str())),
        StringMatcher::IsNull => Ok(text.is_none()),
        StringMatcher::IsBlank => Ok(text.is_some_and(is_blank)),
        StringMatcher::IsEmpty => Ok(text == Some("")),
        StringMatcher::IsNullOrEmpty => Ok(text.map_or(true, str::is_empty)),
        StringMatcher::IsNullOrBlank => Ok(text.map_or(true, is_blank)),
        StringMatcher::EqualsIgnoringWhitespace(expected) => {
            Ok(text.is_some_and(|t| collapse_whitespace(t) == *expected))
        }
        StringMatcher::EqualsIgnoringCase(expected) => {
            Ok(text.is_some_and(|t| t.to_lowercase() == expected.to_lowercase()))
        }
        StringMatcher::MatchesRegex(pattern) => {
            let regex = compile_anchored(pattern)?;
            Ok(text.is_some_and(|t| regex.is_match(t)))
        }
        StringMatcher::StartsWith {
            prefix,
            case_insensitive,
        } => Ok(text.is_some_and(|t| {
            if *case_insensitive {
                t.to_lowercase().starts_with(&prefix.to_lowercase())
            } else {
                t.starts_with(prefix.as_str())
            }
        })),
        StringMatcher::EndsWith {
            suffix,
            case_insensitive,
        } => Ok(text.is_some_and(|t| {
            if *case_insensitive {
                t.to_lowercase().ends_with(&suffix.to_lowercase())
            } else {
                t.ends_with(suffix.as_str())
            }
        })),
        StringMatcher::Contains {
            needle,
            case_insensitive,
        } => Ok(text.is_some_and(|t| {
            if *case_insensitive {
                t.to_lowercase().contains(&needle.to_lowercase())
            } else {
                t.contains(needle.as_str())
            }
        })),
        StringMatcher::ContainsInOrder(substrings) => {
            Ok(text.is_some_and(|t| contains_in_order(t, substrings)))
        }
        StringMatcher::HasLength(token) => {
            let expected = parse_length_literal(token)?;
            Ok(text.is_some_and(|t| t.chars().count() == expected))
        }
        StringMatcher::Unsupported(kind) => {
            Err(MatchError::UnsupportedMatcherKind { kind: kind.clone() })
        }
    }
}

/// Evaluate a text-matcher body: a bare literal is plain equality, a
/// sub-matcher delegates to the policy family
pub fn match_text_body(text: Option<&str>, body: &TextBody) -> Result<bool> {
    match body {
        TextBody::Literal(expected) => Ok(text == Some(expected.as_str())),
        TextBody::Matcher(matcher) => match_text(text, matcher),
    }
}

fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// Find each substring starting strictly after the end of the previous match
fn contains_in_order(text: &str, substrings: &[String]) -> bool {
    let mut cursor = 0;
    for needle in substrings {
        match text[cursor..].find(needle.as_str()) {
            Some(offset) => cursor += offset + needle.len(),
            None => return false,
        }
    }
    true
}

/// Compile a pattern anchored at both ends so the entire string must match
fn compile_anchored(pattern: &str) -> Result<Regex> {
    Regex::new(&format!(r"\A(?:{pattern})\z")).map_err(|_| MatchError::MalformedLiteral {
        literal: pattern.to_string(),
        expected: "regular expression",
    })
}

fn parse_length_literal(token: &str) -> Result<usize> {
    token
        .parse::<usize>()
        .map_err(|_| MatchError::MalformedLiteral {
            literal: token.to_string(),
            expected: "non-negative integer",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn eval(text: &str, matcher: StringMatcher) -> bool {
        match_text(Some(text), &matcher).unwrap()
    }

    #[test]
    fn test_equals() {
        assert!(eval("test", StringMatcher::Equals("test".into())));
        assert!(!eval("Test", StringMatcher::Equals("test".into())));
        assert!(!match_text(None, &StringMatcher::Equals("test".into())).unwrap());
    }

    #[rstest]
    #[case(None, true, false, false)]
    #[case(Some(""), false, true, true)]
    #[case(Some("  \t"), false, true, false)]
    #[case(Some("x"), false, false, false)]
    fn test_null_blank_empty(
        #[case] text: Option<&str>,
        #[case] null: bool,
        #[case] blank: bool,
        #[case] empty: bool,
    ) {
        assert_eq!(match_text(text, &StringMatcher::IsNull).unwrap(), null);
        assert_eq!(match_text(text, &StringMatcher::IsBlank).unwrap(), blank);
        assert_eq!(match_text(text, &StringMatcher::IsEmpty).unwrap(), empty);
        assert_eq!(
            match_text(text, &StringMatcher::IsNullOrEmpty).unwrap(),
            null || empty
        );
        assert_eq!(
            match_text(text, &StringMatcher::IsNullOrBlank).unwrap(),
            null || blank
        );
    }

    #[test]
    fn test_equals_ignoring_whitespace() {
        let matcher = StringMatcher::EqualsIgnoringWhitespace("a b c".into());
        assert!(match_text(Some("a   b\tc"), &matcher).unwrap());
        assert!(!match_text(Some("ab c"), &matcher).unwrap());
        // Only the input is collapsed, never the expected literal.
        let strict = StringMatcher::EqualsIgnoringWhitespace("a  b".into());
        assert!(!match_text(Some("a  b"), &strict).unwrap());
    }

    #[test]
    fn test_equals_ignoring_case() {
        let matcher = StringMatcher::EqualsIgnoringCase("TeSt".into());
        assert!(match_text(Some("test"), &matcher).unwrap());
        assert!(match_text(Some("TEST"), &matcher).unwrap());
        assert!(!match_text(Some("tests"), &matcher).unwrap());
    }

    #[test]
    fn test_regex_is_anchored() {
        let matcher = StringMatcher::MatchesRegex("a+b".into());
        assert!(eval("aab", matcher.clone()));
        // Contains a match, but the full string does not match.
        assert!(!eval("xaabx", matcher));
    }

    #[test]
    fn test_regex_malformed_pattern_is_error() {
        let result = match_text(Some("x"), &StringMatcher::MatchesRegex("(unclosed".into()));
        assert!(matches!(
            result,
            Err(MatchError::MalformedLiteral {
                expected: "regular expression",
                ..
            })
        ));
    }

    #[rstest]
    #[case("Hello World", "Hello", false, true)]
    #[case("Hello World", "hello", false, false)]
    #[case("Hello World", "hello", true, true)]
    #[case("Hello World", "World", false, false)]
    fn test_starts_with(
        #[case] text: &str,
        #[case] prefix: &str,
        #[case] case_insensitive: bool,
        #[case] expected: bool,
    ) {
        let matcher = StringMatcher::StartsWith {
            prefix: prefix.into(),
            case_insensitive,
        };
        assert_eq!(eval(text, matcher), expected);
    }

    #[rstest]
    #[case("Hello World", "World", false, true)]
    #[case("Hello World", "WORLD", false, false)]
    #[case("Hello World", "WORLD", true, true)]
    #[case("Hello World", "Hello", false, false)]
    fn test_ends_with(
        #[case] text: &str,
        #[case] suffix: &str,
        #[case] case_insensitive: bool,
        #[case] expected: bool,
    ) {
        let matcher = StringMatcher::EndsWith {
            suffix: suffix.into(),
            case_insensitive,
        };
        assert_eq!(eval(text, matcher), expected);
    }

    #[rstest]
    #[case("Hello World", "lo Wo", false, true)]
    #[case("Hello World", "LO wO", false, false)]
    #[case("Hello World", "LO wO", true, true)]
    #[case("Hello World", "xyz", true, false)]
    fn test_contains(
        #[case] text: &str,
        #[case] needle: &str,
        #[case] case_insensitive: bool,
        #[case] expected: bool,
    ) {
        let matcher = StringMatcher::Contains {
            needle: needle.into(),
            case_insensitive,
        };
        assert_eq!(eval(text, matcher), expected);
    }

    #[test]
    fn test_contains_in_order() {
        let in_order = |subs: &[&str]| {
            StringMatcher::ContainsInOrder(subs.iter().map(|s| s.to_string()).collect())
        };
        assert!(eval("abcXdefXghi", in_order(&["abc", "ghi"])));
        assert!(!eval("abcXdefXghi", in_order(&["ghi", "abc"])));
        // The cursor moves past each match, so overlapping hits do not count.
        assert!(!eval("abc", in_order(&["ab", "bc"])));
        assert!(eval("abcbc", in_order(&["ab", "bc"])));
        assert!(!eval("abc", in_order(&["abc", "x"])));
    }

    #[test]
    fn test_has_length() {
        assert!(eval("abcd", StringMatcher::HasLength("4".into())));
        assert!(!eval("abcd", StringMatcher::HasLength("3".into())));
        // Character count, not byte count.
        assert!(eval("äöü", StringMatcher::HasLength("3".into())));
    }

    #[test]
    fn test_has_length_malformed_literal_is_error() {
        let result = match_text(Some("abcd"), &StringMatcher::HasLength("4x".into()));
        assert_eq!(
            result,
            Err(MatchError::MalformedLiteral {
                literal: "4x".into(),
                expected: "non-negative integer",
            })
        );
    }

    #[test]
    fn test_unsupported_kind_is_error() {
        let result = match_text(Some("x"), &StringMatcher::Unsupported("soundsLike".into()));
        assert_eq!(
            result,
            Err(MatchError::UnsupportedMatcherKind {
                kind: "soundsLike".into()
            })
        );
    }

    #[test]
    fn test_text_body_literal_vs_matcher() {
        let literal = TextBody::Literal("abc".into());
        assert!(match_text_body(Some("abc"), &literal).unwrap());
        assert!(!match_text_body(Some("ABC"), &literal).unwrap());

        let matcher = TextBody::Matcher(StringMatcher::EqualsIgnoringCase("abc".into()));
        assert!(match_text_body(Some("ABC"), &matcher).unwrap());
    }
}
