//! Per-field rules applied to a draft before it may be submitted.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{ErrorMap, Field, PhoneRule, UserDraft};

// ASCII classes throughout: `\w` and `\d` are Unicode-aware in `regex`.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*@([A-Za-z0-9_-]+\.)+[A-Za-z]{2,7}$")
        .expect("email pattern is valid")
});

static FORMATTED_PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\([0-9]{3}\)\s[0-9]{3}-[0-9]{4}$").expect("phone pattern is valid")
});

static DIGITS_PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,}$").expect("phone pattern is valid"));

pub const NAME_REQUIRED: &str = "Name is required";
pub const GENDER_REQUIRED: &str = "Gender is required";
pub const AGE_INVALID: &str = "Valid age is required";
pub const EMAIL_INVALID: &str = "Valid email is required";

/// Validate every field independently; the result holds only the failures.
pub fn validate(draft: &UserDraft, phone_rule: PhoneRule) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if draft.name.is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }
    if draft.gender.is_empty() {
        errors.insert(Field::Gender, GENDER_REQUIRED);
    }
    if !is_numeric(&draft.age) {
        errors.insert(Field::Age, AGE_INVALID);
    }
    if !is_email(&draft.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }
    if !is_phone(&draft.phone, phone_rule) {
        errors.insert(Field::Phone, phone_rule.message());
    }

    errors
}

/// A decimal number (any magnitude) or an unsigned `0x`/`0o`/`0b` integer
/// literal, surrounding whitespace allowed. Range is not checked.
pub fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }

    if let Some((radix, digits)) = radix_literal(trimmed) {
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }

    // `f64::from_str` also takes these spellings; they are not numbers a user types as an age.
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if ["inf", "infinity", "nan"]
        .iter()
        .any(|word| unsigned.eq_ignore_ascii_case(word))
    {
        return false;
    }

    // Overflow to infinity still counts: "1e400" is a numeric string.
    trimmed.parse::<f64>().is_ok()
}

fn radix_literal(value: &str) -> Option<(u32, &str)> {
    let prefix = value.get(..2)?;
    let radix = match prefix.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    Some((radix, &value[2..]))
}

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_phone(value: &str, rule: PhoneRule) -> bool {
    match rule {
        PhoneRule::Formatted => FORMATTED_PHONE_RE.is_match(value),
        PhoneRule::Digits => DIGITS_PHONE_RE.is_match(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> UserDraft {
        UserDraft {
            name: "Ada".to_string(),
            gender: "F".to_string(),
            age: "30".to_string(),
            email: "a@b.com".to_string(),
            phone: "(555) 123-4567".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate(&valid_draft(), PhoneRule::Formatted).is_empty());
    }

    #[test]
    fn test_each_empty_field_is_reported() {
        for field in Field::ALL {
            let mut draft = valid_draft();
            draft.set(field, "");
            let errors = validate(&draft, PhoneRule::Formatted);
            assert_eq!(errors.len(), 1, "only {field} should fail");
            assert!(errors.contains(field));
        }
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let errors = validate(&UserDraft::default(), PhoneRule::Formatted);
        assert_eq!(errors.len(), Field::ALL.len());
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Gender), Some(GENDER_REQUIRED));
        assert_eq!(errors.get(Field::Age), Some(AGE_INVALID));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(errors.get(Field::Phone), Some(PhoneRule::Formatted.message()));
    }

    #[test]
    fn test_bad_email_only() {
        let mut draft = valid_draft();
        draft.email = "not-an-email".to_string();
        let errors = validate(&draft, PhoneRule::Formatted);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some("Valid email is required"));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_email("a@b.com"));
        assert!(is_email("first.last@mail.example.org"));
        assert!(is_email("under_score-dash@host-name.io"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("a@b"));
        assert!(!is_email("@b.com"));
        assert!(!is_email("a@b.c"));
        assert!(!is_email("a b@c.com"));
        assert!(!is_email("a@b.com "));
        assert!(!is_email("é@b.com"));
    }

    #[test]
    fn test_age_numeric() {
        assert!(is_numeric("30"));
        assert!(is_numeric("0"));
        assert!(is_numeric("-4"));
        assert!(is_numeric("250"));
        assert!(is_numeric("29.5"));
        assert!(is_numeric(" 42 "));
        assert!(!is_numeric(""));
        assert!(!is_numeric("   "));
        assert!(!is_numeric("thirty"));
        assert!(!is_numeric("30y"));
        assert!(!is_numeric("NaN"));
        assert!(!is_numeric("inf"));
        assert!(!is_numeric("-Infinity"));
    }

    #[test]
    fn test_age_numeric_out_of_f64_range() {
        assert!(is_numeric("1e400"));
        assert!(is_numeric("-1e400"));
    }

    #[test]
    fn test_age_numeric_radix_literals() {
        assert!(is_numeric("0x1E"));
        assert!(is_numeric("0X1e"));
        assert!(is_numeric("0o36"));
        assert!(is_numeric("0b11110"));
        assert!(is_numeric("0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"));
        assert!(!is_numeric("0x"));
        assert!(!is_numeric("0xZZ"));
        assert!(!is_numeric("0b102"));
        assert!(!is_numeric("-0x1E"));
    }

    #[test]
    fn test_formatted_phone() {
        assert!(is_phone("(555) 123-4567", PhoneRule::Formatted));
        assert!(!is_phone("555-123-4567", PhoneRule::Formatted));
        assert!(!is_phone("5551234567", PhoneRule::Formatted));
        assert!(!is_phone("(555)123-4567", PhoneRule::Formatted));
        assert!(!is_phone("(555) 123-45678", PhoneRule::Formatted));
    }

    #[test]
    fn test_digits_phone() {
        assert!(is_phone("5551234567", PhoneRule::Digits));
        assert!(is_phone("445551234567", PhoneRule::Digits));
        assert!(!is_phone("555123456", PhoneRule::Digits));
        assert!(!is_phone("(555) 123-4567", PhoneRule::Digits));
    }

    #[test]
    fn test_phone_message_follows_rule() {
        let mut draft = valid_draft();
        draft.phone = "123".to_string();
        let errors = validate(&draft, PhoneRule::Digits);
        assert_eq!(errors.get(Field::Phone), Some(PhoneRule::Digits.message()));
    }
}
