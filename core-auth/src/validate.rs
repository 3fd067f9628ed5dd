//! Credential validation policy.
//!
//! Sign-in checks presence only; sign-up enforces the full account
//! policy, accumulating every violated rule so the user sees the complete
//! list at once. Validation is local and pure: it never touches the
//! identity provider, and identical inputs always yield the identical
//! violation list.

use once_cell::sync::Lazy;
use regex::Regex;

/// Email shape: local part (dotted atoms or a quoted string), `@`, then a
/// dotted domain with a TLD or a bracketed IPv4 literal.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is valid")
});

/// Characters that satisfy the special-character rule.
static SPECIAL_CHAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?]"#)
        .expect("special character pattern is valid")
});

/// Shown when a sign-in field is empty.
pub const MISSING_VALUES_SIGN_IN: &str = "Missing Values.";
/// Shown when a sign-up field is empty. The casing differs from the
/// sign-in message; both are load-bearing display strings.
pub const MISSING_VALUES_SIGN_UP: &str = "Missing values.";

const INVALID_EMAIL: &str = "Invalid email.";
const NEEDS_NUMBER: &str = "Password must include a number.";
const NEEDS_LOWERCASE: &str = "Password must include a lower case letter.";
const NEEDS_UPPERCASE: &str = "Password must include an uppercase letter.";
const TOO_SHORT: &str = "Password must contain 8 characters at least.";
const NEEDS_SPECIAL: &str = "Password must include an special character.";
const CONFIRMATION_MISMATCH: &str = "Passwords are different.";

const MIN_PASSWORD_CHARS: usize = 8;

/// Presence check for sign-in. No format rules apply here; the provider
/// is the authority on whether the pair is valid.
pub fn validate_sign_in(email: &str, password: &str) -> Result<(), Vec<String>> {
    if email.is_empty() || password.is_empty() {
        return Err(vec![MISSING_VALUES_SIGN_IN.to_string()]);
    }
    Ok(())
}

/// Full sign-up policy.
///
/// Empty fields short-circuit to a single "Missing values." violation.
/// Otherwise every rule is checked and every failure reported, in rule
/// order:
///
/// 1. email matches the module's email pattern
/// 2. password contains a digit
/// 3. password contains a lowercase letter
/// 4. password contains an uppercase letter
/// 5. password is at least 8 characters
/// 6. password contains a special character
/// 7. password equals the confirmation
pub fn validate_sign_up(
    email: &str,
    password: &str,
    confirmation: &str,
) -> Result<(), Vec<String>> {
    if email.is_empty() || password.is_empty() || confirmation.is_empty() {
        return Err(vec![MISSING_VALUES_SIGN_UP.to_string()]);
    }

    let mut violations = Vec::new();
    if !EMAIL_PATTERN.is_match(email) {
        violations.push(INVALID_EMAIL);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(NEEDS_NUMBER);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        violations.push(NEEDS_LOWERCASE);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push(NEEDS_UPPERCASE);
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        violations.push(TOO_SHORT);
    }
    if !SPECIAL_CHAR_PATTERN.is_match(password) {
        violations.push(NEEDS_SPECIAL);
    }
    if password != confirmation {
        violations.push(CONFIRMATION_MISMATCH);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_requires_both_fields() {
        assert_eq!(
            validate_sign_in("", "secret").unwrap_err(),
            vec![MISSING_VALUES_SIGN_IN.to_string()]
        );
        assert_eq!(
            validate_sign_in("user@example.com", "").unwrap_err(),
            vec![MISSING_VALUES_SIGN_IN.to_string()]
        );
        assert!(validate_sign_in("user@example.com", "secret").is_ok());
    }

    #[test]
    fn sign_in_skips_format_rules() {
        // Presence only: a malformed email or weak password is the
        // provider's problem at sign-in time.
        assert!(validate_sign_in("not-an-email", "x").is_ok());
    }

    #[test]
    fn sign_up_missing_fields_short_circuit() {
        let violations = validate_sign_up("", "", "").unwrap_err();
        assert_eq!(violations, vec![MISSING_VALUES_SIGN_UP.to_string()]);

        let violations = validate_sign_up("user@example.com", "Abcdef1!", "").unwrap_err();
        assert_eq!(violations, vec![MISSING_VALUES_SIGN_UP.to_string()]);
    }

    #[test]
    fn well_formed_sign_up_passes() {
        assert!(validate_sign_up("user@example.com", "Abcdef1!", "Abcdef1!").is_ok());
    }

    #[test]
    fn all_seven_rules_can_fail_at_once() {
        // Spaces trip every password rule, "plainaddress" the email rule,
        // and the confirmation differs.
        let violations = validate_sign_up("plainaddress", "   ", "different").unwrap_err();
        assert_eq!(
            violations,
            vec![
                INVALID_EMAIL.to_string(),
                NEEDS_NUMBER.to_string(),
                NEEDS_LOWERCASE.to_string(),
                NEEDS_UPPERCASE.to_string(),
                TOO_SHORT.to_string(),
                NEEDS_SPECIAL.to_string(),
                CONFIRMATION_MISMATCH.to_string(),
            ]
        );
    }

    #[test]
    fn single_rule_failures_are_isolated() {
        let violations = validate_sign_up("user@example.com", "Abcdefg!", "Abcdefg!").unwrap_err();
        assert_eq!(violations, vec![NEEDS_NUMBER.to_string()]);

        let violations = validate_sign_up("user@example.com", "ABCDEF1!", "ABCDEF1!").unwrap_err();
        assert_eq!(violations, vec![NEEDS_LOWERCASE.to_string()]);

        let violations = validate_sign_up("user@example.com", "abcdef1!", "abcdef1!").unwrap_err();
        assert_eq!(violations, vec![NEEDS_UPPERCASE.to_string()]);

        let violations = validate_sign_up("user@example.com", "Abc1!", "Abc1!").unwrap_err();
        assert_eq!(violations, vec![TOO_SHORT.to_string()]);

        let violations = validate_sign_up("user@example.com", "Abcdefg1", "Abcdefg1").unwrap_err();
        assert_eq!(violations, vec![NEEDS_SPECIAL.to_string()]);

        let violations = validate_sign_up("user@example.com", "Abcdef1!", "Abcdef2!").unwrap_err();
        assert_eq!(violations, vec![CONFIRMATION_MISMATCH.to_string()]);
    }

    #[test]
    fn email_accepts_common_shapes() {
        for email in [
            "user@example.com",
            "first.last@example.co.uk",
            "user@[192.168.1.1]",
            "\"quoted local\"@example.com",
        ] {
            assert!(
                validate_sign_up(email, "Abcdef1!", "Abcdef1!").is_ok(),
                "{email} should be accepted"
            );
        }
    }

    #[test]
    fn email_rejects_malformed_shapes() {
        for email in [
            "plainaddress",
            "@missing-local.com",
            "user@nodot",
            "user name@example.com",
            "user@example,com",
        ] {
            let violations = validate_sign_up(email, "Abcdef1!", "Abcdef1!").unwrap_err();
            assert_eq!(
                violations,
                vec![INVALID_EMAIL.to_string()],
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn length_rule_counts_characters_not_bytes() {
        // Eight characters, more than eight bytes.
        assert!(validate_sign_up("user@example.com", "äBcdef1!", "äBcdef1!").is_ok());
    }

    #[test]
    fn validation_is_idempotent() {
        let first = validate_sign_up("plainaddress", "   ", "different").unwrap_err();
        let second = validate_sign_up("plainaddress", "   ", "different").unwrap_err();
        assert_eq!(first, second);
    }
}
