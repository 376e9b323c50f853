//! Field-level validation rules for the registration form.
//!
//! Every validator is a pure function from the raw field value (plus, where a
//! rule crosses fields, one dependent value) to a [`FieldValidation`] outcome.
//! No I/O, no side effects; the same rules run client-side on every edit and
//! server-side on submission.

use once_cell::sync::Lazy;
use regex::Regex;

use super::location;
use super::registration::Gender;

/// Outcome of evaluating a single field.
///
/// Ephemeral value consumed by the UI layer; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidation {
    pub valid: bool,
    pub message: String,
}

impl FieldValidation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Email domains known to provide throwaway addresses.
pub static DISPOSABLE_DOMAINS: &[&str] = &[
    "tempmail.com",
    "temp-mail.org",
    "10minutemail.com",
    "guerrillamail.com",
    "mailinator.com",
    "throwaway.email",
    "yopmail.com",
    "maildrop.cc",
    "spam4.me",
    "fakeinbox.com",
];

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("name pattern"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

fn validate_name(value: &str, label: &str) -> FieldValidation {
    if value.trim().is_empty() {
        return FieldValidation::fail(format!("{label} is required"));
    }
    if value.chars().count() < 2 {
        return FieldValidation::fail(format!("{label} must be at least 2 characters"));
    }
    if !NAME_RE.is_match(value) {
        return FieldValidation::fail(format!(
            "{label} can only contain letters, spaces, hyphens, and apostrophes"
        ));
    }
    FieldValidation::ok()
}

pub fn validate_first_name(value: &str) -> FieldValidation {
    validate_name(value, "First Name")
}

pub fn validate_last_name(value: &str) -> FieldValidation {
    validate_name(value, "Last Name")
}

pub fn validate_email(value: &str) -> FieldValidation {
    if value.trim().is_empty() {
        return FieldValidation::fail("Email is required");
    }
    if !EMAIL_RE.is_match(value) {
        return FieldValidation::fail("Please enter a valid email address");
    }

    // Pattern guarantees exactly the shape local@domain.tld, so the split
    // cannot fail here.
    let domain = value
        .split('@')
        .nth(1)
        .unwrap_or_default()
        .to_lowercase();

    if DISPOSABLE_DOMAINS.contains(&domain.as_str()) {
        return FieldValidation::fail("Disposable email domains are not allowed");
    }

    FieldValidation::ok()
}

/// Validate a phone number, optionally against the selected country's dial
/// code.
///
/// Separators (spaces, dashes, plus) are stripped before the 7-15 digit length
/// check. When a country is selected the number must start with its dial code,
/// with a legacy escape hatch: numbers whose stripped form starts with digit
/// `1` are accepted regardless of country. Kept for compatibility with the
/// original form behavior.
pub fn validate_phone(value: &str, country: Option<&str>) -> FieldValidation {
    if value.trim().is_empty() {
        return FieldValidation::fail("Phone Number is required");
    }

    let clean: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '+'))
        .collect();

    if clean.len() < 7 || clean.len() > 15 || !clean.chars().all(|c| c.is_ascii_digit()) {
        return FieldValidation::fail("Phone number must be between 7-15 digits");
    }

    if let Some(country) = country {
        if let Some(code) = location::dial_code(country) {
            if !value.starts_with(code) && !clean.starts_with('1') {
                return FieldValidation::fail(format!(
                    "Phone should start with {code} for {country}"
                ));
            }
        }
    }

    FieldValidation::ok()
}

/// Age is optional; an empty value is valid.
pub fn validate_age(value: &str) -> FieldValidation {
    if value.is_empty() {
        return FieldValidation::ok();
    }
    match value.trim().parse::<i64>() {
        Ok(age) if (18..=120).contains(&age) => FieldValidation::ok(),
        _ => FieldValidation::fail("Age must be between 18 and 120"),
    }
}

pub fn validate_gender(value: Option<Gender>) -> FieldValidation {
    match value {
        Some(_) => FieldValidation::ok(),
        None => FieldValidation::fail("Please select a gender"),
    }
}

pub fn validate_country(value: &str) -> FieldValidation {
    if value.is_empty() {
        return FieldValidation::fail("Country is required");
    }
    FieldValidation::ok()
}

/// A state must be non-empty and, when a country is selected, belong to that
/// country in the location table.
pub fn validate_state(value: &str, country: &str) -> FieldValidation {
    if value.is_empty() {
        return FieldValidation::fail("State/Province is required");
    }
    if !country.is_empty() && !location::contains_state(country, value) {
        return FieldValidation::fail("State/Province is not valid for the selected country");
    }
    FieldValidation::ok()
}

/// A city must be non-empty and, when country and state are selected, belong
/// to that pair in the location table.
pub fn validate_city(value: &str, country: &str, state: &str) -> FieldValidation {
    if value.is_empty() {
        return FieldValidation::fail("City is required");
    }
    if !country.is_empty()
        && !state.is_empty()
        && !location::contains_city(country, state, value)
    {
        return FieldValidation::fail("City is not valid for the selected state");
    }
    FieldValidation::ok()
}

pub fn validate_password(value: &str) -> FieldValidation {
    if value.is_empty() {
        return FieldValidation::fail("Password is required");
    }
    if value.chars().count() < 8 {
        return FieldValidation::fail("Password must be at least 8 characters");
    }
    FieldValidation::ok()
}

/// Cross-field rule: confirmation must match the password exactly.
pub fn validate_confirm_password(value: &str, password: &str) -> FieldValidation {
    if value.is_empty() {
        return FieldValidation::fail("Confirm Password is required");
    }
    if value != password {
        return FieldValidation::fail("Passwords do not match");
    }
    FieldValidation::ok()
}

pub fn validate_terms(accepted: bool) -> FieldValidation {
    if !accepted {
        return FieldValidation::fail("You must agree to Terms & Conditions");
    }
    FieldValidation::ok()
}

/// Password strength bands reported by the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

impl std::fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Score one point each for length thresholds 8/12/16 and for the presence of
/// lowercase, uppercase, digit, and symbol characters. <=2 points is weak,
/// <=4 is medium, anything above is strong.
pub fn password_strength(password: &str) -> PasswordStrength {
    let mut score = 0;

    let len = password.chars().count();
    if len >= 8 {
        score += 1;
    }
    if len >= 12 {
        score += 1;
    }
    if len >= 16 {
        score += 1;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    match score {
        0..=2 => PasswordStrength::Weak,
        3..=4 => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Name tests

    #[test]
    fn test_valid_names() {
        assert!(validate_first_name("John").valid);
        assert!(validate_first_name("Mary Jane").valid);
        assert!(validate_first_name("O'Brien").valid);
        assert!(validate_last_name("Smith-Jones").valid);
    }

    #[test]
    fn test_empty_name() {
        let result = validate_first_name("");
        assert!(!result.valid);
        assert_eq!(result.message, "First Name is required");

        let result = validate_last_name("   ");
        assert!(!result.valid);
        assert_eq!(result.message, "Last Name is required");
    }

    #[test]
    fn test_name_too_short() {
        let result = validate_first_name("J");
        assert!(!result.valid);
        assert_eq!(result.message, "First Name must be at least 2 characters");
    }

    #[test]
    fn test_name_rejects_digits_and_symbols() {
        for value in ["John3", "Jo#hn", "J@ne", "Anna1", "Sm;th", "D0e"] {
            assert!(
                !validate_first_name(value).valid,
                "expected '{value}' to be rejected"
            );
            assert!(!validate_last_name(value).valid);
        }
    }

    // Email tests

    #[test]
    fn test_valid_email() {
        assert!(validate_email("john.doe@example.com").valid);
        assert!(validate_email("a@b.co").valid);
    }

    #[test]
    fn test_empty_email() {
        let result = validate_email("");
        assert_eq!(result.message, "Email is required");
    }

    #[test]
    fn test_malformed_email() {
        for value in ["plainaddress", "no@tld", "spaces in@mail.com", "@missing.local"] {
            let result = validate_email(value);
            assert!(!result.valid, "expected '{value}' to be rejected");
            assert_eq!(result.message, "Please enter a valid email address");
        }
    }

    #[test]
    fn test_disposable_domains_rejected() {
        for domain in DISPOSABLE_DOMAINS {
            let result = validate_email(&format!("user@{domain}"));
            assert!(!result.valid);
            assert!(result.message.contains("Disposable"));
        }
    }

    #[test]
    fn test_disposable_domain_check_is_case_insensitive() {
        let result = validate_email("user@MAILINATOR.COM");
        assert!(!result.valid);
        assert!(result.message.contains("Disposable"));
    }

    // Phone tests

    #[test]
    fn test_valid_phone_without_country() {
        assert!(validate_phone("1234567", None).valid);
        assert!(validate_phone("+1 123-456-7890", None).valid);
    }

    #[test]
    fn test_empty_phone() {
        assert_eq!(
            validate_phone("", None).message,
            "Phone Number is required"
        );
    }

    #[test]
    fn test_phone_length_bounds() {
        assert!(!validate_phone("123456", None).valid);
        assert!(!validate_phone("1234567890123456", None).valid);
        assert!(validate_phone("123456789012345", None).valid);
    }

    #[test]
    fn test_phone_rejects_non_digits() {
        let result = validate_phone("12345abc", None);
        assert!(!result.valid);
        assert_eq!(result.message, "Phone number must be between 7-15 digits");
    }

    #[test]
    fn test_phone_dial_code_enforced() {
        let result = validate_phone("+44 7912 345678", Some("UK"));
        assert!(result.valid);

        let result = validate_phone("+91 9876543210", Some("UK"));
        assert!(!result.valid);
        assert_eq!(result.message, "Phone should start with +44 for UK");
    }

    #[test]
    fn test_phone_leading_one_escape_hatch() {
        // Legacy behavior: any number whose digits start with 1 passes the
        // dial-code check for every country.
        assert!(validate_phone("1234567890", Some("Australia")).valid);
    }

    #[test]
    fn test_phone_scenario_number() {
        assert!(validate_phone("+11234567890", Some("USA")).valid);
    }

    // Age tests

    #[test]
    fn test_age_optional() {
        assert!(validate_age("").valid);
    }

    #[test]
    fn test_age_bounds() {
        assert!(validate_age("18").valid);
        assert!(validate_age("120").valid);
        assert!(!validate_age("17").valid);
        assert!(!validate_age("121").valid);
        assert!(!validate_age("not a number").valid);
        assert_eq!(validate_age("12").message, "Age must be between 18 and 120");
    }

    // Gender tests

    #[test]
    fn test_gender_required() {
        assert!(validate_gender(Some(Gender::Female)).valid);
        let result = validate_gender(None);
        assert!(!result.valid);
        assert_eq!(result.message, "Please select a gender");
    }

    // Location field tests

    #[test]
    fn test_country_required() {
        assert!(!validate_country("").valid);
        assert!(validate_country("USA").valid);
    }

    #[test]
    fn test_state_checked_against_table() {
        assert!(!validate_state("", "USA").valid);
        assert!(validate_state("Texas", "USA").valid);
        let result = validate_state("Ontario", "USA");
        assert!(!result.valid);
        assert_eq!(
            result.message,
            "State/Province is not valid for the selected country"
        );
    }

    #[test]
    fn test_city_checked_against_table() {
        assert!(!validate_city("", "USA", "Texas").valid);
        assert!(validate_city("Dallas", "USA", "Texas").valid);
        assert!(!validate_city("Miami", "USA", "Texas").valid);
    }

    // Password tests

    #[test]
    fn test_password_rules() {
        assert_eq!(validate_password("").message, "Password is required");
        assert_eq!(
            validate_password("short").message,
            "Password must be at least 8 characters"
        );
        assert!(validate_password("longenough").valid);
    }

    #[test]
    fn test_confirm_password_matches() {
        assert!(validate_confirm_password("Secret123!", "Secret123!").valid);
    }

    #[test]
    fn test_confirm_password_mismatch() {
        let result = validate_confirm_password("Secret123!", "Secret123?");
        assert!(!result.valid);
        assert_eq!(result.message, "Passwords do not match");

        assert_eq!(
            validate_confirm_password("", "Secret123!").message,
            "Confirm Password is required"
        );
    }

    // Terms tests

    #[test]
    fn test_terms_must_be_accepted() {
        assert!(validate_terms(true).valid);
        let result = validate_terms(false);
        assert!(!result.valid);
        assert_eq!(result.message, "You must agree to Terms & Conditions");
    }

    // Strength meter tests

    #[test]
    fn test_strength_weak() {
        assert_eq!(password_strength("weak"), PasswordStrength::Weak);
        assert_eq!(password_strength(""), PasswordStrength::Weak);
    }

    #[test]
    fn test_strength_medium() {
        // 8 chars + lower + upper + digit = 4 points
        assert_eq!(password_strength("Medium12"), PasswordStrength::Medium);
        // 9 chars + lower + digit = 3 points
        assert_eq!(password_strength("medium123"), PasswordStrength::Medium);
    }

    #[test]
    fn test_strength_strong() {
        assert_eq!(
            password_strength("VeryStrong123!@#"),
            PasswordStrength::Strong
        );
    }

    #[test]
    fn test_strength_labels() {
        assert_eq!(PasswordStrength::Weak.label(), "weak");
        assert_eq!(PasswordStrength::Medium.label(), "medium");
        assert_eq!(PasswordStrength::Strong.to_string(), "strong");
    }
}
