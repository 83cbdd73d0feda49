//! Phone and email validation for imported contacts.
//!
//! Phone rules target Indian mobile numbers: ten digits starting with 6-9,
//! optionally prefixed with the `91` country code (with or without `+`).
//! All functions here are total: invalid input is reported through the return
//! value, never through an error.

use regex::Regex;
use std::sync::OnceLock;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static DOMESTIC_MOBILE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Country code prepended to domestic numbers for display.
pub const COUNTRY_CODE: &str = "91";

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex")
    })
}

fn domestic_mobile_regex() -> &'static Regex {
    DOMESTIC_MOBILE_REGEX
        .get_or_init(|| Regex::new(r"^[6-9]\d{9}$").expect("Invalid mobile number regex"))
}

fn digits_only(value: &str) -> String {
    value.chars().filter(|ch| ch.is_ascii_digit()).collect()
}

/// Extract the bare ten-digit domestic number, if the input has an accepted shape.
fn domestic_number(value: &str) -> Option<String> {
    let cleaned = digits_only(value);

    match cleaned.len() {
        10 if domestic_mobile_regex().is_match(&cleaned) => Some(cleaned),
        // Covers both `91XXXXXXXXXX` and `+91XXXXXXXXXX`; the `+` is not a digit.
        12 if cleaned.starts_with(COUNTRY_CODE) || value.trim_start().starts_with("+91") => {
            let local = &cleaned[2..];
            domestic_mobile_regex()
                .is_match(local)
                .then(|| local.to_string())
        }
        _ => None,
    }
}

/// Whether `value` looks like `local@domain.tld`. No deliverability check.
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value.trim())
}

/// Whether `value` is a domestic mobile number, optionally with country code.
pub fn is_valid_phone(value: &str) -> bool {
    domestic_number(value).is_some()
}

/// Reduce an accepted phone number to its ten domestic digits.
///
/// Input that does not match an accepted shape is returned unchanged.
pub fn normalize_phone(value: &str) -> String {
    domestic_number(value).unwrap_or_else(|| value.to_string())
}

/// Render an accepted phone number as `+91 XXXXX XXXXX`.
///
/// Input that does not match an accepted shape is returned unchanged.
pub fn format_phone_number(value: &str) -> String {
    match domestic_number(value) {
        Some(local) => format!("+{} {} {}", COUNTRY_CODE, &local[..5], &local[5..]),
        None => value.to_string(),
    }
}
