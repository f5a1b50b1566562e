//! Input Masks
//!
//! Reformat raw keystrokes into display form. Masks never validate and never
//! truncate; every mask first reduces its input to ASCII digits, so masking
//! already-masked text gives the same result.

use once_cell::sync::Lazy;
use regex::Regex;

static LANDLINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{2})([0-9]{4})([0-9]{0,4})").expect("valid landline pattern"));

static MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{2})([0-9]{5})([0-9]{0,4})").expect("valid mobile pattern"));

const PHONE_TEMPLATE: &str = "(${1}) ${2}-${3}";

/// Keep only ASCII digits
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// `(AA) BBBB-CCCC` up to 10 digits, `(AA) BBBBB-CCCC` from 11
///
/// Fewer digits than the area code plus the middle group are returned bare.
/// Digits past the pattern are kept after it.
pub fn mask_phone(raw: &str) -> String {
    let digits = digits_only(raw);
    let re = if digits.len() <= 10 {
        &*LANDLINE_RE
    } else {
        &*MOBILE_RE
    };
    re.replacen(&digits, 1, PHONE_TEMPLATE).into_owned()
}

/// Groups of four digits separated by single spaces
pub fn mask_card(raw: &str) -> String {
    let digits = digits_only(raw);
    let mut masked = String::with_capacity(digits.len() + digits.len() / 4);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            masked.push(' ');
        }
        masked.push(c);
    }

    masked
}

/// `MM/` followed by every remaining digit
pub fn mask_expiry(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() <= 2 {
        return digits;
    }
    let (month, rest) = digits.split_at(2);
    format!("{month}/{rest}")
}

pub fn mask_cvv(raw: &str) -> String {
    digits_only(raw)
}
