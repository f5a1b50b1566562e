//! Field Validators
//!
//! One predicate per field kind. Every validator accepts any string and
//! answers with a plain verdict; malformed input is simply invalid.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static EXPIRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[1-9]|1[0-2])/([0-9]{2})$").expect("valid expiry pattern"));

/// Phone numbers carry a 2-digit area code and an 8 (landline) or
/// 9 (mobile) digit subscriber number.
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=11;

const CARD_DIGITS: std::ops::RangeInclusive<usize> = 13..=19;

const CVV_DIGITS: std::ops::RangeInclusive<usize> = 3..=4;

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// `local@domain.tld`, no whitespace or extra `@` in any part
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Any punctuation is ignored; only the digit count matters
pub fn validate_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    PHONE_DIGITS.contains(&digits)
}

/// Length check only, no Luhn checksum
pub fn validate_card(number: &str) -> bool {
    let compact: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    is_digits(&compact) && CARD_DIGITS.contains(&compact.len())
}

/// `MM/YY` that has not yet started its month, judged against the local date
pub fn validate_expiry(expiry: &str) -> bool {
    validate_expiry_at(expiry, Local::now().date_naive())
}

/// `MM/YY` whose first day (year 20YY) falls strictly after `today`
///
/// The current month is already expired.
pub fn validate_expiry_at(expiry: &str, today: NaiveDate) -> bool {
    let Some(caps) = EXPIRY_RE.captures(expiry) else {
        return false;
    };

    let month = caps[1].parse::<u32>().ok();
    let year = caps[2].parse::<i32>().ok().map(|yy| 2000 + yy);

    month
        .zip(year)
        .and_then(|(month, year)| NaiveDate::from_ymd_opt(year, month, 1))
        .is_some_and(|first_day| first_day > today)
}

pub fn validate_cvv(cvv: &str) -> bool {
    is_digits(cvv) && CVV_DIGITS.contains(&cvv.len())
}

/// Required free-text field
pub fn validate_generic(value: &str) -> bool {
    !value.trim().is_empty()
}
