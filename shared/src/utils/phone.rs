//! Phone number utilities
//!
//! Numbers are never validated here; the provider owns that. These helpers
//! only keep full numbers out of logs.

use once_cell::sync::Lazy;
use regex::Regex;

// Anything that is not a dial character
static NON_DIAL_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^0-9+]").expect("static regex is valid")
});

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    NON_DIAL_CHARS.replace_all(phone, "").into_owned()
}

/// Mask a phone number for display (e.g., +23****0000)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
