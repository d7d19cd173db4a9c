use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex"));
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 ()\-]*[0-9]$").expect("phone pattern is a valid regex"));

/// A loose `local@domain.tld` check. Deliverability is not verified.
pub fn is_plausible_email(s: &str) -> bool {
    EMAIL.is_match(s.trim())
}

/// Digits, spaces, dashes and brackets, with an optional leading `+`, and at least six digits in total.
pub fn is_plausible_phone(s: &str) -> bool {
    let s = s.trim();
    PHONE.is_match(s) && s.chars().filter(char::is_ascii_digit).count() >= 6
}

/// True for absolute `http` or `https` URLs with a non-empty host.
pub fn is_web_url(s: &str) -> bool {
    let s = s.trim();
    let rest = s.strip_prefix("https://").or_else(|| s.strip_prefix("http://"));
    match rest {
        Some(rest) => {
            let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
            !host.is_empty() && !host.contains(char::is_whitespace)
        },
        None => false,
    }
}
