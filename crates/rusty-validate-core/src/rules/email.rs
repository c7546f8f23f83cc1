//! Email rules

/// Free mail providers rejected by `no_public_domains`
pub const PUBLIC_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "aol.com",
    "mail.com",
    "protonmail.com",
    "yandex.com",
    "zoho.com",
];

/// Validates basic email format
///
/// Checks for:
/// - Exactly one '@' with content on both sides
/// - At least one '.' in the domain, not at either end
/// - A top-level domain of two or more characters
pub fn is_valid_email(email: &str) -> bool {
    if email.len() < 3 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if domain.contains('@') {
        return false;
    }

    if local.is_empty() || local.len() > 64 {
        return false;
    }

    if domain.is_empty() || domain.len() > 255 || !domain.contains('.') {
        return false;
    }

    if domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
        || domain.contains("..")
    {
        return false;
    }

    let valid_local = |c: char| c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | '+');
    if !local.chars().all(valid_local) {
        return false;
    }

    let valid_domain = |c: char| c.is_alphanumeric() || matches!(c, '.' | '-');
    if !domain.chars().all(valid_domain) {
        return false;
    }

    match domain.rfind('.') {
        Some(pos) => domain[pos + 1..].len() >= 2,
        None => false,
    }
}

/// Domain part of an address, empty when there is no '@'
fn extract_domain(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or("")
}

/// Checks if email domain is a public domain (gmail, yahoo, etc.)
pub fn is_public_domain(email: &str) -> bool {
    let domain = extract_domain(email);
    PUBLIC_DOMAINS.iter().any(|d| d.eq_ignore_ascii_case(domain))
}

/// Checks if email domain is in the blocked list
pub fn is_blocked_domain(email: &str, blocked: &[&str]) -> bool {
    let domain = extract_domain(email);
    blocked.iter().any(|d| d.eq_ignore_ascii_case(domain))
}
