//! String rules

/// URL validation (basic)
///
/// Requires an http or https scheme followed by a host containing a dot.
pub fn is_valid_url(url: &str) -> bool {
    let rest = match url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    {
        Some(rest) => rest,
        None => return false,
    };

    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    !host.is_empty() && host.contains('.') && !host.chars().any(char::is_whitespace)
}

/// Checks a character count against inclusive bounds
pub fn length_between(len: usize, min: usize, max: usize) -> bool {
    len >= min && len <= max
}

/// Whether `value` is one of the allowed variants
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://test.co.uk"));
        assert!(is_valid_url("https://example.com/path?q=1"));

        assert!(!is_valid_url(""));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("http://nodomain"));
        assert!(!is_valid_url("http://exa mple.com"));
    }

    #[test]
    fn test_length_between() {
        assert!(length_between(5, 3, 10));
        assert!(length_between(3, 3, 10));
        assert!(!length_between(2, 3, 10));
        assert!(!length_between(11, 3, 10));
    }

    #[test]
    fn test_enum_variant() {
        let allowed = ["admin", "user", "guest"];
        assert!(is_one_of("admin", &allowed));
        assert!(!is_one_of("superuser", &allowed));
    }
}
