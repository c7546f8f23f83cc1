//! Regex rule with a process-wide compiled pattern cache

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use regex::Regex;

static PATTERNS: Lazy<Mutex<HashMap<String, Regex>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// Compile `pattern`, reusing an earlier compilation when there is one.
///
/// Returns the regex compiler's message for malformed patterns.
pub fn compiled(pattern: &str) -> Result<Regex, String> {
    let mut cache = PATTERNS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(regex) = cache.get(pattern) {
        return Ok(regex.clone());
    }

    let regex = Regex::new(pattern).map_err(|e| e.to_string())?;
    cache.insert(pattern.to_string(), regex.clone());
    Ok(regex)
}

/// Check if string matches regex pattern
pub fn matches(value: &str, pattern: &str) -> Result<bool, String> {
    Ok(compiled(pattern)?.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        assert_eq!(matches("abc", "^[a-z]+$"), Ok(true));
        assert_eq!(matches("ab1", "^[a-z]+$"), Ok(false));
    }

    #[test]
    fn test_cached_pattern_is_reused() {
        let first = compiled(r"^\d{3}$").unwrap();
        let second = compiled(r"^\d{3}$").unwrap();
        assert_eq!(first.as_str(), second.as_str());
        assert!(second.is_match("123"));
    }

    #[test]
    fn test_malformed_pattern() {
        let err = matches("abc", "([a-z]+").unwrap_err();
        assert!(!err.is_empty());
    }
}
