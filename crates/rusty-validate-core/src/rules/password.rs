//! Password strength rules

/// Password strength tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordTier {
    /// 6+ characters minimum
    Basic,
    /// 8+ chars with uppercase, lowercase, and digit
    Medium,
    /// 8+ chars with uppercase, lowercase, digit, and special character
    Strong,
}

impl PasswordTier {
    /// Parse a tier name; unknown names are a rule declaration error
    ///
    /// # Examples
    /// ```
    /// use rusty_validate_core::rules::password::PasswordTier;
    /// assert_eq!(PasswordTier::parse("strong"), Ok(PasswordTier::Strong));
    /// assert!(PasswordTier::parse("weak").is_err());
    /// ```
    pub fn parse(tier: &str) -> Result<Self, String> {
        match tier {
            "basic" => Ok(PasswordTier::Basic),
            "medium" => Ok(PasswordTier::Medium),
            "strong" => Ok(PasswordTier::Strong),
            other => Err(format!(
                "unknown password tier '{}', use 'basic', 'medium' or 'strong'",
                other
            )),
        }
    }

    pub fn accepts(self, password: &str) -> bool {
        let length = password.chars().count();
        let has_upper = password.chars().any(char::is_uppercase);
        let has_lower = password.chars().any(char::is_lowercase);
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special = password
            .chars()
            .any(|c| "!@#$%^&*()_+-=[]{}|;:,.<>?/~`".contains(c));

        match self {
            PasswordTier::Basic => length >= 6,
            PasswordTier::Medium => length >= 8 && has_upper && has_lower && has_digit,
            PasswordTier::Strong => {
                length >= 8 && has_upper && has_lower && has_digit && has_special
            }
        }
    }
}
