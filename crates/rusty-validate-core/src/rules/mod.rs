//! Built-in rules
//!
//! Each function answers "does this value pass?" for one rule attribute.
//! Absent values (`None`) pass everything except [`required`] and
//! [`depends_on`]. Rules that can be declared with a parameter the engine
//! cannot use return `Err` with the reason instead of a verdict.

pub mod collection;
pub mod email;
pub mod numeric;
pub mod password;
pub mod pattern;
pub mod string;

use crate::value::{HasValue, LenValue, Numeric, NumericValue, StrValue, UniqueValue};

pub fn required<V: HasValue + ?Sized>(value: &V) -> bool {
    value.has_value()
}

pub fn min<V: NumericValue + ?Sized>(value: &V, min: Numeric) -> bool {
    value.numeric_value().map_or(true, |v| numeric::at_least(v, min))
}

pub fn max<V: NumericValue + ?Sized>(value: &V, max: Numeric) -> bool {
    value.numeric_value().map_or(true, |v| numeric::at_most(v, max))
}

pub fn range<V: NumericValue + ?Sized>(value: &V, min: Numeric, max: Numeric) -> bool {
    value.numeric_value().map_or(true, |v| numeric::between(v, min, max))
}

pub fn min_length<V: LenValue + ?Sized>(value: &V, min: usize) -> bool {
    value.len_value().map_or(true, |len| len >= min)
}

pub fn max_length<V: LenValue + ?Sized>(value: &V, max: usize) -> bool {
    value.len_value().map_or(true, |len| len <= max)
}

pub fn length<V: LenValue + ?Sized>(value: &V, min: usize, max: usize) -> bool {
    value
        .len_value()
        .map_or(true, |len| string::length_between(len, min, max))
}

pub fn email<V: StrValue + ?Sized>(value: &V) -> bool {
    value.str_value().map_or(true, email::is_valid_email)
}

pub fn no_public_domains<V: StrValue + ?Sized>(value: &V) -> bool {
    value.str_value().map_or(true, |v| !email::is_public_domain(v))
}

pub fn blocked_domains<V: StrValue + ?Sized>(value: &V, blocked: &[&str]) -> bool {
    value
        .str_value()
        .map_or(true, |v| !email::is_blocked_domain(v, blocked))
}

pub fn url<V: StrValue + ?Sized>(value: &V) -> bool {
    value.str_value().map_or(true, string::is_valid_url)
}

pub fn regex<V: StrValue + ?Sized>(value: &V, pattern: &str) -> Result<bool, String> {
    match value.str_value() {
        Some(v) => pattern::matches(v, pattern),
        None => pattern::compiled(pattern).map(|_| true),
    }
}

pub fn contains<V: StrValue + ?Sized>(value: &V, needle: &str) -> bool {
    value.str_value().map_or(true, |v| v.contains(needle))
}

pub fn not_contains<V: StrValue + ?Sized>(value: &V, needle: &str) -> bool {
    value.str_value().map_or(true, |v| !v.contains(needle))
}

pub fn starts_with<V: StrValue + ?Sized>(value: &V, prefix: &str) -> bool {
    value.str_value().map_or(true, |v| v.starts_with(prefix))
}

pub fn ends_with<V: StrValue + ?Sized>(value: &V, suffix: &str) -> bool {
    value.str_value().map_or(true, |v| v.ends_with(suffix))
}

pub fn equals<V: StrValue + ?Sized>(value: &V, expected: &str) -> bool {
    value.str_value().map_or(true, |v| v == expected)
}

pub fn not_equals<V: StrValue + ?Sized>(value: &V, forbidden: &str) -> bool {
    value.str_value().map_or(true, |v| v != forbidden)
}

pub fn enum_variant<V: StrValue + ?Sized>(value: &V, allowed: &[&str]) -> bool {
    value.str_value().map_or(true, |v| string::is_one_of(v, allowed))
}

/// `value` must be present whenever `other` equals `expected`
pub fn depends_on<V, O>(value: &V, other: &O, expected: &str) -> bool
where
    V: HasValue + ?Sized,
    O: StrValue + ?Sized,
{
    other.str_value() != Some(expected) || value.has_value()
}

pub fn min_items<V: LenValue + ?Sized>(value: &V, min: usize) -> bool {
    min_length(value, min)
}

pub fn max_items<V: LenValue + ?Sized>(value: &V, max: usize) -> bool {
    max_length(value, max)
}

pub fn unique<V: UniqueValue + ?Sized>(value: &V) -> bool {
    value.unique_items().unwrap_or(true)
}

pub fn password<V: StrValue + ?Sized>(value: &V, tier: &str) -> Result<bool, String> {
    let tier = password::PasswordTier::parse(tier)?;
    Ok(value.str_value().map_or(true, |v| tier.accepts(v)))
}
