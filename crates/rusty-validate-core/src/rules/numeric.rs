//! Numeric rules

use std::cmp::Ordering;

use crate::value::Numeric;

pub fn at_least(value: Numeric, min: Numeric) -> bool {
    matches!(value.compare(min), Some(Ordering::Greater | Ordering::Equal))
}

pub fn at_most(value: Numeric, max: Numeric) -> bool {
    matches!(value.compare(max), Some(Ordering::Less | Ordering::Equal))
}

/// Inclusive range check
pub fn between(value: Numeric, min: Numeric, max: Numeric) -> bool {
    at_least(value, min) && at_most(value, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Numeric::{Float, Int};

    #[test]
    fn test_min_validation() {
        assert!(at_least(Int(10), Int(5)));
        assert!(at_least(Int(5), Int(5)));
        assert!(!at_least(Int(3), Int(5)));
        assert!(!at_least(Float(17.9), Int(18)));
    }

    #[test]
    fn test_max_validation() {
        assert!(at_most(Int(5), Int(10)));
        assert!(at_most(Int(10), Int(10)));
        assert!(!at_most(Float(100.1), Int(100)));
        assert!(!at_most(Int(i64::MAX as i128), Int(i64::MAX as i128 - 1)));
    }

    #[test]
    fn test_range_validation() {
        assert!(between(Int(5), Int(1), Int(10)));
        assert!(between(Int(1), Int(1), Int(10)));
        assert!(between(Int(10), Int(1), Int(10)));
        assert!(!between(Int(0), Int(1), Int(10)));
        assert!(!between(Int(200), Int(0), Int(130)));
        assert!(between(Float(0.5), Float(0.0), Float(1.0)));
    }

    #[test]
    fn test_nan_never_in_range() {
        assert!(!between(Float(f64::NAN), Int(0), Int(1)));
        assert!(!at_least(Float(f64::NAN), Int(0)));
    }
}
