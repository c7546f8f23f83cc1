//! Collection rules

use std::collections::HashSet;
use std::hash::Hash;

/// Validates all items in a collection are unique
pub fn all_unique<'a, I, T>(items: I) -> bool
where
    I: IntoIterator<Item = &'a T>,
    T: Hash + Eq + 'a + ?Sized,
{
    let mut seen = HashSet::new();
    items.into_iter().all(|item| seen.insert(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique() {
        assert!(all_unique(&vec![1, 2, 3, 4]));
        assert!(!all_unique(&vec![1, 2, 3, 2]));
        assert!(all_unique(&Vec::<i32>::new()));
    }

    #[test]
    fn test_unique_strings() {
        let unique = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert!(all_unique(&unique));

        let duplicates = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        assert!(!all_unique(&duplicates));
    }
}
