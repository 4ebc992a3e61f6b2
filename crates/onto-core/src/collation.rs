//! Label ordering
//!
//! Labels compare case-insensitively first, so "alpha", "Beta" and "gamma"
//! sort in that order. Labels equal under case folding fall back to a
//! lowercase-first tie break, then to plain code point order.

use std::cmp::Ordering;

/// Compare two labels for display order
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    folded(a)
        .cmp(folded(b))
        .then_with(|| case_pattern(a).cmp(case_pattern(b)))
        .then_with(|| a.cmp(b))
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn case_pattern(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(labels: &[&str]) -> Vec<String> {
        let mut labels: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        labels.sort_by(|a, b| compare_labels(a, b));
        labels
    }

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(sorted(&["gamma", "Beta", "alpha"]), vec!["alpha", "Beta", "gamma"]);
    }

    #[test]
    fn test_lowercase_first_on_ties() {
        assert_eq!(sorted(&["Apple", "apple"]), vec!["apple", "Apple"]);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare_labels("cell", "cell cycle"), Ordering::Less);
        assert_eq!(compare_labels("Cell", "cell cycle"), Ordering::Less);
    }

    #[test]
    fn test_identical_labels_are_equal() {
        assert_eq!(compare_labels("Bravo", "Bravo"), Ordering::Equal);
    }
}
