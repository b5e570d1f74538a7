//! Label-based exclusion classification
//!
//! POS exports interleave payment tenders ("Visa", "Barzahlung"), category
//! headers ("Getränke") and subtotal rows ("Gesamt Umsatz") with genuine
//! menu items in the same table. The classifier decides per label whether
//! a row is a sellable item or noise, using an externally configured
//! vocabulary of label fragments.

use tracing::debug;

/// Compiled exclusion rule set
///
/// Fragments are lowercased once at construction; membership testing is
/// case-insensitive exact-or-substring and short-circuits on the first hit.
/// The classifier holds no other state and the rule order does not affect
/// the result.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    fragments: Vec<String>,
}

impl ExclusionRules {
    /// Build a rule set from configured label fragments
    ///
    /// Blank fragments are dropped; they would otherwise match every label.
    pub fn from_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fragments: Vec<String> = fragments
            .into_iter()
            .map(|f| f.as_ref().trim().to_lowercase())
            .filter(|f| !f.is_empty())
            .collect();

        debug!("Compiled {} exclusion rule fragments", fragments.len());
        Self { fragments }
    }

    /// Decide whether a label denotes a non-item row
    ///
    /// A label is excluded when it equals or contains any rule fragment,
    /// case-insensitively.
    pub fn is_excluded(&self, label: &str) -> bool {
        let lowered = label.trim().to_lowercase();
        self.fragments
            .iter()
            .any(|fragment| lowered == *fragment || lowered.contains(fragment.as_str()))
    }

    /// Number of compiled rule fragments
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_EXCLUDED_LABELS;

    fn default_rules() -> ExclusionRules {
        ExclusionRules::from_fragments(DEFAULT_EXCLUDED_LABELS.iter().copied())
    }

    #[test]
    fn test_payment_tenders_excluded() {
        let rules = default_rules();
        assert!(rules.is_excluded("Visa"));
        assert!(rules.is_excluded("Mastercard"));
        assert!(rules.is_excluded("BARZAHLUNG"));
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        let rules = ExclusionRules::from_fragments(["bar"]);
        assert!(rules.is_excluded("BARZAHLUNG"));
        assert!(rules.is_excluded("Bar"));
        assert!(rules.is_excluded("  bar  "));
    }

    #[test]
    fn test_category_and_subtotal_rows_excluded() {
        let rules = default_rules();
        assert!(rules.is_excluded("Getränke"));
        assert!(rules.is_excluded("Gesamt Umsatz"));
        assert!(rules.is_excluded("Total"));
    }

    #[test]
    fn test_menu_items_not_excluded() {
        let rules = default_rules();
        assert!(!rules.is_excluded("Latte Macchiato"));
        assert!(!rules.is_excluded("Espresso"));
        assert!(!rules.is_excluded("Croissant"));
    }

    #[test]
    fn test_blank_fragments_dropped() {
        let rules = ExclusionRules::from_fragments(["", "  ", "visa"]);
        assert_eq!(rules.len(), 1);
        assert!(!rules.is_excluded("Latte"));
        assert!(rules.is_excluded("Visa"));
    }

    #[test]
    fn test_empty_rule_set_excludes_nothing() {
        let rules = ExclusionRules::from_fragments(Vec::<String>::new());
        assert!(rules.is_empty());
        assert!(!rules.is_excluded("Visa"));
    }
}
