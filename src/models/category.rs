//! Category set model
//!
//! Expense entries are labelled with one of a configured set of categories.
//! Income entries always carry the reserved [`INCOME_LABEL`].

use serde::{Deserialize, Serialize};

/// Reserved category label for income entries
pub const INCOME_LABEL: &str = "Income";

/// Default expense categories
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Utilities",
    "Medical",
    "Entertainment",
    "Other",
];

/// Validation errors for category sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    Empty,
    BlankName,
    ReservedName,
    Duplicate(String),
}

impl std::fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "At least one expense category is required"),
            Self::BlankName => write!(f, "Category names cannot be empty"),
            Self::ReservedName => {
                write!(f, "'{}' is reserved and cannot be an expense category", INCOME_LABEL)
            }
            Self::Duplicate(name) => write!(f, "Duplicate category: {}", name),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

/// An ordered set of expense category labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet(Vec<String>);

impl CategorySet {
    /// Build a category set from labels, validating it
    pub fn new<I, S>(names: I) -> Result<Self, CategoryValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = Self(names.into_iter().map(|n| n.into().trim().to_string()).collect());
        set.validate()?;
        Ok(set)
    }

    /// Validate the set: non-empty, no blanks, no duplicates, no reserved label
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.0.is_empty() {
            return Err(CategoryValidationError::Empty);
        }

        for (i, name) in self.0.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(CategoryValidationError::BlankName);
            }
            if is_income_label(name) {
                return Err(CategoryValidationError::ReservedName);
            }
            if self.0[..i].iter().any(|other| other.eq_ignore_ascii_case(name)) {
                return Err(CategoryValidationError::Duplicate(name.clone()));
            }
        }

        Ok(())
    }

    /// Find the canonical spelling of a category (case-insensitive)
    pub fn resolve(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        self.0
            .iter()
            .find(|c| c.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    /// Check membership (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Iterate over the labels in configured order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self(DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect())
    }
}

/// Check whether a label is the reserved income label
pub fn is_income_label(name: &str) -> bool {
    name.trim().eq_ignore_ascii_case(INCOME_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let set = CategorySet::default();
        assert_eq!(set.len(), 6);
        assert!(set.validate().is_ok());
        assert!(set.contains("Food"));
        assert!(!set.contains("Income"));
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let set = CategorySet::default();
        assert_eq!(set.resolve("food"), Some("Food"));
        assert_eq!(set.resolve("  ENTERTAINMENT "), Some("Entertainment"));
        assert_eq!(set.resolve("Yachts"), None);
    }

    #[test]
    fn test_custom_set() {
        let set = CategorySet::new(["Rent", "Books"]).unwrap();
        let names: Vec<_> = set.iter().collect();
        assert_eq!(names, vec!["Rent", "Books"]);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            CategorySet::new(Vec::<String>::new()),
            Err(CategoryValidationError::Empty)
        );
        assert_eq!(
            CategorySet::new(["Food", " "]),
            Err(CategoryValidationError::BlankName)
        );
        assert_eq!(
            CategorySet::new(["Food", "income"]),
            Err(CategoryValidationError::ReservedName)
        );
        assert_eq!(
            CategorySet::new(["Food", "food"]),
            Err(CategoryValidationError::Duplicate("food".into()))
        );
    }

    #[test]
    fn test_serde_transparent() {
        let set = CategorySet::new(["Rent", "Books"]).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["Rent","Books"]"#);
        let back: CategorySet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
