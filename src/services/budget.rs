//! Budget service
//!
//! Saves and reads the user-declared income and savings figures.

use crate::config::settings::Settings;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{BudgetProfile, Money};
use crate::storage::Storage;

use super::entry::check_amount_limit;

/// Service for budget profile management
pub struct BudgetService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Parse and save income and savings, replacing any earlier profile
    ///
    /// Both figures are required. Savings may be zero or negative.
    pub fn save(&self, income: &str, savings: &str) -> SpendwiseResult<BudgetProfile> {
        if income.trim().is_empty() || savings.trim().is_empty() {
            return Err(SpendwiseError::Validation(
                "Income and Savings are required fields".into(),
            ));
        }

        let parse = |value: &str, field: &str| {
            Money::parse_with_symbol(value, &self.settings.currency_symbol).map_err(|_| {
                SpendwiseError::Validation(format!(
                    "Please enter a valid number for {} (got '{}')",
                    field,
                    value.trim()
                ))
            })
        };

        let income = parse(income, "Income")?;
        let savings = parse(savings, "Savings")?;

        check_amount_limit(income)?;
        check_amount_limit(savings)?;

        if income.is_negative() {
            return Err(SpendwiseError::Validation("Income cannot be negative".into()));
        }

        let profile = BudgetProfile::new(income, savings);
        self.storage.budget.save(&profile)?;

        tracing::info!(
            income = %profile.income.to_decimal_string(),
            savings = %profile.savings.to_decimal_string(),
            "saved budget profile"
        );

        Ok(profile)
    }

    /// The saved profile, if any
    pub fn get(&self) -> SpendwiseResult<Option<BudgetProfile>> {
        self.storage.budget.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendwisePaths;
    use tempfile::TempDir;

    fn create_test_storage(settings: &Settings) -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendwisePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, settings).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_save_and_get() {
        let settings = Settings::default();
        let (_temp_dir, storage) = create_test_storage(&settings);
        let service = BudgetService::new(&storage, &settings);

        assert!(service.get().unwrap().is_none());

        let saved = service.save("10000", "2500.50").unwrap();
        assert_eq!(saved.income, Money::from_units(10_000));
        assert_eq!(saved.savings, Money::from_cents(250_050));
        assert_eq!(service.get().unwrap(), Some(saved));
    }

    #[test]
    fn test_save_overwrites_previous_profile() {
        let settings = Settings::default();
        let (_temp_dir, storage) = create_test_storage(&settings);
        let service = BudgetService::new(&storage, &settings);

        service.save("10000", "2500").unwrap();
        service.save("8000", "0").unwrap();

        let profile = service.get().unwrap().unwrap();
        assert_eq!(profile.income, Money::from_units(8000));
        assert!(profile.savings.is_zero());
    }

    #[test]
    fn test_both_fields_required() {
        let settings = Settings::default();
        let (_temp_dir, storage) = create_test_storage(&settings);
        let service = BudgetService::new(&storage, &settings);

        let err = service.save("10000", "  ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Income and Savings are required fields"
        );
        assert!(service.get().unwrap().is_none());
    }

    #[test]
    fn test_invalid_numbers_rejected() {
        let settings = Settings::default();
        let (_temp_dir, storage) = create_test_storage(&settings);
        let service = BudgetService::new(&storage, &settings);

        assert!(service.save("lots", "0").unwrap_err().is_validation());
        assert!(service.save("-1", "0").unwrap_err().is_validation());
        assert!(service.save("90000000000000000", "0").unwrap_err().is_validation());
        assert!(service.save("10000", "-90000000000000000").unwrap_err().is_validation());
        assert!(service.get().unwrap().is_none());
    }
}
