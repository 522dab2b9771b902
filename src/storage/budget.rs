//! Budget profile repository for CSV storage
//!
//! The profile is a two-row `Label,Amount` table (`Income`, `Savings`),
//! overwritten as a whole on every save.

use std::path::{Path, PathBuf};

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{BudgetProfile, Money};

use super::file_io::{open_if_exists, write_atomic};

const INCOME_ROW: &str = "Income";
const SAVINGS_ROW: &str = "Savings";

/// Repository for the budget profile
pub struct BudgetRepository {
    path: PathBuf,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved profile; `None` if nothing has been saved yet
    ///
    /// A missing `Savings` row reads as zero savings.
    pub fn load(&self) -> SpendwiseResult<Option<BudgetProfile>> {
        let Some(file) = open_if_exists(&self.path)? else {
            return Ok(None);
        };

        let store_error = |msg: String| {
            SpendwiseError::StoreUnavailable(format!("{}: {}", self.path.display(), msg))
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut income = None;
        let mut savings = None;

        for result in reader.records() {
            let record = result.map_err(|e| store_error(e.to_string()))?;
            let label = record.get(0).unwrap_or("").trim();
            let value = record.get(1).unwrap_or("").trim();

            let slot = if label.eq_ignore_ascii_case(INCOME_ROW) {
                &mut income
            } else if label.eq_ignore_ascii_case(SAVINGS_ROW) {
                &mut savings
            } else {
                continue;
            };

            let amount = Money::parse_with_symbol(value, "")
                .map_err(|e| store_error(format!("{} row: {}", label, e)))?;
            *slot = Some(amount);
        }

        let income = income.ok_or_else(|| store_error("missing Income row".to_string()))?;
        let profile = BudgetProfile::new(income, savings.unwrap_or_default());

        tracing::debug!(path = %self.path.display(), "loaded budget profile");
        Ok(Some(profile))
    }

    /// Overwrite the saved profile
    pub fn save(&self, profile: &BudgetProfile) -> SpendwiseResult<()> {
        write_atomic(&self.path, |out| {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(["Label", "Amount"])?;
            writer.write_record([INCOME_ROW, profile.income.to_decimal_string().as_str()])?;
            writer.write_record([SAVINGS_ROW, profile.savings.to_decimal_string().as_str()])?;
            writer.flush().map_err(|e| {
                SpendwiseError::StoreUnavailable(format!("Failed to write budget profile: {}", e))
            })
        })?;

        tracing::debug!(path = %self.path.display(), "saved budget profile");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn repo(temp_dir: &TempDir) -> BudgetRepository {
        BudgetRepository::new(temp_dir.path().join("budget_data.csv"))
    }

    #[test]
    fn test_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        assert!(repo(&temp_dir).load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);
        let profile = BudgetProfile::new(Money::from_units(10_000), Money::from_cents(250_050));

        repo.save(&profile).unwrap();

        assert_eq!(repo.load().unwrap(), Some(profile));
        let contents = fs::read_to_string(repo.path()).unwrap();
        assert_eq!(contents, "Label,Amount\nIncome,10000.00\nSavings,2500.50\n");
    }

    #[test]
    fn test_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);

        repo.save(&BudgetProfile::new(Money::from_units(1), Money::from_units(2)))
            .unwrap();
        repo.save(&BudgetProfile::new(Money::from_units(3), Money::zero()))
            .unwrap();

        let loaded = repo.load().unwrap().unwrap();
        assert_eq!(loaded.income, Money::from_units(3));
        assert_eq!(loaded.savings, Money::zero());
    }

    #[test]
    fn test_missing_savings_row_is_zero() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);
        fs::write(repo.path(), ",Amount\nIncome,5000\n").unwrap();

        let loaded = repo.load().unwrap().unwrap();
        assert_eq!(loaded.income, Money::from_units(5000));
        assert!(loaded.savings.is_zero());
    }

    #[test]
    fn test_missing_income_row_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);
        fs::write(repo.path(), "Label,Amount\nSavings,5000\n").unwrap();

        assert!(repo.load().unwrap_err().is_store_unavailable());
    }

    #[test]
    fn test_unreadable_budget_file_is_store_error() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);
        fs::write(repo.path(), b"Label,Amount\nIncome,\xff\xfe\n").unwrap();

        assert!(repo.load().unwrap_err().is_store_unavailable());
    }
}
