//! Entry service
//!
//! Turns raw user input into validated entries and appends them to the
//! ledger. Nothing reaches the store until the input has been fully
//! validated.

use chrono::{Local, NaiveDate};

use crate::config::settings::Settings;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{is_income_label, Entry, Ledger, Money};
use crate::storage::Storage;

/// Raw input for a new entry, as collected by a front end
#[derive(Debug, Clone, Default)]
pub struct NewEntryInput {
    /// Entry date; defaults to today
    pub date: Option<NaiveDate>,
    /// Expense category (ignored for income)
    pub category: String,
    /// Amount as typed by the user, always a positive magnitude
    pub amount: String,
    pub is_income: bool,
    pub description: Option<String>,
}

impl NewEntryInput {
    /// Input for an income entry
    pub fn income(amount: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            is_income: true,
            ..Self::default()
        }
    }

    /// Input for an expense entry
    pub fn expense(category: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount: amount.into(),
            ..Self::default()
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Largest amount accepted for a single entry or budget figure
pub const MAX_AMOUNT: Money = Money::from_units(1_000_000_000);

/// Parse a user-entered amount into a positive magnitude
pub fn parse_amount(input: &str, currency_symbol: &str) -> SpendwiseResult<Money> {
    let amount = Money::parse_with_symbol(input, currency_symbol)
        .map_err(|_| SpendwiseError::invalid_amount(input.trim()))?;

    if !amount.is_positive() {
        return Err(SpendwiseError::Validation(format!(
            "Amount must be greater than zero, got {}",
            input.trim()
        )));
    }

    check_amount_limit(amount)?;

    Ok(amount)
}

/// Reject amounts whose magnitude is above [`MAX_AMOUNT`]
pub fn check_amount_limit(amount: Money) -> SpendwiseResult<()> {
    if amount.abs() > MAX_AMOUNT {
        return Err(SpendwiseError::Validation(format!(
            "Amount cannot exceed {}",
            MAX_AMOUNT.to_decimal_string()
        )));
    }
    Ok(())
}

/// Service for recording entries
pub struct EntryService<'a> {
    storage: &'a mut Storage,
    settings: &'a Settings,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Validate input and build an entry without touching the store
    pub fn build_entry(&self, input: &NewEntryInput) -> SpendwiseResult<Entry> {
        let magnitude = parse_amount(&input.amount, &self.settings.currency_symbol)?;
        let date = input.date.unwrap_or_else(|| Local::now().date_naive());

        let entry = if input.is_income {
            Entry::income(date, magnitude)
        } else {
            let requested = input.category.trim();
            if requested.is_empty() {
                return Err(SpendwiseError::Validation(
                    "A category is required for expenses".into(),
                ));
            }
            if is_income_label(requested) {
                return Err(SpendwiseError::Validation(
                    "Use the income command to record income".into(),
                ));
            }

            let category = self
                .settings
                .categories
                .resolve(requested)
                .ok_or_else(|| SpendwiseError::unknown_category(requested))?;
            Entry::expense(date, category, magnitude)
        };

        Ok(match &input.description {
            Some(description) => entry.with_description(description.as_str()),
            None => entry,
        })
    }

    /// Validate, append and persist a new entry
    ///
    /// Returns the entry and the ledger snapshot that now contains it. On any
    /// error the ledger is unchanged.
    pub fn add(&mut self, input: NewEntryInput) -> SpendwiseResult<(Entry, Ledger)> {
        let entry = self.build_entry(&input)?;
        let ledger = self.storage.ledger.append(entry.clone())?;

        tracing::info!(
            kind = %entry.kind(),
            category = entry.category(),
            amount = %entry.net().to_decimal_string(),
            entries = ledger.len(),
            "recorded entry"
        );

        Ok((entry, ledger))
    }

    /// Record income
    pub fn add_income(&mut self, amount: &str) -> SpendwiseResult<(Entry, Ledger)> {
        self.add(NewEntryInput::income(amount))
    }

    /// Record an expense
    pub fn add_expense(&mut self, category: &str, amount: &str) -> SpendwiseResult<(Entry, Ledger)> {
        self.add(NewEntryInput::expense(category, amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendwisePaths;
    use crate::models::CategorySet;
    use crate::storage::read_ledger;
    use tempfile::TempDir;

    fn create_test_storage(settings: &Settings) -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendwisePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths, settings).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_add_income_and_expense() {
        let settings = Settings::default();
        let (_temp_dir, mut storage) = create_test_storage(&settings);
        let mut service = EntryService::new(&mut storage, &settings);

        let (income, _) = service.add(NewEntryInput::income("5000").on(day())).unwrap();
        let (expense, ledger) = service
            .add(NewEntryInput::expense("food", "200").on(day()).described("market"))
            .unwrap();

        assert!(income.is_income());
        assert_eq!(income.income_amount(), Money::from_units(5000));
        assert_eq!(expense.category(), "Food");
        assert_eq!(expense.amount(), Money::from_units(-200));
        assert_eq!(expense.description(), "market");
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_add_persists_to_disk() {
        let settings = Settings::default();
        let (_temp_dir, mut storage) = create_test_storage(&settings);
        let path = storage.ledger.path().to_path_buf();

        let (_, ledger) = EntryService::new(&mut storage, &settings)
            .add_expense("Transport", "12.50")
            .unwrap();

        assert_eq!(read_ledger(&path).unwrap(), ledger);
    }

    #[test]
    fn test_non_numeric_amount_is_rejected_without_persisting() {
        let settings = Settings::default();
        let (_temp_dir, mut storage) = create_test_storage(&settings);
        let path = storage.ledger.path().to_path_buf();

        let err = EntryService::new(&mut storage, &settings)
            .add_expense("Food", "abc")
            .unwrap_err();

        assert!(err.is_validation());
        assert!(storage.ledger.snapshot().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_rejection_leaves_existing_ledger_unchanged() {
        let settings = Settings::default();
        let (_temp_dir, mut storage) = create_test_storage(&settings);
        let mut service = EntryService::new(&mut storage, &settings);
        service.add_income("100").unwrap();

        assert!(service.add_income("").is_err());
        assert!(service.add_expense("Food", "-5").is_err());
        assert!(service.add_expense("Food", "0").is_err());

        assert_eq!(storage.ledger.snapshot().len(), 1);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let settings = Settings::default();
        let (_temp_dir, mut storage) = create_test_storage(&settings);
        let mut service = EntryService::new(&mut storage, &settings);

        let err = service.add_expense("Yachts", "10").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Unknown category: Yachts");

        let err = service.add_expense("Income", "10").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_configured_categories_are_used() {
        let mut settings = Settings::default();
        settings.categories = CategorySet::new(["Rent"]).unwrap();
        let (_temp_dir, mut storage) = create_test_storage(&settings);
        let mut service = EntryService::new(&mut storage, &settings);

        assert!(service.add_expense("rent", "900").is_ok());
        assert!(service.add_expense("Food", "9").is_err());
    }

    #[test]
    fn test_currency_symbol_accepted() {
        let mut settings = Settings::default();
        settings.currency_symbol = "₹".to_string();
        let (_temp_dir, mut storage) = create_test_storage(&settings);

        let (entry, _) = EntryService::new(&mut storage, &settings)
            .add_income("₹250")
            .unwrap();
        assert_eq!(entry.income_amount(), Money::from_units(250));
    }

    #[test]
    fn test_default_date_is_today() {
        let settings = Settings::default();
        let (_temp_dir, mut storage) = create_test_storage(&settings);

        let (entry, _) = EntryService::new(&mut storage, &settings)
            .add_income("1")
            .unwrap();
        assert_eq!(entry.date(), Local::now().date_naive());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 10.5 ", "$").unwrap(), Money::from_cents(1050));
        assert!(parse_amount("abc", "$").unwrap_err().is_validation());
        assert!(parse_amount("-1", "$").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_amount_caps_magnitude() {
        assert_eq!(parse_amount("1000000000", "$").unwrap(), MAX_AMOUNT);

        let err = parse_amount("1000000000.01", "$").unwrap_err();
        assert!(err.is_validation());
        assert!(parse_amount("90000000000000000", "$").unwrap_err().is_validation());
    }

    #[test]
    fn test_oversized_amount_never_reaches_the_ledger() {
        let settings = Settings::default();
        let (_temp_dir, mut storage) = create_test_storage(&settings);
        let mut service = EntryService::new(&mut storage, &settings);

        service.add_expense("Food", "1000000000").unwrap();
        service.add_expense("Food", "1000000000").unwrap();
        assert!(service.add_expense("Food", "90000000000000000").is_err());

        let summary = crate::reports::summarize(storage.ledger.snapshot()).unwrap();
        assert_eq!(summary.total_expenses(), Money::from_units(2_000_000_000));
    }
}
