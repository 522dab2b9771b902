//! Ledger repository for CSV storage
//!
//! Loads and persists the ledger as a flat CSV file with the columns
//! `Date,Category,Amount,Income,Description`. Every append rewrites the
//! whole file.

use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{is_income_label, Entry, Ledger, Money};

use super::file_io::{open_if_exists, write_atomic};

/// Column order written to the ledger file
pub const LEDGER_COLUMNS: [&str; 5] = ["Date", "Category", "Amount", "Income", "Description"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One row of the ledger file
///
/// Fields are read as text so older files (no `Income` column, full
/// timestamps, positive expense amounts) can be normalized on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntryRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Amount", default)]
    amount: Option<String>,
    #[serde(rename = "Income", default)]
    income: Option<String>,
    #[serde(rename = "Description", default)]
    description: Option<String>,
}

impl From<&Entry> for EntryRecord {
    fn from(entry: &Entry) -> Self {
        Self {
            date: entry.date().format(DATE_FORMAT).to_string(),
            category: entry.category().to_string(),
            amount: Some(entry.amount().to_decimal_string()),
            income: Some(entry.income_amount().to_decimal_string()),
            description: Some(entry.description().to_string()),
        }
    }
}

impl EntryRecord {
    /// Convert to an entry, reporting whether the row needed normalizing
    fn into_entry(self) -> Result<(Entry, bool), String> {
        let date = parse_date(&self.date)?;
        let category = self.category.trim();
        if category.is_empty() {
            return Err("missing category".to_string());
        }

        let amount = parse_optional_money(self.amount.as_deref())?;
        let income = parse_optional_money(self.income.as_deref())?;

        let (entry, normalized) = if is_income_label(category) {
            // The Income column is authoritative; old files only filled Amount
            let received = if income.is_zero() { amount.abs() } else { income };
            (Entry::income(date, received), !amount.is_zero())
        } else {
            if self.amount.as_deref().map_or(true, |a| a.trim().is_empty()) {
                return Err("missing amount".to_string());
            }
            (
                Entry::expense(date, category, amount.abs()),
                amount.is_positive() || !income.is_zero(),
            )
        };

        let entry = match self.description {
            Some(d) if !d.trim().is_empty() => entry.with_description(d),
            _ => entry,
        };

        Ok((entry, normalized))
    }
}

fn parse_optional_money(value: Option<&str>) -> Result<Money, String> {
    match value.map(str::trim) {
        None | Some("") => Ok(Money::zero()),
        Some(v) => Money::parse_with_symbol(v, "").map_err(|e| e.to_string()),
    }
}

/// Parse a stored date, truncating timestamps to the day
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(date);
    }

    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| format!("invalid date '{}'", value))
}

/// Read a ledger from any CSV source
pub fn read_ledger_from<R: Read>(source: R) -> SpendwiseResult<Ledger> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(source);

    let mut entries = Vec::new();
    for (index, result) in reader.deserialize::<EntryRecord>().enumerate() {
        // Header is line 1
        let line = index + 2;
        let record = result.map_err(|e| {
            SpendwiseError::StoreUnavailable(format!("Malformed ledger row {}: {}", line, e))
        })?;

        let (entry, normalized) = record.into_entry().map_err(|e| {
            SpendwiseError::StoreUnavailable(format!("Malformed ledger row {}: {}", line, e))
        })?;

        if normalized {
            tracing::warn!(line, category = entry.category(), "normalized legacy ledger row");
        }
        entries.push(entry);
    }

    Ok(Ledger::from_entries(entries))
}

/// Read the ledger file; a missing file is an empty ledger
pub fn read_ledger<P: AsRef<Path>>(path: P) -> SpendwiseResult<Ledger> {
    let path = path.as_ref();
    match open_if_exists(path)? {
        Some(file) => read_ledger_from(file).map_err(|e| match e {
            SpendwiseError::StoreUnavailable(msg) => {
                SpendwiseError::StoreUnavailable(format!("{}: {}", path.display(), msg))
            }
            other => other,
        }),
        None => Ok(Ledger::new()),
    }
}

/// Overwrite the ledger file with a full snapshot
pub fn write_ledger<P: AsRef<Path>>(path: P, ledger: &Ledger) -> SpendwiseResult<()> {
    write_atomic(path, |out| {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(out);

        writer.write_record(LEDGER_COLUMNS)?;
        for entry in ledger {
            writer.serialize(EntryRecord::from(entry))?;
        }

        writer
            .flush()
            .map_err(|e| SpendwiseError::StoreUnavailable(format!("Failed to write ledger: {}", e)))
    })
}

/// Repository owning the current ledger snapshot
///
/// This is the only place the snapshot changes. Readers get clones, which
/// stay valid across later appends.
pub struct LedgerRepository {
    path: PathBuf,
    snapshot: Ledger,
}

impl LedgerRepository {
    /// Create a new ledger repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            snapshot: Ledger::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger from disk and make it the current snapshot
    pub fn load(&mut self) -> SpendwiseResult<Ledger> {
        let ledger = read_ledger(&self.path)?;
        tracing::debug!(path = %self.path.display(), entries = ledger.len(), "loaded ledger");
        self.snapshot = ledger.clone();
        Ok(ledger)
    }

    /// The current snapshot
    pub fn snapshot(&self) -> &Ledger {
        &self.snapshot
    }

    /// Write a snapshot to disk, replacing the file
    pub fn persist(&self, ledger: &Ledger) -> SpendwiseResult<()> {
        write_ledger(&self.path, ledger)?;
        tracing::debug!(path = %self.path.display(), entries = ledger.len(), "persisted ledger");
        Ok(())
    }

    /// Append an entry, persist, and adopt the new snapshot
    ///
    /// If persisting fails the current snapshot is left as it was.
    pub fn append(&mut self, entry: Entry) -> SpendwiseResult<Ledger> {
        let next = self.snapshot.append(entry);
        self.persist(&next)?;
        self.snapshot = next.clone();
        Ok(next)
    }
}
