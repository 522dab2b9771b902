//! Display formatting for terminal output
//!
//! Entries are stored with a single sign convention; this is the only place
//! where amounts are turned back into positive magnitudes with a kind label.

pub mod category;
pub mod entry;

pub use category::format_category_list;
pub use entry::{format_entry_confirmation, format_entry_table};
