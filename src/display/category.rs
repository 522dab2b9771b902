//! Category display formatting

use crate::models::{CategorySet, INCOME_LABEL};

/// Format the configured expense categories as a list
pub fn format_category_list(categories: &CategorySet) -> String {
    let mut output = String::from("Expense categories:\n");
    for name in categories.iter() {
        output.push_str(&format!("  {}\n", name));
    }
    output.push_str(&format!(
        "\nIncome is recorded under '{}' with the income command.\n",
        INCOME_LABEL
    ));
    output
}
