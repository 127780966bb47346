//! Keyword-based merchant categorization.
//!
//! Deterministic rules cover the common merchants; anything else is matched
//! against the user's own category names before falling back to
//! [`FALLBACK_CATEGORY`].

/// Category returned when nothing matches.
pub const FALLBACK_CATEGORY: &str = "Others";

/// Ordered `(keyword, category)` rules. The first keyword found in the
/// lowercased merchant text wins, so order matters.
pub const RULES: &[(&str, &str)] = &[
    ("food", "Food"),
    ("restaurant", "Food"),
    ("mcdonald", "Food"),
    ("kfc", "Food"),
    ("grocery", "Groceries"),
    ("amazon", "Shopping"),
    ("flipkart", "Shopping"),
    ("electricity", "Utilities"),
    ("power", "Utilities"),
    ("rent", "Rent"),
    ("uber", "Transport"),
    ("ola", "Transport"),
    ("fuel", "Fuel"),
    ("petrol", "Fuel"),
];

/// Suggest a category name for a merchant.
///
/// Checks [`RULES`] in order, then returns the first entry of `categories`
/// whose name contains the merchant text (case-insensitive), keeping the
/// category's own casing.
pub fn categorize<S: AsRef<str>>(merchant: &str, categories: &[S]) -> String {
    let text = merchant.to_lowercase();
    if text.is_empty() {
        return FALLBACK_CATEGORY.to_string();
    }

    if let Some((_, category)) = RULES.iter().find(|(keyword, _)| text.contains(keyword)) {
        return (*category).to_string();
    }

    categories
        .iter()
        .map(AsRef::as_ref)
        .find(|name| name.to_lowercase().contains(&text))
        .map_or_else(|| FALLBACK_CATEGORY.to_string(), ToString::to_string)
}
