//! Keyword-based expense categorization

/// Ordered rule table: the first keyword found as a substring wins, so
/// declaration order is the tie-break. Keys must be lower-case.
const CATEGORY_RULES: &[(&str, &str)] = &[
    ("juice", "Food"),
    ("coffee", "Food"),
    ("snack", "Food"),
    ("restaurant", "Food"),
    ("canteen", "Food"),
    ("mess ", "Food"),
    ("lunch", "Food"),
    ("taxi", "Transport"),
    ("uber", "Transport"),
    ("rapido", "Transport"),
    ("ola", "Transport"),
    ("bus", "Transport"),
    ("petrol", "Transport"),
    ("fuel", "Transport"),
    ("movie", "Entertainment"),
    ("subscription", "Entertainment"),
    ("rent", "Housing"),
    ("grocery", "Groceries"),
];

pub const FALLBACK_CATEGORY: &str = "Misc";

/// Maps a free-text category hint and note to a category label.
///
/// Scans the rule table against the lower-cased `"{hint} {note}"` text.
/// When no keyword matches, the trimmed hint is kept as-is; a blank hint
/// falls back to `"Misc"`.
pub fn categorize(category_hint: &str, note: &str) -> String {
    let combined = format!("{} {}", category_hint, note).to_lowercase();

    for (keyword, label) in CATEGORY_RULES {
        if combined.contains(keyword) {
            return label.to_string();
        }
    }

    let trimmed = category_hint.trim();
    if trimmed.is_empty() {
        FALLBACK_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}
