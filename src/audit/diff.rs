//! Diff generation for audit logging
//!
//! Generates human-readable summaries of what changed when an expense is
//! edited in place.

use crate::models::Expense;

/// Longest field value shown verbatim in a diff
const MAX_VALUE_CHARS: usize = 50;

/// Describe the changed fields between two versions of an expense
///
/// Returns `None` when nothing changed. Fields are listed in column order.
pub fn diff_expenses(before: &Expense, after: &Expense) -> Option<String> {
    let fields = [
        ("date", quote(&before.date), quote(&after.date)),
        ("category", quote(&before.category), quote(&after.category)),
        (
            "amount",
            before.amount.to_plain_string(),
            after.amount.to_plain_string(),
        ),
        (
            "description",
            quote(&before.description),
            quote(&after.description),
        ),
    ];

    let changes: Vec<String> = fields
        .into_iter()
        .filter(|(_, old, new)| old != new)
        .map(|(name, old, new)| format!("{}: {} -> {}", name, old, new))
        .collect();

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Quote a text value, truncating long strings
fn quote(s: &str) -> String {
    if s.chars().count() > MAX_VALUE_CHARS {
        let head: String = s.chars().take(MAX_VALUE_CHARS - 3).collect();
        format!("\"{}...\"", head)
    } else {
        format!("\"{}\"", s)
    }
}
