use std::collections::BTreeMap;

use crate::record::CleanedRecord;

pub const TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorTotal {
    pub author: String,
    pub rating_count: i64,
}

/// Sums rating counts per author and keeps the `n` largest totals.
/// Equal totals are ordered by author name. Totals saturate at `i64::MAX`.
pub fn top_authors_by_rating(records: &[CleanedRecord], n: usize) -> Vec<AuthorTotal> {
    let mut totals: BTreeMap<&str, i64> = BTreeMap::new();
    for record in records {
        let total = totals.entry(record.author.as_str()).or_default();
        *total = total.saturating_add(record.rating_count);
    }

    let mut ranked: Vec<AuthorTotal> = totals
        .into_iter()
        .map(|(author, rating_count)| AuthorTotal {
            author: author.to_string(),
            rating_count,
        })
        .collect();
    // BTreeMap iteration is name-ordered and the sort is stable, so ties stay
    // alphabetical.
    ranked.sort_by(|a, b| b.rating_count.cmp(&a.rating_count));
    ranked.truncate(n);
    ranked
}

/// The `n` best selling records. Equal sales keep their page order.
pub fn top_themes_by_sales(records: &[CleanedRecord], n: usize) -> Vec<&CleanedRecord> {
    let mut ranked: Vec<&CleanedRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.sales_count.cmp(&a.sales_count));
    ranked.truncate(n);
    ranked
}
