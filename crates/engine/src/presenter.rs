use crate::Transaction;

/// Number of rows shown in the recent transactions list.
pub const RECENT_LIMIT: usize = 10;

/// Most recent transactions by date, newest first, at most `limit` of them.
///
/// The sort is stable: transactions sharing a date keep their insertion
/// order (newest insertion first). The input is not reordered.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}
