use crate::domain::model::LanguageStat;

/// Folds per-record salary estimates into one language's statistics.
/// `found` is the board-reported total, not the fetched record count.
pub fn aggregate<R>(
    found: u64,
    records: &[R],
    rub_salary: impl Fn(&R) -> Option<u64>,
) -> LanguageStat {
    let estimates: Vec<u64> = records.iter().filter_map(|record| rub_salary(record)).collect();
    let processed = estimates.len() as u64;
    let average = if processed == 0 {
        None
    } else {
        Some(estimates.iter().sum::<u64>() / processed)
    };

    LanguageStat {
        found,
        processed,
        average,
    }
}
