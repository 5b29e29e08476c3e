/// Languages every survey tracks, in display order.
pub const TRACKED_LANGUAGES: [&str; 8] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "Go",
];

pub const SEARCH_ROLE: &str = "Программист";

pub fn search_phrase(language: &str) -> String {
    format!("{} {}", SEARCH_ROLE, language)
}

/// One board's complete answer for one language: the accumulated records
/// plus the total the API itself reported. The two can diverge when
/// pagination is capped or the board revises its count mid-fetch.
#[derive(Debug, Clone)]
pub struct VacancySearch<R> {
    pub found: u64,
    pub records: Vec<R>,
}

/// `average` is `None` exactly when `processed` is zero. `found` repeats
/// the board-reported total, so `processed <= found` is not guaranteed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStat {
    pub found: u64,
    pub processed: u64,
    pub average: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRow {
    pub language: String,
    pub stat: LanguageStat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageReport {
    pub title: String,
    pub rows: Vec<LanguageRow>,
}
