use crate::core::stats::aggregate;
use crate::domain::model::{LanguageReport, LanguageRow, TRACKED_LANGUAGES};
use crate::domain::ports::VacancyBoard;
use crate::utils::error::Result;

/// Surveys every tracked language on one job board, sequentially.
pub struct SalarySurvey<B: VacancyBoard> {
    board: B,
}

impl<B: VacancyBoard> SalarySurvey<B> {
    pub fn new(board: B) -> Self {
        Self { board }
    }

    /// Fetches, estimates and aggregates each tracked language in the fixed
    /// display order. The first failed request aborts the whole run.
    pub async fn run(&self) -> Result<LanguageReport> {
        tracing::info!("🚀 Starting salary survey: {}", self.board.title());

        let mut rows = Vec::with_capacity(TRACKED_LANGUAGES.len());
        for language in TRACKED_LANGUAGES {
            tracing::info!("🔍 Searching {} vacancies", language);
            let search = self.board.search(language).await?;
            let stat = aggregate(search.found, &search.records, B::rub_salary);
            tracing::info!(
                "📊 {}: {} found, {} processed",
                language,
                stat.found,
                stat.processed
            );
            rows.push(LanguageRow {
                language: language.to_string(),
                stat,
            });
        }

        tracing::info!("✅ Survey complete: {}", self.board.title());
        Ok(LanguageReport {
            title: self.board.title().to_string(),
            rows,
        })
    }
}
