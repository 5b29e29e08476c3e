use crate::domain::model::VacancySearch;
use crate::utils::error::Result;
use async_trait::async_trait;

/// One job board API: pages through a language search and knows how to read
/// a rouble estimate out of its own record shape.
#[async_trait]
pub trait VacancyBoard: Send + Sync {
    type Record: Send + Sync;

    fn title(&self) -> &str;

    async fn search(&self, language: &str) -> Result<VacancySearch<Self::Record>>;

    fn rub_salary(record: &Self::Record) -> Option<u64>;
}
