pub mod salary;
pub mod stats;
pub mod survey;

pub use crate::domain::model::{LanguageReport, LanguageRow, LanguageStat, VacancySearch};
pub use crate::domain::ports::VacancyBoard;
pub use crate::utils::error::Result;
