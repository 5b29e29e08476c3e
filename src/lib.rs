pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

pub use app::boards::{HeadHunterBoard, SuperJobBoard};
pub use config::{CliConfig, SuperJobCredentials};
pub use crate::core::survey::SalarySurvey;
pub use domain::model::{
    LanguageReport, LanguageRow, LanguageStat, VacancySearch, TRACKED_LANGUAGES,
};
pub use domain::ports::VacancyBoard;
pub use utils::error::{Result, SurveyError};
