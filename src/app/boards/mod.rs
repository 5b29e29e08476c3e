use crate::utils::error::{Result, SurveyError};

pub mod headhunter;
pub mod superjob;

pub use headhunter::HeadHunterBoard;
pub use superjob::SuperJobBoard;

/// Any non-success status is fatal for the whole run.
pub(crate) fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if !response.status().is_success() {
        return Err(SurveyError::HttpStatusError {
            status: response.status(),
            url: response.url().to_string(),
        });
    }
    Ok(response)
}
