use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    HttpStatusError {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SurveyError {
    /// Short message suitable for direct display to the operator.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SurveyError::ApiError(source) => {
                format!("A job board request failed: {}", source)
            }
            SurveyError::HttpStatusError { status, url } => {
                format!("A job board answered {} for {}", status, url)
            }
            SurveyError::SerializationError(source) => {
                format!("A job board sent an unreadable response: {}", source)
            }
            SurveyError::MissingConfigError { field } => {
                format!("Required setting {} is not set", field)
            }
            SurveyError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                format!("Setting {} has invalid value '{}': {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SurveyError::ApiError(_) => {
                "Check network connectivity and the configured base URLs"
            }
            SurveyError::HttpStatusError { .. } => {
                "The run stops on any non-success status; retry once the job board recovers"
            }
            SurveyError::SerializationError(_) => {
                "The job board may have changed its response shape; inspect the raw payload"
            }
            SurveyError::MissingConfigError { .. } => {
                "Set the variable in the environment or in a .env file"
            }
            SurveyError::InvalidConfigValueError { .. } => "Fix the value and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, SurveyError>;
