use crate::utils::error::{Result, SurveyError};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "vacancy-survey")]
#[command(about = "Average salary survey over programming-language vacancies")]
pub struct CliConfig {
    #[arg(long, default_value = "https://api.hh.ru")]
    pub hh_base_url: String,

    #[arg(long, default_value = "https://api.superjob.ru/2.33")]
    pub sj_base_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("hh_base_url", &self.hh_base_url)?;
        validate_url("sj_base_url", &self.sj_base_url)?;
        Ok(())
    }
}

/// SuperJob password-grant inputs, read from the environment once per run.
/// A `.env` file in the working directory is honored.
#[derive(Debug, Clone)]
pub struct SuperJobCredentials {
    pub secret_key: String,
    pub login: String,
    pub password: String,
    pub client_id: String,
}

impl SuperJobCredentials {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let credentials = Self {
            secret_key: require_env("SECRET_KEY_SUPERJOB")?,
            login: require_env("LOGIN_SUPERJOB")?,
            password: require_env("PASSWORD_SUPERJOB")?,
            client_id: require_env("CLIENT_ID_SUPERJOB")?,
        };
        validate_non_empty_string("SECRET_KEY_SUPERJOB", &credentials.secret_key)?;
        validate_non_empty_string("LOGIN_SUPERJOB", &credentials.login)?;
        validate_non_empty_string("PASSWORD_SUPERJOB", &credentials.password)?;
        validate_non_empty_string("CLIENT_ID_SUPERJOB", &credentials.client_id)?;
        Ok(credentials)
    }
}

fn require_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| SurveyError::MissingConfigError {
        field: name.to_string(),
    })
}
