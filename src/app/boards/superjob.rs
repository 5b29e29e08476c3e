use crate::app::boards::check_status;
use crate::config::SuperJobCredentials;
use crate::core::salary::estimate_rub_salary;
use crate::domain::model::{search_phrase, VacancySearch};
use crate::domain::ports::VacancyBoard;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;

const BOARD_TITLE: &str = "SuperJob Moscow";
/// Application key header required on every SuperJob request.
const APP_ID_HEADER: &str = "X-Api-App-Id";
/// Search scope: Moscow, 100 items per page.
const MOSCOW_TOWN: u64 = 4;
const PAGE_SIZE: u64 = 100;

pub struct SuperJobBoard {
    client: Client,
    base_url: String,
    app_key: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct AccessToken {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct SjPage {
    objects: Vec<SjVacancy>,
    total: u64,
    more: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SjVacancy {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub payment_from: Option<u64>,
    #[serde(default)]
    pub payment_to: Option<u64>,
}

impl SuperJobBoard {
    /// Exchanges the password-grant credentials for an access token, once.
    /// The token is reused for every page of every language search.
    pub async fn authorize(base_url: String, credentials: &SuperJobCredentials) -> Result<Self> {
        let client = Client::new();
        let base_url = base_url.trim_end_matches('/').to_string();
        let token = request_access_token(&client, &base_url, credentials).await?;

        tracing::debug!("SuperJob access token acquired");
        Ok(Self {
            client,
            base_url,
            app_key: credentials.secret_key.clone(),
            token,
        })
    }

    async fn fetch_page(&self, language: &str, page: u64) -> Result<SjPage> {
        let url = format!("{}/vacancies/", self.base_url);
        let phrase = search_phrase(language);

        tracing::debug!("GET {} page {} for '{}'", url, page, phrase);
        let response = self
            .client
            .get(&url)
            .header(APP_ID_HEADER, self.app_key.as_str())
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .query(&[("keyword", phrase.as_str())])
            .query(&[("town", MOSCOW_TOWN), ("count", PAGE_SIZE), ("page", page)])
            .send()
            .await?;
        let response = check_status(response)?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

async fn request_access_token(
    client: &Client,
    base_url: &str,
    credentials: &SuperJobCredentials,
) -> Result<String> {
    let url = format!("{}/oauth2/password/", base_url);

    tracing::debug!("POST {} (password grant)", url);
    let response = client
        .post(&url)
        .header(APP_ID_HEADER, credentials.secret_key.as_str())
        .query(&[
            ("login", credentials.login.as_str()),
            ("password", credentials.password.as_str()),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.secret_key.as_str()),
        ])
        .send()
        .await?;
    let response = check_status(response)?;

    let body = response.text().await?;
    let token: AccessToken = serde_json::from_str(&body)?;
    Ok(token.access_token)
}

#[async_trait]
impl VacancyBoard for SuperJobBoard {
    type Record = SjVacancy;

    fn title(&self) -> &str {
        BOARD_TITLE
    }

    async fn search(&self, language: &str) -> Result<VacancySearch<SjVacancy>> {
        let mut records = Vec::new();
        let mut found = 0;
        let mut page = 0;
        // SuperJob signals further pages with a boolean instead of a count.
        let mut more = true;

        while more {
            let fetched = self.fetch_page(language, page).await?;
            more = fetched.more;
            found = fetched.total;
            records.extend(fetched.objects);
            page += 1;
        }

        tracing::debug!(
            "SuperJob '{}': {} records fetched, {} found",
            language,
            records.len(),
            found
        );
        Ok(VacancySearch { found, records })
    }

    fn rub_salary(record: &SjVacancy) -> Option<u64> {
        estimate_rub_salary(
            record.currency.as_deref(),
            record.payment_from,
            record.payment_to,
        )
    }
}
