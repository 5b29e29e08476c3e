use crate::app::boards::check_status;
use crate::core::salary::estimate_rub_salary;
use crate::domain::model::{search_phrase, VacancySearch};
use crate::domain::ports::VacancyBoard;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;

const BOARD_TITLE: &str = "HeadHunter Moscow";
/// HeadHunter identifies API consumers by User-Agent.
const USER_AGENT_VALUE: &str = "vacancy-survey/0.1";
/// Search scope: Moscow vacancies published within the last 30 days.
const MOSCOW_AREA: u64 = 1;
const PERIOD_DAYS: u64 = 30;
/// 20 items per page; deep paging stops at page 100.
const PAGE_SIZE: u64 = 20;
const MAX_PAGES: u64 = 100;

pub struct HeadHunterBoard {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct HhPage {
    found: u64,
    items: Vec<HhVacancy>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HhVacancy {
    #[serde(default)]
    pub salary: Option<HhSalary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HhSalary {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub from: Option<u64>,
    #[serde(default)]
    pub to: Option<u64>,
}

impl HeadHunterBoard {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn fetch_page(&self, language: &str, page: u64) -> Result<HhPage> {
        let url = format!("{}/vacancies", self.base_url);
        let phrase = search_phrase(language);

        tracing::debug!("GET {} page {} for '{}'", url, page, phrase);
        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT_VALUE)
            .query(&[("text", phrase.as_str())])
            .query(&[
                ("area", MOSCOW_AREA),
                ("period", PERIOD_DAYS),
                ("per_page", PAGE_SIZE),
                ("page", page),
            ])
            .send()
            .await?;
        let response = check_status(response)?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl VacancyBoard for HeadHunterBoard {
    type Record = HhVacancy;

    fn title(&self) -> &str {
        BOARD_TITLE
    }

    async fn search(&self, language: &str) -> Result<VacancySearch<HhVacancy>> {
        let mut records = Vec::new();
        let mut found = 0;
        let mut page = 0;
        // The page count is derived from `found` and recomputed after every
        // response; the freshest value wins. A first page that derives a
        // count of zero still contributes its items.
        let mut pages_total = 1;

        while page < pages_total {
            let fetched = self.fetch_page(language, page).await?;
            found = fetched.found;
            pages_total = (found / PAGE_SIZE).min(MAX_PAGES);
            records.extend(fetched.items);
            page += 1;
        }

        tracing::debug!(
            "HeadHunter '{}': {} records fetched, {} found",
            language,
            records.len(),
            found
        );
        Ok(VacancySearch { found, records })
    }

    fn rub_salary(record: &HhVacancy) -> Option<u64> {
        let salary = record.salary.as_ref()?;
        estimate_rub_salary(salary.currency.as_deref(), salary.from, salary.to)
    }
}
