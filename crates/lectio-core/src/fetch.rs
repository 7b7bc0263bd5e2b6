//! HTTP client for the upstream plan-generator site and ICS sources.

use std::time::Duration;

use jiff::civil::Date;

use crate::{
    catalog,
    error::{PlannerError, Result},
    params::RemotePlanParameters,
};

/// Production URL of the third-party plan generator.
pub const DEFAULT_BASE_URL: &str = "https://www.biblereadingplangenerator.com/";

const USER_AGENT: &str = concat!("lectio/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Query sent to the upstream generator site.
#[derive(Debug, Clone)]
pub struct UpstreamQuery {
    /// First calendar date of the plan
    pub start_date: Date,
    /// Generation parameters
    pub parameters: RemotePlanParameters,
}

impl UpstreamQuery {
    /// Encode the query as URL parameter pairs.
    ///
    /// Boolean options are appended only when set; the site treats a
    /// missing parameter and `0` differently from `1`.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let p = &self.parameters;
        let mut pairs = vec![
            ("start", self.start_date.to_string()),
            ("total", p.total_days.to_string()),
            ("format", "list".to_string()),
            ("lang", "fr".to_string()),
            ("logic", "words".to_string()),
            (
                "daysofweek",
                p.days_of_week
                    .iter()
                    .map(|d| d.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            ("books", catalog::map_to_api_book_set(&p.books).to_string()),
            ("order", p.order.as_str().to_string()),
        ];

        if p.overlap_ot_nt {
            pairs.push(("otntoverlap", "1".to_string()));
        }
        if p.reverse {
            pairs.push(("reverse", "1".to_string()));
        }
        if p.stats {
            pairs.push(("stats", "1".to_string()));
        }
        if p.daily_psalm {
            pairs.push(("dailypsalm", "1".to_string()));
        }
        if p.daily_proverb {
            pairs.push(("dailyproverb", "1".to_string()));
        }

        pairs
    }
}

/// Thin wrapper over a [`reqwest::Client`] with a bounded timeout.
#[derive(Debug, Clone)]
pub struct GeneratorClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeneratorClient {
    /// Create a client targeting the given generator base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the generated plan page for a query.
    pub async fn fetch_plan_html(&self, query: &UpstreamQuery) -> Result<String> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&query.to_query_pairs())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PlannerError::UpstreamStatus {
                status: response.status().as_u16(),
            });
        }
        Ok(response.text().await?)
    }

    /// Fetch an ICS document from an arbitrary URL.
    pub async fn fetch_ics(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(PlannerError::UpstreamStatus {
                status: response.status().as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}
