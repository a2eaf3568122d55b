pub mod models;

use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate};
use http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use self::models::{DetailedUsageInterval, PriceForecast, UsageBucket, UserInfo};
use crate::prelude::*;

const BASE_URL: &str = "https://api.flick.energy";

/// Public OAuth credentials of the Flick mobile application.
const CLIENT_ID: &str = "le37iwi3qctbduh39fvnpevt1m2uuvz";
const CLIENT_SECRET: &str = "ignwy9ztnst3azswww66y9vd9zt6qnd";

pub struct Api {
    client: Client,
}

impl Api {
    /// Exchange the account credentials for a bearer token and build
    /// an authenticated client.
    #[instrument(skip_all)]
    pub async fn log_in(username: &str, password: &str) -> Result<Self> {
        #[derive(Serialize)]
        struct TokenRequest<'a> {
            grant_type: &'static str,
            client_id: &'static str,
            client_secret: &'static str,
            username: &'a str,
            password: &'a str,
        }

        #[derive(Deserialize)]
        struct TokenResponse {
            id_token: String,
        }

        info!("logging in…");
        let response: TokenResponse = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?
            .post(format!("{BASE_URL}/identity/oauth/token"))
            .form(&TokenRequest {
                grant_type: "password",
                client_id: CLIENT_ID,
                client_secret: CLIENT_SECRET,
                username,
                password,
            })
            .send()
            .await
            .context("failed to request an access token")?
            .error_for_status()
            .context("the identity service rejected the credentials")?
            .json()
            .await
            .context("failed to deserialize the token response")?;

        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", response.id_token))?;
        authorization.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        let client = Client::builder()
            .user_agent("flick2influx")
            .timeout(Duration::from_secs(10))
            .default_headers(headers)
            .build()?;
        Ok(Self { client })
    }

    #[instrument(skip_all)]
    pub async fn get_user_info(&self) -> Result<UserInfo> {
        info!("fetching the user info…");
        self.get("customer/mobile_provider/user_info", &[]).await
    }

    #[instrument(skip_all, fields(supply_node = supply_node))]
    pub async fn get_price_forecast(&self, supply_node: &str) -> Result<PriceForecast> {
        info!("fetching the price forecast…");
        self.get(
            "customer/mobile_provider/price_forecast",
            &[("supply_node", supply_node.to_string())],
        )
        .await
    }

    #[instrument(skip_all, fields(start = %start, end = %end))]
    pub async fn get_power_usage(
        &self,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Vec<UsageBucket>> {
        #[derive(Deserialize)]
        struct UsageResponse {
            usage: Vec<UsageBucket>,
        }

        info!("fetching the power usage…");
        let response: UsageResponse = self
            .get(
                "customer/mobile_provider/usage",
                &[("start", start.to_rfc3339()), ("end", end.to_rfc3339())],
            )
            .await?;
        Ok(response.usage)
    }

    #[instrument(skip_all, fields(date = %date))]
    pub async fn get_detailed_usage(&self, date: NaiveDate) -> Result<Vec<DetailedUsageInterval>> {
        #[derive(Deserialize)]
        struct DetailedUsageResponse {
            usage: Vec<DetailedUsageInterval>,
        }

        info!("fetching the detailed usage…");
        let response: DetailedUsageResponse = self
            .get("customer/mobile_provider/detailed_usage", &[("date", date.to_string())])
            .await?;
        Ok(response.usage)
    }

    #[instrument(skip_all, level = Level::DEBUG, fields(path = path))]
    async fn get<R>(&self, path: &str, query: &[(&str, String)]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.client
            .get(format!("{BASE_URL}/{path}"))
            .query(query)
            .send()
            .await
            .with_context(|| format!("failed to call `{path}`"))?
            .error_for_status()
            .with_context(|| format!("`{path}` request failed"))?
            .json()
            .await
            .with_context(|| format!("failed to deserialize `{path}` response JSON"))
    }
}
