//! abstractapi.com: API key required, 20k requests/month on the free tier.

use futures::future::BoxFuture;
use reqwest::Client;
use serde_json::Value;

use super::{get_json, text_or_na, value_or_na};
use crate::domain::{errors::AppError, models::IpInfoRecord, ports::ip_info::IpInfoProvider};

pub const SOURCE: &str = "abstractapi.com";
pub const DEFAULT_BASE_URL: &str = "https://ipgeolocation.abstractapi.com";

#[derive(Clone)]
pub struct AbstractApiCom {
    base_url: String,
    api_key: String,
}

impl AbstractApiCom {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    async fn fetch(&self, ip: &str) -> Result<IpInfoRecord, AppError> {
        let url = format!("{}/v1/", self.base_url.trim_end_matches('/'));
        let request = Client::new()
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("ip_address", ip)]);
        let data = get_json(request).await?;
        Ok(normalize(ip, &data))
    }
}

impl IpInfoProvider for AbstractApiCom {
    fn name(&self) -> &str {
        SOURCE
    }

    fn lookup<'a>(&'a self, ip: &'a str) -> BoxFuture<'a, Result<IpInfoRecord, AppError>> {
        Box::pin(self.fetch(ip))
    }
}

pub fn normalize(ip: &str, data: &Value) -> IpInfoRecord {
    IpInfoRecord {
        ip: ip.to_string(),
        org: text_or_na(data.pointer("/connection/autonomous_system_organization")),
        country_name: text_or_na(data.get("country")),
        region: text_or_na(data.get("region")),
        city: text_or_na(data.get("city")),
        latitude: value_or_na(data.get("latitude")),
        longitude: value_or_na(data.get("longitude")),
        timezone: text_or_na(data.pointer("/timezone/name")),
        information_source: SOURCE.to_string(),
    }
}
