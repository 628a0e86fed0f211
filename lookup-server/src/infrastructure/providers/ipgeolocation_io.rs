//! ipgeolocation.io: API key required, 1000 requests/day on the free tier.

use futures::future::BoxFuture;
use reqwest::Client;
use serde_json::Value;

use super::{get_json, text_or_na, value_or_na};
use crate::domain::{errors::AppError, models::IpInfoRecord, ports::ip_info::IpInfoProvider};

pub const SOURCE: &str = "ipgeolocation.io";
pub const DEFAULT_BASE_URL: &str = "https://api.ipgeolocation.io";

#[derive(Clone)]
pub struct IpGeolocationIo {
    base_url: String,
    api_key: String,
}

impl IpGeolocationIo {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    async fn fetch(&self, ip: &str) -> Result<IpInfoRecord, AppError> {
        let url = format!("{}/v2/timezone", self.base_url.trim_end_matches('/'));
        let request = Client::new()
            .get(&url)
            .query(&[("apiKey", self.api_key.as_str()), ("ip", ip)]);
        let data = get_json(request).await?;
        Ok(normalize(ip, &data))
    }
}

impl IpInfoProvider for IpGeolocationIo {
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
        org: text_or_na(data.pointer("/organization/name")),
        country_name: text_or_na(data.pointer("/location/country_name")),
        region: text_or_na(data.pointer("/location/state_prov")),
        city: text_or_na(data.pointer("/location/city")),
        latitude: value_or_na(data.pointer("/location/latitude")),
        longitude: value_or_na(data.pointer("/location/longitude")),
        timezone: text_or_na(data.pointer("/timezone/name")),
        information_source: SOURCE.to_string(),
    }
}
