//! ipapi.co: keyless, 30k requests/month on the free tier.

use futures::future::BoxFuture;
use reqwest::Client;
use serde_json::Value;

use super::{get_json, text_or_na, value_or_na};
use crate::domain::{errors::AppError, models::IpInfoRecord, ports::ip_info::IpInfoProvider};

pub const SOURCE: &str = "ipapi.co";
pub const DEFAULT_BASE_URL: &str = "https://ipapi.co";

#[derive(Debug, Clone)]
pub struct IpapiCo {
    base_url: String,
}

impl IpapiCo {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn fetch(&self, ip: &str) -> Result<IpInfoRecord, AppError> {
        let url = format!(
            "{}/{}/json/",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(ip)
        );
        let data = get_json(Client::new().get(&url)).await?;
        Ok(normalize(ip, &data))
    }
}

impl IpInfoProvider for IpapiCo {
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
        org: text_or_na(data.get("org")),
        country_name: text_or_na(data.get("country_name")),
        region: text_or_na(data.get("region")),
        city: text_or_na(data.get("city")),
        latitude: value_or_na(data.get("latitude")),
        longitude: value_or_na(data.get("longitude")),
        timezone: text_or_na(data.get("timezone")),
        information_source: SOURCE.to_string(),
    }
}
