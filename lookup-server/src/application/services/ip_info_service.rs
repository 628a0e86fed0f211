use std::sync::Arc;

use crate::domain::{models::IpInfoResponse, ports::ip_info::IpInfoProvider};

/// Walks a fixed, ordered list of geolocation providers and keeps the first answer.
#[derive(Clone)]
pub struct IpInfoService {
    providers: Vec<Arc<dyn IpInfoProvider>>,
}

impl IpInfoService {
    pub fn new(providers: Vec<Arc<dyn IpInfoProvider>>) -> Self {
        Self { providers }
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Never fails: when every provider errors the caller gets
    /// [`IpInfoResponse::Failed`] as data instead.
    pub async fn get_ip_info(&self, ip: &str) -> IpInfoResponse {
        for provider in &self.providers {
            match provider.lookup(ip).await {
                Ok(record) => return IpInfoResponse::Found(record),
                Err(e) => {
                    tracing::warn!(
                        provider = provider.name(),
                        %ip,
                        error = %e,
                        "IP provider failed, trying next"
                    );
                }
            }
        }
        tracing::error!(%ip, "all IP providers failed");
        IpInfoResponse::all_failed()
    }
}
