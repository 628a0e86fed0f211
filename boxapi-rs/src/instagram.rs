use crate::errors::BoxApiError;
use crate::types::{Config, Credentials};
use crate::utils::send_request;
use serde_json::{json, Value};
use std::sync::Arc;

const WEB_PROFILE_INFO: &str = "/api/instagram/user/get_web_profile_info";

#[derive(Clone)]
pub struct BoxApiInstagram {
    credentials: Arc<Credentials>,
    config: Arc<Config>,
}

impl BoxApiInstagram {
    pub fn new(credentials: Arc<Credentials>, config: Arc<Config>) -> Self {
        Self {
            credentials,
            config,
        }
    }

    /// Raw `get_web_profile_info` payload. The profile itself sits under
    /// `response.body.data.user`.
    pub async fn web_profile_info(&self, username: &str) -> Result<Value, BoxApiError> {
        send_request(
            &self.config,
            &self.credentials,
            WEB_PROFILE_INFO,
            json!({ "username": username }),
        )
        .await
    }
}
