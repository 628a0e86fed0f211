use boxapi_rs::{types::Config, BoxApi};
use serde_json::Value;

use crate::domain::{errors::AppError, ports::profile::ProfileRepository};

#[derive(Clone)]
pub struct BoxApiRepository {
    boxapi: BoxApi,
}

impl BoxApiRepository {
    pub fn new(username: &str, password: &str, config: Option<Config>) -> Self {
        let boxapi = BoxApi::init(username, password, config);
        Self { boxapi }
    }
}

impl ProfileRepository for BoxApiRepository {
    async fn web_profile(&self, username: &str) -> Result<Value, AppError> {
        let profile = self.boxapi.instagram.web_profile_info(username).await?;
        Ok(profile)
    }
}
