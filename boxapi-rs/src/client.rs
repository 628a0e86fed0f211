use crate::instagram::BoxApiInstagram;
use crate::types::{Config, Credentials};
use std::sync::Arc;

#[derive(Clone)]
pub struct BoxApi {
    pub config: Arc<Config>,
    pub instagram: BoxApiInstagram,
}

impl BoxApi {
    pub fn init(username: &str, password: &str, config: Option<Config>) -> Self {
        let config = Arc::new(config.unwrap_or_default());
        let credentials = Arc::new(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        });
        Self {
            instagram: BoxApiInstagram::new(credentials, config.clone()),
            config,
        }
    }
}
