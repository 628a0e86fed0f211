#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub protocol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "boxapi.ir".to_string(),
            protocol: "https".to_string(),
        }
    }
}

/// Basic-auth pair issued by BoxAPI.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
