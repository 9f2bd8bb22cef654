use std::fmt;

use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_STATIC_DIR: &str = "web";
pub const DEFAULT_BODY_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Clone, Deserialize)]
pub struct Envy {
    pub replicate_api_token: String,
    pub replicate_api_url: Option<String>,
    pub replicate_model: Option<String>,

    pub port: Option<u16>,
    pub static_dir: Option<String>,
    pub body_limit: Option<usize>,
}

impl Envy {
    pub fn from_env() -> Result<Self, envy::Error> {
        Self::checked(envy::from_env::<Envy>()?)
    }

    pub fn from_iter<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self::checked(envy::from_iter::<_, Envy>(vars)?)
    }

    fn checked(envy: Envy) -> Result<Self, envy::Error> {
        if envy.replicate_api_token.trim().is_empty() {
            return Err(envy::Error::MissingValue("replicate_api_token"));
        }

        Ok(envy)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn replicate_api_url(&self) -> &str {
        self.replicate_api_url
            .as_deref()
            .unwrap_or(crate::images::apis::replicate::config::API_URL)
            .trim_end_matches('/')
    }

    pub fn replicate_model(&self) -> &str {
        self.replicate_model
            .as_deref()
            .unwrap_or(crate::images::apis::replicate::config::MODEL)
    }

    pub fn static_dir(&self) -> &str {
        self.static_dir.as_deref().unwrap_or(DEFAULT_STATIC_DIR)
    }

    pub fn body_limit(&self) -> usize {
        self.body_limit.unwrap_or(DEFAULT_BODY_LIMIT)
    }
}

// The token never reaches the logs.
impl fmt::Debug for Envy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envy")
            .field("replicate_api_token", &"<redacted>")
            .field("replicate_api_url", &self.replicate_api_url)
            .field("replicate_model", &self.replicate_model)
            .field("port", &self.port)
            .field("static_dir", &self.static_dir)
            .field("body_limit", &self.body_limit)
            .finish()
    }
}
