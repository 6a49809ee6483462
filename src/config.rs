/// Where the review service lives.
/// Set `REVIEWS_API_URL` at build time to point the bundle somewhere other than the local service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        match option_env!("REVIEWS_API_URL") {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn reviews_url(&self) -> String {
        format!("{}/api/reviews", self.base_url)
    }
}
