use std::net::SocketAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Credential for the Firecrawl scrape API. Absent means the
    /// scrape-dependent endpoints answer 500 per request instead of the
    /// server refusing to start.
    pub firecrawl_api_key: Option<String>,
    /// Credential for the Gemini generative-language API. Same startup
    /// semantics as `firecrawl_api_key`.
    pub gemini_api_key: Option<String>,
    pub firecrawl_base_url: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub upstream_timeout_secs: u64,
    /// Character budget for the cleaned scrape excerpt embedded in prompts.
    pub excerpt_max_chars: usize,
    /// Cap on the number of suggested sources returned to the caller.
    pub max_sources: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "firecrawl_api_key",
                &self.firecrawl_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("firecrawl_base_url", &self.firecrawl_base_url)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("gemini_model", &self.gemini_model)
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .field("excerpt_max_chars", &self.excerpt_max_chars)
            .field("max_sources", &self.max_sources)
            .finish()
    }
}
