/// Provider host serving the delayed-price endpoint.
pub const DEFAULT_BASE_URL: &str = "https://investor.vanguard.com";

/// Desktop browser identification. The provider may refuse requests without one.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/109.0.0.0 Safari/537.36";

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5_000;

pub const BASE_URL_ENV: &str = "VANQUOTE_BASE_URL";
pub const USER_AGENT_ENV: &str = "VANQUOTE_USER_AGENT";

/// Transport settings for the quote fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_ms: u64,
    pub connect_timeout_ms: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            user_agent: String::from(DEFAULT_USER_AGENT),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
        }
    }
}

impl FetcherConfig {
    /// Defaults with `VANQUOTE_BASE_URL` / `VANQUOTE_USER_AGENT` applied when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(base_url);
        }
        if let Some(user_agent) = lookup(USER_AGENT_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_user_agent(user_agent);
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_connect_timeout_ms(mut self, connect_timeout_ms: u64) -> Self {
        self.connect_timeout_ms = connect_timeout_ms;
        self
    }
}
