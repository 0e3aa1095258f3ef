use std::time::Duration;

/// Gateway host the built-in cases target unless overridden.
pub const DEFAULT_BASE_URL: &str = "https://ingrazzio-for-junie-cloud-prod.labs.jb.gg";

/// Environment variable holding the gateway token.
pub const CREDENTIAL_ENV_VAR: &str = "JUNIE_API_KEY";

/// Token used when the environment does not provide one.
pub const PLACEHOLDER_CREDENTIAL: &str = "perm-XXX";

/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Bearer token for the gateway.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Credential").field(&"[REDACTED]").finish()
    }
}

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Read the token from `JUNIE_API_KEY`, falling back to the placeholder.
    pub fn from_env() -> Self {
        Self::resolve(|var| std::env::var(var).ok())
    }

    /// Resolve the token through `lookup`. A set but empty value is used as is.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self(lookup(CREDENTIAL_ENV_VAR).unwrap_or_else(|| PLACEHOLDER_CREDENTIAL.to_string()))
    }

    /// True when no token was supplied and the placeholder is in use.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER_CREDENTIAL
    }

    /// `Authorization` header value.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

/// Everything the runner needs from the outside world, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub credential: Credential,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credential: Credential::new(PLACEHOLDER_CREDENTIAL),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Default config with the credential taken from the environment.
    pub fn load() -> Self {
        Self {
            credential: Credential::from_env(),
            ..Self::default()
        }
    }

    /// Override the gateway host. Trailing slashes are dropped so case
    /// paths can be appended verbatim.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}
