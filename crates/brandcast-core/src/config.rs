//! Environment-driven application configuration.

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1/messages";
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Runtime configuration for the model endpoint.
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub model: String,
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"[redacted]")
            .field("api_base_url", &self.api_base_url)
            .field("model", &self.model)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl AppConfig {
    /// Build config from environment variables.
    ///
    /// `BRANDCAST_API_KEY` is required; `BRANDCAST_API_BASE_URL`,
    /// `BRANDCAST_MODEL`, and `BRANDCAST_REQUEST_TIMEOUT_SECS` fall back to
    /// defaults when unset.
    ///
    /// # Errors
    ///
    /// Returns an error string naming the missing variable, or an invalid
    /// timeout value.
    pub fn from_env() -> Result<Self, String> {
        let get = |key: &str| -> Option<String> { std::env::var(key).ok() };

        let Some(api_key) = get("BRANDCAST_API_KEY") else {
            return Err("missing env var: BRANDCAST_API_KEY".to_string());
        };

        let api_base_url =
            get("BRANDCAST_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = get("BRANDCAST_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let request_timeout_secs = match get("BRANDCAST_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| format!("invalid BRANDCAST_REQUEST_TIMEOUT_SECS '{raw}': {e}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            api_base_url,
            model,
            request_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let config = AppConfig {
            api_key: "sk-secret".to_string(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("[redacted]"));
    }
}
