//! Widget configuration parsed from environment variables.

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5002/chatbot-web";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors raised while building a [`WidgetConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
}

/// HTTP timeouts. `request_secs` is `None` unless explicitly configured; the
/// network stack's own behavior applies then.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: Option<u64>,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: None, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub endpoint: String,
    pub require_lead_form: bool,
    pub contact_url: Option<String>,
    pub timeouts: Timeouts,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            require_lead_form: false,
            contact_url: None,
            timeouts: Timeouts::default(),
        }
    }
}

impl WidgetConfig {
    /// Build typed widget config from environment variables.
    ///
    /// Optional:
    /// - `CHATBOT_ENDPOINT`: default `http://localhost:5002/chatbot-web`
    /// - `CHATBOT_REQUIRE_LEAD_FORM`: `true`/`1`/`yes` or `false`/`0`/`no`/empty
    ///   (case-insensitive), default false
    /// - `CHATBOT_CONTACT_URL`: external contact link shown in the panel
    /// - `CHATBOT_CONNECT_TIMEOUT_SECS`: default 10
    /// - `CHATBOT_REQUEST_TIMEOUT_SECS`: unset or `0` means no request timeout
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConfigParse`] for an unrecognized boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`WidgetConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConfigParse`] for an unrecognized boolean.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint = lookup("CHATBOT_ENDPOINT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let require_lead_form = match lookup("CHATBOT_REQUIRE_LEAD_FORM") {
            Some(raw) => parse_bool("CHATBOT_REQUIRE_LEAD_FORM", &raw)?,
            None => false,
        };
        let contact_url = lookup("CHATBOT_CONTACT_URL").filter(|v| !v.trim().is_empty());
        let timeouts = Timeouts {
            request_secs: lookup("CHATBOT_REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|secs| *secs > 0),
            connect_secs: parse_u64(lookup("CHATBOT_CONNECT_TIMEOUT_SECS"), DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { endpoint, require_lead_form, contact_url, timeouts })
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok()).unwrap_or(default)
}

pub(crate) fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(ConfigError::ConfigParse(format!("invalid boolean for {key}: {other}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
