use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Gemini API key. Left unset, startup still succeeds and every
    /// recommendation request fails with the generic error.
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    /// Gemini model identifier
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Gemini API base URL
    #[serde(default = "default_gemini_api_url")]
    pub gemini_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Verbose logging
    #[serde(default)]
    pub debug: bool,
}

fn default_gemini_model() -> String {
    "gemini-2.5-pro".to_string()
}

fn default_gemini_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5001
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default `tracing` filter directive when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "book_sommelier_api=debug,tower_http=debug"
        } else {
            "book_sommelier_api=info,tower_http=info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(vars: &[(&str, &str)]) -> Config {
        envy::from_iter::<_, Config>(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Vec<_>>(),
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_without_any_variables() {
        let config = load(&[]);
        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.gemini_model, "gemini-2.5-pro");
        assert_eq!(
            config.gemini_api_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.bind_addr(), "127.0.0.1:5001");
        assert!(!config.debug);
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = load(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-2.5-flash"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("DEBUG", "true"),
        ]);
        assert_eq!(config.gemini_api_key.as_deref(), Some("secret"));
        assert_eq!(config.gemini_model, "gemini-2.5-flash");
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert!(config.log_filter().contains("debug"));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = envy::from_iter::<_, Config>(vec![(
            "PORT".to_string(),
            "not-a-port".to_string(),
        )]);
        assert!(result.is_err());
    }
}
