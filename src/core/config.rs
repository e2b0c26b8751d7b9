//! Configuration management for the MCP server.
//!
//! Values come from defaults, optionally overridden by environment variables
//! (a `.env` file is honoured).

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Start-up warning for a missing service key.
pub const MISSING_KEY_WARNING: &str = "TOUR_API_KEY not set. Requests will be sent without a service key \
     and TourAPI will reject them (get a key at https://www.data.go.kr)";

/// Default TourAPI Korean-language service endpoint.
pub const DEFAULT_TOUR_API_BASE_URL: &str = "http://apis.data.go.kr/B551011/KorService1";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,

    /// Upstream TourAPI settings.
    pub tour_api: TourApiConfig,

    /// Problems found while reading the environment. Loading runs before
    /// the log subscriber exists, so these are emitted by
    /// [`Config::log_startup_warnings`].
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// data.go.kr service key for TourAPI.
    pub tour_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "tour_api_key",
                &self.tour_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Parameters of every TourAPI request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourApiConfig {
    /// Service base URL; operation names are appended as path segments.
    pub base_url: String,

    /// `MobileOS` query parameter.
    pub mobile_os: String,

    /// `MobileApp` query parameter.
    pub mobile_app: String,

    /// `numOfRows` query parameter.
    pub num_of_rows: u32,

    /// `pageNo` query parameter.
    pub page_no: u32,

    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl Default for TourApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_TOUR_API_BASE_URL.to_string(),
            mobile_os: "ETC".to_string(),
            mobile_app: "ktour-api".to_string(),
            num_of_rows: 10,
            page_no: 1,
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "ktour-api".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            tour_api: TourApiConfig::default(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix; the service key is read from
    /// `TOUR_API_KEY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        match std::env::var("TOUR_API_KEY") {
            Ok(key) if !key.trim().is_empty() => {
                config.credentials.tour_api_key = Some(key);
            }
            _ => config.warnings.push(MISSING_KEY_WARNING.to_string()),
        }

        if let Ok(base_url) = std::env::var("MCP_TOUR_API_BASE_URL") {
            config.tour_api.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("MCP_TOUR_API_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.tour_api.timeout_secs = secs,
                Err(_) => config.warnings.push(format!(
                    "Invalid MCP_TOUR_API_TIMEOUT_SECS '{}', keeping {}s",
                    timeout, config.tour_api.timeout_secs
                )),
            }
        }

        config
    }

    /// Emit what [`Config::from_env`] found. Call once logging is set up.
    pub fn log_startup_warnings(&self) {
        if self.credentials.tour_api_key.is_some() {
            info!("TourAPI service key loaded from environment");
        }
        for warning in &self.warnings {
            warn!("{warning}");
        }
    }
}
