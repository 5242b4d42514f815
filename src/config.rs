//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file, applies
//! environment overrides, and defines constants for HTTP cache TTLs, logging,
//! and default paths. `AppConfig` is the root configuration struct.

use const_format::formatcp;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Values are in seconds. API responses and the probe are never cached so that
// monitors always see a fresh answer.

/// Landing page - only changes on redeploy
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_HOME_SWR: u32 = 30;

/// Static assets (CSS) - long cache with immutable hint
pub const HTTP_CACHE_STATIC_MAX_AGE: u32 = 86400;

pub const CACHE_CONTROL_HOME: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}",
    HTTP_CACHE_HOME_MAX_AGE,
    HTTP_CACHE_HOME_SWR
);

pub const CACHE_CONTROL_STATIC: &str =
    formatcp!("public, max-age={}, immutable", HTTP_CACHE_STATIC_MAX_AGE);

pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Application Identity
// =============================================================================

/// Application name reported by the version endpoint and the probe
pub const APP_NAME: &str = "Demo Application";

/// Version reported when none is configured
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

/// Environment variable that overrides `app.version`
pub const VERSION_ENV_VAR: &str = "APP_VERSION";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path, used only when it exists
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default directory holding Tera templates
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Default directory for static files
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Path the liveness probe is served on
pub const PROBE_PATH: &str = "/actuator/health";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "demo_app=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

const LOG_FORMATS: &[&str] = &["text", "json"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Application identity
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Seconds to wait for open connections after a shutdown signal
    #[serde(default = "HttpServerConfig::default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_timeout_seconds: Self::default_shutdown_timeout(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8080
    }

    fn default_shutdown_timeout() -> u64 {
        30
    }

    /// Socket address built from `host` and `port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid http.host or http.port '{}:{}': {}",
                    self.host, self.port, e
                ))
            })
    }
}

/// Application identity settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// Version string reported by every endpoint (default: 1.0.0)
    #[serde(default = "AppSettings::default_version")]
    pub version: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
        }
    }
}

impl AppSettings {
    fn default_version() -> String {
        DEFAULT_APP_VERSION.to_string()
    }
}

/// Locations of the landing page assets
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "UiConfig::default_templates_dir")]
    pub templates_dir: String,
    #[serde(default = "UiConfig::default_static_dir")]
    pub static_dir: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            templates_dir: Self::default_templates_dir(),
            static_dir: Self::default_static_dir(),
        }
    }
}

impl UiConfig {
    fn default_templates_dir() -> String {
        DEFAULT_TEMPLATES_DIR.to_string()
    }

    fn default_static_dir() -> String {
        DEFAULT_STATIC_DIR.to_string()
    }

    /// Glob matching every template under `templates_dir`.
    pub fn template_glob(&self) -> String {
        format!("{}/**/*", self.templates_dir.trim_end_matches('/'))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    /// Load configuration from a TOML file. The file must exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load from an explicit path, or from `DEFAULT_CONFIG_PATH` when it exists,
    /// or fall back to built-in defaults. Environment overrides are applied last.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, ConfigError> {
        Self::resolve_with(explicit, Path::new(DEFAULT_CONFIG_PATH), |key| {
            std::env::var(key).ok()
        })
    }

    fn resolve_with<F>(
        explicit: Option<&str>,
        default_path: &Path,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None if default_path.exists() => Self::load(default_path)?,
            None => Self::default(),
        };
        config.apply_env(lookup);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides. A blank value counts as unset.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(version) = lookup(VERSION_ENV_VAR) {
            let version = version.trim();
            if !version.is_empty() {
                self.app.version = version.to_string();
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.app.version.trim().is_empty() {
            return Err(ConfigError::Validation(
                "app.version must not be blank; remove it to use the default".to_string(),
            ));
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.format must be one of {:?}, got '{}'",
                LOG_FORMATS, self.logging.format
            )));
        }

        self.http.socket_addr()?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.app.version, "1.0.0");
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.ui.templates_dir, "templates");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[http]\nhost = \"127.0.0.1\"\nport = 9000\n\n[app]\nversion = \"2.3.1\"\n\n[logging]\nformat = \"json\""
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.app.version, "2.3.1");
        assert_eq!(config.http.port, 9000);
        assert!(config.logging.is_json());
        assert_eq!(
            config.http.socket_addr().unwrap(),
            "127.0.0.1:9000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = AppConfig::resolve(missing.to_str()).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_default_path_used_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("config").join("default.toml");
        std::fs::create_dir_all(default_path.parent().unwrap()).unwrap();
        std::fs::write(&default_path, "[app]\nversion = \"3.1.4\"\n").unwrap();

        let config = AppConfig::resolve_with(None, &default_path, |_| None).unwrap();
        assert_eq!(config.app.version, "3.1.4");
    }

    #[test]
    fn test_missing_default_path_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("config").join("default.toml");

        let config = AppConfig::resolve_with(None, &default_path, |_| None).unwrap();
        assert_eq!(config.app.version, DEFAULT_APP_VERSION);
        assert_eq!(config.http.port, 8080);
    }

    #[test]
    fn test_env_applies_after_default_path() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("default.toml");
        std::fs::write(&default_path, "[app]\nversion = \"3.1.4\"\n").unwrap();

        let config = AppConfig::resolve_with(None, &default_path, |key| {
            (key == VERSION_ENV_VAR).then(|| "2.3.1".to_string())
        })
        .unwrap();
        assert_eq!(config.app.version, "2.3.1");
    }

    #[test]
    fn test_env_overrides_file_version() {
        let mut config = AppConfig::from_toml("[app]\nversion = \"1.2.0\"").unwrap();
        config.apply_env(|key| (key == VERSION_ENV_VAR).then(|| "2.3.1".to_string()));
        assert_eq!(config.app.version, "2.3.1");
    }

    #[test]
    fn test_blank_env_version_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_env(|_| Some("   ".to_string()));
        assert_eq!(config.app.version, DEFAULT_APP_VERSION);
    }

    #[test]
    fn test_blank_file_version_rejected() {
        let err = AppConfig::from_toml("[app]\nversion = \"\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let err = AppConfig::from_toml("[logging]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_invalid_host_rejected() {
        let err = AppConfig::from_toml("[http]\nhost = \"not a host\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_template_glob_strips_trailing_slash() {
        let ui = UiConfig {
            templates_dir: "/usr/share/demo-app/templates/".to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        };
        assert_eq!(ui.template_glob(), "/usr/share/demo-app/templates/**/*");
    }

    #[test]
    fn test_cache_control_strings() {
        assert_eq!(CACHE_CONTROL_HOME, "public, max-age=60, stale-while-revalidate=30");
        assert_eq!(CACHE_CONTROL_STATIC, "public, max-age=86400, immutable");
    }
}
