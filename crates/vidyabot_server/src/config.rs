//! Environment-driven server configuration.
//!
//! Startup validation is an explicit step returning a result; the hosting
//! entry point decides whether to proceed or exit. Library code never exits
//! the process.

use std::env;
use std::path::PathBuf;
use vidyabot_error::ConfigError;
use vidyabot_gemini::DEFAULT_MODEL;

/// Deployment mode, toggling the CORS allow-list and error-detail verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Environment {
    /// Local development: localhost CORS defaults, error details exposed
    #[display("development")]
    Development,
    /// Production: explicit CORS origins, generic error bodies
    #[display("production")]
    Production,
}

/// Server configuration resolved at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Gemini API credential, required
    pub api_key: String,
    /// Listening port
    pub port: u16,
    /// Deployment mode
    pub environment: Environment,
    /// Upstream model identifier
    pub model: String,
    /// Explicit CORS origins; development mode adds localhost defaults
    pub allowed_origins: Vec<String>,
    /// Directory holding the bundled SPA shell
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Resolve configuration from the environment.
    ///
    /// Fails without a credential in `GEMINI_API_KEY` (or the legacy
    /// `API_KEY`): the server must refuse to start before accepting traffic.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .map_err(|_| {
                ConfigError::new("GEMINI_API_KEY environment variable is not set")
            })?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::new("GEMINI_API_KEY is set but empty"));
        }

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::new(format!("Invalid PORT value: {raw}")))?,
            Err(_) => 3000,
        };

        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        Ok(Self {
            api_key,
            port,
            environment,
            model,
            allowed_origins,
            static_dir,
        })
    }

    /// Whether error responses may carry raw upstream detail.
    pub fn expose_details(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Whether a non-empty credential is configured.
    pub fn api_key_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
