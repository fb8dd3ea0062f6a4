use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub email: EmailConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Settings for the transactional email provider and the notification addresses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    pub api_base_url: String,
    pub api_key: String,
    pub from_address: String,
    pub notify_address: String,
    /// Unset means the HTTP client's default behavior.
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// A list in files; a comma separated string in `APP_CORS__ALLOWED_ORIGINS`.
    #[serde(deserialize_with = "origins_from_list_or_csv")]
    pub allowed_origins: Vec<String>,
}

fn origins_from_list_or_csv<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Origins {
        List(Vec<String>),
        Csv(String),
    }

    let origins = match Origins::deserialize(deserializer)? {
        Origins::List(list) => list,
        Origins::Csv(csv) => csv.split(',').map(str::to_string).collect(),
    };

    Ok(origins
        .into_iter()
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect())
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            email: EmailConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.resend.com".to_string(),
            api_key: String::new(),
            from_address: "noreply@notifications-guestos.ai".to_string(),
            notify_address: "jessie@guestos.ai".to_string(),
            timeout_seconds: None,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:3001".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Layers defaults, an optional TOML file, `APP_*` variables and finally the
    /// provider variables `RESEND_API_KEY`, `EMAIL_FROM` and `NOTIF_RECEIVE_EMAIL`.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path));
            }
            None if Path::new("config.toml").exists() => {
                builder = builder.add_source(File::with_name("config"));
            }
            None => {}
        }

        builder = builder
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("email.api_key", std::env::var("RESEND_API_KEY").ok())?
            .set_override_option("email.from_address", std::env::var("EMAIL_FROM").ok())?
            .set_override_option(
                "email.notify_address",
                std::env::var("NOTIF_RECEIVE_EMAIL").ok(),
            )?;

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if !self.email.api_base_url.starts_with("http://")
            && !self.email.api_base_url.starts_with("https://")
        {
            return Err(ConfigError::Message(format!(
                "Email API base URL must start with http:// or https://, got '{}'",
                self.email.api_base_url
            )));
        }

        if self.email.from_address.trim().is_empty() {
            return Err(ConfigError::Message(
                "Email sender address cannot be empty".to_string(),
            ));
        }

        if self.email.notify_address.trim().is_empty() {
            return Err(ConfigError::Message(
                "Notification recipient address cannot be empty".to_string(),
            ));
        }

        if self.email.api_key.is_empty() {
            tracing::warn!("No email provider API key configured - notifications will be rejected by the provider");
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
