use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use config::{Config, ConfigError, File};
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, Tokio1Executor};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::email_client::MailError;
use crate::store::{InMemoryStore, KeyValueStore, RedisStore, StoreError};

#[derive(Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub store: StoreSettings,
    pub email_client: EmailClientSettings,
    pub logging: LoggingSettings,
}

#[derive(Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[derive(Deserialize)]
pub struct StoreSettings {
    pub url: Secret<String>,
    pub password: Secret<String>,
}

impl StoreSettings {
    /// `memory://` keeps groups in process memory, anything else is handed to Redis.
    pub fn build_store(&self) -> Result<Arc<dyn KeyValueStore>, StoreError> {
        if self.url.expose_secret().starts_with("memory://") {
            return Ok(Arc::new(InMemoryStore::default()));
        }

        let password = Some(self.password.expose_secret())
            .filter(|p| !p.is_empty())
            .cloned();
        Ok(Arc::new(RedisStore::new(self.url.expose_secret(), password)?))
    }
}

#[derive(Deserialize)]
pub struct EmailClientSettings {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub username: String,
    pub password: Secret<String>,
    pub sender_email: String,
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<Mailbox, MailError> {
        Ok(self.sender_email.parse()?)
    }

    pub const fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn smtp_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
        let credentials = Credentials::new(
            self.username.clone(),
            self.password.expose_secret().clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.smtp_host)?
            .port(self.smtp_port)
            .credentials(credentials)
            .timeout(Some(self.timeout()))
            .build();

        Ok(transport)
    }
}

#[derive(Deserialize)]
pub struct LoggingSettings {
    pub file: PathBuf,
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| ConfigError::Message(format!("Failed to determine the current directory: {e}")))?;
    let config_dir = base_path.join("configuration");
    let base_config = File::from(config_dir.join("base"));

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;
    let env_specific_config = File::from(config_dir.join(environment.as_str()));

    let env_config = config::Environment::with_prefix("app")
        .prefix_separator("_")
        .separator("__");

    let settings = Config::builder()
        .add_source(base_config)
        .add_source(env_specific_config)
        .add_source(env_config)
        .build()?;

    settings.try_deserialize()
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`"
            )),
        }
    }
}
