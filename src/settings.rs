use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use jsonwebtoken::{DecodingKey, EncodingKey};
use std::{env, fmt, str::FromStr, time::Duration};
use uuid::Uuid;
use zeroize::Zeroizing;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default)]
    pub database_url: String,

    #[serde(default)]
    pub redis_url: Option<String>,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    #[serde(default)]
    pub jwt_secret: String,

    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration_minutes: i64,

    #[serde(default)]
    pub refresh_token_secret: String,

    #[serde(default = "default_refresh_expiration")]
    pub refresh_token_exp_days: i64,

    /// Profile shown on `/` when nobody is signed in and no `user_name` is given.
    #[serde(default)]
    pub default_user_id: Option<Uuid>,

    /// Mail API endpoint. Without it outgoing mail is only logged.
    #[serde(default)]
    pub mail_api_url: Option<String>,

    #[serde(default)]
    pub mail_api_key: Option<String>,

    #[serde(default = "default_mail_timeout")]
    pub mail_timeout_secs: u64,

    /// Contact messages allowed per sender address per hour (Redis only).
    #[serde(default = "default_contact_rate_limit")]
    pub contact_rate_limit: u32,

    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,

    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-Site".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_jwt_expiration() -> i64 {
    15
}
fn default_refresh_expiration() -> i64 {
    7
}
fn default_mail_timeout() -> u64 {
    10
}
fn default_contact_rate_limit() -> u32 {
    5
}
fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}
fn default_true() -> bool {
    true
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins")
                    .ignore_empty(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.database_url.trim().is_empty() {
            errors.push("DATABASE_URL cannot be empty");
        }
        if self.jwt_secret.len() < 32 {
            errors.push("JWT_SECRET must be at least 32 characters");
        }
        if self.refresh_token_secret.len() < 32 {
            errors.push("REFRESH_TOKEN_SECRET must be at least 32 characters");
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production");
        }
        if self.is_production() && self.mail_api_url.is_none() {
            errors.push("MAIL_API_URL must be set in production");
        }
        if self.mail_timeout_secs == 0 {
            errors.push("MAIL_TIMEOUT_SECS must be greater than zero");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn mail_timeout(&self) -> Duration {
        Duration::from_secs(self.mail_timeout_secs)
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else if self.len() < 32 {
            "[TOO_SHORT]"
        } else {
            "[REDACTED]"
        }
    }
}

impl Redact for String {
    fn redact(&self) -> &str {
        self.as_str().redact()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("database_url", &self.database_url.redact())
            .field("redis_url", &self.redis_url.as_ref().map(|_| "[REDACTED]"))
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("jwt_secret", &self.jwt_secret.redact())
            .field("jwt_expiration_minutes", &self.jwt_expiration_minutes)
            .field("refresh_token_secret", &self.refresh_token_secret.redact())
            .field("refresh_token_exp_days", &self.refresh_token_exp_days)
            .field("default_user_id", &self.default_user_id)
            .field("mail_api_url", &self.mail_api_url)
            .field("mail_api_key", &self.mail_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("mail_timeout_secs", &self.mail_timeout_secs)
            .field("contact_rate_limit", &self.contact_rate_limit)
            .field("log_format", &self.log_format)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub refresh_encoding: EncodingKey,
    pub refresh_decoding: DecodingKey,
}

impl From<&AppConfig> for JwtKeys {
    fn from(config: &AppConfig) -> Self {
        let jwt_secret = Zeroizing::new(config.jwt_secret.clone());
        let refresh_secret = Zeroizing::new(config.refresh_token_secret.clone());

        JwtKeys {
            encoding: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(jwt_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(refresh_secret.as_bytes()),
        }
    }
}

impl fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtKeys")
            .field("encoding", &"[REDACTED]")
            .field("decoding", &"[REDACTED]")
            .field("refresh_encoding", &"[REDACTED]")
            .field("refresh_decoding", &"[REDACTED]")
            .finish()
    }
}
