use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub email: EmailConfig,
    pub sms: SmsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Каталог собранного фронтенда (index.html, wasm, tabs/*.html)
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    pub api_url: String,
    pub from: String,
    /// Куда отправлять уведомления о новых контактах
    pub admin_to: String,
    /// Заполняется только из окружения (RESEND_API_KEY)
    #[serde(skip)]
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmsConfig {
    pub api_url: String,
    #[serde(default)]
    pub messaging_service_sid: String,
    /// TWILIO_ACCOUNT_SID
    #[serde(skip)]
    pub account_sid: Option<String>,
    /// TWILIO_AUTH_TOKEN
    #[serde(skip)]
    pub auth_token: Option<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[email]
api_url = "https://api.resend.com"
from = "Naturafy <hola@naturafy.pe>"
admin_to = "contacto@naturafy.pe"

[sms]
api_url = "https://api.twilio.com"
messaging_service_sid = ""
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Secrets are never read from the file, only from the environment.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_file_config()?;
    apply_env(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

fn load_file_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Подставляет секреты и переопределения из окружения
fn apply_env(config: &mut Config, var: impl Fn(&str) -> Option<String>) {
    let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

    config.email.api_key = non_empty("RESEND_API_KEY");
    config.sms.account_sid = non_empty("TWILIO_ACCOUNT_SID");
    config.sms.auth_token = non_empty("TWILIO_AUTH_TOKEN");
    if let Some(sid) = non_empty("TWILIO_MESSAGING_SID") {
        config.sms.messaging_service_sid = sid;
    }

    if config.email.api_key.is_none() {
        tracing::warn!("RESEND_API_KEY is not set, email delivery will fail");
    }
    if config.sms.account_sid.is_none() || config.sms.auth_token.is_none() {
        tracing::warn!("TWILIO_ACCOUNT_SID / TWILIO_AUTH_TOKEN are not set, SMS delivery will fail");
    }
}

/// Resolves the static directory relative to the executable, like the config itself
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    // Fallback: relative to current directory (cargo run)
    dir.to_path_buf()
}
