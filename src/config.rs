use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub debug: bool,
    pub log_level: String,
    pub max_body_size: usize,
    pub cors_origins: Vec<String>,
    pub sheets: SheetsConfig,
    pub mail: MailConfig,
}

#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub credentials_file: Option<PathBuf>,
    pub spreadsheet_id: Option<String>,
    pub append_range: String,
    pub read_range: String,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub sender: Option<String>,
    pub password: Option<String>,
    pub recipient: Option<String>,
}

impl MailConfig {
    pub fn sender_configured(&self) -> bool {
        self.sender.is_some()
    }

    pub fn recipient_configured(&self) -> bool {
        self.recipient.is_some()
    }
}

pub const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "http://127.0.0.1:5500",
    "http://localhost:5500",
    "http://127.0.0.1:5000",
];

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("APP_HOST", "127.0.0.1")
            .parse()
            .map_err(|e| format!("Invalid APP_HOST: {e}"))?;

        let port: u16 = env_or("APP_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid APP_PORT: {e}"))?;

        let debug = parse_bool("APP_DEBUG", &env_or("APP_DEBUG", "false"))?;

        let log_level = env_or("APP_LOG_LEVEL", "info");

        let max_body_size: usize = env_or("APP_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid APP_MAX_BODY_SIZE: {e}"))?;

        let cors_origins = match env_opt("APP_CORS_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        let sheets = SheetsConfig {
            credentials_file: env_opt("GOOGLE_APPLICATION_CREDENTIALS").map(PathBuf::from),
            spreadsheet_id: env_opt("SPREADSHEET_ID"),
            append_range: env_or("SHEETS_APPEND_RANGE", "Página1!A1"),
            read_range: env_or("SHEETS_READ_RANGE", "Página1!A:F"),
            api_base: env_or("SHEETS_API_BASE", "https://sheets.googleapis.com"),
        };

        let mail = MailConfig {
            smtp_host: env_or("SMTP_HOST", "smtp.gmail.com"),
            smtp_port: env_or("SMTP_PORT", "587")
                .parse()
                .map_err(|e| format!("Invalid SMTP_PORT: {e}"))?,
            sender: env_opt("EMAIL_REMETENTE"),
            password: env_opt("EMAIL_SENHA"),
            recipient: env_opt("EMAIL_DESTINATARIO"),
        };

        Ok(Config {
            host,
            port,
            debug,
            log_level,
            max_body_size,
            cors_origins,
            sheets,
            mail,
        })
    }
}

/// Unset and blank variables are both treated as absent.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_string())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("Invalid {key}: expected a boolean, got '{other}'")),
    }
}
