//! Environment configuration.
//!
//! Every setting has a hardcoded fallback so the service starts with an
//! empty environment; only malformed values are errors.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::render::common::get_static_dir;
use crate::render::{Assets, DocumentFormat};

pub const DEFAULT_API_URL: &str = "https://api.brevo.com/v3/smtp/email";
pub const DEFAULT_RECIPIENT: &str = "submissions@example.com";
pub const DEFAULT_SENDER: &str = "no-reply@example.com";
pub const DEFAULT_SENDER_NAME: &str = "DS-160 Form";
pub const DEFAULT_TITLE: &str = "DS-160 Survey Submission Report";
pub const DEFAULT_ATTACHMENT_PREFIX: &str = "DS-160_Submission";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
    #[error("DOCUMENT_FORMAT: {0}")]
    InvalidFormat(String),
    #[error("{name} must be true or false, got '{value}'")]
    InvalidFlag { name: &'static str, value: String },
}

/// Email API settings.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_key: String,
    pub api_url: String,
    pub sender_email: String,
    pub sender_name: String,
    pub recipient_email: String,
    pub timeout_secs: u64,
}

/// Document generation settings.
#[derive(Debug, Clone)]
pub struct DocumentConfig {
    pub format: DocumentFormat,
    pub title: String,
    pub attachment_prefix: String,
    pub assets_dir: PathBuf,
    pub include_header_image: bool,
}

impl DocumentConfig {
    pub fn assets(&self) -> Assets {
        Assets::new(self.assets_dir.clone(), self.include_header_image)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Empty means any origin may post the form.
    pub allowed_origins: Vec<String>,
    pub mail: MailConfig,
    pub document: DocumentConfig,
}

impl AppConfig {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Parse configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let get_or = |name: &str, default: &str| get(name).unwrap_or_else(|| default.to_string());

        let port = parse_number(get("PORT"), "PORT", 8080u16)?;
        let timeout_secs = parse_number(get("EMAIL_TIMEOUT_SECS"), "EMAIL_TIMEOUT_SECS", 30u64)?;

        let format = match get("DOCUMENT_FORMAT") {
            Some(value) => value.parse().map_err(ConfigError::InvalidFormat)?,
            None => DocumentFormat::Docx,
        };

        let include_header_image = match get("INCLUDE_HEADER_IMAGE") {
            Some(value) => parse_flag(&value, "INCLUDE_HEADER_IMAGE")?,
            None => true,
        };

        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let api_key = get("BREVO_API_KEY")
            .or_else(|| get("SENDGRID_API_KEY"))
            .unwrap_or_default();

        Ok(Self {
            host: get_or("HOST", "0.0.0.0"),
            port,
            allowed_origins,
            mail: MailConfig {
                api_key,
                api_url: get_or("BREVO_API_URL", DEFAULT_API_URL),
                sender_email: get_or("SENDER_EMAIL", DEFAULT_SENDER),
                sender_name: get_or("SENDER_NAME", DEFAULT_SENDER_NAME),
                recipient_email: get_or("RECIPIENT_EMAIL", DEFAULT_RECIPIENT),
                timeout_secs,
            },
            document: DocumentConfig {
                format,
                title: get_or("REPORT_TITLE", DEFAULT_TITLE),
                attachment_prefix: get_or("ATTACHMENT_PREFIX", DEFAULT_ATTACHMENT_PREFIX),
                assets_dir: get("ASSETS_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| get_static_dir().to_path_buf()),
                include_header_image,
            },
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    value: Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        None => Ok(default),
    }
}

fn parse_flag(value: &str, name: &'static str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}
