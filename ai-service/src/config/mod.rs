use chrono::NaiveDate;
use secrecy::SecretString;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Origins of the local web dashboard. Production deployments must set
/// `CORS_ALLOWED_ORIGINS` explicitly.
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:3001";

/// First forecast day when no start date is configured.
const DEFAULT_PREDICTION_START_DATE: &str = "2024-01-01";

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub common: core_config::Config,
    pub cors: CorsConfig,
    pub auth: AuthConfig,
    pub prediction: PredictionConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// Shared bearer token. When unset, any bearer token is accepted.
    pub api_token: Option<SecretString>,
}

#[derive(Debug, Clone)]
pub struct PredictionConfig {
    pub start_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl AiConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let start_date = env::var("PREDICTION_START_DATE")
            .unwrap_or_else(|_| DEFAULT_PREDICTION_START_DATE.to_string());

        Ok(AiConfig {
            common: common_config,
            cors: CorsConfig {
                allowed_origins: parse_origins(&get_env(
                    "CORS_ALLOWED_ORIGINS",
                    Some(DEFAULT_ALLOWED_ORIGINS),
                    is_prod,
                )?),
            },
            auth: AuthConfig {
                api_token: env::var("AI_SERVICE_API_TOKEN")
                    .ok()
                    .filter(|t| !t.is_empty())
                    .map(SecretString::new),
            },
            prediction: PredictionConfig {
                start_date: parse_date(&start_date)?,
            },
            observability: ObservabilityConfig {
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|e| !e.is_empty()),
            },
        })
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            cors: CorsConfig {
                allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
            },
            auth: AuthConfig::default(),
            prediction: PredictionConfig {
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                otlp_endpoint: None,
            },
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!(
            "PREDICTION_START_DATE must be YYYY-MM-DD, got '{}': {}",
            raw,
            e
        ))
    })
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
