use std::path::PathBuf;

use crate::{
    error::{config::ConfigError, AppError},
    model::war::RetentionPolicy,
};

const DEFAULT_TEMPLATE_COUNT: u32 = 3;

pub struct Config {
    pub database_url: String,

    /// Root holding `template/`, `history/` and `archive/`.
    pub war_storage_dir: PathBuf,
    pub war_template_count: u32,
    pub war_retention: RetentionPolicy,

    /// JSON file of the external user directory.
    pub users_file: PathBuf,
}

impl Config {
    /// Loads configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            war_storage_dir: required("WAR_STORAGE_DIR")?.into(),
            war_template_count: match optional("WAR_TEMPLATE_COUNT") {
                Some(value) => parse_template_count(&value)?,
                None => DEFAULT_TEMPLATE_COUNT,
            },
            war_retention: match optional("WAR_RETENTION") {
                Some(value) => value.parse().map_err(|reason| ConfigError::InvalidValue {
                    name: "WAR_RETENTION".to_string(),
                    value: value.clone(),
                    reason,
                })?,
                None => RetentionPolicy::default(),
            },
            users_file: required("USERS_FILE")?.into(),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_template_count(value: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        name: "WAR_TEMPLATE_COUNT".to_string(),
        value: value.to_string(),
        reason,
    };

    match value.trim().parse::<u32>() {
        Ok(0) => Err(invalid("at least one template is required".to_string())),
        Ok(count) => Ok(count),
        Err(e) => Err(invalid(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_count_must_be_positive() {
        assert_eq!(parse_template_count("4").unwrap(), 4);
        assert!(matches!(
            parse_template_count("0"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(parse_template_count("many").is_err());
    }
}
