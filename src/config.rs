use std::{env, path::PathBuf};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_SOURCE_URL: &str = "http://tednewardsandbox.site44.com/questions.json";
pub const DEFAULT_CACHE_DIR: &str = ".iquiz-cache";
pub const DEFAULT_CACHE_KEY: &str = "subjects";

#[derive(Clone, Debug)]
pub struct Config {
    pub source_url: String,
    pub cache_dir: PathBuf,
    pub cache_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            source_url: env::var("QUIZ_SOURCE_URL")
                .unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string()),
            cache_dir: env::var("QUIZ_CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CACHE_DIR)),
            cache_key: env::var("QUIZ_CACHE_KEY")
                .unwrap_or_else(|_| DEFAULT_CACHE_KEY.to_string()),
        }
    }

    /// Checks the values that would otherwise only fail on first use.
    pub fn validate(&self) -> AppResult<()> {
        reqwest::Url::parse(&self.source_url).map_err(|e| {
            AppError::Configuration(format!(
                "QUIZ_SOURCE_URL '{}' is not a valid URL: {}",
                self.source_url, e
            ))
        })?;

        if self.cache_key.trim().is_empty() {
            return Err(AppError::Configuration(
                "QUIZ_CACHE_KEY must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            source_url: "http://localhost:9999/questions.json".to_string(),
            cache_dir: env::temp_dir().join("iquiz-test-cache"),
            cache_key: "subjects-test".to_string(),
        }
    }
}
