use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{FileCacheStore, HttpContentSource},
    services::ContentService,
};

#[derive(Clone)]
pub struct AppState {
    pub content_service: Arc<ContentService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("iquiz/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let source = Arc::new(HttpContentSource::new(client));
        let cache = Arc::new(FileCacheStore::new(config.cache_dir.clone()));

        let content_service = Arc::new(ContentService::new(
            source,
            cache,
            &config.source_url,
            &config.cache_key,
        ));

        Ok(Self {
            content_service,
            config: Arc::new(config),
        })
    }
}
