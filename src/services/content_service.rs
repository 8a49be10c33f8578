use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Subject,
        dto::{decode_payload, encode_payload},
    },
    repositories::{CacheStore, ContentSource},
};

pub const CONNECTION_ISSUE_NOTICE: &str = "Could not load quizzes. Check your connection or the \
     question source URL. Previously downloaded quizzes are shown if any are available.";

#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum LoadOrigin {
    Remote,
    Cache,
    Empty,
}

#[derive(Clone, Debug)]
pub struct LoadOutcome {
    pub subjects: Arc<Vec<Subject>>,
    pub connection_issue: bool,
    pub origin: LoadOrigin,
}

impl LoadOutcome {
    pub fn notice(&self) -> Option<&'static str> {
        self.connection_issue.then_some(CONNECTION_ISSUE_NOTICE)
    }
}

/// Acquires subjects from the remote source, falling back to the last cached
/// payload, and holds the currently published list.
pub struct ContentService {
    source: Arc<dyn ContentSource>,
    cache: Arc<dyn CacheStore>,
    default_url: String,
    cache_key: String,
    published: RwLock<Arc<Vec<Subject>>>,
    load_lock: Mutex<()>,
}

impl ContentService {
    pub fn new(
        source: Arc<dyn ContentSource>,
        cache: Arc<dyn CacheStore>,
        default_url: &str,
        cache_key: &str,
    ) -> Self {
        Self {
            source,
            cache,
            default_url: default_url.to_string(),
            cache_key: cache_key.to_string(),
            published: RwLock::new(Arc::new(Vec::new())),
            load_lock: Mutex::new(()),
        }
    }

    pub fn default_url(&self) -> &str {
        &self.default_url
    }

    /// Fetches subjects, publishing either the fresh list, the cached list or
    /// an empty list. Never fails; problems surface as `connection_issue`.
    pub async fn load(&self, source_url: Option<&str>) -> LoadOutcome {
        let _guard = self.load_lock.lock().await;
        let url = source_url.unwrap_or(self.default_url.as_str());

        match self.fetch_and_decode(url).await {
            Ok(subjects) => {
                self.store_in_cache(&subjects).await;
                let subjects = self.publish(subjects).await;
                log::info!("Published {} subjects from {}", subjects.len(), url);
                LoadOutcome {
                    subjects,
                    connection_issue: false,
                    origin: LoadOrigin::Remote,
                }
            }
            Err(e) => {
                log::warn!("Loading quizzes from {} failed ({}), using cache", url, e);
                self.fall_back().await
            }
        }
    }

    pub async fn current_subjects(&self) -> Arc<Vec<Subject>> {
        self.published.read().await.clone()
    }

    /// Publishes whatever the cache holds without raising a notice. Returns
    /// the number of subjects published.
    pub async fn restore_cached(&self) -> usize {
        let _guard = self.load_lock.lock().await;
        match self.read_cache().await {
            Ok(subjects) => {
                let count = subjects.len();
                self.publish(subjects).await;
                log::info!("Restored {} cached subjects", count);
                count
            }
            Err(e) => {
                log::debug!("Nothing restored from cache: {}", e);
                0
            }
        }
    }

    pub async fn find_subject(&self, title: &str) -> Option<Subject> {
        let subjects = self.current_subjects().await;
        subjects
            .iter()
            .find(|s| s.title.eq_ignore_ascii_case(title.trim()))
            .cloned()
    }

    async fn fetch_and_decode(&self, url: &str) -> AppResult<Vec<Subject>> {
        let body = self.source.fetch(url).await?;
        decode_payload(&body)
    }

    async fn fall_back(&self) -> LoadOutcome {
        match self.read_cache().await {
            Ok(subjects) => {
                let subjects = self.publish(subjects).await;
                log::info!("Published {} cached subjects", subjects.len());
                LoadOutcome {
                    subjects,
                    connection_issue: true,
                    origin: LoadOrigin::Cache,
                }
            }
            Err(e) => {
                log::warn!("{}", e);
                let subjects = self.publish(Vec::new()).await;
                LoadOutcome {
                    subjects,
                    connection_issue: true,
                    origin: LoadOrigin::Empty,
                }
            }
        }
    }

    async fn read_cache(&self) -> AppResult<Vec<Subject>> {
        let cached = self
            .cache
            .get(&self.cache_key)
            .await
            .map_err(|e| AppError::NoCacheAvailable(e.to_string()))?
            .ok_or_else(|| {
                AppError::NoCacheAvailable(format!("no entry under '{}'", self.cache_key))
            })?;

        decode_payload(&cached).map_err(|e| {
            AppError::NoCacheAvailable(format!("cached entry is unreadable: {}", e))
        })
    }

    async fn store_in_cache(&self, subjects: &[Subject]) {
        let result = match encode_payload(subjects) {
            Ok(body) => self.cache.set(&self.cache_key, body).await,
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            log::warn!("Failed to update quiz cache: {}", e);
        }
    }

    async fn publish(&self, subjects: Vec<Subject>) -> Arc<Vec<Subject>> {
        let subjects = Arc::new(subjects);
        *self.published.write().await = subjects.clone();
        subjects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dto::SubjectDto;
    use crate::repositories::{
        cache_store::MockCacheStore, content_source::MockContentSource, InMemoryCacheStore,
    };
    use crate::test_utils::fixtures::{sample_payload_json, SAMPLE_URL};

    fn service(source: MockContentSource, cache: Arc<dyn CacheStore>) -> ContentService {
        ContentService::new(Arc::new(source), cache, SAMPLE_URL, "subjects")
    }

    fn failing_source() -> MockContentSource {
        let mut source = MockContentSource::new();
        source
            .expect_fetch()
            .returning(|_| Err(AppError::Network("connection refused".into())));
        source
    }

    fn wire(subjects: &[Subject]) -> Vec<SubjectDto> {
        subjects.iter().map(SubjectDto::from).collect()
    }

    #[tokio::test]
    async fn load_success_publishes_and_caches() {
        let mut source = MockContentSource::new();
        source
            .expect_fetch()
            .withf(|url| url == SAMPLE_URL)
            .times(1)
            .returning(|_| Ok(sample_payload_json()));

        let mut cache = MockCacheStore::new();
        cache
            .expect_set()
            .withf(|key, value| key == "subjects" && value.contains("Science"))
            .times(1)
            .returning(|_, _| Ok(()));
        cache.expect_get().never();

        let service = service(source, Arc::new(cache));
        let outcome = service.load(None).await;

        assert!(!outcome.connection_issue);
        assert_eq!(outcome.origin, LoadOrigin::Remote);
        assert_eq!(outcome.subjects.len(), 3);
        assert!(outcome.notice().is_none());
        assert_eq!(service.current_subjects().await.len(), 3);
    }

    #[tokio::test]
    async fn load_uses_explicit_url() {
        let mut source = MockContentSource::new();
        source
            .expect_fetch()
            .withf(|url| url == "http://example.com/other.json")
            .times(1)
            .returning(|_| Ok("[]".to_string()));

        let service = service(source, Arc::new(InMemoryCacheStore::new()));
        let outcome = service.load(Some("http://example.com/other.json")).await;

        assert_eq!(outcome.origin, LoadOrigin::Remote);
        assert!(outcome.subjects.is_empty());
    }

    #[tokio::test]
    async fn failed_load_falls_back_to_cache() {
        let cache = InMemoryCacheStore::new();
        cache
            .set("subjects", sample_payload_json())
            .await
            .expect("seed cache");

        let service = service(failing_source(), Arc::new(cache));
        let outcome = service.load(None).await;

        assert!(outcome.connection_issue);
        assert_eq!(outcome.origin, LoadOrigin::Cache);
        assert_eq!(outcome.notice(), Some(CONNECTION_ISSUE_NOTICE));
        assert_eq!(outcome.subjects.len(), 3);
    }

    #[tokio::test]
    async fn failed_load_without_cache_publishes_empty() {
        let mut cache = MockCacheStore::new();
        cache.expect_get().returning(|_| Ok(None));
        cache.expect_set().never();

        let service = service(failing_source(), Arc::new(cache));
        let outcome = service.load(None).await;

        assert!(outcome.connection_issue);
        assert_eq!(outcome.origin, LoadOrigin::Empty);
        assert!(outcome.subjects.is_empty());
        assert!(service.current_subjects().await.is_empty());
    }

    #[tokio::test]
    async fn decode_failure_falls_back_and_keeps_cache() {
        let mut source = MockContentSource::new();
        source.expect_fetch().returning(|_| {
            Ok(r#"[{"title":"Marvel","desc":"Heroes","questions":[{"text":"Q","answer":"5","answers":["a","b","c","d"]}]}]"#.to_string())
        });

        let cache = InMemoryCacheStore::new();
        cache
            .set("subjects", sample_payload_json())
            .await
            .expect("seed cache");

        let service = service(source, Arc::new(cache.clone()));
        let outcome = service.load(None).await;

        assert_eq!(outcome.origin, LoadOrigin::Cache);
        assert_eq!(
            cache.get("subjects").await.expect("get").as_deref(),
            Some(sample_payload_json().as_str())
        );
    }

    #[tokio::test]
    async fn unreadable_cache_is_treated_as_missing() {
        let cache = InMemoryCacheStore::new();
        cache
            .set("subjects", "{corrupt".to_string())
            .await
            .expect("seed cache");

        let service = service(failing_source(), Arc::new(cache));
        let outcome = service.load(None).await;

        assert_eq!(outcome.origin, LoadOrigin::Empty);
        assert!(outcome.connection_issue);
    }

    #[tokio::test]
    async fn cache_write_failure_still_publishes_fresh_data() {
        let mut source = MockContentSource::new();
        source
            .expect_fetch()
            .returning(|_| Ok(sample_payload_json()));

        let mut cache = MockCacheStore::new();
        cache
            .expect_set()
            .returning(|_, _| Err(AppError::Cache("read-only filesystem".into())));

        let service = service(source, Arc::new(cache));
        let outcome = service.load(None).await;

        assert_eq!(outcome.origin, LoadOrigin::Remote);
        assert!(!outcome.connection_issue);
        assert_eq!(outcome.subjects.len(), 3);
    }

    #[tokio::test]
    async fn fallback_republishes_previous_payload() {
        let cache = Arc::new(InMemoryCacheStore::new());

        let mut first = MockContentSource::new();
        first
            .expect_fetch()
            .returning(|_| Ok(sample_payload_json()));
        let fresh = service(first, cache.clone()).load(None).await;

        let fallback = service(failing_source(), cache).load(None).await;

        assert!(fallback.connection_issue);
        assert_eq!(wire(&fallback.subjects), wire(&fresh.subjects));
    }

    #[tokio::test]
    async fn restore_cached_publishes_without_fetching() {
        let mut source = MockContentSource::new();
        source.expect_fetch().never();

        let cache = InMemoryCacheStore::new();
        cache
            .set("subjects", sample_payload_json())
            .await
            .expect("seed cache");

        let service = service(source, Arc::new(cache));

        assert_eq!(service.restore_cached().await, 3);
        assert_eq!(service.current_subjects().await.len(), 3);
    }

    #[tokio::test]
    async fn restore_cached_with_empty_cache_publishes_nothing() {
        let mut source = MockContentSource::new();
        source.expect_fetch().never();

        let service = service(source, Arc::new(InMemoryCacheStore::new()));

        assert_eq!(service.restore_cached().await, 0);
        assert!(service.current_subjects().await.is_empty());
    }

    #[tokio::test]
    async fn find_subject_ignores_case() {
        let mut source = MockContentSource::new();
        source
            .expect_fetch()
            .returning(|_| Ok(sample_payload_json()));

        let service = service(source, Arc::new(InMemoryCacheStore::new()));
        service.load(None).await;

        let found = service.find_subject("science").await;
        assert_eq!(found.map(|s| s.title), Some("Science".to_string()));
        assert!(service.find_subject("History").await.is_none());
    }
}
