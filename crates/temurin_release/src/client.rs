//! HTTP client for the Adoptium `feature_releases` endpoint.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::cache::ReleaseCache;
use crate::error::{ReleaseError, ReleaseResult};
use crate::models::Release;

/// Production API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.adoptium.net";

const USER_AGENT: &str = "Adoptium Dockerfile Updater";

/// Source of GA releases for the Dockerfile generator.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Latest GA release for a (version, image type, OS family) tuple.
    async fn latest_release(
        &self,
        version: u32,
        image_type: &str,
        os_family: &str,
    ) -> ReleaseResult<Release>;
}

/// Adoptium API client.
pub struct AdoptiumClient {
    base_url: String,
    client: reqwest::Client,
    cache: Option<ReleaseCache>,
}

impl AdoptiumClient {
    pub fn new(base_url: impl Into<String>) -> ReleaseResult<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            cache: None,
        })
    }

    pub fn with_cache(mut self, cache: ReleaseCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// URL of the newest GA release, one result per page.
    pub fn release_url(&self, version: u32, image_type: &str, os_family: &str) -> String {
        format!(
            "{}/v3/assets/feature_releases/{}/ga?page=0&image_type={}&os={}&page_size=1&vendor=eclipse",
            self.base_url, version, image_type, os_family
        )
    }

    async fn fetch_body(
        &self,
        version: u32,
        image_type: &str,
        os_family: &str,
    ) -> ReleaseResult<String> {
        if let Some(body) = self
            .cache
            .as_ref()
            .and_then(|c| c.get(version, image_type, os_family))
        {
            debug!("Using cached release for {} {} {}", version, image_type, os_family);
            return Ok(body);
        }

        let url = self.release_url(version, image_type, os_family);
        info!("Fetching {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ReleaseError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        if let Some(cache) = &self.cache {
            cache.put(version, image_type, os_family, &body)?;
        }

        Ok(body)
    }
}

#[async_trait]
impl ReleaseSource for AdoptiumClient {
    async fn latest_release(
        &self,
        version: u32,
        image_type: &str,
        os_family: &str,
    ) -> ReleaseResult<Release> {
        let body = self.fetch_body(version, image_type, os_family).await?;
        let releases: Vec<Release> = serde_json::from_str(&body)?;

        releases
            .into_iter()
            .next()
            .ok_or_else(|| ReleaseError::NoRelease {
                version,
                image_type: image_type.to_string(),
                os_family: os_family.to_string(),
            })
    }
}
