use std::time::Duration;

use futures_util::StreamExt;
use payroll_core::Post;
use payroll_logging::{payroll_debug, payroll_info};
use reqwest::header::CONTENT_TYPE;

use crate::{FailureKind, FetchError};

/// Page size requested from the posts endpoint; only the first page is read.
pub const POSTS_PER_PAGE: u32 = 100;

const POSTS_PATH: &str = "wp-json/wp/v2/posts";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Site root the posts endpoint hangs off, e.g. `https://pittnews.com`.
    pub api_base: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            api_base: payroll_core::DEFAULT_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 20 * 1024 * 1024,
            allowed_content_types: vec!["application/json".to_string()],
        }
    }
}

impl FetchSettings {
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
pub trait PostFetcher: Send + Sync {
    /// Latest posts filed under `category_id`, newest first.
    async fn fetch_posts(&self, category_id: u32) -> Result<Vec<Post>, FetchError>;
}

/// `{api_base}/wp-json/wp/v2/posts?categories={id}&per_page=100`
pub fn posts_url(api_base: &str, category_id: u32) -> Result<reqwest::Url, FetchError> {
    let endpoint = format!("{}/{}", api_base.trim_end_matches('/'), POSTS_PATH);
    reqwest::Url::parse_with_params(
        &endpoint,
        &[
            ("categories", category_id.to_string()),
            ("per_page", POSTS_PER_PAGE.to_string()),
        ],
    )
    .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
}

#[derive(Debug, Clone)]
pub struct ReqwestPostFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestPostFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    async fn download(&self, url: reqwest::Url) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl PostFetcher for ReqwestPostFetcher {
    async fn fetch_posts(&self, category_id: u32) -> Result<Vec<Post>, FetchError> {
        let url = posts_url(&self.settings.api_base, category_id)?;
        payroll_info!("Fetching posts for category {} from {}", category_id, url);

        let bytes = self.download(url).await?;
        payroll_debug!("Category {} feed is {} bytes", category_id, bytes.len());

        serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::InvalidJson, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
