use crate::{data::geojson::GeoJson, Error, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::path::Path;
use std::time::Duration;

/// Shared HTTP client, identified by a `quakemap/<version>` User-Agent
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent(concat!("quakemap/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            log::warn!("falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        })
});

/// Anything that can produce the earthquake feed document
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Human-readable origin, used in logs and fallback messages
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<GeoJson>;
}

/// Fetches the feed over HTTP
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    url: String,
    timeout: Duration,
}

impl HttpFeedSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<GeoJson> {
        log::info!("fetching earthquake feed from {}", self.url);
        let response = HTTP_CLIENT
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        log::debug!("downloaded {} bytes from {}", body.len(), self.url);
        parse_document(body).await
    }
}

/// Serves a document held in memory
#[derive(Debug, Clone)]
pub struct StaticFeedSource {
    label: String,
    body: String,
}

impl StaticFeedSource {
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
        }
    }

    /// Reads a GeoJSON file from disk up front
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path)?;
        Ok(Self::new(path.display().to_string(), body))
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    fn describe(&self) -> String {
        self.label.clone()
    }

    async fn fetch(&self) -> Result<GeoJson> {
        log::debug!("reading earthquake feed from {}", self.label);
        parse_document(self.body.clone()).await
    }
}

/// Parses a feed body, off the async workers when tokio is available
async fn parse_document(body: String) -> Result<GeoJson> {
    #[cfg(feature = "tokio-runtime")]
    {
        if tokio::runtime::Handle::try_current().is_ok() {
            return tokio::task::spawn_blocking(move || GeoJson::from_str(&body))
                .await
                .map_err(|e| Error::ParseError(format!("parse task failed: {}", e)))?;
        }
    }

    GeoJson::from_str(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticFeedSource::new(
            "inline",
            r#"{"type": "FeatureCollection", "features": []}"#,
        );
        assert_eq!(source.describe(), "inline");
        let doc = source.fetch().await.unwrap();
        assert_eq!(doc.feature_count(), 0);
    }

    #[tokio::test]
    async fn test_static_source_bad_json() {
        let source = StaticFeedSource::new("inline", "not json");
        assert!(matches!(source.fetch().await, Err(Error::ParseError(_))));
    }

    #[test]
    fn test_static_source_missing_file() {
        assert!(matches!(
            StaticFeedSource::from_file("/definitely/not/here.geojson"),
            Err(Error::Io(_))
        ));
    }

    /// Answers a single HTTP request on a local port with `response`
    async fn serve_once(response: &'static str) -> std::net::SocketAddr {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        addr
    }

    #[tokio::test]
    async fn test_http_source_non_success_status() {
        let addr = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        let url = format!("http://{}/summary/all_week.geojson", addr);

        match HttpFeedSource::new(url.clone(), Duration::from_secs(5)).fetch().await {
            Err(Error::Http { status, url: failed }) => {
                assert_eq!(status, 503);
                assert_eq!(failed, url);
            }
            other => panic!("expected an HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_http_source_success() {
        let addr = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/geo+json\r\nContent-Length: 46\r\nConnection: close\r\n\r\n{\"type\":\"FeatureCollection\",\"features\":[]}",
        )
        .await;

        let source = HttpFeedSource::new(format!("http://{}/feed.geojson", addr), Duration::from_secs(5));
        assert_eq!(source.fetch().await.unwrap().feature_count(), 0);
    }

    #[tokio::test]
    async fn test_http_source_unreachable() {
        // Port 9 (discard) on localhost is closed on test machines
        let source = HttpFeedSource::new("http://127.0.0.1:9/feed.geojson", Duration::from_secs(2));
        assert!(source.fetch().await.is_err());
    }
}
