//! Palette fetcher
//!
//! One GET per call, decoded into a [`Palette`]. No retries and no timeout
//! beyond what the transport applies.

use super::models::{FetchResponse, Palette};
use crate::config::HttpConfig;
use anyhow::Context;
use thiserror::Error;
use tokio::task::JoinHandle;

/// Why a fetch produced no palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure, bad URL, or non-success status.
    #[error("network error: {0}")]
    Network(String),
    /// Body did not match the `{"record": {...}}` shape.
    #[error("decode error: {0}")]
    Decode(String),
}

#[derive(Debug, Clone)]
pub struct PaletteFetcher {
    client: reqwest::Client,
}

impl PaletteFetcher {
    pub fn new(cfg: &HttpConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(cfg.user_agent.as_str());
        if !cfg.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().context("build reqwest client")?;
        Ok(Self { client })
    }

    /// Fetch and decode the palette at `url`.
    pub async fn fetch(&self, url: &str) -> Result<Palette, FetchError> {
        let result = self.get_palette(url).await;
        match &result {
            Ok(palette) => tracing::info!(url, ?palette, "fetched palette"),
            Err(e) => tracing::warn!(url, error = %e, "palette fetch failed"),
        }
        result
    }

    /// Spawn a fetch and hand its result to `on_complete`, exactly once.
    pub fn fetch_with<F>(&self, url: impl Into<String>, on_complete: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Palette, FetchError>) + Send + 'static,
    {
        let fetcher = self.clone();
        let url = url.into();
        tokio::spawn(async move {
            let result = fetcher.fetch(&url).await;
            on_complete(result);
        })
    }

    /// Decode a response body. Field values pass through untouched.
    pub fn decode(body: &[u8]) -> Result<Palette, FetchError> {
        serde_json::from_slice::<FetchResponse>(body)
            .map(|env| env.record)
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    async fn get_palette(&self, url: &str) -> Result<Palette, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(network)?
            .error_for_status()
            .map_err(network)?;
        let body = response.bytes().await.map_err(network)?;
        Self::decode(&body)
    }
}

fn network(e: reqwest::Error) -> FetchError {
    // reqwest's top-level message rarely says what went wrong; append causes.
    let mut reason = e.to_string();
    let mut source = std::error::Error::source(&e);
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    FetchError::Network(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::testing::{refused_url, serve_once};
    use std::time::Duration;

    const BODY: &str = r#"{"record":{"light_primary":"FF6200EE","light_on_primary":"FFFFFFFF","dark_primary":"FFBB86FC","dark_on_primary":"FF000000"}}"#;

    fn fetcher() -> PaletteFetcher {
        let cfg = HttpConfig {
            system_proxy: false,
            ..HttpConfig::default()
        };
        PaletteFetcher::new(&cfg).unwrap()
    }

    #[test]
    fn test_decode_passes_fields_through() {
        let p = PaletteFetcher::decode(BODY.as_bytes()).unwrap();
        assert_eq!(p.light_primary(), "FF6200EE");
        assert_eq!(p.light_on_primary(), "FFFFFFFF");
        assert_eq!(p.dark_primary(), "FFBB86FC");
        assert_eq!(p.dark_on_primary(), "FF000000");
    }

    #[test]
    fn test_decode_keeps_odd_widths_verbatim() {
        let body = r##"{"record":{"light_primary":"fff","light_on_primary":"FFFFFFF","dark_primary":"#00ff00","dark_on_primary":""}}"##;
        let p = PaletteFetcher::decode(body.as_bytes()).unwrap();
        assert_eq!(p, Palette::new("fff", "FFFFFFF", "#00ff00", ""));
    }

    #[test]
    fn test_decode_ignores_extra_keys() {
        let body = r#"{"record":{"light_primary":"1","light_on_primary":"2","dark_primary":"3","dark_on_primary":"4","accent":"5"},"metadata":{"id":"abc","private":false}}"#;
        let p = PaletteFetcher::decode(body.as_bytes()).unwrap();
        assert_eq!(p, Palette::new("1", "2", "3", "4"));
    }

    #[test]
    fn test_decode_missing_record() {
        let body = r#"{"light_primary":"1","light_on_primary":"2","dark_primary":"3","dark_on_primary":"4"}"#;
        let err = PaletteFetcher::decode(body.as_bytes()).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)), "{err:?}");
    }

    #[test]
    fn test_decode_missing_field() {
        let body = r#"{"record":{"light_primary":"1","light_on_primary":"2","dark_primary":"3"}}"#;
        let err = PaletteFetcher::decode(body.as_bytes()).unwrap_err();
        match err {
            FetchError::Decode(reason) => assert!(reason.contains("dark_on_primary"), "{reason}"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_wrong_types_and_garbage() {
        let wrong = r#"{"record":{"light_primary":1,"light_on_primary":"2","dark_primary":"3","dark_on_primary":"4"}}"#;
        assert!(matches!(
            PaletteFetcher::decode(wrong.as_bytes()),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(
            PaletteFetcher::decode(b"<html>rate limited</html>"),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(PaletteFetcher::decode(b""), Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve_once("200 OK", BODY, Duration::ZERO).await;
        let p = fetcher().fetch(&url).await.unwrap();
        assert_eq!(p, Palette::new("FF6200EE", "FFFFFFFF", "FFBB86FC", "FF000000"));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_decode_error() {
        let url = serve_once("200 OK", r#"{"message":"Bin not found"}"#, Duration::ZERO).await;
        let err = fetcher().fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_network_error() {
        let url = serve_once("404 Not Found", BODY, Duration::ZERO).await;
        let err = fetcher().fetch(&url).await.unwrap_err();
        match err {
            FetchError::Network(reason) => assert!(reason.contains("404"), "{reason}"),
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_network_error() {
        let url = refused_url().await;
        let err = fetcher().fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_is_network_error() {
        let err = fetcher().fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_fetch_with_delivers_once() {
        let url = serve_once("200 OK", BODY, Duration::ZERO).await;
        let (tx, rx) = tokio::sync::oneshot::channel();
        fetcher()
            .fetch_with(url, move |result| {
                let _ = tx.send(result);
            })
            .await
            .unwrap();
        let p = rx.await.unwrap().unwrap();
        assert_eq!(p.dark_primary(), "FFBB86FC");
    }

    #[tokio::test]
    async fn test_fetch_with_delivers_failure() {
        let url = refused_url().await;
        let (tx, rx) = tokio::sync::oneshot::channel();
        fetcher().fetch_with(url, move |result| {
            let _ = tx.send(result);
        });
        assert!(matches!(rx.await.unwrap(), Err(FetchError::Network(_))));
    }
}
