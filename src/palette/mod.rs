//! Remote palette support
//!
//! This module provides:
//! - Palette model and its wire envelope
//! - Lenient hex color parsing
//! - HTTP fetcher returning a palette or a typed failure

pub mod color;
pub mod fetch;
pub mod models;

pub use color::{Rgb, hex_to_rgb};
pub use fetch::{FetchError, PaletteFetcher};
pub use models::{Palette, ResolvedPalette};

/// Minimal HTTP responders for exercising the fetcher without a network.
#[cfg(test)]
pub(crate) mod testing {
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one request with `status` and `body` after `delay`, then close.
    /// Returns the URL to request.
    pub async fn serve_once(status: &str, body: &str, delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        tokio::spawn(async move {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => buf.extend_from_slice(&chunk[..n]),
                }
            }
            tokio::time::sleep(delay).await;
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        });

        format!("http://{addr}/v3/b/palette/latest")
    }

    /// A URL on a local port nobody is listening on.
    pub async fn refused_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/latest")
    }
}
