use crate::error::ScrapeError;
use reqwest::Client;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Source of raw results-page bodies
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Fetch the body at `url`; non-success responses are errors
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Fetches pages with a single HTTP GET each, no retries
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        ::log::debug!("GET {}", url);

        let network = |source| ScrapeError::Network {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Consumes the response, releasing the connection once the body is read
        response.text().await.map_err(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one connection with the given raw HTTP response
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 13\r\nConnection: close\r\n\r\n<p>cars</p>\r\n",
        )
        .await;

        let body = HttpSource::new().unwrap().fetch(&url).await.unwrap();
        assert_eq!(body, "<p>cars</p>\r\n");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let url = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        let err = HttpSource::new().unwrap().fetch(&url).await.unwrap_err();
        match err {
            ScrapeError::HttpStatus { url: failed, status } => {
                assert_eq!(status, 503);
                assert_eq!(failed, url);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_refused_connection_is_a_network_error() {
        let err = HttpSource::new()
            .unwrap()
            .fetch("http://127.0.0.1:1/")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::Network { ref url, .. } if url == "http://127.0.0.1:1/"
        ));
    }
}
