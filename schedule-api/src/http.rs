use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use schedule_core::{RawResponse, Transport};

/// [`Transport`] over a shared `reqwest::Client`.
///
/// Works natively and in the browser (where reqwest goes through `fetch`).
/// No timeout is set; hangs are left to the underlying transport.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read(response: reqwest::Response) -> Result<RawResponse, String> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.to_string())?;
        debug!("HTTP {status}, {} bytes", body.len());
        Ok(RawResponse { status, body })
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, path: &str, body: String) -> Result<RawResponse, String> {
        let response = self
            .client
            .post(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::read(response).await
    }

    async fn get(&self, path: &str) -> Result<RawResponse, String> {
        let response = self
            .client
            .get(self.url(path))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::read(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schedule_core::{ApiClient, ApiError, Endpoint};
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one HTTP exchange; the handle yields the raw request.
    async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request_complete(&request) {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).into_owned()
        });
        (base, handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .filter_map(|l| l.split_once(':'))
            .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, v)| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    #[test]
    fn test_url_joining() {
        let transport = HttpTransport::new("http://localhost:8000/");
        assert_eq!(transport.base_url(), "http://localhost:8000");
        assert_eq!(
            transport.url(Endpoint::CommonWindow.path()),
            "http://localhost:8000/api/v1/schedule/analyze/common-window"
        );
    }

    #[tokio::test]
    async fn test_posts_json_and_reads_success() {
        let (base, server) = serve_once("200 OK", r#"{"success":true,"message":"ok","data":{"days_count":5}}"#).await;
        let client = ApiClient::new(HttpTransport::new(base));

        let outcome = client
            .submit(Endpoint::Parse, &json!({"name": "А-01-22"}))
            .await
            .unwrap();
        assert_eq!(outcome.data, Some(json!({"days_count": 5})));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/v1/schedule/parse HTTP/1.1"));
        assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
        assert!(request.ends_with(r#"{"name":"А-01-22"}"#));
    }

    #[tokio::test]
    async fn test_error_status_body_is_classified() {
        let (base, server) = serve_once(
            "500 Internal Server Error",
            r#"{"detail":"Внутренняя ошибка сервера: timeout"}"#,
        )
        .await;
        let client = ApiClient::new(HttpTransport::new(base));

        let err = client.submit(Endpoint::SplitWindow, &json!({})).await.unwrap_err();
        match &err {
            ApiError::Rejected { status, outcome } => {
                assert_eq!(*status, 500);
                assert_eq!(outcome.message, "Внутренняя ошибка сервера: timeout");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = ApiClient::new(HttpTransport::new(base));
        let err = client.submit(Endpoint::Parse, &json!({})).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(!err.outcome().message.is_empty());
    }

    #[tokio::test]
    async fn test_health_get() {
        let (base, server) = serve_once("200 OK", r#"{"status":"healthy","version":"1.0.0"}"#).await;
        let client = ApiClient::new(HttpTransport::new(base));
        let health = client.health().await.unwrap();
        assert!(health.is_healthy());
        assert!(server.await.unwrap().starts_with("GET /api/v1/health HTTP/1.1"));
    }
}
