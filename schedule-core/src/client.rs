use log::{debug, error};
use serde::Serialize;
use serde_json::Value;

use crate::outcome::{ApiError, ApiOutcome};
use crate::types::HealthStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Parse,
    YougileIntegrate,
    CommonWindow,
    SplitWindow,
    Health,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::Parse => "/api/v1/schedule/parse",
            Self::YougileIntegrate => "/api/v1/yougile/integrate",
            Self::CommonWindow => "/api/v1/schedule/analyze/common-window",
            Self::SplitWindow => "/api/v1/schedule/analyze/split-window",
            Self::Health => "/api/v1/health",
        }
    }
}

/// Status and body text of one HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One HTTP exchange. `Err` carries the transport's own failure text and
/// means no response arrived at all.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, path: &str, body: String) -> Result<RawResponse, String>;

    async fn get(&self, path: &str) -> Result<RawResponse, String>;
}

/// Submits typed payloads and classifies the replies.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POST `payload` as JSON to `endpoint`.
    ///
    /// `Ok` only for a 2xx status whose body has a truthy `success`.
    pub async fn submit<B>(&self, endpoint: Endpoint, payload: &B) -> Result<ApiOutcome, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(payload)?;
        debug!("POST {} ({} bytes)", endpoint.path(), body.len());
        let response = self
            .transport
            .post_json(endpoint.path(), body)
            .await
            .map_err(|e| {
                error!("POST {} failed: {e}", endpoint.path());
                ApiError::Transport(e)
            })?;
        classify(response)
    }

    /// `GET /api/v1/health`.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let path = Endpoint::Health.path();
        let response = self.transport.get(path).await.map_err(ApiError::Transport)?;
        let body = decode(&response)?;
        if !response.is_success() {
            return Err(ApiError::Rejected {
                status: response.status,
                outcome: ApiOutcome::from_body(&body),
            });
        }
        serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
    }
}

fn decode(response: &RawResponse) -> Result<Value, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

/// Classify a response: the body is decoded whatever the status, and only a
/// 2xx status with a truthy `success` counts as success.
pub fn classify(response: RawResponse) -> Result<ApiOutcome, ApiError> {
    let body = decode(&response)?;
    let outcome = ApiOutcome::from_body(&body);
    if response.is_success() && outcome.success {
        Ok(outcome)
    } else {
        Err(ApiError::Rejected {
            status: response.status,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    /// Answers every call with a canned result and records what was sent.
    struct Canned {
        reply: Result<RawResponse, String>,
        sent: RefCell<Vec<(String, String)>>,
    }

    impl Canned {
        fn new(reply: Result<RawResponse, String>) -> Self {
            Self {
                reply,
                sent: RefCell::new(Vec::new()),
            }
        }

        fn status(status: u16, body: &str) -> Self {
            Self::new(Ok(RawResponse {
                status,
                body: body.to_string(),
            }))
        }
    }

    impl Transport for Canned {
        async fn post_json(&self, path: &str, body: String) -> Result<RawResponse, String> {
            self.sent.borrow_mut().push((path.to_string(), body));
            self.reply.clone()
        }

        async fn get(&self, path: &str) -> Result<RawResponse, String> {
            self.sent.borrow_mut().push((path.to_string(), String::new()));
            self.reply.clone()
        }
    }

    #[tokio::test]
    async fn test_success_requires_2xx_and_truthy_flag() {
        let client = ApiClient::new(Canned::status(200, r#"{"success":true,"message":"ok","data":{"n":1}}"#));
        let outcome = client.submit(Endpoint::Parse, &json!({"name": "W1"})).await.unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.data, Some(json!({"n": 1})));

        let sent = client.transport().sent.borrow();
        assert_eq!(sent[0].0, "/api/v1/schedule/parse");
        assert_eq!(sent[0].1, r#"{"name":"W1"}"#);
    }

    #[tokio::test]
    async fn test_ok_status_with_false_flag_is_error() {
        let client = ApiClient::new(Canned::status(200, r#"{"success":false,"message":"Общее окно не найдено"}"#));
        match client.submit(Endpoint::CommonWindow, &json!({})).await {
            Err(ApiError::Rejected { status, outcome }) => {
                assert_eq!(status, 200);
                assert_eq!(outcome.message, "Общее окно не найдено");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_body_is_still_read() {
        let client = ApiClient::new(Canned::status(
            500,
            r#"{"success":true,"message":"half done","data":{"step":2}}"#,
        ));
        let err = client.submit(Endpoint::SplitWindow, &json!({})).await.unwrap_err();
        assert!(!err.is_network());
        let outcome = err.outcome();
        assert_eq!(outcome.message, "half done");
        assert_eq!(outcome.data, Some(json!({"step": 2})));
    }

    #[tokio::test]
    async fn test_transport_failure_carries_raw_text() {
        let client = ApiClient::new(Canned::new(Err("error sending request for url".into())));
        let err = client.submit(Endpoint::YougileIntegrate, &json!({})).await.unwrap_err();
        assert!(err.is_network());
        assert_eq!(err.outcome().message, "error sending request for url");
        assert_eq!(err.outcome().data, None);
    }

    #[tokio::test]
    async fn test_non_json_body_is_network_error() {
        let client = ApiClient::new(Canned::status(502, "<html>Bad Gateway</html>"));
        let err = client.submit(Endpoint::Parse, &json!({})).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidBody(_)));
        assert!(!err.outcome().message.is_empty());
    }

    #[tokio::test]
    async fn test_health() {
        let client = ApiClient::new(Canned::status(
            200,
            r#"{"status":"healthy","message":"running","version":"1.0.0","endpoints":{"schedule_parsing":"/api/v1/schedule/parse"}}"#,
        ));
        let health = client.health().await.unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.version, "1.0.0");
        assert_eq!(client.transport().sent.borrow()[0].0, "/api/v1/health");

        let down = ApiClient::new(Canned::status(503, r#"{"detail":"maintenance"}"#));
        assert_eq!(down.health().await.unwrap_err().outcome().message, "maintenance");
    }

    #[test]
    fn test_classify_directly() {
        let ok = classify(RawResponse { status: 201, body: r#"{"success":1,"message":""}"#.into() });
        assert!(ok.is_ok());
        let rejected = classify(RawResponse { status: 422, body: r#"{"detail":[]}"#.into() });
        assert!(matches!(rejected, Err(ApiError::Rejected { status: 422, .. })));
    }
}
