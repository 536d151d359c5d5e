//! HTTP node for chainlog.
//!
//! Serves one hash-linked ledger over HTTP:
//!
//! - `GET /blocks`: the full chain, ascending by sequence number
//! - `POST /mine`: append a record carrying `{"data": "..."}`
//! - `POST /replace`: adopt a strictly longer valid chain
//! - `GET /health`: liveness and current chain length
//!
//! Failures are plain-text bodies: `400` for bad input or refused
//! replacements, `500` only if a generated record fails validation.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use server::ChainServer;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use chainlog_ledger::{extend, Ledger, LedgerReader, LedgerWriter};
    use chainlog_protocol::endpoints;
    use chainlog_types::Record;
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    use super::*;

    fn test_node() -> (Router, Arc<Ledger>) {
        let ledger = Arc::new(Ledger::new());
        let server = ChainServer::with_ledger(ServerConfig::default(), ledger.clone());
        (server.router(), ledger)
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: impl Into<Body>,
    ) -> (StatusCode, Vec<u8>) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn blocks_returns_genesis() {
        let (app, _) = test_node();
        let (status, body) = send(&app, "GET", endpoints::BLOCKS, Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
        let chain: Vec<Record> = serde_json::from_slice(&body).unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].sequence_number, 0);
        assert_eq!(chain[0].previous_digest, "0");
    }

    #[tokio::test]
    async fn mine_appends_record() {
        let (app, ledger) = test_node();
        let (status, body) = send(&app, "POST", endpoints::MINE, r#"{"data":"hello"}"#).await;
        assert_eq!(status, StatusCode::OK);
        let record: Record = serde_json::from_slice(&body).unwrap();
        assert_eq!(record.sequence_number, 1);
        assert_eq!(record.payload, "hello");
        assert_eq!(ledger.tip(), record);
    }

    #[tokio::test]
    async fn mine_rejects_empty_data() {
        let (app, ledger) = test_node();
        let (status, body) = send(&app, "POST", endpoints::MINE, r#"{"data":""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, b"data is required\n");

        let (status, _) = send(&app, "POST", endpoints::MINE, "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(ledger.len(), 1);
    }

    #[tokio::test]
    async fn mine_rejects_garbage() {
        let (app, ledger) = test_node();
        let (status, body) = send(&app, "POST", endpoints::MINE, "not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, b"invalid payload\n");
        assert_eq!(ledger.len(), 1);
    }

    #[tokio::test]
    async fn replace_adopts_longer_chain() {
        let (app, ledger) = test_node();
        let candidate = extend(&ledger.snapshot(), &["a", "b"]);
        let (status, body) = send(
            &app,
            "POST",
            endpoints::REPLACE,
            serde_json::to_vec(&candidate).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let chain: Vec<Record> = serde_json::from_slice(&body).unwrap();
        assert_eq!(chain, candidate);
        assert_eq!(ledger.len(), 3);
    }

    #[tokio::test]
    async fn replace_rejects_shorter_chain() {
        let (app, ledger) = test_node();
        ledger.append("a").unwrap();
        let before = ledger.snapshot();
        let (status, body) = send(
            &app,
            "POST",
            endpoints::REPLACE,
            serde_json::to_vec(&before[..1]).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(String::from_utf8(body).unwrap().starts_with("replacement failed"));
        assert_eq!(ledger.snapshot(), before);
    }

    #[tokio::test]
    async fn replace_rejects_forged_chain() {
        let (app, ledger) = test_node();
        let mut candidate = extend(&ledger.snapshot(), &["a", "b"]);
        candidate[2].previous_digest = "forged".into();
        let (status, _) = send(
            &app,
            "POST",
            endpoints::REPLACE,
            serde_json::to_vec(&candidate).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(ledger.len(), 1);
    }

    #[tokio::test]
    async fn replace_rejects_garbage() {
        let (app, _) = test_node();
        let (status, body) = send(&app, "POST", endpoints::REPLACE, r#"{"index":0}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, b"invalid payload\n");
    }

    #[tokio::test]
    async fn replace_with_null_is_a_refused_replacement() {
        let (app, ledger) = test_node();
        let (status, body) = send(&app, "POST", endpoints::REPLACE, "null").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(String::from_utf8(body).unwrap().starts_with("replacement failed"));
        assert_eq!(ledger.len(), 1);
    }

    #[tokio::test]
    async fn replace_rejects_leap_second_timestamp() {
        let (app, ledger) = test_node();
        let candidate = extend(&ledger.snapshot(), &["a", "b"]);
        let mut wire = serde_json::to_value(&candidate).unwrap();
        wire[2]["timestamp"] = "2016-12-31T23:59:60.5Z".into();
        let (status, body) = send(
            &app,
            "POST",
            endpoints::REPLACE,
            serde_json::to_vec(&wire).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, b"invalid payload\n");
        assert_eq!(ledger.len(), 1);
    }

    #[tokio::test]
    async fn health_reports_length() {
        let (app, ledger) = test_node();
        ledger.append("a").unwrap();
        let (status, body) = send(&app, "GET", endpoints::HEALTH, Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
        let health: chainlog_protocol::HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.length, 2);
    }

    #[tokio::test]
    async fn wrong_method_is_refused() {
        let (app, _) = test_node();
        let (status, _) = send(&app, "POST", endpoints::BLOCKS, Body::empty()).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn oversized_body_is_refused() {
        let ledger = Arc::new(Ledger::new());
        let config = ServerConfig {
            max_body_bytes: 16,
            ..ServerConfig::default()
        };
        let app = ChainServer::with_ledger(config, ledger.clone()).router();
        let (status, _) = send(
            &app,
            "POST",
            endpoints::MINE,
            r#"{"data":"a payload well over the limit"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(ledger.len(), 1);
    }
}
