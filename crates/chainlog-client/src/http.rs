use async_trait::async_trait;
use bytes::Bytes;
use chainlog_protocol::{endpoints, HealthResponse, JsonCodec, MineRequest};
use chainlog_types::Record;
use http_body_util::{BodyExt, Full};
use hyper::{header, Method, Request, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use tracing::debug;

use crate::error::{ClientError, ClientResult};
use crate::remote::ChainRemote;

/// [`ChainRemote`] over plain HTTP.
///
/// Must be used from within a Tokio runtime.
#[derive(Clone)]
pub struct HttpRemote {
    base: String,
    client: Client<HttpConnector, Full<Bytes>>,
}

impl HttpRemote {
    /// Client for the node at `base`, e.g. `http://localhost:8080`.
    pub fn new(base: impl Into<String>) -> ClientResult<Self> {
        let base = base.into().trim_end_matches('/').to_string();
        let uri: Uri = base
            .parse()
            .map_err(|e| ClientError::InvalidUrl(format!("{base}: {e}")))?;
        if uri.scheme_str() != Some("http") || uri.host().is_none() {
            return Err(ClientError::InvalidUrl(format!(
                "{base}: expected http://host[:port]"
            )));
        }
        let client = Client::builder(TokioExecutor::new()).build_http();
        Ok(Self { base, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    async fn call(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> ClientResult<Bytes> {
        let uri: Uri = format!("{}{path}", self.base)
            .parse()
            .map_err(|e| ClientError::InvalidUrl(format!("{}{path}: {e}", self.base)))?;

        let mut builder = Request::builder().method(method.clone()).uri(uri);
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let request = builder
            .body(Full::new(Bytes::from(body.unwrap_or_default())))
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?
            .to_bytes();
        debug!(%method, path, status = status.as_u16(), len = bytes.len(), "node responded");

        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).trim_end().to_string(),
            });
        }
        Ok(bytes)
    }
}

#[async_trait]
impl ChainRemote for HttpRemote {
    async fn blocks(&self) -> ClientResult<Vec<Record>> {
        let body = self.call(Method::GET, endpoints::BLOCKS, None).await?;
        Ok(JsonCodec::decode_chain(&body)?)
    }

    async fn mine(&self, data: &str) -> ClientResult<Record> {
        if data.is_empty() {
            return Err(ClientError::DataRequired);
        }
        let payload = JsonCodec::encode(&MineRequest::new(data))?;
        let body = self.call(Method::POST, endpoints::MINE, Some(payload)).await?;
        Ok(JsonCodec::decode(&body)?)
    }

    async fn replace(&self, chain: &[Record]) -> ClientResult<Vec<Record>> {
        let payload = JsonCodec::encode(&chain)?;
        let body = self.call(Method::POST, endpoints::REPLACE, Some(payload)).await?;
        Ok(JsonCodec::decode_chain(&body)?)
    }

    async fn health(&self) -> ClientResult<HealthResponse> {
        let body = self.call(Method::GET, endpoints::HEALTH, None).await?;
        Ok(JsonCodec::decode(&body)?)
    }
}
