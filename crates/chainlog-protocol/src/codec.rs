use chainlog_types::Record;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ProtocolError, ProtocolResult};
use crate::message::MineRequest;

/// JSON body codec.
///
/// Encoded bodies end with a newline. Decoding reads the first JSON value of
/// a body and ignores anything after it, matching existing nodes.
pub struct JsonCodec;

impl JsonCodec {
    pub fn encode<T: Serialize>(value: &T) -> ProtocolResult<Vec<u8>> {
        let mut buf =
            serde_json::to_vec(value).map_err(|e| ProtocolError::Serialization(e.to_string()))?;
        buf.push(b'\n');
        Ok(buf)
    }

    pub fn decode<T: DeserializeOwned>(data: &[u8]) -> ProtocolResult<T> {
        serde_json::Deserializer::from_slice(data)
            .into_iter::<T>()
            .next()
            .unwrap_or_else(|| Err(<serde_json::Error as serde::de::Error>::custom("empty body")))
            .map_err(|e| ProtocolError::Deserialization(e.to_string()))
    }

    pub fn decode_mine_request(data: &[u8]) -> ProtocolResult<MineRequest> {
        Self::decode(data)
    }

    /// A JSON `null` decodes as an empty chain.
    pub fn decode_chain(data: &[u8]) -> ProtocolResult<Vec<Record>> {
        Ok(Self::decode::<Option<Vec<Record>>>(data)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{"index":0,"timestamp":"2024-01-02T03:04:05Z","data":"Genesis Block","previousHash":"0","hash":"abc"}"#;

    #[test]
    fn encode_appends_newline() {
        let bytes = JsonCodec::encode(&MineRequest::new("x")).unwrap();
        assert_eq!(bytes, b"{\"data\":\"x\"}\n");
    }

    #[test]
    fn decode_reads_first_value_only() {
        let req = JsonCodec::decode_mine_request(b"{\"data\":\"a\"} trailing").unwrap();
        assert_eq!(req.data, "a");
    }

    #[test]
    fn decode_empty_body_fails() {
        let err = JsonCodec::decode_mine_request(b"").unwrap_err();
        assert!(matches!(err, ProtocolError::Deserialization(_)));
        let err = JsonCodec::decode_mine_request(b"   ").unwrap_err();
        assert!(matches!(err, ProtocolError::Deserialization(_)));
    }

    #[test]
    fn decode_chain_of_records() {
        let body = format!("[{RECORD}]");
        let chain = JsonCodec::decode_chain(body.as_bytes()).unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].payload, "Genesis Block");
    }

    #[test]
    fn decode_null_chain_is_empty() {
        assert!(JsonCodec::decode_chain(b"null").unwrap().is_empty());
    }

    #[test]
    fn decode_chain_rejects_leap_second() {
        let body = format!("[{}]", RECORD.replace("03:04:05Z", "23:59:60Z"));
        assert!(JsonCodec::decode_chain(body.as_bytes()).is_err());
    }

    #[test]
    fn decode_chain_rejects_object() {
        assert!(JsonCodec::decode_chain(RECORD.as_bytes()).is_err());
    }
}
