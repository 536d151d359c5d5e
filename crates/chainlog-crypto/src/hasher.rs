use chainlog_types::{Record, Timestamp};
use sha2::{Digest, Sha256};

/// SHA-256 record hasher.
///
/// The preimage is `sequence_number ‖ created_at ‖ payload ‖ previous_digest`
/// with no separators and no domain tag, so digests match those produced by
/// existing nodes.
pub struct RecordHasher;

impl RecordHasher {
    /// The exact bytes that are hashed for a record with these fields.
    pub fn preimage(
        sequence_number: u64,
        created_at: &Timestamp,
        payload: &str,
        previous_digest: &str,
    ) -> String {
        let mut out = sequence_number.to_string();
        out.push_str(&created_at.to_canonical());
        out.push_str(payload);
        out.push_str(previous_digest);
        out
    }

    /// Hex digest for a record with these fields.
    pub fn digest_fields(
        sequence_number: u64,
        created_at: &Timestamp,
        payload: &str,
        previous_digest: &str,
    ) -> String {
        let preimage = Self::preimage(sequence_number, created_at, payload, previous_digest);
        hex::encode(Self::raw_hash(preimage.as_bytes()))
    }

    /// Recompute the digest of a record from its own fields.
    ///
    /// The record's stored `digest` is ignored.
    pub fn digest(record: &Record) -> String {
        Self::digest_fields(
            record.sequence_number,
            &record.created_at,
            &record.payload,
            &record.previous_digest,
        )
    }

    /// Returns `true` if the stored digest matches the recomputed one.
    pub fn verify(record: &Record) -> bool {
        Self::digest(record) == record.digest
    }

    /// Raw SHA-256 without any record framing.
    pub fn raw_hash(data: &[u8]) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&Sha256::digest(data));
        out
    }
}
