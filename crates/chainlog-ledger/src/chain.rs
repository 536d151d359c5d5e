use chainlog_crypto::RecordHasher;
use chainlog_types::{Record, Timestamp, GENESIS_PAYLOAD, GENESIS_PREVIOUS_DIGEST};

/// A fresh genesis record stamped with the current time.
pub fn genesis() -> Record {
    genesis_at(Timestamp::now())
}

/// A genesis record stamped with `created_at`.
pub fn genesis_at(created_at: Timestamp) -> Record {
    seal(
        0,
        created_at,
        GENESIS_PAYLOAD.to_string(),
        GENESIS_PREVIOUS_DIGEST.to_string(),
    )
}

/// The record that follows `previous`, stamped with the current time.
pub fn successor(previous: &Record, payload: impl Into<String>) -> Record {
    successor_at(previous, payload, Timestamp::now())
}

/// The record that follows `previous`, stamped with `created_at`.
pub fn successor_at(
    previous: &Record,
    payload: impl Into<String>,
    created_at: Timestamp,
) -> Record {
    seal(
        previous.sequence_number.saturating_add(1),
        created_at,
        payload.into(),
        previous.digest.clone(),
    )
}

/// Copy `base` and append one successor per payload.
///
/// An empty `base` starts from a new genesis record.
pub fn extend<S: AsRef<str>>(base: &[Record], payloads: &[S]) -> Vec<Record> {
    let mut chain = if base.is_empty() {
        vec![genesis()]
    } else {
        base.to_vec()
    };
    chain.reserve(payloads.len());
    for payload in payloads {
        if let Some(next) = chain.last().map(|tip| successor(tip, payload.as_ref())) {
            chain.push(next);
        }
    }
    chain
}

fn seal(
    sequence_number: u64,
    created_at: Timestamp,
    payload: String,
    previous_digest: String,
) -> Record {
    let digest =
        RecordHasher::digest_fields(sequence_number, &created_at, &payload, &previous_digest);
    Record {
        sequence_number,
        created_at,
        payload,
        previous_digest,
        digest,
    }
}
