use std::collections::HashMap;
use std::time::Duration;

use crate::error::MetadataError;
use crate::keys;

/// Tries to get the message TTL from binding metadata.
///
/// Returns `Ok(None)` when the key is absent or its value is empty, so
/// the caller can fall back to its own default. A present value that is
/// not a positive base-10 integer is an error, never a silent default.
pub fn extract_ttl(metadata: &HashMap<String, String>) -> Result<Option<Duration>, MetadataError> {
    let val = match metadata.get(keys::TTL_IN_SECONDS) {
        Some(v) if !v.is_empty() => v,
        _ => return Ok(None),
    };

    let secs: i64 = val
        .parse()
        .map_err(|source| MetadataError::InvalidTtlFormat {
            key: keys::TTL_IN_SECONDS,
            value: val.clone(),
            source,
        })?;

    if secs <= 0 {
        return Err(MetadataError::TtlOutOfRange {
            key: keys::TTL_IN_SECONDS,
            value: secs,
        });
    }

    Ok(Some(Duration::from_secs(secs as u64)))
}

/// Tries to get the dead-letter exchange name from binding metadata.
///
/// The value is passed through verbatim; exchange-name syntax is the
/// broker's concern. Absent or empty means not configured.
pub fn extract_dead_letter_exchange(metadata: &HashMap<String, String>) -> Option<&str> {
    non_empty(metadata, keys::DEAD_LETTER_EXCHANGE)
}

/// Tries to get the dead-letter routing key from binding metadata.
pub fn extract_dead_letter_routing_key(metadata: &HashMap<String, String>) -> Option<&str> {
    non_empty(metadata, keys::DEAD_LETTER_ROUTING_KEY)
}

fn non_empty<'a>(metadata: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    match metadata.get(key) {
        Some(v) if !v.is_empty() => Some(v.as_str()),
        _ => None,
    }
}
