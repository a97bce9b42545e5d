use std::collections::HashMap;
use std::time::Duration;

use crate::error::MetadataError;
use crate::extract::{extract_dead_letter_exchange, extract_dead_letter_routing_key, extract_ttl};

/// All recognized binding options collected from one metadata map.
///
/// `None` in any field means the option was not configured and the
/// binding should use its default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingOptions {
    pub ttl: Option<Duration>,
    pub dead_letter_exchange: Option<String>,
    pub dead_letter_routing_key: Option<String>,
}

impl BindingOptions {
    /// Runs every extractor over the metadata map, failing on the first
    /// invalid value.
    pub fn from_metadata(metadata: &HashMap<String, String>) -> Result<Self, MetadataError> {
        Ok(BindingOptions {
            ttl: extract_ttl(metadata)?,
            dead_letter_exchange: extract_dead_letter_exchange(metadata).map(str::to_string),
            dead_letter_routing_key: extract_dead_letter_routing_key(metadata).map(str::to_string),
        })
    }
}
