use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("{key} value must be a valid integer: actual is '{value}'")]
    InvalidTtlFormat {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{key} value must be higher than zero: actual is {value}")]
    TtlOutOfRange { key: &'static str, value: i64 },
}
