pub mod keys;
mod error;
mod extract;
mod options;

// Public re-exports for easy access
pub use error::MetadataError;
pub use extract::{extract_dead_letter_exchange, extract_dead_letter_routing_key, extract_ttl};
pub use options::BindingOptions;
