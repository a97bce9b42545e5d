//! Recognized binding metadata keys.
//!
//! These are the only keys this crate understands; anything else in the
//! metadata map is left alone for other layers to interpret.

/// Message time to live, in whole seconds (decimal, positive integer)
pub const TTL_IN_SECONDS: &str = "ttlInSeconds";

/// Exchange that expired or rejected messages are re-routed to
pub const DEAD_LETTER_EXCHANGE: &str = "deadLetterExchange";

/// Routing key used when re-routing to the dead-letter exchange
pub const DEAD_LETTER_ROUTING_KEY: &str = "deadLetterRoutingKey";
