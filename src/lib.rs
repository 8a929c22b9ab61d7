//! # Topicsmith - Owned Strings and MQTT Topic Naming
//!
//! Topicsmith is a utility crate for IoT device back ends: fallible
//! owned-string construction and deterministic MQTT topic-name composition
//! from a build-time naming scheme.
//!
//! ## Features
//!
//! - **Fallible allocation**: every owned string goes through `try_reserve`,
//!   so heap exhaustion is logged and reported as `None` instead of aborting
//! - **Exact-size formatting**: a counting pass sizes the output, a second
//!   pass over the same `Copy` argument pack fills one exact allocation
//! - **Timestamp rendering**: strftime-style local-time formatting with an
//!   "unset" sentinel for non-positive epochs
//! - **Radix conversion**: 64-bit integers to text in any radix from 2 to 16,
//!   allocation-free via a caller buffer
//! - **Topic naming**: four precomputed headers (primary/backup broker x
//!   local/public visibility) composed with 1 to 5 caller segments, memoized
//!   process-wide and initialized exactly once
//!
//! ## Example
//!
//! ```
//! use topicsmith::{NamingConfig, SegmentConfig, TopicNaming};
//!
//! let naming = TopicNaming::new(&NamingConfig {
//!     primary_local: SegmentConfig::new()
//!         .with_prefix("/")
//!         .with_location("village")
//!         .with_device("heater"),
//!     use_location: true,
//!     ..NamingConfig::new()
//! });
//!
//! let topic = naming.device_topic(true, true, &["bedroom", "temperature"]);
//! assert_eq!(topic.as_deref(), Some("/village/heater/bedroom/temperature"));
//! ```
//!
//! All operations are synchronous and reentrant: no shared mutable state is
//! touched after [`init_naming`], so concurrent calls from independent
//! threads are safe. Ownership of every returned string transfers fully to
//! the caller.

// Core modules
pub mod error;
pub mod radix;
pub mod scheme;
pub mod strings;
pub mod timefmt;
pub mod topics;

// Main API re-exports
pub use error::{Result, TopicsmithError};
pub use radix::{i64_to_radix, u64_to_radix, MAX_RADIX_DIGITS};
pub use scheme::{init_naming, naming, NamingConfig, SegmentConfig, TopicNaming};
pub use strings::{
    clone_bounded, clone_string, concat_owned, concat_with_divider, format_into, format_sized,
    formatted_len, try_with_capacity,
};
pub use timefmt::{
    render_duration_dhms, render_duration_hms, render_timestamp, render_timestamp_into,
    render_timestamp_into_or_empty, render_timestamp_or_empty,
};
pub use topics::subtopic;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration constants
pub mod config {
    /// Sentinel rendered in place of an unset (non-positive) timestamp
    pub const EMPTY_DATETIME: &str = "--.--.---- --:--:--";

    /// Separator between topic segments
    pub const TOPIC_SEPARATOR: char = '/';

    /// Maximum number of caller-supplied segments per topic
    pub const MAX_SEGMENTS: usize = 5;
}
