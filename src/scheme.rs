//! Naming scheme configuration and precomputed topic headers
//!
//! Firmware builds historically scattered prefix/location/device selection
//! across every topic call site. Here the whole ladder collapses into one
//! pure function: [`TopicNaming::new`] evaluates the configuration once and
//! precomputes the four headers for the primary/backup x local/public axes.
//! The result is memoized process-wide through [`init_naming`] before any
//! topic-building call.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Fixed naming segments for one broker x visibility cell
///
/// The prefix is used verbatim: brokers differ on whether it is `"/"`, empty,
/// or an account namespace like `"user_4281/"`, so the prefix carries its own
/// trailing separator if one is wanted. Location and device each get exactly
/// one `/` appended when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentConfig {
    /// Server topic prefix, e.g. `"/"` or `"user_4281/"`
    pub prefix: Option<String>,
    /// Device location, e.g. `"home"` or `"village"`
    pub location: Option<String>,
    /// Device name, e.g. `"heater"`
    pub device: Option<String>,
}

impl SegmentConfig {
    /// Create an empty segment set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the location segment
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the device segment
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }
}

/// Complete naming scheme: one segment set per broker x visibility cell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Primary broker, location-scoped topics
    pub primary_local: SegmentConfig,
    /// Backup broker, location-scoped topics
    pub backup_local: SegmentConfig,
    /// Primary broker, public topics
    pub primary_public: SegmentConfig,
    /// Backup broker, public topics
    pub backup_public: SegmentConfig,
    /// Whether location segments participate in headers at all
    pub use_location: bool,
}

impl NamingConfig {
    /// Create a config with no segments and location disabled
    pub fn new() -> Self {
        Self::default()
    }
}

/// Precomputed topic headers for every broker x visibility combination
///
/// Built exactly once from a [`NamingConfig`]; read-only afterwards. The
/// location header covers `prefix + location`, the device header additionally
/// appends the device name. Absent or empty segments are omitted outright, so
/// a header never contains an empty path component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicNaming {
    location_headers: [String; 4],
    device_headers: [String; 4],
}

/// Index into the header tables for a primary/local flag pair
fn axis_index(primary: bool, local: bool) -> usize {
    (primary as usize) | ((local as usize) << 1)
}

/// A configured segment, with empty strings treated as absent
fn present(segment: &Option<String>) -> Option<&str> {
    segment.as_deref().filter(|s| !s.is_empty())
}

fn build_location_header(segments: &SegmentConfig, use_location: bool) -> String {
    let mut header = String::new();
    if let Some(prefix) = present(&segments.prefix) {
        header.push_str(prefix);
    }
    if use_location {
        if let Some(location) = present(&segments.location) {
            header.push_str(location);
            header.push(crate::config::TOPIC_SEPARATOR);
        }
    }
    header
}

fn build_device_header(segments: &SegmentConfig, use_location: bool) -> String {
    let mut header = build_location_header(segments, use_location);
    if let Some(device) = present(&segments.device) {
        header.push_str(device);
        header.push(crate::config::TOPIC_SEPARATOR);
    }
    header
}

impl TopicNaming {
    /// Build all eight headers from a configuration. Pure; call once.
    pub fn new(config: &NamingConfig) -> Self {
        let mut location_headers: [String; 4] = Default::default();
        let mut device_headers: [String; 4] = Default::default();
        let cells = [
            (&config.backup_public, false, false),
            (&config.primary_public, true, false),
            (&config.backup_local, false, true),
            (&config.primary_local, true, true),
        ];
        for (segments, primary, local) in cells {
            let idx = axis_index(primary, local);
            location_headers[idx] = build_location_header(segments, config.use_location);
            device_headers[idx] = build_device_header(segments, config.use_location);
        }
        Self {
            location_headers,
            device_headers,
        }
    }

    /// Header for `prefix + location` topics
    pub fn location_header(&self, primary: bool, local: bool) -> &str {
        &self.location_headers[axis_index(primary, local)]
    }

    /// Header for `prefix + location + device` topics
    pub fn device_header(&self, primary: bool, local: bool) -> &str {
        &self.device_headers[axis_index(primary, local)]
    }
}

static NAMING: OnceLock<TopicNaming> = OnceLock::new();

/// Install the process-wide naming scheme.
///
/// The first call wins; subsequent calls are no-ops that return the already
/// installed instance. Call this once at startup, before any topic building.
pub fn init_naming(config: &NamingConfig) -> &'static TopicNaming {
    NAMING.get_or_init(|| TopicNaming::new(config))
}

/// The process-wide naming scheme, if [`init_naming`] has run.
pub fn naming() -> Option<&'static TopicNaming> {
    NAMING.get()
}
