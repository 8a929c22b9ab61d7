//! Topic name construction
//!
//! Builders compose a slash-delimited topic from a precomputed header plus
//! 1 to [`MAX_SEGMENTS`] caller segments. Absent or zero-length segments are
//! omitted, never left as empty components that would produce a double
//! slash; segments past the limit are dropped with a logged warning.
//! Segments are not validated: embedded `/`, `#`, or `+` pass through
//! unchanged, because the builder is a formatter, not an MQTT filter
//! validator.
//!
//! Every result is materialized through the [`strings`] allocator, so an
//! allocation failure is logged there once and surfaces here as `None`.

use crate::config::{MAX_SEGMENTS, TOPIC_SEPARATOR};
use crate::scheme::TopicNaming;
use crate::strings;

/// Append a subtopic to an existing topic: `"{topic}/{subtopic}"`.
pub fn subtopic(topic: &str, subtopic: &str) -> Option<String> {
    strings::format_sized(format_args!("{topic}{TOPIC_SEPARATOR}{subtopic}"))
}

impl TopicNaming {
    /// Build `header + seg1[/seg2[/...]]` with the location header.
    ///
    /// Returns `None` when no non-empty segment remains. At most
    /// [`MAX_SEGMENTS`] segments are used; extras are dropped with a logged
    /// warning.
    pub fn location_topic(
        &self,
        primary: bool,
        local: bool,
        segments: &[&str],
    ) -> Option<String> {
        compose(self.location_header(primary, local), None, segments)
    }

    /// Like [`location_topic`](Self::location_topic), with a device-class
    /// segment inserted directly after the header.
    ///
    /// An absent `special` behaves identically to the plain location builder.
    pub fn special_topic(
        &self,
        primary: bool,
        local: bool,
        special: Option<&str>,
        segments: &[&str],
    ) -> Option<String> {
        compose(self.location_header(primary, local), special, segments)
    }

    /// Build `header + seg1[/seg2[/...]]` with the device header.
    pub fn device_topic(&self, primary: bool, local: bool, segments: &[&str]) -> Option<String> {
        compose(self.device_header(primary, local), None, segments)
    }

    /// Dispatch to the location builder over up to three optional segments.
    ///
    /// All-absent input returns `None`: "no topic", never an empty string
    /// and never a device-only fallback.
    pub fn build_topic(
        &self,
        primary: bool,
        local: bool,
        seg1: Option<&str>,
        seg2: Option<&str>,
        seg3: Option<&str>,
    ) -> Option<String> {
        let (segments, count) = gather(seg1, seg2, seg3);
        self.location_topic(primary, local, &segments[..count])
    }

    /// Dispatch to the special builder over up to three optional segments.
    pub fn build_special_topic(
        &self,
        primary: bool,
        local: bool,
        special: Option<&str>,
        seg1: Option<&str>,
        seg2: Option<&str>,
        seg3: Option<&str>,
    ) -> Option<String> {
        let (segments, count) = gather(seg1, seg2, seg3);
        self.special_topic(primary, local, special, &segments[..count])
    }

    /// Dispatch to the device builder over up to three optional segments.
    pub fn build_device_topic(
        &self,
        primary: bool,
        local: bool,
        seg1: Option<&str>,
        seg2: Option<&str>,
        seg3: Option<&str>,
    ) -> Option<String> {
        let (segments, count) = gather(seg1, seg2, seg3);
        self.device_topic(primary, local, &segments[..count])
    }
}

/// Collect the present dispatcher segments, preserving order.
fn gather<'a>(
    seg1: Option<&'a str>,
    seg2: Option<&'a str>,
    seg3: Option<&'a str>,
) -> ([&'a str; 3], usize) {
    let mut segments = [""; 3];
    let mut count = 0;
    for segment in [seg1, seg2, seg3].into_iter().flatten() {
        segments[count] = segment;
        count += 1;
    }
    (segments, count)
}

/// Join header, optional special segment, and caller segments.
///
/// Allocates exactly once, at the final size, through the string allocator.
fn compose(header: &str, special: Option<&str>, segments: &[&str]) -> Option<String> {
    let special = special.filter(|s| !s.is_empty());

    let mut kept = [""; MAX_SEGMENTS];
    let mut count = 0;
    let mut dropped = 0;
    for segment in segments.iter().copied().filter(|s| !s.is_empty()) {
        if count < MAX_SEGMENTS {
            kept[count] = segment;
            count += 1;
        } else {
            dropped += 1;
        }
    }
    if dropped > 0 {
        log::warn!("Dropping {dropped} topic segments past the {MAX_SEGMENTS}-segment limit");
    }
    if count == 0 {
        return None;
    }

    let body_len: usize = kept[..count].iter().map(|s| s.len()).sum();
    let special_len = special.map(|s| s.len() + 1).unwrap_or(0);
    let total = header.len() + special_len + body_len + count - 1;

    let mut out = strings::try_with_capacity(total)?;
    out.push_str(header);
    if let Some(special) = special {
        out.push_str(special);
        out.push(TOPIC_SEPARATOR);
    }
    for (i, segment) in kept[..count].iter().enumerate() {
        if i > 0 {
            out.push(TOPIC_SEPARATOR);
        }
        out.push_str(segment);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::{NamingConfig, SegmentConfig};

    fn naming() -> TopicNaming {
        TopicNaming::new(&NamingConfig {
            primary_local: SegmentConfig::new()
                .with_prefix("/")
                .with_location("village")
                .with_device("heater"),
            backup_local: SegmentConfig::new()
                .with_prefix("backup/")
                .with_location("village")
                .with_device("heater"),
            primary_public: SegmentConfig::new()
                .with_prefix("user_4281/")
                .with_device("heater"),
            backup_public: SegmentConfig::new().with_device("heater"),
            use_location: true,
        })
    }

    #[test]
    fn test_subtopic() {
        assert_eq!(subtopic("bedroom", "temperature").unwrap(), "bedroom/temperature");
    }

    #[test]
    fn test_location_topic_all_arities() {
        let naming = naming();
        assert_eq!(
            naming.location_topic(true, true, &["status"]).unwrap(),
            "/village/status"
        );
        assert_eq!(
            naming
                .location_topic(true, true, &["bedroom", "temperature"])
                .unwrap(),
            "/village/bedroom/temperature"
        );
        assert_eq!(
            naming
                .location_topic(true, true, &["a", "b", "c", "d", "e"])
                .unwrap(),
            "/village/a/b/c/d/e"
        );
    }

    #[test]
    fn test_header_selection_axes() {
        let naming = naming();
        assert_eq!(
            naming.location_topic(true, true, &["x"]).unwrap(),
            "/village/x"
        );
        assert_eq!(
            naming.location_topic(false, true, &["x"]).unwrap(),
            "backup/village/x"
        );
        assert_eq!(
            naming.location_topic(true, false, &["x"]).unwrap(),
            "user_4281/x"
        );
        assert_eq!(naming.location_topic(false, false, &["x"]).unwrap(), "x");
    }

    #[test]
    fn test_device_topic_uses_device_header() {
        let naming = naming();
        assert_eq!(
            naming.device_topic(true, true, &["status"]).unwrap(),
            "/village/heater/status"
        );
        assert_eq!(
            naming.device_topic(true, false, &["status"]).unwrap(),
            "user_4281/heater/status"
        );
    }

    #[test]
    fn test_special_topic_inserts_after_header() {
        let naming = naming();
        assert_eq!(
            naming
                .special_topic(true, true, Some("sensors"), &["bedroom", "temperature"])
                .unwrap(),
            "/village/sensors/bedroom/temperature"
        );
        // Absent special degrades to the location builder
        assert_eq!(
            naming.special_topic(true, true, None, &["bedroom"]),
            naming.location_topic(true, true, &["bedroom"])
        );
        assert_eq!(
            naming.special_topic(true, true, Some(""), &["bedroom"]),
            naming.location_topic(true, true, &["bedroom"])
        );
    }

    #[test]
    fn test_dispatcher_matches_fixed_arity() {
        let naming = naming();
        assert_eq!(
            naming.build_topic(true, false, Some("x"), None, None),
            naming.location_topic(true, false, &["x"])
        );
        assert_eq!(
            naming.build_topic(true, true, Some("a"), Some("b"), None),
            naming.location_topic(true, true, &["a", "b"])
        );
        assert_eq!(
            naming.build_topic(true, true, Some("a"), Some("b"), Some("c")),
            naming.location_topic(true, true, &["a", "b", "c"])
        );
        assert_eq!(
            naming.build_device_topic(false, true, Some("a"), None, Some("c")),
            naming.device_topic(false, true, &["a", "c"])
        );
    }

    #[test]
    fn test_all_absent_segments_yield_none() {
        let naming = naming();
        assert_eq!(naming.build_topic(true, true, None, None, None), None);
        assert_eq!(
            naming.build_special_topic(true, true, Some("sensors"), None, None, None),
            None
        );
        assert_eq!(naming.location_topic(true, true, &[]), None);
        assert_eq!(naming.location_topic(true, true, &["", ""]), None);
    }

    #[test]
    fn test_segments_past_limit_are_dropped_uniformly() {
        let naming = naming();
        assert_eq!(
            naming
                .location_topic(true, true, &["a", "b", "c", "d", "e", "f"])
                .unwrap(),
            "/village/a/b/c/d/e"
        );
        // Empty segments do not count toward the limit
        assert_eq!(
            naming
                .location_topic(true, true, &["", "a", "b", "c", "d", "e"])
                .unwrap(),
            "/village/a/b/c/d/e"
        );
    }

    #[test]
    fn test_empty_segments_are_omitted() {
        let naming = naming();
        assert_eq!(
            naming
                .location_topic(true, true, &["bedroom", "", "temperature"])
                .unwrap(),
            "/village/bedroom/temperature"
        );
    }

    #[test]
    fn test_reserved_characters_pass_through() {
        // Formatter, not validator: wildcards and slashes are preserved
        let naming = naming();
        assert_eq!(
            naming.location_topic(true, true, &["+", "#"]).unwrap(),
            "/village/+/#"
        );
        assert_eq!(
            naming.location_topic(true, true, &["a/b"]).unwrap(),
            "/village/a/b"
        );
    }

    #[test]
    fn test_idempotence() {
        let naming = naming();
        let first = naming.build_topic(true, true, Some("a"), Some("b"), None);
        let second = naming.build_topic(true, true, Some("a"), Some("b"), None);
        assert_eq!(first, second);
    }
}
