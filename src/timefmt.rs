//! Timestamp and duration rendering
//!
//! Epoch seconds are converted to broken-down local time through chrono and
//! rendered with strftime-style patterns. A non-positive epoch means "unset"
//! in device telemetry, and the `*_or_empty` variant substitutes the
//! configured sentinel for it instead of printing the epoch origin.

use chrono::{DateTime, Local, LocalResult, TimeZone};

use crate::config::EMPTY_DATETIME;
use crate::error::Result;
use crate::strings;

/// Broken-down local time for an epoch seconds value, if representable.
fn local_time(epoch: i64) -> Option<DateTime<Local>> {
    match Local.timestamp_opt(epoch, 0) {
        LocalResult::Single(dt) => Some(dt),
        // DST fold: either wall-clock reading is a faithful rendering
        LocalResult::Ambiguous(dt, _) => Some(dt),
        LocalResult::None => {
            log::error!("Epoch value {epoch} is not representable in local time");
            None
        }
    }
}

/// Render an epoch seconds value as local time with a strftime-style pattern.
///
/// Returns `None` for an unrepresentable instant, a malformed pattern, or
/// allocation failure.
pub fn render_timestamp(pattern: &str, epoch: i64) -> Option<String> {
    let rendered = local_time(epoch)?.format(pattern);
    strings::format_sized(format_args!("{rendered}"))
}

/// Like [`render_timestamp`], but a non-positive epoch ("unset") yields the
/// [`EMPTY_DATETIME`] sentinel verbatim.
pub fn render_timestamp_or_empty(pattern: &str, epoch: i64) -> Option<String> {
    if epoch > 0 {
        render_timestamp(pattern, epoch)
    } else {
        strings::clone_string(Some(EMPTY_DATETIME))
    }
}

/// Render a timestamp into a caller-supplied buffer.
///
/// Follows the [`strings::format_into`] contract: truncated output on
/// overflow with the required length in the error, `Ok(0)` and nothing
/// written when the instant or pattern cannot be rendered.
pub fn render_timestamp_into(buffer: &mut [u8], pattern: &str, epoch: i64) -> Result<usize> {
    let Some(dt) = local_time(epoch) else {
        return Ok(0);
    };
    let rendered = dt.format(pattern);
    strings::format_into(buffer, format_args!("{rendered}"))
}

/// Like [`render_timestamp_into`], substituting the sentinel for a
/// non-positive epoch.
pub fn render_timestamp_into_or_empty(
    buffer: &mut [u8],
    pattern: &str,
    epoch: i64,
) -> Result<usize> {
    if epoch > 0 {
        render_timestamp_into(buffer, pattern, epoch)
    } else {
        strings::format_into(buffer, format_args!("{EMPTY_DATETIME}"))
    }
}

/// Render a seconds count as `HH:MM:SS`.
///
/// No day rollover: hours keep counting past 24.
pub fn render_duration_hms(seconds: u64) -> Option<String> {
    let h = seconds / 3600;
    let m = seconds % 3600 / 60;
    let s = seconds % 60;
    crate::format_owned!("{h:02}:{m:02}:{s:02}")
}

/// Render a seconds count as `D.HH:MM:SS` with an explicit day count.
pub fn render_duration_dhms(seconds: u64) -> Option<String> {
    let d = seconds / 86_400;
    let rest = seconds % 86_400;
    let h = rest / 3600;
    let m = rest % 3600 / 60;
    let s = rest % 60;
    crate::format_owned!("{d}.{h:02}:{m:02}:{s:02}")
}
