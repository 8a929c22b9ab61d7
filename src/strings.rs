//! Fallible owned-string construction
//!
//! Every allocation in this module goes through [`try_with_capacity`], so heap
//! exhaustion is reported once through the log and surfaces as `None` instead
//! of aborting the process. Formatting is done in two passes over the same
//! argument pack: a counting pass computes the exact output size, then a
//! single allocation of that size is filled by the second pass.
//! `fmt::Arguments` is `Copy`, so both passes traverse identical state.

use std::fmt::{self, Write};

use crate::error::{Result, TopicsmithError};

/// Allocate an empty string with exactly `capacity` bytes reserved.
///
/// Returns `None` and logs an out-of-memory report if the reservation fails.
/// This is the single allocation point for the whole crate.
pub fn try_with_capacity(capacity: usize) -> Option<String> {
    let mut out = String::new();
    if let Err(err) = out.try_reserve_exact(capacity) {
        log::error!("Failed to create string: out of memory ({capacity} bytes requested): {err}");
        return None;
    }
    Some(out)
}

/// Clone a string into a newly allocated buffer.
///
/// The contract for an absent source is uniform: `None` in, `None` out. This
/// is deliberately not an error, so call sites can forward optional inputs
/// without a guard.
pub fn clone_string(source: Option<&str>) -> Option<String> {
    let source = source?;
    let mut out = try_with_capacity(source.len())?;
    out.push_str(source);
    Some(out)
}

/// Clone at most the first `len` bytes of `source`.
///
/// The cut is clamped to the source length and backed off to the nearest
/// char boundary, so the result is always valid UTF-8.
pub fn clone_bounded(source: &str, len: usize) -> Option<String> {
    let mut end = len.min(source.len());
    while end > 0 && !source.is_char_boundary(end) {
        end -= 1;
    }
    clone_string(Some(&source[..end]))
}

/// Length the formatted output would have, without allocating.
///
/// Returns `None` if a `Display` implementation reports an error (standard
/// types never do; chrono's pattern formatter does on a malformed pattern).
pub fn formatted_len(args: fmt::Arguments<'_>) -> Option<usize> {
    let mut counter = CountingWriter::default();
    fmt::write(&mut counter, args).ok()?;
    Some(counter.len)
}

/// Format into a newly allocated string of exactly the required size.
///
/// Prefer the [`format_owned!`](crate::format_owned) macro at call sites;
/// this function is the macro's target and also serves callers that already
/// hold a `fmt::Arguments`.
pub fn format_sized(args: fmt::Arguments<'_>) -> Option<String> {
    let len = formatted_len(args)?;
    let mut out = try_with_capacity(len)?;
    // Second traversal of the same Copy argument pack.
    out.write_fmt(args).ok()?;
    Some(out)
}

/// Format into a caller-supplied fixed buffer.
///
/// Never writes past the buffer. When the formatted output does not fit, a
/// truncated prefix (cut at a char boundary) is still written, a
/// size-mismatch warning is logged, and the error carries the full required
/// length. A `Display` implementation that refuses to format results in
/// `Ok(0)` with nothing written, matching the strftime-style "zero means
/// failure" convention used by [`crate::timefmt`].
pub fn format_into(buffer: &mut [u8], args: fmt::Arguments<'_>) -> Result<usize> {
    let Some(required) = formatted_len(args) else {
        log::error!("Formatter reported an error; nothing written");
        return Ok(0);
    };

    let capacity = buffer.len();
    let mut writer = TruncatingWriter {
        buffer,
        written: 0,
        saturated: false,
    };
    // Truncation is absorbed by the writer, so this pass cannot fail.
    let _ = fmt::write(&mut writer, args);
    let written = writer.written;

    if required > capacity {
        log::warn!(
            "Buffer of {capacity} bytes too small to hold formatted string, {required} bytes needed"
        );
        return Err(TopicsmithError::buffer_too_small(required, capacity));
    }
    Ok(written)
}

/// Concatenate two owned strings, consuming both.
///
/// If either side is absent the other is returned unchanged with no new
/// allocation. Ownership transfer replaces the original's explicit frees:
/// both operands are moved in, and whichever buffers are not returned are
/// dropped here.
pub fn concat_owned(a: Option<String>, b: Option<String>) -> Option<String> {
    match (a, b) {
        (Some(a), Some(b)) => {
            let mut out = try_with_capacity(a.len() + b.len())?;
            out.push_str(&a);
            out.push_str(&b);
            Some(out)
        }
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

/// Concatenate two owned strings with a divider between them.
///
/// The divider is inserted only when both parts are present.
pub fn concat_with_divider(
    a: Option<String>,
    b: Option<String>,
    divider: &str,
) -> Option<String> {
    match (a, b) {
        (Some(a), Some(b)) => {
            let mut out = try_with_capacity(a.len() + divider.len() + b.len())?;
            out.push_str(&a);
            out.push_str(divider);
            out.push_str(&b);
            Some(out)
        }
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

/// Format into a new owned string, returning `None` on allocation failure.
///
/// Expands to [`strings::format_sized`](crate::strings::format_sized) over
/// `format_args!`, so the argument pack is traversed twice without being
/// consumed.
#[macro_export]
macro_rules! format_owned {
    ($($arg:tt)*) => {
        $crate::strings::format_sized(::core::format_args!($($arg)*))
    };
}

/// Byte-counting sink for the sizing pass
#[derive(Default)]
struct CountingWriter {
    len: usize,
}

impl fmt::Write for CountingWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.len += s.len();
        Ok(())
    }
}

/// Best-effort sink that keeps a contiguous prefix and drops the rest
///
/// The formatter delivers output in chunks. After the first chunk is cut
/// short, every later chunk must be dropped too: writing it would splice
/// mid-output bytes after the cut and the buffer would no longer hold a
/// prefix of the formatted result.
struct TruncatingWriter<'a> {
    buffer: &'a mut [u8],
    written: usize,
    saturated: bool,
}

impl fmt::Write for TruncatingWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.saturated {
            return Ok(());
        }
        let remaining = self.buffer.len() - self.written;
        let mut take = s.len().min(remaining);
        while take > 0 && !s.is_char_boundary(take) {
            take -= 1;
        }
        self.buffer[self.written..self.written + take].copy_from_slice(&s.as_bytes()[..take]);
        self.written += take;
        if take < s.len() {
            self.saturated = true;
        }
        Ok(())
    }
}
