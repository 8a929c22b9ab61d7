//! Integer-to-string conversion in arbitrary radix
//!
//! Digits are written least-significant-first into the caller's buffer and
//! reversed in place, so no intermediate allocation happens. A radix outside
//! [2, 16], or a buffer too small for the digits, yields the empty string.

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Largest output: 64 binary digits plus a sign
pub const MAX_RADIX_DIGITS: usize = 65;

/// Convert an unsigned 64-bit value to text in `radix`, using `buffer` as
/// scratch space. The returned slice borrows from `buffer`.
pub fn u64_to_radix(value: u64, buffer: &mut [u8], radix: u32) -> &str {
    if !(2..=16).contains(&radix) {
        log::warn!("Invalid radix {radix}, returning empty string");
        return "";
    }
    let len = encode(value, false, buffer, radix as u64);
    ascii_prefix(buffer, len)
}

/// Convert a signed 64-bit value to text in `radix`.
///
/// A minus sign is emitted only for radix 10; other radices render the
/// two's-complement bit pattern, which is the conventional reading for hex
/// and binary dumps.
pub fn i64_to_radix(value: i64, buffer: &mut [u8], radix: u32) -> &str {
    if !(2..=16).contains(&radix) {
        log::warn!("Invalid radix {radix}, returning empty string");
        return "";
    }
    let (magnitude, negative) = if value < 0 && radix == 10 {
        (value.unsigned_abs(), true)
    } else {
        (value as u64, false)
    };
    let len = encode(magnitude, negative, buffer, radix as u64);
    ascii_prefix(buffer, len)
}

/// Emit digits LSD-first, append the sign, then reverse in place.
/// Returns 0 if the buffer ran out before the value was fully written.
fn encode(mut value: u64, negative: bool, buffer: &mut [u8], radix: u64) -> usize {
    let mut pos = 0;
    loop {
        if pos >= buffer.len() {
            log::warn!("Buffer of {} bytes too small for radix conversion", buffer.len());
            return 0;
        }
        buffer[pos] = DIGITS[(value % radix) as usize];
        pos += 1;
        value /= radix;
        if value == 0 {
            break;
        }
    }
    if negative {
        if pos >= buffer.len() {
            log::warn!("Buffer of {} bytes too small for radix conversion", buffer.len());
            return 0;
        }
        buffer[pos] = b'-';
        pos += 1;
    }
    buffer[..pos].reverse();
    pos
}

fn ascii_prefix(buffer: &[u8], len: usize) -> &str {
    // encode only emits ASCII, so this cannot fail
    std::str::from_utf8(&buffer[..len]).unwrap_or_default()
}
