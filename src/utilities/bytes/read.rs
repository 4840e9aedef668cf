/// Read the unsigned byte at `pos`.
#[inline]
pub fn read_u8(buf: &[u8], pos: usize) -> u8 {
    buf[pos]
}

/// Read the byte at `pos` as a two's-complement signed value.
#[inline]
pub fn read_i8(buf: &[u8], pos: usize) -> i8 {
    buf[pos] as i8
}

/// Read a 16-bit little-endian unsigned integer at `pos`.
#[inline]
pub fn read_u16_le(buf: &[u8], pos: usize) -> u16 {
    read_u8(buf, pos) as u16 | ((read_u8(buf, pos + 1) as u16) << 8)
}

/// Read a 16-bit big-endian unsigned integer at `pos`.
#[inline]
pub fn read_u16_be(buf: &[u8], pos: usize) -> u16 {
    ((read_u8(buf, pos) as u16) << 8) | read_u8(buf, pos + 1) as u16
}

#[inline]
pub fn read_i16_le(buf: &[u8], pos: usize) -> i16 {
    read_u16_le(buf, pos) as i16
}

#[inline]
pub fn read_i16_be(buf: &[u8], pos: usize) -> i16 {
    read_u16_be(buf, pos) as i16
}

/// Read a 32-bit little-endian unsigned integer at `pos`.
#[inline]
pub fn read_u32_le(buf: &[u8], pos: usize) -> u32 {
    buf[pos] as u32
        | ((buf[pos + 1] as u32) << 8)
        | ((buf[pos + 2] as u32) << 16)
        | ((buf[pos + 3] as u32) << 24)
}

/// Read a 32-bit big-endian unsigned integer at `pos`.
#[inline]
pub fn read_u32_be(buf: &[u8], pos: usize) -> u32 {
    ((buf[pos] as u32) << 24)
        | ((buf[pos + 1] as u32) << 16)
        | ((buf[pos + 2] as u32) << 8)
        | buf[pos + 3] as u32
}

#[inline]
pub fn read_i32_le(buf: &[u8], pos: usize) -> i32 {
    read_u32_le(buf, pos) as i32
}

#[inline]
pub fn read_i32_be(buf: &[u8], pos: usize) -> i32 {
    read_u32_be(buf, pos) as i32
}

/// Read a 64-bit little-endian unsigned integer at `pos`.
///
/// Exact over the whole `0..=u64::MAX` range.
#[inline]
pub fn read_u64_le(buf: &[u8], pos: usize) -> u64 {
    read_u32_le(buf, pos) as u64 | ((read_u32_le(buf, pos + 4) as u64) << 32)
}

/// Read a 64-bit big-endian unsigned integer at `pos`.
///
/// Exact over the whole `0..=u64::MAX` range.
#[inline]
pub fn read_u64_be(buf: &[u8], pos: usize) -> u64 {
    ((read_u32_be(buf, pos) as u64) << 32) | read_u32_be(buf, pos + 4) as u64
}

/// Read a 64-bit little-endian unsigned integer at `pos` as an `f64`.
///
/// The two 32-bit halves are combined with double-precision arithmetic
/// (`low + high * 2^32`), so values above 2^53 - 1 are rounded to the
/// nearest representable double and several consecutive 64-bit values can
/// collapse to the same result. This is the documented lossy contract;
/// use [`read_u64_le`] when the full range must be distinguished.
#[inline]
pub fn read_u64_le_f64(buf: &[u8], pos: usize) -> f64 {
    read_u32_le(buf, pos) as f64 + read_u32_le(buf, pos + 4) as f64 * 4_294_967_296.0
}

/// Read a 64-bit big-endian unsigned integer at `pos` as an `f64`.
///
/// Same lossy contract as [`read_u64_le_f64`]; use [`read_u64_be`] for
/// exact reads above 2^53 - 1.
#[inline]
pub fn read_u64_be_f64(buf: &[u8], pos: usize) -> f64 {
    read_u32_be(buf, pos) as f64 * 4_294_967_296.0 + read_u32_be(buf, pos + 4) as f64
}
