/// Number of bytes in the minimal unsigned representation of `val`.
///
/// 0 for value 0, matching the writers below, which emit nothing for 0.
#[inline]
pub fn uint_byte_len(val: u64) -> usize {
    (64 - val.leading_zeros() as usize).div_ceil(8)
}

/// Write the minimal little-endian byte run of `val` starting at `pos`.
///
/// One byte is emitted per 8 bits of the value, least-significant first,
/// until the remaining value is zero. Returns the offset just past the
/// last byte written. Value 0 writes no bytes at all and returns `pos`
/// unchanged (not a single zero byte).
#[inline]
pub fn write_uint_le(buf: &mut [u8], mut pos: usize, mut val: u64) -> usize {
    while val != 0 {
        buf[pos] = val as u8;
        val >>= 8;
        pos += 1;
    }
    pos
}

/// Write the minimal big-endian byte run of `val` starting at `pos`.
///
/// The most-significant non-zero byte lands at `pos`. Returns the offset
/// just past the last byte written; value 0 writes nothing, same as
/// [`write_uint_le`].
#[inline]
pub fn write_uint_be(buf: &mut [u8], pos: usize, mut val: u64) -> usize {
    let end = pos + uint_byte_len(val);
    let mut i = end;
    while val != 0 {
        i -= 1;
        buf[i] = val as u8;
        val >>= 8;
    }
    end
}
