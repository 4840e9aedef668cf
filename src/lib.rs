use core::ffi::c_int;
use std::{ptr, slice};

pub mod utilities;
use utilities::bytes;

const OK: c_int = 0;
const ERR_INVALID_ARGS: c_int = 1;
const ERR_RANGE: c_int = 2;

#[unsafe(no_mangle)]
pub unsafe extern "C" fn alloc(size: usize) -> *mut u8 {
    if size == 0 {
        return core::ptr::null_mut();
    }
    let mut v = Vec::<u8>::with_capacity(size);
    let p = v.as_mut_ptr();
    core::mem::forget(v);
    p
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_(ptr_raw: *mut u8, size: usize) {
    if !ptr_raw.is_null() {
        let _ = unsafe { Vec::<u8>::from_raw_parts(ptr_raw, size, size) };
    }
}

#[inline]
fn in_range(pos: usize, width: usize, buf_len: usize) -> bool {
    pos.checked_add(width).map_or(false, |end| end <= buf_len)
}

macro_rules! ffi_read {
    ($name:ident, $width:expr, $out:ty, $core:path) => {
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $name(
            buf_ptr: *const u8,
            buf_len: usize,
            pos: usize,
            out: *mut $out,
        ) -> c_int {
            if buf_ptr.is_null() || out.is_null() {
                return ERR_INVALID_ARGS;
            }
            if !in_range(pos, $width, buf_len) {
                return ERR_RANGE;
            }
            let buf = unsafe { slice::from_raw_parts(buf_ptr, buf_len) };
            unsafe { ptr::write_unaligned(out, $core(buf, pos)) };
            OK
        }
    };
}

ffi_read!(read_u8, 1, u8, bytes::read_u8);
ffi_read!(read_i8, 1, i8, bytes::read_i8);
ffi_read!(read_u16_le, 2, u16, bytes::read_u16_le);
ffi_read!(read_u16_be, 2, u16, bytes::read_u16_be);
ffi_read!(read_i16_le, 2, i16, bytes::read_i16_le);
ffi_read!(read_i16_be, 2, i16, bytes::read_i16_be);
ffi_read!(read_u32_le, 4, u32, bytes::read_u32_le);
ffi_read!(read_u32_be, 4, u32, bytes::read_u32_be);
ffi_read!(read_i32_le, 4, i32, bytes::read_i32_le);
ffi_read!(read_i32_be, 4, i32, bytes::read_i32_be);
ffi_read!(read_u64_le, 8, u64, bytes::read_u64_le);
ffi_read!(read_u64_be, 8, u64, bytes::read_u64_be);
ffi_read!(read_u64_le_f64, 8, f64, bytes::read_u64_le_f64);
ffi_read!(read_u64_be_f64, 8, f64, bytes::read_u64_be_f64);

#[unsafe(no_mangle)]
pub unsafe extern "C" fn write_uint_le(
    buf_ptr: *mut u8,
    buf_len: usize,
    pos: usize,
    val: u64,
    out_pos: *mut usize,
) -> c_int {
    if buf_ptr.is_null() || out_pos.is_null() {
        return ERR_INVALID_ARGS;
    }
    if !in_range(pos, bytes::uint_byte_len(val), buf_len) {
        return ERR_RANGE;
    }
    let buf = unsafe { slice::from_raw_parts_mut(buf_ptr, buf_len) };
    unsafe { ptr::write_unaligned(out_pos, bytes::write_uint_le(buf, pos, val)) };
    OK
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn write_uint_be(
    buf_ptr: *mut u8,
    buf_len: usize,
    pos: usize,
    val: u64,
    out_pos: *mut usize,
) -> c_int {
    if buf_ptr.is_null() || out_pos.is_null() {
        return ERR_INVALID_ARGS;
    }
    if !in_range(pos, bytes::uint_byte_len(val), buf_len) {
        return ERR_RANGE;
    }
    let buf = unsafe { slice::from_raw_parts_mut(buf_ptr, buf_len) };
    unsafe { ptr::write_unaligned(out_pos, bytes::write_uint_be(buf, pos, val)) };
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn uint_byte_len(val: u64) -> usize {
    bytes::uint_byte_len(val)
}
