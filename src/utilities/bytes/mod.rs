//! Fixed-width integer accessors over caller-owned byte buffers.
//!
//! Readers borrow the buffer immutably and never allocate; writers touch
//! only the minimal byte run of the value. Offsets are not validated
//! against the buffer length: an out-of-range access panics via ordinary
//! slice indexing, which is a caller contract violation, not an error path.

pub mod read;
pub use read::{
    read_i8, read_i16_be, read_i16_le, read_i32_be, read_i32_le, read_u8, read_u16_be,
    read_u16_le, read_u32_be, read_u32_le, read_u64_be, read_u64_be_f64, read_u64_le,
    read_u64_le_f64,
};

pub mod write;
pub use write::{uint_byte_len, write_uint_be, write_uint_le};
