pub mod bytes;
pub use bytes::{
    read_i8, read_i16_be, read_i16_le, read_i32_be, read_i32_le, read_u8, read_u16_be,
    read_u16_le, read_u32_be, read_u32_le, read_u64_be, read_u64_be_f64, read_u64_le,
    read_u64_le_f64, uint_byte_len, write_uint_be, write_uint_le,
};
