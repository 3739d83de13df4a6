use crate::prelude::*;

/// Serialize every value of `array` into a new buffer of exactly `array.byte_len()` bytes.
pub fn encode_bytes<A: Array + ?Sized>(array: &A, byte_order: ByteOrder) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(array.byte_len());
    array.write_bytes(byte_order, &mut bytes);
    debug_assert_eq!(bytes.len(), array.byte_len());
    bytes
}
