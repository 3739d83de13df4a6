use crate::prelude::*;

/// The length header that precedes every binary `DataArray` payload.
///
/// VTK reads this header with `header_type="UInt32"` (the default), so every field is a
/// 4 byte unsigned integer in the byte order of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    /// `[payload_len]`
    Uncompressed { payload_len: u32 },
    /// `[1, payload_len, payload_len, compressed_len]`
    ///
    /// block count, size of a full block, size of the last block, and the compressed size of
    /// each block. There is only ever one block so both block sizes are the full payload.
    Compressed { payload_len: u32, compressed_len: u32 },
}

impl Header {
    pub fn uncompressed(payload_len: usize) -> Result<Self, Error> {
        Ok(Self::Uncompressed {
            payload_len: header_field(payload_len)?,
        })
    }

    pub fn compressed(payload_len: usize, compressed_len: usize) -> Result<Self, Error> {
        Ok(Self::Compressed {
            payload_len: header_field(payload_len)?,
            compressed_len: header_field(compressed_len)?,
        })
    }

    fn fields(&self) -> Vec<u32> {
        match *self {
            Self::Uncompressed { payload_len } => vec![payload_len],
            Self::Compressed {
                payload_len,
                compressed_len,
            } => vec![1, payload_len, payload_len, compressed_len],
        }
    }

    /// number of bytes in the header (4 or 16)
    pub fn byte_len(&self) -> usize {
        match self {
            Self::Uncompressed { .. } => 4,
            Self::Compressed { .. } => 16,
        }
    }

    pub fn to_bytes(&self, byte_order: ByteOrder) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.byte_len());

        for field in self.fields() {
            match byte_order {
                ByteOrder::LittleEndian => bytes.extend_from_slice(&field.to_le_bytes()),
                ByteOrder::BigEndian => bytes.extend_from_slice(&field.to_be_bytes()),
            }
        }

        bytes
    }
}

fn header_field(len: usize) -> Result<u32, Error> {
    u32::try_from(len).map_err(|_| Error::HeaderOverflow(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncompressed_little_endian() {
        let header = Header::uncompressed(12).unwrap();
        assert_eq!(header.to_bytes(ByteOrder::LittleEndian), vec![0x0C, 0, 0, 0]);
    }

    #[test]
    fn uncompressed_big_endian() {
        let header = Header::uncompressed(12).unwrap();
        assert_eq!(header.to_bytes(ByteOrder::BigEndian), vec![0, 0, 0, 0x0C]);
    }

    #[test]
    fn compressed_field_order() {
        let header = Header::compressed(40, 17).unwrap();

        assert_eq!(
            header.to_bytes(ByteOrder::LittleEndian),
            vec![1, 0, 0, 0, 40, 0, 0, 0, 40, 0, 0, 0, 17, 0, 0, 0]
        );
        assert_eq!(
            header.to_bytes(ByteOrder::BigEndian),
            vec![0, 0, 0, 1, 0, 0, 0, 40, 0, 0, 0, 40, 0, 0, 0, 17]
        );
        assert_eq!(header.byte_len(), 16);
    }

    #[test]
    fn empty_payload() {
        let header = Header::uncompressed(0).unwrap();
        assert_eq!(header.to_bytes(ByteOrder::BigEndian), vec![0; 4]);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn lengths_past_u32_are_rejected() {
        let too_long = u32::MAX as usize + 1;
        assert!(matches!(
            Header::uncompressed(too_long),
            Err(Error::HeaderOverflow(len)) if len == too_long
        ));
    }
}
