//! A collection of utilities for handling numbers, signatures and the
//! constants of the coding scheme.

/// Signatures and names that identify barch files.
pub mod signatures {
    /// The starter string of every barch container.
    pub const BARCH_SIG: [u8; 5] = *b"BA000";
    pub const FILE_EXTENSION: &str = ".barch";

    /// Return True if 'input' starts with 'signature'.
    pub fn match_signature(input: &[u8], signature: &[u8]) -> bool {
        input.starts_with(signature)
    }
}

/// Implements encoding and decoding of the fixed-width header numbers. The
/// container stores them in little-endian order.
pub mod number_encoding {
    pub fn encode32(num: u32, stream: &mut Vec<u8>) -> usize {
        stream.extend_from_slice(&num.to_le_bytes());
        4
    }

    pub fn decode32(stream: &[u8]) -> Option<(usize, u32)> {
        let bytes: [u8; 4] = stream.get(0..4)?.try_into().ok()?;
        Some((4, u32::from_le_bytes(bytes)))
    }

    #[test]
    fn test_encode32_is_little_endian() {
        let mut stream = Vec::new();
        let written = encode32(0x0102_0304, &mut stream);
        assert_eq!(written, 4);
        assert_eq!(stream, [4, 3, 2, 1]);
    }

    #[test]
    fn test_decode32_short_input() {
        assert_eq!(decode32(&[1, 2, 3]), None);
        assert_eq!(decode32(&[1, 0, 0, 0, 9]), Some((4, 1)));
    }
}

/// The fixed parameters of the run-length scheme.
pub mod scheme {
    /// The number of samples covered by one run symbol.
    pub const BATCH_PIXELS: usize = 4;
    /// The number of uniform batches a row needs before it is packed.
    pub const MIN_BATCHES_TO_COMPRESS: usize = 2;
    /// The only sample depth the codec handles.
    pub const SUPPORTED_BITS_PER_PIXEL: u16 = 8;

    pub const WHITE: u8 = 255;
    pub const BLACK: u8 = 0;

    /// Symbol codes, right-aligned, with their widths in bits.
    pub const WHITE_CODE: u8 = 0b0;
    pub const WHITE_CODE_BITS: u8 = 1;
    pub const BLACK_CODE: u8 = 0b10;
    pub const BLACK_CODE_BITS: u8 = 2;
    pub const LITERAL_CODE: u8 = 0b11;
    pub const LITERAL_CODE_BITS: u8 = 2;

    pub fn is_white(sample: u8) -> bool {
        sample == WHITE
    }

    pub fn is_black(sample: u8) -> bool {
        sample == BLACK
    }
}

/// Packs one boolean per row into bytes, MSB-first, zero padded.
pub mod flag_table {
    /// The number of bytes needed to store 'rows' flags.
    pub fn packed_len(rows: usize) -> usize {
        (rows + 7) / 8
    }

    /// Encode the flags into the stream and return the number of bytes
    /// written.
    pub fn encode(flags: &[bool], stream: &mut Vec<u8>) -> usize {
        for chunk in flags.chunks(8) {
            let mut byte = 0u8;
            for (i, flag) in chunk.iter().enumerate() {
                if *flag {
                    byte |= 0x80 >> i;
                }
            }
            stream.push(byte);
        }
        packed_len(flags.len())
    }

    /// Decode 'rows' flags from the stream. Returns the number of bytes read
    /// and the flags, or None if the stream is too short.
    pub fn decode(stream: &[u8], rows: usize) -> Option<(usize, Vec<bool>)> {
        let len = packed_len(rows);
        let bytes = stream.get(0..len)?;
        let flags = (0..rows)
            .map(|i| bytes[i / 8] & (0x80 >> (i % 8)) != 0)
            .collect();
        Some((len, flags))
    }

    #[test]
    fn test_flag_table_msb_first() {
        let mut stream = Vec::new();
        let flags = [true, false, true, false, false, false, false, true, true];
        assert_eq!(encode(&flags, &mut stream), 2);
        assert_eq!(stream, [0b1010_0001, 0b1000_0000]);
        let (read, decoded) = decode(&stream, flags.len()).unwrap();
        assert_eq!(read, 2);
        assert_eq!(decoded, flags);
    }

    #[test]
    fn test_flag_table_short() {
        assert_eq!(decode(&[0xff], 9), None);
        assert_eq!(packed_len(0), 0);
        assert_eq!(packed_len(8), 1);
        assert_eq!(packed_len(9), 2);
    }
}
