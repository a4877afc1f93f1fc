//! Low-level readers and writers for the canonical wire format.
//!
//! Integers are LEB128 varints: each byte carries 7 data bits, low bits
//! first, with `0x80` set on every byte except the last. Signed values are
//! ZigZag-mapped to unsigned first so small magnitudes of either sign stay
//! short. Strings and nested messages are prefixed with their byte length.

use super::DecodeError;
use crate::config::MAX_VARINT_LEN;

/// Maps a signed integer onto the unsigned range: 0, -1, 1, -2, 2, ...
/// become 0, 1, 2, 3, 4, ...
pub const fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag_encode`].
pub const fn zigzag_decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

// ---------------------------------------------------------------------------
// Encoder
// ---------------------------------------------------------------------------

/// Append-only byte sink. Writing cannot fail.
#[derive(Debug, Default)]
pub struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Unsigned LEB128.
    pub fn write_varint(&mut self, mut value: u64) {
        while value > 0x7F {
            self.buf.push(0x80 | (value & 0x7F) as u8);
            value >>= 7;
        }
        self.buf.push(value as u8);
    }

    /// ZigZag, then unsigned LEB128.
    pub fn write_i64(&mut self, value: i64) {
        self.write_varint(zigzag_encode(value));
    }

    pub fn write_bool(&mut self, value: bool) {
        self.buf.push(u8::from(value));
    }

    /// Length-prefixed raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.write_varint(bytes.len() as u64);
        self.buf.extend_from_slice(bytes);
    }

    /// Length-prefixed UTF-8.
    pub fn write_str(&mut self, value: &str) {
        self.write_bytes(value.as_bytes());
    }

    /// Count-prefixed list of strings.
    pub fn write_str_list(&mut self, values: &[String]) {
        self.write_varint(values.len() as u64);
        for value in values {
            self.write_str(value);
        }
    }

    /// Encodes a nested message with `f` and writes it length-prefixed.
    pub fn write_nested(&mut self, f: impl FnOnce(&mut Encoder)) {
        let mut nested = Encoder::new();
        f(&mut nested);
        self.write_bytes(&nested.buf);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// Forward-only cursor over a borrowed byte slice.
#[derive(Debug)]
pub struct Decoder<'a> {
    buf: &'a [u8],
}

impl<'a> Decoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    /// Takes the next `len` bytes.
    pub fn read_raw(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if len > self.buf.len() {
            return Err(DecodeError::TruncatedInput {
                needed: len,
                remaining: self.buf.len(),
            });
        }
        let (head, tail) = self.buf.split_at(len);
        self.buf = tail;
        Ok(head)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read_raw(1)?[0])
    }

    /// Unsigned LEB128.
    ///
    /// Rejects encodings longer than ten bytes, encodings that overflow
    /// `u64`, and non-minimal encodings (a trailing `0x00` group), so every
    /// value has exactly one accepted byte form.
    pub fn read_varint(&mut self) -> Result<u64, DecodeError> {
        let mut value = 0u64;
        for index in 0..MAX_VARINT_LEN {
            let byte = self.read_u8()?;
            let data = u64::from(byte & 0x7F);
            // The tenth byte only has room for bit 63.
            if index == MAX_VARINT_LEN - 1 && data > 1 {
                return Err(DecodeError::malformed("varint overflows u64"));
            }
            value |= data << (7 * index);
            if byte & 0x80 == 0 {
                if byte == 0 && index > 0 {
                    return Err(DecodeError::malformed("non-canonical varint encoding"));
                }
                return Ok(value);
            }
        }
        Err(DecodeError::malformed("varint longer than 10 bytes"))
    }

    /// Unsigned LEB128, then ZigZag.
    pub fn read_i64(&mut self) -> Result<i64, DecodeError> {
        self.read_varint().map(zigzag_decode)
    }

    /// A single `0x00` or `0x01` byte.
    pub fn read_bool(&mut self) -> Result<bool, DecodeError> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(DecodeError::malformed(format!(
                "invalid bool byte 0x{other:02x}"
            ))),
        }
    }

    /// A varint length prefix, checked against the bytes that remain.
    pub fn read_len(&mut self) -> Result<usize, DecodeError> {
        let declared = self.read_varint()?;
        let len = usize::try_from(declared)
            .map_err(|_| DecodeError::malformed(format!("length {declared} does not fit in usize")))?;
        if len > self.buf.len() {
            return Err(DecodeError::TruncatedInput {
                needed: len,
                remaining: self.buf.len(),
            });
        }
        Ok(len)
    }

    /// Length-prefixed raw bytes.
    pub fn read_bytes(&mut self) -> Result<&'a [u8], DecodeError> {
        let len = self.read_len()?;
        self.read_raw(len)
    }

    /// Length-prefixed UTF-8.
    pub fn read_string(&mut self) -> Result<String, DecodeError> {
        let bytes = self.read_bytes()?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| DecodeError::malformed(format!("invalid UTF-8 in string: {e}")))
    }

    /// Count-prefixed list of strings.
    pub fn read_str_list(&mut self) -> Result<Vec<String>, DecodeError> {
        let count = self.read_varint()?;
        // Every entry takes at least one byte, so never reserve more than
        // what is left in the buffer.
        let capacity = usize::try_from(count).unwrap_or(usize::MAX).min(self.buf.len());
        let mut values = Vec::with_capacity(capacity);
        for _ in 0..count {
            values.push(self.read_string()?);
        }
        Ok(values)
    }

    /// Reads a length-prefixed nested message with `f`, which must consume
    /// it exactly.
    pub fn read_nested<T>(
        &mut self,
        f: impl FnOnce(&mut Decoder<'a>) -> Result<T, DecodeError>,
    ) -> Result<T, DecodeError> {
        let bytes = self.read_bytes()?;
        let mut nested = Decoder::new(bytes);
        let value = f(&mut nested)?;
        nested.finish()?;
        Ok(value)
    }

    /// Fails if any bytes are left over.
    pub fn finish(self) -> Result<(), DecodeError> {
        if !self.buf.is_empty() {
            return Err(DecodeError::malformed(format!(
                "{} trailing bytes after message",
                self.buf.len()
            )));
        }
        Ok(())
    }
}
