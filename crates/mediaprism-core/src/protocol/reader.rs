//! TL primitive reader (panic-free).
//!
//! Parsing rules:
//! - Never index (`buf[0]`); always use `Buf` and `remaining()` checks.
//! - Never `unwrap()` / `expect()` / `panic!()` in production paths.

use bytes::Buf;

use crate::error::{MediaError, Result};

/// Boxed `Vector<T>` constructor.
pub const VECTOR: u32 = 0x1cb5c415;

/// First byte marking a 3-byte length in a `bytes`/`string` field.
const LONG_LENGTH_MARKER: u8 = 254;

/// Cursor over a borrowed TL stream.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    fn need(&self, n: usize, what: &str) -> Result<()> {
        if self.buf.remaining() < n {
            return Err(MediaError::MalformedStream(format!(
                "{what}: need {n} bytes, have {}",
                self.buf.remaining()
            )));
        }
        Ok(())
    }

    pub fn read_constructor(&mut self) -> Result<u32> {
        self.need(4, "constructor")?;
        Ok(self.buf.get_u32_le())
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.need(4, "int")?;
        Ok(self.buf.get_i32_le())
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        self.need(8, "long")?;
        Ok(self.buf.get_i64_le())
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        self.need(8, "double")?;
        Ok(self.buf.get_f64_le())
    }

    /// Read a length-prefixed `bytes` field, consuming its padding.
    pub fn read_bytes(&mut self) -> Result<Vec<u8>> {
        self.need(1, "bytes length")?;
        let first = self.buf.get_u8();

        let (len, header) = match first {
            255 => {
                return Err(MediaError::MalformedStream(
                    "bytes length byte 255 is reserved".into(),
                ))
            }
            LONG_LENGTH_MARKER => {
                self.need(3, "bytes long length")?;
                let lo = self.buf.get_u8() as usize;
                let mid = self.buf.get_u8() as usize;
                let hi = self.buf.get_u8() as usize;
                (lo | (mid << 8) | (hi << 16), 4)
            }
            short => (short as usize, 1),
        };

        self.need(len, "bytes payload")?;
        let mut data = vec![0u8; len];
        self.buf.copy_to_slice(&mut data);

        let padding = (4 - (header + len) % 4) % 4;
        self.need(padding, "bytes padding")?;
        self.buf.advance(padding);

        Ok(data)
    }

    /// Read a `string` field (UTF-8 `bytes`).
    pub fn read_string(&mut self) -> Result<String> {
        let raw = self.read_bytes()?;
        String::from_utf8(raw)
            .map_err(|e| MediaError::MalformedStream(format!("invalid utf-8 string: {e}")))
    }

    /// Read a boxed `Vector<T>`, parsing each element with `item`.
    pub fn read_vector<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        let id = self.read_constructor()?;
        if id != VECTOR {
            return Err(MediaError::UnrecognizedSchema(id));
        }
        let count = self.read_i32()?;
        let count = usize::try_from(count)
            .map_err(|_| MediaError::MalformedStream(format!("negative vector count {count}")))?;

        // every element takes at least 4 bytes; cap the preallocation accordingly
        let mut out = Vec::with_capacity(count.min(self.remaining() / 4));
        for _ in 0..count {
            out.push(item(self)?);
        }
        Ok(out)
    }
}
