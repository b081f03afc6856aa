//! Byte-oriented I/O collaborators.
//!
//! The codec consumes its input one byte at a time and produces output one
//! byte (or one short block) at a time. [`ByteReader`] and [`ByteWriter`]
//! adapt any `Read` / `Write` to that shape and keep byte counts for
//! diagnostics and error offsets.
//!
//! # Example
//!
//! ```
//! use lzss_core::io::{ByteReader, ByteWriter};
//! use std::io::Cursor;
//!
//! let mut reader = ByteReader::new(Cursor::new(b"ab".to_vec()));
//! assert_eq!(reader.read_byte().unwrap(), Some(b'a'));
//! assert_eq!(reader.read_byte().unwrap(), Some(b'b'));
//! assert_eq!(reader.read_byte().unwrap(), None);
//!
//! let mut writer = ByteWriter::new(Vec::new());
//! writer.write_byte(0x2A).unwrap();
//! assert_eq!(writer.into_inner().unwrap(), vec![0x2A]);
//! ```

use crate::error::Result;
use std::io::{ErrorKind, Read, Write};

/// Size of the internal read buffer.
const READ_BUFFER_SIZE: usize = 8192;

/// A buffered byte reader over any `Read` implementation.
///
/// Once the source reports end-of-stream, the reader stays at
/// end-of-stream and never calls the source again.
#[derive(Debug)]
pub struct ByteReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Read-ahead buffer.
    buffer: Box<[u8]>,
    /// Next unread index in `buffer`.
    pos: usize,
    /// Number of valid bytes in `buffer`.
    filled: usize,
    /// Whether the source has reported end-of-stream.
    eof: bool,
    /// Total bytes handed out.
    total_read: u64,
}

impl<R: Read> ByteReader<R> {
    /// Create a new `ByteReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: vec![0u8; READ_BUFFER_SIZE].into_boxed_slice(),
            pos: 0,
            filled: 0,
            eof: false,
            total_read: 0,
        }
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consume this `ByteReader` and return the underlying reader.
    ///
    /// Bytes already buffered but not yet returned are lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Total number of bytes returned so far.
    pub fn bytes_read(&self) -> u64 {
        self.total_read
    }

    /// Read one byte, or `None` at end-of-stream.
    #[inline]
    pub fn read_byte(&mut self) -> Result<Option<u8>> {
        if self.pos == self.filled && !self.refill()? {
            return Ok(None);
        }

        let byte = self.buffer[self.pos];
        self.pos += 1;
        self.total_read += 1;
        Ok(Some(byte))
    }

    /// Refill the buffer. Returns `false` at end-of-stream.
    fn refill(&mut self) -> Result<bool> {
        if self.eof {
            return Ok(false);
        }

        loop {
            match self.reader.read(&mut self.buffer) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(false);
                }
                Ok(n) => {
                    self.pos = 0;
                    self.filled = n;
                    return Ok(true);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// A byte writer over any `Write` implementation that counts its output.
#[derive(Debug)]
pub struct ByteWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Total bytes written.
    total_written: u64,
}

impl<W: Write> ByteWriter<W> {
    /// Create a new `ByteWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            total_written: 0,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Total number of bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        self.total_written
    }

    /// Write a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.write_all(&[byte])
    }

    /// Write a whole slice.
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes)?;
        self.total_written += bytes.len() as u64;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.writer)
    }
}
