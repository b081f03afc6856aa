//! Core traits for compression and decompression.
//!
//! Both directions are blocking, run-to-completion operations over a
//! `Read` source and a `Write` sink. Each call owns its working state.

use crate::error::Result;
use std::io::{Read, Write};

/// Counters collected while a stream is encoded or decoded.
///
/// These are informational only; nothing in the format depends on them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Bytes consumed from the source.
    pub bytes_in: u64,
    /// Bytes written to the sink.
    pub bytes_out: u64,
    /// Literal tokens emitted or decoded.
    pub literals: u64,
    /// Match tokens emitted or decoded.
    pub matches: u64,
    /// Flag-byte blocks emitted or decoded.
    pub blocks: u64,
}

impl StreamStats {
    /// Total number of tokens.
    pub fn tokens(&self) -> u64 {
        self.literals + self.matches
    }

    /// Output size as a fraction of input size (0.0 for empty input).
    pub fn ratio(&self) -> f64 {
        if self.bytes_in == 0 {
            0.0
        } else {
            self.bytes_out as f64 / self.bytes_in as f64
        }
    }

    /// Space savings as a percentage (negative when the output grew).
    pub fn space_savings(&self) -> f64 {
        if self.bytes_in == 0 {
            0.0
        } else {
            (1.0 - self.ratio()) * 100.0
        }
    }
}

/// A blocking stream compressor (encoder).
pub trait Compressor {
    /// Compress everything from `input` into `output`.
    fn compress<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<StreamStats>;

    /// Compress a byte slice into a new vector (convenience method).
    fn compress_all(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len() / 2 + 16);
        self.compress(input, &mut output)?;
        Ok(output)
    }
}

/// A blocking stream decompressor (decoder).
pub trait Decompressor {
    /// Decompress everything from `input` into `output`.
    fn decompress<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<StreamStats>;

    /// Decompress a byte slice into a new vector (convenience method).
    fn decompress_all(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len() * 2);
        self.decompress(input, &mut output)?;
        Ok(output)
    }
}
