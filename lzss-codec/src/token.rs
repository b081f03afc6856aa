//! Token stream framing.
//!
//! Tokens are grouped into blocks of up to eight. Each block starts with a
//! flag byte whose bit `i` (LSB first) is 1 when token `i` is a literal and
//! 0 when it is a match.
//!
//! ```text
//! block   := flags token{1..8}
//! literal := byte
//! match   := u16 little-endian: (distance - 1) << length_bits
//!                               | (length - threshold - 1)
//! ```
//!
//! Only the last block of a stream may hold fewer than eight tokens; its
//! unused flag bits are zero.

use crate::config::LzssConfig;
use lzss_core::error::{LzssError, Result};
use lzss_core::io::{ByteReader, ByteWriter};
use std::io::{Read, Write};

/// Tokens per flag byte.
pub const TOKENS_PER_BLOCK: u8 = 8;

/// Largest encoded block: flag byte plus eight match payloads.
const MAX_BLOCK_LEN: usize = 1 + 2 * TOKENS_PER_BLOCK as usize;

/// LZSS token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A literal byte.
    Literal(u8),
    /// A back-reference into the history window.
    Match {
        /// Distance back from the current position (1-based).
        distance: u16,
        /// Number of bytes to copy.
        length: u16,
    },
}

impl Token {
    /// Number of payload bytes this token occupies on the wire.
    pub fn payload_len(&self) -> usize {
        match self {
            Self::Literal(_) => 1,
            Self::Match { .. } => 2,
        }
    }

    /// Number of uncompressed bytes this token stands for.
    pub fn expanded_len(&self) -> usize {
        match self {
            Self::Literal(_) => 1,
            Self::Match { length, .. } => *length as usize,
        }
    }
}

/// Pack a match into its two wire bytes.
///
/// The caller guarantees `1 <= distance <= window_size` and
/// `min_match <= length <= max_match`.
pub fn pack_match(config: &LzssConfig, distance: usize, length: usize) -> [u8; 2] {
    debug_assert!(distance >= 1 && distance <= config.window_size());
    debug_assert!(length >= config.min_match() && length <= config.max_match());

    let code = ((distance - 1) << config.length_bits) | (length - config.min_match());
    (code as u16).to_le_bytes()
}

/// Unpack two wire bytes into `(distance, length)`.
pub fn unpack_match(config: &LzssConfig, bytes: [u8; 2]) -> (usize, usize) {
    let code = u16::from_le_bytes(bytes) as usize;
    let length_mask = (1usize << config.length_bits) - 1;

    let distance = (code >> config.length_bits) + 1;
    let length = (code & length_mask) + config.min_match();
    (distance, length)
}

/// Buffers tokens into flag-byte blocks and writes each full block.
#[derive(Debug)]
pub struct TokenWriter<W: Write> {
    writer: ByteWriter<W>,
    config: LzssConfig,
    /// Flag byte followed by pending payload bytes.
    block: [u8; MAX_BLOCK_LEN],
    /// Used length of `block`.
    len: usize,
    /// Tokens in the pending block.
    count: u8,
    literals: u64,
    matches: u64,
    blocks: u64,
}

impl<W: Write> TokenWriter<W> {
    /// Create a token writer over `writer`.
    pub fn new(writer: W, config: LzssConfig) -> Self {
        Self {
            writer: ByteWriter::new(writer),
            config,
            block: [0; MAX_BLOCK_LEN],
            len: 1,
            count: 0,
            literals: 0,
            matches: 0,
            blocks: 0,
        }
    }

    /// Append one token, writing the block out once it holds eight.
    pub fn push(&mut self, token: Token) -> Result<()> {
        match token {
            Token::Literal(byte) => {
                self.block[0] |= 1 << self.count;
                self.block[self.len] = byte;
                self.len += 1;
                self.literals += 1;
            }
            Token::Match { distance, length } => {
                let code = pack_match(&self.config, distance as usize, length as usize);
                self.block[self.len..self.len + 2].copy_from_slice(&code);
                self.len += 2;
                self.matches += 1;
            }
        }

        self.count += 1;
        if self.count == TOKENS_PER_BLOCK {
            self.flush_block()?;
        }
        Ok(())
    }

    fn flush_block(&mut self) -> Result<()> {
        self.writer.write_all(&self.block[..self.len])?;
        self.blocks += 1;
        tracing::trace!(
            flags = self.block[0],
            tokens = self.count,
            bytes = self.len,
            "block written"
        );

        self.block[0] = 0;
        self.len = 1;
        self.count = 0;
        Ok(())
    }

    /// Tokens pushed so far as `(literals, matches)`.
    pub fn token_counts(&self) -> (u64, u64) {
        (self.literals, self.matches)
    }

    /// Blocks written so far (not counting a pending partial block).
    pub fn blocks(&self) -> u64 {
        self.blocks
    }

    /// Bytes written to the sink so far.
    pub fn bytes_written(&self) -> u64 {
        self.writer.bytes_written()
    }

    /// Write any partial block and flush the sink.
    pub fn finish(&mut self) -> Result<()> {
        if self.count > 0 {
            self.flush_block()?;
        }
        self.writer.flush()
    }
}

/// Reads tokens back out of a block stream.
///
/// End-of-stream is clean where a flag byte is expected, and at a token
/// boundary after the first token of a block when the remaining flag bits
/// are all zero. Running out inside a token payload, right after a flag
/// byte, or while a flag bit is still set is a truncated stream.
#[derive(Debug)]
pub struct TokenReader<R: Read> {
    reader: ByteReader<R>,
    config: LzssConfig,
    /// Remaining flag bits, current token in bit 0.
    flags: u8,
    /// Tokens left in the current block.
    remaining: u8,
    blocks: u64,
    failed: bool,
}

impl<R: Read> TokenReader<R> {
    /// Create a token reader over `reader`.
    pub fn new(reader: R, config: LzssConfig) -> Self {
        Self {
            reader: ByteReader::new(reader),
            config,
            flags: 0,
            remaining: 0,
            blocks: 0,
            failed: false,
        }
    }

    /// Compressed bytes consumed so far.
    pub fn bytes_read(&self) -> u64 {
        self.reader.bytes_read()
    }

    /// Flag bytes read so far.
    pub fn blocks(&self) -> u64 {
        self.blocks
    }

    /// Read the next token, or `None` at a clean end of stream.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        if self.remaining == 0 {
            match self.reader.read_byte()? {
                Some(flags) => {
                    self.flags = flags;
                    self.remaining = TOKENS_PER_BLOCK;
                    self.blocks += 1;
                }
                None => return Ok(None),
            }
        }

        let first_in_block = self.remaining == TOKENS_PER_BLOCK;
        let is_literal = self.flags & 1 != 0;
        let payload = if is_literal { 1 } else { 2 };

        let Some(lead) = self.reader.read_byte()? else {
            // Unused slots of the final block are written as zero bits, so a
            // set bit means announced tokens are missing.
            if first_in_block || self.flags != 0 {
                return Err(LzssError::truncated(self.reader.bytes_read(), payload));
            }
            self.remaining = 0;
            return Ok(None);
        };

        self.flags >>= 1;
        self.remaining -= 1;

        if is_literal {
            return Ok(Some(Token::Literal(lead)));
        }

        let Some(trail) = self.reader.read_byte()? else {
            return Err(LzssError::truncated(self.reader.bytes_read(), 1));
        };
        let (distance, length) = unpack_match(&self.config, [lead, trail]);
        Ok(Some(Token::Match {
            distance: distance as u16,
            length: length as u16,
        }))
    }
}

impl<R: Read> Iterator for TokenReader<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
