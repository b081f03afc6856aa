//! # LZSS Codec
//!
//! Lempel-Ziv-Storer-Szymanski compression in the classic layout: a 4 KB
//! sliding window, matches of 3 to 18 bytes and a flag byte in front of
//! every eight tokens.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies
//! - **Streaming**: Encoder and decoder run over any `Read` / `Write`
//! - **Binary-tree match finder**: Longest match in amortized O(log N)
//! - **Configurable**: Other splits of the 16-bit match code, other thresholds
//!
//! ## Format
//!
//! - Each block is one flag byte followed by up to eight tokens
//! - Flag bit `i` (LSB first) is 1 for a literal byte, 0 for a match
//! - A match is a little-endian `u16`: `(distance - 1) << length_bits | (length - threshold - 1)`
//! - Distances count back from the current output position; they never
//!   reach before the start of the stream
//!
//! ## Example
//!
//! ```rust
//! use lzss_codec::{compress, decompress, LzssConfig};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let compressed = compress(original, LzssConfig::CLASSIC).unwrap();
//! let decompressed = decompress(&compressed, LzssConfig::CLASSIC).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod encoder;
pub mod finder;
pub mod token;
pub mod tree;

pub use config::{LzssConfig, MATCH_CODE_BITS, MAX_LOOKAHEAD, MatchStrategy};
pub use decoder::LzssDecoder;
pub use encoder::LzssEncoder;
pub use finder::{Finder, LinearScan, Match, MatchFinder};
pub use lzss_core::{Compressor, Decompressor, LzssError, Result, StreamStats};
pub use token::{Token, TokenReader, TokenWriter};
pub use tree::MatchTree;

use std::io::{Read, Write};

/// Compress data with LZSS using the given configuration.
///
/// # Example
///
/// ```rust
/// use lzss_codec::{compress, LzssConfig};
///
/// let data = b"abcabcabcabcabcabcabcabc";
/// let compressed = compress(data, LzssConfig::CLASSIC).unwrap();
/// assert!(compressed.len() < data.len());
/// ```
pub fn compress(data: &[u8], config: LzssConfig) -> Result<Vec<u8>> {
    let mut encoder = LzssEncoder::new(config)?;
    encoder.compress_all(data)
}

/// Decompress LZSS data produced with the same configuration.
pub fn decompress(data: &[u8], config: LzssConfig) -> Result<Vec<u8>> {
    let mut decoder = LzssDecoder::new(config)?;
    decoder.decompress_all(data)
}

/// Compress everything from `input` into `output`.
///
/// Neither side is buffered here beyond the codec's own read-ahead; wrap
/// files in `BufWriter` for throughput.
pub fn compress_stream<R: Read, W: Write>(
    input: R,
    output: W,
    config: LzssConfig,
) -> Result<StreamStats> {
    LzssEncoder::new(config)?.encode(input, output)
}

/// Decompress everything from `input` into `output`.
pub fn decompress_stream<R: Read, W: Write>(
    input: R,
    output: W,
    config: LzssConfig,
) -> Result<StreamStats> {
    LzssDecoder::new(config)?.decode(input, output)
}

/// Compress with the classic 4 KB / 18-byte parameters.
///
/// This is equivalent to `compress(data, LzssConfig::CLASSIC)`.
pub fn compress_classic(data: &[u8]) -> Result<Vec<u8>> {
    compress(data, LzssConfig::CLASSIC)
}

/// Decompress classic-parameter data.
///
/// This is equivalent to `decompress(data, LzssConfig::CLASSIC)`.
pub fn decompress_classic(data: &[u8]) -> Result<Vec<u8>> {
    decompress(data, LzssConfig::CLASSIC)
}
