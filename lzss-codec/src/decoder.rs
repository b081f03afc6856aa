//! LZSS decoder (decompression).

use crate::config::LzssConfig;
use crate::token::{Token, TokenReader};
use lzss_core::RingWindow;
use lzss_core::error::Result;
use lzss_core::io::ByteWriter;
use lzss_core::traits::{Decompressor, StreamStats};
use std::io::{Read, Write};

/// LZSS decoder for decompression.
#[derive(Debug)]
pub struct LzssDecoder {
    config: LzssConfig,
    window: RingWindow,
    /// Bytes of the match being copied.
    scratch: Vec<u8>,
}

impl LzssDecoder {
    /// Create a new decoder, rejecting unencodable configurations.
    pub fn new(config: LzssConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            window: RingWindow::new(config.window_size(), config.max_match(), config.filler),
            scratch: Vec::with_capacity(config.max_match()),
        })
    }

    /// The configuration this decoder was built with.
    pub fn config(&self) -> &LzssConfig {
        &self.config
    }

    /// Reset the decoder to initial state.
    pub fn reset(&mut self) {
        self.window.reset();
        self.scratch.clear();
    }

    /// Decode a token stream from `input` into `output`.
    ///
    /// Match bytes are copied one at a time, so a match may overlap the
    /// bytes it produces (distance smaller than length repeats a pattern).
    pub fn decode<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<StreamStats> {
        self.reset();

        let mut tokens = TokenReader::new(input, self.config);
        let mut writer = ByteWriter::new(output);
        let mut literals = 0u64;
        let mut matches = 0u64;

        tracing::debug!(window = self.config.window_size(), "decode start");

        while let Some(token) = tokens.next_token()? {
            match token {
                Token::Literal(byte) => {
                    writer.write_byte(byte)?;
                    self.window.push(byte);
                    literals += 1;
                }
                Token::Match { distance, length } => {
                    self.scratch.clear();
                    for _ in 0..length {
                        let byte = self.window.read_at_distance(distance as usize)?;
                        self.window.push(byte);
                        self.scratch.push(byte);
                    }
                    writer.write_all(&self.scratch)?;
                    matches += 1;
                }
            }
        }

        writer.flush()?;

        let stats = StreamStats {
            bytes_in: tokens.bytes_read(),
            bytes_out: writer.bytes_written(),
            literals,
            matches,
            blocks: tokens.blocks(),
        };
        tracing::debug!(
            bytes_in = stats.bytes_in,
            bytes_out = stats.bytes_out,
            "decode done"
        );
        Ok(stats)
    }
}

impl Decompressor for LzssDecoder {
    fn decompress<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<StreamStats> {
        self.decode(input, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lzss_core::error::LzssError;

    fn decoder() -> LzssDecoder {
        LzssDecoder::new(LzssConfig::CLASSIC).unwrap()
    }

    #[test]
    fn test_decode_empty() {
        assert!(decoder().decompress_all(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_decode_literals_then_match() {
        // flags 0b011: literal, literal, match(distance 2, length 4).
        let stream = [0x03, b'a', b'b', 0x11, 0x00];

        let out = decoder().decompress_all(&stream).unwrap();

        assert_eq!(out, b"ababab");
    }

    #[test]
    fn test_decode_overlapping_match() {
        // One literal, then distance 1 / length 18 repeats it.
        let stream = [0x01, b'x', 0x0F, 0x00];

        let out = decoder().decompress_all(&stream).unwrap();

        assert_eq!(out, vec![b'x'; 19]);
    }

    #[test]
    fn test_partial_final_block() {
        // Three literals; the unused slots carry zero bits.
        let stream = [0x07, b'a', b'b', b'c'];

        let out = decoder().decompress_all(&stream).unwrap();

        assert_eq!(out, b"abc");
    }

    #[test]
    fn test_missing_announced_literal_is_rejected() {
        // Flag byte announces eight literals, only three follow.
        let stream = [0xFF, b'a', b'b', b'c'];

        let err = decoder().decompress_all(&stream).unwrap_err();

        assert!(err.is_truncation());
    }

    #[test]
    fn test_match_before_any_output_is_rejected() {
        // First token is a match of distance 1 with an empty history.
        let stream = [0x00, 0x00, 0x00];

        let err = decoder().decompress_all(&stream).unwrap_err();

        assert!(matches!(
            err,
            LzssError::InvalidDistance {
                distance: 1,
                history_size: 0
            }
        ));
    }

    #[test]
    fn test_match_past_history_is_rejected() {
        // Two literals, then a match reaching back 3.
        let stream = [0x03, b'a', b'b', 0x20, 0x00];

        let err = decoder().decompress_all(&stream).unwrap_err();

        assert!(matches!(err, LzssError::InvalidDistance { distance: 3, .. }));
    }

    #[test]
    fn test_truncated_match_payload() {
        let stream = [0x01, b'A', 0x0F];

        let err = decoder().decompress_all(&stream).unwrap_err();

        assert!(err.is_truncation());
    }

    #[test]
    fn test_stats_count_tokens_and_blocks() {
        let stream = [0x01, b'x', 0x0F, 0x00];
        let mut out = Vec::new();

        let stats = decoder().decode(&stream[..], &mut out).unwrap();

        assert_eq!(stats.bytes_in, 4);
        assert_eq!(stats.bytes_out, 19);
        assert_eq!(stats.literals, 1);
        assert_eq!(stats.matches, 1);
        assert_eq!(stats.blocks, 1);
    }

    #[test]
    fn test_decoder_reuse_starts_fresh() {
        let mut decoder = decoder();

        assert_eq!(decoder.decompress_all(&[0x01, b'q']).unwrap(), b"q");
        // History from the previous stream must not leak into this one.
        assert!(decoder.decompress_all(&[0x00, 0x00, 0x00]).is_err());
    }
}
