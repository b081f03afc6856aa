//! LZSS parameters: window size, match-length range and match finder.
//!
//! A match token is a 16-bit word split into a distance field and a length
//! field, so the two widths must add up to 16. Encoder and decoder must be
//! built from the same configuration; nothing in the stream records it.

use lzss_core::error::{LzssError, Result};

/// Total width of a packed match token.
pub const MATCH_CODE_BITS: u8 = 16;

/// Longest lookahead the encoder accepts. Priming the tree costs grow with
/// the cube of the lookahead length.
pub const MAX_LOOKAHEAD: usize = 1024;

/// How the encoder looks for the longest match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    /// Per-leading-byte binary search trees (amortized O(log N)).
    #[default]
    Tree,
    /// Scan every distance in the window (O(N) per position).
    Linear,
}

/// LZSS configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzssConfig {
    /// Width of the distance field; the window holds `1 << distance_bits` bytes.
    pub distance_bits: u8,
    /// Width of the length field.
    pub length_bits: u8,
    /// Longest match that is still emitted as literals.
    pub threshold: usize,
    /// Byte the history is filled with before the stream starts.
    pub filler: u8,
    /// Match finder used by the encoder.
    pub strategy: MatchStrategy,
}

impl LzssConfig {
    /// Classic parameters: 4 KB window, matches of 3..=18 bytes.
    ///
    /// - 12-bit distance, 4-bit length
    /// - Threshold 2
    /// - History pre-filled with ASCII space
    pub const CLASSIC: Self = Self {
        distance_bits: 12,
        length_bits: 4,
        threshold: 2,
        filler: b' ',
        strategy: MatchStrategy::Tree,
    };

    /// Create a configuration with the given field widths and threshold.
    pub fn new(distance_bits: u8, length_bits: u8, threshold: usize) -> Self {
        Self {
            distance_bits,
            length_bits,
            threshold,
            ..Self::CLASSIC
        }
    }

    /// Same configuration with a different match finder.
    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Same configuration with a different filler byte.
    pub fn with_filler(mut self, filler: u8) -> Self {
        self.filler = filler;
        self
    }

    /// History window size `N`.
    pub fn window_size(&self) -> usize {
        1 << self.distance_bits
    }

    /// Longest encodable match `F`, which is also the lookahead length.
    pub fn max_match(&self) -> usize {
        self.threshold.saturating_add(1 << self.length_bits)
    }

    /// Shortest match that is emitted as a match token.
    pub fn min_match(&self) -> usize {
        self.threshold + 1
    }

    /// Check that the parameters describe an encodable format.
    pub fn validate(&self) -> Result<()> {
        if self.length_bits == 0 {
            return Err(LzssError::invalid_config("length_bits must be at least 1"));
        }
        if u16::from(self.distance_bits) + u16::from(self.length_bits)
            != u16::from(MATCH_CODE_BITS)
        {
            return Err(LzssError::invalid_config(format!(
                "distance_bits ({}) + length_bits ({}) must equal {}",
                self.distance_bits, self.length_bits, MATCH_CODE_BITS
            )));
        }
        if self.threshold == 0 {
            return Err(LzssError::invalid_config("threshold must be at least 1"));
        }
        if self.max_match() > MAX_LOOKAHEAD {
            return Err(LzssError::invalid_config(format!(
                "longest match of {} bytes exceeds the limit of {} bytes",
                self.max_match(),
                MAX_LOOKAHEAD
            )));
        }
        if self.window_size() < 2 * self.max_match() {
            return Err(LzssError::invalid_config(format!(
                "window of {} bytes cannot hold two lookaheads of {} bytes",
                self.window_size(),
                self.max_match()
            )));
        }
        Ok(())
    }
}

impl Default for LzssConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}
