//! LZSS encoder (compression).

use crate::config::LzssConfig;
use crate::finder::{Finder, MatchFinder};
use crate::token::{Token, TokenWriter};
use lzss_core::RingWindow;
use lzss_core::error::Result;
use lzss_core::io::ByteReader;
use lzss_core::traits::{Compressor, StreamStats};
use std::io::{Read, Write};

/// LZSS encoder for compression.
///
/// Owns its window and match finder; both are reset at the start of every
/// [`encode`](Self::encode) call, so nothing carries over between streams.
#[derive(Debug)]
pub struct LzssEncoder {
    config: LzssConfig,
    /// History plus lookahead.
    window: RingWindow,
    /// Index of the positions currently in the window.
    finder: Finder,
}

impl LzssEncoder {
    /// Create a new encoder, rejecting unencodable configurations.
    pub fn new(config: LzssConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            window: RingWindow::new(config.window_size(), config.max_match(), config.filler),
            finder: Finder::for_config(&config),
        })
    }

    /// The configuration this encoder was built with.
    pub fn config(&self) -> &LzssConfig {
        &self.config
    }

    /// Reset the encoder to initial state.
    pub fn reset(&mut self) {
        self.window.reset();
        self.finder.reset();
    }

    /// Encode everything from `input` into `output`.
    ///
    /// # Algorithm
    ///
    /// 1. Fill the lookahead with up to `max_match` input bytes
    /// 2. Register the `max_match` positions behind the cursor, nearest
    ///    first, then the cursor itself
    /// 3. Emit a match if the longest one found beats the threshold,
    ///    otherwise a literal
    /// 4. Slide over the bytes just encoded: forget the oldest position,
    ///    pull in the next input byte, register the new cursor
    /// 5. Repeat until the lookahead is empty, then flush the last block
    pub fn encode<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<StreamStats> {
        self.reset();

        let mut reader = ByteReader::new(input);
        let mut writer = TokenWriter::new(output, self.config);
        let lookahead = self.config.max_match();
        let threshold = self.config.threshold;

        tracing::debug!(
            window = self.config.window_size(),
            max_match = lookahead,
            threshold,
            strategy = ?self.config.strategy,
            "encode start"
        );

        let start = self.window.cursor();
        let mut len = 0;
        while len < lookahead {
            let Some(byte) = reader.read_byte()? else {
                break;
            };
            self.window.write(start + len, byte);
            len += 1;
        }

        let mut found = None;
        if len > 0 {
            // Filler positions are indexed but never reported: their reach is 0.
            for back in 1..=lookahead {
                self.finder.insert(&self.window, start - back, 0);
            }
            found = self.finder.insert(&self.window, start, 0);
        }

        while len > 0 {
            let token = match found {
                Some(m) if m.length.min(len) > threshold => Token::Match {
                    distance: m.distance as u16,
                    length: m.length.min(len) as u16,
                },
                _ => Token::Literal(self.window.read(self.window.cursor())),
            };
            writer.push(token)?;

            for _ in 0..token.expanded_len() {
                self.finder.remove(self.window.tail());

                let next = reader.read_byte()?;
                if next.is_none() {
                    len -= 1;
                }
                self.window.slide(next);

                if len > 0 {
                    found = self.finder.insert(
                        &self.window,
                        self.window.cursor(),
                        self.window.history(),
                    );
                }
            }
        }

        writer.finish()?;

        let (literals, matches) = writer.token_counts();
        let stats = StreamStats {
            bytes_in: reader.bytes_read(),
            bytes_out: writer.bytes_written(),
            literals,
            matches,
            blocks: writer.blocks(),
        };
        tracing::debug!(
            bytes_in = stats.bytes_in,
            bytes_out = stats.bytes_out,
            literals = stats.literals,
            matches = stats.matches,
            "encode done"
        );
        Ok(stats)
    }
}

impl Compressor for LzssEncoder {
    fn compress<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<StreamStats> {
        self.encode(input, output)
    }
}
