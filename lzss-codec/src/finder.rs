//! Longest-match search over the ring window.
//!
//! The encoder registers every position as it enters the window and
//! unregisters it as it leaves. Registering a position also answers the
//! question the encoder cares about: the longest earlier string sharing a
//! prefix with the one starting there.

use crate::config::{LzssConfig, MatchStrategy};
use crate::tree::MatchTree;
use lzss_core::RingWindow;
use std::fmt;

/// A back-reference candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Distance back from the registered position (1-based).
    pub distance: usize,
    /// Number of leading bytes shared, at most the lookahead length.
    pub length: usize,
}

/// Something that can find the longest earlier match for a position.
pub trait MatchFinder: fmt::Debug {
    /// Forget every registered position.
    fn reset(&mut self);

    /// Register `pos` and return its longest match.
    ///
    /// Only candidates at most `reach` bytes back are reported. Passing
    /// zero registers the position without reporting anything.
    fn insert(&mut self, window: &RingWindow, pos: usize, reach: usize) -> Option<Match>;

    /// Unregister `pos`. Does nothing if it is not registered.
    fn remove(&mut self, pos: usize);
}

/// Number of leading bytes `a` and `b` have in common.
#[inline]
pub(crate) fn common_prefix(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Brute-force finder that compares against every distance in range.
///
/// Keeps no index, so `reset` and `remove` are no-ops. Fine for small
/// windows and as a cross-check for [`MatchTree`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScan;

impl MatchFinder for LinearScan {
    fn reset(&mut self) {}

    fn insert(&mut self, window: &RingWindow, pos: usize, reach: usize) -> Option<Match> {
        let key = window.run(pos);
        let limit = reach.min(window.capacity() - window.lookahead());

        let mut best: Option<Match> = None;
        for distance in 1..=limit {
            let length = common_prefix(key, window.run(pos.wrapping_sub(distance)));
            if length > best.map_or(0, |m| m.length) {
                best = Some(Match { distance, length });
                if length == key.len() {
                    break;
                }
            }
        }
        best
    }

    fn remove(&mut self, _pos: usize) {}
}

/// The finder selected by an [`LzssConfig`].
#[derive(Debug)]
pub enum Finder {
    /// Binary search trees.
    Tree(MatchTree),
    /// Linear scan.
    Linear(LinearScan),
}

impl Finder {
    /// Build the finder named by `config.strategy`.
    pub fn for_config(config: &LzssConfig) -> Self {
        match config.strategy {
            MatchStrategy::Tree => Self::Tree(MatchTree::new(config.window_size())),
            MatchStrategy::Linear => Self::Linear(LinearScan),
        }
    }
}

impl MatchFinder for Finder {
    fn reset(&mut self) {
        match self {
            Self::Tree(tree) => tree.reset(),
            Self::Linear(scan) => scan.reset(),
        }
    }

    fn insert(&mut self, window: &RingWindow, pos: usize, reach: usize) -> Option<Match> {
        match self {
            Self::Tree(tree) => tree.insert(window, pos, reach),
            Self::Linear(scan) => scan.insert(window, pos, reach),
        }
    }

    fn remove(&mut self, pos: usize) {
        match self {
            Self::Tree(tree) => tree.remove(pos),
            Self::Linear(scan) => scan.remove(pos),
        }
    }
}
