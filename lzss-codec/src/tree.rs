//! Binary-search-tree match finder.
//!
//! There is one tree per leading byte value. Each tree orders window
//! positions by the `lookahead` bytes starting at them, so walking down
//! from the root towards a new string visits its closest neighbours in
//! lexicographic order, which are also its longest matches.
//!
//! Nodes are addressed by window position; a position belongs to at most
//! one tree. A string that equals an existing node over the full lookahead
//! takes over that node's place, since the newer copy stays in the window
//! longer.

use crate::finder::{Match, MatchFinder, common_prefix};
use lzss_core::RingWindow;

/// Where a linked node hangs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parent {
    /// Directly under the root slot for this leading byte.
    Root(u8),
    /// Under another window position.
    Node(usize),
}

/// Per-leading-byte binary search trees over ring window positions.
#[derive(Debug, Clone)]
pub struct MatchTree {
    /// Top node of each tree.
    roots: Box<[Option<usize>; 256]>,
    /// `None` means the position is not in any tree.
    parent: Vec<Option<Parent>>,
    left: Vec<Option<usize>>,
    right: Vec<Option<usize>>,
}

impl MatchTree {
    /// Create empty trees for a window of `window_size` positions.
    pub fn new(window_size: usize) -> Self {
        Self {
            roots: Box::new([None; 256]),
            parent: vec![None; window_size],
            left: vec![None; window_size],
            right: vec![None; window_size],
        }
    }

    /// Whether `pos` is currently in a tree.
    pub fn contains(&self, pos: usize) -> bool {
        self.parent[pos].is_some()
    }

    /// Number of positions currently in a tree.
    pub fn len(&self) -> usize {
        self.parent.iter().filter(|p| p.is_some()).count()
    }

    /// Whether every tree is empty.
    pub fn is_empty(&self) -> bool {
        self.roots.iter().all(Option::is_none)
    }

    /// Point whatever held `old` at `new` instead.
    fn relink(&mut self, link: Parent, old: usize, new: Option<usize>) {
        match link {
            Parent::Root(slot) => self.roots[slot as usize] = new,
            Parent::Node(p) => {
                if self.right[p] == Some(old) {
                    self.right[p] = new;
                } else {
                    self.left[p] = new;
                }
            }
        }
    }

    /// Put `new` in `old`'s place and unlink `old`.
    fn replace(&mut self, old: usize, new: usize) {
        let Some(link) = self.parent[old].take() else {
            return;
        };

        self.left[new] = self.left[old];
        self.right[new] = self.right[old];
        if let Some(child) = self.left[new] {
            self.parent[child] = Some(Parent::Node(new));
        }
        if let Some(child) = self.right[new] {
            self.parent[child] = Some(Parent::Node(new));
        }
        self.parent[new] = Some(link);
        self.relink(link, old, Some(new));
    }

    /// Detach the rightmost node below `top`, whose right child is `first`,
    /// and return it with `top` hung as its left child.
    fn take_predecessor(&mut self, top: usize, first: usize) -> usize {
        let mut holder = top;
        let mut q = first;
        while let Some(next) = self.right[q] {
            holder = q;
            q = next;
        }

        self.right[holder] = self.left[q];
        if let Some(orphan) = self.left[q] {
            self.parent[orphan] = Some(Parent::Node(holder));
        }
        self.left[q] = Some(top);
        self.parent[top] = Some(Parent::Node(q));
        q
    }
}

impl MatchFinder for MatchTree {
    fn reset(&mut self) {
        self.roots.fill(None);
        self.parent.fill(None);
    }

    fn insert(&mut self, window: &RingWindow, pos: usize, reach: usize) -> Option<Match> {
        debug_assert!(!self.contains(pos), "position {pos} inserted twice");

        self.left[pos] = None;
        self.right[pos] = None;

        let key = window.run(pos);
        let slot = key[0];

        let Some(mut node) = self.roots[slot as usize] else {
            self.roots[slot as usize] = Some(pos);
            self.parent[pos] = Some(Parent::Root(slot));
            return None;
        };

        let mut best: Option<Match> = None;
        loop {
            let candidate = window.run(node);
            let length = common_prefix(key, candidate);

            if length > best.map_or(0, |m| m.length) {
                let distance = window.wrap(pos.wrapping_sub(node));
                if distance <= reach {
                    best = Some(Match { distance, length });
                }
            }

            if length == key.len() {
                self.replace(node, pos);
                return best;
            }

            let go_right = key[length] > candidate[length];
            let child = if go_right {
                self.right[node]
            } else {
                self.left[node]
            };

            match child {
                Some(next) => node = next,
                None => {
                    if go_right {
                        self.right[node] = Some(pos);
                    } else {
                        self.left[node] = Some(pos);
                    }
                    self.parent[pos] = Some(Parent::Node(node));
                    return best;
                }
            }
        }
    }

    fn remove(&mut self, pos: usize) {
        let Some(link) = self.parent[pos] else {
            return;
        };

        let replacement = match (self.left[pos], self.right[pos]) {
            (None, None) => None,
            (Some(only), None) | (None, Some(only)) => Some(only),
            (Some(left), Some(right)) => {
                let q = match self.right[left] {
                    None => left,
                    Some(first) => self.take_predecessor(left, first),
                };
                self.right[q] = Some(right);
                self.parent[right] = Some(Parent::Node(q));
                Some(q)
            }
        };

        if let Some(q) = replacement {
            self.parent[q] = Some(link);
        }
        self.relink(link, pos, replacement);
        self.parent[pos] = None;
    }
}

#[cfg(test)]
impl MatchTree {
    /// Walk every tree and assert its links and ordering. Returns the
    /// number of linked positions.
    pub(crate) fn check_invariants(&self, window: &RingWindow) -> usize {
        let mut seen = vec![false; self.parent.len()];
        let mut count = 0;

        for (slot, root) in self.roots.iter().enumerate() {
            if let Some(root) = *root {
                assert_eq!(self.parent[root], Some(Parent::Root(slot as u8)));
                assert_eq!(window.read(root) as usize, slot);
                count += self.check_subtree(window, root, None, None, &mut seen);
            }
        }

        assert_eq!(count, self.len(), "linked positions unreachable from roots");
        count
    }

    fn check_subtree(
        &self,
        window: &RingWindow,
        node: usize,
        low: Option<usize>,
        high: Option<usize>,
        seen: &mut [bool],
    ) -> usize {
        assert!(!seen[node], "position {node} reachable twice");
        seen[node] = true;

        let key = window.run(node);
        if let Some(low) = low {
            assert!(window.run(low) < key, "{node} not above {low}");
        }
        if let Some(high) = high {
            assert!(key < window.run(high), "{node} not below {high}");
        }

        let mut count = 1;
        if let Some(left) = self.left[node] {
            assert_eq!(self.parent[left], Some(Parent::Node(node)));
            count += self.check_subtree(window, left, low, Some(node), seen);
        }
        if let Some(right) = self.right[node] {
            assert_eq!(self.parent[right], Some(Parent::Node(node)));
            count += self.check_subtree(window, right, Some(node), high, seen);
        }
        count
    }
}
