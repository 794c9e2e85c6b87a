//! Zobrist hashing keys.
//!
//! Keys are regenerated fresh for every [`crate::board::Board`] instance —
//! there is no global/static table. That's a deliberate simplification per
//! the concurrency model: hashes are never comparable across board
//! instances, so nothing needs process-wide initialization discipline.

use crate::color::Color;
use crate::constants::P;
use crate::geometry::Point;

/// Per-(point, color) random keys plus the pass key, built once and never
/// mutated. `P × 2` entries: one key for Black and one for White at every
/// point (Empty points never contribute to the hash).
#[derive(Clone, Debug)]
pub struct ZobristTable {
    keys: Vec<[u64; 2]>,
    pass_key: u64,
}

impl ZobristTable {
    /// Build a fresh table of uniformly random 64-bit keys.
    pub fn new() -> Self {
        let keys = (0..P).map(|_| [fastrand::u64(..), fastrand::u64(..)]).collect();
        Self {
            keys,
            pass_key: fastrand::u64(..),
        }
    }

    /// The key for placing/removing `color` at `p`. `color` must be
    /// `Black` or `White`.
    #[inline]
    pub fn key(&self, p: Point, color: Color) -> u64 {
        match color {
            Color::Black => self.keys[p][0],
            Color::White => self.keys[p][1],
            Color::Empty => unreachable!("zobrist key requested for Color::Empty"),
        }
    }

    /// The key XORed in whenever a pass is applied.
    #[inline]
    pub fn pass_key(&self) -> u64 {
        self.pass_key
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}
