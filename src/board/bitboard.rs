use core::fmt;
use std::{
    fmt::{Display, Formatter},
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

/// A set of tiles, one bit per tile index (`row * cols + col`). Boards hold at
/// most 64 tiles so a single word covers every layout.
#[derive(Clone, Copy, PartialEq, Debug, PartialOrd, Eq, Ord, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Self = Self(0);

    /// The first `tile_count` tiles.
    pub fn first(tile_count: usize) -> Self {
        if tile_count >= 64 {
            Self(u64::MAX)
        } else {
            Self((1u64 << tile_count) - 1)
        }
    }

    pub fn tile(index: usize) -> Self {
        Self(1u64 << index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0 & (1u64 << index) != 0
    }

    pub fn overlaps(&self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn count_ones(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterates over the indices of the tiles in this set, lowest first.
    pub fn iter(&self) -> TileIter {
        TileIter(self.0)
    }
}

pub struct TileIter(u64);

impl Iterator for TileIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(index)
    }
}

impl Not for Bitboard {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:#066b}", self.0)
    }
}
