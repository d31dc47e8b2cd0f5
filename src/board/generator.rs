//! Random starting boards.
//!
//! Tiles are colored row by row, top to bottom. Each tile draws uniformly from
//! the palette minus the colors of the tile above it and the tile to its left,
//! so no two orthogonal neighbors start out with the same color. The two
//! anchor corners also start out with different colors, which keeps four
//! legal moves available from the first turn.

use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use super::color::{TileColor, PALETTE_SIZE};
use super::MAX_TILES;

pub fn random_colors<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> [TileColor; MAX_TILES] {
    let mut colors = [TileColor::Red; MAX_TILES];
    let bottom_left = (rows - 1) * cols;
    let top_right = cols - 1;

    for row in 0..rows {
        for col in 0..cols {
            let above = if row > 0 {
                Some(colors[(row - 1) * cols + col])
            } else {
                None
            };
            let left = if col > 0 {
                Some(colors[row * cols + col - 1])
            } else {
                None
            };

            let index = row * cols + col;
            let other_anchor = match index {
                i if i == bottom_left && top_right < i => Some(colors[top_right]),
                i if i == top_right && bottom_left < i => Some(colors[bottom_left]),
                _ => None,
            };

            let eligible: SmallVec<[TileColor; PALETTE_SIZE]> = TileColor::ALL
                .iter()
                .copied()
                .filter(|color| {
                    Some(*color) != above && Some(*color) != left && Some(*color) != other_anchor
                })
                .collect();

            // At most three colors are excluded, so at least three remain.
            if let Some(color) = eligible.choose(rng) {
                colors[index] = *color;
            }
        }
    }

    colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{COLS, ROWS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_no_orthogonal_neighbors_share_a_color() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let colors = random_colors(ROWS, COLS, &mut rng);

            for row in 0..ROWS {
                for col in 0..COLS {
                    let color = colors[row * COLS + col];
                    if row + 1 < ROWS {
                        assert_ne!(color, colors[(row + 1) * COLS + col], "seed {}", seed);
                    }
                    if col + 1 < COLS {
                        assert_ne!(color, colors[row * COLS + col + 1], "seed {}", seed);
                    }
                }
            }
        }
    }

    #[test]
    fn test_anchor_corners_differ() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let colors = random_colors(ROWS, COLS, &mut rng);
            assert_ne!(colors[(ROWS - 1) * COLS], colors[COLS - 1], "seed {}", seed);

            let single_row = random_colors(1, 5, &mut rng);
            assert_ne!(single_row[0], single_row[4], "seed {}", seed);
        }
    }

    #[test]
    fn test_same_seed_same_colors() {
        let first = random_colors(ROWS, COLS, &mut StdRng::seed_from_u64(7));
        let second = random_colors(ROWS, COLS, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }
}
