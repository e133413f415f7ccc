use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// Draws a food cell uniformly from the full grid.
///
/// Both axes are independent uniform draws over `[1, bound]`. There is no
/// occupancy check: food may land on a cell the snake currently covers, and
/// the next meal simply draws again.
#[must_use]
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(1..=i32::from(bounds.width)),
        y: rng.gen_range(1..=i32::from(bounds.height)),
    }
}
