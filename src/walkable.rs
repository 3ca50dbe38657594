//! Walkable-direction resolution for a single cell.
//!
//! The service records each cell's walls independently, so a shared boundary
//! may be marked on either side. Only the forward neighbors (east and south)
//! are consulted explicitly; north and west openness comes from the current
//! cell's own wall list.

use crate::common::{Direction, DirectionSet};

/// Wall data of an adjacent cell, or the edge of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    Exists(DirectionSet),
    OffGrid,
}

impl Neighbor {
    /// Whether this neighbor blocks crossing from its `side`.
    ///
    /// An off-grid neighbor is always closed.
    pub fn blocks(&self, side: Direction) -> bool {
        match self {
            Neighbor::Exists(walls) => walls.contains(side),
            Neighbor::OffGrid => true,
        }
    }
}

/// Compute the directions the player may move from a cell.
pub fn resolve(current: DirectionSet, east: Neighbor, south: Neighbor) -> DirectionSet {
    let mut open = DirectionSet::all();
    for wall in current.iter() {
        open.remove(wall);
    }
    if east.blocks(Direction::West) {
        open.remove(Direction::East);
    }
    if south.blocks(Direction::North) {
        open.remove(Direction::South);
    }
    open
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn open_cell_with_open_neighbors_allows_everything() {
        let res = resolve(
            DirectionSet::empty(),
            Neighbor::Exists(DirectionSet::empty()),
            Neighbor::Exists(DirectionSet::empty()),
        );
        assert_eq!(res, DirectionSet::all());
    }

    #[test]
    fn neighbor_side_wall_closes_shared_boundary() {
        let res = resolve(
            DirectionSet::empty(),
            Neighbor::Exists([West].into()),
            Neighbor::Exists([North].into()),
        );
        assert_eq!(res, DirectionSet::from([North, West]));
    }

    #[test]
    fn off_grid_closes_east_and_south() {
        let res = resolve(DirectionSet::empty(), Neighbor::OffGrid, Neighbor::OffGrid);
        assert_eq!(res.iter().collect::<alloc::vec::Vec<_>>(), [North, West]);
    }
}
