//! Latest known maze snapshot and the queries derived from it.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{Direction, DirectionSet, GameStatus};
use crate::walkable::{self, Neighbor};

/// Errors returned when a snapshot violates the grid invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height is zero.
    EmptyGrid,
    /// Number of cells does not match `width * height`.
    CellCountMismatch { expected: usize, actual: usize },
    /// Player index does not refer to an existing cell.
    PlayerOutOfBounds { index: usize, cells: usize },
    /// End point index does not refer to an existing cell.
    EndPointOutOfBounds { index: usize, cells: usize },
    /// Snapshot carries no player position.
    MissingPlayer,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::EmptyGrid => write!(f, "Maze has an empty dimension"),
            MazeError::CellCountMismatch { expected, actual } => write!(
                f,
                "Maze data has {} cells, expected {}",
                actual, expected
            ),
            MazeError::PlayerOutOfBounds { index, cells } => write!(
                f,
                "Player position {} is outside the maze ({} cells)",
                index, cells
            ),
            MazeError::EndPointOutOfBounds { index, cells } => write!(
                f,
                "End point {} is outside the maze ({} cells)",
                index, cells
            ),
            MazeError::MissingPlayer => write!(f, "Maze snapshot has no player position"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MazeError {}

/// Snapshot of the server-reported game state.
///
/// Cells are stored row-major: `index = row * width + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeState {
    width: usize,
    height: usize,
    cells: Vec<DirectionSet>,
    player: usize,
    end_point: Option<usize>,
    status: GameStatus,
    last_move_result: Option<String>,
}

impl MazeState {
    /// Build a snapshot, checking the grid invariants.
    pub fn new(
        width: usize,
        height: usize,
        cells: Vec<DirectionSet>,
        player: usize,
        status: GameStatus,
    ) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::EmptyGrid);
        }
        let expected = width.saturating_mul(height);
        if cells.len() != expected {
            return Err(MazeError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        if player >= expected {
            return Err(MazeError::PlayerOutOfBounds {
                index: player,
                cells: expected,
            });
        }
        Ok(Self {
            width,
            height,
            cells,
            player,
            end_point: None,
            status,
            last_move_result: None,
        })
    }

    /// Attach the end point reported by the service.
    pub fn with_end_point(mut self, index: usize) -> Result<Self, MazeError> {
        if index >= self.cells.len() {
            return Err(MazeError::EndPointOutOfBounds {
                index,
                cells: self.cells.len(),
            });
        }
        self.end_point = Some(index);
        Ok(self)
    }

    /// Attach the narration returned by the move that produced this snapshot.
    pub fn with_last_move_result(mut self, text: Option<String>) -> Self {
        self.last_move_result = text;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[DirectionSet] {
        &self.cells
    }

    pub fn player_index(&self) -> usize {
        self.player
    }

    pub fn end_point(&self) -> Option<usize> {
        self.end_point
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn last_move_result(&self) -> Option<&str> {
        self.last_move_result.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Row and column of a flattened index.
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }

    /// Walls recorded on the player's cell.
    pub fn current_cell(&self) -> DirectionSet {
        self.cells[self.player]
    }

    /// Index of the cell adjacent to the player, if it exists.
    pub fn neighbor_index(&self, dir: Direction) -> Option<usize> {
        let (row, col) = self.row_col(self.player);
        match dir {
            Direction::North if row > 0 => Some(self.player - self.width),
            Direction::South if row + 1 < self.height => Some(self.player + self.width),
            Direction::East if col + 1 < self.width => Some(self.player + 1),
            Direction::West if col > 0 => Some(self.player - 1),
            _ => None,
        }
    }

    /// Walls of the cell adjacent to the player, or `OffGrid` at the edge.
    pub fn neighbor(&self, dir: Direction) -> Neighbor {
        match self.neighbor_index(dir) {
            Some(idx) => Neighbor::Exists(self.cells[idx]),
            None => Neighbor::OffGrid,
        }
    }

    /// Directions the player may currently move.
    pub fn walkable(&self) -> DirectionSet {
        walkable::resolve(
            self.current_cell(),
            self.neighbor(Direction::East),
            self.neighbor(Direction::South),
        )
    }
}
