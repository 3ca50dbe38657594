//! Common types for the maze client: directions, wall sets and game status.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// A cardinal direction, both as a wall side and as a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in presentation order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Wire form used by the maze service.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Menu label with an arrow glyph.
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "North ▲",
            Direction::South => "South ▼",
            Direction::East => "East ►",
            Direction::West => "West ◄",
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Direction after a quarter turn clockwise.
    pub fn right(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Direction after a quarter turn counter-clockwise.
    pub fn left(self) -> Direction {
        self.right().opposite()
    }

    const fn bit(self) -> u8 {
        match self {
            Direction::North => 0b0001,
            Direction::South => 0b0010,
            Direction::East => 0b0100,
            Direction::West => 0b1000,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the four direction literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown direction '{}'", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownDirection {}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            other => Err(UnknownDirection(other.to_string())),
        }
    }
}

/// Set of directions. Used for a cell's walls and for walkable results.
///
/// Iteration always yields north, south, east, west in that order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const fn empty() -> Self {
        DirectionSet(0)
    }

    pub const fn all() -> Self {
        DirectionSet(0b1111)
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !dir.bit();
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::empty();
        for dir in iter {
            set.insert(dir);
        }
        set
    }
}

impl<const N: usize> From<[Direction; N]> for DirectionSet {
    fn from(dirs: [Direction; N]) -> Self {
        dirs.into_iter().collect()
    }
}

impl fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Game status reported by the maze service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Won,
    Over,
    /// Any other terminal state the service may report.
    Other(String),
}

impl GameStatus {
    /// Parse the service's `game-state.state` string, ignoring case.
    pub fn parse(state: &str) -> Self {
        let state = state.trim();
        if state.eq_ignore_ascii_case("active") {
            GameStatus::Active
        } else if state.eq_ignore_ascii_case("won") {
            GameStatus::Won
        } else if state.eq_ignore_ascii_case("over") {
            GameStatus::Over
        } else {
            GameStatus::Other(state.to_string())
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, GameStatus::Active)
    }
}

/// Known states print in lowercase; unknown ones keep the service's text.
impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Active => f.write_str("active"),
            GameStatus::Won => f.write_str("won"),
            GameStatus::Over => f.write_str("over"),
            GameStatus::Other(s) => f.write_str(s),
        }
    }
}
