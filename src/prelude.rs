//! Commonly used types and utilities for ease of import.

pub use crate::{resolve, Direction, DirectionSet, GameStatus, MazeState, Neighbor};

#[cfg(feature = "std")]
pub use crate::{AutoNavigator, CliNavigator, MazeClient, MazeSession, Navigator};

#[cfg(feature = "std")]
pub use crate::gateway::{GatewayError, HttpGateway, InMemoryGateway, MazeGateway};
