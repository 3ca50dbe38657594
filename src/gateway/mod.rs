//! Remote maze service access.

use std::fmt;

use crate::common::Direction;
use crate::domain::MoveOutcome;
use crate::maze::MazeState;

/// Failure of a call to the maze service.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The service answered with an error payload.
    Remote {
        status: u16,
        payload: serde_json::Value,
    },
    /// The request was sent but no usable response came back.
    Transport(String),
    /// The request could not be built.
    Request(String),
    /// A success response did not match the expected shape.
    Malformed(String),
}

impl GatewayError {
    /// Remote errors are answered by re-asking the user; the rest abort the game.
    pub fn is_remote(&self) -> bool {
        matches!(self, GatewayError::Remote { .. })
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Remote { status, payload } => match payload {
                serde_json::Value::String(text) => {
                    write!(f, "Maze service error ({}): {}", status, text)
                }
                other => write!(f, "Maze service error ({}): {}", status, other),
            },
            GatewayError::Transport(msg) => write!(f, "No response from maze service: {}", msg),
            GatewayError::Request(msg) => write!(f, "Could not build request: {}", msg),
            GatewayError::Malformed(msg) => write!(f, "Unexpected response from maze service: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Operations offered by the maze service.
///
/// Calls are never retried here; a failure surfaces to the caller as-is.
#[async_trait::async_trait]
pub trait MazeGateway: Send + Sync {
    /// Create a maze and return its identifier.
    async fn create_maze(
        &mut self,
        player_name: &str,
        width: u32,
        height: u32,
    ) -> Result<String, GatewayError>;

    /// Fetch the current state of a maze.
    async fn fetch_state(&mut self, maze_id: &str) -> Result<MazeState, GatewayError>;

    /// Move the player one cell.
    async fn submit_move(
        &mut self,
        maze_id: &str,
        direction: Direction,
    ) -> Result<MoveOutcome, GatewayError>;

    /// Fetch the printable representation of a maze.
    async fn fetch_print(&mut self, maze_id: &str) -> Result<String, GatewayError>;
}

pub mod http;
pub mod in_memory;

pub use http::HttpGateway;
pub use in_memory::InMemoryGateway;
