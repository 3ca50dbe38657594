#![cfg(feature = "std")]

//! JSON payloads exchanged with the maze service.

use serde::{Deserialize, Serialize};

use crate::common::{Direction, DirectionSet, GameStatus};
use crate::maze::{MazeError, MazeState};

/// Body of `POST /maze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMazeRequest {
    #[serde(rename = "maze-player-name")]
    pub player_name: String,
    #[serde(rename = "maze-width")]
    pub width: u32,
    #[serde(rename = "maze-height")]
    pub height: u32,
}

/// Response of `POST /maze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMazeResponse {
    pub maze_id: String,
}

/// `game-state` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateWire {
    pub state: String,
    #[serde(rename = "state-result", default, skip_serializing_if = "Option::is_none")]
    pub state_result: Option<String>,
}

/// Response of `GET /maze/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maze_id: Option<String>,
    pub size: [usize; 2],
    pub pony: Vec<usize>,
    #[serde(rename = "end-point", default, skip_serializing_if = "Vec::is_empty")]
    pub end_point: Vec<usize>,
    pub data: Vec<Vec<Direction>>,
    #[serde(rename = "game-state")]
    pub game_state: GameStateWire,
}

/// Body of `POST /maze/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub direction: Direction,
}

/// Response of `POST /maze/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "state-result", default, skip_serializing_if = "Option::is_none")]
    pub state_result: Option<String>,
    #[serde(rename = "game-state", default, skip_serializing_if = "Option::is_none")]
    pub game_state: Option<GameStateWire>,
}

/// Result of a submitted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Narration of the move, e.g. "Move accepted".
    pub state_result: Option<String>,
    /// Game status if the service included one.
    pub status: Option<GameStatus>,
}

impl From<MoveResponse> for MoveOutcome {
    fn from(res: MoveResponse) -> Self {
        let status = res
            .game_state
            .as_ref()
            .map(|gs| GameStatus::parse(&gs.state))
            .or_else(|| res.state.as_deref().map(GameStatus::parse));
        let state_result = res
            .state_result
            .or_else(|| res.game_state.and_then(|gs| gs.state_result));
        MoveOutcome {
            state_result,
            status,
        }
    }
}

impl TryFrom<MazeResponse> for MazeState {
    type Error = MazeError;

    fn try_from(res: MazeResponse) -> Result<Self, Self::Error> {
        let [width, height] = res.size;
        let player = *res.pony.first().ok_or(MazeError::MissingPlayer)?;
        let cells = res
            .data
            .into_iter()
            .map(|walls| walls.into_iter().collect::<DirectionSet>())
            .collect();
        let state = MazeState::new(
            width,
            height,
            cells,
            player,
            GameStatus::parse(&res.game_state.state),
        )?
        .with_last_move_result(res.game_state.state_result);
        match res.end_point.first() {
            Some(&end) => state.with_end_point(end),
            None => Ok(state),
        }
    }
}
