//! Navigator trait and implementations
//!
//! A navigator is whoever answers the client's questions:
//! - CliNavigator: a human at a terminal
//! - AutoNavigator: a scripted wall follower used by the `sim` binary

use crate::common::{Direction, DirectionSet, GameStatus};
use crate::maze::MazeState;

/// Entries of the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    StartGame,
    Exit,
}

/// Entries of the menu shown while a game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameChoice {
    PrintMaze,
    Move,
    Exit,
}

/// Answer to the direction prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveChoice {
    Go(Direction),
    Cancel,
}

/// Which maze dimension is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

/// Interface implemented by the interactive layer.
///
/// Every prompt returns a validated answer; an `Err` means the input source
/// is gone and the program should stop.
pub trait Navigator: Send {
    fn main_menu(&mut self) -> anyhow::Result<MainChoice>;

    fn game_menu(&mut self) -> anyhow::Result<GameChoice>;

    /// Ask for a width or height within the accepted range.
    fn ask_dimension(&mut self, dimension: Dimension) -> anyhow::Result<u32>;

    /// Ask for a non-empty player name.
    fn ask_player_name(&mut self) -> anyhow::Result<String>;

    /// Pick one of `walkable` or cancel. Directions outside `walkable` are never returned.
    fn choose_direction(
        &mut self,
        state: &MazeState,
        walkable: DirectionSet,
    ) -> anyhow::Result<MoveChoice>;

    /// Display the service's print-out and the current game state.
    fn show_maze(&mut self, _print: &str, _status: &GameStatus) {}

    /// Display the narration of the last move.
    fn show_move_result(&mut self, _text: &str) {}

    fn show_error(&mut self, _message: &str) {}

    fn clear_screen(&mut self) {}

    fn farewell(&mut self) {}
}

pub mod auto;
pub use auto::AutoNavigator;

pub mod cli;
pub use cli::CliNavigator;
