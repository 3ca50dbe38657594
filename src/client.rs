//! Game flow: top-level menu, session setup and the move loop.

use log::{error, info, warn};

use crate::common::{Direction, GameStatus};
use crate::domain::MoveOutcome;
use crate::gateway::{GatewayError, MazeGateway};
use crate::navigator::{Dimension, GameChoice, MainChoice, MoveChoice, Navigator};
use crate::session::MazeSession;

/// How a finished or abandoned game looked at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub maze_id: String,
    pub player_name: String,
    pub moves: usize,
    pub status: GameStatus,
}

/// Why the move loop handed control back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveLoopExit {
    /// The player cancelled at the direction prompt.
    Cancelled,
    /// The game is no longer active.
    Finished,
}

/// Steps of the move loop. Only one remote call is in flight at a time.
#[derive(Debug)]
enum MoveStep {
    AwaitingDirectionChoice,
    SubmittingMove(Direction),
    Refreshing(MoveOutcome),
    Terminated,
}

/// Drives a navigator against a maze service.
pub struct MazeClient {
    navigator: Box<dyn Navigator>,
    gateway: Box<dyn MazeGateway>,
    last_game: Option<GameSummary>,
}

impl MazeClient {
    pub fn new(navigator: Box<dyn Navigator>, gateway: Box<dyn MazeGateway>) -> Self {
        Self {
            navigator,
            gateway,
            last_game: None,
        }
    }

    /// Summary of the most recent game that reached its end or was left.
    pub fn last_game(&self) -> Option<&GameSummary> {
        self.last_game.as_ref()
    }

    /// Top-level menu loop. Returns when the player exits.
    ///
    /// Service failures end the current game and bring the menu back; an
    /// error is only returned when the navigator can no longer answer.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match self.navigator.main_menu()? {
                MainChoice::StartGame => {
                    self.navigator.clear_screen();
                    if let Err(e) = self.play_game().await {
                        match e.downcast_ref::<GatewayError>() {
                            Some(gateway_err) => {
                                error!("game aborted: {}", gateway_err);
                                self.navigator.show_error(&gateway_err.to_string());
                            }
                            None => return Err(e),
                        }
                    }
                }
                MainChoice::Exit => {
                    self.navigator.farewell();
                    return Ok(());
                }
            }
        }
    }

    /// Set up one game and serve the in-game menu until it ends.
    pub async fn play_game(&mut self) -> anyhow::Result<()> {
        let width = self.navigator.ask_dimension(Dimension::Width)?;
        let height = self.navigator.ask_dimension(Dimension::Height)?;
        let (maze_id, player_name) = self.create_maze(width, height).await?;
        let state = self.gateway.fetch_state(&maze_id).await?;
        info!("started {} for {} ({}x{})", maze_id, player_name, width, height);
        let mut session = MazeSession::new(maze_id, player_name, state);
        self.render(&session).await?;

        loop {
            match self.navigator.game_menu()? {
                GameChoice::PrintMaze => self.render(&session).await?,
                GameChoice::Move => {
                    if self.move_loop(&mut session).await? == MoveLoopExit::Finished {
                        break;
                    }
                }
                GameChoice::Exit => break,
            }
        }

        info!(
            "session {} closed after {} moves ({})",
            session.maze_id(),
            session.moves(),
            session.state().status()
        );
        self.last_game = Some(GameSummary {
            maze_id: session.maze_id().to_string(),
            player_name: session.player_name().to_string(),
            moves: session.moves(),
            status: session.state().status().clone(),
        });
        Ok(())
    }

    /// Ask for a player name until the service accepts the maze.
    ///
    /// Only errors reported by the service are retried; anything else aborts.
    async fn create_maze(&mut self, width: u32, height: u32) -> anyhow::Result<(String, String)> {
        loop {
            let name = self.navigator.ask_player_name()?;
            match self.gateway.create_maze(&name, width, height).await {
                Ok(maze_id) => return Ok((maze_id, name)),
                Err(e) if e.is_remote() => {
                    warn!("maze creation rejected: {}", e);
                    self.navigator.show_error(&e.to_string());
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Fetch the print-out of the session's maze and show it.
    pub async fn render(&mut self, session: &MazeSession) -> Result<(), GatewayError> {
        let print = self.gateway.fetch_print(session.maze_id()).await?;
        self.navigator.show_maze(&print, session.state().status());
        Ok(())
    }

    /// Ask for directions and apply them until the player cancels or the game ends.
    pub async fn move_loop(&mut self, session: &mut MazeSession) -> anyhow::Result<MoveLoopExit> {
        let mut step = MoveStep::AwaitingDirectionChoice;
        loop {
            step = match step {
                MoveStep::AwaitingDirectionChoice => {
                    let walkable = session.state().walkable();
                    match self.navigator.choose_direction(session.state(), walkable)? {
                        MoveChoice::Go(dir) if walkable.contains(dir) => MoveStep::SubmittingMove(dir),
                        MoveChoice::Go(dir) => {
                            warn!("navigator picked blocked direction {}", dir);
                            MoveStep::AwaitingDirectionChoice
                        }
                        MoveChoice::Cancel => {
                            self.navigator.clear_screen();
                            self.render(session).await?;
                            return Ok(MoveLoopExit::Cancelled);
                        }
                    }
                }
                MoveStep::SubmittingMove(dir) => {
                    match self.gateway.submit_move(session.maze_id(), dir).await {
                        Ok(outcome) => {
                            session.record_move();
                            MoveStep::Refreshing(outcome)
                        }
                        Err(e) => {
                            warn!("move {} rejected: {}", dir, e);
                            self.navigator.show_error(&e.to_string());
                            MoveStep::AwaitingDirectionChoice
                        }
                    }
                }
                MoveStep::Refreshing(outcome) => {
                    let fresh = self.gateway.fetch_state(session.maze_id()).await?;
                    let text = outcome
                        .state_result
                        .or_else(|| fresh.last_move_result().map(str::to_string));
                    session.replace_state(fresh.with_last_move_result(text));
                    self.render(session).await?;
                    if let Some(text) = session.state().last_move_result() {
                        self.navigator.show_move_result(text);
                    }
                    if session.state().is_active() {
                        MoveStep::AwaitingDirectionChoice
                    } else {
                        MoveStep::Terminated
                    }
                }
                MoveStep::Terminated => {
                    info!(
                        "game {} finished: {}",
                        session.maze_id(),
                        session.state().status()
                    );
                    return Ok(MoveLoopExit::Finished);
                }
            };
        }
    }
}
