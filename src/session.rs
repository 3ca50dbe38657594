use crate::maze::MazeState;

/// One maze game, from creation until it ends or the player leaves.
#[derive(Debug, Clone)]
pub struct MazeSession {
    maze_id: String,
    player_name: String,
    state: MazeState,
    moves: usize,
}

impl MazeSession {
    pub fn new(maze_id: String, player_name: String, state: MazeState) -> Self {
        Self {
            maze_id,
            player_name,
            state,
            moves: 0,
        }
    }

    pub fn maze_id(&self) -> &str {
        &self.maze_id
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn state(&self) -> &MazeState {
        &self.state
    }

    /// Moves accepted by the service so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    pub(crate) fn record_move(&mut self) {
        self.moves += 1;
    }

    /// Swap in a fresh snapshot. The previous one is discarded whole.
    pub fn replace_state(&mut self, state: MazeState) {
        self.state = state;
    }
}
