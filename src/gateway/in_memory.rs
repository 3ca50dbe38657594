//! Self-contained maze service for offline play and tests.
//!
//! Walls are recorded the way the remote service records them: every cell
//! lists only its `north` and `west` sides, so the east and south sides of a
//! cell are found on its neighbors.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::common::{Direction, DirectionSet, GameStatus};
use crate::config::{MAZE_MAX_DIMENSION, MAZE_MIN_DIMENSION};
use crate::domain::{GameStateWire, MazeResponse, MoveOutcome, MoveResponse};
use crate::maze::MazeState;

use super::{GatewayError, MazeGateway};

const MOVE_ACCEPTED: &str = "Move accepted";
const MOVE_BLOCKED: &str = "Can't walk in there";
const MOVE_WON: &str = "You won. Game ended";

struct Maze {
    width: usize,
    height: usize,
    cells: Vec<DirectionSet>,
    pony: usize,
    end_point: usize,
    status: GameStatus,
    last_result: Option<String>,
}

impl Maze {
    fn generate(rng: &mut SmallRng, width: usize, height: usize) -> Self {
        let n = width * height;
        let mut cells = vec![DirectionSet::from([Direction::North, Direction::West]); n];
        let mut visited = vec![false; n];
        let start = rng.random_range(0..n);
        let mut stack = vec![start];
        visited[start] = true;

        while let Some(&cur) = stack.last() {
            let (row, col) = (cur / width, cur % width);
            let mut options: Vec<(Direction, usize)> = Vec::with_capacity(4);
            if row > 0 && !visited[cur - width] {
                options.push((Direction::North, cur - width));
            }
            if row + 1 < height && !visited[cur + width] {
                options.push((Direction::South, cur + width));
            }
            if col + 1 < width && !visited[cur + 1] {
                options.push((Direction::East, cur + 1));
            }
            if col > 0 && !visited[cur - 1] {
                options.push((Direction::West, cur - 1));
            }
            if options.is_empty() {
                stack.pop();
                continue;
            }
            let (dir, next) = options[rng.random_range(0..options.len())];
            match dir {
                Direction::North => cells[cur].remove(Direction::North),
                Direction::West => cells[cur].remove(Direction::West),
                Direction::South => cells[next].remove(Direction::North),
                Direction::East => cells[next].remove(Direction::West),
            }
            visited[next] = true;
            stack.push(next);
        }

        let pony = rng.random_range(0..n);
        let mut end_point = rng.random_range(0..n - 1);
        if end_point >= pony {
            end_point += 1;
        }
        Self {
            width,
            height,
            cells,
            pony,
            end_point,
            status: GameStatus::Active,
            last_result: None,
        }
    }

    /// Cell reached by moving the pony, if no wall is in the way.
    fn step(&self, dir: Direction) -> Option<usize> {
        let cur = self.pony;
        let (row, col) = (cur / self.width, cur % self.width);
        match dir {
            Direction::North if row > 0 && !self.cells[cur].contains(Direction::North) => {
                Some(cur - self.width)
            }
            Direction::West if col > 0 && !self.cells[cur].contains(Direction::West) => Some(cur - 1),
            Direction::South
                if row + 1 < self.height
                    && !self.cells[cur + self.width].contains(Direction::North) =>
            {
                Some(cur + self.width)
            }
            Direction::East if col + 1 < self.width && !self.cells[cur + 1].contains(Direction::West) => {
                Some(cur + 1)
            }
            _ => None,
        }
    }

    fn response(&self, maze_id: &str) -> MazeResponse {
        MazeResponse {
            maze_id: Some(maze_id.to_string()),
            size: [self.width, self.height],
            pony: vec![self.pony],
            end_point: vec![self.end_point],
            data: self.cells.iter().map(|walls| walls.iter().collect()).collect(),
            game_state: GameStateWire {
                state: self.status.to_string(),
                state_result: self.last_result.clone(),
            },
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..self.height {
            for col in 0..self.width {
                let walls = self.cells[row * self.width + col];
                out.push_str(if walls.contains(Direction::North) { "+---" } else { "+   " });
            }
            out.push_str("+\n");
            for col in 0..self.width {
                let idx = row * self.width + col;
                let walls = self.cells[idx];
                let mark = if idx == self.pony {
                    'P'
                } else if idx == self.end_point {
                    'E'
                } else {
                    ' '
                };
                let side = if walls.contains(Direction::West) { '|' } else { ' ' };
                let _ = write!(out, "{} {} ", side, mark);
            }
            out.push_str("|\n");
        }
        out.push_str(&"+---".repeat(self.width));
        out.push_str("+\n");
        out
    }
}

struct Service {
    rng: SmallRng,
    mazes: HashMap<String, Maze>,
    next_id: u64,
    allowed_players: Option<Vec<String>>,
}

/// In-process stand-in for the remote maze service.
///
/// Clones share the same mazes.
#[derive(Clone)]
pub struct InMemoryGateway {
    service: Arc<Mutex<Service>>,
}

fn remote(status: u16, message: &str) -> GatewayError {
    GatewayError::Remote {
        status,
        payload: serde_json::json!({ "error": message }),
    }
}

impl InMemoryGateway {
    /// Service with maze layouts drawn from a random seed.
    pub fn new() -> Self {
        let mut seed_rng = rand::rng();
        Self::from_rng(SmallRng::from_rng(&mut seed_rng))
    }

    /// Service producing the same mazes for the same seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        Self {
            service: Arc::new(Mutex::new(Service {
                rng,
                mazes: HashMap::new(),
                next_id: 0,
                allowed_players: None,
            })),
        }
    }

    /// Only accept the listed player names at creation.
    pub fn with_allowed_players<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Ok(mut service) = self.service.lock() {
            service.allowed_players = Some(names.into_iter().map(Into::into).collect());
        }
        self
    }

    fn lock(&self) -> Result<MutexGuard<'_, Service>, GatewayError> {
        self.service
            .lock()
            .map_err(|_| GatewayError::Transport("in-memory service lock poisoned".to_string()))
    }

    /// Current pony cell of a maze.
    pub fn pony_position(&self, maze_id: &str) -> Option<usize> {
        self.lock().ok()?.mazes.get(maze_id).map(|m| m.pony)
    }

    /// Target cell of a maze.
    pub fn end_point(&self, maze_id: &str) -> Option<usize> {
        self.lock().ok()?.mazes.get(maze_id).map(|m| m.end_point)
    }

    pub fn maze_count(&self) -> usize {
        self.lock().map(|s| s.mazes.len()).unwrap_or(0)
    }
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MazeGateway for InMemoryGateway {
    async fn create_maze(
        &mut self,
        player_name: &str,
        width: u32,
        height: u32,
    ) -> Result<String, GatewayError> {
        let mut service = self.lock()?;
        let range = MAZE_MIN_DIMENSION..=MAZE_MAX_DIMENSION;
        if !range.contains(&width) || !range.contains(&height) {
            return Err(remote(400, "Maze dimensions must be between 15 and 25"));
        }
        let allowed = match &service.allowed_players {
            Some(names) => names.iter().any(|n| n == player_name),
            None => !player_name.is_empty(),
        };
        if !allowed {
            return Err(remote(400, "Only ponies can play"));
        }
        service.next_id += 1;
        let maze_id = format!("maze-{:04}", service.next_id);
        let maze = Maze::generate(&mut service.rng, width as usize, height as usize);
        debug!(
            "created {} ({}x{}) for {}: pony {} end {}",
            maze_id, width, height, player_name, maze.pony, maze.end_point
        );
        service.mazes.insert(maze_id.clone(), maze);
        Ok(maze_id)
    }

    async fn fetch_state(&mut self, maze_id: &str) -> Result<MazeState, GatewayError> {
        let service = self.lock()?;
        let maze = service
            .mazes
            .get(maze_id)
            .ok_or_else(|| remote(404, "Maze not found"))?;
        MazeState::try_from(maze.response(maze_id)).map_err(|e| GatewayError::Malformed(e.to_string()))
    }

    async fn submit_move(
        &mut self,
        maze_id: &str,
        direction: Direction,
    ) -> Result<MoveOutcome, GatewayError> {
        let mut service = self.lock()?;
        let maze = service
            .mazes
            .get_mut(maze_id)
            .ok_or_else(|| remote(404, "Maze not found"))?;
        if !maze.status.is_active() {
            return Err(remote(400, "Game is not active"));
        }
        let result = match maze.step(direction) {
            Some(next) => {
                maze.pony = next;
                if next == maze.end_point {
                    maze.status = GameStatus::Won;
                    MOVE_WON
                } else {
                    MOVE_ACCEPTED
                }
            }
            None => MOVE_BLOCKED,
        };
        maze.last_result = Some(result.to_string());
        let response = MoveResponse {
            state: Some(maze.status.to_string()),
            state_result: Some(result.to_string()),
            game_state: None,
        };
        Ok(MoveOutcome::from(response))
    }

    async fn fetch_print(&mut self, maze_id: &str) -> Result<String, GatewayError> {
        let service = self.lock()?;
        service
            .mazes
            .get(maze_id)
            .map(Maze::render)
            .ok_or_else(|| remote(404, "Maze not found"))
    }
}
