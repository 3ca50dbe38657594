use anyhow::bail;

use crate::common::{Direction, DirectionSet};
use crate::maze::MazeState;

use super::{Dimension, GameChoice, MainChoice, MoveChoice, Navigator};

/// Moves attempted before the navigator gives up on a game.
pub const DEFAULT_MOVE_BUDGET: usize = 10_000;

/// Scripted navigator that plays a single game with the right-hand rule.
///
/// In a maze without loops, keeping a hand on the right wall visits every
/// cell, so the end point is always reached within the move budget for the
/// grid sizes the service accepts.
pub struct AutoNavigator {
    width: u32,
    height: u32,
    player_name: String,
    move_budget: usize,
    heading: Direction,
    moves: usize,
    name_attempts: usize,
    started: bool,
}

impl AutoNavigator {
    pub fn new(width: u32, height: u32, player_name: impl Into<String>) -> Self {
        Self {
            width,
            height,
            player_name: player_name.into(),
            move_budget: DEFAULT_MOVE_BUDGET,
            heading: Direction::North,
            moves: 0,
            name_attempts: 0,
            started: false,
        }
    }

    pub fn with_move_budget(mut self, budget: usize) -> Self {
        self.move_budget = budget;
        self
    }

    /// Directions chosen so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    fn out_of_moves(&self) -> bool {
        self.moves >= self.move_budget
    }

    /// Next direction under the right-hand rule.
    fn follow_wall(&self, walkable: DirectionSet) -> Option<Direction> {
        let h = self.heading;
        [h.right(), h, h.left(), h.opposite()]
            .into_iter()
            .find(|d| walkable.contains(*d))
    }
}

impl Navigator for AutoNavigator {
    fn main_menu(&mut self) -> anyhow::Result<MainChoice> {
        if self.started {
            return Ok(MainChoice::Exit);
        }
        self.started = true;
        Ok(MainChoice::StartGame)
    }

    fn game_menu(&mut self) -> anyhow::Result<GameChoice> {
        if self.out_of_moves() {
            Ok(GameChoice::Exit)
        } else {
            Ok(GameChoice::Move)
        }
    }

    fn ask_dimension(&mut self, dimension: Dimension) -> anyhow::Result<u32> {
        Ok(match dimension {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        })
    }

    fn ask_player_name(&mut self) -> anyhow::Result<String> {
        // the name never changes, so a second request means it was refused
        if self.name_attempts > 0 {
            bail!("player name '{}' was rejected", self.player_name);
        }
        self.name_attempts += 1;
        Ok(self.player_name.clone())
    }

    fn choose_direction(
        &mut self,
        _state: &MazeState,
        walkable: DirectionSet,
    ) -> anyhow::Result<MoveChoice> {
        if self.out_of_moves() {
            return Ok(MoveChoice::Cancel);
        }
        match self.follow_wall(walkable) {
            Some(dir) => {
                self.heading = dir;
                self.moves += 1;
                Ok(MoveChoice::Go(dir))
            }
            None => Ok(MoveChoice::Cancel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::GameStatus;

    fn state() -> MazeState {
        MazeState::new(1, 1, vec![DirectionSet::empty()], 0, GameStatus::Active).unwrap()
    }

    #[test]
    fn prefers_right_turn_then_straight() {
        let mut nav = AutoNavigator::new(15, 15, "Rarity");
        let walkable = DirectionSet::from([Direction::North, Direction::East]);
        assert_eq!(
            nav.choose_direction(&state(), walkable).unwrap(),
            MoveChoice::Go(Direction::East)
        );
        // heading east now: right is south, straight is east
        let walkable = DirectionSet::from([Direction::East, Direction::West]);
        assert_eq!(
            nav.choose_direction(&state(), walkable).unwrap(),
            MoveChoice::Go(Direction::East)
        );
    }

    #[test]
    fn cancels_when_budget_is_spent() {
        let mut nav = AutoNavigator::new(15, 15, "Rarity").with_move_budget(1);
        let walkable = DirectionSet::from([Direction::South]);
        assert!(matches!(nav.choose_direction(&state(), walkable).unwrap(), MoveChoice::Go(_)));
        assert_eq!(nav.choose_direction(&state(), walkable).unwrap(), MoveChoice::Cancel);
        assert_eq!(nav.game_menu().unwrap(), GameChoice::Exit);
    }
}
