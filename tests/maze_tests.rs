use pony_maze::domain::{MazeResponse, MoveOutcome, MoveResponse};
use pony_maze::{
    resolve, Direction, DirectionSet, GameStatus, MazeError, MazeState, Neighbor,
};

use Direction::*;

fn grid_with(width: usize, height: usize, player: usize, walls: &[(usize, DirectionSet)]) -> MazeState {
    let mut cells = vec![DirectionSet::empty(); width * height];
    for &(idx, w) in walls {
        cells[idx] = w;
    }
    MazeState::new(width, height, cells, player, GameStatus::Active).unwrap()
}

#[test]
fn corner_cell_with_open_forward_neighbors() {
    let res = resolve(
        DirectionSet::from([North, West]),
        Neighbor::Exists([South].into()),
        Neighbor::Exists([East].into()),
    );
    assert_eq!(res, DirectionSet::from([South, East]));
    assert_eq!(res.iter().collect::<Vec<_>>(), vec![South, East]);

    let state = grid_with(
        15,
        15,
        0,
        &[(0, [North, West].into()), (1, [South].into()), (15, [East].into())],
    );
    assert_eq!(state.walkable(), DirectionSet::from([South, East]));
}

#[test]
fn last_cell_can_only_go_north_or_west() {
    let state = grid_with(15, 15, 15 * 15 - 1, &[]);
    assert_eq!(state.neighbor(East), Neighbor::OffGrid);
    assert_eq!(state.neighbor(South), Neighbor::OffGrid);
    assert_eq!(state.walkable(), DirectionSet::from([North, West]));
}

#[test]
fn end_of_row_does_not_see_next_row_as_east() {
    // cell 15 starts row 1 and has no west wall; it must not open east from cell 14
    let state = grid_with(15, 15, 14, &[]);
    assert!(!state.walkable().contains(East));
    assert!(state.walkable().contains(South));
}

#[test]
fn duplicate_walls_collapse() {
    let set: DirectionSet = vec![North, North, West].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn decodes_service_snapshot() {
    let body = r#"{
        "pony": [1],
        "domokun": [3],
        "end-point": [2],
        "size": [2, 2],
        "difficulty": 0,
        "data": [["west", "north"], ["north"], ["west"], ["north"]],
        "maze_id": "abc-123",
        "game-state": {"state": "Active", "state-result": "Successfully created"}
    }"#;
    let res: MazeResponse = serde_json::from_str(body).unwrap();
    let state = MazeState::try_from(res).unwrap();
    assert_eq!(state.width(), 2);
    assert_eq!(state.height(), 2);
    assert_eq!(state.player_index(), 1);
    assert_eq!(state.end_point(), Some(2));
    assert!(state.is_active());
    assert_eq!(state.last_move_result(), Some("Successfully created"));
    assert_eq!(state.current_cell(), DirectionSet::from([North]));
    // east is off-grid, south cell 3 has a north wall
    assert_eq!(state.walkable(), DirectionSet::from([West]));
}

#[test]
fn snapshot_with_wrong_cell_count_is_rejected() {
    let body = r#"{
        "pony": [0],
        "size": [15, 15],
        "data": [["west", "north"]],
        "game-state": {"state": "active"}
    }"#;
    let res: MazeResponse = serde_json::from_str(body).unwrap();
    assert_eq!(
        MazeState::try_from(res).unwrap_err(),
        MazeError::CellCountMismatch {
            expected: 225,
            actual: 1
        }
    );
}

#[test]
fn unknown_wall_name_fails_to_decode() {
    let body = r#"{
        "pony": [0],
        "size": [1, 1],
        "data": [["up"]],
        "game-state": {"state": "active"}
    }"#;
    assert!(serde_json::from_str::<MazeResponse>(body).is_err());
}

#[test]
fn move_response_variants() {
    let res: MoveResponse =
        serde_json::from_str(r#"{"state": "won", "state-result": "You won. Game ended"}"#).unwrap();
    let outcome = MoveOutcome::from(res);
    assert_eq!(outcome.status, Some(GameStatus::Won));
    assert_eq!(outcome.state_result.as_deref(), Some("You won. Game ended"));

    let res: MoveResponse = serde_json::from_str(
        r#"{"state-result": "Move accepted", "game-state": {"state": "active"}}"#,
    )
    .unwrap();
    assert_eq!(MoveOutcome::from(res).status, Some(GameStatus::Active));
}

#[test]
fn status_parsing() {
    assert!(GameStatus::parse("Active").is_active());
    assert_eq!(GameStatus::parse("over"), GameStatus::Over);
    assert_eq!(GameStatus::parse("finished"), GameStatus::Other("finished".to_string()));
    assert!(!GameStatus::parse("finished").is_active());
}

#[test]
fn known_statuses_display_lowercase_whatever_the_service_casing() {
    assert_eq!(GameStatus::parse("Active").to_string(), "active");
    assert_eq!(GameStatus::parse("WON").to_string(), "won");
    assert_eq!(GameStatus::parse(" Over ").to_string(), "over");
    // unknown states keep the service's text
    assert_eq!(GameStatus::parse("Finished").to_string(), "Finished");
}

#[test]
fn direction_wire_names() {
    assert_eq!(serde_json::to_string(&East).unwrap(), "\"east\"");
    assert_eq!("west".parse::<Direction>().unwrap(), West);
    assert!("up".parse::<Direction>().is_err());
}
