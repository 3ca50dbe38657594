use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use anyhow::bail;

use crate::common::{DirectionSet, GameStatus};
use crate::maze::MazeState;
use crate::validation::{parse_dimension, validate_player_name};

use super::{Dimension, GameChoice, MainChoice, MoveChoice, Navigator};

const GOODBYE_MSG: &str = "See Ya!";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Interactive navigator reading answers line by line.
pub struct CliNavigator<R, W> {
    input: R,
    output: W,
}

impl CliNavigator<BufReader<Stdin>, Stdout> {
    /// Navigator bound to the process terminal.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliNavigator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, message: &str) -> anyhow::Result<String> {
        write!(self.output, "? {} ", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Numbered list selection; re-asks until a listed number is typed.
    fn select<T: Copy>(&mut self, message: &str, options: &[(&str, T)]) -> anyhow::Result<T> {
        loop {
            writeln!(self.output, "? {}", message)?;
            for (i, (label, _)) in options.iter().enumerate() {
                writeln!(self.output, "  {}) {}", i + 1, label)?;
            }
            let answer = self.prompt(">")?;
            match answer.trim().parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(options[n - 1].1),
                _ => writeln!(
                    self.output,
                    "✗ Please enter a number between 1 and {}",
                    options.len()
                )?,
            }
        }
    }
}

impl<R: BufRead + Send, W: Write + Send> Navigator for CliNavigator<R, W> {
    fn main_menu(&mut self) -> anyhow::Result<MainChoice> {
        self.select(
            "Select an option",
            &[("Start a new game", MainChoice::StartGame), ("Exit", MainChoice::Exit)],
        )
    }

    fn game_menu(&mut self) -> anyhow::Result<GameChoice> {
        self.select(
            "Select an option",
            &[
                ("Print maze", GameChoice::PrintMaze),
                ("Move", GameChoice::Move),
                ("Exit", GameChoice::Exit),
            ],
        )
    }

    fn ask_dimension(&mut self, dimension: Dimension) -> anyhow::Result<u32> {
        let message = match dimension {
            Dimension::Width => "Input maze width:",
            Dimension::Height => "Input maze height:",
        };
        loop {
            let answer = self.prompt(message)?;
            match parse_dimension(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "✗ {}", e)?,
            }
        }
    }

    fn ask_player_name(&mut self) -> anyhow::Result<String> {
        loop {
            let answer = self.prompt("Input a valid pony player name (eg: Pinkie Pie):")?;
            match validate_player_name(&answer) {
                Ok(name) => return Ok(name),
                Err(e) => writeln!(self.output, "✗ {}", e)?,
            }
        }
    }

    fn choose_direction(
        &mut self,
        _state: &MazeState,
        walkable: DirectionSet,
    ) -> anyhow::Result<MoveChoice> {
        let mut options: Vec<(&str, MoveChoice)> = walkable
            .iter()
            .map(|dir| (dir.label(), MoveChoice::Go(dir)))
            .collect();
        options.push(("Cancel", MoveChoice::Cancel));
        self.select("Where do you want to move?", &options)
    }

    fn show_maze(&mut self, print: &str, status: &GameStatus) {
        let _ = writeln!(self.output, "{}", print.trim_end());
        let _ = writeln!(self.output, "Current game state: {}", status);
    }

    fn show_move_result(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }

    fn show_error(&mut self, message: &str) {
        let _ = writeln!(self.output, "✗ Error: {}", message);
    }

    fn clear_screen(&mut self) {
        let _ = write!(self.output, "{}", CLEAR_SCREEN);
        let _ = self.output.flush();
    }

    fn farewell(&mut self) {
        let _ = writeln!(self.output, "{}", GOODBYE_MSG);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Direction;
    use std::io::Cursor;

    fn navigator(input: &str) -> CliNavigator<Cursor<Vec<u8>>, Vec<u8>> {
        CliNavigator::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn dimension_prompt_repeats_until_valid() {
        let mut nav = navigator("14\nabc\n15\n");
        assert_eq!(nav.ask_dimension(Dimension::Width).unwrap(), 15);
        let out = String::from_utf8(nav.into_output()).unwrap();
        assert!(out.contains("greater than or equal to 15 and less than or equal to 25"));
        assert!(out.contains("must be an integer"));
    }

    #[test]
    fn direction_menu_lists_only_walkable_and_cancel() {
        let state = MazeState::new(
            1,
            1,
            vec![DirectionSet::empty()],
            0,
            GameStatus::Active,
        )
        .unwrap();
        let mut nav = navigator("2\n");
        let walkable = DirectionSet::from([Direction::West, Direction::North]);
        let choice = nav.choose_direction(&state, walkable).unwrap();
        assert_eq!(choice, MoveChoice::Go(Direction::West));
        let out = String::from_utf8(nav.into_output()).unwrap();
        assert!(out.contains("1) North ▲"));
        assert!(out.contains("2) West ◄"));
        assert!(out.contains("3) Cancel"));
        assert!(!out.contains("East"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut nav = navigator("");
        assert!(nav.main_menu().is_err());
    }
}
