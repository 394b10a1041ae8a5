//! Who sits at the board.
//!
//! The referee only ever talks to a [`Player`]: it asks for raw input and
//! reports what happened. Whether that is a person at a terminal, a script
//! or the computer is up to the implementation.

use std::{
    collections::VecDeque,
    fmt::Display,
    io::{self, BufRead, Write},
};

use chess_core::{
    color_name,
    cozy_chess::{Board, Color, Move},
    render_board,
};

use crate::{
    error::{ParlorError, Result},
    outcome::{GameOutcome, GameResult},
    save::SaveStore,
};

/// What a player may look at when asked for a move.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub board: &'a Board,
    pub color: Color,
    /// Saved positions, newest first
    pub fens: &'a [String],
}

/// A move that has just been played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub color: Color,
    /// None for a pass
    pub mv: Option<Move>,
    pub uci: String,
    pub description: String,
}

pub trait Player {
    fn name(&self) -> &str;

    fn new_game(&mut self, _color: Color, _store: &SaveStore) -> Result<()> {
        Ok(())
    }

    /// Raw input for this turn: a UCI move, keypad digits or a `*` code.
    ///
    /// Called again after input the referee could not use.
    fn get_move(&mut self, view: &TurnView<'_>) -> Result<String>;

    /// The player's own move was accepted.
    fn confirm_move(&mut self, _report: &MoveReport) -> Result<()> {
        Ok(())
    }

    /// The opponent moved; `board` is the position after the move.
    fn hear_move(&mut self, _report: &MoveReport, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// A message from the referee.
    fn hear(&mut self, message: &str) -> Result<()>;

    fn game_over(
        &mut self,
        _outcome: &GameOutcome,
        _result: GameResult,
        _store: &mut SaveStore,
    ) -> Result<()> {
        Ok(())
    }
}

/// Line-oriented input.
pub trait LineSource {
    /// Append one line to `buf`; `Ok(0)` at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<R: BufRead> LineSource for R {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Standard input, locked only while a line is read so two terminal
/// players can share it.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinLines;

impl LineSource for StdinLines {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::stdin().read_line(buf)
    }
}

/// A person typing moves at a terminal.
pub struct TerminalPlayer<R, W> {
    name: String,
    color: Color,
    input: R,
    output: W,
}

impl TerminalPlayer<StdinLines, io::Stdout> {
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, StdinLines, io::stdout())
    }
}

impl<R: LineSource, W: Write> TerminalPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            color: Color::White,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}").map_err(|e| ParlorError::io("failed to write to terminal", e))
    }
}

impl<R: LineSource, W: Write> Player for TerminalPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self, color: Color, _store: &SaveStore) -> Result<()> {
        self.color = color;
        self.say(format!("New game: you play {}", color_name(color)))
    }

    fn get_move(&mut self, view: &TurnView<'_>) -> Result<String> {
        write!(self.output, "{} move: ", color_name(view.color))
            .and_then(|()| self.output.flush())
            .map_err(|e| ParlorError::io("failed to write to terminal", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| ParlorError::io("failed to read from terminal", e))?;
        if read == 0 {
            return Err(ParlorError::InputClosed {
                player: self.name.clone(),
            });
        }
        Ok(line.trim().to_string())
    }

    fn confirm_move(&mut self, report: &MoveReport) -> Result<()> {
        self.say(format!("{} ({})", report.description, report.uci))
    }

    fn hear_move(&mut self, report: &MoveReport, board: &Board) -> Result<()> {
        self.say(format!("{} played: {}", color_name(report.color), report.description))?;
        self.say(render_board(board))
    }

    fn hear(&mut self, message: &str) -> Result<()> {
        self.say(message)
    }

    fn game_over(
        &mut self,
        outcome: &GameOutcome,
        result: GameResult,
        _store: &mut SaveStore,
    ) -> Result<()> {
        let color = color_name(self.color);
        match result {
            GameResult::Win => self.say(format!("You win! ({color})"))?,
            GameResult::Loss => self.say(format!("You lose... ({color})"))?,
            GameResult::Draw => self.say("Game was a draw")?,
        }
        self.say(outcome)
    }
}

/// Plays a fixed list of raw inputs and remembers everything it was told.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    name: String,
    inputs: VecDeque<String>,
    heard: Vec<String>,
    confirmed: Vec<MoveReport>,
    opponent_moves: Vec<MoveReport>,
    results: Vec<GameResult>,
}

impl ScriptedPlayer {
    pub fn new<I, S>(name: impl Into<String>, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn heard(&self) -> &[String] {
        &self.heard
    }

    pub fn confirmed(&self) -> &[MoveReport] {
        &self.confirmed
    }

    pub fn opponent_moves(&self) -> &[MoveReport] {
        &self.opponent_moves
    }

    pub fn results(&self) -> &[GameResult] {
        &self.results
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, _view: &TurnView<'_>) -> Result<String> {
        self.inputs.pop_front().ok_or_else(|| ParlorError::InputClosed {
            player: self.name.clone(),
        })
    }

    fn confirm_move(&mut self, report: &MoveReport) -> Result<()> {
        self.confirmed.push(report.clone());
        Ok(())
    }

    fn hear_move(&mut self, report: &MoveReport, _board: &Board) -> Result<()> {
        self.opponent_moves.push(report.clone());
        Ok(())
    }

    fn hear(&mut self, message: &str) -> Result<()> {
        self.heard.push(message.to_string());
        Ok(())
    }

    fn game_over(
        &mut self,
        _outcome: &GameOutcome,
        result: GameResult,
        _store: &mut SaveStore,
    ) -> Result<()> {
        self.results.push(result);
        Ok(())
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
