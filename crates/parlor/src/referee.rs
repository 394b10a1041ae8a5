//! Runs a game between two players.
//!
//! The referee owns the board. Players only ever hand it raw input and hear
//! back what happened, so it does not care who or what is playing.

use chess_core::{
    board_from_fen, color_name,
    cozy_chess::{Board, Color, Move, Piece},
    decode_keypad, describe_ply, legal_moves, piece_name, ply_to_uci, render_board,
    resolve_uci, NotationError, RepetitionHistory,
};
use tracing::{debug, info, warn};

use crate::{
    codes::{help_text, is_code, Code},
    error::Result,
    outcome::{adjudicate, EndReason, GameOutcome},
    player::{MoveReport, Player, TurnView},
    save::SaveStore,
};

/// Configuration for a game
#[derive(Debug, Clone)]
pub struct RefereeConfig {
    /// Plies before the game is called a draw (0 = no limit)
    pub max_plies: u32,
}

impl Default for RefereeConfig {
    fn default() -> Self {
        Self { max_plies: 400 }
    }
}

/// Position and bookkeeping for the game in progress.
struct Game {
    board: Board,
    history: RepetitionHistory,
    plies: u32,
    resigned: Option<Color>,
}

impl Game {
    fn new(board: Board) -> Self {
        Self {
            history: RepetitionHistory::new(&board),
            board,
            plies: 0,
            resigned: None,
        }
    }

    /// Replace the position, forgetting how we got here.
    fn load(&mut self, board: Board) {
        *self = Self::new(board);
    }
}

pub struct Referee {
    config: RefereeConfig,
}

impl Referee {
    pub fn new(config: RefereeConfig) -> Self {
        Self { config }
    }

    /// Play one game from the starting position.
    ///
    /// Both players hear the result through [`Player::game_over`] before the
    /// outcome is returned. A player error (such as running out of input)
    /// aborts the game.
    pub fn play_game<'p>(
        &self,
        white: &'p mut dyn Player,
        black: &'p mut dyn Player,
        store: &mut SaveStore,
    ) -> Result<GameOutcome> {
        let mut game = Game::new(Board::default());
        white.new_game(Color::White, store)?;
        black.new_game(Color::Black, store)?;
        info!(white = white.name(), black = black.name(), "game started");

        let outcome = loop {
            if let Some(outcome) = self.outcome(&game) {
                break outcome;
            }

            let color = game.board.side_to_move();
            let (active, other) = seats(color, &mut *white, &mut *black);
            let raw = active.get_move(&TurnView {
                board: &game.board,
                color,
                fens: &store.data().fens,
            })?;

            if is_code(&raw) {
                run_code(&raw, &mut game, active, other, store)?;
                continue;
            }
            match read_move(&game.board, &raw) {
                Ok((mv, next)) => commit(&mut game, mv, next, active, other, store)?,
                Err(message) => {
                    warn!(player = active.name(), %raw, "rejected input");
                    active.hear(&message)?;
                }
            }
        };

        info!(%outcome, plies = game.plies, "game over");
        white.game_over(&outcome, outcome.result_for(Color::White), store)?;
        black.game_over(&outcome, outcome.result_for(Color::Black), store)?;
        Ok(outcome)
    }

    /// Resignation first, then the rules, then the ply cap.
    fn outcome(&self, game: &Game) -> Option<GameOutcome> {
        if let Some(color) = game.resigned {
            return Some(GameOutcome::win(!color, EndReason::Resignation));
        }
        if let Some(outcome) = adjudicate(&game.board, &game.history) {
            return Some(outcome);
        }
        let capped = self.config.max_plies > 0 && game.plies >= self.config.max_plies;
        capped.then(|| GameOutcome::draw(EndReason::MoveLimit))
    }
}

/// The player to move first, their opponent second.
fn seats<'a, 'p>(
    to_move: Color,
    white: &'a mut (dyn Player + 'p),
    black: &'a mut (dyn Player + 'p),
) -> (&'a mut (dyn Player + 'p), &'a mut (dyn Player + 'p)) {
    match to_move {
        Color::White => (white, black),
        Color::Black => (black, white),
    }
}

/// Turn raw input into a ply and the position after it, or the message to
/// send back to the player.
fn read_move(board: &Board, raw: &str) -> std::result::Result<(Option<Move>, Board), String> {
    let illegal = || format!("Illegal \"{raw}\"");
    let uci = decode_keypad(raw).map_err(|e| format!("Invalid \"{raw}\": {e}"))?;
    match resolve_uci(board, &uci) {
        Ok(Some(mv)) => {
            let mut next = board.clone();
            next.play_unchecked(mv);
            Ok((Some(mv), next))
        }
        // Passing is only allowed when not in check.
        Ok(None) => board.null_move().map(|next| (None, next)).ok_or_else(illegal),
        Err(NotationError::Illegal(_)) => Err(illegal()),
        Err(e) => Err(format!("Invalid \"{raw}\": {e}")),
    }
}

fn commit(
    game: &mut Game,
    mv: Option<Move>,
    next: Board,
    active: &mut dyn Player,
    other: &mut dyn Player,
    store: &mut SaveStore,
) -> Result<()> {
    let report = MoveReport {
        color: game.board.side_to_move(),
        mv,
        uci: ply_to_uci(&game.board, mv),
        description: describe_ply(&game.board, mv)?,
    };
    game.board = next;
    game.history.push(&game.board);
    game.plies += 1;
    debug!(
        ply = game.plies,
        color = color_name(report.color),
        uci = %report.uci,
        description = %report.description,
        "move played"
    );

    let fen = game.board.to_string();
    if let Err(e) = store.update(|data| data.push_fen(fen)) {
        warn!(error = %e, "could not record position in save file");
    }

    active.confirm_move(&report)?;
    other.hear_move(&report, &game.board)?;

    if legal_moves(&game.board).is_empty() {
        let announcement = if game.board.checkers().is_empty() {
            "Stalemate"
        } else {
            "Checkmate"
        };
        active.hear(announcement)?;
        other.hear(announcement)?;
    }
    Ok(())
}

fn run_code(
    raw: &str,
    game: &mut Game,
    active: &mut dyn Player,
    other: &mut dyn Player,
    store: &SaveStore,
) -> Result<()> {
    let code = match Code::parse(raw) {
        Ok(code) => code,
        Err(e) => {
            warn!(player = active.name(), %raw, "bad code");
            return active.hear(&format!("Invalid \"{raw}\": {e}"));
        }
    };
    debug!(player = active.name(), ?code, "running code");

    match code {
        Code::Help => active.hear(&help_text()),
        Code::Show => active.hear(&render_board(&game.board)),
        Code::Pieces => active.hear(&piece_roll_call(&game.board)),
        Code::Fen(fen) => match board_from_fen(&fen) {
            Ok(board) => {
                game.load(board);
                info!(fen = %game.board, "position loaded");
                active.hear(&render_board(&game.board))
            }
            Err(e) => active.hear(&format!("Invalid \"{raw}\": {e}")),
        },
        Code::Prev(None) => active.hear(&saved_boards(&store.data().fens)),
        Code::Prev(Some(n)) => {
            let fens = &store.data().fens;
            let Some(fen) = fens.get(n) else {
                return active.hear(&format!(
                    "Invalid \"{raw}\": no saved board #{n} ({} saved)",
                    fens.len()
                ));
            };
            match board_from_fen(fen) {
                Ok(board) => {
                    game.load(board);
                    info!(fen = %game.board, "saved position loaded");
                    active.hear(&render_board(&game.board))
                }
                Err(e) => active.hear(&format!("Invalid \"{raw}\": {e}")),
            }
        }
        Code::Reset => {
            game.load(Board::default());
            info!("board reset");
            active.hear("Board reset")?;
            other.hear("Board reset")
        }
        Code::Resign => {
            game.resigned = Some(game.board.side_to_move());
            other.hear("Resigning.")
        }
    }
}

/// Every piece on the board by side and type, e.g. `white knights: b1, g1`.
pub fn piece_roll_call(board: &Board) -> String {
    let mut lines = Vec::new();
    for color in [Color::White, Color::Black] {
        for piece in Piece::ALL {
            let squares: Vec<String> = (board.pieces(piece) & board.colors(color))
                .into_iter()
                .map(|square| square.to_string())
                .collect();
            if squares.is_empty() {
                continue;
            }
            lines.push(format!(
                "{} {}s: {}",
                color_name(color),
                piece_name(piece),
                squares.join(", ")
            ));
        }
    }
    lines.join("\n")
}

/// Listing for `*prev` without an argument.
fn saved_boards(fens: &[String]) -> String {
    if fens.is_empty() {
        return "No saved boards yet".to_string();
    }
    let mut text = String::from("Previously played boards:\n");
    for (i, fen) in fens.iter().enumerate() {
        let entry = match board_from_fen(fen) {
            Ok(board) => format!(
                "#{i} {} to move:\n{fen}\n{}",
                color_name(board.side_to_move()),
                render_board(&board)
            ),
            Err(e) => format!("#{i} unreadable ({e}):\n{fen}"),
        };
        for line in entry.lines() {
            text.push_str("    ");
            text.push_str(line);
            text.push('\n');
        }
    }
    text.push_str("To load one of these, use the prev code, e.g. \"*prev 2\"");
    text
}

#[cfg(test)]
#[path = "referee_tests.rs"]
mod referee_tests;
