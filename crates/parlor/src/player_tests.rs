use super::*;
use crate::{outcome::EndReason, save::SaveData};
use std::io::Cursor;

fn report(description: &str, uci: &str) -> MoveReport {
    MoveReport {
        color: Color::Black,
        mv: Some(uci.parse().unwrap()),
        uci: uci.to_string(),
        description: description.to_string(),
    }
}

#[test]
fn test_terminal_player_prompts_and_trims() {
    let board = Board::default();
    let mut player = TerminalPlayer::new("human", Cursor::new("  e2e4  \n"), Vec::new());
    let view = TurnView {
        board: &board,
        color: Color::White,
        fens: &[],
    };
    assert_eq!(player.get_move(&view).unwrap(), "e2e4");

    let err = player.get_move(&view).unwrap_err();
    assert!(matches!(err, ParlorError::InputClosed { ref player } if player == "human"));

    let out = String::from_utf8(player.into_output()).unwrap();
    assert!(out.starts_with("white move: "));
}

#[test]
fn test_terminal_player_narrates() {
    let mut store = SaveStore::in_memory(SaveData::default());
    let mut player = TerminalPlayer::new("human", Cursor::new(""), Vec::new());
    player.new_game(Color::White, &store).unwrap();

    player.confirm_move(&report("pawn to e4", "e2e4")).unwrap();
    player.hear_move(&report("pawn to e5", "e7e5"), &Board::default()).unwrap();
    player.hear("Checkmate").unwrap();
    let outcome = GameOutcome::win(Color::White, EndReason::Checkmate);
    player.game_over(&outcome, GameResult::Win, &mut store).unwrap();

    let out = String::from_utf8(player.into_output()).unwrap();
    assert!(out.contains("New game: you play white\n"));
    assert!(out.contains("pawn to e4 (e2e4)\n"));
    assert!(out.contains("black played: pawn to e5\n"));
    assert!(out.contains("R N B Q K B N R\n"));
    assert!(out.contains("Checkmate\n"));
    assert!(out.contains("You win! (white)\n"));
    assert!(out.contains("white wins by checkmate (1-0)"));
}

#[test]
fn test_scripted_player_runs_dry() {
    let board = Board::default();
    let view = TurnView {
        board: &board,
        color: Color::Black,
        fens: &[],
    };
    let mut player = ScriptedPlayer::new("script", ["e7e5"]);
    assert_eq!(player.remaining(), 1);
    assert_eq!(player.get_move(&view).unwrap(), "e7e5");
    assert!(matches!(
        player.get_move(&view),
        Err(ParlorError::InputClosed { .. })
    ));

    player.hear("hello").unwrap();
    player.confirm_move(&report("pawn to e5", "e7e5")).unwrap();
    assert_eq!(player.heard(), ["hello".to_string()]);
    assert_eq!(player.confirmed().len(), 1);
    assert!(player.opponent_moves().is_empty());
}
