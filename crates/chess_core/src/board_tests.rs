use super::*;
use cozy_chess::Board;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

#[test]
fn test_from_fen_accepts_positions_without_kings() {
    // Four fields only, no kings, a black pawn on the first rank
    let snap = Snapshot::from_fen("1n5n/B1PPP1B1/1r1rN1N1/P1P5/8/1rb1PQK1/qQn5/1p2BRN1 w - -")
        .unwrap();
    assert_eq!(snap.piece_at(sq("b1")), Some((Color::Black, Piece::Pawn)));
    assert_eq!(snap.piece_at(sq("g3")), Some((Color::White, Piece::King)));
    assert_eq!(snap.king_square(Color::Black), None);
    assert!(!snap.in_check(Color::Black));
    assert_eq!(snap.squares_of(Color::White, Piece::Knight).len(), 3);
}

#[test]
fn test_from_fen_matches_cozy_board() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let board = Board::from_fen(fen, false).unwrap();
    let snap = Snapshot::from_fen(fen).unwrap();
    assert_eq!(snap, Snapshot::capture(&board));
    assert_eq!(snap.occupied(), board.occupied());
}

#[test]
fn test_from_fen_rejects_garbage() {
    assert_eq!(
        Snapshot::from_fen("8/8/8 w - -").unwrap_err(),
        FenError::BadRank {
            rank: 3,
            reason: "expected 8 ranks".to_string()
        }
    );
    assert_eq!(
        Snapshot::from_fen("8/8/8/8/8/8/8/7x w - -").unwrap_err(),
        FenError::BadPiece('x')
    );
    assert_eq!(
        Snapshot::from_fen("8/8/8/8/8/8/8/8 x - -").unwrap_err(),
        FenError::BadSide("x".to_string())
    );
    assert_eq!(
        Snapshot::from_fen("8/8/8/8/8/8/8/8 w").unwrap_err(),
        FenError::MissingField("castling")
    );
    assert!(matches!(
        Snapshot::from_fen("8/8/8/8/8/8/8/9 w - -"),
        Err(FenError::BadRank { .. })
    ));
    assert!(matches!(
        Snapshot::from_fen("8/8/8/8/8/8/8/8 w - z9"),
        Err(FenError::BadEnPassant(_))
    ));
}

#[test]
fn test_apply_en_passant_removes_passed_pawn() {
    let mut snap = Snapshot::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    snap.apply(mv("e5d6"));
    assert_eq!(snap.piece_at(sq("d6")), Some((Color::White, Piece::Pawn)));
    assert_eq!(snap.piece_at(sq("d5")), None);
    assert_eq!(snap.piece_at(sq("e5")), None);
    assert_eq!(snap.side_to_move(), Color::Black);
}

#[test]
fn test_apply_castling_both_encodings() {
    let fen = "4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1";

    let mut two_file = Snapshot::from_fen(fen).unwrap();
    two_file.apply(mv("e1g1"));
    let mut onto_rook = Snapshot::from_fen(fen).unwrap();
    onto_rook.apply(mv("e1h1"));

    for snap in [&two_file, &onto_rook] {
        assert_eq!(snap.piece_at(sq("g1")), Some((Color::White, Piece::King)));
        assert_eq!(snap.piece_at(sq("f1")), Some((Color::White, Piece::Rook)));
        assert_eq!(snap.piece_at(sq("h1")), None);
        assert_eq!(snap.piece_at(sq("e1")), None);
    }

    let mut long = Snapshot::from_fen(fen).unwrap();
    long.apply(mv("e1c1"));
    assert_eq!(long.piece_at(sq("c1")), Some((Color::White, Piece::King)));
    assert_eq!(long.piece_at(sq("d1")), Some((Color::White, Piece::Rook)));
    assert_eq!(long.piece_at(sq("a1")), None);
}

#[test]
fn test_apply_king_hop_never_invents_a_rook() {
    let mut snap = Snapshot::from_fen("5k2/8/8/8/8/8/8/4K3 w - -").unwrap();
    snap.apply(mv("e1g1"));
    assert_eq!(snap.piece_at(sq("g1")), Some((Color::White, Piece::King)));
    assert_eq!(snap.piece_at(sq("f1")), None);
    assert_eq!(snap.occupied().len(), 2);
    assert!(!snap.in_check(Color::Black));
}

#[test]
fn test_castling_field_is_syntax_only() {
    assert_eq!(
        Snapshot::from_fen("4k3/8/8/8/8/8/8/4K2R w Kx -").unwrap_err(),
        FenError::BadCastling("Kx".to_string())
    );

    // No rights given, but the rook is in the corner.
    let mut snap = Snapshot::from_fen("4k3/8/8/8/8/8/8/4K2R w - -").unwrap();
    snap.apply(mv("e1g1"));
    assert_eq!(snap.piece_at(sq("f1")), Some((Color::White, Piece::Rook)));
    assert_eq!(snap.piece_at(sq("h1")), None);
}

#[test]
fn test_apply_double_push_sets_en_passant() {
    let mut snap = Snapshot::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
    snap.apply(mv("e2e4"));
    assert_eq!(snap.en_passant_square(), Some(sq("e3")));
    snap.apply(mv("e8e7"));
    assert_eq!(snap.en_passant_square(), None);
}

#[test]
fn test_apply_promotion_and_empty_origin() {
    let mut snap = Snapshot::from_fen("8/4P3/8/8/8/8/8/8 w - -").unwrap();
    let before = snap.clone();
    snap.apply(mv("a1a2"));
    assert_eq!(snap, before);

    snap.apply(mv("e7e8n"));
    assert_eq!(snap.piece_at(sq("e8")), Some((Color::White, Piece::Knight)));
}
