//! Serialization round-trips over reachable states.

use blokus_core::{Board, PieceKind, PieceSet, Player, StateBlob, StateError};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Make up to `moves` random legal placements, rotating through players.
fn random_position(size: usize, seed: u64, moves: usize) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(size);
    let mut hands: [PieceSet; 4] = Default::default();
    let mut player = Player::One;

    for _ in 0..moves {
        let hand = &mut hands[player.index()];
        let options: Vec<_> = hand
            .remaining()
            .flat_map(|kind| {
                board
                    .all_placements(&kind.piece(), player)
                    .into_iter()
                    .map(move |(piece, anchor)| (kind, piece, anchor))
            })
            .collect();
        if let Some((kind, piece, anchor)) = options.choose(&mut rng) {
            assert!(board.place_piece(piece, *anchor, player));
            hand.mark_placed(*kind);
        }
        player = player.next();
    }
    board
}

#[test]
fn test_blob_roundtrip_reachable_states() {
    for seed in 0..10 {
        for moves in [0, 1, 4, 12, 40] {
            let board = random_position(12, seed, moves);
            let blob = board.serialize_state();

            let mut restored = Board::new(12);
            assert!(restored.deserialize_state(&blob));
            assert_eq!(restored.serialize_state(), blob);
            assert_eq!(restored.connectable(), board.connectable());
        }
    }
}

#[test]
fn test_json_roundtrip_reachable_states() {
    for seed in 0..5 {
        let board = random_position(20, seed, 30);
        let json = board.to_json().unwrap();

        let mut restored = Board::standard();
        restored.restore_json(&json).unwrap();
        assert_eq!(restored.to_json().unwrap(), json);
        assert_eq!(restored.board_state(), board.board_state());
    }
}

#[test]
fn test_restored_board_finds_same_moves() {
    let board = random_position(14, 3, 16);
    let mut restored = Board::new(14);
    restored.restore(&board.serialize_state()).unwrap();

    for player in Player::all() {
        for kind in PieceKind::ALL {
            for orientation in kind.piece().orientations() {
                assert_eq!(
                    restored.valid_placements(&orientation, player),
                    board.valid_placements(&orientation, player)
                );
            }
        }
    }
}

#[test]
fn test_restore_overwrites_existing_state() {
    let source = random_position(10, 1, 8);
    let mut target = random_position(10, 2, 8);
    assert_ne!(target.serialize_state(), source.serialize_state());

    target.restore(&source.serialize_state()).unwrap();
    assert_eq!(target.serialize_state(), source.serialize_state());
}

#[test]
fn test_failed_restore_keeps_state() {
    let mut board = random_position(10, 4, 10);
    let before = board.serialize_state();

    let mut wrong_size = random_position(11, 4, 10).serialize_state();
    assert!(!board.deserialize_state(&wrong_size));

    wrong_size.board_size = 10;
    assert!(matches!(board.restore(&wrong_size), Err(StateError::GridLength { .. })));

    let truncated = &board.to_json().unwrap()[..40];
    assert!(matches!(StateBlob::from_json(truncated), Err(StateError::Json(_))));
    assert!(board.restore_json(truncated).is_err());

    assert_eq!(board.serialize_state(), before);
}
