//! Random self-play.
//!
//! Players move in turn order 1 → 4. On each turn the mover picks uniformly
//! among every legal (piece, orientation, anchor) with the pieces still in
//! hand. A player without a legal move passes for the rest of the game; the
//! game ends once all four have passed.

use std::cell::RefCell;
use std::rc::Rc;

use blokus_core::{
    Board, Coord, EngineConfig, Piece, PieceKind, PieceSet, Placement, PlacementObserver, Player,
    PLAYER_COUNT,
};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, trace};

/// Counts placements per player as the board reports them.
#[derive(Clone, Default)]
struct PlacementTally {
    counts: Rc<RefCell<[u32; PLAYER_COUNT]>>,
}

impl PlacementObserver for PlacementTally {
    fn board_initialized(&mut self, _size: usize) {
        *self.counts.borrow_mut() = [0; PLAYER_COUNT];
    }

    fn piece_placed(&mut self, placement: &Placement) {
        self.counts.borrow_mut()[placement.player.index()] += 1;
    }
}

/// Outcome of one finished game.
#[derive(Debug)]
pub struct GameRecord {
    pub board: Board,
    /// Pieces placed per player
    pub placed: [u32; PLAYER_COUNT],
    /// Pieces still in hand per player
    pub hands: [PieceSet; PLAYER_COUNT],
    /// Turns on which a piece was placed
    pub placements: u32,
    /// Calls to `valid_placements` made while choosing moves
    pub enumerations: u64,
}

impl GameRecord {
    /// Squares left in hand per player (lower is better).
    pub fn remaining_squares(&self) -> [usize; PLAYER_COUNT] {
        let mut squares = [0; PLAYER_COUNT];
        for (slot, hand) in squares.iter_mut().zip(&self.hands) {
            *slot = hand.remaining_cells();
        }
        squares
    }

    /// Players with the fewest squares left.
    pub fn winners(&self) -> Vec<Player> {
        let squares = self.remaining_squares();
        let best = squares.iter().copied().min().unwrap_or(0);
        Player::all().filter(|p| squares[p.index()] == best).collect()
    }
}

/// One candidate move.
struct Move {
    kind: PieceKind,
    orientation: Piece,
    anchor: Coord,
}

/// Every legal move for `player`, counting enumerator calls.
fn legal_moves(
    board: &Board,
    hand: &PieceSet,
    player: Player,
    enumerations: &mut u64,
) -> Vec<Move> {
    let mut moves = Vec::new();
    for kind in hand.remaining() {
        for orientation in kind.piece().orientations() {
            *enumerations += 1;
            for anchor in board.valid_placements(&orientation, player) {
                moves.push(Move {
                    kind,
                    orientation: orientation.clone(),
                    anchor,
                });
            }
        }
    }
    moves
}

/// Play one game to completion.
pub fn play_game<R: Rng + ?Sized>(
    config: &EngineConfig,
    rng: &mut R,
) -> anyhow::Result<GameRecord> {
    let mut board = Board::with_config(config)?;
    let tally = PlacementTally::default();
    board.add_observer(Box::new(tally.clone()));

    let mut hands: [PieceSet; PLAYER_COUNT] = Default::default();
    let mut passed = [false; PLAYER_COUNT];
    let mut placements = 0;
    let mut enumerations = 0;
    let mut player = Player::One;

    while passed.iter().any(|p| !p) {
        let idx = player.index();
        if !passed[idx] {
            let hand = &hands[idx];
            if !board.has_valid_moves(player, &hand.remaining_pieces()) {
                debug!(%player, remaining = hand.remaining_cells(), "player passes");
                passed[idx] = true;
            } else {
                let moves = legal_moves(&board, hand, player, &mut enumerations);
                if let Some(choice) = moves.choose(rng) {
                    board.try_place_piece(&choice.orientation, choice.anchor, player)?;
                    hands[idx].mark_placed(choice.kind);
                    placements += 1;
                    trace!(%player, kind = ?choice.kind, anchor = %choice.anchor, "placed");
                }
            }
        }
        player = player.next();
    }

    let placed = *tally.counts.borrow();
    Ok(GameRecord {
        board,
        placed,
        hands,
        placements,
        enumerations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_game_terminates_with_consistent_totals() {
        let mut rng = StdRng::seed_from_u64(11);
        let record = play_game(&EngineConfig::with_board_size(10), &mut rng).unwrap();

        let total: u32 = record.placed.iter().sum();
        assert_eq!(total, record.placements);
        assert!(record.placements >= 4);
        assert!(record.enumerations > 0);

        let full: usize = PieceKind::ALL.iter().map(|k| k.cells()).sum();
        let remaining = record.remaining_squares();
        for player in Player::all() {
            let owned = record.board.grid().count(player);
            assert_eq!(owned + remaining[player.index()], full);
            let in_hand = record.hands[player.index()].remaining().count() as u32;
            assert_eq!(in_hand + record.placed[player.index()], 21);
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let config = EngineConfig::with_board_size(9);
        let a = play_game(&config, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = play_game(&config, &mut StdRng::seed_from_u64(3)).unwrap();

        assert_eq!(a.board.board_state(), b.board.board_state());
        assert_eq!(a.placed, b.placed);
        assert_eq!(a.enumerations, b.enumerations);
    }

    #[test]
    fn test_final_position_has_no_moves() {
        let mut rng = StdRng::seed_from_u64(5);
        let record = play_game(&EngineConfig::with_board_size(8), &mut rng).unwrap();

        for player in Player::all() {
            let hand = record.hands[player.index()].remaining_pieces();
            assert!(!record.board.has_valid_moves(player, &hand));
        }
        assert!(!record.winners().is_empty());
    }

    #[test]
    fn test_winners_lowest_remaining() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut record = play_game(&EngineConfig::with_board_size(6), &mut rng).unwrap();
        record.hands = Default::default();
        record.hands[1].mark_placed(PieceKind::X);
        record.hands[2].mark_placed(PieceKind::W);
        record.hands[3].mark_placed(PieceKind::I2);

        assert_eq!(record.remaining_squares(), [89, 84, 84, 87]);
        assert_eq!(record.winners(), vec![Player::Two, Player::Three]);
    }

    #[test]
    fn test_invalid_board_size_is_error() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(play_game(&EngineConfig::with_board_size(1), &mut rng).is_err());
    }
}
