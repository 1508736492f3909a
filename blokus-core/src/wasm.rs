//! WASM bindings for blokus-core
//!
//! Provides a JavaScript-friendly API for the rule engine. Player ids cross
//! the boundary as plain integers; anything outside 1..=4 is rejected with
//! `false` or an empty result. Shapes cross as flat `[dx0, dy0, dx1, dy1, ...]`
//! arrays.

use wasm_bindgen::prelude::*;

use crate::{Board, ConfigError, Coord, EngineConfig, Piece, PieceKind, Player, StateBlob};

/// WASM-friendly wrapper around Board
#[wasm_bindgen]
pub struct WasmBoard {
    inner: Board,
}

fn piece_from_flat(shape: &[i32]) -> Option<Piece> {
    if shape.is_empty() || shape.len() % 2 != 0 {
        return None;
    }
    Some(Piece::new(
        shape.chunks_exact(2).map(|pair| Coord::new(pair[0], pair[1])),
    ))
}

fn board_of_size(size: usize) -> Result<Board, ConfigError> {
    Board::with_config(&EngineConfig::with_board_size(size))
}

fn flatten(coords: &[Coord]) -> Vec<i32> {
    coords.iter().flat_map(|c| [c.x, c.y]).collect()
}

#[wasm_bindgen]
impl WasmBoard {
    /// Create a new empty board. Throws if the size is outside the
    /// supported range.
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize) -> Result<WasmBoard, JsValue> {
        let inner = board_of_size(size).map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(WasmBoard { inner })
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// Reset to an empty board
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Check a placement without applying it
    #[wasm_bindgen(js_name = isValidPlacement)]
    pub fn is_valid_placement(&self, shape: &[i32], x: i32, y: i32, player: u8) -> bool {
        match (piece_from_flat(shape), Player::from_id(player)) {
            (Some(piece), Some(player)) => {
                self.inner.is_valid_placement(&piece, Coord::new(x, y), player)
            }
            _ => false,
        }
    }

    /// Apply a placement. Returns true if successful.
    #[wasm_bindgen(js_name = placePiece)]
    pub fn place_piece(&mut self, shape: &[i32], x: i32, y: i32, player: u8) -> bool {
        match (piece_from_flat(shape), Player::from_id(player)) {
            (Some(piece), Some(player)) => {
                self.inner.place_piece(&piece, Coord::new(x, y), player)
            }
            _ => false,
        }
    }

    /// Legal anchors as a flat [x, y, x, y, ...] array
    #[wasm_bindgen(js_name = validPlacements)]
    pub fn valid_placements(&self, shape: &[i32], player: u8) -> Vec<i32> {
        match (piece_from_flat(shape), Player::from_id(player)) {
            (Some(piece), Some(player)) => flatten(&self.inner.valid_placements(&piece, player)),
            _ => vec![],
        }
    }

    /// Check if the player can place any standard piece still in hand.
    /// `remaining` lists indices into the 21-piece catalogue.
    #[wasm_bindgen(js_name = hasValidMoves)]
    pub fn has_valid_moves(&self, player: u8, remaining: &[u8]) -> bool {
        let Some(player) = Player::from_id(player) else {
            return false;
        };
        let pieces: Vec<Piece> = remaining
            .iter()
            .filter_map(|&i| PieceKind::ALL.get(i as usize))
            .map(|kind| kind.piece())
            .collect();
        self.inner.has_valid_moves(player, &pieces)
    }

    /// Owner of a square: 0 (empty), 1-4 (player), -1 (off the board)
    #[wasm_bindgen(js_name = positionOwner)]
    pub fn position_owner(&self, x: i32, y: i32) -> i8 {
        self.inner.position_owner(Coord::new(x, y))
    }

    /// Starting corner as [x, y]
    #[wasm_bindgen(js_name = startingCorner)]
    pub fn starting_corner(&self, player: u8) -> Vec<i32> {
        match Player::from_id(player) {
            Some(player) => flatten(&[self.inner.starting_corner(player)]),
            None => vec![],
        }
    }

    /// Row-major copy of the grid
    #[wasm_bindgen(js_name = boardState)]
    pub fn board_state(&self) -> Vec<u8> {
        self.inner.grid().cells().to_vec()
    }

    /// Snapshot as a plain JS object
    pub fn serialize(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.serialize_state()).map_err(JsValue::from)
    }

    /// Restore from a snapshot object. Returns false and keeps the current
    /// state if the object is malformed or sized for another board.
    pub fn deserialize(&mut self, blob: JsValue) -> bool {
        match serde_wasm_bindgen::from_value::<StateBlob>(blob) {
            Ok(blob) => self.inner.deserialize_state(&blob),
            Err(_) => false,
        }
    }

    /// Shapes of the 21 standard pieces, each as a flat offset array
    #[wasm_bindgen(js_name = standardShape)]
    pub fn standard_shape(index: u8) -> Vec<i32> {
        match PieceKind::ALL.get(index as usize) {
            Some(kind) => flatten(kind.piece().shape()),
            None => vec![],
        }
    }
}

impl Default for WasmBoard {
    fn default() -> Self {
        WasmBoard {
            inner: Board::standard(),
        }
    }
}
