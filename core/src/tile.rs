use serde::{Deserialize, Serialize};

/// Full per-tile state as the engine tracks it. Callers always get copies;
/// the grid itself stays behind the engine API.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub is_mine: bool,
    pub is_flag: bool,
    pub is_revealed: bool,
    pub is_exploded_mine: bool,
    pub adjacent_mines: u8,
}

/// What a renderer should draw for one tile, with the game state already
/// folded in. Bitmaps, colors and fonts stay with the caller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TileView {
    Hidden,
    Flagged,
    Open(u8),
    Mine,
    ExplodedMine,
    Misflagged,
}
