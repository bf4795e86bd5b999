use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod tile;
mod types;

/// Board shape and mine count. `new` keeps room for the protected first
/// reveal plus at least one more safe tile.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub columns: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(rows: Coord, columns: Coord, mines: CellCount) -> Self {
        Self {
            rows,
            columns,
            mines,
        }
    }

    pub fn new(rows: Coord, columns: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(GameError::InvalidDimensions);
        }
        let total = mult(rows, columns);
        if total < 2 || mines > total - 2 {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(rows, columns, mines))
    }

    /// Board dimensions as `(rows, columns)`.
    pub const fn size(&self) -> GridPos {
        (self.rows, self.columns)
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    pub const fn safe_tiles(&self) -> CellCount {
        self.total_tiles() - self.mines
    }

    pub fn validate_pos(&self, pos: GridPos) -> Result<GridPos> {
        if pos.0 < self.rows && pos.1 < self.columns {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds)
        }
    }
}

/// The classic fixed board: 16x16 with 40 mines.
impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(16, 16, 40)
    }
}

/// Outcome of a `reveal` call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have changed the board.
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Outcome of a `set_flag` call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    /// Whether this outcome could have changed the board.
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_boards() {
        assert_eq!(BoardConfig::new(0, 5, 3), Err(GameError::InvalidDimensions));
        assert_eq!(BoardConfig::new(5, 0, 3), Err(GameError::InvalidDimensions));
    }

    #[test]
    fn config_keeps_two_tiles_mine_free() {
        assert_eq!(BoardConfig::new(5, 5, 24), Err(GameError::TooManyMines));
        assert_eq!(BoardConfig::new(1, 1, 0), Err(GameError::TooManyMines));
        assert!(BoardConfig::new(5, 5, 23).is_ok());
        assert!(BoardConfig::new(5, 5, 0).is_ok());
    }

    #[test]
    fn default_config_is_the_classic_board() {
        let config = BoardConfig::default();

        assert_eq!(config.size(), (16, 16));
        assert_eq!(config.mines, 40);
        assert_eq!(config.total_tiles(), 256);
        assert_eq!(config.safe_tiles(), 216);
    }

    #[test]
    fn positions_are_validated_against_the_shape() {
        let config = BoardConfig::new(4, 6, 5).unwrap();

        assert_eq!(config.validate_pos((3, 5)), Ok((3, 5)));
        assert_eq!(config.validate_pos((4, 0)), Err(GameError::OutOfBounds));
        assert_eq!(config.validate_pos((0, 6)), Err(GameError::OutOfBounds));
    }
}
