use ndarray::Array2;

use crate::*;

pub use random::*;

mod random;

/// Supplies the mine mask for one game. Called exactly once per game, on
/// the first reveal; `first_reveal` is the cell the player clicked. The
/// mask must have exactly `config.size()` cells, the engine panics on any
/// other shape.
pub trait MinePlacer {
    fn place(&mut self, config: &BoardConfig, first_reveal: GridPos) -> Array2<bool>;
}

/// Placer with a hand-picked layout, for tests and replays. Honoring the
/// first-reveal exclusion is up to whoever picked the layout.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedPlacer {
    mines: Vec<GridPos>,
}

impl FixedPlacer {
    pub fn new(mines: Vec<GridPos>) -> Self {
        Self { mines }
    }
}

impl MinePlacer for FixedPlacer {
    fn place(&mut self, config: &BoardConfig, _first_reveal: GridPos) -> Array2<bool> {
        let mut mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        for &pos in &self.mines {
            if config.validate_pos(pos).is_err() {
                log::warn!("Fixed mine at {:?} is outside the board, skipped", pos);
                continue;
            }
            mask[pos.to_nd_index()] = true;
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_layout_is_applied_verbatim() {
        let config = BoardConfig::new(3, 3, 2).unwrap();
        let mut placer = FixedPlacer::new(vec![(0, 2), (2, 2)]);

        let mask = placer.place(&config, (0, 0));

        assert_eq!(mask.iter().filter(|&&is_mine| is_mine).count(), 2);
        assert!(mask[[0, 2]]);
        assert!(mask[[2, 2]]);
    }

    #[test]
    fn out_of_bounds_fixed_mines_are_skipped() {
        let config = BoardConfig::new(2, 2, 2).unwrap();
        let mut placer = FixedPlacer::new(vec![(0, 0), (9, 9)]);

        let mask = placer.place(&config, (1, 1));

        assert_eq!(mask.iter().filter(|&&is_mine| is_mine).count(), 1);
        assert!(mask[[0, 0]]);
    }
}
