use rand::prelude::*;

use super::*;

/// Uniform placement by rejection sampling. No mine ever lands on the
/// first-reveal row or the first-reveal column; only the rest of the board
/// is sampled.
#[derive(Clone, Debug)]
pub struct RandomPlacer {
    rng: SmallRng,
}

impl RandomPlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MinePlacer for RandomPlacer {
    fn place(&mut self, config: &BoardConfig, first_reveal: GridPos) -> Array2<bool> {
        let (first_row, first_column) = first_reveal;
        let mut mask: Array2<bool> = Array2::default(config.size().to_nd_index());

        // cells left once the excluded row and column are taken out
        let placeable = mult(config.rows - 1, config.columns - 1);
        let target = if config.mines > placeable {
            log::warn!(
                "Only {} cells can take a mine after excluding row {} and column {}, requested {}",
                placeable,
                first_row,
                first_column,
                config.mines
            );
            placeable
        } else {
            config.mines
        };

        let mut placed: CellCount = 0;
        while placed < target {
            let row = self.rng.random_range(0..config.rows);
            let column = self.rng.random_range(0..config.columns);
            if row == first_row || column == first_column {
                continue;
            }

            let cell = &mut mask[(row, column).to_nd_index()];
            if !*cell {
                *cell = true;
                placed += 1;
            }
        }

        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mine_count(mask: &Array2<bool>) -> usize {
        mask.iter().filter(|&&is_mine| is_mine).count()
    }

    #[test]
    fn same_seed_reproduces_the_same_mask() {
        let config = BoardConfig::new(16, 16, 40).unwrap();

        let mask_a = RandomPlacer::new(1234).place(&config, (8, 8));
        let mask_b = RandomPlacer::new(1234).place(&config, (8, 8));

        assert_eq!(mask_a, mask_b);
    }

    #[test]
    fn mask_holds_exactly_the_requested_mines() {
        let config = BoardConfig::new(9, 9, 10).unwrap();

        let mask = RandomPlacer::new(7).place(&config, (4, 4));

        assert_eq!(mine_count(&mask), 10);
    }

    #[test]
    fn first_reveal_row_and_column_stay_clear() {
        let config = BoardConfig::new(8, 8, 12).unwrap();

        for seed in 0..10 {
            let mask = RandomPlacer::new(seed).place(&config, (3, 5));
            for i in 0..8 {
                assert!(!mask[[3, i]]);
                assert!(!mask[[i, 5]]);
            }
        }
    }

    #[test]
    fn impossible_requests_fill_every_cell_they_can() {
        // 2x2 with 2 mines is a legal config, but the exclusion leaves a
        // single placeable cell
        let config = BoardConfig::new(2, 2, 2).unwrap();

        let mask = RandomPlacer::new(0).place(&config, (0, 0));

        assert_eq!(mine_count(&mask), 1);
        assert!(mask[[1, 1]]);
    }
}
