//! Initial board fill.
//!
//! Fills an empty grid with non-matching regular gems. Cells are visited
//! row-major (x outer, y inner), which is why [`matches_at_init`] only
//! needs the backward/downward formations: everything ahead of the
//! cursor is still empty.
//!
//! The redraw loop is bounded effort, not a guarantee: once the retry
//! budget runs out the draw is placed as-is, accepting a possible run
//! rather than looping forever.

use crate::core::{BoardConfig, BoardRng, Gem};

use super::grid::Grid;
use super::matching::matches_at_init;

/// Fill every cell of `grid` with a freshly drawn regular gem.
pub fn fill(grid: &mut Grid, config: &BoardConfig, rng: &mut BoardRng) {
    for pos in grid.positions().collect::<Vec<_>>() {
        let mut color = *rng
            .choose(&config.palette)
            .expect("palette is validated non-empty");

        let mut iterations = 0;
        while matches_at_init(grid, pos, color) && iterations < config.spawn_retry_budget {
            color = *rng
                .choose(&config.palette)
                .expect("palette is validated non-empty");
            iterations += 1;
        }

        grid.set(pos, Some(Gem::regular(color, config.regular_score)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::matching;
    use crate::core::GemColor;

    #[test]
    fn test_fill_occupies_every_cell() {
        let config = BoardConfig::default();
        let mut grid = Grid::new(config.width, config.height);
        let mut rng = BoardRng::new(42);

        fill(&mut grid, &config, &mut rng);
        assert!(grid.is_full());
    }

    #[test]
    fn test_fill_produces_no_matches() {
        // Enough colors to always dodge a run within budget.
        let config = BoardConfig::default();

        for seed in 0..20 {
            let mut grid = Grid::new(config.width, config.height);
            let mut rng = BoardRng::new(seed);
            fill(&mut grid, &config, &mut rng);

            assert!(
                matching::matches(&grid).is_empty(),
                "seed {seed} produced an initial match"
            );
        }
    }

    #[test]
    fn test_fill_is_deterministic() {
        let config = BoardConfig::default();

        let mut grid1 = Grid::new(config.width, config.height);
        let mut grid2 = Grid::new(config.width, config.height);
        fill(&mut grid1, &config, &mut BoardRng::new(7));
        fill(&mut grid2, &config, &mut BoardRng::new(7));

        assert_eq!(grid1, grid2);
    }

    #[test]
    fn test_single_color_palette_exhausts_budget() {
        // One color cannot avoid runs; the budget policy places gems
        // anyway instead of spinning.
        let config = BoardConfig::new(5, 5).with_palette([GemColor::Red]);
        let mut grid = Grid::new(config.width, config.height);
        let mut rng = BoardRng::new(42);

        fill(&mut grid, &config, &mut rng);
        assert!(grid.is_full());
        assert!(!matching::matches(&grid).is_empty());
    }
}
