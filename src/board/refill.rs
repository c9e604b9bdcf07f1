//! Post-collection refill: promotion, gravity, and new gem spawns.
//!
//! Runs after a resolve step has emptied the matched cells. Columns are
//! independent; within a column the phases share one `creation_order`
//! counter so fallen and spawned gems form a single bottom-up sequence
//! with no gaps or resets.
//!
//! Phase order matters: promoted bombs are placed first so gravity
//! treats them as settled, then remaining gems fall, then empty cells
//! are filled from above the board.

use rustc_hash::FxHashMap;

use crate::core::{BoardConfig, BoardRng, Gem, GemColor, Pos};

use super::change::{ChangeInfo, CollectedGemInfo};
use super::grid::Grid;
use super::matching;

/// Minimum run length that promotes a collected color group to a bomb.
pub const PROMOTION_RUN_LENGTH: usize = 4;

/// Compact the grid and fill vacated cells.
///
/// `collected` is the full collected set for the step; color groups of
/// [`PROMOTION_RUN_LENGTH`] or more promote one of their cleared
/// positions to a bomb. Returns one [`ChangeInfo`] per gem that moved or
/// appeared, sorted by destination for reproducibility (cross-column
/// order carries no meaning).
pub fn refill(
    grid: &mut Grid,
    config: &BoardConfig,
    rng: &mut BoardRng,
    collected: &[CollectedGemInfo],
) -> Vec<ChangeInfo> {
    let mut changes: FxHashMap<Pos, ChangeInfo> = FxHashMap::default();
    let mut column_orders = vec![0u32; grid.width() as usize];

    promote_specials(grid, config, collected, &mut changes);
    move_gems_down(grid, &mut changes, &mut column_orders);
    spawn_new_gems(grid, config, rng, &mut changes, &mut column_orders);

    let mut result: Vec<ChangeInfo> = changes.into_values().collect();
    result.sort_unstable_by_key(|change| (change.to, change.from));
    result
}

/// Convert qualifying collected color groups into bombs, in place.
fn promote_specials(
    grid: &mut Grid,
    config: &BoardConfig,
    collected: &[CollectedGemInfo],
    changes: &mut FxHashMap<Pos, ChangeInfo>,
) {
    let mut by_color: FxHashMap<GemColor, Vec<Pos>> = FxHashMap::default();
    for info in collected {
        by_color.entry(info.gem.color).or_default().push(info.pos);
    }

    let mut colors: Vec<GemColor> = by_color.keys().copied().collect();
    colors.sort_unstable();

    for color in colors {
        let group = &by_color[&color];
        if group.len() < PROMOTION_RUN_LENGTH {
            continue;
        }

        // Prefer the first position in the run's dominant axis: lowest y
        // within a column-aligned group, lowest x within a row.
        let column_aligned = group[0].x == group[1].x;
        let pos = if column_aligned {
            *group.iter().min_by_key(|p| (p.x, p.y)).unwrap()
        } else {
            *group.iter().min_by_key(|p| (p.y, p.x)).unwrap()
        };

        let bomb = Gem::bomb(color, config.bomb_score);
        grid.set(pos, Some(bomb));

        // Materialized, not fallen: from == to marks it as a spawn for
        // the presentation layer.
        changes.insert(
            pos,
            ChangeInfo {
                gem: bomb,
                was_created: true,
                creation_order: 0,
                from: pos,
                to: pos,
            },
        );
    }
}

/// Slide occupied cells down to the lowest empty cell beneath them.
fn move_gems_down(
    grid: &mut Grid,
    changes: &mut FxHashMap<Pos, ChangeInfo>,
    column_orders: &mut [u32],
) {
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let from = Pos::new(x, y);
            let gem = match grid.get(from) {
                Some(gem) => gem,
                None => continue,
            };

            // Promoted bombs already have a change record and stay put.
            if changes.contains_key(&from) {
                continue;
            }

            let mut to = from;
            let mut below = from.offset(0, -1);
            while grid.is_valid_pos(below) && grid.get(below).is_none() {
                to = below;
                below = below.offset(0, -1);
            }

            if to == from {
                continue;
            }

            grid.set(to, Some(gem));
            grid.set(from, None);

            let order = &mut column_orders[x as usize];
            changes.insert(
                to,
                ChangeInfo {
                    gem,
                    was_created: false,
                    creation_order: *order,
                    from,
                    to,
                },
            );
            *order += 1;
        }
    }
}

/// Fill remaining empty cells bottom-to-top with fresh gems.
fn spawn_new_gems(
    grid: &mut Grid,
    config: &BoardConfig,
    rng: &mut BoardRng,
    changes: &mut FxHashMap<Pos, ChangeInfo>,
    column_orders: &mut [u32],
) {
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let pos = Pos::new(x, y);
            if grid.get(pos).is_some() {
                continue;
            }

            let gem = generate_gem(grid, config, rng, pos);

            let order = &mut column_orders[x as usize];
            changes.insert(
                pos,
                ChangeInfo {
                    gem,
                    was_created: true,
                    creation_order: *order,
                    // Spawns fall in from above the visible board.
                    from: Pos::new(x, grid.height()),
                    to: pos,
                },
            );
            *order += 1;
        }
    }
}

/// Place a freshly drawn gem at `pos`, redrawing while it would complete
/// a run and the retry budget lasts. The gem is left in the grid.
fn generate_gem(grid: &mut Grid, config: &BoardConfig, rng: &mut BoardRng, pos: Pos) -> Gem {
    if config.bomb_spawn_chance > 0.0 && rng.gen_bool(config.bomb_spawn_chance) {
        let color = *rng
            .choose(&config.palette)
            .expect("palette is validated non-empty");
        let bomb = Gem::bomb(color, config.bomb_score);
        grid.set(pos, Some(bomb));
        return bomb;
    }

    let mut gem = draw_regular(config, rng);
    grid.set(pos, Some(gem));

    let mut iterations = 0;
    while matching::matches_at_gameplay(grid, pos) && iterations < config.spawn_retry_budget {
        gem = draw_regular(config, rng);
        grid.set(pos, Some(gem));
        iterations += 1;
    }

    gem
}

fn draw_regular(config: &BoardConfig, rng: &mut BoardRng) -> Gem {
    let color = *rng
        .choose(&config.palette)
        .expect("palette is validated non-empty");
    Gem::regular(color, config.regular_score)
}
