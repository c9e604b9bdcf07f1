//! The game session: swap validation and the cascade state machine.
//!
//! A session owns the grid exclusively. The caller drives the cascade
//! one step at a time - the simulation runs each step to completion and
//! never sleeps; any pacing between steps belongs to the caller, which
//! is where tween-await timing lives in a real game.
//!
//! ## Cascade protocol
//!
//! 1. `attempt_swap` validates and applies a swap. A swap that creates
//!    no run is swapped back and rejected silently - a normal outcome,
//!    not an error.
//! 2. On acceptance the session enters `Resolving`; call `resolve_step`
//!    until it returns `None` (or use `resolve_all`). Each step returns
//!    the collected gems, refill changes, and score delta.
//!
//! Cancellation is cooperative: the token is checked at swap validation
//! and between steps, never mid-step, so the grid is always left in the
//! state the last completed step produced.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::abilities;
use crate::board::{init, matching, refill, CollectedGemInfo, Grid, ResolveStep};
use crate::core::{BoardConfig, BoardRng, Direction, GemKind, Pos};

/// Cooperative cancellation signal, shareable with the driving layer.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create an uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Where the session is in its swap/cascade cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for a swap.
    Idle,
    /// A cascade is in progress; drive it with `resolve_step`.
    Resolving,
}

/// A single match-3 play session at fixed dimensions.
pub struct GameSession {
    config: BoardConfig,
    grid: Grid,
    rng: BoardRng,
    score: u64,
    state: SessionState,
    cancel: CancelToken,
}

impl GameSession {
    /// Create a session with a freshly filled, match-free board.
    #[must_use]
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        let mut grid = Grid::new(config.width, config.height);
        let mut rng = BoardRng::new(seed);
        init::fill(&mut grid, &config, &mut rng);

        Self {
            config,
            grid,
            rng,
            score: 0,
            state: SessionState::Idle,
            cancel: CancelToken::new(),
        }
    }

    /// Create a session over an existing board, e.g. one a host restored
    /// or prepared. Dimensions must agree with the configuration.
    #[must_use]
    pub fn with_grid(config: BoardConfig, grid: Grid, seed: u64) -> Self {
        assert_eq!(grid.width(), config.width, "Grid width mismatch");
        assert_eq!(grid.height(), config.height, "Grid height mismatch");

        Self {
            config,
            grid,
            rng: BoardRng::new(seed),
            score: 0,
            state: SessionState::Idle,
            cancel: CancelToken::new(),
        }
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Running score total.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Current state-machine position.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The session's cancellation token.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Try to swap the gem at `pos` one step in `direction`.
    ///
    /// Rejected (returning `false`, with the grid unchanged) when the
    /// session is mid-cascade or cancelled, when either position is out
    /// of bounds, or when the swap creates no run at either position.
    /// On acceptance the session enters [`SessionState::Resolving`].
    pub fn attempt_swap(&mut self, pos: Pos, direction: Direction) -> bool {
        if self.cancel.is_cancelled() || self.state != SessionState::Idle {
            return false;
        }

        let dest = direction.apply(pos);
        if !self.grid.is_valid_pos(pos) || !self.grid.is_valid_pos(dest) {
            return false;
        }

        self.grid.swap(pos, dest);

        // Checked once, pre-cascade; abilities never re-validate.
        let is_match = matching::matches_at_gameplay(&self.grid, pos)
            || matching::matches_at_gameplay(&self.grid, dest);

        if !is_match {
            self.grid.swap(pos, dest);
            return false;
        }

        self.state = SessionState::Resolving;
        true
    }

    /// Run one cascade step.
    ///
    /// Returns `None` once the board is stable (or the session is idle
    /// or cancelled), transitioning back to [`SessionState::Idle`]. A
    /// refill can create new runs, so callers loop until `None`.
    pub fn resolve_step(&mut self) -> Option<ResolveStep> {
        if self.state != SessionState::Resolving || self.cancel.is_cancelled() {
            self.state = SessionState::Idle;
            return None;
        }

        let matched = matching::matches(&self.grid);
        if matched.is_empty() {
            self.state = SessionState::Idle;
            return None;
        }

        // Sorted order keeps collection (and promotion grouping)
        // deterministic for a given seed.
        let mut positions: Vec<Pos> = matched.into_iter().collect();
        positions.sort_unstable();

        let mut collected = Vec::with_capacity(positions.len());
        for pos in positions {
            if let Some(gem) = self.grid.get(pos) {
                collected.push(CollectedGemInfo::new(pos, gem));
                self.grid.set(pos, None);
            }
        }

        // One ability invocation per distinct special kind in the
        // matched set; each ability handles all of its gems in one pass.
        let mut kinds_run: Vec<GemKind> = Vec::new();
        let mut extra = Vec::new();
        for info in &collected {
            if kinds_run.contains(&info.gem.kind) {
                continue;
            }
            kinds_run.push(info.gem.kind);

            if let Some(ability) = abilities::ability_for(info.gem.kind) {
                extra.extend(ability.execute(&collected, &mut self.grid));
            }
        }
        collected.extend(extra);

        let score_delta: u64 = collected
            .iter()
            .map(|info| u64::from(info.gem.score_value))
            .sum();
        self.score += score_delta;

        let changes = refill::refill(&mut self.grid, &self.config, &mut self.rng, &collected);

        Some(ResolveStep {
            collected,
            changes,
            score_delta,
        })
    }

    /// Drive the cascade to quiescence, returning every step.
    pub fn resolve_all(&mut self) -> Vec<ResolveStep> {
        let mut steps = Vec::new();
        while let Some(step) = self.resolve_step() {
            steps.push(step);
        }
        steps
    }
}
