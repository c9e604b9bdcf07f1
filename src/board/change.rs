//! Data records a resolve step hands to the caller.
//!
//! These are copies of position/gem data, never references into the
//! grid. The simulation has no timing concept; `creation_order` and
//! `destroy_delay_ms` are relative hints the presentation layer is free
//! to interpret.

use serde::{Deserialize, Serialize};

use crate::core::{Gem, Pos};

/// A gem collected during a resolve step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectedGemInfo {
    /// Where the gem sat when it was collected.
    pub pos: Pos,

    /// The collected gem.
    pub gem: Gem,

    /// Presentation hint: how long to hold before showing this gem's
    /// destruction, relative to the step's other collections. The
    /// simulation never waits on it.
    pub destroy_delay_ms: Option<u32>,
}

impl CollectedGemInfo {
    /// A collection with no destroy delay.
    #[must_use]
    pub const fn new(pos: Pos, gem: Gem) -> Self {
        Self {
            pos,
            gem,
            destroy_delay_ms: None,
        }
    }

    /// A collection whose destruction is staggered by `delay_ms`.
    #[must_use]
    pub const fn delayed(pos: Pos, gem: Gem, delay_ms: u32) -> Self {
        Self {
            pos,
            gem,
            destroy_delay_ms: Some(delay_ms),
        }
    }
}

/// One gem's movement or creation during a refill.
///
/// Cells that did not move get no record: the presentation contract
/// treats "absent from changes" as "already in place".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangeInfo {
    /// The gem after the change.
    pub gem: Gem,

    /// True for spawned or promoted gems, false for fallen ones.
    pub was_created: bool,

    /// Per-column sequence number; lower values settle first.
    pub creation_order: u32,

    /// Where the gem came from. Spawned gems fall from `(x, height)`;
    /// promoted gems materialize in place (`from == to`).
    pub from: Pos,

    /// Where the gem ended up.
    pub to: Pos,
}

/// The externally-visible result of one cascade step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolveStep {
    /// Every gem collected this step, including ability-destroyed ones.
    pub collected: Vec<CollectedGemInfo>,

    /// Every gem that moved or appeared during the refill.
    pub changes: Vec<ChangeInfo>,

    /// Score earned this step.
    pub score_delta: u64,
}
