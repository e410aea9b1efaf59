//! Stage → phase mapping and the clamped step cursor.
//!
//! Model
//! - A visualization is a fixed number of stages driven by next/previous.
//! - Each stage belongs to exactly one phase; phases never go backwards as the
//!   stage grows (closed-open boundaries at `separated_from` and `merged_from`).
//! - Stage indices clamp to `[0, stage_count - 1]`. Nothing here fails at
//!   lookup time; only constructing a plan can be rejected.

use crate::error::ConfigError;

/// Geometric arrangement family of a stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Original,
    Separated,
    Merged,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Original => "original",
            Phase::Separated => "separated",
            Phase::Merged => "merged",
        }
    }
}

/// Step function `stage ↦ phase`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StagePlan {
    stage_count: usize,
    separated_from: usize,
    merged_from: usize,
}

impl StagePlan {
    /// Stages `[0, separated_from)` are ORIGINAL, `[separated_from, merged_from)`
    /// SEPARATED, the rest MERGED. An empty range drops that phase.
    pub fn new(
        stage_count: usize,
        separated_from: usize,
        merged_from: usize,
    ) -> Result<Self, ConfigError> {
        if stage_count == 0 {
            return Err(ConfigError::stage_plan("need at least one stage"));
        }
        if separated_from > merged_from {
            return Err(ConfigError::stage_plan(format!(
                "separated_from ({separated_from}) must not exceed merged_from ({merged_from})"
            )));
        }
        if merged_from >= stage_count {
            return Err(ConfigError::stage_plan(format!(
                "merged_from ({merged_from}) must be a valid stage below {stage_count}"
            )));
        }
        Ok(Self {
            stage_count,
            separated_from,
            merged_from,
        })
    }

    /// The five-stage sequence of both proofs: show, highlight groups, pull
    /// apart, merge, conclude.
    pub const fn reference() -> Self {
        Self {
            stage_count: 5,
            separated_from: 2,
            merged_from: 3,
        }
    }

    /// The reference plan cut down to `stage_count` stages. The terminal stage
    /// is always MERGED; a zero count is treated as one stage.
    pub fn reference_for(stage_count: usize) -> Self {
        let n = stage_count.max(1);
        let reference = Self::reference();
        let merged_from = reference.merged_from.min(n - 1);
        let separated_from = reference.separated_from.min(merged_from);
        Self {
            stage_count: n,
            separated_from,
            merged_from,
        }
    }

    #[inline]
    pub fn stage_count(&self) -> usize {
        self.stage_count
    }

    #[inline]
    pub fn last_stage(&self) -> usize {
        self.stage_count - 1
    }

    #[inline]
    pub fn clamp(&self, stage: usize) -> usize {
        stage.min(self.last_stage())
    }

    pub fn phase(&self, stage: usize) -> Phase {
        let s = self.clamp(stage);
        if s >= self.merged_from {
            Phase::Merged
        } else if s >= self.separated_from {
            Phase::Separated
        } else {
            Phase::Original
        }
    }
}

impl Default for StagePlan {
    fn default() -> Self {
        Self::reference()
    }
}

/// Phase of `stage` in a reference-shaped plan of `stage_count` stages.
pub fn stage_phase(stage: usize, stage_count: usize) -> Phase {
    StagePlan::reference_for(stage_count).phase(stage)
}

/// Current position in a plan. Moves one stage at a time and never wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageCursor {
    plan: StagePlan,
    stage: usize,
}

impl StageCursor {
    pub fn new(plan: StagePlan) -> Self {
        Self { plan, stage: 0 }
    }

    /// Cursor at `stage`, clamped into the plan.
    pub fn at(plan: StagePlan, stage: usize) -> Self {
        Self {
            plan,
            stage: plan.clamp(stage),
        }
    }

    #[inline]
    pub fn stage(&self) -> usize {
        self.stage
    }
    #[inline]
    pub fn plan(&self) -> StagePlan {
        self.plan
    }
    #[inline]
    pub fn phase(&self) -> Phase {
        self.plan.phase(self.stage)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::at(self.plan, self.stage.saturating_add(1))
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::at(self.plan, self.stage.saturating_sub(1))
    }

    #[must_use]
    pub fn reset(self) -> Self {
        Self::new(self.plan)
    }

    #[inline]
    pub fn is_first(&self) -> bool {
        self.stage == 0
    }
    #[inline]
    pub fn is_last(&self) -> bool {
        self.stage == self.plan.last_stage()
    }

    /// Fraction of the sequence shown so far, counting the current stage.
    pub fn progress(&self) -> f64 {
        (self.stage + 1) as f64 / self.plan.stage_count() as f64
    }
}
