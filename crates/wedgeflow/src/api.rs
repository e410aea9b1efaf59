//! Caller-facing surface in one place.
//!
//! The four entry points a UI layer needs, plus the value types they take and
//! return. Everything here is a re-export; see the owning modules for details.

// Wedge reflow
pub use crate::reflow::{
    decompose, decompose_wedges, resolve_phase, resolve_pose, resolve_stage, Group, Grouping,
    MergedRule, OriginRule, Pose, ReflowParams, StripMetrics, Wedge, WedgeBoundary,
};
// Stages
pub use crate::stage::{stage_phase, Phase, StageCursor, StagePlan};
// Interval placement
pub use crate::interval::{place_intervals, Interval, Placement, PlacementMode};
// Options and errors
pub use crate::cfg::{LENGTH_RANGE, MAX_GAPS, SEGMENT_CHOICES, SPACING_RANGE};
pub use crate::error::ConfigError;
