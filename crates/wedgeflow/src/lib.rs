//! Geometry core for step-by-step area and perimeter proofs.
//!
//! Two independent models, both pure functions of immutable inputs:
//! - `reflow`: cut a circle (or three triangle corner arcs) into congruent
//!   wedges and compute each wedge's target pose per stage.
//! - `interval`: count and place markers along an open or closed path.
//!
//! `stage` maps the discrete step index a user advances through onto the
//! phase the reflow resolver understands. Interpolation between poses is the
//! renderer's business.

pub mod api;
pub mod cfg;
pub mod error;
pub mod interval;
pub mod reflow;
pub mod stage;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::ConfigError;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::ConfigError;
    pub use crate::interval::{place_intervals, Interval, Placement, PlacementMode};
    pub use crate::reflow::{
        decompose, decompose_wedges, resolve_phase, resolve_pose, resolve_stage, Group,
        MergedRule, Pose, ReflowParams, StripMetrics, Wedge,
    };
    pub use crate::stage::{stage_phase, Phase, StageCursor, StagePlan};
    pub use nalgebra::Vector2 as Vec2;
}
