//! Wedge decomposition and reflow.
//!
//! Purpose
//! - Cut a closed curve into congruent wedges and compute, per phase, the
//!   discrete target pose of every wedge. Renderers tween between poses.
//!
//! Configurations
//! - Circle → strip: `n` even wedges around one centre; the two halves
//!   interlock into a near-rectangle of length `πr` and height `r`.
//! - Triangle corner arcs → semicircle: three 60° wedges at the vertices fan
//!   out at one point and tile 180°.
//!
//! Everything is a pure function of (`Wedge`, `Phase`, `ReflowParams`).
//! Code cross-refs: `params::ReflowParams`, `pose::resolve_phase`, `crate::stage`.

mod decompose;
mod params;
mod pose;
mod types;

pub use decompose::{decompose, decompose_wedges};
pub use params::{Grouping, MergedRule, OriginRule, ReflowParams, StripMetrics};
pub use pose::{resolve_phase, resolve_pose, resolve_stage};
pub use types::{Group, Pose, Wedge, WedgeBoundary};

#[cfg(test)]
mod tests;
