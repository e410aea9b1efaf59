//! Tolerances and recognized caller options (internal defaults).
//!
//! Policy
//! - Tolerances are fixed constants. Callers never tune them per call.
//! - Option sets describe what the selectors offer. The core only enforces
//!   positivity/parity; range checks belong to the input layer (see `cli`).

use std::ops::RangeInclusive;

/// Upper bound on whole intervals per placement. The sliders top out at
/// 200 / 5 = 40; anything past this cap is a caller bug, not a diagram.
pub const MAX_GAPS: usize = 4096;
/// Relative tolerance for width/arc-length identities in tests and checks.
pub const WIDTH_REL_EPS: f64 = 1e-6;

/// Minimum wedge count of a circle decomposition.
pub const MIN_CIRCLE_SEGMENTS: usize = 4;
/// The triangle-arc proof always uses three corner wedges.
pub const TRIANGLE_SEGMENTS: usize = 3;

/// Segment counts offered by the circle-area selector.
pub const SEGMENT_CHOICES: [usize; 4] = [8, 16, 32, 64];
/// Spacing slider range of the planting problem.
pub const SPACING_RANGE: RangeInclusive<f64> = 5.0..=50.0;
/// Total-length slider range of the planting problem.
pub const LENGTH_RANGE: RangeInclusive<f64> = 10.0..=200.0;

/// Default distance the circle halves are pulled apart before merging.
pub const CIRCLE_SEPARATION: f64 = 60.0;
/// Extra gap added to the radius when the three arcs are laid out side by side.
pub const TRIANGLE_SEPARATION_PAD: f64 = 20.0;
