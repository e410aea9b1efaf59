//! Decomposition of a curve into congruent wedges.

use nalgebra::Vector2;

use super::params::{Grouping, OriginRule, ReflowParams};
use super::types::{Group, Wedge};
use crate::error::ConfigError;

/// `segments` congruent circle wedges of `radius`, edges at `±180/segments`.
///
/// Errors on odd counts, counts below 4 and non-positive radius. Only the
/// shape is produced here; placement needs a full `ReflowParams`.
pub fn decompose_wedges(segments: usize, radius: f64) -> Result<Vec<Wedge>, ConfigError> {
    let params = ReflowParams::circle(segments, radius, Vector2::zeros())?;
    Ok(decompose(&params))
}

/// Wedges of an already validated configuration, ordered by index.
pub fn decompose(params: &ReflowParams) -> Vec<Wedge> {
    let n = params.segments();
    let sweep = params.sweep_deg();
    let start_deg = match params.origin() {
        OriginRule::Ring => -sweep / 2.0,
        OriginRule::Corners { .. } => 0.0,
    };
    (0..n)
        .map(|index| Wedge {
            index,
            group: group_of(params.grouping(), index, n),
            radius: params.radius(),
            start_deg,
            sweep_deg: sweep,
        })
        .collect()
}

#[inline]
fn group_of(grouping: Grouping, index: usize, n: usize) -> Group {
    match grouping {
        Grouping::Halves if index >= n / 2 => Group::B,
        _ => Group::A,
    }
}
