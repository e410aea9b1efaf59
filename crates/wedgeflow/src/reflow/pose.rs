//! Target poses per phase.
//!
//! One resolver serves every configuration: the ORIGINAL pose comes from the
//! `OriginRule`, the MERGED pose from the `MergedRule`, and SEPARATED reuses
//! the merged rotation at a position pulled apart by `separation`.

use nalgebra::Vector2;

use super::decompose::decompose;
use super::params::{MergedRule, OriginRule, ReflowParams};
use super::types::{Group, Pose, Wedge};
use crate::stage::{Phase, StagePlan};

/// Pose of `wedge` at `stage` under the reference five-stage plan.
/// Out-of-range stages clamp to the first/last stage.
pub fn resolve_pose(wedge: &Wedge, stage: usize, params: &ReflowParams) -> Pose {
    resolve_phase(wedge, StagePlan::reference().phase(stage), params)
}

/// Poses of all wedges of `params` at `stage` of `plan`, ordered by index.
pub fn resolve_stage(params: &ReflowParams, plan: &StagePlan, stage: usize) -> Vec<Pose> {
    let phase = plan.phase(stage);
    decompose(params)
        .iter()
        .map(|w| resolve_phase(w, phase, params))
        .collect()
}

pub fn resolve_phase(wedge: &Wedge, phase: Phase, params: &ReflowParams) -> Pose {
    debug_assert!(
        wedge.index < params.segments(),
        "wedge index outside configuration"
    );
    match phase {
        Phase::Original => original_pose(wedge, params),
        Phase::Separated => separated_pose(wedge, params),
        Phase::Merged => merged_pose(wedge, params),
    }
}

fn original_pose(wedge: &Wedge, params: &ReflowParams) -> Pose {
    match params.origin() {
        OriginRule::Ring => {
            // Wedge 0 centred on the left (180°), then proceeding with growing angle.
            let sweep = params.sweep_deg();
            let rot = 180.0 + sweep / 2.0 + wedge.index as f64 * sweep;
            Pose::new(params.center(), rot)
        }
        OriginRule::Corners {
            vertices,
            rotations_deg,
        } => {
            let k = wedge.index % vertices.len();
            Pose::new(vertices[k], rotations_deg[k])
        }
    }
}

fn merged_pose(wedge: &Wedge, params: &ReflowParams) -> Pose {
    match params.merged() {
        MergedRule::Strip { offset } => {
            let (x, rot) = strip_column(wedge, params);
            let y = match wedge.group {
                Group::A => params.center().y + offset,
                Group::B => params.center().y - offset,
            };
            Pose::new(Vector2::new(x, y), rot)
        }
        MergedRule::Fan { target, start_deg } => {
            Pose::new(target, fan_rotation(wedge, start_deg, params))
        }
    }
}

fn separated_pose(wedge: &Wedge, params: &ReflowParams) -> Pose {
    let sep = params.separation();
    match params.merged() {
        MergedRule::Strip { .. } => {
            // Each half moves towards the side its arcs face: A up, B down.
            let (x, rot) = strip_column(wedge, params);
            let y = match wedge.group {
                Group::A => params.center().y - sep,
                Group::B => params.center().y + sep,
            };
            Pose::new(Vector2::new(x, y), rot)
        }
        MergedRule::Fan { target, start_deg } => {
            let mid = (params.segments() as f64 - 1.0) / 2.0;
            let dx = (wedge.index as f64 - mid) * sep;
            Pose::new(
                target + Vector2::new(dx, 0.0),
                fan_rotation(wedge, start_deg, params),
            )
        }
    }
}

/// Apex x and rotation of a wedge in the merged strip.
fn strip_column(wedge: &Wedge, params: &ReflowParams) -> (f64, f64) {
    let half = params.group_len();
    let pos = (wedge.index % half) as f64;
    let m = params.strip_layout();
    let x = m.origin_x + pos * m.segment_width;
    match wedge.group {
        Group::A => (x, -90.0),
        Group::B => (x + m.segment_width / 2.0, 90.0),
    }
}

#[inline]
fn fan_rotation(wedge: &Wedge, start_deg: f64, params: &ReflowParams) -> f64 {
    start_deg + wedge.index as f64 * params.sweep_deg()
}
