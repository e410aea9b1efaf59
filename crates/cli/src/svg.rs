//! Static SVG snapshot of one stage.
//!
//! Each wedge is drawn once in its local frame and placed with its pose as a
//! group transform, the same way a browser renderer would animate it.

use std::fmt::Write as _;

use wedgeflow::api::{decompose, resolve_phase, Group, Placement, ReflowParams, StagePlan};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn fill(group: Group, segments: usize) -> &'static str {
    match (group, segments) {
        (_, 3) => "#dbeafe",
        (Group::A, _) => "#3b82f6",
        (Group::B, _) => "#ef4444",
    }
}

pub fn render_stage(params: &ReflowParams, plan: &StagePlan, stage: usize) -> String {
    let phase = plan.phase(stage);
    let stroke = if params.segments() > 32 { "0.5" } else { "1" };
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    );
    let _ = writeln!(
        out,
        r#"  <!-- stage {} ({}) -->"#,
        plan.clamp(stage),
        phase.as_str()
    );
    for w in decompose(params) {
        let pose = resolve_phase(&w, phase, params);
        let _ = writeln!(
            out,
            r#"  <g transform="{}"><path d="{}" fill="{}" stroke="white" stroke-width="{stroke}"/></g>"#,
            pose.svg_transform(),
            w.boundary().svg_path(),
            fill(w.group, params.segments()),
        );
    }
    out.push_str("</svg>\n");
    out
}

/// Markers as dots, offset so the path starts at `origin`.
pub fn render_markers(placement: &Placement, origin: (f64, f64)) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    );
    for p in &placement.positions {
        let _ = writeln!(
            out,
            r##"  <circle cx="{:.3}" cy="{:.3}" r="4" fill="#16a34a"/>"##,
            origin.0 + p.x,
            origin.1 + p.y
        );
    }
    out.push_str("</svg>\n");
    out
}
