//! Walk the circle-area proof stage by stage and print the strip dimensions.
//!
//! Usage:
//!   cargo run -p wedgeflow --example circle_strip -- 32
//!
//! Prints, per stage, the phase and the poses of the first and last wedge,
//! then the merged rectangle's length and height next to `πr` and `r`.

use wedgeflow::prelude::*;

fn main() {
    let segments: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(16);
    let params = match ReflowParams::circle(segments, 140.0, Vec2::new(400.0, 240.0)) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("usage: circle_strip [even segment count >= 4]: {e}");
            return;
        }
    };
    let wedges = decompose(&params);
    let mut cursor = StageCursor::new(StagePlan::reference());
    loop {
        let first = resolve_phase(&wedges[0], cursor.phase(), &params);
        let last = resolve_phase(&wedges[wedges.len() - 1], cursor.phase(), &params);
        println!(
            "stage {} ({:>9}): wedge 0 -> {}, wedge {} -> {}",
            cursor.stage(),
            cursor.phase().as_str(),
            first.svg_transform(),
            wedges.len() - 1,
            last.svg_transform()
        );
        if cursor.is_last() {
            break;
        }
        cursor = cursor.next();
    }
    if let Some(m) = params.strip_metrics() {
        println!(
            "length {:.3} (πr = {:.3}), height {:.3} (r = {:.3})",
            m.segment_width * (segments / 2) as f64,
            std::f64::consts::PI * params.radius(),
            m.height,
            params.radius()
        );
    }
}
