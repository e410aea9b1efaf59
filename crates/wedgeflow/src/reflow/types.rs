//! Wedge descriptors, outlines and poses.
//!
//! Frame convention: y points down (screen/SVG frame), angles in degrees,
//! positive rotation turns +x towards +y. A wedge is drawn in its local frame
//! with the apex at the origin; a `Pose` places that local frame.

use nalgebra::{Rotation2, Vector2};

/// Which half of a decomposition a wedge belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    /// First half (`index < n/2`). Curve up, apex down in the merged strip.
    A,
    /// Second half. Curve down, apex up, interlocking between the A wedges.
    B,
}

/// One congruent slice of a decomposed curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    pub index: usize,
    pub group: Group,
    pub radius: f64,
    /// Local angle of the first straight edge.
    pub start_deg: f64,
    /// Angle subtended at the apex.
    pub sweep_deg: f64,
}

impl Wedge {
    #[inline]
    pub fn half_angle_deg(&self) -> f64 {
        self.sweep_deg / 2.0
    }

    #[inline]
    pub fn end_deg(&self) -> f64 {
        self.start_deg + self.sweep_deg
    }

    /// Length of the closing arc.
    #[inline]
    pub fn arc_length(&self) -> f64 {
        self.radius * self.sweep_deg.to_radians()
    }

    pub fn boundary(&self) -> WedgeBoundary {
        WedgeBoundary {
            radius: self.radius,
            start_deg: self.start_deg,
            sweep_deg: self.sweep_deg,
            start: polar(self.radius, self.start_deg),
            end: polar(self.radius, self.end_deg()),
        }
    }
}

/// Closed outline: apex at the local origin, two straight edges, minor arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WedgeBoundary {
    pub radius: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
    /// Endpoint of the first edge (start of the arc).
    pub start: Vector2<f64>,
    /// Endpoint of the second edge (end of the arc).
    pub end: Vector2<f64>,
}

impl WedgeBoundary {
    #[inline]
    pub fn apex(&self) -> Vector2<f64> {
        Vector2::zeros()
    }

    /// Apex followed by `arc_steps + 1` points along the arc (both endpoints included).
    pub fn sample(&self, arc_steps: usize) -> Vec<Vector2<f64>> {
        let steps = arc_steps.max(1);
        let mut pts = Vec::with_capacity(steps + 2);
        pts.push(self.apex());
        pts.push(self.start);
        for k in 1..steps {
            let t = k as f64 / steps as f64;
            pts.push(polar(self.radius, self.start_deg + t * self.sweep_deg));
        }
        pts.push(self.end);
        pts
    }

    /// SVG path data in the local frame. The sweep flag is 1 because angles
    /// grow clockwise on screen; the large-arc flag is 0 since sweeps stay below 180°.
    pub fn svg_path(&self) -> String {
        let r = self.radius;
        format!(
            "M 0 0 L {:.3} {:.3} A {r:.3} {r:.3} 0 0 1 {:.3} {:.3} Z",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}

/// Target placement of a wedge's local frame in the shared frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub translation: Vector2<f64>,
    pub rotation_deg: f64,
}

impl Pose {
    #[inline]
    pub fn new(translation: Vector2<f64>, rotation_deg: f64) -> Self {
        Self {
            translation,
            rotation_deg,
        }
    }

    /// `p ↦ R(rotation) p + translation`.
    #[inline]
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        Rotation2::new(self.rotation_deg.to_radians()) * p + self.translation
    }

    /// CSS/SVG transform string, e.g. for a `<g transform=...>`.
    pub fn svg_transform(&self) -> String {
        format!(
            "translate({:.3} {:.3}) rotate({:.3})",
            self.translation.x, self.translation.y, self.rotation_deg
        )
    }
}

#[inline]
pub(crate) fn polar(r: f64, deg: f64) -> Vector2<f64> {
    let th = deg.to_radians();
    Vector2::new(r * th.cos(), r * th.sin())
}
