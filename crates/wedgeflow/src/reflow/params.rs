//! Immutable reflow configuration.
//!
//! A `ReflowParams` value fixes everything the resolver needs: how many
//! wedges, how they are grouped, where they sit originally, how they merge,
//! and how far apart they are pulled in between. The circle and triangle
//! proofs are two presets of the same value; there is no per-proof code path
//! outside the three rules below.

use nalgebra::Vector2;

use crate::cfg::{
    CIRCLE_SEPARATION, MIN_CIRCLE_SEGMENTS, TRIANGLE_SEGMENTS, TRIANGLE_SEPARATION_PAD,
};
use crate::error::{require_positive, ConfigError};

const CORNER_ROTATIONS_DEG: [f64; 3] = [60.0, 180.0, 300.0];

/// How wedge indices split into groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grouping {
    /// `index < n/2` → A, else B.
    Halves,
    /// All wedges in group A.
    Single,
}

/// Arrangement of the ORIGINAL phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OriginRule {
    /// Apexes at `center`, wedges laid around the full turn starting at the left.
    Ring,
    /// Each wedge at its own vertex with a fixed rotation.
    Corners {
        vertices: [Vector2<f64>; 3],
        rotations_deg: [f64; 3],
    },
}

/// Arrangement of the MERGED phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MergedRule {
    /// Interlocked strip along the horizontal line through `center`; group A
    /// apexes at `center.y + offset`, group B apexes at `center.y - offset`.
    Strip { offset: f64 },
    /// All apexes at `target`, wedge `i` rotated to `start_deg + i·sweep`.
    Fan { target: Vector2<f64>, start_deg: f64 },
}

/// Dimensions of the merged strip (the approximate rectangle).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripMetrics {
    /// Half the circumference, `π·r`: the rectangle's length.
    pub arc_length: f64,
    /// Horizontal pitch of one wedge, `arc_length / (n/2)`.
    pub segment_width: f64,
    /// x of the first A apex.
    pub origin_x: f64,
    /// The rectangle's height, `r`.
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReflowParams {
    segments: usize,
    radius: f64,
    center: Vector2<f64>,
    separation: f64,
    grouping: Grouping,
    origin: OriginRule,
    merged: MergedRule,
}

impl ReflowParams {
    /// Circle of `radius` at `center`, cut into `segments` wedges, reflowed into a strip.
    ///
    /// The merged strip offset defaults to `radius / 2`, so the two apex lines
    /// are one radius apart (the rectangle's height is `r`).
    pub fn circle(
        segments: usize,
        radius: f64,
        center: Vector2<f64>,
    ) -> Result<Self, ConfigError> {
        let p = Self {
            segments,
            radius,
            center,
            separation: CIRCLE_SEPARATION,
            grouping: Grouping::Halves,
            origin: OriginRule::Ring,
            merged: MergedRule::Strip {
                offset: radius / 2.0,
            },
        };
        p.validate()?;
        Ok(p)
    }

    /// Equilateral triangle of side `side` centred on `center` (apex up), with a
    /// 60° arc of radius `side / 2` at each corner, reflowed into a semicircle.
    ///
    /// The fan target defaults to `center + (0, side/3)`.
    pub fn triangle_arcs(side: f64, center: Vector2<f64>) -> Result<Self, ConfigError> {
        require_positive(side, "triangle side", |length| ConfigError::NonPositiveLength {
            length,
        })?;
        let height = 3f64.sqrt() / 2.0 * side;
        let top = Vector2::new(center.x, center.y - 2.0 / 3.0 * height);
        let left = Vector2::new(center.x - side / 2.0, center.y + height / 3.0);
        let right = Vector2::new(center.x + side / 2.0, center.y + height / 3.0);
        let target = Vector2::new(center.x, center.y + side / 3.0);
        let p = Self::corner_arcs([top, right, left], side / 2.0, target)?;
        Ok(Self { center, ..p })
    }

    /// Three corner arcs of `radius` at caller-supplied `vertices`, fanned
    /// into a semicircle at `target`.
    ///
    /// Vertex order is top, bottom-right, bottom-left. The corner rotations
    /// stay at 60°/180°/300°, the ones that point each arc into an upright
    /// equilateral triangle; the vertices themselves may be anywhere. The
    /// centre is the vertex centroid.
    pub fn corner_arcs(
        vertices: [Vector2<f64>; 3],
        radius: f64,
        target: Vector2<f64>,
    ) -> Result<Self, ConfigError> {
        let center = (vertices[0] + vertices[1] + vertices[2]) / 3.0;
        let p = Self {
            segments: TRIANGLE_SEGMENTS,
            radius,
            center,
            separation: radius + TRIANGLE_SEPARATION_PAD,
            grouping: Grouping::Single,
            origin: OriginRule::Corners {
                vertices,
                rotations_deg: CORNER_ROTATIONS_DEG,
            },
            merged: MergedRule::Fan {
                target,
                start_deg: 180.0,
            },
        };
        p.validate()?;
        Ok(p)
    }

    /// Same configuration with a different SEPARATED-phase distance.
    pub fn with_separation(self, separation: f64) -> Result<Self, ConfigError> {
        let p = Self { separation, ..self };
        p.validate()?;
        Ok(p)
    }

    /// Same configuration with a different merged layout.
    pub fn with_merged(self, merged: MergedRule) -> Result<Self, ConfigError> {
        let p = Self { merged, ..self };
        p.validate()?;
        Ok(p)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.center.x.is_finite() && self.center.y.is_finite()) {
            return Err(ConfigError::NonFinite { what: "center" });
        }
        require_positive(self.radius, "radius", |radius| {
            ConfigError::NonPositiveRadius { radius }
        })?;
        require_positive(self.separation, "separation", |separation| {
            ConfigError::NonPositiveSeparation { separation }
        })?;
        match self.grouping {
            Grouping::Halves => {
                if self.segments < MIN_CIRCLE_SEGMENTS {
                    return Err(ConfigError::TooFewSegments {
                        segments: self.segments,
                        min: MIN_CIRCLE_SEGMENTS,
                    });
                }
                if self.segments % 2 != 0 {
                    return Err(ConfigError::OddSegmentCount {
                        segments: self.segments,
                    });
                }
            }
            Grouping::Single => {
                if self.segments == 0 {
                    return Err(ConfigError::TooFewSegments {
                        segments: 0,
                        min: 1,
                    });
                }
            }
        }
        match self.origin {
            OriginRule::Ring => {}
            OriginRule::Corners {
                vertices,
                rotations_deg,
            } => {
                if self.segments != TRIANGLE_SEGMENTS {
                    return Err(ConfigError::incompatible(format!(
                        "corner arrangement needs {TRIANGLE_SEGMENTS} wedges, got {}",
                        self.segments
                    )));
                }
                let finite = vertices.iter().all(|v| v.x.is_finite() && v.y.is_finite())
                    && rotations_deg.iter().all(|r| r.is_finite());
                if !finite {
                    return Err(ConfigError::NonFinite {
                        what: "corner vertices",
                    });
                }
            }
        }
        match (self.grouping, self.merged) {
            (Grouping::Halves, MergedRule::Strip { offset }) => {
                if !offset.is_finite() {
                    return Err(ConfigError::NonFinite {
                        what: "strip offset",
                    });
                }
            }
            (Grouping::Single, MergedRule::Fan { target, start_deg }) => {
                if !(target.x.is_finite() && target.y.is_finite() && start_deg.is_finite()) {
                    return Err(ConfigError::NonFinite { what: "fan target" });
                }
            }
            (Grouping::Halves, MergedRule::Fan { .. }) => {
                return Err(ConfigError::incompatible(
                    "a fan merges a single group; halves need a strip",
                ));
            }
            (Grouping::Single, MergedRule::Strip { .. }) => {
                return Err(ConfigError::incompatible(
                    "a strip interlocks two halves; a single group needs a fan",
                ));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn segments(&self) -> usize {
        self.segments
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        self.center
    }
    #[inline]
    pub fn separation(&self) -> f64 {
        self.separation
    }
    #[inline]
    pub fn grouping(&self) -> Grouping {
        self.grouping
    }
    #[inline]
    pub fn origin(&self) -> OriginRule {
        self.origin
    }
    #[inline]
    pub fn merged(&self) -> MergedRule {
        self.merged
    }

    /// Angle subtended by each wedge. A ring shares the full turn; corner
    /// wedges share the 180° of a triangle's interior angles.
    pub fn sweep_deg(&self) -> f64 {
        match self.origin {
            OriginRule::Ring => 360.0 / self.segments as f64,
            OriginRule::Corners { .. } => 180.0 / self.segments as f64,
        }
    }

    /// Number of wedges in group A.
    pub fn group_len(&self) -> usize {
        match self.grouping {
            Grouping::Halves => self.segments / 2,
            Grouping::Single => self.segments,
        }
    }

    /// `None` unless the merged layout is a strip.
    pub fn strip_metrics(&self) -> Option<StripMetrics> {
        match self.merged {
            MergedRule::Strip { .. } => Some(self.strip_layout()),
            MergedRule::Fan { .. } => None,
        }
    }

    pub(crate) fn strip_layout(&self) -> StripMetrics {
        let arc_length = std::f64::consts::PI * self.radius;
        let segment_width = arc_length / self.group_len() as f64;
        StripMetrics {
            arc_length,
            segment_width,
            origin_x: self.center.x - arc_length / 2.0 + segment_width / 2.0,
            height: self.radius,
        }
    }
}
