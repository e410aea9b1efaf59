//! Interval placement (the planting problem).
//!
//! Model
//! - `gap_count = ⌊length / spacing⌋`; the leftover is reported, never placed.
//!   No open-path marker lies beyond `length`, and requests with more than
//!   `MAX_GAPS` intervals are rejected before anything is allocated.
//! - Open paths run along +x from the origin; point `i` sits at `i·spacing`.
//!   The boundary mode decides which of the `gap_count + 1` candidates stay.
//! - A closed path is a circle of circumference `length` around the origin.
//!   Point `i` sits at angle `i·360/gap_count − 90°` (the first at the top, in
//!   the y-down frame), and the seam never carries a duplicate.

use nalgebra::Vector2;

use crate::cfg::MAX_GAPS;
use crate::error::{require_positive, ConfigError};

/// Which path ends carry a marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlacementMode {
    BothEnds,
    OneEnd,
    NeitherEnd,
    Closed,
}

impl PlacementMode {
    pub const ALL: [PlacementMode; 4] = [
        PlacementMode::BothEnds,
        PlacementMode::OneEnd,
        PlacementMode::NeitherEnd,
        PlacementMode::Closed,
    ];

    /// Marker count for `gaps` whole intervals.
    pub fn point_count(&self, gaps: usize) -> usize {
        match self {
            PlacementMode::BothEnds => gaps + 1,
            PlacementMode::OneEnd | PlacementMode::Closed => gaps,
            PlacementMode::NeitherEnd => gaps.saturating_sub(1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementMode::BothEnds => "both-ends",
            PlacementMode::OneEnd => "one-end",
            PlacementMode::NeitherEnd => "neither-end",
            PlacementMode::Closed => "closed",
        }
    }
}

/// Validated placement request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    total_length: f64,
    spacing: f64,
    mode: PlacementMode,
    gaps: usize,
}

impl Interval {
    pub fn new(total_length: f64, spacing: f64, mode: PlacementMode) -> Result<Self, ConfigError> {
        require_positive(total_length, "total length", |length| {
            ConfigError::NonPositiveLength { length }
        })?;
        require_positive(spacing, "spacing", |spacing| {
            ConfigError::NonPositiveSpacing { spacing }
        })?;
        let quotient = total_length / spacing;
        if !quotient.is_finite() || quotient >= (MAX_GAPS + 1) as f64 {
            return Err(ConfigError::TooManyGaps {
                quotient,
                max: MAX_GAPS,
            });
        }
        Ok(Self {
            total_length,
            spacing,
            mode,
            gaps: whole_gaps(total_length, spacing),
        })
    }

    #[inline]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }
    #[inline]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }
    #[inline]
    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    #[inline]
    pub fn gap_count(&self) -> usize {
        self.gaps
    }

    pub fn place(&self) -> Placement {
        let gaps = self.gaps;
        let remainder = self.total_length - gaps as f64 * self.spacing;
        let positions = match self.mode {
            PlacementMode::BothEnds => self.along(0..=gaps),
            PlacementMode::OneEnd => self.along(0..gaps),
            PlacementMode::NeitherEnd => self.along(1..gaps),
            PlacementMode::Closed => self.around(gaps),
        };
        debug_assert_eq!(positions.len(), self.mode.point_count(gaps));
        Placement {
            gap_count: gaps,
            point_count: positions.len(),
            remainder,
            positions,
        }
    }

    fn along(&self, indices: impl Iterator<Item = usize>) -> Vec<Vector2<f64>> {
        indices
            .map(|i| Vector2::new(i as f64 * self.spacing, 0.0))
            .collect()
    }

    fn around(&self, gaps: usize) -> Vec<Vector2<f64>> {
        if gaps == 0 {
            return Vec::new();
        }
        let r = self.loop_radius();
        let step = 360.0 / gaps as f64;
        (0..gaps)
            .map(|i| {
                let th = (i as f64 * step - 90.0).to_radians();
                Vector2::new(r * th.cos(), r * th.sin())
            })
            .collect()
    }

    /// Radius of the closed loop whose circumference is the total length.
    pub fn loop_radius(&self) -> f64 {
        self.total_length / std::f64::consts::TAU
    }
}

/// `⌊length / spacing⌋`, stepped down once if rounding of the quotient put
/// the last whole interval past `length`. Caller has bounded the quotient.
fn whole_gaps(length: f64, spacing: f64) -> usize {
    let gaps = (length / spacing).floor() as usize;
    if gaps > 0 && gaps as f64 * spacing > length {
        gaps - 1
    } else {
        gaps
    }
}

/// Counted and positioned markers.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub gap_count: usize,
    pub point_count: usize,
    /// Length left over after the last whole interval.
    pub remainder: f64,
    pub positions: Vec<Vector2<f64>>,
}

/// Count and place markers for `total_length`/`spacing` under `mode`.
pub fn place_intervals(
    total_length: f64,
    spacing: f64,
    mode: PlacementMode,
) -> Result<Placement, ConfigError> {
    Ok(Interval::new(total_length, spacing, mode)?.place())
}
