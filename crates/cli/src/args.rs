//! Shared flags and range-checked value parsers.
//!
//! The core only rejects impossible values (odd counts, non-positive lengths).
//! The selector ranges of the visualization are enforced here, at the input edge.

use anyhow::Result;
use clap::{Args, ValueEnum};
use wedgeflow::api::{PlacementMode, ReflowParams, LENGTH_RANGE, SEGMENT_CHOICES, SPACING_RANGE};
use wedgeflow::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Proof {
    /// Circle cut into wedges, reflowed into a rectangle.
    Circle,
    /// Three 60° corner arcs of an equilateral triangle, reflowed into a semicircle.
    Triangle,
}

impl Proof {
    pub fn as_str(&self) -> &'static str {
        match self {
            Proof::Circle => "circle",
            Proof::Triangle => "triangle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    BothEnds,
    OneEnd,
    NeitherEnd,
    Closed,
}

impl From<ModeArg> for PlacementMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::BothEnds => PlacementMode::BothEnds,
            ModeArg::OneEnd => PlacementMode::OneEnd,
            ModeArg::NeitherEnd => PlacementMode::NeitherEnd,
            ModeArg::Closed => PlacementMode::Closed,
        }
    }
}

/// Geometry flags common to every reflow subcommand.
#[derive(Args, Clone, Debug)]
pub struct ProofArgs {
    #[arg(long, value_enum, default_value_t = Proof::Circle)]
    pub proof: Proof,
    /// Circle wedge count (8, 16, 32 or 64)
    #[arg(long, default_value_t = 16, value_parser = parse_segments)]
    pub segments: usize,
    /// Circle radius
    #[arg(long, default_value_t = 140.0)]
    pub radius: f64,
    /// Triangle side length (arc radius is half of it)
    #[arg(long, default_value_t = 300.0)]
    pub side: f64,
    #[arg(long, default_value_t = 400.0)]
    pub cx: f64,
    #[arg(long, default_value_t = 240.0)]
    pub cy: f64,
    /// Distance the pieces are pulled apart before merging (per-proof default if omitted)
    #[arg(long)]
    pub separation: Option<f64>,
}

impl ProofArgs {
    pub fn params(&self) -> Result<ReflowParams> {
        let center = Vec2::new(self.cx, self.cy);
        let base = match self.proof {
            Proof::Circle => ReflowParams::circle(self.segments, self.radius, center)?,
            Proof::Triangle => ReflowParams::triangle_arcs(self.side, center)?,
        };
        Ok(match self.separation {
            Some(d) => base.with_separation(d)?,
            None => base,
        })
    }
}

pub fn parse_segments(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    if SEGMENT_CHOICES.contains(&n) {
        Ok(n)
    } else {
        Err(format!("segment count must be one of {SEGMENT_CHOICES:?}"))
    }
}

pub fn parse_spacing(s: &str) -> Result<f64, String> {
    parse_in_range(s, "spacing", SPACING_RANGE.start(), SPACING_RANGE.end())
}

pub fn parse_length(s: &str) -> Result<f64, String> {
    parse_in_range(s, "length", LENGTH_RANGE.start(), LENGTH_RANGE.end())
}

fn parse_in_range(s: &str, what: &str, lo: &f64, hi: &f64) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (*lo..=*hi).contains(&v) {
        Ok(v)
    } else {
        Err(format!("{what} must lie in [{lo}, {hi}], got {v}"))
    }
}
