//! Flat rows for poses and placements, plus DataFrame export.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::Serialize;
use wedgeflow::api::{decompose, resolve_phase, Group, Placement, ReflowParams, StagePlan};

/// One wedge at one stage.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PoseRow {
    pub stage: usize,
    pub phase: &'static str,
    pub index: usize,
    pub group: &'static str,
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
}

/// Rows for every wedge at each stage in `stages`, stage-major.
pub fn pose_rows(
    params: &ReflowParams,
    plan: &StagePlan,
    stages: impl IntoIterator<Item = usize>,
) -> Vec<PoseRow> {
    let wedges = decompose(params);
    let mut rows = Vec::new();
    for stage in stages {
        let stage = plan.clamp(stage);
        let phase = plan.phase(stage);
        for w in &wedges {
            let pose = resolve_phase(w, phase, params);
            rows.push(PoseRow {
                stage,
                phase: phase.as_str(),
                index: w.index,
                group: match w.group {
                    Group::A => "A",
                    Group::B => "B",
                },
                x: pose.translation.x,
                y: pose.translation.y,
                rotation_deg: pose.rotation_deg,
            });
        }
    }
    rows
}

#[derive(Clone, Debug, Serialize)]
pub struct MarkerRow {
    pub ordinal: usize,
    pub x: f64,
    pub y: f64,
}

pub fn marker_rows(placement: &Placement) -> Vec<MarkerRow> {
    placement
        .positions
        .iter()
        .enumerate()
        .map(|(ordinal, p)| MarkerRow {
            ordinal,
            x: p.x,
            y: p.y,
        })
        .collect()
}

pub fn poses_frame(rows: &[PoseRow]) -> PolarsResult<DataFrame> {
    df!(
        "stage" => rows.iter().map(|r| r.stage as u32).collect::<Vec<u32>>(),
        "phase" => rows.iter().map(|r| r.phase).collect::<Vec<&str>>(),
        "index" => rows.iter().map(|r| r.index as u32).collect::<Vec<u32>>(),
        "group" => rows.iter().map(|r| r.group).collect::<Vec<&str>>(),
        "x" => rows.iter().map(|r| r.x).collect::<Vec<f64>>(),
        "y" => rows.iter().map(|r| r.y).collect::<Vec<f64>>(),
        "rotation_deg" => rows.iter().map(|r| r.rotation_deg).collect::<Vec<f64>>()
    )
}

/// Write `df` as Parquet when `out` ends in `.parquet`, CSV otherwise.
pub fn write_table(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    let is_parquet = out
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));
    if is_parquet {
        ParquetWriter::new(&mut file)
            .finish(df)
            .with_context(|| format!("writing parquet {}", out.display()))?;
    } else {
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(df)
            .with_context(|| format!("writing csv {}", out.display()))?;
    }
    Ok(())
}

/// Wedge count per stage and phase of a previously exported CSV table.
pub fn stage_summary(input: &Path) -> Result<DataFrame> {
    let lf = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", input.display()))?;
    let df = lf
        .group_by([col("stage"), col("phase")])
        .agg([col("index").count().alias("wedges")])
        .sort_by_exprs(vec![col("stage")], Default::default())
        .collect()?;
    Ok(df)
}
