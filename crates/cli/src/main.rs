use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use wedgeflow::api::{place_intervals, PlacementMode, StagePlan};

mod args;
mod provenance;
mod svg;
mod table;

use args::{parse_length, parse_spacing, ModeArg, ProofArgs};
use provenance::Sidecar;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Stage poses and marker placements for the geometry proofs")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print wedge poses as JSON (one stage, or every stage if omitted)
    Poses {
        #[command(flatten)]
        proof: ProofArgs,
        #[arg(long)]
        stage: Option<usize>,
    },
    /// Print the planting-interval placement as JSON
    Plant {
        #[arg(long, value_parser = parse_length)]
        length: f64,
        #[arg(long, value_parser = parse_spacing)]
        spacing: f64,
        #[arg(long, value_enum, default_value_t = ModeArg::BothEnds)]
        mode: ModeArg,
        /// Also draw the markers into this SVG file
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// Write a (stage, wedge) pose table as CSV or Parquet, with a provenance sidecar
    Export {
        #[command(flatten)]
        proof: ProofArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Draw one stage as SVG
    Render {
        #[command(flatten)]
        proof: ProofArgs,
        #[arg(long, default_value_t = 4)]
        stage: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Summarize an exported CSV pose table per stage
    Inspect {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Poses { proof, stage } => poses(&proof, stage),
        Action::Plant {
            length,
            spacing,
            mode,
            svg,
        } => plant(length, spacing, mode.into(), svg.as_deref()),
        Action::Export { proof, out } => export(&proof, &out),
        Action::Render { proof, stage, out } => render(&proof, stage, &out),
        Action::Inspect { input } => inspect(&input),
        Action::Report => report(),
    }
}

fn poses(proof: &ProofArgs, stage: Option<usize>) -> Result<()> {
    let params = proof.params()?;
    let plan = StagePlan::reference();
    let stages: Vec<usize> = match stage {
        Some(s) => {
            if s > plan.last_stage() {
                tracing::warn!(stage = s, last = plan.last_stage(), "stage clamped");
            }
            vec![plan.clamp(s)]
        }
        None => (0..plan.stage_count()).collect(),
    };
    tracing::info!(proof = proof.proof.as_str(), segments = params.segments(), stages = ?stages, "poses");
    let rows = table::pose_rows(&params, &plan, stages);
    let strip = params.strip_metrics().map(|m| {
        serde_json::json!({
            "arc_length": m.arc_length,
            "segment_width": m.segment_width,
            "origin_x": m.origin_x,
            "height": m.height,
        })
    });
    let doc = serde_json::json!({
        "proof": proof.proof.as_str(),
        "segments": params.segments(),
        "radius": params.radius(),
        "separation": params.separation(),
        "stage_count": plan.stage_count(),
        "strip": strip,
        "poses": rows,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn plant(length: f64, spacing: f64, mode: PlacementMode, svg_out: Option<&Path>) -> Result<()> {
    let placement = place_intervals(length, spacing, mode)?;
    tracing::info!(
        length,
        spacing,
        mode = mode.as_str(),
        gaps = placement.gap_count,
        points = placement.point_count,
        "plant"
    );
    if let Some(out) = svg_out {
        let origin = match mode {
            PlacementMode::Closed => (400.0, 300.0),
            _ => (400.0 - length / 2.0, 300.0),
        };
        write_file(out, svg::render_markers(&placement, origin).as_bytes())?;
    }
    let doc = serde_json::json!({
        "length": length,
        "spacing": spacing,
        "mode": mode.as_str(),
        "gap_count": placement.gap_count,
        "point_count": placement.point_count,
        "remainder": placement.remainder,
        "markers": table::marker_rows(&placement),
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn export(proof: &ProofArgs, out: &Path) -> Result<()> {
    let params = proof.params()?;
    let plan = StagePlan::reference();
    let rows = table::pose_rows(&params, &plan, 0..plan.stage_count());
    let mut df = table::poses_frame(&rows)?;
    tracing::info!(rows = df.height(), cols = df.width(), out = %out.display(), "export");
    table::write_table(&mut df, out)?;
    let prov = Sidecar::new(proof.proof.as_str(), &params, &plan).write_beside(out)?;
    tracing::info!(provenance = %prov.display(), "sidecar");
    Ok(())
}

fn render(proof: &ProofArgs, stage: usize, out: &Path) -> Result<()> {
    let params = proof.params()?;
    let plan = StagePlan::reference();
    tracing::info!(proof = proof.proof.as_str(), stage, phase = plan.phase(stage).as_str(), "render");
    write_file(out, svg::render_stage(&params, &plan, stage).as_bytes())?;
    Sidecar::new(proof.proof.as_str(), &params, &plan)
        .at_stage(&plan, stage)
        .write_beside(out)?;
    Ok(())
}

fn inspect(input: &Path) -> Result<()> {
    let summary = table::stage_summary(input)?;
    tracing::info!(rows = summary.height(), input = %input.display(), "inspect");
    println!("{summary}");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::code_rev(),
        "core_version": wedgeflow::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_file(out: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, bytes).with_context(|| format!("writing {}", out.display()))
}
