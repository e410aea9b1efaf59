//! Provenance records written next to exported tables and figures.
//!
//! A record pins down which proof configuration produced an artifact: the
//! layout it was resolved from, the stage (for snapshots), the core version
//! and the source revision. It lands at `<stem>.provenance.json` beside the
//! artifact so the two travel together.

use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use serde::Serialize;
use wedgeflow::api::{ReflowParams, StagePlan};

/// Geometry the artifact was resolved from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub segments: usize,
    pub radius: f64,
    pub center: [f64; 2],
    pub separation: f64,
}

impl From<&ReflowParams> for Layout {
    fn from(p: &ReflowParams) -> Self {
        Self {
            segments: p.segments(),
            radius: p.radius(),
            center: [p.center().x, p.center().y],
            separation: p.separation(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub stage: usize,
    pub phase: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub core_version: &'static str,
    pub proof: &'static str,
    pub layout: Layout,
    pub stage_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Snapshot>,
    /// `file:line` of the command that produced the artifact.
    pub written_by: String,
    pub outputs: Vec<String>,
}

impl Sidecar {
    /// Record for every stage of `plan` resolved from `params`.
    #[track_caller]
    pub fn new(proof: &'static str, params: &ReflowParams, plan: &StagePlan) -> Self {
        let at = Location::caller();
        Self {
            code_rev: code_rev(),
            core_version: wedgeflow::VERSION,
            proof,
            layout: Layout::from(params),
            stage_count: plan.stage_count(),
            snapshot: None,
            written_by: format!("{}:{}", at.file(), at.line()),
            outputs: Vec::new(),
        }
    }

    /// Narrow the record to a single (clamped) stage of `plan`.
    pub fn at_stage(self, plan: &StagePlan, stage: usize) -> Self {
        let stage = plan.clamp(stage);
        Self {
            snapshot: Some(Snapshot {
                stage,
                phase: plan.phase(stage).as_str(),
            }),
            ..self
        }
    }

    /// Write the record beside `artifact` and return where it went.
    pub fn write_beside(mut self, artifact: &Path) -> Result<PathBuf> {
        let path = sidecar_path(artifact);
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating provenance dir {}", dir.display()))?;
        }
        self.outputs.push(artifact.to_string_lossy().into_owned());
        let body = serde_json::to_vec_pretty(&self)?;
        fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `dir/poses.parquet` → `dir/poses.provenance.json`.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` when set, else `git rev-parse HEAD`, else `"unknown"`.
pub fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
