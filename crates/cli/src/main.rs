use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use laneclass::{classify_with, Classification, ClassifyCfg, LaneDescriptor, TieBreak};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod table;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Classify lane cross-sections from files")]
struct Cmd {
    /// Optional VK ticket UUID; propagated to outputs and logs
    #[arg(long)]
    vk: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify one cross-section and write the result as JSON
    Classify {
        /// Lane descriptors (.json array or .csv table)
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        cfg: CfgArgs,
    },
    /// Print a per-lane table of the classification
    Table {
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        cfg: CfgArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TieBreakArg {
    /// Backward-only, then neutral, then forward-only lanes
    Bands,
    /// Keep input order
    Input,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Bands => TieBreak::DirectionBands,
            TieBreakArg::Input => TieBreak::InputOrder,
        }
    }
}

#[derive(Args, Clone, Copy, Debug)]
struct CfgArgs {
    /// Maximum median height above the reference lane
    #[arg(long)]
    elevation_tolerance: Option<f64>,
    /// Multiplier on the width sum in the gap fallback
    #[arg(long)]
    gap_width_factor: Option<f64>,
    #[arg(long, value_enum, default_value_t = TieBreakArg::Bands)]
    tie_break: TieBreakArg,
}

impl CfgArgs {
    fn resolve(self) -> ClassifyCfg {
        let base = ClassifyCfg::default();
        ClassifyCfg {
            elevation_tolerance: self.elevation_tolerance.unwrap_or(base.elevation_tolerance),
            gap_width_factor: self.gap_width_factor.unwrap_or(base.gap_width_factor),
            tie_break: self.tie_break.into(),
            ..base
        }
    }
}

#[derive(Serialize)]
struct ClassifyOutput<'a> {
    engine_version: &'static str,
    config: ClassifyCfg,
    lanes: &'a [LaneDescriptor],
    classification: &'a Classification,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Classify { input, out, cfg } => {
            classify_file(&input, &out, cfg.resolve(), cmd.vk).map(|_| ())
        }
        Action::Table { input, cfg } => table(&input, cfg.resolve()),
        Action::Report => report(cmd.vk),
    }
}

fn classify_file(
    input: &Path,
    out: &Path,
    cfg: ClassifyCfg,
    vk: Option<String>,
) -> Result<Classification> {
    tracing::info!(input = %input.display(), out = %out.display(), vk = ?vk, "classify");
    let lanes = input::read_lanes(input)?;
    let result = classify_with(&lanes, cfg);
    tracing::info!(
        lanes = lanes.len(),
        groups = result.groups().len(),
        configuration = ?result.configuration(),
        "classified"
    );

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let doc = ClassifyOutput {
        engine_version: laneclass::VERSION,
        config: cfg,
        lanes: &lanes,
        classification: &result,
    };
    fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = provenance::Payload::new(serde_json::to_value(cfg)?)
        .with_vk(vk)
        .with_input(input);
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(provenance = %sidecar.display(), "wrote");
    Ok(result)
}

fn table(input: &Path, cfg: ClassifyCfg) -> Result<()> {
    tracing::info!(input = %input.display(), "table");
    let lanes = input::read_lanes(input)?;
    let result = classify_with(&lanes, cfg);
    print!("{}", table::render(&lanes, &result));
    Ok(())
}

fn report(vk: Option<String>) -> Result<()> {
    let obj = provenance::block(
        vk.as_deref(),
        serde_json::to_value(ClassifyCfg::default())?,
    );
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
