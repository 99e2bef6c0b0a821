use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "lc-coverage", version, about = "LoRaWAN maritime coverage from node position traces")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replay a position trace and write per-frame coverage and link reports.
    Replay(ReplayArgs),
    /// Compare a fixed-gateway and a mobile-gateway trace at one instant.
    Compare(CompareArgs),
    /// Tabulate relay metrics from simulator result summaries.
    RelayTable(RelayTableArgs),
}

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Positions CSV (`time,[node_id,]x,y,type`).
    #[arg(long)]
    pub trace: PathBuf,

    /// TOML file with `[ranges]` and `max_frames`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "output/coverage")]
    pub out: PathBuf,

    /// Replay only the first N snapshots.
    #[arg(long)]
    pub max_frames: Option<usize>,

    /// Disable boat relays (fixed-gateway architecture).
    #[arg(long)]
    pub direct_only: bool,

    #[arg(long, value_enum, default_value_t = Backend::Csv)]
    pub backend: Backend,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Positions CSV of the fixed-gateway run, evaluated with direct links only.
    #[arg(long)]
    pub fixed: PathBuf,

    /// Positions CSV of the mobile-gateway run, evaluated with relays.
    #[arg(long)]
    pub mobile: PathBuf,

    /// Target time in seconds.  Both traces are read at the later of their
    /// frames nearest to it.
    #[arg(long, default_value_t = 300.0)]
    pub time: f64,

    /// TOML file with `[ranges]`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "output/coverage")]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
pub struct RelayTableArgs {
    /// `label=path` of one result summary CSV; repeat per architecture.
    #[arg(long = "result", value_parser = parse_labeled_path, required = true)]
    pub results: Vec<(String, PathBuf)>,

    #[arg(long, default_value = "output/coverage")]
    pub out: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    Csv,
    Sqlite,
    Parquet,
}

fn parse_labeled_path(s: &str) -> Result<(String, PathBuf), String> {
    let (label, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected label=path, got `{s}`"))?;
    if label.trim().is_empty() || path.trim().is_empty() {
        return Err(format!("expected label=path, got `{s}`"));
    }
    Ok((label.trim().to_owned(), PathBuf::from(path.trim())))
}
