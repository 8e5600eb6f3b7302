use std::path::PathBuf;

use landswap::RegionLevel;

/// Cadastral fragmentation analysis CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "landswap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build the parcel or owner adjacency graph
    Graph(GraphArgs),

    /// Merge adjacent same-owner parcels within a region
    Merge(MergeArgs),

    /// Average parcel area per region, before and after merging
    Averages(AveragesArgs),

    /// Rank parcel exchanges between neighboring owners
    Suggest(SuggestArgs),

    /// Export parcels reprojected to WGS84 for map display
    Export(ExportArgs),
}

/// Node granularity of the adjacency graph.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
pub enum GraphBy {
    #[default]
    Parcel,
    Owner,
}

#[derive(clap::Args, Debug)]
pub struct GraphArgs {
    /// Parcel registry CSV (semicolon-separated)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Graph nodes: parcels or owners
    #[arg(long, value_enum, default_value_t)]
    pub by: GraphBy,

    /// Output JSON file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    /// Parcel registry CSV (semicolon-separated)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Region level bounding merges: parish, municipality or island
    #[arg(short, long, default_value = "parish")]
    pub region: RegionLevel,

    /// Output JSON file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct AveragesArgs {
    /// Parcel registry CSV (semicolon-separated)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Region level to group by: parish, municipality or island
    #[arg(short, long, default_value = "parish")]
    pub region: RegionLevel,

    /// Output JSON file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct SuggestArgs {
    /// Parcel registry CSV (semicolon-separated)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Analysis settings (JSON); flags below override its values
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Region level: parish, municipality or island
    #[arg(short, long)]
    pub region: Option<RegionLevel>,

    /// Maximum number of suggestions
    #[arg(long)]
    pub max: Option<usize>,

    /// Maximum number of suggestions per owner
    #[arg(long)]
    pub per_owner: Option<usize>,

    /// Output JSON file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Parcel registry CSV (semicolon-separated)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Only export the first N parcels
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output JSON file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
