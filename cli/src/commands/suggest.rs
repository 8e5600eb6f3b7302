use anyhow::Result;
use landswap::{Analysis, AnalysisConfig};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::SuggestArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_json_file(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(region) = args.region { config.region = region }
    if let Some(max) = args.max { config.max_suggestions = max }
    if let Some(per_owner) = args.per_owner { config.max_suggestions_per_owner = Some(per_owner) }

    let parcels = super::load_parcels(&args.input)?;
    let analysis = Analysis::run(&parcels, &config);

    super::emit(args.output.as_deref(), &analysis.report())
}
