use anyhow::{bail, Context};
use clap::Parser;
use materia::{load_catalog, Recommender, RecommenderConfig, StructuredQuery};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Recommend catalog materials matching a description
#[derive(Parser, Debug)]
#[command(name = "materia")]
#[command(about = "Recommend materials from a catalog", long_about = None)]
struct Args {
    /// Path to the catalog (JSON array of rows)
    #[arg(short, long)]
    catalog: PathBuf,

    /// Optional JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Free-text description of the desired material
    #[arg(short, long, conflicts_with = "structured")]
    text: Option<String>,

    /// Structured query as JSON, e.g. '{"density_kg_m3": 2700, "recyclable": true}'
    #[arg(short, long)]
    structured: Option<String>,

    /// Number of recommendations (overrides the configuration)
    #[arg(short, long)]
    k: Option<usize>,

    /// Also print how the query was resolved and summary statistics
    #[arg(long)]
    explain: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Serialize)]
struct Output<'a> {
    query: Vec<f64>,
    results: &'a [materia::Recommendation],
    #[serde(skip_serializing_if = "Option::is_none")]
    resolution: Option<Vec<materia::ResolvedField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<materia::RecommendationStats>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => RecommenderConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => RecommenderConfig::default(),
    };
    if let Some(k) = args.k {
        config.result_count = k;
    }

    info!("Loading catalog from {:?}", args.catalog);
    let raw = load_catalog(&args.catalog)
        .with_context(|| format!("reading catalog {}", args.catalog.display()))?;
    let recommender = Recommender::new(raw, config).context("fitting recommender")?;

    let (vector, resolution) = match (&args.text, &args.structured) {
        (Some(text), None) => {
            let resolution = args.explain.then(|| recommender.explain_text(text));
            (recommender.vectorize(text), resolution)
        }
        (None, Some(json)) => {
            let query: StructuredQuery =
                serde_json::from_str(json).context("parsing structured query")?;
            (query.to_vector(), None)
        }
        _ => bail!("provide exactly one of --text or --structured"),
    };

    let results = recommender
        .recommend_default(vector.as_slice())
        .context("querying recommender")?;
    let stats = args.explain.then(|| recommender.stats(&vector, &results));

    let output = Output {
        query: vector.as_slice().to_vec(),
        results: &results,
        resolution,
        stats,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
