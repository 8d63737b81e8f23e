use clap::Parser;
use therapair_algo::config::Settings;
use therapair_algo::core::{Matcher, ProviderMatcher};
use therapair_algo::models::{MatchCriteria, MatchWeights, RankingConfig};
use therapair_algo::services::ProviderStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Run the provider matching pipeline against a criteria file.
#[derive(Debug, Parser)]
#[command(name = "therapair-algo", version, about)]
struct Args {
    /// Path to a JSON file with the match criteria
    criteria: PathBuf,

    /// Override the dataset path from configuration
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Override the maximum number of results
    #[arg(long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt().with_target(false).with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Therapair matching run...");

    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    let dataset_path = args
        .dataset
        .unwrap_or_else(|| PathBuf::from(&settings.dataset.path));

    let weights = MatchWeights {
        religion: settings.weights.religion,
        ethnicity: settings.weights.ethnicity,
        gender: settings.weights.gender,
        language: settings.weights.language,
    };

    let ranking = RankingConfig {
        min_score: settings.matching.min_score,
        max_results: args.limit.unwrap_or(settings.matching.max_results),
    };

    let store = Arc::new(ProviderStore::new(dataset_path));
    let matcher = ProviderMatcher::new(store, Matcher::new(weights, ranking));

    if let Err(e) = matcher.initialize().await {
        error!("Failed to initialize provider store: {}", e);
        std::process::exit(1);
    }

    let criteria = read_criteria(&args.criteria).unwrap_or_else(|e| {
        error!("Failed to read criteria file {}: {}", args.criteria.display(), e);
        std::process::exit(1);
    });

    let result = match matcher.get_matches(&criteria).await {
        Ok(result) => result,
        Err(e) => {
            error!("Matching failed: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        matches = result.matches.len(),
        total_candidates = result.total_candidates,
        "matching finished"
    );

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialize result: {}", e);
            std::process::exit(1);
        }
    }
}

fn read_criteria(path: &PathBuf) -> Result<MatchCriteria, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
