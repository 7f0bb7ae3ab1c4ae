use std::env;
use std::path::Path;

use buyback_matcher::fetch::FetcherCapability;
use buyback_matcher::fetch::http::HttpFetcher;
use buyback_matcher::models::config::MatcherConfig;
use buyback_matcher::processing::MatchPipeline;
use buyback_matcher::processing::batch;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let mut args = env::args().skip(1);
    let (Some(input_path), Some(output_path)) = (args.next(), args.next()) else {
        eprintln!("Usage: buyback-matcher <input.csv> <output.csv>");
        std::process::exit(2);
    };

    let config = match MatcherConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let fetcher = match HttpFetcher::new(&config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            log::error!("Failed to build fetcher: {e}");
            std::process::exit(1);
        }
    };
    let pipeline = MatchPipeline::new(fetcher, FetcherCapability::StaticOnly, config);

    match batch::run(&pipeline, Path::new(&input_path), Path::new(&output_path)).await {
        Ok(summary) => log::info!(
            "Wrote {} row(s) to {output_path} ({} matched)",
            summary.total,
            summary.matched
        ),
        Err(e) => {
            log::error!("Batch failed for {input_path}: {e}");
            std::process::exit(1);
        }
    }
}
