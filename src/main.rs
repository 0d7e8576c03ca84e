use clap::Parser;
use pp_profile::{
    api::OsuApiClient,
    args::Args,
    beatmap::{BeatmapCache, FileStore},
    database::db::DbClient,
    error::ProfileError,
    ingestion::{evaluate_user, ApiSource, DatabaseSource, IngestOptions},
    performance::RosuEvaluator,
    report::{render_json, render_text}
};
use std::{process::ExitCode, sync::Arc};
use tracing::error;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let args = Args::parse();

    // Logs go through the progress layer's writer so they print above the bar
    let indicatif_layer = IndicatifLayer::new();
    tracing_subscriber::registry()
        .with(EnvFilter::new(&args.log_level))
        .with(fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();

    match run(&args).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<String, ProfileError> {
    let connection = args.database_connection().map_err(ProfileError::Config)?;

    let client = OsuApiClient::new(&args.api_root, &args.api_key)?;
    let cache = BeatmapCache::new(FileStore::new(&args.cache_dir), client.clone());
    let evaluator = Arc::new(RosuEvaluator::new());
    let options = IngestOptions {
        ruleset: args.ruleset(),
        limit: args.limit,
        concurrency: args.concurrency
    };

    let report = match connection {
        Some(connection_string) => {
            let db = DbClient::connect(connection_string).await?;
            let source = DatabaseSource::new(client, db);
            evaluate_user(&source, &cache, evaluator, &args.user, options).await?
        }
        None => {
            let source = ApiSource::new(client);
            evaluate_user(&source, &cache, evaluator, &args.user, options).await?
        }
    };

    if args.json {
        Ok(render_json(&report)?)
    } else {
        Ok(render_text(&report))
    }
}
