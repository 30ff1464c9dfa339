use median::measure_time;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::BufReader;

use crate::config::{Config, Source};
use crate::feed::{generate, read_lines, Feed, FeedError, Summary};

mod config;
mod feed;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let config = Config::from_env().map_err(FeedError::from)?;
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::from(config.log_level))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    tracing::info!(?config, "starting median feed");

    let summary = run(&config).await?;
    println!("{}", summary);
    Ok(())
}

async fn run(config: &Config) -> Result<Summary, FeedError> {
    let mut feed = Feed::new(config.report_every);
    let (interrupted, elapsed) = measure_time!("ingest", {
        match config.source {
            Source::Stdin => {
                let reader = BufReader::new(tokio::io::stdin());
                read_lines(reader, &mut feed, shutdown_signal()).await?
            }
            Source::Random => {
                let mut rng = match config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                generate(&mut rng, config.samples, &mut feed)?;
                false
            }
        }
    });
    let summary = feed.summary(interrupted);
    tracing::info!(
        count = summary.count,
        skipped = summary.skipped,
        ?elapsed,
        "finished ingesting values"
    );
    Ok(summary)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "unable to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
