//! WAX Trigger Main Entry Point
//!
//! Polls one configured blockchain event on an interval and emits every
//! normalized event as one JSON line on stdout, for a workflow host to
//! consume.

use dotenv::dotenv;
use tokio::time::{Duration, MissedTickBehavior, interval};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wax_trigger::{Dependencies, TriggerConfig, TriggerError};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wax_trigger=info,wax_trigger_pipeline=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), TriggerError> {
    dotenv().ok();
    init_tracing();

    let config = TriggerConfig::from_env()?;
    info!(
        category = config.params.category.as_str(),
        event = %config.params.event,
        interval_secs = config.poll_interval_secs,
        "Starting WAX trigger"
    );

    let dependencies = Dependencies::new(&config).await?;

    let mut ticks = interval(Duration::from_secs(dependencies.poll_interval_secs));
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticks.tick() => {
                match dependencies.poller.poll().await {
                    Ok(Some(events)) => {
                        info!(event_count = events.len(), "Trigger fired");
                        for event in &events {
                            println!("{}", serde_json::to_string(event)?);
                        }
                    }
                    Ok(None) => debug!("No events this tick"),
                    Err(e) => {
                        error!(error = %e, "Poll tick failed");
                        return Err(e.into());
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received shutdown signal");
                break;
            }
        }
    }

    Ok(())
}
