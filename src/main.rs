use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use rand::seq::SliceRandom;
use serde_json::json;
use snel_tally::engine::errors::EngineError;
use snel_tally::engine::event::Event;
use snel_tally::engine::listener::ChannelListener;
use snel_tally::engine::statement::{StopMode, WindowedCountStatement};
use snel_tally::logging;
use snel_tally::shared::config::CONFIG;
use tokio::time::sleep;
use tracing::info;

#[derive(Parser)]
#[command(name = "snel_tally")]
#[command(about = "Grouped count over a tumbling time window", long_about = None)]
struct Args {
    /// Window length in seconds (overrides the config file)
    #[arg(short, long)]
    interval: Option<f64>,

    /// Number of windows that receive events
    #[arg(short, long, default_value = "2")]
    rounds: usize,

    /// Events sent per window; every fourth one has no service
    #[arg(short, long, default_value = "10")]
    events_per_round: usize,

    /// Shuffle arrival order inside each window
    #[arg(long)]
    shuffle: bool,

    /// Print batches as JSON lines
    #[arg(long)]
    json: bool,
}

fn round_events(count: usize, shuffle: bool) -> Vec<Event> {
    let mut events: Vec<Event> = (0..count)
        .map(|n| Event::service(if n % 4 == 0 { None } else { Some("Test") }))
        .collect();
    if shuffle {
        events.shuffle(&mut rand::thread_rng());
    }
    events
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&CONFIG.logging)?;

    let mut config = CONFIG.statement.clone();
    if let Some(interval) = args.interval {
        config.interval_secs = interval;
    }
    let group_by = config.group_by.clone();
    let count_alias = config.count_alias.clone();

    let (listener, mut batches) = ChannelListener::bounded(64);
    let statement = WindowedCountStatement::launch(config.clone(), Arc::new(listener))
        .inspect_err(EngineError::log_error)?;

    if !args.json {
        for column in statement.output_columns() {
            println!("{}:{}", column.name, column.logical_type);
        }
    }

    let as_json = args.json;
    let printer = tokio::spawn(async move {
        while let Some(batch) = batches.recv().await {
            if as_json {
                let line = json!({
                    "sequence": batch.sequence,
                    "window_start": batch.window_start,
                    "window_end": batch.window_end,
                    "rows": batch.to_payloads(&group_by, &count_alias),
                });
                println!("{}", line);
            } else {
                println!();
                for (i, row) in batch.rows.iter().enumerate() {
                    println!(
                        "#{}.{}: {}={} {}={}",
                        batch.sequence, i, group_by, row.key, count_alias, row.count
                    );
                }
            }
        }
    });

    let period = Duration::from_secs_f64(config.interval_secs);
    for round in 0..args.rounds {
        let events = round_events(args.events_per_round, args.shuffle);
        for event in &events {
            // Rejected events are logged and skipped.
            if let Err(e) = statement.ingest(event) {
                e.log_error();
            }
        }
        info!(round, events = events.len(), "Window fed");
        sleep(period).await;
    }
    // One idle window shows every known group at zero.
    sleep(period).await;

    statement
        .stop(StopMode::Discard)
        .inspect_err(EngineError::log_error)?;
    let metrics = statement.metrics();
    info!(
        batches = metrics.batches_emitted(),
        events = metrics.events_ingested(),
        "Done"
    );
    drop(statement);
    printer.await?;

    Ok(())
}
