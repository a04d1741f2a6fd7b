use std::io::Write;

use anyhow::Context;
use clap::Parser;

use gildedrose_cli::{Args, demo_inventory, load_inventory, simulate};
use gildedrose_inventory::{RuleEngine, TracingObserver};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    gildedrose_observability::init(&args.observability())
        .context("failed to initialise logging")?;

    let mut items = match &args.inventory {
        Some(path) => load_inventory(path)
            .with_context(|| format!("failed to load inventory from {}", path.display()))?,
        None => demo_inventory(),
    };

    tracing::info!(
        days = args.days,
        items = items.len(),
        source = %args
            .inventory
            .as_ref()
            .map_or_else(|| "built-in".to_string(), |path| path.display().to_string()),
        "starting simulation"
    );

    let mut engine = RuleEngine::new(TracingObserver);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    simulate(&mut engine, &mut items, args.days, args.every_day, &mut out)
        .context("failed to write inventory report")?;
    out.flush().context("failed to flush inventory report")?;

    tracing::info!(days = args.days, items = items.len(), "simulation finished");
    Ok(())
}
