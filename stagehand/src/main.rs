use stagehand::{Config, SchedulerBuilder, tasks};

use anyhow::Context as _;
use tracing::{Level, info};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = Config::default();

    let mut scheduler = SchedulerBuilder::new()
        .try_tick(config.tick)
        .context("invalid scheduler tick")?
        .build();

    scheduler.register(tasks::file_pair(&config.first, &config.second));
    scheduler.register(tasks::random_timer(&mut rand::rng(), &config.wait));

    println!(
        "scheduler started; create {} and {} to release the file-pair task",
        config.first.display(),
        config.second.display()
    );

    let report = scheduler.run();

    info!(passes = report.passes, elapsed = ?report.elapsed, "exiting");

    Ok(())
}
