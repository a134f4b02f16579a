mod args;

use std::{pin::Pin, process::ExitCode};

use anyhow::{Context as _, Result, bail};
use args::Args;
use clap::Parser as _;
use meteobridge_weather::{
    meteobridge::{DeviceConfig, Poller},
    sensor::Selection,
    snapshot::{MeasurementSnapshot, SnapshotStore},
    units::WindUnit,
};
use tokio::time::{Duration, MissedTickBehavior, interval};

#[tokio::main]
async fn main() -> ExitCode {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::init_from_env(env);

    if let Err(e) = run().await {
        log::error!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let selection = Selection::from_keys(&args.sensors).context("invalid sensor selection")?;

    if args.interval_secs == 0 {
        bail!("interval must be at least one second");
    }

    let device = DeviceConfig {
        host: args.host.clone(),
        username: args.username.clone(),
        password: args.password.clone(),
        use_ssl: args.use_ssl,
    };

    let poller = Poller::new(&device, args.unit_system, args.timezone)
        .context("failed to initialize Meteobridge poller")?;

    let store = SnapshotStore::new();

    log::info!(
        "polling {} every {}s ({} units, {} sensors)",
        args.host,
        args.interval_secs,
        args.unit_system.as_str(),
        selection.len()
    );

    let mut ticker = interval(Duration::from_secs(args.interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // One listener for the whole run, raced against both the tick and the poll.
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        if unless_shutdown(ticker.tick(), &mut shutdown).await.is_none() {
            break;
        }

        let Some(result) = unless_shutdown(poller.poll(), &mut shutdown).await else {
            break;
        };

        match result {
            Ok(fresh) => {
                let snapshot = store.merge_in(fresh);
                report(&snapshot, &selection, args.wind_unit);
            }
            Err(err) => {
                let kind = err.kind();
                let stale = store
                    .current()
                    .map(|s| s.measured_at.to_rfc3339())
                    .unwrap_or_else(|| "none".to_owned());
                log::warn!(
                    "{kind} error, keeping snapshot from {stale}: {:#}",
                    anyhow::Error::from(err)
                );
            }
        }
    }

    log::info!("shutting down");
    Ok(())
}

/// `None` once `shutdown` has completed, otherwise the output of `work`.
async fn unless_shutdown<F, S>(work: F, shutdown: &mut Pin<&mut S>) -> Option<F::Output>
where
    F: Future,
    S: Future,
{
    tokio::select! {
        output = work => Some(output),
        _ = shutdown.as_mut() => None,
    }
}

fn report(snapshot: &MeasurementSnapshot, selection: &Selection, wind_unit: WindUnit) {
    log::info!("reading at {}", snapshot.measured_at);

    for sensor in &selection.sensors {
        let Some(state) = sensor.state(snapshot, wind_unit) else {
            continue;
        };
        let unit = sensor.unit(snapshot.unit_system, wind_unit);
        log::info!("  {}: {state} {unit}", sensor.name);
    }

    for binary in &selection.binary_sensors {
        if let Some(state) = binary.state(snapshot) {
            log::info!("  {}: {state}", binary.name);
        }
    }
}
