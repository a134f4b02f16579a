mod args;

use std::fs;

use anyhow::Context as _;
use args::Args;
use clap::Parser as _;
use meteobridge_weather::{
    meteobridge::{build_snapshot, decode},
    snapshot::merge,
};

fn main() -> anyhow::Result<()> {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::init_from_env(env);

    let args = Args::parse();

    let body = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read file: {:?}", args.file))?;
    let rows = decode(&body).context("failed to decode response")?;

    let mut retained = None;
    for (i, row) in rows.iter().enumerate() {
        let fresh = build_snapshot(row, args.unit_system, args.timezone)
            .with_context(|| format!("failed to build snapshot from row {}", i + 1))?;
        retained = Some(merge(fresh, retained.as_ref()));
    }

    let Some(snapshot) = retained else {
        return Ok(());
    };

    for (key, value) in snapshot.values() {
        println!("{key}: {value}");
    }

    log::info!("Replayed {} rows from {:?}", rows.len(), args.file);

    Ok(())
}
