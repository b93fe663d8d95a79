//! Reads an intent request from stdin and prints the commit envelope.

use std::io::Read;

use community_ops::{Community, Config, DirectorySnapshot, IntentRequest, RolePermissions};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        error!(error = %e, "Failed to build community operation");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    info!(namespace = %config.namespace_id(), "Configuration loaded");

    let snapshot = match &config.snapshot_path {
        Some(path) => DirectorySnapshot::load(path)?,
        None => {
            warn!("No snapshot configured, every community is treated as unknown");
            DirectorySnapshot::new()
        }
    };

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let request: IntentRequest = serde_json::from_str(&input)?;

    let oracle = RolePermissions::new(&snapshot);
    let community = Community::new(request.community, request.account, &snapshot, &oracle)
        .with_namespace(config.namespace_id());
    let envelope = request.intent.apply(&community)?;

    println!("{}", serde_json::to_string(&envelope)?);
    Ok(())
}
