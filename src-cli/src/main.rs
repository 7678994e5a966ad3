//! Waypoint command line shell
//!
//! Builds a root coordinator, routes each deep link in order and prints the
//! resulting app snapshot as JSON. Logs go to stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use waypoint_core::{Config, RootCoordinator, Tab};

#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(about = "Route deep links through the Waypoint navigation core")]
struct Args {
    /// Tab selected before any link is routed
    #[arg(short, long, value_name = "TAB")]
    tab: Option<Tab>,

    /// JSON config file; environment defaults are used otherwise
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Deep links, e.g. `waypoint://checkIn?bookingId=ABC123` or `movies`
    #[arg(value_name = "LINK")]
    links: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    waypoint_core::init_logging();

    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Config::from_json(&json)?
        }
        None => Config::from_env(),
    };
    if let Some(tab) = args.tab {
        config.initial_tab = tab;
    }

    let scheme = config.deep_link_scheme.clone();
    let root = RootCoordinator::on_current_runtime(config)?;

    for link in &args.links {
        let uri = qualify(link, &scheme);
        if !root.open_url(&uri) {
            tracing::warn!(link = %uri, "Link not recognised");
        }
    }

    let snapshot = serde_json::to_string_pretty(&root.snapshot())?;
    println!("{}", snapshot);

    Ok(())
}

/// Bare hosts like `checkIn?bookingId=X` get the configured scheme
fn qualify(link: &str, scheme: &str) -> String {
    if link.contains("://") {
        link.to_string()
    } else {
        format!("{}://{}", scheme, link)
    }
}
