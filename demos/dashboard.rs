//! Prints the dashboard of a running backend.
//!
//! ```text
//! cargo run --example dashboard -- http://localhost:8080/ [location_sid]
//! RUST_LOG=tempcheck=debug cargo run --example dashboard -- http://localhost:8080/
//! ```

use tempcheck::{Aggregation, DashboardConfig, FetchKind, LoadPhase, TempCheck};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tempcheck=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let base_url = args
        .next()
        .unwrap_or_else(|| "http://localhost:8080/".to_string());
    let location = args.next();

    let config = DashboardConfig::builder().base_url(base_url).build();
    let client = TempCheck::with_config(config)?;
    let mut view = client.dashboard();

    let fetches = view.mount();
    view.settle(fetches).await;
    if view.phase(FetchKind::Locations) == LoadPhase::Failed {
        return Err("could not load locations, see log".into());
    }
    if let Some(location) = location {
        let fetches = view.select_location(location);
        view.settle(fetches).await;
    }

    println!("{}\n", view.location_selector());
    for card in view.sensor_cards() {
        println!("{}\n", card);
    }
    println!("{}", serde_json::to_string_pretty(view.chart())?);

    let fetches = view.set_aggregation(Aggregation::Day);
    view.settle(fetches).await;
    println!(
        "\nDaily aggregation: {} labels, {} datasets",
        view.chart().labels.len(),
        view.chart().datasets.len()
    );
    Ok(())
}
