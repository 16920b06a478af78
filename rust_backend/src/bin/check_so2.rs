//! Command-line SO2 check: run the visualization pipeline once and print the
//! decision. Useful for smoke-testing providers without the dashboard.

use anyhow::{bail, Context, Result};

use so2watch_rust::models::geo::{location_name, GeoPoint};
use so2watch_rust::models::request::VisualizationRequest;
use so2watch_rust::models::time::DateRange;
use so2watch_rust::providers;
use so2watch_rust::services::{run_visualization, PipelineParams};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 5 {
        bail!(
            "usage: {} <latitude> <longitude> <start YYYY-MM-DD> <end YYYY-MM-DD> [recipient]",
            args[0]
        );
    }

    let latitude: f64 = args[1].parse().context("latitude is not a number")?;
    let longitude: f64 = args[2].parse().context("longitude is not a number")?;
    let point = GeoPoint::new(latitude, longitude).context("invalid coordinates")?;
    let range = DateRange::parse(&args[3], &args[4]).context("invalid date range")?;
    let recipient = args.get(5).cloned();

    providers::init_providers().context("provider initialization failed")?;
    let providers = providers::get_providers().context("provider registry unavailable")?;

    let request = VisualizationRequest::new(point, range, recipient);
    let outcome = run_visualization(&providers, &request, &PipelineParams::default())
        .await
        .context("visualization pipeline failed")?;

    println!("=== SO2 Check ===");
    println!("Location: {}", location_name(latitude, longitude));
    println!("Range: {}", range);
    if outcome.no_data {
        println!("No usable observations in the query window.");
    } else if let Some(max) = outcome.decision.observed_max {
        println!("Max SO2 density: {:.6} mol/m2", max);
    }
    println!(
        "Alert: {}",
        if outcome.decision.triggered {
            "TRIGGERED"
        } else {
            "not triggered"
        }
    );
    if outcome.alert_sent {
        println!("SMS alert dispatched.");
    }
    if let Some(notice) = &outcome.alert_notice {
        eprintln!("warning: {}", notice);
    }
    for video in &outcome.videos {
        println!("Related: {} ({})", video.title, video.url);
    }

    Ok(())
}
