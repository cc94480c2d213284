// Week layout command line entry point
// Lays out a JSON event list for one week and prints the result as JSON

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use serde_json::json;

use week_layout::models::event::Event;
use week_layout::services::layout::layout_week;
use week_layout::services::settings::SettingsService;
use week_layout::services::time_tracker::{TimeTracker, ViewWindow};

const USAGE: &str = "usage: week-layout <events.json> [YYYY-MM-DD]";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(events_path) = args.next() else {
        bail!(USAGE);
    };
    let date = match args.next() {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid date {:?}; {}", raw, USAGE))?,
        None => Local::now().date_naive(),
    };

    let settings = SettingsService::load_or_default();
    log::info!("Laying out week of {} from {}", date, events_path);

    let content = std::fs::read_to_string(&events_path)
        .with_context(|| format!("Failed to read events from {}", events_path))?;
    let events: Vec<Event> =
        serde_json::from_str(&content).context("Events file must be a JSON array of events")?;

    let layout = layout_week(date, &events, &settings);
    if !layout.rejected.is_empty() {
        log::warn!("{} events were skipped", layout.rejected.len());
    }

    let mut tracker = TimeTracker::new(&settings)?;
    let mut updates = tracker.subscribe();
    tracker.activate(ViewWindow::week_of(date, settings.first_day_of_week))?;
    updates.changed().await.context("Time tracker stopped before publishing")?;
    let now = *updates.borrow();
    tracker.deactivate();

    let output = json!({ "layout": layout, "now": now });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
