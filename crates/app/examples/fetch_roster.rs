//! Fetch the group roster through each calling convention.
//!
//! Wires the full pipeline from configuration, triggers the fetch in the
//! task, stream, and callback styles, and reports whatever each attempt
//! produced. Point `MULTISYNC_ROSTER_ENDPOINT` at a roster endpoint to
//! fetch from somewhere other than the default.

use std::time::Duration;

use multisync_app::logging::error_label;
use multisync_app::AppContext;
use multisync_domain::{Drawing, FetchError, Point, Roster, Stroke};
use tokio::sync::{broadcast, watch};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn report(
    context: &AppContext,
    roster_rx: &mut watch::Receiver<Roster>,
    error_rx: &mut broadcast::Receiver<FetchError>,
) {
    if roster_rx.has_changed().unwrap_or(false) {
        let roster = roster_rx.borrow_and_update().clone();
        for member in &roster.members {
            info!(
                activity_name = %member.activity_name,
                name = %member.name,
                personality = %member.personality_code,
                "member"
            );
        }
        info!(members = context.roster.member_count(), "roster updated");
    }

    while let Ok(err) = error_rx.try_recv() {
        warn!(error = error_label(&err), "roster fetch failed");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = multisync_infra::config::load();
    let context = AppContext::build(config)?;

    let mut roster_rx = context.roster.subscribe_roster();
    let mut error_rx = context.roster.subscribe_errors();

    info!("fetching in the task style");
    context.roster.refresh().await;
    report(&context, &mut roster_rx, &mut error_rx);

    info!("fetching in the stream style");
    context.roster.refresh_with_stream().await?;
    report(&context, &mut roster_rx, &mut error_rx);

    info!("fetching in the callback style");
    context.roster.refresh_with_callback();
    // Completion lands on a worker task; give it a moment before reading.
    tokio::time::sleep(Duration::from_secs(1)).await;
    report(&context, &mut roster_rx, &mut error_rx);

    // The sync collaborators live next to the pipeline, not inside it.
    let mut canvas_rx = context.canvas.subscribe();
    context.canvas.update(Drawing {
        strokes: vec![Stroke {
            points: vec![Point { x: 0.0, y: 0.0 }, Point { x: 3.0, y: 4.0 }],
        }],
    });
    info!(strokes = canvas_rx.recv().await?.strokes.len(), "canvas drawing republished");

    let mut name_rx = context.assign.subscribe();
    context.assign.announce();
    name_rx.changed().await?;
    info!(name = %*name_rx.borrow_and_update(), "group name announced");

    Ok(())
}
