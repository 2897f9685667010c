use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::engine::errors::SinkError;
use crate::engine::metrics::CampaignMetrics;

const LOG_TARGET: &str = "engine::sink::writer";

/// Header shared by every output file.
pub const OUTPUT_HEADER: [&str; 7] = [
    "campaign_id",
    "total_impressions",
    "total_clicks",
    "total_spend",
    "total_conversions",
    "CTR",
    "CPA",
];

/// Writes one list of campaign metrics as a CSV file.
///
/// Spend and CPA render with two decimals, CTR with four. A campaign
/// without a CPA gets an empty CPA cell, never a zero. Rows land in the
/// order given; ordering is the caller's concern.
pub fn write_metrics(path: &Path, metrics: &[CampaignMetrics]) -> Result<(), SinkError> {
    let mut writer = Writer::from_path(path)?;

    writer.write_record(OUTPUT_HEADER)?;

    for m in metrics {
        let cpa = match m.cpa {
            Some(value) => format!("{value:.2}"),
            None => String::new(),
        };
        writer.write_record(&[
            m.campaign_id.clone(),
            m.impressions.to_string(),
            m.clicks.to_string(),
            format!("{:.2}", m.spend),
            m.conversions.to_string(),
            format!("{:.4}", m.ctr),
            cpa,
        ])?;
    }

    writer.flush()?;
    debug!(
        target: LOG_TARGET,
        path = %path.display(),
        rows = metrics.len(),
        "Wrote metrics file"
    );
    Ok(())
}
