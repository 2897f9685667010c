use std::collections::HashMap;

use crate::engine::aggregate::CampaignStats;
use crate::engine::metrics::model::CampaignMetrics;

/// Derives click-through rate and cost per acquisition for every campaign
/// in the merged view.
///
/// Pure per-key transform: nothing is filtered, ordered or ranked here.
/// A campaign with zero impressions gets a CTR of 0.0; a campaign with zero
/// conversions gets no CPA at all.
pub fn derive_metrics(stats: HashMap<String, CampaignStats>) -> Vec<CampaignMetrics> {
    stats
        .into_iter()
        .map(|(campaign_id, stats)| {
            let ctr = if stats.impressions > 0 {
                stats.clicks as f64 / stats.impressions as f64
            } else {
                0.0
            };
            let cpa = if stats.conversions > 0 {
                Some(stats.spend / stats.conversions as f64)
            } else {
                None
            };
            CampaignMetrics {
                campaign_id,
                impressions: stats.impressions,
                clicks: stats.clicks,
                spend: stats.spend,
                conversions: stats.conversions,
                ctr,
                cpa,
            }
        })
        .collect()
}
