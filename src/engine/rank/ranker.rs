use std::cmp::{Ordering, Reverse};

use crate::engine::metrics::CampaignMetrics;
use crate::engine::rank::top_k::BoundedTopK;

/// Totally ordered wrapper for a metric value.
///
/// Derived metrics are finite in normal operation; `total_cmp` keeps the
/// order total even for degenerate float inputs so ranking never panics.
#[derive(Debug, Clone, Copy)]
struct MetricValue(f64);

impl PartialEq for MetricValue {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for MetricValue {}

impl PartialOrd for MetricValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MetricValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// The k campaigns with the highest click-through rate, best first.
///
/// Ties on CTR rank by campaign id ascending, so the result is a pure
/// function of the population regardless of input order. Small populations
/// skip the bounded heap and sort outright.
pub fn top_by_highest_ctr(metrics: &[CampaignMetrics], k: usize) -> Vec<CampaignMetrics> {
    if metrics.is_empty() || k == 0 {
        return Vec::new();
    }

    if metrics.len() <= k {
        let mut sorted = metrics.to_vec();
        sorted.sort_by(|a, b| {
            b.ctr
                .total_cmp(&a.ctr)
                .then_with(|| a.campaign_id.cmp(&b.campaign_id))
        });
        return sorted;
    }

    let mut top = BoundedTopK::new(k);
    for m in metrics {
        top.offer((Reverse(MetricValue(m.ctr)), m.campaign_id.as_str()), m);
    }
    top.into_sorted().into_iter().cloned().collect()
}

/// The k campaigns with the lowest cost per acquisition, best first.
///
/// Campaigns without a CPA are not eligible and never appear, whatever
/// their other numbers look like. Ties on CPA rank by campaign id
/// ascending, like the CTR ranking.
pub fn top_by_lowest_cpa(metrics: &[CampaignMetrics], k: usize) -> Vec<CampaignMetrics> {
    let eligible: Vec<&CampaignMetrics> = metrics.iter().filter(|m| m.cpa.is_some()).collect();
    if eligible.is_empty() || k == 0 {
        return Vec::new();
    }

    if eligible.len() <= k {
        let mut sorted: Vec<CampaignMetrics> = eligible.into_iter().cloned().collect();
        sorted.sort_by(|a, b| {
            cpa_of(a)
                .total_cmp(&cpa_of(b))
                .then_with(|| a.campaign_id.cmp(&b.campaign_id))
        });
        return sorted;
    }

    let mut top = BoundedTopK::new(k);
    for m in eligible {
        top.offer((MetricValue(cpa_of(m)), m.campaign_id.as_str()), m);
    }
    top.into_sorted().into_iter().cloned().collect()
}

fn cpa_of(m: &CampaignMetrics) -> f64 {
    // Callers filter on `is_some` before ranking by CPA.
    m.cpa.unwrap_or(f64::INFINITY)
}
