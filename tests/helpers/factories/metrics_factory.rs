use crate::engine::metrics::CampaignMetrics;

/// Builds derived-metric rows directly, so ranking and writing tests can
/// state CTR and CPA values without computing them from raw totals.
pub struct MetricsFactory {
    metrics: CampaignMetrics,
}

impl MetricsFactory {
    pub fn new(campaign_id: &str) -> Self {
        Self {
            metrics: CampaignMetrics {
                campaign_id: campaign_id.to_string(),
                impressions: 0,
                clicks: 0,
                spend: 0.0,
                conversions: 0,
                ctr: 0.0,
                cpa: None,
            },
        }
    }

    pub fn with_impressions(mut self, impressions: i64) -> Self {
        self.metrics.impressions = impressions;
        self
    }

    pub fn with_clicks(mut self, clicks: i64) -> Self {
        self.metrics.clicks = clicks;
        self
    }

    pub fn with_spend(mut self, spend: f64) -> Self {
        self.metrics.spend = spend;
        self
    }

    pub fn with_conversions(mut self, conversions: i64) -> Self {
        self.metrics.conversions = conversions;
        self
    }

    pub fn with_ctr(mut self, ctr: f64) -> Self {
        self.metrics.ctr = ctr;
        self
    }

    pub fn with_cpa(mut self, cpa: f64) -> Self {
        self.metrics.cpa = Some(cpa);
        self
    }

    pub fn create(self) -> CampaignMetrics {
        self.metrics
    }
}
