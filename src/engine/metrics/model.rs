/// Final per-campaign view: raw totals plus the derived rates.
///
/// `cpa` is absent, not zero, for a campaign without conversions. Cost per
/// acquisition is undefined there, and `None` keeps that case apart from a
/// genuinely free acquisition (`Some(0.0)`).
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignMetrics {
    pub campaign_id: String,
    pub impressions: i64,
    pub clicks: i64,
    pub spend: f64,
    pub conversions: i64,
    pub ctr: f64,
    pub cpa: Option<f64>,
}
