/// Running totals for a single campaign.
///
/// State is addition-only: folding a record and merging two partials are
/// both plain field-wise sums, so the final totals do not depend on how the
/// input was split into chunks or in which order partials arrive. The
/// integer totals are exact; `spend` is a float sum and may differ in the
/// last bits between chunkings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignStats {
    pub impressions: i64,
    pub clicks: i64,
    pub spend: f64,
    pub conversions: i64,
}

impl CampaignStats {
    /// Folds one parsed record into the running totals.
    pub fn update(&mut self, impressions: i64, clicks: i64, spend: f64, conversions: i64) {
        self.impressions += impressions;
        self.clicks += clicks;
        self.spend += spend;
        self.conversions += conversions;
    }

    /// Field-wise sum with another partial for the same campaign.
    pub fn merge(&mut self, other: &CampaignStats) {
        self.impressions += other.impressions;
        self.clicks += other.clicks;
        self.spend += other.spend;
        self.conversions += other.conversions;
    }
}
