use crate::engine::source::ColumnLayout;

/// Builds column layouts; defaults to the canonical header order.
pub struct LayoutFactory {
    campaign_id: usize,
    impressions: usize,
    clicks: usize,
    spend: usize,
    conversions: usize,
}

impl LayoutFactory {
    pub fn new() -> Self {
        Self {
            campaign_id: 0,
            impressions: 1,
            clicks: 2,
            spend: 3,
            conversions: 4,
        }
    }

    pub fn with_campaign_id(mut self, index: usize) -> Self {
        self.campaign_id = index;
        self
    }

    pub fn with_impressions(mut self, index: usize) -> Self {
        self.impressions = index;
        self
    }

    pub fn with_clicks(mut self, index: usize) -> Self {
        self.clicks = index;
        self
    }

    pub fn with_spend(mut self, index: usize) -> Self {
        self.spend = index;
        self
    }

    pub fn with_conversions(mut self, index: usize) -> Self {
        self.conversions = index;
        self
    }

    pub fn create(self) -> ColumnLayout {
        ColumnLayout {
            campaign_id: self.campaign_id,
            impressions: self.impressions,
            clicks: self.clicks,
            spend: self.spend,
            conversions: self.conversions,
        }
    }
}
