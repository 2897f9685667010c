use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::engine::aggregate::stats::CampaignStats;

/// Per-campaign totals produced by one worker from one chunk.
///
/// The merged view across all chunks has exactly the same shape, which is
/// what keeps the reduce step a plain fold over `merge`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkPartial {
    pub campaigns: HashMap<String, CampaignStats>,
}

impl ChunkPartial {
    /// Folds `other` into `self`. Campaigns present on either side survive;
    /// campaigns present on both are summed field-wise. Merging is
    /// commutative and associative, so fan-in order never changes totals.
    pub fn merge(&mut self, other: ChunkPartial) {
        for (campaign_id, stats) in other.campaigns {
            match self.campaigns.entry(campaign_id) {
                Entry::Vacant(e) => {
                    e.insert(stats);
                }
                Entry::Occupied(mut e) => {
                    e.get_mut().merge(&stats);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }
}

/// Collapses the partials from every chunk into the final per-campaign view.
pub fn merge_partials(partials: Vec<ChunkPartial>) -> HashMap<String, CampaignStats> {
    let mut merged = ChunkPartial::default();
    for partial in partials {
        merged.merge(partial);
    }
    merged.campaigns
}
