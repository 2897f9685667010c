use csv::StringRecord;

use crate::engine::errors::SourceError;

pub const COL_CAMPAIGN_ID: &str = "campaign_id";
pub const COL_IMPRESSIONS: &str = "impressions";
pub const COL_CLICKS: &str = "clicks";
pub const COL_SPEND: &str = "spend";
pub const COL_CONVERSIONS: &str = "conversions";

/// Positions of the required columns, resolved from the header row by name.
///
/// Column order in the input file does not matter and extra columns are
/// ignored. A required column that cannot be found aborts the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub campaign_id: usize,
    pub impressions: usize,
    pub clicks: usize,
    pub spend: usize,
    pub conversions: usize,
}

impl ColumnLayout {
    pub fn from_header(header: &StringRecord) -> Result<Self, SourceError> {
        if header.is_empty() {
            return Err(SourceError::EmptyInput);
        }
        Ok(Self {
            campaign_id: Self::position(header, COL_CAMPAIGN_ID)?,
            impressions: Self::position(header, COL_IMPRESSIONS)?,
            clicks: Self::position(header, COL_CLICKS)?,
            spend: Self::position(header, COL_SPEND)?,
            conversions: Self::position(header, COL_CONVERSIONS)?,
        })
    }

    fn position(header: &StringRecord, name: &'static str) -> Result<usize, SourceError> {
        header
            .iter()
            .position(|col| col.trim() == name)
            .ok_or(SourceError::MissingColumn(name))
    }
}
