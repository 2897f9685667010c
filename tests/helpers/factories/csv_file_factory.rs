use std::fs;
use std::path::{Path, PathBuf};

/// Writes an input CSV into a test directory and hands back its path.
pub struct CsvFileFactory {
    header: String,
    rows: Vec<String>,
}

impl CsvFileFactory {
    pub fn new() -> Self {
        Self {
            header: "campaign_id,impressions,clicks,spend,conversions".to_string(),
            rows: Vec::new(),
        }
    }

    pub fn with_header(mut self, header: &str) -> Self {
        self.header = header.to_string();
        self
    }

    pub fn with_row(mut self, row: &str) -> Self {
        self.rows.push(row.to_string());
        self
    }

    pub fn create_in(self, dir: &Path) -> PathBuf {
        let mut contents = self.header;
        for row in &self.rows {
            contents.push('\n');
            contents.push_str(row);
        }
        contents.push('\n');

        let path = dir.join("input.csv");
        fs::write(&path, contents).unwrap();
        path
    }
}
