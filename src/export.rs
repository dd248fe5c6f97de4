//! CSV export of repository records

use crate::github::RepositoryRecord;
use anyhow::{Context, Result};
use std::path::Path;

/// Write records to a CSV file at `path`, overwriting any existing file
///
/// Emits a header row followed by one row per record in input order, UTF-8
/// encoded. Fields containing commas, quotes, or newlines are quoted per
/// standard CSV rules. Filesystem failures surface as errors; nothing is
/// retried.
pub fn write_csv(records: &[RepositoryRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file at {}", path.display()))?;

    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("Failed to write record for {}", record.full_name))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write CSV file at {}", path.display()))?;

    Ok(())
}
