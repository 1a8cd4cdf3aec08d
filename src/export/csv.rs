use crate::models::interval::WorkInterval;
use csv::Writer;
use std::path::Path;

/// Write the intervals as CSV to the given file.
pub fn write_csv(path: &Path, intervals: &[WorkInterval]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id", "owner", "begin", "end", "days", "location", "status", "notes",
    ])?;

    for iv in intervals {
        wtr.write_record(&[
            iv.id.to_string(),
            iv.owner_id.clone(),
            iv.begin_str(),
            iv.end_str(),
            iv.days.to_string(),
            iv.location.clone(),
            iv.status.to_string(),
            iv.notes.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
