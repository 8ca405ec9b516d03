use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

/// One row of the dashboard roster table: a flat projection of a user
/// for listing and export.
#[derive(Debug, Clone, Serialize)]
pub struct UserRow {
    pub username: String,
    pub display_name: String,
    pub skill_count: usize,
    /// Area titles the user has at least one skill in, sorted and
    /// joined with "; ".
    pub areas: String,
}

/// Writes the roster table as CSV with a header row.
pub fn write_csv<W: Write>(rows: &[UserRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
