//! Spreadsheet export of the loaded profiles.
//!
//! Only the top-level fields go into the sheet; experience, education and
//! evaluation stay on the page.

use common::Profile;
use rust_xlsxwriter::{Workbook, XlsxError};
use thiserror::Error;

pub const SHEET_NAME: &str = "Profiles";
pub const FILE_NAME: &str = "profiles.xlsx";
pub const CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const COLUMNS: [&str; 4] = ["name", "profile_url", "title", "location"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no profiles to export")]
    Empty,
    #[error(transparent)]
    Workbook(#[from] XlsxError),
}

/// One sheet row, in `COLUMNS` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub name: String,
    pub profile_url: String,
    pub title: String,
    pub location: String,
}

impl From<&Profile> for ExportRow {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone().unwrap_or_default(),
            profile_url: profile.profile_url.clone().unwrap_or_default(),
            title: profile.title.clone().unwrap_or_default(),
            location: profile.location.clone().unwrap_or_default(),
        }
    }
}

impl ExportRow {
    fn cells(&self) -> [&str; 4] {
        [&self.name, &self.profile_url, &self.title, &self.location]
    }
}

/// Longest string Excel accepts in a single cell, in characters.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Cuts `value` down to what fits in one cell.
fn fit_cell(value: &str) -> &str {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => {
            tracing::warn!(chars = value.chars().count(), "Truncating oversized cell");
            &value[..end]
        }
        None => value,
    }
}

/// Builds the xlsx file in memory: a header row, then one row per profile.
pub fn build_workbook(profiles: &[Profile]) -> Result<Vec<u8>, ExportError> {
    if profiles.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    // Header row names the columns
    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    // One row per profile, below the header
    for (i, profile) in profiles.iter().enumerate() {
        let row = ExportRow::from(profile);
        for (col, value) in row.cells().iter().enumerate() {
            worksheet.write_string(i as u32 + 1, col as u16, fit_cell(value))?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
