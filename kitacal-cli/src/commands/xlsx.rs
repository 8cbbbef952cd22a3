use std::path::Path;

use anyhow::{Context, Result};
use kitacal_core::xlsx::write_xlsx;
use kitacal_core::{CalendarData, XlsxSettings};
use owo_colors::OwoColorize;

use crate::render::pluralize;

/// Export the calendar as a spreadsheet. When the input cannot be read the
/// built-in sample data is exported instead.
pub fn run(input: &Path, output: &Path, settings: &XlsxSettings) -> Result<()> {
    let (data, used_sample) = match CalendarData::load(input) {
        Ok(data) => (data, false),
        Err(e) => {
            log::warn!("Error reading JSON file: {e}");
            (CalendarData::sample(), true)
        }
    };

    let rows = write_xlsx(&data, output, settings).context("Error processing calendar data")?;

    println!(
        "{} {} {}",
        "Excel file has been created:".green(),
        output.display(),
        format!("({rows} {})", pluralize("row", rows)).dimmed()
    );
    if used_sample {
        println!("{}", "Used sample data as JSON file could not be read".yellow());
    }

    Ok(())
}
