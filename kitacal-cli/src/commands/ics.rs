use std::path::Path;

use anyhow::{Context, Result};
use kitacal_core::ics::write_ics;
use kitacal_core::{CalendarData, CalendarSummary, IcsSettings};
use owo_colors::OwoColorize;

use crate::render::Render;

/// Generate the subscription calendar. Any read or parse failure aborts
/// before the output file is touched.
pub fn run(input: &Path, output: &Path, settings: &IcsSettings) -> Result<()> {
    let data = CalendarData::load(input).context("Error reading JSON file")?;

    write_ics(&data, output, settings, chrono::Utc::now())
        .context("Error generating calendar")?;

    println!(
        "{} {}",
        "Calendar subscription file has been generated:".green(),
        output.display()
    );
    println!();
    println!("{}", CalendarSummary::from_data(&data).render());

    Ok(())
}
