//! Workbook construction and serialization.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use super::MAX_SHEET_ROWS;
use super::rows::{COLUMN_WIDTHS, HEADERS, SheetRow};
use crate::config::XlsxSettings;
use crate::error::{KitacalError, KitacalResult};
use crate::event::CalendarData;

/// Build an in-memory workbook with a single named sheet.
///
/// The header row is bold and frozen. Empty cells are left blank.
pub fn build_workbook(rows: &[SheetRow], sheet_name: &str) -> KitacalResult<Workbook> {
    if rows.len() >= MAX_SHEET_ROWS {
        return Err(KitacalError::TooManyRows(rows.len()));
    }

    let mut workbook = Workbook::new();
    let fmt_header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;
    worksheet.set_freeze_panes(1, 0)?;

    for (col, (header, width)) in (0u16..).zip(HEADERS.iter().zip(COLUMN_WIDTHS)) {
        worksheet.write_string_with_format(0, col, *header, &fmt_header)?;
        worksheet.set_column_width(col, width)?;
    }

    for (row_num, row) in (1u32..).zip(rows) {
        for (col, value) in (0u16..).zip(row.cells()) {
            if !value.is_empty() {
                worksheet.write_string(row_num, col, value)?;
            }
        }
    }

    Ok(workbook)
}

/// Map every event to a row and write the workbook to `path` in one call.
///
/// Returns the number of data rows written.
pub fn write_xlsx(data: &CalendarData, path: &Path, settings: &XlsxSettings) -> KitacalResult<usize> {
    let rows: Vec<SheetRow> = data.events.iter().map(SheetRow::from_event).collect();

    let mut workbook = build_workbook(&rows, &settings.sheet_name)?;
    let buffer = workbook.save_to_buffer()?;

    std::fs::write(path, buffer).map_err(|source| KitacalError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Wrote {} rows to {}", rows.len(), path.display());

    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn read_part(buffer: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(buffer)).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut xml = String::new();
        part.read_to_string(&mut xml).unwrap();
        xml
    }

    fn shared_strings(xml: &str) -> Vec<String> {
        xml.split("<si>")
            .skip(1)
            .map(|si| {
                let start = si.find("<t").and_then(|i| si[i..].find('>').map(|j| i + j + 1));
                let end = si.find("</t>");
                match (start, end) {
                    (Some(start), Some(end)) => si[start..end].to_string(),
                    _ => String::new(),
                }
            })
            .collect()
    }

    /// Text of a shared-string cell such as "A1", if the cell exists.
    fn cell_text(sheet: &str, strings: &[String], cell_ref: &str) -> Option<String> {
        let start = sheet.find(&format!("<c r=\"{cell_ref}\""))?;
        let cell = &sheet[start..];
        let cell = &cell[..cell.find("</c>")?];
        let value = &cell[cell.find("<v>")? + 3..cell.find("</v>")?];
        strings.get(value.parse::<usize>().ok()?).cloned()
    }

    #[test]
    fn test_build_workbook_produces_xlsx_bytes() {
        let rows: Vec<SheetRow> = CalendarData::sample()
            .events
            .iter()
            .map(SheetRow::from_event)
            .collect();

        let mut workbook = build_workbook(&rows, "Kindergarten Calendar").unwrap();
        let buffer = workbook.save_to_buffer().unwrap();

        // XLSX is a zip container
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_invalid_sheet_name_is_rejected() {
        let Err(err) = build_workbook(&[], "Termine [2025]") else {
            panic!("Sheet names with brackets should be rejected");
        };
        assert!(matches!(err, KitacalError::Xlsx(_)), "got {err:?}");
    }

    #[test]
    fn test_workbook_contents_read_back() {
        let mut data = CalendarData::sample();
        let mut meeting = data.events[0].clone();
        meeting.name = "Elternabend".to_string();
        meeting.start = "2025-02-10T19:30:00".to_string();
        meeting.end = "2025-02-10T21:00:00".to_string();
        meeting.event_type = "meeting".into();
        meeting.category = "parents".to_string();
        data.events.push(meeting);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendar.xlsx");
        write_xlsx(&data, &path, &XlsxSettings::default()).unwrap();
        let buffer = std::fs::read(&path).unwrap();

        let workbook = read_part(&buffer, "xl/workbook.xml");
        assert!(workbook.contains(r#"name="Kindergarten Calendar""#), "{workbook}");

        let sheet = read_part(&buffer, "xl/worksheets/sheet1.xml");
        let strings = shared_strings(&read_part(&buffer, "xl/sharedStrings.xml"));
        let cell = |cell_ref: &str| cell_text(&sheet, &strings, cell_ref);

        let header: Vec<Option<String>> = ["A1", "B1", "C1", "D1", "E1", "F1", "G1", "H1"]
            .iter()
            .map(|c| cell(*c))
            .collect();
        let expected: Vec<Option<String>> = HEADERS.iter().map(|h| Some(h.to_string())).collect();
        assert_eq!(header, expected);

        // Date-only event: no time cells at all
        assert_eq!(cell("A2").as_deref(), Some("Weihnachtsferien"));
        assert_eq!(cell("C2").as_deref(), Some("2025-01-03"));
        assert_eq!(cell("D2").as_deref(), Some("2025-01-03"));
        assert!(!sheet.contains(r#"<c r="E2""#), "{sheet}");
        assert!(!sheet.contains(r#"<c r="F2""#), "{sheet}");
        assert_eq!(cell("G2").as_deref(), Some("closure"));
        assert_eq!(cell("H2").as_deref(), Some("holiday"));

        assert_eq!(cell("A3").as_deref(), Some("Elternabend"));
        assert_eq!(cell("C3").as_deref(), Some("2025-02-10"));
        assert_eq!(cell("E3").as_deref(), Some("19:30"));
        assert_eq!(cell("F3").as_deref(), Some("21:00"));
        assert_eq!(cell("G3").as_deref(), Some("meeting"));
        assert!(!sheet.contains(r#"<c r="A4""#));
    }

    #[test]
    fn test_write_xlsx_row_count_matches_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendar.xlsx");

        let mut data = CalendarData::sample();
        let mut second = data.events[0].clone();
        second.start = "2025-02-10T19:30:00".to_string();
        second.end = "2025-02-10T21:00:00".to_string();
        data.events.push(second);

        let count = write_xlsx(&data, &path, &XlsxSettings::default()).unwrap();

        assert_eq!(count, data.events.len());
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_write_xlsx_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("calendar.xlsx");

        let err = write_xlsx(&CalendarData::sample(), &path, &XlsxSettings::default()).unwrap_err();
        assert!(matches!(err, KitacalError::WriteOutput { .. }), "got {err:?}");
    }
}
