use std::path::{Path, PathBuf};

use payroll_core::{DeskReport, COLUMN_HEADERS, COLUMN_WIDTHS};
use payroll_logging::payroll_info;
use rust_xlsxwriter::{Color, Format, Workbook, XlsxError};
use thiserror::Error;

use crate::filename::{report_filename, sheet_names};
use crate::persist::{AtomicFileWriter, PersistError};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("workbook error: {0}")]
    Xlsx(#[from] XlsxError),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

const TITLE_ROW: u32 = 0;
const HEADER_ROW: u32 = 1;
const FIRST_DATA_ROW: u32 = 2;

/// Serializes the report to xlsx bytes, one worksheet per writer.
pub fn render_workbook(report: &DeskReport) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();
    let text = Format::new().set_font_size(12).set_font_color(Color::Black);
    let money = text.clone().set_num_format("0.00");

    let names = sheet_names(report.sheets.iter().map(|sheet| sheet.writer.as_str()));
    for (sheet, name) in report.sheets.iter().zip(names) {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name.as_str())?;
        for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
            worksheet.set_column_width(col as u16, *width)?;
        }

        worksheet.write_string_with_format(TITLE_ROW, 0, sheet.title.as_str(), &text)?;
        for (col, header) in COLUMN_HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(HEADER_ROW, col as u16, *header, &text)?;
        }

        let mut row = FIRST_DATA_ROW;
        for entry in &sheet.rows {
            worksheet.write_string_with_format(row, 0, entry.date.as_str(), &text)?;
            worksheet.write_string_with_format(row, 1, entry.headline.as_str(), &text)?;
            worksheet.write_number_with_format(row, 2, entry.characters as f64, &text)?;
            worksheet.write_number_with_format(row, 3, entry.pay.as_dollars(), &money)?;
            row += 1;
        }
        worksheet.write_number_with_format(row, 3, sheet.total.as_dollars(), &money)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Renders and saves the desk's workbook into `output_dir`.
pub fn write_report(report: &DeskReport, output_dir: &Path) -> Result<PathBuf, ReportError> {
    let bytes = render_workbook(report)?;
    let writer = AtomicFileWriter::new(output_dir.to_path_buf());
    let path = writer.write(&report_filename(report), &bytes)?;
    payroll_info!(
        "Wrote {} sheets for {} desk to {:?}",
        report.sheets.len(),
        report.desk,
        path
    );
    Ok(path)
}
