use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};

use crate::config::OUTPUT_SHEET;
use crate::error::ReportError;
use crate::report::table::{ReportCell, ReportTable};
use crate::report::ReportRenderer;

/// Header sits on the third sheet row, data right below it.
const HEADER_ROW: u32 = 2;
const FIRST_DATA_ROW: u32 = HEADER_ROW + 1;

/// Cell styles used by the report sheet.
#[derive(Clone, Debug)]
pub struct ReportFormats {
    pub title: Format,
    pub header: Format,
    pub data: Format,
    /// Data style with an orange fill, for `MISSING` placeholders.
    pub missing: Format,
    pub remark: Format,
}

impl ReportFormats {
    pub fn new() -> Self {
        let data = Format::new()
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap()
            .set_font_size(8)
            .set_border(FormatBorder::Thin);
        Self {
            title: Format::new()
                .set_bold()
                .set_font_color(Color::RGB(0xE26B0A))
                .set_font_size(14),
            header: Format::new()
                .set_bold()
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_font_size(9)
                .set_text_wrap()
                .set_background_color(Color::RGB(0xD9D9D9))
                .set_border(FormatBorder::Thin),
            missing: data.clone().set_background_color(Color::RGB(0xF79646)),
            data,
            remark: Format::new().set_bold(),
        }
    }

    pub fn for_cell(&self, cell: &ReportCell) -> &Format {
        if cell.missing {
            &self.missing
        } else {
            &self.data
        }
    }
}

impl Default for ReportFormats {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes the report as a single-sheet `.xlsx` workbook.
#[derive(Clone, Copy, Debug, Default)]
pub struct XlsxRenderer;

impl XlsxRenderer {
    /// Render into memory.
    pub fn render_to_buffer(&self, table: &ReportTable) -> Result<Vec<u8>, ReportError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(OUTPUT_SHEET)?;

        let formats = ReportFormats::new();

        worksheet.write_string_with_format(0, 0, &table.title, &formats.title)?;

        for (col, column) in table.columns.iter().enumerate() {
            let col = col as u16;
            worksheet.write_string_with_format(HEADER_ROW, col, &column.label, &formats.header)?;
            worksheet.set_column_width(col, column.width)?;
        }

        for (row_idx, row) in table.rows.iter().enumerate() {
            let row_num = FIRST_DATA_ROW + row_idx as u32;
            for (col, cell) in row.iter().enumerate() {
                let format = formats.for_cell(cell);
                worksheet.write_string_with_format(row_num, col as u16, &cell.text, format)?;
            }
        }

        let remark_row = FIRST_DATA_ROW + table.rows.len() as u32 + 1;
        worksheet.write_string_with_format(remark_row, 0, &table.remark_label, &formats.remark)?;
        worksheet.write_string(remark_row + 1, 0, &table.remark)?;

        Ok(workbook.save_to_buffer()?)
    }
}

impl ReportRenderer for XlsxRenderer {
    /// Write to a temporary file beside `path`, then rename it into place so a
    /// failed run never leaves a truncated workbook under the final name.
    fn render(&self, table: &ReportTable, path: &Path) -> Result<(), ReportError> {
        let bytes = self.render_to_buffer(table)?;

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut staged = tempfile::Builder::new()
            .prefix(".dbscript-")
            .suffix(".tmp")
            .tempfile_in(dir)?;
        staged.write_all(&bytes)?;
        staged.as_file().sync_all()?;
        staged.persist(path)?;

        tracing::info!(path = %path.display(), rows = table.rows.len(), "Report written");
        Ok(())
    }
}
