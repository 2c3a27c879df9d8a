use crate::model::{ExportError, HeaderTemplate, OutputRow};
use crate::parser::TableFormat;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tracing::info;

pub const SHEET_NAME: &str = "Sheet1";

/// Renders the whole table in memory so a failure never leaves a partial file.
pub fn render(
    template: &HeaderTemplate,
    rows: &[OutputRow],
    format: TableFormat,
) -> Result<Vec<u8>, ExportError> {
    match format {
        TableFormat::Csv => render_csv(template, rows),
        TableFormat::Xlsx => render_xlsx(template, rows),
    }
}

fn render_csv(template: &HeaderTemplate, rows: &[OutputRow]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(template.headers())?;
    for row in rows {
        writer.write_record(row.values())?;
    }
    writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}

fn render_xlsx(template: &HeaderTemplate, rows: &[OutputRow]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in template.headers().enumerate() {
        sheet.write_string(0, col as u16, header)?;
    }
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, value) in row.values().enumerate() {
            if !value.is_empty() {
                sheet.write_string(r, col as u16, value)?;
            }
        }
    }
    Ok(workbook.save_to_buffer()?)
}

/// Writes a rendered artifact in one step.
pub async fn write_artifact(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    tokio::fs::write(path, bytes).await?;
    info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{read_header_row, read_rows};

    fn rows() -> (HeaderTemplate, Vec<OutputRow>) {
        let template = HeaderTemplate::new(["Title", "Body (HTML)", "Vendor"]);
        let row = OutputRow {
            cells: vec![
                ("Title".into(), "Đồng Hồ  Co 38mm".into()),
                ("Body (HTML)".into(), "<p>a, \"b\"</p>\n<ul>\n</ul>".into()),
                ("Vendor".into(), String::new()),
            ],
        };
        (template, vec![row])
    }

    #[test]
    fn csv_quotes_commas_quotes_and_newlines() {
        let (template, rows) = rows();
        let bytes = render(&template, &rows, TableFormat::Csv).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "Title,Body (HTML),Vendor\nĐồng Hồ  Co 38mm,\"<p>a, \"\"b\"\"</p>\n<ul>\n</ul>\",\n"
        );
    }

    #[test]
    fn xlsx_reads_back_through_workbook_decoder() {
        let (template, rows) = rows();
        let bytes = render(&template, &rows, TableFormat::Xlsx).unwrap();
        assert!(bytes.starts_with(b"PK"));

        let headers = read_header_row(&bytes, TableFormat::Xlsx).unwrap();
        assert_eq!(headers, vec!["Title", "Body (HTML)", "Vendor"]);
        let back = read_rows(&bytes, TableFormat::Xlsx).unwrap();
        assert_eq!(back[0][0].1, "Đồng Hồ  Co 38mm");
        assert_eq!(back[0][2].1, "");
    }

    #[test]
    fn header_only_table() {
        let template = HeaderTemplate::new(["Title"]);
        let bytes = render(&template, &[], TableFormat::Csv).unwrap();
        assert_eq!(bytes, b"Title\n");
    }
}
