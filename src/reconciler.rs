// Aligns target records with the externally supplied header template
use crate::model::{HeaderTemplate, OutputRow, TargetRecord};

/// Builds one output row in template order. Each cell is looked up by the
/// normalized header, then by the header text as written, then left empty.
pub fn reconcile(template: &HeaderTemplate, record: &TargetRecord) -> OutputRow {
    let cells = template
        .columns()
        .iter()
        .map(|(original, normalized)| {
            let value = record
                .get(normalized)
                .or_else(|| record.get(original))
                .unwrap_or("");
            (original.clone(), value.to_string())
        })
        .collect();
    OutputRow { cells }
}

pub fn reconcile_all(template: &HeaderTemplate, records: &[TargetRecord]) -> Vec<OutputRow> {
    records.iter().map(|r| reconcile(template, r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SourceRecord;

    fn record() -> TargetRecord {
        let mut t = TargetRecord {
            title: "Đồng Hồ  Co 38mm".into(),
            vendor: "Furla".into(),
            handle: "Furla-FUR001".into(),
            ..Default::default()
        };
        t.passthrough.insert("barcode".into(), "raw".into());
        t.absorb_passthrough(&SourceRecord::from_raw(vec![(
            "Ghi chú".into(),
            "giao nhanh".into(),
        )]));
        t
    }

    #[test]
    fn keeps_template_order_and_original_headers() {
        let template = HeaderTemplate::new(["Handle", " title ", "Vendor"]);
        let row = reconcile(&template, &record());
        assert_eq!(
            row.cells,
            vec![
                ("Handle".to_string(), "Furla-FUR001".to_string()),
                ("title".to_string(), "Đồng Hồ  Co 38mm".to_string()),
                ("Vendor".to_string(), "Furla".to_string()),
            ]
        );
    }

    #[test]
    fn unknown_headers_are_empty() {
        let template = HeaderTemplate::new(["Title", "Option1 Name"]);
        let row = reconcile(&template, &record());
        assert_eq!(row.get("Option1 Name"), Some(""));
    }

    #[test]
    fn passthrough_and_literal_header_fallback() {
        let template = HeaderTemplate::new(["ghi chú", "barcode"]);
        let row = reconcile(&template, &record());
        assert_eq!(row.get("ghi chú"), Some("giao nhanh"));
        // only reachable through the header text as written
        assert_eq!(row.get("barcode"), Some("raw"));
    }

    #[test]
    fn every_row_has_every_column() {
        let template = HeaderTemplate::new(["Title", "Vendor", "Handle", "Status"]);
        let rows = reconcile_all(&template, &[record(), TargetRecord::default()]);
        assert_eq!(rows.len(), 2);
        for row in rows {
            let headers: Vec<&str> = row.cells.iter().map(|(h, _)| h.as_str()).collect();
            assert_eq!(headers, vec!["Title", "Vendor", "Handle", "Status"]);
            assert_eq!(row.get("Status"), Some("draft"));
        }
    }
}
