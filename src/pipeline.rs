// One batch run: template -> input -> map -> reconcile -> export
use crate::export::{render, write_artifact};
use crate::mapper::Mapper;
use crate::model::{
    ConfigError, ExportError, HeaderTemplate, OutputRow, SourceError, SourceRecord, TableError,
};
use crate::parser::{TableFormat, read_header_row, read_rows};
use crate::reconciler::reconcile_all;
use crate::source::TableSource;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot load header template: {0}")]
    Template(String),
    #[error("cannot read input table: {0}")]
    Input(String),
    #[error("no data to export")]
    EmptyInput,
    #[error("cannot write output: {0}")]
    Export(#[from] ExportError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub rows: usize,
    pub columns: usize,
    pub output: PathBuf,
}

fn describe_load(err: impl std::fmt::Display, location: &str) -> String {
    format!("{} ({})", err, location)
}

/// Loads the header row of the template. Empty headers are kept so column
/// positions match the template exactly.
pub async fn load_template(source: &dyn TableSource) -> Result<HeaderTemplate, PipelineError> {
    let location = source.location();
    let format = TableFormat::from_location(location);
    let bytes = source
        .fetch()
        .await
        .map_err(|e: SourceError| PipelineError::Template(describe_load(e, location)))?;
    let headers = read_header_row(&bytes, format)
        .map_err(|e: TableError| PipelineError::Template(describe_load(e, location)))?;

    let template = HeaderTemplate::new(headers);
    info!("Template loaded ({} columns) from {}", template.len(), location);
    Ok(template)
}

/// Reads and normalizes every input row.
pub async fn load_input(source: &dyn TableSource) -> Result<Vec<SourceRecord>, PipelineError> {
    let location = source.location();
    let format = TableFormat::from_location(location);
    let bytes = source
        .fetch()
        .await
        .map_err(|e| PipelineError::Input(describe_load(e, location)))?;
    let rows = read_rows(&bytes, format)
        .map_err(|e| PipelineError::Input(describe_load(e, location)))?;

    info!("Input loaded ({} rows) from {}", rows.len(), location);
    Ok(rows.into_iter().map(SourceRecord::from_raw).collect())
}

/// Maps and reconciles each record. Rows never influence each other.
pub fn transform(
    template: &HeaderTemplate,
    records: &[SourceRecord],
    mapper: &dyn Mapper,
) -> Vec<OutputRow> {
    let targets: Vec<_> = records.iter().map(|r| mapper.map_record(r)).collect();
    reconcile_all(template, &targets)
}

pub async fn run(
    template_source: &dyn TableSource,
    input_source: &dyn TableSource,
    mapper: &dyn Mapper,
    format: TableFormat,
    output: &Path,
) -> Result<RunSummary, PipelineError> {
    let template = load_template(template_source).await?;
    let records = load_input(input_source).await?;
    if records.is_empty() {
        warn!("No rows in {}", input_source.location());
        return Err(PipelineError::EmptyInput);
    }

    let rows = transform(&template, &records, mapper);
    let bytes = render(&template, &rows, format)?;
    info!("Rendered {} rows as {:?}", rows.len(), format);
    write_artifact(output, &bytes).await?;

    Ok(RunSummary {
        rows: rows.len(),
        columns: template.len(),
        output: output.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::{CatalogMapper, DescriptionPools};

    struct MemorySource {
        location: String,
        bytes: Option<Vec<u8>>,
    }

    #[async_trait::async_trait]
    impl TableSource for MemorySource {
        async fn fetch(&self) -> Result<Vec<u8>, SourceError> {
            self.bytes.clone().ok_or(SourceError::InvalidResponse(404))
        }

        fn location(&self) -> &str {
            &self.location
        }
    }

    fn mem(location: &str, text: &str) -> MemorySource {
        MemorySource {
            location: location.into(),
            bytes: Some(text.as_bytes().to_vec()),
        }
    }

    fn mapper() -> CatalogMapper {
        CatalogMapper::new(DescriptionPools::default(), "img")
    }

    #[tokio::test]
    async fn template_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");
        let missing = MemorySource {
            location: "https://host/ONE.xlsx".into(),
            bytes: None,
        };
        let input = mem("two.csv", "Title\nx\n");
        let err = run(&missing, &input, &mapper(), TableFormat::Csv, &out)
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::Template(_)));
        assert!(err.to_string().contains("https://host/ONE.xlsx"));
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn unreadable_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.xlsx");
        let template = mem("one.csv", "Title\n");
        let input = mem("two.xlsx", "not a workbook");
        let err = run(&template, &input, &mapper(), TableFormat::Xlsx, &out)
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::Input(_)));
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn empty_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");
        let template = mem("one.csv", "Title\n");
        let input = mem("two.csv", "Title,Vendor\n");
        let err = run(&template, &input, &mapper(), TableFormat::Csv, &out)
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::EmptyInput));
        assert!(!out.exists());
    }

    #[test]
    fn config_errors_keep_their_message() {
        let err = crate::config::load_or_default(Some(Path::new("/nonexistent/cfg.json")))
            .map_err(PipelineError::from)
            .unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
        assert!(err.to_string().starts_with("cannot read config /nonexistent/cfg.json"));
    }

    #[tokio::test]
    async fn row_count_and_columns_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");
        let template = mem("one.csv", "Title,Vendor,Handle,Unknown\n");
        let input = mem(
            "two.csv",
            "Vendor,Type,Tên sản phẩm,Mã SKU\nFurla,Watches,co 38mm,FUR001\nGuess,Bags,tote,G1\n",
        );
        let summary = run(&template, &input, &mapper(), TableFormat::Csv, &out)
            .await
            .unwrap();
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.columns, 4);

        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            text,
            "Title,Vendor,Handle,Unknown\n\
             Đồng Hồ  Co 38mm,Furla,Furla-FUR001,\n\
             Tote,Guess,Guess-G1,\n"
        );
    }
}
