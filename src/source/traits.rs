use crate::model::SourceError;

/// Somewhere a table's raw bytes can be loaded from, in one shot.
#[async_trait::async_trait]
pub trait TableSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>, SourceError>;

    /// Path or URL, for status messages and format detection.
    fn location(&self) -> &str;
}
