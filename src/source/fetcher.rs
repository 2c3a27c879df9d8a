use crate::model::SourceError;
use crate::source::traits::TableSource;
use reqwest::Client;
use std::path::PathBuf;
use tracing::info;

/// Reads a table from the local filesystem.
pub struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

#[async_trait::async_trait]
impl TableSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        info!("Reading {}", self.location);
        Ok(tokio::fs::read(&self.path).await?)
    }

    fn location(&self) -> &str {
        &self.location
    }
}

/// Downloads a table over HTTP(S).
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(concat!("catalog-filler/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SourceError::HttpError(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait::async_trait]
impl TableSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        info!("Downloading {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::InvalidResponse(response.status().as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::HttpError(e.to_string()))?;
        Ok(body.to_vec())
    }

    fn location(&self) -> &str {
        &self.url
    }
}

/// URLs go through [`HttpSource`], anything else is a file path.
pub fn source_for(location: &str) -> Result<Box<dyn TableSource>, SourceError> {
    let lower = location.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}
