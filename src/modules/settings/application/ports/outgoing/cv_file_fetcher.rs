use async_trait::async_trait;
use actix_web::web::Bytes;
use futures::stream::BoxStream;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CvFetchError {
    #[error("Failed to reach file storage: {0}")]
    Transport(String),

    #[error("File storage answered with status {0}")]
    UpstreamStatus(u16),
}

pub type ByteStream = BoxStream<'static, Result<Bytes, CvFetchError>>;

pub struct FetchedFile {
    /// Forwarded to the client when the upstream declares it.
    pub content_length: Option<u64>,
    pub body: ByteStream,
}

impl std::fmt::Debug for FetchedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchedFile")
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Pulls a stored file from its public URL without buffering it.
#[async_trait]
pub trait CvFileFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedFile, CvFetchError>;
}
