use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;

use crate::settings::application::ports::outgoing::{CvFetchError, CvFileFetcher, FetchedFile};

/// Streams the stored CV from its public URL.
#[derive(Debug, Clone)]
pub struct HttpCvFetcher {
    client: reqwest::Client,
}

impl HttpCvFetcher {
    pub fn new() -> Result<Self, CvFetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CvFetchError::Transport(e.to_string()))?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CvFileFetcher for HttpCvFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedFile, CvFetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CvFetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CvFetchError::UpstreamStatus(status.as_u16()));
        }

        let content_length = response.content_length();
        let body = futures::stream::try_unfold(response, |mut response| async move {
            match response.chunk().await {
                Ok(Some(chunk)) => Ok(Some((chunk, response))),
                Ok(None) => Ok(None),
                Err(e) => Err(CvFetchError::Transport(e.to_string())),
            }
        })
        .boxed();

        Ok(FetchedFile {
            content_length,
            body,
        })
    }
}
