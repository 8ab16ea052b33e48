use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;
use trivio_core as trivia;
use trivia::{CategoryDetail, CategoryId, CategorySummary, TriviaError, TriviaSource};

#[derive(Error, Debug)]
pub(crate) enum FetchError {
    #[error("request failed: {0}")]
    Net(#[from] gloo::net::Error),
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
}

impl From<FetchError> for TriviaError {
    fn from(err: FetchError) -> Self {
        TriviaError::Source(err.to_string())
    }
}

/// Trivia catalog served as JSON over HTTP.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpSource {
    base_url: String,
}

impl HttpSource {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: impl IntoIterator<Item = (&'static str, String)>,
    ) -> Result<T, FetchError> {
        let url = self.url(path);
        log::debug!("GET {}", url);

        let response = Request::get(&url).query(query).send().await?;
        if !response.ok() {
            return Err(FetchError::Status {
                url,
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }
}

impl TriviaSource for HttpSource {
    async fn catalog(&self, count: usize) -> trivia::Result<Vec<CategorySummary>> {
        Ok(self
            .get_json("categories", [("count", count.to_string())])
            .await?)
    }

    async fn category(&self, id: CategoryId) -> trivia::Result<CategoryDetail> {
        Ok(self.get_json("category", [("id", id.to_string())]).await?)
    }
}
