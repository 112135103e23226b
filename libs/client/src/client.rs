//! HTTP client for index operations.

use async_trait::async_trait;
use bunny_names::IndexName;
use reqwest::{RequestBuilder, StatusCode, Url};
use tracing::{debug, warn};

use crate::config::ConnectionSettings;
use crate::error::ClientError;
use crate::index::{create_body, Index};

/// Checks whether an index exists in the cluster.
#[async_trait]
pub trait IndexExists: Send + Sync {
    /// Returns true if the index exists.
    async fn exists(&self, name: &IndexName) -> Result<bool, ClientError>;

    /// Validates `name` and checks whether the index exists.
    ///
    /// An invalid name fails with [`ClientError::InvalidName`] before any
    /// request is made.
    async fn exists_raw(&self, name: &str) -> Result<bool, ClientError> {
        let name = IndexName::parse(name)?;
        self.exists(&name).await
    }

    /// Returns true if the index described by `index` exists.
    async fn index_exists(&self, index: &dyn Index) -> Result<bool, ClientError> {
        self.exists(index.name()).await
    }
}

/// Client for a search cluster's REST API.
#[derive(Debug, Clone)]
pub struct ElasticClient {
    client: reqwest::Client,
    base_url: Url,
    credentials: Option<(String, Option<String>)>,
}

impl ElasticClient {
    /// Create a new client from connection settings.
    pub fn new(settings: &ConnectionSettings) -> Result<Self, ClientError> {
        let base_url = Url::parse(&settings.url).map_err(|e| ClientError::InvalidUrl {
            url: settings.url.clone(),
            message: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl {
                url: settings.url.clone(),
                message: "URL cannot be used as a base".to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()?;

        let credentials = settings
            .username
            .clone()
            .map(|username| (username, settings.password.clone()));

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the URL of an index, with the name as a single path segment.
    fn index_url(&self, name: &IndexName) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(name.as_str());
        }
        url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some((username, password)) => request.basic_auth(username, password.as_ref()),
            None => request,
        }
    }

    /// Create an index with its settings, mappings and aliases.
    pub async fn create_index(&self, index: &dyn Index) -> Result<(), ClientError> {
        let name = index.name();
        let url = self.index_url(name);
        debug!(index = %name, %url, "creating index");

        let body = create_body(index)?;
        let response = self
            .authorize(self.client.put(url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(index = %name, status = status.as_u16(), "cluster rejected index creation");
        Err(ClientError::Rejected {
            index: name.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl IndexExists for ElasticClient {
    async fn exists(&self, name: &IndexName) -> Result<bool, ClientError> {
        let url = self.index_url(name);
        debug!(index = %name, %url, "checking index existence");

        let response = self.authorize(self.client.head(url)).send().await?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => {
                warn!(index = %name, status = status.as_u16(), "unexpected status from cluster");
                Err(ClientError::UnexpectedStatus {
                    index: name.to_string(),
                    status: status.as_u16(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> ElasticClient {
        ElasticClient::new(&ConnectionSettings::new(url)).unwrap()
    }

    fn name(s: &str) -> IndexName {
        IndexName::parse(s).unwrap()
    }

    #[test]
    fn test_index_url_building() {
        let client = client("http://localhost:9200");
        assert_eq!(
            client.index_url(&name("orders")).as_str(),
            "http://localhost:9200/orders"
        );
    }

    #[test]
    fn test_index_url_keeps_base_path() {
        let client = client("https://proxy.example.com/search/");
        assert_eq!(
            client.index_url(&name("orders")).as_str(),
            "https://proxy.example.com/search/orders"
        );
    }

    #[test]
    fn test_index_url_encodes_name_as_single_segment() {
        let client = client("http://localhost:9200");
        assert_eq!(
            client.index_url(&name("50%off")).as_str(),
            "http://localhost:9200/50%25off"
        );
    }

    #[test]
    fn test_rejects_unparseable_url() {
        let err = ElasticClient::new(&ConnectionSettings::new("not a url")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
    }

    #[test]
    fn test_rejects_non_base_url() {
        let err = ElasticClient::new(&ConnectionSettings::new("mailto:ops@example.com")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
    }
}
