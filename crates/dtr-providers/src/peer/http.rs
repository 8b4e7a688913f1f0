//! HTTP peer registry client

use super::config::HttpClientConfig;
use super::response::{PagedResponse, PeerResponseUtils};
use async_trait::async_trait;
use dtr_domain::constants::{NESTED_SUBMODEL_PATH, QUERY_CURSOR, QUERY_LIMIT};
use dtr_domain::error::{Error, Result};
use dtr_domain::ports::{PeerError, PeerRegistryClient, PeerResult, ShellPeerRegistryClient};
use dtr_domain::value_objects::{
    CursorCodec, Descriptor, DescriptorKind, PaginationRequest, PaginationResult,
    SubmodelDescriptor, encode_identifier,
};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Peer registry client speaking the registry REST layout
#[derive(Debug, Clone)]
pub struct HttpPeerRegistryClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpPeerRegistryClient {
    /// Build a client from configuration
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(config.max_idle_per_host)
            .pool_idle_timeout(config.idle_timeout)
            .tcp_keepalive(config.keepalive)
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::configuration_with_source("Failed to create HTTP client", e))?;
        Ok(Self { client, config })
    }

    /// Get the configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    fn url(base_url: &str, segments: &[&str]) -> PeerResult<Url> {
        let mut raw = base_url.trim_end_matches('/').to_string();
        for segment in segments {
            raw.push('/');
            raw.push_str(segment);
        }
        Url::parse(&raw).map_err(PeerError::transport)
    }

    fn descriptor_url(base_url: &str, kind: DescriptorKind, id: &str) -> PeerResult<Url> {
        Self::url(base_url, &[kind.collection_path(), &encode_identifier(id)])
    }

    fn nested_url(base_url: &str, shell_id: &str) -> PeerResult<Url> {
        Self::url(
            base_url,
            &[
                DescriptorKind::Shell.collection_path(),
                &encode_identifier(shell_id),
                NESTED_SUBMODEL_PATH,
            ],
        )
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> PeerResult<T> {
        debug!(url = %url, "Peer registry request");
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(PeerError::transport)?;
        PeerResponseUtils::check_and_parse(response, &url).await
    }
}

#[async_trait]
impl<D: Descriptor> PeerRegistryClient<D> for HttpPeerRegistryClient {
    async fn get_descriptor_by_id(&self, base_url: &str, id: &str) -> PeerResult<D> {
        let url = Self::descriptor_url(base_url, D::KIND, id)?;
        self.fetch(url).await
    }
}

#[async_trait]
impl ShellPeerRegistryClient for HttpPeerRegistryClient {
    async fn get_all_submodel_descriptors(
        &self,
        base_url: &str,
        shell_id: &str,
        request: &PaginationRequest,
    ) -> PeerResult<PaginationResult<SubmodelDescriptor>> {
        let mut url = Self::nested_url(base_url, shell_id)?;
        {
            let mut query = url.query_pairs_mut();
            if request.limit > 0 {
                query.append_pair(QUERY_LIMIT, &request.limit.to_string());
            }
            if let Some(cursor) = request.cursor.as_deref() {
                query.append_pair(QUERY_CURSOR, &CursorCodec::encode(cursor));
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }

        let page: PagedResponse<SubmodelDescriptor> = self.fetch(url).await?;
        let cursor = page
            .paging_metadata
            .cursor
            .map(|wire| {
                CursorCodec::decode(&wire)
                    .map_err(|_| PeerError::decode(format!("peer returned undecodable cursor '{wire}'")))
            })
            .transpose()?;
        Ok(PaginationResult::new(page.result, cursor))
    }

    async fn get_submodel_descriptor_by_id(
        &self,
        base_url: &str,
        shell_id: &str,
        submodel_id: &str,
    ) -> PeerResult<SubmodelDescriptor> {
        let mut url = Self::nested_url(base_url, shell_id)?;
        url.path_segments_mut()
            .map_err(|()| PeerError::decode(format!("peer base url '{base_url}' cannot hold a path")))?
            .push(&encode_identifier(submodel_id));
        self.fetch(url).await
    }
}

