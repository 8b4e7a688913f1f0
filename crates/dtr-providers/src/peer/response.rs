//! Peer response handling
//!
//! Status mapping:
//!
//! | Status | Outcome |
//! |--------|---------|
//! | 2xx | body decoded as JSON |
//! | 404 | [`PeerError::NotFound`] |
//! | anything else | [`PeerError::Status`] with a truncated body |

use crate::constants::PEER_ERROR_BODY_LIMIT;
use dtr_domain::ports::{PeerError, PeerResult};
use reqwest::{Response, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Paging block of a paged registry response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PagingMetadata {
    /// Wire cursor of the next page
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Paged registry response
#[derive(Debug, Clone, Deserialize)]
pub struct PagedResponse<T> {
    #[serde(default, alias = "pagingMetadata")]
    pub paging_metadata: PagingMetadata,
    #[serde(default = "Vec::new")]
    pub result: Vec<T>,
}

/// Utilities for processing peer registry responses
pub struct PeerResponseUtils;

impl PeerResponseUtils {
    /// Check the status and decode the JSON body
    pub async fn check_and_parse<T: DeserializeOwned>(response: Response, url: &Url) -> PeerResult<T> {
        let status = response.status();

        if !status.is_success() {
            if status == StatusCode::NOT_FOUND {
                return Err(PeerError::NotFound {
                    url: url.to_string(),
                });
            }
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PeerError::Status {
                code: status.as_u16(),
                body: truncate(body),
            });
        }

        let bytes = response.bytes().await.map_err(PeerError::transport)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| PeerError::decode(format!("{url}: {e}")))
    }
}

fn truncate(mut body: String) -> String {
    if body.len() > PEER_ERROR_BODY_LIMIT {
        let mut cut = PEER_ERROR_BODY_LIMIT;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
    }
    body
}
