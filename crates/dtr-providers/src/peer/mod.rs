//! Peer registry clients
//!
//! HTTP implementation of the peer registry ports, following the registry
//! REST layout:
//!
//! | Lookup | Request |
//! |--------|---------|
//! | descriptor | `GET {base}/{collection}/{b64url(id)}` |
//! | nested page | `GET {base}/shell-descriptors/{b64url(aas)}/submodel-descriptors?limit&cursor` |
//! | nested descriptor | `GET {base}/shell-descriptors/{b64url(aas)}/submodel-descriptors/{b64url(sm)}` |

pub mod config;
pub mod http;
pub mod response;

pub use config::HttpClientConfig;
pub use http::HttpPeerRegistryClient;
pub use response::{PagedResponse, PagingMetadata, PeerResponseUtils};
