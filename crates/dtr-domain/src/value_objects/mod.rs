//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ShellDescriptor`] | location record of an asset administration shell |
//! | [`SubmodelDescriptor`] | location record of a submodel |
//! | [`PaginationRequest`] / [`PaginationResult`] | cursor paging |
//! | [`CursorCodec`] | wire form of cursors and path identifiers |
//! | [`DescriptorFilter`] | opaque listing predicate |

/// Cursor wire format
pub mod cursor;
/// Shell and submodel descriptors
pub mod descriptor;
/// Listing filters
pub mod filter;
/// Cursor pagination
pub mod pagination;

pub use cursor::{CursorCodec, encode_identifier};
pub use descriptor::{
    AssetKind, Descriptor, DescriptorKind, Endpoint, LangString, ProtocolInformation,
    SHELL_INTERFACE, SUBMODEL_INTERFACE, ShellDescriptor, SubmodelDescriptor,
};
pub use filter::{DescriptorFilter, ShellDescriptorFilter};
pub use pagination::{PaginationRequest, PaginationResult, paginate};
