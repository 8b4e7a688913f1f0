//! Storage Decorators
//!
//! Each decorator wraps an inner storage behind an `Arc` and implements the
//! same ports, generically for both registries. Shell decorators additionally
//! implement [`ShellSubmodelStorage`](dtr_domain::ports::ShellSubmodelStorage)
//! when the inner storage does.
//!
//! Decorators keep no mutable state of their own.

/// Wire cursor handling
pub mod cursor_encoding;
/// Change event emission
pub mod event_sending;
/// Peer registry fallback for point lookups
pub mod hierarchy;

pub use cursor_encoding::CursorEncodingStorage;
pub use event_sending::EventSendingStorage;
pub use hierarchy::HierarchicalStorage;
