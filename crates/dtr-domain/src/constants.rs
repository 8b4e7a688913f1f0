//! Domain layer constants

// ============================================================================
// PAGINATION CONSTANTS
// ============================================================================

/// Page size applied by callers that do not pass a limit
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

// ============================================================================
// REGISTRY REST LAYOUT
// ============================================================================

/// Query parameter carrying the page size
pub const QUERY_LIMIT: &str = "limit";

/// Query parameter carrying the wire cursor
pub const QUERY_CURSOR: &str = "cursor";

/// Nested collection below a shell descriptor
pub const NESTED_SUBMODEL_PATH: &str = "submodel-descriptors";
