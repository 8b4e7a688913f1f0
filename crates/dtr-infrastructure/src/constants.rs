//! Infrastructure layer constants
//!
//! Protocol constants such as page limits live in `dtr_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "dtr.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "dtr";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "DTR";

/// Separator between nested keys in environment variables (`DTR_EVENTS__SINK`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "DTR_LOG";

/// File stem used when the log path has none
pub const LOG_FILE_STEM: &str = "dtr";

// ============================================================================
// STORAGE CONSTANTS
// ============================================================================

/// Default base storage backend
pub const DEFAULT_STORAGE_BACKEND: &str = "memory";

// ============================================================================
// HIERARCHY CONSTANTS
// ============================================================================

/// Default peer request timeout in milliseconds
pub const DEFAULT_PEER_TIMEOUT_MS: u64 = 5000;

// ============================================================================
// EVENT CONSTANTS
// ============================================================================

/// Default event sink
pub const DEFAULT_EVENT_SINK: &str = "log";

/// Sink used when events are disabled
pub const DISABLED_EVENT_SINK: &str = "null";

/// Default capacity of the dispatch queue
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Default enqueue timeout in milliseconds
pub const DEFAULT_ENQUEUE_TIMEOUT_MS: u64 = 500;

/// Default broadcast channel capacity
pub const DEFAULT_BROADCAST_CAPACITY: usize = 1024;
