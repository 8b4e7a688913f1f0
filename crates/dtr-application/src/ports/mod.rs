//! Application ports
//!
//! - **registry** - linkme provider slices and name based resolution

pub mod registry;
