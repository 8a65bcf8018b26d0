//! Detection thresholds and their loading.
//!
//! The detector works from three thresholds: the lower and upper bounds of a
//! short rest gap and the single-shift limit. Defaults match the standard
//! timecard audit; a YAML file can override any of them.
//!
//! # Example
//!
//! ```no_run
//! use timecard_audit::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/detection.yaml").unwrap().into_config();
//! println!("Longest allowed shift: {} minutes", config.max_shift_minutes);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_MAX_GAP_MINUTES, DEFAULT_MAX_SHIFT_MINUTES, DEFAULT_MIN_GAP_MINUTES, DetectionConfig,
};
