//! YAML and JSON configuration for Retip tooltips.

mod config;
mod error;

pub use config::{TooltipConfig, TooltipSet};
pub use error::ConfigError;
