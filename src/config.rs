//! Counting configuration loaded from JSON.

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::integration::MinSize;
use crate::tracker::TrackerConfig;

/// Result type alias for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading or validating a [`CountingConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Geometry and thresholds for one camera.
///
/// Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountingConfig {
    /// Y offset of the detection sub-window inside the full frame.
    pub split_line: i32,
    /// Y coordinate of the counting line, in full-frame coordinates.
    pub counting_line: i32,
    /// Squared pixel distance below which a detection continues a track.
    pub centroid_threshold_square: i64,
    /// Sub-window centroids closer than this to the top edge are ignored.
    pub boundary_margin: i32,
    /// Detections must be strictly wider than this.
    pub min_width: i32,
    /// Detections must be strictly taller than this.
    pub min_height: i32,
    /// Number of counting events kept by the counting log.
    pub log_capacity: usize,
}

impl Default for CountingConfig {
    fn default() -> Self {
        Self {
            split_line: 368,
            counting_line: 418,
            centroid_threshold_square: 1300,
            boundary_margin: 30,
            min_width: 35,
            min_height: 35,
            log_capacity: 8,
        }
    }
}

impl CountingConfig {
    /// Load and validate a config from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let cfg: CountingConfig = serde_json::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.split_line < 0 {
            return Err(invalid("split_line", "must not be negative"));
        }
        if self.centroid_threshold_square <= 0 {
            return Err(invalid("centroid_threshold_square", "must be positive"));
        }
        if self.boundary_margin < 0 {
            return Err(invalid("boundary_margin", "must not be negative"));
        }
        if self.min_width < 0 {
            return Err(invalid("min_width", "must not be negative"));
        }
        if self.min_height < 0 {
            return Err(invalid("min_height", "must not be negative"));
        }
        if self.log_capacity == 0 {
            return Err(invalid("log_capacity", "must be at least 1"));
        }
        if self.counting_line < self.split_line {
            warn!(
                "counting_line {} lies above split_line {}; no track can reach it",
                self.counting_line, self.split_line
            );
        }
        Ok(())
    }

    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig {
            split_line: self.split_line,
            centroid_threshold_square: self.centroid_threshold_square,
            boundary_margin: self.boundary_margin,
        }
    }

    pub fn min_size(&self) -> MinSize {
        MinSize {
            width: self.min_width,
            height: self.min_height,
        }
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
