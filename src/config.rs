//! Threshold configuration for a detection run
//!
//! Thresholds are passed programmatically per call. There is no config file,
//! environment variable, or CLI surface for these values.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default acceptance threshold for tag similarity
pub const DEFAULT_TAG_THRESHOLD: f64 = 0.85;

/// Default acceptance threshold for fingerprint similarity
pub const DEFAULT_FINGERPRINT_THRESHOLD: f64 = 0.75;

/// Per-run settings for the layered evidence policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Enable the exact-hash short-circuit layer
    pub use_hash: bool,

    /// Minimum tag-similarity score that counts as a match
    pub tag_threshold: f64,

    /// Minimum fingerprint-similarity score that counts as a match
    pub fingerprint_threshold: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            use_hash: true,
            tag_threshold: DEFAULT_TAG_THRESHOLD,
            fingerprint_threshold: DEFAULT_FINGERPRINT_THRESHOLD,
        }
    }
}

impl ThresholdConfig {
    /// Validate thresholds before a run starts.
    ///
    /// Rejects values outside [0.0, 1.0], including NaN, so a bad
    /// configuration fails fast instead of mid-scan.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfiguration` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.tag_threshold) {
            return Err(Error::InvalidConfiguration(format!(
                "tag_threshold must be within [0.0, 1.0], got {}",
                self.tag_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.fingerprint_threshold) {
            return Err(Error::InvalidConfiguration(format!(
                "fingerprint_threshold must be within [0.0, 1.0], got {}",
                self.fingerprint_threshold
            )));
        }
        Ok(())
    }
}
