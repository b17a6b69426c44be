//! Duplicate-detection and clustering engine for media-track libraries
//!
//! Ingests caller-sourced track descriptors and partitions them into
//! duplicate groups using a layered evidence policy: exact content hash,
//! then acoustic fingerprint similarity, then textual tag similarity. Each
//! layer has its own acceptance threshold and reports the score that
//! justified the match.
//!
//! The engine is synchronous, stateless, and performs no I/O. Callers source
//! the descriptors (database rows, filesystem scan, API payload) and decide
//! what to do with the returned groups; the engine makes no merge or delete
//! decision itself.
//!
//! ```
//! use dupfinder::{DuplicateDetector, TrackDescriptor};
//!
//! let tracks = vec![
//!     TrackDescriptor {
//!         id: "1".to_string(),
//!         title: Some("Deep Voyage".to_string()),
//!         artist: Some("DJ Tom".to_string()),
//!         duration: Some(372.0),
//!         content_hash: Some("abc123".to_string()),
//!         fingerprint: None,
//!     },
//!     TrackDescriptor {
//!         id: "2".to_string(),
//!         title: Some("Deep Voyage".to_string()),
//!         artist: Some("DJ Tom".to_string()),
//!         duration: Some(372.0),
//!         content_hash: Some("abc123".to_string()),
//!         fingerprint: None,
//!     },
//! ];
//!
//! let groups = DuplicateDetector::with_defaults().find_duplicates(&tracks)?;
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].tracks.len(), 2);
//! # Ok::<(), dupfinder::Error>(())
//! ```

pub mod comparators;
pub mod config;
pub mod detector;
pub mod error;
pub mod policy;
pub mod similarity;
pub mod types;

pub use crate::config::ThresholdConfig;
pub use crate::detector::DuplicateDetector;
pub use crate::error::{Error, Result};
pub use crate::policy::{MatchEvidence, MatchPolicy};
pub use crate::types::{DuplicateGroup, MatchMethod, MatchRecord, TrackDescriptor};
