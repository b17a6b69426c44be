//! Input and output records for duplicate detection
//!
//! `TrackDescriptor` is the caller-owned input record; `DuplicateGroup` and
//! `MatchRecord` carry the engine's verdicts. All types derive serde so
//! callers can serialize groups directly as interchange JSON.

use serde::{Deserialize, Serialize};

/// One candidate media track, as sourced by the caller (database row,
/// filesystem scan, API payload).
///
/// The engine treats descriptors as immutable for the duration of a run and
/// never mutates them. `id` must be unique within one invocation; mapping an
/// `id` back to a richer record afterwards is the caller's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackDescriptor {
    /// Opaque caller-defined identifier, stable and unique per run
    pub id: String,

    /// Track title; absent compares as an empty string
    pub title: Option<String>,

    /// Artist name; absent compares as an empty string
    pub artist: Option<String>,

    /// Duration in seconds; absent or zero disables the duration bonus
    pub duration: Option<f64>,

    /// Content hash, the exact-identity signal
    pub content_hash: Option<String>,

    /// Acoustic fingerprint, the approximate-identity signal
    pub fingerprint: Option<String>,
}

/// Evidence layer that matched a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    /// Exact content-hash equality; score is always 1.0
    Hash,
    /// Acoustic fingerprint similarity
    Fingerprint,
    /// Title/artist tag similarity
    Tag,
}

/// Why one non-anchor member joined a group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Position of the member in the original input list
    pub index: usize,

    /// Evidence layer that matched the member to the group anchor
    pub method: MatchMethod,

    /// Score in [0.0, 1.0]; at least the matching layer's threshold
    pub score: f64,
}

/// A set of tracks judged to describe the same underlying audio asset.
///
/// The first track is the anchor that absorbed the others; `matches[k]`
/// explains why `tracks[k + 1]` joined. Every emitted group has at least two
/// members, and no track appears in more than one group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// Member tracks, anchor first, then members in input order
    pub tracks: Vec<TrackDescriptor>,

    /// One record per non-anchor member, in the same order
    pub matches: Vec<MatchRecord>,
}
