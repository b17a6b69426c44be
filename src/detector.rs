//! Greedy single-pass duplicate clustering
//!
//! Scans the input list once: each not-yet-excluded track anchors a
//! candidate group, and every later unexcluded track is compared against the
//! anchor alone. Matching is anchor-relative, not transitive: if B matches
//! anchor A, a C that resembles B but not A lands in a different group (or
//! none). Full transitive closure over the similarity graph would be a
//! distinct clustering mode, deliberately not performed here.

use crate::config::ThresholdConfig;
use crate::error::Result;
use crate::policy::MatchPolicy;
use crate::types::{DuplicateGroup, MatchRecord, TrackDescriptor};

/// Duplicate-detection engine.
///
/// Stateless across runs: each call validates the configuration, scans the
/// input once, and returns freshly built groups without retaining any input.
/// The scan costs O(N²) pair evaluations in the worst case, the dominant
/// cost on large libraries; narrowing the comparison scope (e.g. fingerprint
/// bucketing) would change which pairs are ever considered and therefore the
/// output itself.
pub struct DuplicateDetector {
    config: ThresholdConfig,
}

impl DuplicateDetector {
    /// Create a detector with caller-supplied thresholds
    pub fn new(config: ThresholdConfig) -> Self {
        Self { config }
    }

    /// Create a detector with the default thresholds
    pub fn with_defaults() -> Self {
        Self::new(ThresholdConfig::default())
    }

    /// Partition `tracks` into disjoint duplicate groups.
    ///
    /// Groups come back in ascending anchor order; within a group the anchor
    /// is first and members follow in input order. Singletons are discarded:
    /// a track that matches nothing simply appears in no group. Descriptor
    /// `id`s must be unique per call; with duplicate ids the pass still
    /// completes, but group disjointness is then only defined over input
    /// positions, not ids.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfiguration` if a threshold lies outside
    /// [0.0, 1.0]; no comparisons run in that case.
    pub fn find_duplicates(&self, tracks: &[TrackDescriptor]) -> Result<Vec<DuplicateGroup>> {
        self.config.validate()?;
        let policy = MatchPolicy::new(&self.config);

        let mut groups = Vec::new();
        let mut excluded = vec![false; tracks.len()];

        for i in 0..tracks.len() {
            if excluded[i] {
                continue;
            }
            let anchor = &tracks[i];
            let mut members = vec![anchor.clone()];
            let mut matches = Vec::new();

            for j in (i + 1)..tracks.len() {
                if excluded[j] {
                    continue;
                }
                if let Some(evidence) = policy.decide(anchor, &tracks[j]) {
                    tracing::debug!(
                        anchor = %anchor.id,
                        member = %tracks[j].id,
                        method = ?evidence.method,
                        score = evidence.score,
                        "Tracks matched"
                    );
                    members.push(tracks[j].clone());
                    matches.push(MatchRecord {
                        index: j,
                        method: evidence.method,
                        score: evidence.score,
                    });
                    excluded[j] = true;
                }
            }

            if members.len() > 1 {
                groups.push(DuplicateGroup {
                    tracks: members,
                    matches,
                });
            }
        }

        tracing::info!(
            tracks = tracks.len(),
            groups = groups.len(),
            "Duplicate detection complete"
        );

        Ok(groups)
    }
}
