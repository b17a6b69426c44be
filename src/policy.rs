//! First-match-wins decision policy
//!
//! The evidence layers form an ordered strategy list evaluated in a fixed
//! sequence: exact hash, then fingerprint, then tags. Hash evidence is the
//! strongest and cheapest signal and short-circuits the rest. Fingerprint
//! evidence is acoustic and outranks textual tags even though the tag
//! comparison is cheaper, so a pair clearing both thresholds records method
//! `fingerprint`. The ordering is part of the output contract.

use crate::comparators::{fingerprint_score, hash_match, tag_score};
use crate::config::ThresholdConfig;
use crate::types::{MatchMethod, TrackDescriptor};

/// Verdict from the first layer whose score cleared its threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchEvidence {
    pub method: MatchMethod,
    pub score: f64,
}

/// One evidence layer: scores a pair, or reports no basis for a match
trait Comparator {
    fn evaluate(&self, a: &TrackDescriptor, b: &TrackDescriptor) -> Option<MatchEvidence>;
}

struct HashComparator;

impl Comparator for HashComparator {
    fn evaluate(&self, a: &TrackDescriptor, b: &TrackDescriptor) -> Option<MatchEvidence> {
        hash_match(a, b).then_some(MatchEvidence {
            method: MatchMethod::Hash,
            score: 1.0,
        })
    }
}

struct FingerprintComparator {
    threshold: f64,
}

impl Comparator for FingerprintComparator {
    fn evaluate(&self, a: &TrackDescriptor, b: &TrackDescriptor) -> Option<MatchEvidence> {
        let score = fingerprint_score(a, b);
        (score >= self.threshold).then_some(MatchEvidence {
            method: MatchMethod::Fingerprint,
            score,
        })
    }
}

struct TagComparator {
    threshold: f64,
}

impl Comparator for TagComparator {
    fn evaluate(&self, a: &TrackDescriptor, b: &TrackDescriptor) -> Option<MatchEvidence> {
        let score = tag_score(a, b);
        (score >= self.threshold).then_some(MatchEvidence {
            method: MatchMethod::Tag,
            score,
        })
    }
}

/// Ordered evidence layers for one detection run
pub struct MatchPolicy {
    layers: Vec<Box<dyn Comparator>>,
}

impl MatchPolicy {
    /// Assemble the layer list from a validated config.
    ///
    /// The hash layer is present only when `use_hash` is set; fingerprint
    /// always precedes tags.
    pub fn new(config: &ThresholdConfig) -> Self {
        let mut layers: Vec<Box<dyn Comparator>> = Vec::with_capacity(3);
        if config.use_hash {
            layers.push(Box::new(HashComparator));
        }
        layers.push(Box::new(FingerprintComparator {
            threshold: config.fingerprint_threshold,
        }));
        layers.push(Box::new(TagComparator {
            threshold: config.tag_threshold,
        }));
        Self { layers }
    }

    /// Evaluate a pair against each layer in order; the first match wins
    pub fn decide(&self, a: &TrackDescriptor, b: &TrackDescriptor) -> Option<MatchEvidence> {
        self.layers.iter().find_map(|layer| layer.evaluate(a, b))
    }
}
