//! Pairwise evidence functions
//!
//! Three independent comparators, each pure and infallible: an absent or
//! malformed field degrades to "no evidence" (`false` / `0.0`), never to an
//! error. Missing metadata must never manufacture similarity.

use crate::similarity::sequence_ratio;
use crate::types::TrackDescriptor;

/// Duration gap (seconds) below which the tag score earns +0.15
const CLOSE_DURATION_GAP: f64 = 3.0;

/// Duration gap (seconds) below which the tag score earns +0.05
const NEAR_DURATION_GAP: f64 = 8.0;

/// Exact content-hash equality.
///
/// A missing or empty hash on either side is no evidence, not a match.
pub fn hash_match(a: &TrackDescriptor, b: &TrackDescriptor) -> bool {
    match (a.content_hash.as_deref(), b.content_hash.as_deref()) {
        (Some(ha), Some(hb)) => !ha.is_empty() && ha == hb,
        _ => false,
    }
}

/// Tag similarity over normalized `title + " " + artist`, with a
/// duration-proximity bonus.
///
/// If either side normalizes to whitespace only, the score is 0.0. The bonus
/// applies when both durations are present and positive: a gap under 3
/// seconds adds 0.15, a gap under 8 seconds adds 0.05, and the result is
/// capped at 1.0. The bonus is additive, applied after the base ratio.
pub fn tag_score(a: &TrackDescriptor, b: &TrackDescriptor) -> f64 {
    let tags_a = normalized_tags(a);
    let tags_b = normalized_tags(b);
    if tags_a.trim().is_empty() || tags_b.trim().is_empty() {
        return 0.0;
    }

    let base = sequence_ratio(&tags_a, &tags_b);
    match duration_gap(a, b) {
        Some(gap) if gap < CLOSE_DURATION_GAP => (base + 0.15).min(1.0),
        Some(gap) if gap < NEAR_DURATION_GAP => (base + 0.05).min(1.0),
        _ => base,
    }
}

/// Fingerprint similarity over the raw fingerprint strings.
///
/// Stand-in for a real acoustic-similarity metric: a substitute must keep
/// the [0.0, 1.0] score range and return 0.0 when either fingerprint is
/// missing or empty.
pub fn fingerprint_score(a: &TrackDescriptor, b: &TrackDescriptor) -> f64 {
    match (a.fingerprint.as_deref(), b.fingerprint.as_deref()) {
        (Some(fa), Some(fb)) if !fa.is_empty() && !fb.is_empty() => sequence_ratio(fa, fb),
        _ => 0.0,
    }
}

/// Lowercased `title + " " + artist`, absent fields as empty strings
fn normalized_tags(track: &TrackDescriptor) -> String {
    format!(
        "{} {}",
        track.title.as_deref().unwrap_or(""),
        track.artist.as_deref().unwrap_or("")
    )
    .to_lowercase()
}

/// Absolute duration difference, when both sides carry a positive duration
fn duration_gap(a: &TrackDescriptor, b: &TrackDescriptor) -> Option<f64> {
    let dur_a = a.duration.filter(|d| *d > 0.0)?;
    let dur_b = b.duration.filter(|d| *d > 0.0)?;
    Some((dur_a - dur_b).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(
        title: Option<&str>,
        artist: Option<&str>,
        duration: Option<f64>,
        content_hash: Option<&str>,
        fingerprint: Option<&str>,
    ) -> TrackDescriptor {
        TrackDescriptor {
            id: "t".to_string(),
            title: title.map(String::from),
            artist: artist.map(String::from),
            duration,
            content_hash: content_hash.map(String::from),
            fingerprint: fingerprint.map(String::from),
        }
    }

    #[test]
    fn test_hash_match_equal() {
        let a = track(None, None, None, Some("abc123"), None);
        let b = track(None, None, None, Some("abc123"), None);
        assert!(hash_match(&a, &b));
    }

    #[test]
    fn test_hash_match_differs() {
        let a = track(None, None, None, Some("abc123"), None);
        let b = track(None, None, None, Some("def456"), None);
        assert!(!hash_match(&a, &b));
    }

    #[test]
    fn test_hash_missing_is_no_evidence() {
        let a = track(None, None, None, Some("abc123"), None);
        let missing = track(None, None, None, None, None);
        let empty = track(None, None, None, Some(""), None);
        assert!(!hash_match(&a, &missing));
        assert!(!hash_match(&a, &empty));
        assert!(!hash_match(&empty, &empty));
    }

    #[test]
    fn test_tag_score_identical() {
        let a = track(Some("Deep Voyage"), Some("DJ Tom"), None, None, None);
        let b = track(Some("Deep Voyage"), Some("DJ Tom"), None, None, None);
        assert_eq!(tag_score(&a, &b), 1.0);
    }

    #[test]
    fn test_tag_score_case_insensitive() {
        let a = track(Some("DEEP VOYAGE"), Some("dj tom"), None, None, None);
        let b = track(Some("deep voyage"), Some("DJ Tom"), None, None, None);
        assert_eq!(tag_score(&a, &b), 1.0);
    }

    #[test]
    fn test_tag_score_empty_metadata_floor() {
        let named = track(Some("Deep Voyage"), Some("DJ Tom"), None, None, None);
        let blank = track(None, None, None, None, None);
        let spaces = track(Some("   "), Some(""), None, None, None);
        assert_eq!(tag_score(&named, &blank), 0.0);
        assert_eq!(tag_score(&blank, &named), 0.0);
        assert_eq!(tag_score(&named, &spaces), 0.0);
        assert_eq!(tag_score(&blank, &blank), 0.0);
    }

    #[test]
    fn test_duration_bonus_tiers() {
        let base_a = track(Some("Harmonic Shift"), Some("Bass Agent"), None, None, None);
        let base_b = track(
            Some("Harmonic Shift (Remastered)"),
            Some("Bass Agent"),
            None,
            None,
            None,
        );
        let no_bonus = tag_score(&base_a, &base_b);

        let close_a = TrackDescriptor {
            duration: Some(345.0),
            ..base_a.clone()
        };
        let close_b = TrackDescriptor {
            duration: Some(346.0),
            ..base_b.clone()
        };
        let close = tag_score(&close_a, &close_b);
        assert!((close - (no_bonus + 0.15)).abs() < 1e-9);

        let near_b = TrackDescriptor {
            duration: Some(350.0),
            ..base_b.clone()
        };
        let near = tag_score(&close_a, &near_b);
        assert!((near - (no_bonus + 0.05)).abs() < 1e-9);

        let far_b = TrackDescriptor {
            duration: Some(360.0),
            ..base_b.clone()
        };
        let far = tag_score(&close_a, &far_b);
        assert!((far - no_bonus).abs() < 1e-9);

        // Shrinking the gap never lowers the score
        assert!(close >= near && near >= far);
    }

    #[test]
    fn test_duration_bonus_capped() {
        let a = track(Some("Deep Voyage"), Some("DJ Tom"), Some(200.0), None, None);
        let b = track(Some("Deep Voyage"), Some("DJ Tom"), Some(201.0), None, None);
        assert_eq!(tag_score(&a, &b), 1.0);
    }

    #[test]
    fn test_zero_duration_disables_bonus() {
        let a = track(Some("Deep Voyage"), Some("DJ Tom"), Some(0.0), None, None);
        let b = track(Some("Deep Voyage"), Some("DJ Tom"), Some(1.0), None, None);
        assert_eq!(tag_score(&a, &b), 1.0); // base ratio alone, already 1.0
        let c = track(Some("Deep Voyage x"), Some("DJ Tom"), Some(0.0), None, None);
        let d = track(Some("Deep Voyage"), Some("DJ Tom"), Some(1.0), None, None);
        let without = tag_score(&c, &d);
        let with_durations = tag_score(
            &TrackDescriptor {
                duration: Some(100.0),
                ..c.clone()
            },
            &TrackDescriptor {
                duration: Some(100.0),
                ..d.clone()
            },
        );
        assert!(with_durations > without);
    }

    #[test]
    fn test_fingerprint_score_known_value() {
        let a = track(None, None, None, None, Some("fp_abcdef123456"));
        let b = track(None, None, None, None, Some("fp_abcxyz123456"));
        let score = fingerprint_score(&a, &b);
        assert!((score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_fingerprint_missing_is_no_evidence() {
        let a = track(None, None, None, None, Some("fp_abcdef123456"));
        let missing = track(None, None, None, None, None);
        let empty = track(None, None, None, None, Some(""));
        assert_eq!(fingerprint_score(&a, &missing), 0.0);
        assert_eq!(fingerprint_score(&a, &empty), 0.0);
        assert_eq!(fingerprint_score(&missing, &missing), 0.0);
    }
}
