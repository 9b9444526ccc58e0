//! Score to quality-label classification.

use serde::Serialize;
use std::fmt;

/// Discrete water-quality rating derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quality {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// How worrying a rating is. Drives alert styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Guarded,
    Elevated,
    High,
}

impl Severity {
    /// Alert box `(background, border)` colours.
    pub fn alert_colors(self) -> (&'static str, &'static str) {
        match self {
            Severity::Low => ("#F0FDF4", "#86EFAC"),
            Severity::Guarded => ("#EFF6FF", "#93C5FD"),
            Severity::Elevated => ("#FEFCE8", "#FDE047"),
            Severity::High => ("#FEF2F2", "#FCA5A5"),
        }
    }
}

impl Quality {
    pub const ALL: [Quality; 4] = [Quality::Excellent, Quality::Good, Quality::Fair, Quality::Poor];

    pub fn label(self) -> &'static str {
        match self {
            Quality::Excellent => "Excellent",
            Quality::Good => "Good",
            Quality::Fair => "Fair",
            Quality::Poor => "Poor",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Quality::Excellent => Severity::Low,
            Quality::Good => Severity::Guarded,
            Quality::Fair => Severity::Elevated,
            Quality::Poor => Severity::High,
        }
    }

    /// Text colour used for the score and label (green, blue, yellow, red).
    pub fn accent_color(self) -> &'static str {
        match self {
            Quality::Excellent => "#16a34a",
            Quality::Good => "#2563eb",
            Quality::Fair => "#ca8a04",
            Quality::Poor => "#dc2626",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a score.
///
/// Lower bounds are strict, so 80, 60 and 40 fall into the bucket below.
/// Total over all of `f64`: anything above 80 is `Excellent`, anything at
/// or below 40 (including negatives and NaN) is `Poor`.
pub fn classify(score: f64) -> Quality {
    if score > 80.0 {
        Quality::Excellent
    } else if score > 60.0 {
        Quality::Good
    } else if score > 40.0 {
        Quality::Fair
    } else {
        Quality::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_fall_into_lower_bucket() {
        assert_eq!(classify(80.0), Quality::Good);
        assert_eq!(classify(60.0), Quality::Fair);
        assert_eq!(classify(40.0), Quality::Poor);
        assert_eq!(classify(0.0), Quality::Poor);
        assert_eq!(classify(99.999), Quality::Excellent);
    }

    #[test]
    fn just_above_boundaries_moves_up() {
        assert_eq!(classify(80.000_001), Quality::Excellent);
        assert_eq!(classify(60.000_001), Quality::Good);
        assert_eq!(classify(40.000_001), Quality::Fair);
    }

    #[test]
    fn out_of_range_scores_use_the_same_rule() {
        assert_eq!(classify(-5.0), Quality::Poor);
        assert_eq!(classify(f64::NEG_INFINITY), Quality::Poor);
        assert_eq!(classify(150.0), Quality::Excellent);
        assert_eq!(classify(f64::INFINITY), Quality::Excellent);
        assert_eq!(classify(f64::NAN), Quality::Poor);
    }

    #[test]
    fn buckets_partition_the_range() {
        for tenth in 0..1000 {
            let s = tenth as f64 / 10.0;
            let expected = if s > 80.0 {
                Quality::Excellent
            } else if s > 60.0 && s <= 80.0 {
                Quality::Good
            } else if s > 40.0 && s <= 60.0 {
                Quality::Fair
            } else {
                Quality::Poor
            };
            assert_eq!(classify(s), expected, "score {s}");
            assert_eq!(classify(s), classify(s));
        }
    }

    #[test]
    fn severity_tracks_rating() {
        let tiers: Vec<Severity> = Quality::ALL.iter().map(|q| q.severity()).collect();
        assert_eq!(tiers, [Severity::Low, Severity::Guarded, Severity::Elevated, Severity::High]);
        assert!(Quality::Poor.severity() > Quality::Good.severity());
    }

    #[test]
    fn alert_colors_differ_per_severity() {
        let colors: Vec<_> = Quality::ALL.iter().map(|q| q.severity().alert_colors()).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(Severity::High.alert_colors(), ("#FEF2F2", "#FCA5A5"));
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Quality::Fair.to_string(), "Fair");
        assert_eq!(Quality::Excellent.label().to_lowercase(), "excellent");
    }
}
