use crate::model::ComparisonPoint;

/// One platform's position on the comparison axes.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformProfile {
    pub name: String,
    /// Monthly active users, in millions.
    pub reach_millions: f64,
    /// Privacy protection score in `[0, 100]`.
    pub privacy_score: f64,
    /// Data exposure risk index.
    pub risk_index: f64,
}

impl PlatformProfile {
    #[must_use]
    pub fn new(name: impl Into<String>, reach_millions: f64, privacy_score: f64, risk_index: f64) -> Self {
        Self {
            name: name.into(),
            reach_millions,
            privacy_score,
            risk_index,
        }
    }
}

/// The stock platform roster used when the caller supplies no profiles.
#[must_use]
pub fn default_platforms() -> Vec<PlatformProfile> {
    vec![
        PlatformProfile::new("Facebook", 2900.0, 45.0, 80.0),
        PlatformProfile::new("Instagram", 2000.0, 42.0, 85.0),
        PlatformProfile::new("TikTok", 1500.0, 40.0, 90.0),
        PlatformProfile::new("YouTube", 2500.0, 55.0, 70.0),
    ]
}

/// Maps platform profiles onto comparison points. Field renaming only; no
/// randomness and no value transformation.
#[must_use]
pub fn generate_comparison(profiles: &[PlatformProfile]) -> Vec<ComparisonPoint> {
    profiles
        .iter()
        .map(|p| ComparisonPoint::new(p.reach_millions, p.privacy_score, p.risk_index, p.name.clone()))
        .collect()
}

#[cfg(test)]
#[path = "comparison_tests.rs"]
mod tests;
