use rand::Rng;

use crate::error::ChartSpecError;
use crate::model::SeriesData;
use crate::Result;

/// Points per series when modelling a year of monthly samples.
pub const DEFAULT_SERIES_LENGTH: usize = 12;

/// A named series and the inclusive integer range its points are drawn
/// from. Distinct ranges keep, say, a primary incident series sampling
/// higher than a secondary one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesProfile {
    pub name: String,
    pub low: i64,
    pub high: i64,
    pub color_hint: Option<String>,
}

impl SeriesProfile {
    #[must_use]
    pub fn new(name: impl Into<String>, low: i64, high: i64) -> Self {
        Self {
            name: name.into(),
            low,
            high,
            color_hint: None,
        }
    }

    #[must_use]
    pub fn with_color_hint(mut self, color: impl Into<String>) -> Self {
        self.color_hint = Some(color.into());
        self
    }
}

/// The stock incident-trend profiles.
#[must_use]
pub fn default_series_profiles() -> Vec<SeriesProfile> {
    vec![
        SeriesProfile::new("Phishing", 30, 80).with_color_hint("#F45B5B"),
        SeriesProfile::new("Breaches", 10, 40).with_color_hint("#8085E9"),
    ]
}

/// Draws `length` independent integers per profile. No smoothing and no
/// autocorrelation: every point is a fresh draw from the profile's range.
///
/// # Errors
/// Returns `InvalidParameter` if any profile's range is inverted.
pub fn generate_series<R: Rng>(
    profiles: &[SeriesProfile],
    length: usize,
    rng: &mut R,
) -> Result<Vec<SeriesData>> {
    for profile in profiles {
        if profile.low > profile.high {
            return Err(ChartSpecError::invalid(
                "profiles",
                format!(
                    "series `{}` has inverted range {}..={}",
                    profile.name, profile.low, profile.high
                ),
            ));
        }
    }

    Ok(profiles
        .iter()
        .map(|profile| {
            let values = (0..length)
                .map(|_| rng.gen_range(profile.low..=profile.high))
                .collect();
            let data = SeriesData::new(profile.name.clone(), values);
            match &profile.color_hint {
                Some(color) => data.with_color_hint(color.clone()),
                None => data,
            }
        })
        .collect())
}

#[cfg(test)]
#[path = "series_tests.rs"]
mod tests;
