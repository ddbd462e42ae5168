use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("lookahead must be a finite value >= 0, got {0}")]
    InvalidLookahead(f64),

    #[error("good band minimum ({good_min}) must not exceed excellent minimum ({excellent_min})")]
    InvalidBandOrder { excellent_min: usize, good_min: usize },
}

//
// ─── TRACKER ───────────────────────────────────────────────────────────────────
//

/// Tuning for the reading-progress tracker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrackerSettings {
    lookahead: f64,
}

impl TrackerSettings {
    /// Bias added to the scroll offset so a section activates slightly before its
    /// top edge reaches the viewport top.
    pub const DEFAULT_LOOKAHEAD: f64 = 100.0;

    /// # Errors
    ///
    /// Returns `SettingsError::InvalidLookahead` for negative or non-finite values.
    pub fn new(lookahead: f64) -> Result<Self, SettingsError> {
        if !lookahead.is_finite() || lookahead < 0.0 {
            return Err(SettingsError::InvalidLookahead(lookahead));
        }
        Ok(Self { lookahead })
    }

    #[must_use]
    pub fn lookahead(&self) -> f64 {
        self.lookahead
    }
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            lookahead: Self::DEFAULT_LOOKAHEAD,
        }
    }
}

//
// ─── SCORING ───────────────────────────────────────────────────────────────────
//

/// Score thresholds for the qualitative result bands.
///
/// `score >= excellent_min` is Excellent, `score >= good_min` is Good, anything
/// lower Needs Improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandThresholds {
    excellent_min: usize,
    good_min: usize,
}

impl BandThresholds {
    pub const DEFAULT_EXCELLENT_MIN: usize = 3;
    pub const DEFAULT_GOOD_MIN: usize = 2;

    /// # Errors
    ///
    /// Returns `SettingsError::InvalidBandOrder` if `good_min > excellent_min`.
    pub fn new(excellent_min: usize, good_min: usize) -> Result<Self, SettingsError> {
        if good_min > excellent_min {
            return Err(SettingsError::InvalidBandOrder {
                excellent_min,
                good_min,
            });
        }
        Ok(Self {
            excellent_min,
            good_min,
        })
    }

    #[must_use]
    pub fn excellent_min(&self) -> usize {
        self.excellent_min
    }

    #[must_use]
    pub fn good_min(&self) -> usize {
        self.good_min
    }
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            excellent_min: Self::DEFAULT_EXCELLENT_MIN,
            good_min: Self::DEFAULT_GOOD_MIN,
        }
    }
}
