//! Trip request wire type and field validation.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Day count the wizard starts with, and the server's fallback when a
/// request omits `days`.
pub const DEFAULT_DAYS: u32 = 3;
/// Shortest trip accepted.
pub const MIN_DAYS: u32 = 1;
/// Longest trip accepted (the form input's upper bound).
pub const MAX_DAYS: u32 = 60;

/// Field validation failure. Messages are shown to users verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Destination is required.")]
    MissingDestination,
    #[error("Days must be between {MIN_DAYS} and {MAX_DAYS}.")]
    DaysOutOfRange(u32),
    #[error("Theme is required.")]
    MissingTheme,
}

// =============================================================================
// PACE
// =============================================================================

/// How densely each day should be packed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Relaxed,
    #[default]
    Moderate,
    Fast,
}

impl Pace {
    /// All paces in display order.
    pub const ALL: [Pace; 3] = [Pace::Relaxed, Pace::Moderate, Pace::Fast];

    /// Wire name, also used inside the LLM prompt.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relaxed => "relaxed",
            Self::Moderate => "moderate",
            Self::Fast => "fast",
        }
    }

    /// Card title.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Relaxed => "Relaxed",
            Self::Moderate => "Balanced",
            Self::Fast => "Fast-Paced",
        }
    }

    /// One-line card description.
    #[must_use]
    pub fn blurb(self) -> &'static str {
        match self {
            Self::Relaxed => "Plenty of downtime",
            Self::Moderate => "Mix of activities & rest",
            Self::Fast => "Maximum experiences",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Relaxed => "🌴",
            Self::Moderate => "🚶",
            Self::Fast => "🏃",
        }
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`Pace::from_str`] for anything but relaxed/moderate/fast.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pace '{0}' (expected relaxed, moderate or fast)")]
pub struct ParsePaceError(pub String);

impl FromStr for Pace {
    type Err = ParsePaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relaxed" => Ok(Self::Relaxed),
            "moderate" | "balanced" => Ok(Self::Moderate),
            "fast" | "fast-paced" => Ok(Self::Fast),
            _ => Err(ParsePaceError(s.to_owned())),
        }
    }
}

// =============================================================================
// TRIP REQUEST
// =============================================================================

/// Body of `POST /api/plan-trip`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub destination: String,
    #[serde(default = "default_days")]
    pub days: u32,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub pace: Pace,
}

fn default_days() -> u32 {
    DEFAULT_DAYS
}

impl TripRequest {
    #[must_use]
    pub fn new(destination: impl Into<String>, days: u32, theme: impl Into<String>, pace: Pace) -> Self {
        Self { destination: destination.into(), days, theme: theme.into(), pace }
    }

    /// Check the fields the planner cannot work without. Theme is optional
    /// here; the prompt simply omits it.
    ///
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_destination(&self.destination)?;
        validate_days(self.days)?;
        Ok(())
    }

    /// Check every field the wizard requires before submitting.
    ///
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate_complete(&self) -> Result<(), ValidationError> {
        self.validate()?;
        validate_theme(&self.theme)
    }

    /// Results view title, e.g. "Your 3-Day Paris Itinerary".
    #[must_use]
    pub fn headline(&self) -> String {
        format!("Your {}-Day {} Itinerary", self.days, self.destination.trim())
    }

    /// Results view subtitle, e.g. "Food tour • relaxed pace".
    #[must_use]
    pub fn summary(&self) -> String {
        let theme = self.theme.trim();
        if theme.is_empty() {
            format!("{} pace", self.pace)
        } else {
            format!("{theme} • {} pace", self.pace)
        }
    }
}

/// # Errors
///
/// [`ValidationError::MissingDestination`] when blank after trimming.
pub fn validate_destination(destination: &str) -> Result<(), ValidationError> {
    if destination.trim().is_empty() {
        return Err(ValidationError::MissingDestination);
    }
    Ok(())
}

/// # Errors
///
/// [`ValidationError::DaysOutOfRange`] outside `MIN_DAYS..=MAX_DAYS`.
pub fn validate_days(days: u32) -> Result<(), ValidationError> {
    if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
        return Err(ValidationError::DaysOutOfRange(days));
    }
    Ok(())
}

/// # Errors
///
/// [`ValidationError::MissingTheme`] when blank after trimming.
pub fn validate_theme(theme: &str) -> Result<(), ValidationError> {
    if theme.trim().is_empty() {
        return Err(ValidationError::MissingTheme);
    }
    Ok(())
}
