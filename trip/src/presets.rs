//! Popular destinations and complete sample trips for "Surprise me".
//!
//! Selection is seeded by the caller so this crate stays free of RNG and
//! browser dependencies.

#[cfg(test)]
#[path = "presets_test.rs"]
mod presets_test;

use crate::request::{Pace, TripRequest};

/// Quick-pick chips on the destination step.
pub const POPULAR_DESTINATIONS: [&str; 5] = ["Paris", "Tokyo", "New York", "Bali", "Rome"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    pub destination: &'static str,
    pub days: u32,
    pub theme: &'static str,
    pub pace: Pace,
}

impl Preset {
    #[must_use]
    pub fn to_request(&self) -> TripRequest {
        TripRequest::new(self.destination, self.days, self.theme, self.pace)
    }
}

pub const PRESETS: [Preset; 8] = [
    Preset { destination: "Paris", days: 4, theme: "Food tour", pace: Pace::Relaxed },
    Preset { destination: "Tokyo", days: 6, theme: "Anime and street food", pace: Pace::Fast },
    Preset { destination: "New York", days: 3, theme: "Broadway and museums", pace: Pace::Fast },
    Preset { destination: "Bali", days: 7, theme: "Relaxation", pace: Pace::Relaxed },
    Preset { destination: "Rome", days: 5, theme: "Ancient history", pace: Pace::Moderate },
    Preset { destination: "Reykjavik", days: 5, theme: "Adventure", pace: Pace::Moderate },
    Preset { destination: "Lisbon", days: 3, theme: "Architecture", pace: Pace::Moderate },
    Preset { destination: "Cape Town", days: 8, theme: "Wildlife and wine", pace: Pace::Relaxed },
];

/// Pick a preset; any seed is valid.
#[must_use]
pub fn preset_at(seed: usize) -> &'static Preset {
    &PRESETS[seed % PRESETS.len()]
}
