//! Line-oriented reading of itinerary text.
//!
//! The planner returns free text. Lines starting with `Day` open a new day;
//! every other non-blank line is an activity under the most recent day.

#[cfg(test)]
#[path = "itinerary_test.rs"]
mod itinerary_test;

use crate::request::TripRequest;

const DAY_PREFIX: &str = "Day";

/// One rendered line of an itinerary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItineraryLine {
    DayHeader(String),
    Activity(String),
}

impl ItineraryLine {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::DayHeader(text) | Self::Activity(text) => text,
        }
    }

    #[must_use]
    pub fn is_day_header(&self) -> bool {
        matches!(self, Self::DayHeader(_))
    }
}

/// A day header and the activities listed beneath it.
///
/// `title` is `None` for activities that precede the first header (models
/// often open with a short introduction).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItineraryDay {
    pub title: Option<String>,
    pub activities: Vec<String>,
}

/// Classify each non-blank line of `text`.
#[must_use]
pub fn parse_lines(text: &str) -> Vec<ItineraryLine> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            if line.trim_start().starts_with(DAY_PREFIX) {
                ItineraryLine::DayHeader(line.trim().to_owned())
            } else {
                ItineraryLine::Activity(line.trim().to_owned())
            }
        })
        .collect()
}

/// Group parsed lines into days.
#[must_use]
pub fn group_days(lines: &[ItineraryLine]) -> Vec<ItineraryDay> {
    let mut days: Vec<ItineraryDay> = Vec::new();
    for line in lines {
        match line {
            ItineraryLine::DayHeader(title) => {
                days.push(ItineraryDay { title: Some(title.clone()), activities: Vec::new() });
            }
            ItineraryLine::Activity(text) => match days.last_mut() {
                Some(day) => day.activities.push(text.clone()),
                None => days.push(ItineraryDay { title: None, activities: vec![text.clone()] }),
            },
        }
    }
    days
}

/// Plain-text payload for the clipboard: headline, summary, then the itinerary.
#[must_use]
pub fn share_text(request: &TripRequest, itinerary: &str) -> String {
    format!("{}\n{}\n\n{}\n", request.headline(), request.summary(), itinerary.trim())
}
