//! Shared trip-planning model for the wizard, the API server and the CLI.
//!
//! This crate owns the JSON request sent to `POST /api/plan-trip`, the field
//! validation rules every surface agrees on, and the line-oriented reading of
//! the itinerary text that comes back. It performs no I/O.

pub mod itinerary;
pub mod presets;
pub mod request;

pub use itinerary::{ItineraryDay, ItineraryLine, group_days, parse_lines, share_text};
pub use presets::{POPULAR_DESTINATIONS, PRESETS, Preset, preset_at};
pub use request::{
    DEFAULT_DAYS, MAX_DAYS, MIN_DAYS, Pace, ParsePaceError, TripRequest, ValidationError, validate_days,
    validate_destination, validate_theme,
};
