//! Wizard step machine for the trip form.
//!
//! DESIGN
//! ======
//! Three input steps gate progression on field validity, followed by a
//! results view that only exists once an itinerary has been generated.
//! Submission is split into `begin_submit` / `finish_submit` so the async
//! request lives in the page while every state change stays here.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use trip::{DEFAULT_DAYS, Pace, Preset, TripRequest, ValidationError};

/// Single message shown for every failed submission.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Wizard position. Input steps are numbered 1 to 3 in the stepper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Destination,
    Details,
    Preferences,
    Results,
}

impl Step {
    /// Steps shown in the stepper header.
    pub const INPUTS: [Step; 3] = [Step::Destination, Step::Details, Step::Preferences];

    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Destination => 1,
            Self::Details => 2,
            Self::Preferences => 3,
            Self::Results => 4,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Destination => "Destination",
            Self::Details => "Details",
            Self::Preferences => "Preferences",
            Self::Results => "Itinerary",
        }
    }

    fn following(self) -> Option<Self> {
        match self {
            Self::Destination => Some(Self::Details),
            Self::Details => Some(Self::Preferences),
            Self::Preferences | Self::Results => None,
        }
    }

    fn preceding(self) -> Option<Self> {
        match self {
            Self::Destination => None,
            Self::Details => Some(Self::Destination),
            Self::Preferences => Some(Self::Details),
            Self::Results => Some(Self::Preferences),
        }
    }
}

/// Form fields, submission status and the current step.
#[derive(Clone, Debug, PartialEq)]
pub struct WizardState {
    pub step: Step,
    pub destination: String,
    pub days: u32,
    pub theme: String,
    pub pace: Pace,
    /// Text of the last successful plan; empty until one succeeds.
    pub itinerary: String,
    /// Request that produced `itinerary`, used for the results headline.
    pub submitted: Option<TripRequest>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: Step::Destination,
            destination: String::new(),
            days: DEFAULT_DAYS,
            theme: String::new(),
            pace: Pace::default(),
            itinerary: String::new(),
            submitted: None,
            loading: false,
            error: None,
        }
    }
}

impl WizardState {
    /// Snapshot of the form as a wire request.
    #[must_use]
    pub fn request(&self) -> TripRequest {
        TripRequest::new(self.destination.clone(), self.days, self.theme.clone(), self.pace)
    }

    /// First validation failure that keeps `step` from being complete.
    /// Details covers both day count and theme; pace always has a value.
    #[must_use]
    pub fn hint(&self, step: Step) -> Option<ValidationError> {
        let result = match step {
            Step::Destination => trip::validate_destination(&self.destination),
            Step::Details => trip::validate_days(self.days).and_then(|()| trip::validate_theme(&self.theme)),
            Step::Preferences | Step::Results => Ok(()),
        };
        result.err()
    }

    #[must_use]
    pub fn step_valid(&self, step: Step) -> bool {
        self.hint(step).is_none()
    }

    /// All three input steps are valid.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Step::INPUTS.iter().all(|s| self.step_valid(*s))
    }

    #[must_use]
    pub fn has_itinerary(&self) -> bool {
        !self.itinerary.trim().is_empty()
    }

    /// Advance one input step when the current one is valid.
    pub fn next(&mut self) -> bool {
        if !self.step_valid(self.step) {
            return false;
        }
        match self.step.following() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) -> bool {
        match self.step.preceding() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Whether the stepper may jump to `step` from anywhere.
    #[must_use]
    pub fn can_visit(&self, step: Step) -> bool {
        match step {
            Step::Destination => true,
            Step::Details => self.step_valid(Step::Destination),
            Step::Preferences => self.step_valid(Step::Destination) && self.step_valid(Step::Details),
            Step::Results => self.has_itinerary(),
        }
    }

    pub fn visit(&mut self, step: Step) -> bool {
        if !self.can_visit(step) {
            return false;
        }
        self.step = step;
        true
    }

    /// Quick-pick a city and move on to the details step.
    pub fn choose_destination(&mut self, city: &str) {
        self.destination = city.to_owned();
        self.step = Step::Destination;
        self.next();
    }

    /// Parse the raw day-count input. Anything that is not a non-negative
    /// integer becomes 0, which fails validation.
    pub fn set_days_input(&mut self, raw: &str) {
        self.days = raw.trim().parse().unwrap_or(0);
    }

    /// Start a submission. Returns the request to send, or `None` when a
    /// request is already in flight or the form is incomplete.
    pub fn begin_submit(&mut self) -> Option<TripRequest> {
        if self.loading || !self.is_complete() {
            return None;
        }
        self.loading = true;
        self.error = None;
        self.itinerary.clear();
        self.submitted = None;
        Some(self.request())
    }

    /// Record the outcome of the request started by [`Self::begin_submit`].
    /// Blank text counts as a failure.
    pub fn finish_submit(&mut self, result: Result<String, String>) {
        self.loading = false;
        match result {
            Ok(text) if !text.trim().is_empty() => {
                self.itinerary = text;
                self.submitted = Some(self.request());
                self.error = None;
                self.step = Step::Results;
            }
            Ok(_) | Err(_) => {
                self.itinerary.clear();
                self.submitted = None;
                self.error = Some(GENERIC_FAILURE.to_owned());
            }
        }
    }

    /// "Plan Another Trip": drop the result, keep the form.
    pub fn start_over(&mut self) {
        self.itinerary.clear();
        self.submitted = None;
        self.error = None;
        self.step = Step::Destination;
    }

    /// Fill every field from `preset` and jump to the last input step.
    pub fn apply_preset(&mut self, preset: &Preset) {
        self.destination = preset.destination.to_owned();
        self.days = preset.days;
        self.theme = preset.theme.to_owned();
        self.pace = preset.pace;
        self.error = None;
        self.step = Step::Preferences;
    }
}
