use super::*;
use crate::request::Pace;

const SAMPLE: &str = "Here is your plan.\n\nDay 1: Arrival\nCheck in near the Marais\n  Dinner at a bistro\n\nDay 2: Museums\nLouvre in the morning\n";

#[test]
fn parse_lines_classifies_headers_and_activities() {
    let lines = parse_lines(SAMPLE);
    assert_eq!(
        lines,
        vec![
            ItineraryLine::Activity("Here is your plan.".into()),
            ItineraryLine::DayHeader("Day 1: Arrival".into()),
            ItineraryLine::Activity("Check in near the Marais".into()),
            ItineraryLine::Activity("Dinner at a bistro".into()),
            ItineraryLine::DayHeader("Day 2: Museums".into()),
            ItineraryLine::Activity("Louvre in the morning".into()),
        ]
    );
}

#[test]
fn parse_lines_drops_blank_lines() {
    assert!(parse_lines("\n   \n\t\n").is_empty());
    assert!(parse_lines("").is_empty());
}

#[test]
fn parse_lines_handles_crlf() {
    let lines = parse_lines("Day 1\r\nWalk\r\n");
    assert_eq!(lines.len(), 2);
    assert!(lines[0].is_day_header());
    assert_eq!(lines[1].text(), "Walk");
}

#[test]
fn day_prefix_is_case_sensitive() {
    let lines = parse_lines("day trip to Versailles\nDaybreak hike");
    assert!(!lines[0].is_day_header());
    // Matches the plain prefix rule: anything starting with "Day" is a header.
    assert!(lines[1].is_day_header());
}

#[test]
fn indented_day_line_is_still_a_header() {
    let lines = parse_lines("   Day 3 - Departure");
    assert_eq!(lines, vec![ItineraryLine::DayHeader("Day 3 - Departure".into())]);
}

#[test]
fn group_days_collects_activities_under_headers() {
    let days = group_days(&parse_lines(SAMPLE));
    assert_eq!(days.len(), 3);
    assert_eq!(days[0].title, None);
    assert_eq!(days[0].activities, vec!["Here is your plan.".to_owned()]);
    assert_eq!(days[1].title.as_deref(), Some("Day 1: Arrival"));
    assert_eq!(days[1].activities.len(), 2);
    assert_eq!(days[2].title.as_deref(), Some("Day 2: Museums"));
}

#[test]
fn group_days_keeps_empty_days() {
    let days = group_days(&parse_lines("Day 1\nDay 2\nSwim"));
    assert_eq!(days.len(), 2);
    assert!(days[0].activities.is_empty());
    assert_eq!(days[1].activities, vec!["Swim".to_owned()]);
}

#[test]
fn share_text_prefixes_headline_and_summary() {
    let req = TripRequest::new("Paris", 2, "Museums", Pace::Fast);
    let text = share_text(&req, "\nDay 1\nLouvre\n\n");
    assert_eq!(text, "Your 2-Day Paris Itinerary\nMuseums • fast pace\n\nDay 1\nLouvre\n");
}
