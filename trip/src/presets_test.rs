use super::*;

#[test]
fn every_preset_is_a_complete_request() {
    for preset in &PRESETS {
        assert_eq!(preset.to_request().validate_complete(), Ok(()), "{preset:?}");
    }
}

#[test]
fn preset_at_wraps_around() {
    assert_eq!(preset_at(0), &PRESETS[0]);
    assert_eq!(preset_at(PRESETS.len()), &PRESETS[0]);
    assert_eq!(preset_at(PRESETS.len() + 2), &PRESETS[2]);
    assert_eq!(preset_at(usize::MAX), &PRESETS[usize::MAX % PRESETS.len()]);
}

#[test]
fn popular_destinations_have_presets() {
    for city in POPULAR_DESTINATIONS {
        assert!(PRESETS.iter().any(|p| p.destination == city), "{city}");
    }
}
