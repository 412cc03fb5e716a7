use super::*;

#[test]
fn stored_choice_overrides_system_preference() {
    assert!(resolve(Some("dark"), false));
    assert!(!resolve(Some("light"), true));
}

#[test]
fn system_preference_applies_when_nothing_stored() {
    assert!(resolve(None, true));
    assert!(!resolve(None, false));
}

#[test]
fn unrecognized_stored_value_falls_back_to_system() {
    assert!(resolve(Some("true"), true));
    assert!(!resolve(Some(""), false));
}

#[test]
fn theme_name_round_trips_through_resolve() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
    assert!(resolve(Some(theme_name(true)), false));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_light_outside_browser() {
    assert!(!read_preference());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn toggle_flips_mode() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn apply_is_noop_outside_browser() {
    apply(true);
    apply(false);
}
