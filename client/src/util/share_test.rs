#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn copy_is_unavailable_outside_browser() {
    let copied = futures::executor::block_on(copy_to_clipboard("Your 3-Day Paris Itinerary"));
    assert!(!copied);
}

#[test]
fn print_is_noop_outside_browser() {
    print_page();
}
