pub mod chat;
pub mod composer;
pub mod finder;
pub mod itinerary;
pub mod packing;
pub mod planner;
pub mod search;
pub mod trip;
pub mod weather;

/// Keeps at most `max` characters, never splitting one.
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
