// Itinerary Assembler: spreads search results over the trip's days and slots

use chrono::NaiveDate;

use crate::agents::trip::format_date;
use crate::agents::truncate_chars;
use crate::models::{
    ActivityCard, BookingContext, DayPlan, PriceTier, RestaurantRec, SearchResult, TimeSlot,
    TravelerPreferences,
};

pub const ACTIVITY_DURATION: &str = "2-3 hours";
pub const RESTAURANTS_PER_DAY: usize = 2;
pub const RESTAURANT_RATING: f64 = 4.5;

const DESCRIPTION_CHARS: usize = 150;
const MAX_TAGS: usize = 3;
const ADDRESS_PLACEHOLDER: &str = "Location";

pub fn create_activity_card(
    result: &SearchResult,
    time_slot: TimeSlot,
    preferences: &TravelerPreferences,
    booking: Option<&BookingContext>,
) -> ActivityCard {
    let address = booking.map_or(ADDRESS_PLACEHOLDER, |b| b.location.as_str());
    let description = result.content.as_deref().unwrap_or("Great activity to explore");

    ActivityCard {
        title: result.title.clone().unwrap_or_else(|| "Activity".to_string()),
        address: address.to_string(),
        description: truncate_chars(description, DESCRIPTION_CHARS),
        price_tier: PriceTier::from_budget(&preferences.budget),
        duration: ACTIVITY_DURATION.to_string(),
        tags: preferences.interests.iter().take(MAX_TAGS).cloned().collect(),
        wheelchair_accessible: preferences.mobility_needs.as_deref() == Some("wheelchair"),
        child_friendly: preferences.has_kids,
        time_slot,
    }
}

/// Accessibility is not known for search results; every rec is marked accessible.
pub fn create_restaurant_rec(result: &SearchResult, dietary_filters: &[String], budget: &str) -> RestaurantRec {
    let dietary_options = if dietary_filters.is_empty() {
        vec!["all".to_string()]
    } else {
        dietary_filters.to_vec()
    };

    RestaurantRec {
        name: result.title.clone().unwrap_or_else(|| "Restaurant".to_string()),
        address: "In the area".to_string(),
        cuisine: "Local cuisine".to_string(),
        dietary_options,
        price_tier: PriceTier::from_budget(budget),
        rating: Some(RESTAURANT_RATING),
        wheelchair_accessible: true,
    }
}

/// Builds one [`DayPlan`] per date.
///
/// Both pools are walked by cursors that persist across days, so every
/// result lands in at most one card. Each day takes one activity per slot
/// in morning, afternoon, evening order, then up to
/// [`RESTAURANTS_PER_DAY`] restaurants. Once a pool runs dry the remaining
/// days simply get empty slots.
pub fn assemble_itinerary(
    dates: &[NaiveDate],
    activities: &[SearchResult],
    restaurants: &[SearchResult],
    booking: &BookingContext,
    preferences: &TravelerPreferences,
) -> Vec<DayPlan> {
    let mut activity_cursor = activities.iter();
    let mut restaurant_cursor = restaurants.iter();
    let mut plans = Vec::with_capacity(dates.len());

    for (date, day_number) in dates.iter().zip(1u32..) {
        let mut slot = |time_slot: TimeSlot| -> Vec<ActivityCard> {
            activity_cursor
                .next()
                .map(|result| create_activity_card(result, time_slot, preferences, Some(booking)))
                .into_iter()
                .collect()
        };
        let morning = slot(TimeSlot::Morning);
        let afternoon = slot(TimeSlot::Afternoon);
        let evening = slot(TimeSlot::Evening);

        let day_restaurants = restaurant_cursor
            .by_ref()
            .take(RESTAURANTS_PER_DAY)
            .map(|result| create_restaurant_rec(result, &preferences.dietary_filters, &preferences.budget))
            .collect();

        plans.push(DayPlan {
            date: format_date(*date),
            day_number,
            morning,
            afternoon,
            evening,
            restaurants: day_restaurants,
        });
    }

    plans
}
