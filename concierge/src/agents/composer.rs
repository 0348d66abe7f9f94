// Response Composer: packages the finished pieces into the agent response

use crate::models::{
    AgentResponse, BookingContext, DayPlan, PackingItem, TravelerPreferences, TripSummary,
    WeatherForecast,
};

pub fn trip_summary(booking: &BookingContext, preferences: &TravelerPreferences, duration: i64) -> TripSummary {
    TripSummary {
        location: booking.location.clone(),
        duration: format!("{} days", duration),
        guests: booking.guests,
        budget: preferences.budget.clone(),
        interests: preferences.interests.clone(),
        party_type: preferences.party_type.clone(),
    }
}

pub fn local_tips(location: &str, interests: &[String]) -> Vec<String> {
    let highlight = interests.first().map(String::as_str).unwrap_or("cuisine");
    vec![
        format!("Best time to visit {} attractions is early morning", location),
        "Consider using public transportation for easy navigation".to_string(),
        format!("Don't miss trying the local {}!", highlight),
        "Download offline maps before you go".to_string(),
        "Keep emergency contacts handy".to_string(),
    ]
}

pub fn compose_response(
    booking: &BookingContext,
    preferences: &TravelerPreferences,
    duration: i64,
    daily_plans: Vec<DayPlan>,
    packing_checklist: Vec<PackingItem>,
    weather_forecast: WeatherForecast,
) -> AgentResponse {
    AgentResponse {
        trip_summary: trip_summary(booking, preferences, duration),
        daily_plans,
        packing_checklist,
        weather_forecast,
        local_tips: local_tips(&booking.location, &preferences.interests),
    }
}
