// Planner Agent: turns a booking plus preferences into a full travel plan

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use crate::agents::composer::compose_response;
use crate::agents::finder::FinderAgent;
use crate::agents::itinerary::assemble_itinerary;
use crate::agents::packing::generate_packing_list;
use crate::agents::trip::{calculate_trip_duration, parse_trip_date, trip_dates};
use crate::agents::weather::WeatherAgent;
use crate::error::ApiError;
use crate::metrics;
use crate::middleware::OperationTracer;
use crate::models::{AgentRequest, AgentResponse};

#[derive(Clone)]
pub struct PlannerAgent {
    weather: WeatherAgent,
    finder: FinderAgent,
    tracer: OperationTracer,
    max_trip_days: u32,
}

impl PlannerAgent {
    pub fn new(
        weather: WeatherAgent,
        finder: FinderAgent,
        tracer: OperationTracer,
        max_trip_days: u32,
    ) -> Self {
        Self { weather, finder, tracer, max_trip_days }
    }

    pub async fn plan(&self, request: &AgentRequest) -> Result<AgentResponse, ApiError> {
        self.tracer
            .run_fallible("generate_travel_plan", self.generate(request))
            .await
    }

    async fn generate(&self, request: &AgentRequest) -> Result<AgentResponse, ApiError> {
        let booking = &request.booking;
        let preferences = &request.preferences;

        if booking.guests == 0 {
            return Err(ApiError::BadRequest("guests must be at least 1".to_string()));
        }

        info!(
            "Planning trip to {} for {} guests, interests: {:?}",
            booking.location, booking.guests, preferences.interests
        );

        let duration = self.tracer.run_sync("calculate_trip_duration", || {
            calculate_trip_duration(&booking.check_in, &booking.check_out)
        });
        let start = parse_trip_date(&booking.check_in).unwrap_or_else(|| {
            warn!("Unparseable check-in {:?}, anchoring itinerary at today", booking.check_in);
            today()
        });
        let days = if duration > i64::from(self.max_trip_days) {
            warn!(
                "Trip of {} days exceeds the {} day limit, planning the first {} only",
                duration, self.max_trip_days, self.max_trip_days
            );
            i64::from(self.max_trip_days)
        } else {
            duration
        };
        let dates = trip_dates(start, days);

        // The three searches are independent of each other.
        let (weather, activities, restaurants) = futures::join!(
            self.weather.forecast(&booking.location, &booking.check_in),
            self.finder.find_activities(&booking.location, &preferences.interests),
            self.finder.find_restaurants(&booking.location, &preferences.dietary_filters)
        );

        let daily_plans = self.tracer.run_sync("assemble_itinerary", || {
            assemble_itinerary(&dates, &activities, &restaurants, booking, preferences)
        });
        let packing = self.tracer.run_sync("generate_packing_list", || {
            generate_packing_list(&weather.summary, preferences)
        });

        metrics::record_plan();
        info!(
            "Plan ready: {} days, {} activities, {} restaurants",
            daily_plans.len(),
            daily_plans.iter().map(|day| day.activities().count()).sum::<usize>(),
            daily_plans.iter().map(|day| day.restaurants.len()).sum::<usize>(),
        );

        Ok(compose_response(booking, preferences, duration, daily_plans, packing, weather))
    }
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
