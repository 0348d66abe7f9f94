use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Request models
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingContext {
    pub location: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    #[serde(default)]
    pub property_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelerPreferences {
    pub budget: String,
    pub interests: Vec<String>,
    #[serde(default)]
    pub mobility_needs: Option<String>,
    #[serde(default)]
    pub dietary_filters: Vec<String>,
    pub party_type: String,
    #[serde(default)]
    pub has_kids: bool,
    #[serde(default)]
    pub additional_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRequest {
    pub booking: BookingContext,
    pub preferences: TravelerPreferences,
    #[serde(default)]
    pub free_text_query: Option<String>,
}

/// One record from the search provider. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            url: None,
        }
    }
}

/// Symbolic price scale derived from the traveler's budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceTier {
    #[serde(rename = "$")]
    Low,
    #[serde(rename = "$$")]
    Medium,
    #[serde(rename = "$$$")]
    High,
}

impl PriceTier {
    /// Unrecognized budgets land on the middle tier.
    pub fn from_budget(budget: &str) -> Self {
        match budget {
            "low" => PriceTier::Low,
            "high" => PriceTier::High,
            _ => PriceTier::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

// Response models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCard {
    pub title: String,
    pub address: String,
    pub description: String,
    pub price_tier: PriceTier,
    pub duration: String,
    pub tags: Vec<String>,
    pub wheelchair_accessible: bool,
    pub child_friendly: bool,
    pub time_slot: TimeSlot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRec {
    pub name: String,
    pub address: String,
    pub cuisine: String,
    pub dietary_options: Vec<String>,
    pub price_tier: PriceTier,
    pub rating: Option<f64>,
    pub wheelchair_accessible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub date: String,
    pub day_number: u32,
    pub morning: Vec<ActivityCard>,
    pub afternoon: Vec<ActivityCard>,
    pub evening: Vec<ActivityCard>,
    pub restaurants: Vec<RestaurantRec>,
}

impl DayPlan {
    pub fn activities(&self) -> impl Iterator<Item = &ActivityCard> {
        self.morning.iter().chain(&self.afternoon).chain(&self.evening)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingItem {
    pub item: String,
    pub reason: String,
    pub category: String,
}

impl PackingItem {
    pub fn new(item: &str, reason: &str, category: &str) -> Self {
        Self {
            item: item.to_string(),
            reason: reason.to_string(),
            category: category.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub location: String,
    pub date: String,
    pub condition: String,
    pub temperature: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub location: String,
    pub duration: String,
    pub guests: u32,
    pub budget: String,
    pub interests: Vec<String>,
    pub party_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub trip_summary: TripSummary,
    pub daily_plans: Vec<DayPlan>,
    pub packing_checklist: Vec<PackingItem>,
    pub weather_forecast: WeatherForecast,
    pub local_tips: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub context: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub context: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub date: Option<String>,
}
