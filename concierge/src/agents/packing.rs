// Packing Agent: keyword rules from weather and preferences to a checklist

use crate::models::{PackingItem, TravelerPreferences};

/// Every matching rule appends its item, in rule order.
pub fn generate_packing_list(weather_summary: &str, preferences: &TravelerPreferences) -> Vec<PackingItem> {
    let mut items = vec![
        PackingItem::new("Passport/ID", "Required for travel", "documents"),
        PackingItem::new("Phone charger", "Essential electronics", "electronics"),
        PackingItem::new("Wallet/Credit cards", "For payments", "documents"),
    ];

    if weather_summary.to_lowercase().contains("rain") {
        items.push(PackingItem::new("Umbrella/Rain jacket", "Rainy weather expected", "clothing"));
    }

    let has_interest = |tag: &str| preferences.interests.iter().any(|interest| interest == tag);
    if has_interest("beach") || has_interest("water") {
        items.push(PackingItem::new("Swimsuit", "Beach/water activities", "clothing"));
    }

    if preferences.has_kids {
        items.push(PackingItem::new("Kids entertainment", "Traveling with children", "accessories"));
    }

    items
}
