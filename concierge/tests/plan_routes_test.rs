mod common;

use serde_json::{json, Value};
use warp::http::StatusCode;

use common::{app, config_for, mock_search, paris_request, results};

fn activity_count(day: &Value) -> usize {
    ["morning", "afternoon", "evening"]
        .iter()
        .map(|slot| day[slot].as_array().map(Vec::len).unwrap_or(0))
        .sum()
}

fn item_names(body: &Value) -> Vec<String> {
    body["packingChecklist"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["item"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_paris_plan_distributes_search_pools() {
    let mut server = mockito::Server::new_async().await;
    let weather = mock_search(
        &mut server,
        "weather forecast Paris 2024-06-01",
        json!({"results": [{"title": "Paris forecast", "content": "Sunny with a light breeze"}]}),
    )
    .await;
    let activities = mock_search(
        &mut server,
        "art, beach activities and things to do in Paris",
        results("Activity", 3),
    )
    .await;
    let restaurants = mock_search(
        &mut server,
        "best restaurants restaurants in Paris",
        results("Bistro", 1),
    )
    .await;

    let config = config_for(Some(&server.url()), None);
    let resp = warp::test::request()
        .method("POST")
        .path("/api/concierge/plan")
        .json(&paris_request())
        .reply(&app(&config))
        .await;

    weather.assert_async().await;
    activities.assert_async().await;
    restaurants.assert_async().await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(resp.body()).unwrap();

    assert_eq!(body["tripSummary"]["duration"], "2 days");
    assert_eq!(body["tripSummary"]["guests"], 2);
    assert_eq!(body["tripSummary"]["partyType"], "couple");

    let days = body["dailyPlans"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2024-06-01");
    assert_eq!(days[0]["dayNumber"], 1);
    assert_eq!(days[1]["date"], "2024-06-02");
    assert_eq!(days[1]["dayNumber"], 2);

    assert_eq!(activity_count(&days[0]), 3);
    assert_eq!(days[0]["morning"][0]["title"], "Activity 0");
    assert_eq!(days[0]["afternoon"][0]["title"], "Activity 1");
    assert_eq!(days[0]["evening"][0]["title"], "Activity 2");
    assert_eq!(days[0]["evening"][0]["timeSlot"], "evening");
    assert_eq!(days[0]["morning"][0]["address"], "Paris");
    assert_eq!(days[0]["morning"][0]["priceTier"], "$$");
    assert_eq!(days[0]["morning"][0]["tags"], json!(["art", "beach"]));
    assert_eq!(activity_count(&days[1]), 0);
    assert_eq!(days[1]["morning"], json!([]));

    assert_eq!(days[0]["restaurants"].as_array().unwrap().len(), 1);
    assert_eq!(days[0]["restaurants"][0]["name"], "Bistro 0");
    assert_eq!(days[0]["restaurants"][0]["dietaryOptions"], json!(["all"]));
    assert_eq!(days[0]["restaurants"][0]["rating"], 4.5);
    assert_eq!(days[1]["restaurants"], json!([]));

    let items = item_names(&body);
    assert!(items.contains(&"Swimsuit".to_string()));
    assert!(!items.contains(&"Umbrella/Rain jacket".to_string()));
    assert!(!items.contains(&"Kids entertainment".to_string()));

    assert_eq!(body["weatherForecast"]["summary"], "Sunny with a light breeze");
    assert_eq!(body["weatherForecast"]["date"], "2024-06-01");
    assert_eq!(body["localTips"][2], "Don't miss trying the local art!");
}

#[tokio::test]
async fn test_rainy_forecast_adds_umbrella() {
    let mut server = mockito::Server::new_async().await;
    mock_search(
        &mut server,
        "weather forecast Paris 2024-06-01",
        json!({"results": [{"title": "Paris forecast", "content": "Expect RAIN showers"}]}),
    )
    .await;
    mock_search(&mut server, "art, beach activities and things to do in Paris", results("Activity", 0)).await;
    mock_search(&mut server, "best restaurants restaurants in Paris", results("Bistro", 0)).await;

    let config = config_for(Some(&server.url()), None);
    let resp = warp::test::request()
        .method("POST")
        .path("/api/concierge/plan")
        .json(&paris_request())
        .reply(&app(&config))
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(resp.body()).unwrap();
    assert!(item_names(&body).contains(&"Umbrella/Rain jacket".to_string()));
}

#[tokio::test]
async fn test_search_failure_still_produces_itinerary() {
    let mut server = mockito::Server::new_async().await;
    let failing = server
        .mock("POST", "/search")
        .with_status(500)
        .with_body("provider down")
        .expect(3)
        .create_async()
        .await;

    let config = config_for(Some(&server.url()), None);
    let resp = warp::test::request()
        .method("POST")
        .path("/api/concierge/plan")
        .json(&paris_request())
        .reply(&app(&config))
        .await;

    failing.assert_async().await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(resp.body()).unwrap();

    let days = body["dailyPlans"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert!(days.iter().all(|day| activity_count(day) == 0));
    assert!(days.iter().all(|day| day["restaurants"] == json!([])));
    assert_eq!(body["weatherForecast"]["summary"], "Pleasant weather expected");
    assert_eq!(item_names(&body).len(), 4);
}

#[tokio::test]
async fn test_plan_without_search_key() {
    let config = config_for(None, None);
    let mut request = paris_request();
    request["booking"]["checkOut"] = json!("2024-06-05T10:00:00Z");

    let resp = warp::test::request()
        .method("POST")
        .path("/api/concierge/plan")
        .json(&request)
        .reply(&app(&config))
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(body["tripSummary"]["duration"], "4 days");
    assert_eq!(body["dailyPlans"].as_array().unwrap().len(), 4);
    assert_eq!(body["localTips"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_unparseable_dates_default_to_three_days() {
    let config = config_for(None, None);
    let mut request = paris_request();
    request["booking"]["checkOut"] = json!("whenever");

    let resp = warp::test::request()
        .method("POST")
        .path("/api/concierge/plan")
        .json(&request)
        .reply(&app(&config))
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(body["tripSummary"]["duration"], "3 days");
    let days = body["dailyPlans"].as_array().unwrap();
    assert_eq!(days.len(), 3);
    assert_eq!(days[2]["date"], "2024-06-03");
}

#[tokio::test]
async fn test_checkout_before_checkin_yields_empty_itinerary() {
    let config = config_for(None, None);
    let mut request = paris_request();
    request["booking"]["checkOut"] = json!("2024-05-30");

    let resp = warp::test::request()
        .method("POST")
        .path("/api/concierge/plan")
        .json(&request)
        .reply(&app(&config))
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(body["tripSummary"]["duration"], "-2 days");
    assert_eq!(body["dailyPlans"], json!([]));
}

#[tokio::test]
async fn test_zero_guests_is_rejected() {
    let config = config_for(None, None);
    let mut request = paris_request();
    request["booking"]["guests"] = json!(0);

    let resp = warp::test::request()
        .method("POST")
        .path("/api/concierge/plan")
        .json(&request)
        .reply(&app(&config))
        .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(body["error"], "Bad request");
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let config = config_for(None, None);

    let resp = warp::test::request()
        .method("POST")
        .path("/api/concierge/plan")
        .json(&json!({"booking": {"location": "Paris"}}))
        .reply(&app(&config))
        .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_long_trip_is_capped_at_configured_days() {
    let mut config = config_for(None, None);
    config.max_trip_days = 5;
    let mut request = paris_request();
    request["booking"]["checkIn"] = json!("0001-01-01");
    request["booking"]["checkOut"] = json!("9999-12-31");

    let resp = warp::test::request()
        .method("POST")
        .path("/api/concierge/plan")
        .json(&request)
        .reply(&app(&config))
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(body["tripSummary"]["duration"], "3652058 days");
    let days = body["dailyPlans"].as_array().unwrap();
    assert_eq!(days.len(), 5);
    assert_eq!(days[4]["date"], "0001-01-05");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_served_plan_runs_on_worker_threads() {
    let mut server = mockito::Server::new_async().await;
    let search = server
        .mock("POST", "/search")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(results("Stop", 5).to_string())
        .expect(3)
        .create_async()
        .await;

    let config = config_for(Some(&server.url()), None);
    let (addr, serving) = warp::serve(app(&config)).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(serving);

    let client = reqwest::Client::new();
    let base = format!("http://{}", addr);
    let requests = tokio::spawn(async move {
        let health = client.get(format!("{}/health", base)).send().await.unwrap();
        assert_eq!(health.status(), reqwest::StatusCode::OK);

        let plan = client
            .post(format!("{}/api/concierge/plan", base))
            .json(&paris_request())
            .send()
            .await
            .unwrap();
        assert_eq!(plan.status(), reqwest::StatusCode::OK);
        plan.json::<Value>().await.unwrap()
    });
    let body = requests.await.unwrap();

    search.assert_async().await;
    assert_eq!(body["dailyPlans"].as_array().unwrap().len(), 2);
    assert_eq!(activity_count(&body["dailyPlans"][0]), 3);
}
