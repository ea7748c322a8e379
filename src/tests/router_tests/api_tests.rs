use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_db, seed, send_json};
use astra::Body;
use http::{Method, Request};
use serde_json::{json, Value};

fn listing_json() -> Value {
    json!({
        "title": "Api Listing",
        "mapLink": "https://maps.google.com/maps?center=-37.8772,145.0450&z=15",
        "price": 480,
        "description": "Near Caulfield",
        "furnished": false,
        "walkingToMonash": 12,
        "walkingToBusStop": "3",
        "sourceURL": "https://example.com/api",
        "imageURL": "https://example.com/api.jpg"
    })
}

fn json_body(resp: astra::Response) -> Value {
    serde_json::from_str(&body_string(resp)).expect("response was not JSON")
}

#[test]
fn list_returns_every_listing() {
    let db = init_test_db();
    seed(&db, "First", "400", "5", true);
    seed(&db, "Second", "500", "6", false);

    let resp = handle(get("/api/listings"), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let body = json_body(resp);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[test]
fn create_derives_coordinates_and_returns_201() {
    let db = init_test_db();

    let resp = handle(send_json(Method::POST, "/api/listings", &listing_json()), &db)
        .expect("Handler failed");
    assert_eq!(resp.status(), 201);

    let body = json_body(resp);
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["lat"], -37.8772);
    assert_eq!(body["lon"], 145.045);
    assert_eq!(body["price"], 480.0);
    assert_eq!(body["color"], "blue");
}

#[test]
fn create_with_bad_link_is_a_json_400() {
    let db = init_test_db();
    let mut doc = listing_json();
    doc["mapLink"] = json!("https://maps.app.goo.gl/xyz");

    let resp = handle(send_json(Method::POST, "/api/listings", &doc), &db).expect("Handler failed");
    assert_eq!(resp.status(), 400);
    assert_eq!(
        json_body(resp)["error"],
        "Invalid Google Maps link. Please check the URL format."
    );
}

#[test]
fn malformed_json_is_rejected() {
    let db = init_test_db();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/listings")
        .body(Body::from(b"{not json".to_vec()))
        .unwrap();

    let resp = handle(req, &db).expect("Handler failed");
    assert_eq!(resp.status(), 400);
    assert!(json_body(resp)["error"].as_str().unwrap().starts_with("Invalid JSON"));
}

#[test]
fn body_over_64_kib_is_a_json_400() {
    let db = init_test_db();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/listings")
        .header("Content-Type", "application/json")
        .body(Body::from(vec![b' '; 64 * 1024 + 1]))
        .unwrap();

    let resp = handle(req, &db).expect("Handler failed");
    assert_eq!(resp.status(), 400);
    assert_eq!(json_body(resp)["error"], "Request body too large");
}

#[test]
fn missing_listing_is_a_json_404() {
    let db = init_test_db();

    for uri in ["/api/listings/42", "/api/listings/abc"] {
        let resp = handle(get(uri), &db).expect("Handler failed");
        assert_eq!(resp.status(), 404);
        assert_eq!(json_body(resp)["error"], "Listing not found");
    }
}

#[test]
fn put_replaces_a_listing() {
    let db = init_test_db();
    let listing = seed(&db, "Before", "400", "5", true);

    let mut doc = listing_json();
    doc["title"] = json!("After");
    doc["color"] = json!("yellow");

    let uri = format!("/api/listings/{}", listing.id);
    let resp = handle(send_json(Method::PUT, &uri, &doc), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = json_body(resp);
    assert_eq!(body["id"], listing.id);
    assert_eq!(body["title"], "After");
    assert_eq!(body["color"], "yellow");

    let fetched = json_body(handle(get(&uri), &db).expect("Handler failed"));
    assert_eq!(fetched["title"], "After");
    assert_eq!(fetched["furnished"], false);
}

#[test]
fn put_to_unknown_listing_is_404() {
    let db = init_test_db();

    let resp = handle(send_json(Method::PUT, "/api/listings/77", &listing_json()), &db)
        .expect("Handler failed");
    assert_eq!(resp.status(), 404);
    assert_eq!(json_body(resp)["error"], "Listing not found");
}

#[test]
fn unsupported_api_route_stays_json() {
    let db = init_test_db();

    let req = Request::builder()
        .method(Method::DELETE)
        .uri("/api/listings/1")
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &db).expect("Handler failed");
    assert_eq!(resp.status(), 404);
    assert!(json_body(resp).get("error").is_some());
}
