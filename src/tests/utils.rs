use crate::db::listings::insert_listing;
use crate::db::{init_db, Database};
use crate::domain::form::ListingForm;
use crate::domain::listing::Listing;
use crate::errors::ResultResp;
use astra::{Body, Request, Response};
use chrono::Utc;
use http::Method;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// A fresh database file with the production schema. Each call gets its own
/// file so tests running in parallel never see each other's rows.
pub fn init_test_db() -> Database {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let n = NEXT_DB.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!("house_board_test_{}_{nanos}_{n}.sqlite3", std::process::id()));

    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, pairs: &[(&str, &str)]) -> Request {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();

    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.into_bytes()))
        .unwrap()
}

pub fn send_json(method: Method, uri: &str, value: &serde_json::Value) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(value).unwrap()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// A complete, valid submission from the add form.
pub fn valid_form<'a>() -> Vec<(&'a str, &'a str)> {
    vec![
        ("title", "6 McMillan Street, Clayton South"),
        ("mapLink", "https://www.google.com/maps/place/x/@-37.9270,145.1180,17z"),
        ("price", "630"),
        ("description", "Affordable apartment close to public transport."),
        ("furnished", "yes"),
        ("walkingToMonash", "6"),
        ("walkingToBusStop", "7"),
        ("sourceURL", "https://example.com/listing/1"),
        ("imageURL", "https://example.com/photo.jpg"),
        ("color", "yellow"),
        ("additionalDetails", "Bond: 4 weeks\nParking: street"),
    ]
}

/// Stores a listing straight through the db layer, bypassing HTTP.
pub fn seed(db: &Database, title: &str, price: &str, to_monash: &str, furnished: bool) -> Listing {
    let mut pairs = valid_form();
    for (key, value) in pairs.iter_mut() {
        match *key {
            "title" => *value = title,
            "price" => *value = price,
            "walkingToMonash" => *value = to_monash,
            "furnished" => *value = if furnished { "yes" } else { "no" },
            _ => {}
        }
    }
    let record = ListingForm::from_pairs(pairs)
        .into_draft()
        .validate()
        .expect("seed listing should validate");

    db.with_conn(|conn| insert_listing(conn, &record, Utc::now().naive_utc()))
        .expect("seed insert failed")
}

/// Status of a handler error; panics if the handler succeeded.
pub fn err_status(result: ResultResp) -> u16 {
    match result {
        Ok(resp) => panic!("expected an error, got {}", resp.status()),
        Err(err) => err.status(),
    }
}
