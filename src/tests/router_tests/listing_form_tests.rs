use crate::db::listings::{all_listings, get_listing};
use crate::db::Database;
use crate::domain::listing::{FlexNumber, MarkerColor};
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, err_status, get, init_test_db, post_form, seed, valid_form};

#[test]
fn add_form_starts_with_defaults() {
    let db = init_test_db();

    let resp = handle(get("/add"), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Add New Listing"));
    assert!(body.contains("action=\"/add\""));
    assert!(body.contains("name=\"mapLink\""));
    assert!(body.contains("name=\"additionalDetails\""));
    // No map assets on form pages.
    assert!(!body.contains("leaflet"));
}

#[test]
fn valid_submission_is_stored_and_redirects_home() {
    let db = init_test_db();

    let resp = handle(post_form("/add", &valid_form()), &db).expect("Handler failed");
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/");

    let stored = db.with_conn(|conn| all_listings(conn)).unwrap();
    assert_eq!(stored.len(), 1);

    let r = &stored[0].record;
    assert_eq!(r.title, "6 McMillan Street, Clayton South");
    assert_eq!(r.price, FlexNumber::Number(630.0));
    assert!((r.lat - -37.9270).abs() < 1e-9);
    assert!((r.lon - 145.1180).abs() < 1e-9);
    assert!(r.furnished);
    assert_eq!(r.color, MarkerColor::Yellow);
    assert_eq!(r.details().len(), 2);
}

#[test]
fn link_without_coordinates_is_rejected_and_form_is_kept() {
    let db = init_test_db();
    let mut form = valid_form();
    form[1] = ("mapLink", "https://maps.app.goo.gl/abc123");

    let resp = handle(post_form("/add", &form), &db).expect("Handler failed");
    assert_eq!(resp.status(), 400);

    let body = body_string(resp);
    assert!(body.contains("Invalid Google Maps link. Please check the URL format."));
    // What the contributor typed is still there.
    assert!(body.contains("https://maps.app.goo.gl/abc123"));
    assert!(body.contains("6 McMillan Street, Clayton South"));

    assert!(db.with_conn(|conn| all_listings(conn)).unwrap().is_empty());
}

#[test]
fn missing_field_is_named() {
    let db = init_test_db();
    let form: Vec<_> = valid_form()
        .into_iter()
        .filter(|(key, _)| *key != "description")
        .collect();

    let resp = handle(post_form("/add", &form), &db).expect("Handler failed");
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Please fill in description"));
}

/// Makes every write of the given kind fail inside SQLite.
fn refuse_writes(db: &Database, event: &str) {
    let sql = format!(
        "CREATE TRIGGER refuse_{event} BEFORE {event} ON listings \
         BEGIN SELECT RAISE(ABORT, 'writes disabled'); END;"
    );
    db.with_conn(|conn| conn.execute_batch(&sql).map_err(ServerError::from))
        .expect("failed to install trigger");
}

#[test]
fn store_failure_on_add_keeps_the_form() {
    let db = init_test_db();
    refuse_writes(&db, "INSERT");

    let resp = handle(post_form("/add", &valid_form()), &db).expect("Handler failed");
    assert_eq!(resp.status(), 500);

    let body = body_string(resp);
    assert!(body.contains("Failed to add listing."));
    assert!(body.contains("6 McMillan Street, Clayton South"));
}

#[test]
fn store_failure_on_edit_keeps_the_form() {
    let db = init_test_db();
    let listing = seed(&db, "Locked Listing", "500", "10", true);
    refuse_writes(&db, "UPDATE");

    let resp = handle(post_form(&format!("/edit/{}", listing.id), &valid_form()), &db)
        .expect("Handler failed");
    assert_eq!(resp.status(), 500);
    assert!(body_string(resp).contains("Failed to update listing."));

    let unchanged = db
        .with_conn(|conn| get_listing(conn, listing.id))
        .unwrap()
        .expect("listing vanished");
    assert_eq!(unchanged.record.title, "Locked Listing");
}

#[test]
fn oversized_form_body_is_refused() {
    let db = init_test_db();
    let huge = "x".repeat(64 * 1024 + 1);
    let mut form = valid_form();
    form[3] = ("description", huge.as_str());

    assert_eq!(err_status(handle(post_form("/add", &form), &db)), 400);
    assert!(db.with_conn(|conn| all_listings(conn)).unwrap().is_empty());
}

#[test]
fn edit_form_is_prefilled() {
    let db = init_test_db();
    let listing = seed(&db, "Prefilled Place", "555", "9", false);

    let resp = handle(get(&format!("/edit/{}", listing.id)), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Edit Listing"));
    assert!(body.contains(&format!("action=\"/edit/{}\"", listing.id)));
    assert!(body.contains("value=\"Prefilled Place\""));
    assert!(body.contains("value=\"555\""));
}

#[test]
fn edit_replaces_the_listing_and_returns_to_it() {
    let db = init_test_db();
    let listing = seed(&db, "Old Title", "500", "10", true);

    let mut form = valid_form();
    form[0] = ("title", "New Title");
    form[2] = ("price", "610");
    form[4] = ("furnished", "no");
    form[9] = ("color", "blue");

    let resp = handle(post_form(&format!("/edit/{}", listing.id), &form), &db)
        .expect("Handler failed");
    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").unwrap(),
        format!("/?selected={}", listing.id).as_str()
    );

    let updated = db
        .with_conn(|conn| get_listing(conn, listing.id))
        .unwrap()
        .expect("listing vanished");
    assert_eq!(updated.record.title, "New Title");
    assert_eq!(updated.record.price, FlexNumber::Number(610.0));
    assert!(!updated.record.furnished);
    assert_eq!(updated.record.color, MarkerColor::Blue);
    assert_eq!(updated.created_at, listing.created_at);
    assert!(updated.updated_at >= listing.updated_at);
}

#[test]
fn unknown_listing_cannot_be_edited() {
    let db = init_test_db();

    assert_eq!(err_status(handle(get("/edit/999"), &db)), 404);
    assert_eq!(err_status(handle(get("/edit/not-a-number"), &db)), 404);
    assert_eq!(err_status(handle(post_form("/edit/999", &valid_form()), &db)), 404);
}
