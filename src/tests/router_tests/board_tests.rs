use crate::router::handle;
use crate::tests::utils::{body_string, err_status, get, init_test_db, seed};

fn sidebar_title(title: &str) -> String {
    format!("<div style=\"font-weight: 600;\">{title}</div>")
}

#[test]
fn empty_board_renders_map_and_campuses() {
    let db = init_test_db();

    let resp = handle(get("/"), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("id=\"map\""));
    assert!(body.contains("leaflet"));
    assert!(body.contains("Showing 0 of 0 listings"));
    // Campus markers ride along in the page data even with no listings.
    assert!(body.contains("Clayton"));
    assert!(body.contains("Caulfield"));
    // Marker colours from the page script survive intact.
    assert!(body.contains("yellow: \"#ca8a04\""));
    assert!(body.contains("openPopup()"));
}

#[test]
fn sidebar_search_narrows_the_list_but_not_the_map() {
    let db = init_test_db();
    seed(&db, "Clayton Road Unit", "500", "10", true);
    seed(&db, "Caulfield Flat", "450", "20", false);

    let body = body_string(handle(get("/?q=clayton"), &db).expect("Handler failed"));

    assert!(body.contains("Showing 1 of 2 listings"));
    assert!(body.contains(&sidebar_title("Clayton Road Unit")));
    assert!(!body.contains(&sidebar_title("Caulfield Flat")));
    // Both still have markers.
    assert!(body.contains("Caulfield Flat"));
}

#[test]
fn price_sort_orders_the_sidebar() {
    let db = init_test_db();
    seed(&db, "Pricey", "900", "5", true);
    seed(&db, "Cheap", "300", "25", true);
    seed(&db, "Middling", "600", "15", true);

    let body = body_string(handle(get("/?sort=price"), &db).expect("Handler failed"));

    let pos = |t: &str| body.find(&sidebar_title(t)).expect("title missing from sidebar");
    assert!(pos("Cheap") < pos("Middling"));
    assert!(pos("Middling") < pos("Pricey"));
    assert!(body.contains("<option value=\"price\" selected>Price</option>"));
}

#[test]
fn furnished_filter_and_monash_sort_combine() {
    let db = init_test_db();
    seed(&db, "Far Furnished", "400", "30", true);
    seed(&db, "Near Furnished", "400", "4", true);
    seed(&db, "Near Bare", "400", "2", false);

    let body = body_string(
        handle(get("/?furnished=furnished&sort=monash"), &db).expect("Handler failed"),
    );

    assert!(body.contains("Showing 2 of 3 listings"));
    assert!(!body.contains(&sidebar_title("Near Bare")));
    let near = body.find(&sidebar_title("Near Furnished")).unwrap();
    let far = body.find(&sidebar_title("Far Furnished")).unwrap();
    assert!(near < far);
}

#[test]
fn selected_listing_centers_the_map() {
    let db = init_test_db();
    let listing = seed(&db, "Chosen One", "500", "10", true);

    let body = body_string(
        handle(get(&format!("/?selected={}", listing.id)), &db).expect("Handler failed"),
    );

    assert!(body.contains(&format!("\"selected\":{}", listing.id)));
    assert!(body.contains("\"zoom\":15"));
    assert!(body.contains("<li class=\"selected\">"));
    assert!(body.contains("clear selection"));
}

#[test]
fn collapsed_sidebar_hides_the_list() {
    let db = init_test_db();
    seed(&db, "Hidden From List", "500", "10", true);

    let body = body_string(handle(get("/?open=0"), &db).expect("Handler failed"));

    assert!(body.contains("sidebar closed"));
    assert!(!body.contains("Showing 1 of 1 listings"));
    assert!(!body.contains(&sidebar_title("Hidden From List")));
}

#[test]
fn health_and_unknown_routes() {
    let db = init_test_db();

    let resp = handle(get("/health"), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");

    assert_eq!(err_status(handle(get("/no/such/page"), &db)), 404);
}
