// JSON API under /api/listings, for scripts and other clients.

use crate::db::listings::{all_listings, get_listing, insert_listing, update_listing};
use crate::db::Database;
use crate::domain::form::ListingDraft;
use crate::errors::{ResultResp, ServerError};
use crate::responses::{json_error, json_error_response, json_response};
use crate::router::{parse_id, read_body};
use astra::Request;
use chrono::Utc;

const NOT_FOUND: &str = "Listing not found";

/// Errors never escape as HTML here; every failure becomes `{"error": ...}`.
pub fn handle(method: &str, rest: &[&str], req: Request, db: &Database) -> ResultResp {
    let result = match (method, rest) {
        ("GET", []) => list(db),
        ("POST", []) => create(req, db),
        ("GET", [id]) => show(id, db),
        ("PUT", [id]) => update(id, req, db),
        _ => Err(ServerError::NotFound),
    };

    result.or_else(|err| {
        if err.status() >= 500 {
            tracing::error!(error = %err, "api request failed");
        }
        Ok(json_error_response(&err))
    })
}

fn list(db: &Database) -> ResultResp {
    let listings = db.with_conn(|conn| all_listings(conn))?;
    json_response(200, &listings)
}

fn show(raw_id: &str, db: &Database) -> ResultResp {
    let Ok(id) = parse_id(raw_id) else {
        return json_error(404, NOT_FOUND);
    };
    match db.with_conn(|conn| get_listing(conn, id))? {
        Some(listing) => json_response(200, &listing),
        None => json_error(404, NOT_FOUND),
    }
}

fn create(req: Request, db: &Database) -> ResultResp {
    let record = read_draft(req)?.validate()?;
    let now = Utc::now().naive_utc();
    let listing = db.with_conn(|conn| insert_listing(conn, &record, now))?;

    tracing::info!(id = listing.id, title = %listing.record.title, "listing created via api");
    json_response(201, &listing)
}

fn update(raw_id: &str, req: Request, db: &Database) -> ResultResp {
    let Ok(id) = parse_id(raw_id) else {
        return json_error(404, NOT_FOUND);
    };
    let record = read_draft(req)?.validate()?;
    let now = Utc::now().naive_utc();

    match db.with_conn(|conn| update_listing(conn, id, &record, now))? {
        Some(listing) => {
            tracing::info!(id, title = %listing.record.title, "listing updated via api");
            json_response(200, &listing)
        }
        None => json_error(404, NOT_FOUND),
    }
}

fn read_draft(req: Request) -> Result<ListingDraft, ServerError> {
    let body = read_body(req)?;
    serde_json::from_slice(&body).map_err(|e| ServerError::BadRequest(format!("Invalid JSON: {e}")))
}
