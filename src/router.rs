use crate::db::Database;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{api, board, listings};
use crate::responses::text_response;
use astra::Request;
use std::io::Read;
use url::form_urlencoded;

/// Form and JSON bodies larger than this are refused.
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    tracing::debug!(%method, %path, "request");

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => board::show(&req, db),
        ("GET", ["health"]) => text_response(200, "ok"),

        ("GET", ["add"]) => listings::new_form(),
        ("POST", ["add"]) => listings::create(req, db),
        ("GET", ["edit", id]) => listings::edit_form(parse_id(id)?, db),
        ("POST", ["edit", id]) => listings::update(parse_id(id)?, req, db),

        (_, ["api", "listings", rest @ ..]) => api::handle(&method, rest, req, db),

        _ => Err(ServerError::NotFound),
    }
}

/// Listing ids in paths; anything that isn't one can't name a listing.
pub fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse::<i64>().map_err(|_| ServerError::NotFound)
}

pub fn read_body(req: Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read request body: {e}")))?;

    if buf.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest("Request body too large".into()));
    }
    Ok(buf)
}

/// Decoded `application/x-www-form-urlencoded` pairs.
pub fn parse_form(body: &[u8]) -> Vec<(String, String)> {
    form_urlencoded::parse(body).into_owned().collect()
}
