use crate::errors::ServerError;
use crate::responses::{html_with_status, json_error};
use crate::templates::pages::error_page;
use astra::{Body, Response};

/// Convert a ServerError into a proper HTML response page
pub fn error_response(err: &ServerError) -> Response {
    let status = err.status();
    let message = match err {
        // Storage details stay in the logs.
        ServerError::DbError(_) | ServerError::InternalError => "Something went wrong!".to_string(),
        other => other.to_string(),
    };

    html_with_status(status, error_page(status, &message))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

/// Same as `error_response` for the JSON API.
pub fn json_error_response(err: &ServerError) -> Response {
    let status = err.status();
    let message = match err {
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::Validation(v) => v.to_string(),
        ServerError::DbError(_) | ServerError::InternalError => "Internal Server Error".to_string(),
    };

    json_error(status, &message)
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
