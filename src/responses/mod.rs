pub mod errors;
pub mod html;
pub mod json;
pub mod redirect;

pub use errors::{error_response, json_error_response};
pub use html::{html_response, html_with_status, text_response};
pub use json::{json_error, json_response};
pub use redirect::see_other;

pub use crate::errors::ResultResp;
