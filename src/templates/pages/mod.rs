pub mod error;
pub mod listing_form;
pub mod map;

pub use error::error_page;
pub use listing_form::{listing_form_page, FormMode};
pub use map::map_page;
