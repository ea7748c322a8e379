use crate::templates::{components::error_panel, desktop_layout};
use maud::Markup;

pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(&format!("Error {status}"), false, error_panel(status, message))
}
