use maud::{html, Markup};

pub mod error;
pub mod fields;
pub mod listing;

pub use error::error_panel;
pub use fields::{choice_field, text_field, textarea_field};
pub use listing::{campus_popup, listing_popup, sidebar_item};

/// A one-line error banner above a form, standing in for a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice(pub String);

pub fn notice(n: &Notice) -> Markup {
    html! {
        div class="notice error" role="alert" { (n.0) }
    }
}
