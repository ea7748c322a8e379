use maud::{html, Markup};

/// Body of an error page.
pub fn error_panel(status: u16, message: &str) -> Markup {
    html! {
        main class="form-card" {
            h1 { "Error " (status) }
            p { (message) }
            p { a href="/" { "← Back to map" } }
        }
    }
}
