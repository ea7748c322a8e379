use crate::domain::campus::Campus;
use crate::domain::listing::Listing;
use maud::{html, Markup};

/// One row of the sidebar list.
pub fn sidebar_item(listing: &Listing, href: &str, selected: bool) -> Markup {
    let r = &listing.record;
    html! {
        li class=[selected.then_some("selected")] {
            a href=(href) {
                div style="font-weight: 600;" { (r.title) }
                div { "$" (r.price.to_string()) }
                div class="meta" {
                    "🏫 " (r.walking_to_monash.to_string()) " mins • 🚌 " (r.walking_to_bus_stop.to_string()) " mins"
                }
            }
        }
    }
}

/// Content of a listing's map popup.
pub fn listing_popup(listing: &Listing) -> Markup {
    let r = &listing.record;
    let details = r.details();
    html! {
        div class="popup" {
            img src=(r.image_url) alt=(r.title);
            div style="font-weight: 600; margin-top: 0.5rem;" { (r.title) }
            div class="meta" { "$ " (r.price.to_string()) " / week" }
            p style="font-size: 0.8rem;" { (r.description) }
            div style="font-size: 0.8rem;" {
                div { strong { "Furnished: " } (if r.furnished { "Yes" } else { "No" }) }
                div { strong { "To Monash: " } (r.walking_to_monash.to_string()) " mins" }
                div { strong { "To Bus Stop: " } (r.walking_to_bus_stop.to_string()) " mins" }
                @for d in &details {
                    div {
                        @if d.key.is_empty() {
                            (d.value)
                        } @else {
                            strong { (d.key) ": " } (d.value)
                        }
                    }
                }
            }
            p style="font-size: 0.8rem;" {
                a href=(r.source_url) target="_blank" rel="noopener" { "Original listing" }
                " · "
                a href=(format!("/edit/{}", listing.id)) { "Edit" }
            }
        }
    }
}

pub fn campus_popup(campus: &Campus) -> Markup {
    html! {
        div class="popup" {
            div style="font-weight: 600;" { (campus.name) }
            p style="font-size: 0.8rem;" { (campus.note) }
            a href=(campus.link) target="_blank" rel="noopener" { "Open in Google Maps" }
        }
    }
}
