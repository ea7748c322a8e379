// templates/pages/listing_form.rs

use crate::domain::form::ListingForm;
use crate::domain::listing::MarkerColor;
use crate::templates::components::{choice_field, text_field, textarea_field};
use crate::templates::{desktop_layout, notice, Notice};
use maud::{html, Markup};

/// Add and edit share one form; only the target and wording differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(i64),
}

impl FormMode {
    pub fn action(&self) -> String {
        match self {
            FormMode::Add => "/add".to_string(),
            FormMode::Edit(id) => format!("/edit/{id}"),
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            FormMode::Add => "Add New Listing",
            FormMode::Edit(_) => "Edit Listing",
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Add => "Add Listing",
            FormMode::Edit(_) => "Save Changes",
        }
    }

    /// Shown when the store rejects the write.
    pub fn failure_message(&self) -> &'static str {
        match self {
            FormMode::Add => "Failed to add listing.",
            FormMode::Edit(_) => "Failed to update listing.",
        }
    }
}

pub fn listing_form_page(mode: FormMode, form: &ListingForm, flash: Option<&Notice>) -> Markup {
    let colors: Vec<(&str, &str)> = MarkerColor::ALL
        .iter()
        .map(|c| (c.as_str(), c.label()))
        .collect();

    desktop_layout(
        mode.heading(),
        false,
        html! {
            main class="form-card" {
                h1 { (mode.heading()) }

                @if let Some(n) = flash {
                    (notice(n))
                }

                form method="post" action=(mode.action()) {
                    (text_field("House Title", "title", &form.title, "text",
                        "Eg: 6 McMillan Street, Clayton South", true))
                    (text_field("Google Maps Link", "mapLink", &form.map_link, "text",
                        "Eg: https://www.google.com/maps/search/?api=1&query=...", true))
                    (text_field("Weekly Price ($)", "price", &form.price, "number", "Eg: 630", true))
                    (textarea_field("Short Description", "description", &form.description, 3,
                        "Eg: Affordable apartment close to public transport.", true))
                    (choice_field("Furnished", "furnished", &form.furnished, &[("yes", "Yes"), ("no", "No")]))
                    (text_field("Travel Time to Monash (minute)", "walkingToMonash",
                        &form.walking_to_monash, "text", "Eg: 6", true))
                    (text_field("Travel Time to a Bus Stop (minute)", "walkingToBusStop",
                        &form.walking_to_bus_stop, "text", "Eg: 7", true))
                    (text_field("House Source (URL)", "sourceURL", &form.source_url, "url",
                        "Eg: https://www.tenantapp.com.au/Rentals/ViewListing/3338295", true))
                    (text_field("House Image (URL)", "imageURL", &form.image_url, "url",
                        "Eg: https://example.com/photo.jpg", true))
                    (choice_field("Marker Color", "color", &form.color, &colors))
                    (textarea_field("Additional Details", "additionalDetails", &form.additional_details, 4,
                        "Eg:\nBedroom: 3\nShower: 2", false))

                    button type="submit" class="primary" { (mode.submit_label()) }
                }

                p style="text-align: center;" { a href="/" { "Back to Map" } }
            }
        },
    )
}
