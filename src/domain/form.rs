// src/domain/form.rs

use crate::domain::coords::extract_coordinates;
use crate::domain::listing::{FlexNumber, Listing, ListingRecord, MarkerColor};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Why a submission was refused. The message is shown to the contributor as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid Google Maps link. Please check the URL format.")]
    NoCoordinates,
    #[error("Please fill in {0}")]
    MissingField(&'static str),
    #[error("Weekly price must be a number of dollars, got {0:?}")]
    InvalidPrice(String),
    #[error("{0} must be a full link starting with http:// or https://")]
    InvalidUrl(&'static str),
}

/// Raw text of the add/edit form, exactly as posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingForm {
    pub title: String,
    pub map_link: String,
    pub price: String,
    pub description: String,
    /// "yes" or "no"
    pub furnished: String,
    pub walking_to_monash: String,
    pub walking_to_bus_stop: String,
    pub source_url: String,
    pub image_url: String,
    pub color: String,
    pub additional_details: String,
}

impl Default for ListingForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            map_link: String::new(),
            price: String::new(),
            description: String::new(),
            furnished: "yes".to_string(),
            walking_to_monash: String::new(),
            walking_to_bus_stop: String::new(),
            source_url: String::new(),
            image_url: String::new(),
            color: MarkerColor::default().as_str().to_string(),
            additional_details: String::new(),
        }
    }
}

impl ListingForm {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "title" => &mut form.title,
                "mapLink" => &mut form.map_link,
                "price" => &mut form.price,
                "description" => &mut form.description,
                "furnished" => &mut form.furnished,
                "walkingToMonash" => &mut form.walking_to_monash,
                "walkingToBusStop" => &mut form.walking_to_bus_stop,
                "sourceURL" => &mut form.source_url,
                "imageURL" => &mut form.image_url,
                "color" => &mut form.color,
                "additionalDetails" => &mut form.additional_details,
                _ => continue,
            };
            *slot = value.into();
        }
        form
    }

    /// Pre-fills the edit form from a stored listing.
    pub fn from_listing(listing: &Listing) -> Self {
        let r = &listing.record;
        Self {
            title: r.title.clone(),
            map_link: r.map_link.clone(),
            price: r.price.to_string(),
            description: r.description.clone(),
            furnished: if r.furnished { "yes" } else { "no" }.to_string(),
            walking_to_monash: r.walking_to_monash.to_string(),
            walking_to_bus_stop: r.walking_to_bus_stop.to_string(),
            source_url: r.source_url.clone(),
            image_url: r.image_url.clone(),
            color: r.color.as_str().to_string(),
            additional_details: r.additional_details.clone().unwrap_or_default(),
        }
    }

    pub fn into_draft(self) -> ListingDraft {
        ListingDraft {
            title: non_blank(self.title),
            map_link: non_blank(self.map_link),
            price: non_blank(self.price).map(FlexNumber::Text),
            description: non_blank(self.description),
            furnished: match self.furnished.trim() {
                "yes" => Some(true),
                "no" => Some(false),
                _ => None,
            },
            walking_to_monash: non_blank(self.walking_to_monash).map(FlexNumber::Text),
            walking_to_bus_stop: non_blank(self.walking_to_bus_stop).map(FlexNumber::Text),
            source_url: non_blank(self.source_url),
            image_url: non_blank(self.image_url),
            color: MarkerColor::parse(&self.color),
            additional_details: non_blank(self.additional_details),
        }
    }
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}

/// A listing submission before validation: the decoded form, a JSON API body,
/// or one document from a bulk import. Client-supplied `lat`/`lon` and ids are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub title: Option<String>,
    pub map_link: Option<String>,
    pub price: Option<FlexNumber>,
    pub description: Option<String>,
    pub furnished: Option<bool>,
    pub walking_to_monash: Option<FlexNumber>,
    pub walking_to_bus_stop: Option<FlexNumber>,
    #[serde(rename = "sourceURL")]
    pub source_url: Option<String>,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
    pub color: Option<MarkerColor>,
    pub additional_details: Option<String>,
}

impl ListingDraft {
    /// Full validation for contributor submissions. The price ends up numeric.
    pub fn validate(self) -> Result<ListingRecord, ValidationError> {
        self.build(true)
    }

    /// Bulk-import variant: same required fields and coordinate rules, but a
    /// legacy text price is stored untouched.
    pub fn validate_import(self) -> Result<ListingRecord, ValidationError> {
        self.build(false)
    }

    fn build(self, coerce_price: bool) -> Result<ListingRecord, ValidationError> {
        let point = self
            .map_link
            .as_deref()
            .and_then(extract_coordinates)
            .and_then(|raw| raw.to_point())
            .ok_or(ValidationError::NoCoordinates)?;

        if !point.is_in_range() {
            tracing::warn!(lat = point.lat, lon = point.lon, "coordinates outside the usual range");
        }

        let title = required_text(self.title, "title")?;
        let price = required_number(self.price, "price")?;
        let description = required_text(self.description, "description")?;
        let furnished = self.furnished.ok_or(ValidationError::MissingField("furnished"))?;
        let walking_to_monash = required_number(self.walking_to_monash, "walkingToMonash")?;
        let walking_to_bus_stop = required_number(self.walking_to_bus_stop, "walkingToBusStop")?;
        let source_url = required_text(self.source_url, "sourceURL")?;
        let image_url = required_text(self.image_url, "imageURL")?;

        let price = if coerce_price {
            match price.as_number() {
                Some(n) if n >= 0.0 => FlexNumber::Number(n),
                _ => return Err(ValidationError::InvalidPrice(price.to_string())),
            }
        } else {
            price
        };

        check_url(&source_url, "sourceURL")?;
        check_url(&image_url, "imageURL")?;

        Ok(ListingRecord {
            title,
            // `map_link` was present for the coordinates above.
            map_link: self.map_link.unwrap_or_default(),
            price,
            description,
            furnished,
            walking_to_monash,
            walking_to_bus_stop,
            source_url,
            image_url,
            lat: point.lat,
            lon: point.lon,
            color: self.color.unwrap_or_default(),
            additional_details: self.additional_details.and_then(non_blank),
        })
    }
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    value
        .and_then(non_blank)
        .ok_or(ValidationError::MissingField(field))
}

fn required_number(
    value: Option<FlexNumber>,
    field: &'static str,
) -> Result<FlexNumber, ValidationError> {
    value
        .filter(|v| !v.is_blank())
        .ok_or(ValidationError::MissingField(field))
}

fn check_url(value: &str, field: &'static str) -> Result<(), ValidationError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ValidationError::InvalidUrl(field)),
    }
}
