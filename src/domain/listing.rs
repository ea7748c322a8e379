// src/domain/listing.rs

use crate::domain::details::{parse_details, Detail};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value entered as "minutes" or "dollars" that may arrive as a JSON number
/// or as free text (legacy imports carry things like `"$700"` or `"12"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlexNumber {
    Number(f64),
    Text(String),
}

impl FlexNumber {
    /// Plain numeric coercion: numbers as-is, text only if the whole trimmed
    /// string is a decimal number. No digit extraction.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FlexNumber::Number(n) => Some(*n),
            FlexNumber::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, FlexNumber::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for FlexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlexNumber::Number(n) => write!(f, "{n}"),
            FlexNumber::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for FlexNumber {
    fn from(n: f64) -> Self {
        FlexNumber::Number(n)
    }
}

impl From<&str> for FlexNumber {
    fn from(s: &str) -> Self {
        FlexNumber::Text(s.to_string())
    }
}

/// Marker colour on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    #[default]
    Blue,
    Yellow,
}

impl MarkerColor {
    pub const ALL: [MarkerColor; 2] = [MarkerColor::Blue, MarkerColor::Yellow];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blue" => Some(MarkerColor::Blue),
            "yellow" => Some(MarkerColor::Yellow),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerColor::Blue => "blue",
            MarkerColor::Yellow => "yellow",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarkerColor::Blue => "Blue",
            MarkerColor::Yellow => "Yellow",
        }
    }
}

/// Every field of a listing the contributor controls, plus the coordinates
/// derived from `map_link`. This is what gets written on create and on
/// full-replace updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub title: String,
    pub map_link: String,
    pub price: FlexNumber,
    pub description: String,
    pub furnished: bool,
    pub walking_to_monash: FlexNumber,
    pub walking_to_bus_stop: FlexNumber,
    #[serde(rename = "sourceURL")]
    pub source_url: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub color: MarkerColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_details: Option<String>,
}

impl ListingRecord {
    pub fn details(&self) -> Vec<Detail> {
        self.additional_details
            .as_deref()
            .map(parse_details)
            .unwrap_or_default()
    }
}

/// A stored listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: i64,
    #[serde(flatten)]
    pub record: ListingRecord,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
