// src/domain/view.rs

use crate::domain::listing::{FlexNumber, Listing};
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static FIRST_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(\.[0-9]+)?").expect("valid decimal pattern"));

/// Sidebar sort selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep the collection's own order.
    #[default]
    Unsorted,
    Price,
    Monash,
}

impl SortKey {
    /// Unrecognised values fall back to `Unsorted`.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "price" => SortKey::Price,
            "monash" => SortKey::Monash,
            _ => SortKey::Unsorted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Unsorted => "",
            SortKey::Price => "price",
            SortKey::Monash => "monash",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FurnishedFilter {
    #[default]
    All,
    Furnished,
    Unfurnished,
}

impl FurnishedFilter {
    /// Unrecognised values fall back to `All`.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "furnished" => FurnishedFilter::Furnished,
            "unfurnished" => FurnishedFilter::Unfurnished,
            _ => FurnishedFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FurnishedFilter::All => "all",
            FurnishedFilter::Furnished => "furnished",
            FurnishedFilter::Unfurnished => "unfurnished",
        }
    }

    fn keeps(&self, furnished: bool) -> bool {
        match self {
            FurnishedFilter::All => true,
            FurnishedFilter::Furnished => furnished,
            FurnishedFilter::Unfurnished => !furnished,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewParams {
    pub query: String,
    pub sort: SortKey,
    pub furnished: FurnishedFilter,
}

/// Builds the sidebar's list: title search, then furnished filter, then a
/// stable sort. The input is never reordered; the result borrows from it.
pub fn derive_view<'a>(listings: &'a [Listing], params: &ViewParams) -> Vec<&'a Listing> {
    let needle = params.query.to_lowercase();

    let mut view: Vec<&Listing> = listings
        .iter()
        .filter(|l| needle.is_empty() || l.record.title.to_lowercase().contains(&needle))
        .filter(|l| params.furnished.keeps(l.record.furnished))
        .collect();

    match params.sort {
        SortKey::Unsorted => {}
        SortKey::Price => {
            view.sort_by(|a, b| price_sort_key(&a.record.price).total_cmp(&price_sort_key(&b.record.price)))
        }
        SortKey::Monash => view.sort_by(|a, b| {
            cmp_minutes(
                a.record.walking_to_monash.as_number(),
                b.record.walking_to_monash.as_number(),
            )
        }),
    }

    view
}

/// Numeric price used for ordering. Text prices use their first embedded
/// decimal number (`"$700"` -> 700, `"550 / week"` -> 550); anything without
/// one sorts as 0.
pub fn price_sort_key(price: &FlexNumber) -> f64 {
    match price {
        FlexNumber::Number(n) if n.is_finite() => *n,
        FlexNumber::Number(_) => 0.0,
        FlexNumber::Text(s) => FIRST_DECIMAL
            .find(s)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0),
    }
}

// Non-numeric walking times go after every numeric one.
fn cmp_minutes(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
