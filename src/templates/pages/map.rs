// templates/pages/map.rs

use crate::domain::campus::CAMPUSES;
use crate::domain::listing::Listing;
use crate::domain::sidebar::{SidebarEvent, SidebarState};
use crate::domain::view::{FurnishedFilter, SortKey};
use crate::errors::ServerError;
use crate::templates::components::{campus_popup, listing_popup, sidebar_item};
use crate::templates::desktop_layout;
use maud::{html, Markup, PreEscaped};
use serde::Serialize;

const DEFAULT_CENTER: [f64; 2] = [-37.9110995, 145.1366624];
const DEFAULT_ZOOM: u8 = 13;
const SELECTED_ZOOM: u8 = 15;

const MAP_SCRIPT: &str = r##"
(function () {
  var data = JSON.parse(document.getElementById("board-data").textContent);
  var map = L.map("map").setView(data.center, data.zoom);
  L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
    attribution: '&copy; <a href="https://www.openstreetmap.org/">OpenStreetMap</a> contributors'
  }).addTo(map);
  var colors = { blue: "#2563eb", yellow: "#ca8a04", campus: "#7c3aed" };
  var byId = {};
  data.markers.concat(data.campuses).forEach(function (m) {
    var marker = L.circleMarker([m.lat, m.lon], {
      radius: m.id === null ? 11 : 9,
      color: colors[m.color],
      fillOpacity: 0.85
    }).addTo(map).bindPopup(m.popup);
    if (m.id !== null) byId[m.id] = marker;
  });
  if (data.selected !== null && byId[data.selected]) byId[data.selected].openPopup();
})();
"##;

#[derive(Serialize)]
struct MarkerPayload {
    id: Option<i64>,
    lat: f64,
    lon: f64,
    color: &'static str,
    popup: String,
}

#[derive(Serialize)]
struct MapPayload {
    center: [f64; 2],
    zoom: u8,
    selected: Option<i64>,
    markers: Vec<MarkerPayload>,
    campuses: Vec<MarkerPayload>,
}

/// Marker data for the page script. Every listing gets a marker; the
/// sidebar filter never applies here.
fn map_payload(all: &[Listing], state: &SidebarState) -> Result<String, ServerError> {
    let selected = state
        .selected
        .and_then(|id| all.iter().find(|l| l.id == id));

    let payload = MapPayload {
        center: selected
            .map(|l| [l.record.lat, l.record.lon])
            .unwrap_or(DEFAULT_CENTER),
        zoom: if selected.is_some() { SELECTED_ZOOM } else { DEFAULT_ZOOM },
        selected: selected.map(|l| l.id),
        markers: all
            .iter()
            .map(|l| MarkerPayload {
                id: Some(l.id),
                lat: l.record.lat,
                lon: l.record.lon,
                color: l.record.color.as_str(),
                popup: listing_popup(l).into_string(),
            })
            .collect(),
        campuses: CAMPUSES
            .iter()
            .map(|c| MarkerPayload {
                id: None,
                lat: c.lat,
                lon: c.lon,
                color: "campus",
                popup: campus_popup(c).into_string(),
            })
            .collect(),
    };

    let json = serde_json::to_string(&payload).map_err(|e| {
        tracing::error!(error = %e, "failed to encode map data");
        ServerError::InternalError
    })?;
    // `<` only occurs inside JSON strings, so this keeps `</script>` out of the page.
    Ok(json.replace('<', "\\u003c"))
}

fn sidebar(view: &[&Listing], total: usize, state: &SidebarState) -> Markup {
    let sort_options = [
        (SortKey::Unsorted, "Sort by"),
        (SortKey::Price, "Price"),
        (SortKey::Monash, "To Monash"),
    ];
    let furnished_options = [
        (FurnishedFilter::All, "All"),
        (FurnishedFilter::Furnished, "Furnished"),
        (FurnishedFilter::Unfurnished, "Unfurnished"),
    ];

    html! {
        aside class=(if state.open { "sidebar" } else { "sidebar closed" }) {
            a class="toggle" href=(state.href_after(SidebarEvent::ToggleOpen)) {
                (if state.open { "←" } else { "→" })
            }
            @if state.open {
                form method="get" action="/" {
                    input type="search" name="q" placeholder="Search house name..." value=(state.params.query);
                    div style="display: flex; gap: 0.5rem;" {
                        select name="sort" onchange="this.form.submit()" {
                            @for (key, label) in &sort_options {
                                option value=(key.as_str()) selected[*key == state.params.sort] { (label) }
                            }
                        }
                        select name="furnished" onchange="this.form.submit()" {
                            @for (filter, label) in &furnished_options {
                                option value=(filter.as_str()) selected[*filter == state.params.furnished] { (label) }
                            }
                        }
                    }
                    button type="submit" { "Search" }
                }
                p class="meta" style="padding: 0 0.75rem;" {
                    "Showing " (view.len()) " of " (total) " listings"
                    @if state.selected.is_some() {
                        " · " a href=(state.href_after(SidebarEvent::ClearSelection)) { "clear selection" }
                    }
                }
                ul {
                    @for listing in view {
                        (sidebar_item(
                            listing,
                            &state.href_after(SidebarEvent::Select(listing.id)),
                            state.selected == Some(listing.id),
                        ))
                    }
                }
            }
        }
    }
}

/// The board: sidebar list (derived view) next to a map of every listing.
pub fn map_page(all: &[Listing], view: &[&Listing], state: &SidebarState) -> Result<Markup, ServerError> {
    let payload = map_payload(all, state)?;

    Ok(desktop_layout(
        "House Board",
        true,
        html! {
            main class="board" {
                (sidebar(view, all.len(), state))
                div id="map" {}
            }
            script type="application/json" id="board-data" { (PreEscaped(payload)) }
            script { (PreEscaped(MAP_SCRIPT)) }
        },
    ))
}
