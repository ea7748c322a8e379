// src/domain/sidebar.rs

use crate::domain::view::{FurnishedFilter, SortKey, ViewParams};
use url::form_urlencoded;

/// Everything the map page's sidebar remembers between requests. It lives in
/// the page's query string; each link on the page carries the next state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    pub open: bool,
    pub params: ViewParams,
    pub selected: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEvent {
    ToggleOpen,
    Search(String),
    Sort(SortKey),
    Furnished(FurnishedFilter),
    Select(i64),
    ClearSelection,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            open: true,
            params: ViewParams::default(),
            selected: None,
        }
    }
}

impl SidebarState {
    pub fn apply(mut self, event: SidebarEvent) -> Self {
        match event {
            SidebarEvent::ToggleOpen => self.open = !self.open,
            SidebarEvent::Search(query) => self.params.query = query,
            SidebarEvent::Sort(sort) => self.params.sort = sort,
            SidebarEvent::Furnished(filter) => self.params.furnished = filter,
            SidebarEvent::Select(id) => self.selected = Some(id),
            SidebarEvent::ClearSelection => self.selected = None,
        }
        self
    }

    /// Reads `q`, `sort`, `furnished`, `open` and `selected`; anything missing
    /// or unparseable keeps its default.
    pub fn from_query(query: &str) -> Self {
        form_urlencoded::parse(query.as_bytes()).fold(Self::default(), |state, (key, value)| {
            match key.as_ref() {
                "q" => state.apply(SidebarEvent::Search(value.into_owned())),
                "sort" => state.apply(SidebarEvent::Sort(SortKey::parse(&value))),
                "furnished" => state.apply(SidebarEvent::Furnished(FurnishedFilter::parse(&value))),
                "open" => Self {
                    open: value != "0",
                    ..state
                },
                "selected" => match value.parse::<i64>() {
                    Ok(id) => state.apply(SidebarEvent::Select(id)),
                    Err(_) => state,
                },
                _ => state,
            }
        })
    }

    /// Inverse of `from_query`; default values are left out.
    pub fn to_query(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        if !self.params.query.is_empty() {
            out.append_pair("q", &self.params.query);
        }
        if self.params.sort != SortKey::Unsorted {
            out.append_pair("sort", self.params.sort.as_str());
        }
        if self.params.furnished != FurnishedFilter::All {
            out.append_pair("furnished", self.params.furnished.as_str());
        }
        if !self.open {
            out.append_pair("open", "0");
        }
        if let Some(id) = self.selected {
            out.append_pair("selected", &id.to_string());
        }
        out.finish()
    }

    /// Link to the map page after `event`.
    pub fn href_after(&self, event: SidebarEvent) -> String {
        let query = self.clone().apply(event).to_query();
        if query.is_empty() {
            "/".to_string()
        } else {
            format!("/?{query}")
        }
    }
}
