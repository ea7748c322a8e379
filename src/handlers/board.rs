use crate::db::listings::all_listings;
use crate::db::Database;
use crate::domain::sidebar::SidebarState;
use crate::domain::view::derive_view;
use crate::errors::ResultResp;
use crate::responses::html_response;
use crate::templates::pages::map_page;
use astra::Request;

/// GET /: every listing on the map, the sidebar's derived view beside it.
pub fn show(req: &Request, db: &Database) -> ResultResp {
    let state = SidebarState::from_query(req.uri().query().unwrap_or(""));
    let listings = db.with_conn(|conn| all_listings(conn))?;
    let view = derive_view(&listings, &state.params);

    html_response(map_page(&listings, &view, &state)?)
}
