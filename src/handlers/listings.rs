use crate::db::listings::{get_listing, insert_listing, update_listing};
use crate::db::Database;
use crate::domain::form::ListingForm;
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, html_with_status, see_other};
use crate::router::{parse_form, read_body};
use crate::templates::pages::{listing_form_page, FormMode};
use crate::templates::Notice;
use astra::Request;
use chrono::Utc;

pub fn new_form() -> ResultResp {
    html_response(listing_form_page(FormMode::Add, &ListingForm::default(), None))
}

pub fn edit_form(id: i64, db: &Database) -> ResultResp {
    let listing = db
        .with_conn(|conn| get_listing(conn, id))?
        .ok_or(ServerError::NotFound)?;

    html_response(listing_form_page(
        FormMode::Edit(id),
        &ListingForm::from_listing(&listing),
        None,
    ))
}

pub fn create(req: Request, db: &Database) -> ResultResp {
    submit(FormMode::Add, req, db)
}

pub fn update(id: i64, req: Request, db: &Database) -> ResultResp {
    // Unknown ids get a 404 before the body is even looked at.
    if db.with_conn(|conn| get_listing(conn, id))?.is_none() {
        return Err(ServerError::NotFound);
    }
    submit(FormMode::Edit(id), req, db)
}

/// Shared POST path: validate, write, then back to the map. Problems re-render
/// the form with what the contributor typed so nothing is lost.
fn submit(mode: FormMode, req: Request, db: &Database) -> ResultResp {
    let form = ListingForm::from_pairs(parse_form(&read_body(req)?));

    let record = match form.clone().into_draft().validate() {
        Ok(record) => record,
        Err(err) => {
            tracing::warn!(error = %err, action = %mode.action(), "listing rejected");
            let flash = Notice(err.to_string());
            return html_with_status(400, listing_form_page(mode, &form, Some(&flash)));
        }
    };

    let now = Utc::now().naive_utc();
    let written = db.with_conn(|conn| match mode {
        FormMode::Add => insert_listing(conn, &record, now).map(Some),
        FormMode::Edit(id) => update_listing(conn, id, &record, now),
    });

    match written {
        Ok(Some(listing)) => {
            tracing::info!(id = listing.id, title = %listing.record.title, action = %mode.action(), "listing saved");
            match mode {
                FormMode::Add => see_other("/"),
                FormMode::Edit(id) => see_other(&format!("/?selected={id}")),
            }
        }
        Ok(None) => Err(ServerError::NotFound),
        Err(err) => {
            tracing::error!(error = %err, action = %mode.action(), "failed to save listing");
            let flash = Notice(mode.failure_message().to_string());
            html_with_status(500, listing_form_page(mode, &form, Some(&flash)))
        }
    }
}
