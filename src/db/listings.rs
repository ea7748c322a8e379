use crate::domain::listing::{FlexNumber, Listing, ListingRecord, MarkerColor};
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Row};

const LISTING_COLUMNS: &str = r#"
    id, title, map_link, price, description, furnished,
    walking_to_monash, walking_to_bus_stop, source_url, image_url,
    lat, lon, color, additional_details, created_at, updated_at
"#;

impl ToSql for FlexNumber {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            FlexNumber::Number(n) => ToSqlOutput::from(*n),
            FlexNumber::Text(s) => ToSqlOutput::from(s.as_str()),
        })
    }
}

impl FromSql for FlexNumber {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(i) => Ok(FlexNumber::Number(i as f64)),
            ValueRef::Real(f) => Ok(FlexNumber::Number(f)),
            ValueRef::Text(_) => String::column_result(value).map(FlexNumber::Text),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

impl ToSql for MarkerColor {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for MarkerColor {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        // Rows written by older tools may carry other colours; draw them blue.
        value
            .as_str()
            .map(|s| MarkerColor::parse(s).unwrap_or_default())
    }
}

fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<Listing> {
    Ok(Listing {
        id: row.get("id")?,
        record: ListingRecord {
            title: row.get("title")?,
            map_link: row.get("map_link")?,
            price: row.get("price")?,
            description: row.get("description")?,
            furnished: row.get("furnished")?,
            walking_to_monash: row.get("walking_to_monash")?,
            walking_to_bus_stop: row.get("walking_to_bus_stop")?,
            source_url: row.get("source_url")?,
            image_url: row.get("image_url")?,
            lat: row.get("lat")?,
            lon: row.get("lon")?,
            color: row.get("color")?,
            additional_details: row.get("additional_details")?,
        },
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Every listing, oldest first.
pub fn all_listings(conn: &Connection) -> Result<Vec<Listing>, ServerError> {
    let mut stmt = conn.prepare(&format!("SELECT {LISTING_COLUMNS} FROM listings ORDER BY id"))?;
    let rows = stmt.query_map([], listing_from_row)?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub fn get_listing(conn: &Connection, id: i64) -> Result<Option<Listing>, ServerError> {
    conn.query_row(
        &format!("SELECT {LISTING_COLUMNS} FROM listings WHERE id = ?1"),
        params![id],
        listing_from_row,
    )
    .optional()
    .map_err(ServerError::from)
}

pub fn insert_listing(
    conn: &Connection,
    record: &ListingRecord,
    now: NaiveDateTime,
) -> Result<Listing, ServerError> {
    let id = insert_record(conn, record, now)?;
    Ok(Listing {
        id,
        record: record.clone(),
        created_at: now,
        updated_at: now,
    })
}

/// Replaces every contributor-controlled field. `None` when the id is unknown.
pub fn update_listing(
    conn: &Connection,
    id: i64,
    record: &ListingRecord,
    now: NaiveDateTime,
) -> Result<Option<Listing>, ServerError> {
    let changed = conn.execute(
        r#"
        UPDATE listings SET
            title = ?1, map_link = ?2, price = ?3, description = ?4, furnished = ?5,
            walking_to_monash = ?6, walking_to_bus_stop = ?7, source_url = ?8, image_url = ?9,
            lat = ?10, lon = ?11, color = ?12, additional_details = ?13, updated_at = ?14
        WHERE id = ?15
        "#,
        params![
            &record.title,
            &record.map_link,
            &record.price,
            &record.description,
            record.furnished,
            &record.walking_to_monash,
            &record.walking_to_bus_stop,
            &record.source_url,
            &record.image_url,
            record.lat,
            record.lon,
            record.color,
            &record.additional_details,
            now,
            id,
        ],
    )?;

    if changed == 0 {
        return Ok(None);
    }
    get_listing(conn, id)
}

/// Inserts all records in one transaction; either all land or none do.
pub fn insert_many(
    conn: &mut Connection,
    records: &[ListingRecord],
    now: NaiveDateTime,
) -> Result<usize, ServerError> {
    let tx = conn.transaction()?;
    for record in records {
        insert_record(&tx, record, now)?;
    }
    tx.commit()?;
    Ok(records.len())
}

fn insert_record(
    conn: &Connection,
    record: &ListingRecord,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    let mut stmt = conn.prepare_cached(
        r#"
        INSERT INTO listings (
            title, map_link, price, description, furnished,
            walking_to_monash, walking_to_bus_stop, source_url, image_url,
            lat, lon, color, additional_details, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
        "#,
    )?;
    stmt.execute(params![
        &record.title,
        &record.map_link,
        &record.price,
        &record.description,
        record.furnished,
        &record.walking_to_monash,
        &record.walking_to_bus_stop,
        &record.source_url,
        &record.image_url,
        record.lat,
        record.lon,
        record.color,
        &record.additional_details,
        now,
        now,
    ])?;
    Ok(conn.last_insert_rowid())
}
