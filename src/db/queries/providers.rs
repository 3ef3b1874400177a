use crate::models::{NewProvider, Provider};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::info;

fn provider_from_row(row: &Row) -> rusqlite::Result<Provider> {
    Ok(Provider {
        id: row.get(0)?,
        name: row.get(1)?,
        notes: row.get(2)?,
    })
}

pub fn list_providers(conn: &Connection) -> rusqlite::Result<Vec<Provider>> {
    let mut stmt = conn.prepare("SELECT id, name, notes FROM providers ORDER BY name, id")?;
    let providers = stmt
        .query_map([], provider_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(providers)
}

pub fn get_provider(conn: &Connection, id: i64) -> rusqlite::Result<Option<Provider>> {
    conn.query_row(
        "SELECT id, name, notes FROM providers WHERE id = ?",
        [id],
        provider_from_row,
    )
    .optional()
}

pub fn provider_exists(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM providers WHERE id = ?)",
        [id],
        |row| row.get(0),
    )
}

pub fn create_provider(conn: &Connection, provider: &NewProvider) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO providers (name, notes) VALUES (?, ?)",
        params![provider.name, provider.notes],
    )?;
    let id = conn.last_insert_rowid();
    info!(provider_id = id, name = %provider.name, "Created provider");
    Ok(id)
}
