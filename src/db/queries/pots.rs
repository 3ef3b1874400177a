use crate::db::queries::get_parsed;
use crate::models::{NewPot, Pot};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::info;

const POT_COLUMNS: &str =
    "id, provider_id, name, currency, status, notes, plan_number, scheme_number";

fn pot_from_row(row: &Row) -> rusqlite::Result<Pot> {
    Ok(Pot {
        id: row.get(0)?,
        provider_id: row.get(1)?,
        name: row.get(2)?,
        currency: row.get(3)?,
        status: get_parsed(row, 4)?,
        notes: row.get(5)?,
        plan_number: row.get(6)?,
        scheme_number: row.get(7)?,
    })
}

pub fn list_pots(conn: &Connection) -> rusqlite::Result<Vec<Pot>> {
    let mut stmt = conn.prepare(&format!("SELECT {POT_COLUMNS} FROM pots ORDER BY name, id"))?;
    let pots = stmt
        .query_map([], pot_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(pots)
}

pub fn get_pot(conn: &Connection, id: i64) -> rusqlite::Result<Option<Pot>> {
    conn.query_row(
        &format!("SELECT {POT_COLUMNS} FROM pots WHERE id = ?"),
        [id],
        pot_from_row,
    )
    .optional()
}

pub fn pot_exists(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM pots WHERE id = ?)",
        [id],
        |row| row.get(0),
    )
}

pub fn create_pot(conn: &Connection, pot: &NewPot) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO pots (provider_id, name, currency, status, notes, plan_number, scheme_number)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
        params![
            pot.provider_id,
            pot.name,
            pot.currency,
            pot.status.as_str(),
            pot.notes,
            pot.plan_number,
            pot.scheme_number,
        ],
    )?;
    let id = conn.last_insert_rowid();
    info!(pot_id = id, name = %pot.name, "Created pot");
    Ok(id)
}
